//! Vertex/index buffers and vertex layout description

use std::fmt;

/// Data type of a single vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderDataType {
    /// `float`
    Float,
    /// `vec2`
    Float2,
    /// `vec3`
    Float3,
    /// `vec4`
    Float4,
    /// `mat3`
    Mat3,
    /// `mat4`
    Mat4,
    /// `int`
    Int,
    /// `ivec2`
    Int2,
    /// `ivec3`
    Int3,
    /// `ivec4`
    Int4,
    /// `bool`
    Bool,
}

impl ShaderDataType {
    /// Size in bytes
    pub const fn size(self) -> u32 {
        match self {
            Self::Float | Self::Int => 4,
            Self::Float2 | Self::Int2 => 4 * 2,
            Self::Float3 | Self::Int3 => 4 * 3,
            Self::Float4 | Self::Int4 => 4 * 4,
            Self::Mat3 => 4 * 3 * 3,
            Self::Mat4 => 4 * 4 * 4,
            Self::Bool => 1,
        }
    }

    /// Number of scalar components
    pub const fn component_count(self) -> u32 {
        match self {
            Self::Float | Self::Int | Self::Bool => 1,
            Self::Float2 | Self::Int2 => 2,
            Self::Float3 | Self::Int3 => 3,
            Self::Float4 | Self::Int4 => 4,
            Self::Mat3 => 3 * 3,
            Self::Mat4 => 4 * 4,
        }
    }

    /// Whether the components are integers (bools included)
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Int2 | Self::Int3 | Self::Int4 | Self::Bool
        )
    }
}

/// One named attribute within a [`BufferLayout`]
#[derive(Debug, Clone, PartialEq)]
pub struct BufferElement {
    /// Attribute name, matching the shader input
    pub name: String,
    /// Attribute data type
    pub data_type: ShaderDataType,
    /// Size in bytes
    pub size: u32,
    /// Byte offset within a vertex; filled in by [`BufferLayout::new`]
    pub offset: u32,
    /// Whether integer data is normalized to [0, 1]
    pub normalized: bool,
}

impl BufferElement {
    /// Create an element; its offset is assigned when placed in a layout
    pub fn new(data_type: ShaderDataType, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type,
            size: data_type.size(),
            offset: 0,
            normalized: false,
        }
    }

    /// Mark the element as normalized
    pub fn normalized(mut self) -> Self {
        self.normalized = true;
        self
    }

    /// Number of scalar components
    pub fn component_count(&self) -> u32 {
        self.data_type.component_count()
    }
}

/// Ordered attribute list with computed offsets and stride
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BufferLayout {
    elements: Vec<BufferElement>,
    stride: u32,
}

impl BufferLayout {
    /// Build a layout; elements are packed tightly in the given order
    pub fn new(elements: Vec<BufferElement>) -> Self {
        let mut elements = elements;
        let mut offset = 0;
        for element in &mut elements {
            element.offset = offset;
            offset += element.size;
        }
        Self {
            elements,
            stride: offset,
        }
    }

    /// Bytes between consecutive vertices
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Elements in declaration order
    pub fn elements(&self) -> &[BufferElement] {
        &self.elements
    }

    /// True when no attributes were declared
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> IntoIterator for &'a BufferLayout {
    type Item = &'a BufferElement;
    type IntoIter = std::slice::Iter<'a, BufferElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Display for BufferLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:?}@{}", element.name, element.data_type, element.offset)?;
        }
        write!(f, "] stride {}", self.stride)
    }
}

/// GPU buffer holding vertex data
pub trait VertexBuffer {
    /// Bind for subsequent attribute setup
    fn bind(&self);
    /// Unbind
    fn unbind(&self);
    /// Attribute layout of the stored vertices
    fn layout(&self) -> &BufferLayout;
    /// Describe the stored vertices; must be set before adding to a vertex array
    fn set_layout(&mut self, layout: BufferLayout);
}

/// GPU buffer holding `u32` indices
pub trait IndexBuffer {
    /// Bind for drawing
    fn bind(&self);
    /// Unbind
    fn unbind(&self);
    /// Number of indices
    fn count(&self) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_sizes() {
        assert_eq!(ShaderDataType::Float3.size(), 12);
        assert_eq!(ShaderDataType::Float4.size(), 16);
        assert_eq!(ShaderDataType::Mat4.size(), 64);
        assert_eq!(ShaderDataType::Bool.size(), 1);
        assert_eq!(ShaderDataType::Mat3.component_count(), 9);
        assert!(ShaderDataType::Int2.is_integer());
        assert!(!ShaderDataType::Float.is_integer());
    }

    #[test]
    fn test_layout_offsets_and_stride() {
        let layout = BufferLayout::new(vec![
            BufferElement::new(ShaderDataType::Float3, "a_Position"),
            BufferElement::new(ShaderDataType::Float4, "a_Color"),
            BufferElement::new(ShaderDataType::Float2, "a_TexCoord"),
        ]);

        let offsets: Vec<u32> = layout.elements().iter().map(|e| e.offset).collect();
        assert_eq!(offsets, vec![0, 12, 28]);
        assert_eq!(layout.stride(), 36);
        assert!(!layout.is_empty());
    }

    #[test]
    fn test_default_layout_is_empty() {
        let layout = BufferLayout::default();
        assert!(layout.is_empty());
        assert_eq!(layout.stride(), 0);
    }

    #[test]
    fn test_layout_display() {
        let layout = BufferLayout::new(vec![BufferElement::new(ShaderDataType::Float3, "a_Position")]);
        assert_eq!(layout.to_string(), "[a_Position: Float3@0] stride 12");
    }
}
