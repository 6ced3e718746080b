//! Shader programs
//!
//! A [`Shader`] is a linked GPU program plus name-addressed uniform uploads.
//! Sources come either as separate vertex/fragment strings or as one file
//! split into sections by `#type <stage>` lines:
//!
//! ```glsl
//! #type vertex
//! #version 330 core
//! ...
//! #type fragment
//! #version 330 core
//! ...
//! ```
//!
//! Program construction goes through [`ProgramBuilder`] so the
//! compile → link → cleanup sequence is shared by every backend. Any failure
//! releases every object created so far; a failed shader never leaves a
//! partially built program behind.

use crate::foundation::math::{Mat3, Mat4, Vec2, Vec3, Vec4};
use crate::engine_error;
use std::fmt;
use thiserror::Error;

/// Pipeline stage of a shader source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex stage
    Vertex,
    /// Fragment stage
    Fragment,
}

impl ShaderStage {
    /// Parse a `#type` tag; `pixel` is accepted for the fragment stage
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "vertex" => Some(Self::Vertex),
            "fragment" | "pixel" => Some(Self::Fragment),
            _ => None,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// Shader build errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShaderError {
    /// A stage failed to compile
    #[error("Shader '{name}': {stage} stage failed to compile:\n{log}")]
    Compile {
        /// Shader name
        name: String,
        /// Failing stage
        stage: ShaderStage,
        /// Driver info log
        log: String,
    },

    /// The program failed to link
    #[error("Shader '{name}': link failed:\n{log}")]
    Link {
        /// Shader name
        name: String,
        /// Driver info log
        log: String,
    },

    /// A combined source had an unknown `#type` tag
    #[error("Shader '{name}': unknown shader type '{tag}'")]
    UnknownStage {
        /// Shader name
        name: String,
        /// Offending tag
        tag: String,
    },

    /// A required stage was missing from the sources
    #[error("Shader '{name}': missing {stage} stage")]
    MissingStage {
        /// Shader name
        name: String,
        /// Missing stage
        stage: ShaderStage,
    },

    /// The backend could not allocate a shader object
    #[error("Shader '{name}': {message}")]
    Backend {
        /// Shader name
        name: String,
        /// Backend message
        message: String,
    },
}

/// Vertex and fragment sources of one program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    /// Vertex stage source
    pub vertex: String,
    /// Fragment stage source
    pub fragment: String,
}

impl ShaderSources {
    /// Sources from two separate strings
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Split a combined source on `#type <stage>` lines
    ///
    /// Text before the first `#type` line is ignored. A later section for the
    /// same stage replaces an earlier one.
    pub fn parse(name: &str, source: &str) -> Result<Self, ShaderError> {
        const TYPE_TOKEN: &str = "#type";

        let mut vertex = None;
        let mut fragment = None;
        let mut current: Option<(ShaderStage, String)> = None;

        for line in source.lines() {
            if let Some(rest) = line.trim_start().strip_prefix(TYPE_TOKEN) {
                let tag = rest.trim();
                let stage = ShaderStage::from_tag(tag).ok_or_else(|| ShaderError::UnknownStage {
                    name: name.to_string(),
                    tag: tag.to_string(),
                })?;
                if let Some((stage, body)) = current.take() {
                    store(stage, body, &mut vertex, &mut fragment);
                }
                current = Some((stage, String::new()));
            } else if let Some((_, body)) = current.as_mut() {
                body.push_str(line);
                body.push('\n');
            }
        }
        if let Some((stage, body)) = current {
            store(stage, body, &mut vertex, &mut fragment);
        }

        let missing = |stage| ShaderError::MissingStage {
            name: name.to_string(),
            stage,
        };
        Ok(Self {
            vertex: vertex.ok_or_else(|| missing(ShaderStage::Vertex))?,
            fragment: fragment.ok_or_else(|| missing(ShaderStage::Fragment))?,
        })
    }

    /// Stages in compile order
    pub fn stages(&self) -> [(ShaderStage, &str); 2] {
        [
            (ShaderStage::Vertex, self.vertex.as_str()),
            (ShaderStage::Fragment, self.fragment.as_str()),
        ]
    }
}

fn store(stage: ShaderStage, body: String, vertex: &mut Option<String>, fragment: &mut Option<String>) {
    match stage {
        ShaderStage::Vertex => *vertex = Some(body),
        ShaderStage::Fragment => *fragment = Some(body),
    }
}

/// Linked shader program with uniform uploads by name
///
/// Uploads go to the currently bound program; call [`bind`](Self::bind)
/// first. Unknown uniform names are reported once and otherwise ignored.
pub trait Shader {
    /// Program name, used in log messages
    fn name(&self) -> &str;
    /// Make this the active program
    fn bind(&self);
    /// Deactivate any program
    fn unbind(&self);
    /// Upload an `int` uniform
    fn upload_uniform_int(&self, name: &str, value: i32);
    /// Upload a `float` uniform
    fn upload_uniform_float(&self, name: &str, value: f32);
    /// Upload a `vec2` uniform
    fn upload_uniform_float2(&self, name: &str, value: Vec2);
    /// Upload a `vec3` uniform
    fn upload_uniform_float3(&self, name: &str, value: Vec3);
    /// Upload a `vec4` uniform
    fn upload_uniform_float4(&self, name: &str, value: Vec4);
    /// Upload a `mat3` uniform
    fn upload_uniform_mat3(&self, name: &str, value: &Mat3);
    /// Upload a `mat4` uniform
    fn upload_uniform_mat4(&self, name: &str, value: &Mat4);
}

/// Backend primitives needed to build a program
pub trait ProgramBuilder {
    /// Compiled stage handle
    type Stage;
    /// Linked program handle
    type Program;

    /// Compile one stage; on failure the stage object is already released and
    /// the info log is returned
    fn compile_stage(&self, stage: ShaderStage, source: &str) -> Result<Self::Stage, String>;

    /// Link compiled stages; on failure the program object is already
    /// released and the info log is returned
    fn link(&self, stages: &[Self::Stage]) -> Result<Self::Program, String>;

    /// Release a stage object
    fn delete_stage(&self, stage: Self::Stage);
}

/// Compile every stage and link them into a program
///
/// Stage objects are released whether or not linking succeeds.
pub fn build_program<B: ProgramBuilder>(
    builder: &B,
    name: &str,
    sources: &ShaderSources,
) -> Result<B::Program, ShaderError> {
    let mut compiled = Vec::with_capacity(2);
    for (stage, source) in sources.stages() {
        match builder.compile_stage(stage, source) {
            Ok(handle) => compiled.push(handle),
            Err(log) => {
                for handle in compiled {
                    builder.delete_stage(handle);
                }
                engine_error!("Shader '{}': {} compilation failure:\n{}", name, stage, log);
                return Err(ShaderError::Compile {
                    name: name.to_string(),
                    stage,
                    log,
                });
            }
        }
    }

    let linked = builder.link(&compiled);
    for handle in compiled {
        builder.delete_stage(handle);
    }

    linked.map_err(|log| {
        engine_error!("Shader '{}': link failure:\n{}", name, log);
        ShaderError::Link {
            name: name.to_string(),
            log,
        }
    })
}
