use crate::foundation::math::{mat3_to_cols, mat4_to_cols, Mat3, Mat4, Vec2, Vec3, Vec4};
use crate::render::shader::{build_program, ProgramBuilder};
use crate::render::{Shader, ShaderError, ShaderSources, ShaderStage};
use crate::{engine_info, engine_warn};
use glow::HasContext;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

struct GlProgramBuilder<'a> {
    gl: &'a glow::Context,
}

impl ProgramBuilder for GlProgramBuilder<'_> {
    type Stage = glow::Shader;
    type Program = glow::Program;

    fn compile_stage(&self, stage: ShaderStage, source: &str) -> Result<glow::Shader, String> {
        let kind = match stage {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        };
        unsafe {
            let shader = self.gl.create_shader(kind)?;
            self.gl.shader_source(shader, source);
            self.gl.compile_shader(shader);
            if self.gl.get_shader_compile_status(shader) {
                Ok(shader)
            } else {
                let log = self.gl.get_shader_info_log(shader);
                self.gl.delete_shader(shader);
                Err(log)
            }
        }
    }

    fn link(&self, stages: &[glow::Shader]) -> Result<glow::Program, String> {
        unsafe {
            let program = self.gl.create_program()?;
            for &stage in stages {
                self.gl.attach_shader(program, stage);
            }
            self.gl.link_program(program);
            if !self.gl.get_program_link_status(program) {
                let log = self.gl.get_program_info_log(program);
                self.gl.delete_program(program);
                return Err(log);
            }
            for &stage in stages {
                self.gl.detach_shader(program, stage);
            }
            Ok(program)
        }
    }

    fn delete_stage(&self, stage: glow::Shader) {
        unsafe { self.gl.delete_shader(stage) }
    }
}

/// Linked GL program with a per-name uniform location cache
pub struct GlShader {
    gl: Rc<glow::Context>,
    program: glow::Program,
    name: String,
    locations: RefCell<HashMap<String, Option<glow::UniformLocation>>>,
}

impl GlShader {
    /// Compile and link `sources`
    pub fn new(gl: Rc<glow::Context>, name: &str, sources: &ShaderSources) -> Result<Self, ShaderError> {
        let program = build_program(&GlProgramBuilder { gl: &gl }, name, sources)?;
        engine_info!("Shader '{}' linked", name);

        Ok(Self {
            gl,
            program,
            name: name.to_string(),
            locations: RefCell::new(HashMap::new()),
        })
    }

    fn location(&self, uniform: &str) -> Option<glow::UniformLocation> {
        if let Some(cached) = self.locations.borrow().get(uniform) {
            return cached.clone();
        }

        let location = unsafe { self.gl.get_uniform_location(self.program, uniform) };
        if location.is_none() {
            engine_warn!("Shader '{}': uniform '{}' not found", self.name, uniform);
        }
        self.locations
            .borrow_mut()
            .insert(uniform.to_string(), location.clone());
        location
    }
}

impl Shader for GlShader {
    fn name(&self) -> &str {
        &self.name
    }

    fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.program)) }
    }

    fn unbind(&self) {
        unsafe { self.gl.use_program(None) }
    }

    fn upload_uniform_int(&self, name: &str, value: i32) {
        let location = self.location(name);
        unsafe { self.gl.uniform_1_i32(location.as_ref(), value) }
    }

    fn upload_uniform_float(&self, name: &str, value: f32) {
        let location = self.location(name);
        unsafe { self.gl.uniform_1_f32(location.as_ref(), value) }
    }

    fn upload_uniform_float2(&self, name: &str, value: Vec2) {
        let location = self.location(name);
        unsafe { self.gl.uniform_2_f32(location.as_ref(), value.x, value.y) }
    }

    fn upload_uniform_float3(&self, name: &str, value: Vec3) {
        let location = self.location(name);
        unsafe { self.gl.uniform_3_f32(location.as_ref(), value.x, value.y, value.z) }
    }

    fn upload_uniform_float4(&self, name: &str, value: Vec4) {
        let location = self.location(name);
        unsafe {
            self.gl
                .uniform_4_f32(location.as_ref(), value.x, value.y, value.z, value.w);
        }
    }

    fn upload_uniform_mat3(&self, name: &str, value: &Mat3) {
        let location = self.location(name);
        unsafe {
            self.gl
                .uniform_matrix_3_f32_slice(location.as_ref(), false, &mat3_to_cols(value));
        }
    }

    fn upload_uniform_mat4(&self, name: &str, value: &Mat4) {
        let location = self.location(name);
        unsafe {
            self.gl
                .uniform_matrix_4_f32_slice(location.as_ref(), false, &mat4_to_cols(value));
        }
    }
}

impl Drop for GlShader {
    fn drop(&mut self) {
        unsafe { self.gl.delete_program(self.program) }
    }
}
