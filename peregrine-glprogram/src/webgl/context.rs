use web_sys::WebGlRenderingContext;
use crate::util::message::Message;

/* What the driver reports for one active uniform or attribute */
#[derive(Clone,Debug,PartialEq)]
pub struct ActiveInfo {
    pub name: String,
    pub type_code: u32,
    pub size: i32
}

/// The GL entry points the program pipeline needs. Constants (shader kinds, targets, data
/// types) are the `WebGlRenderingContext` ones whatever the backend.
pub trait GlContext {
    type Shader: Clone;
    type Program: Clone;
    type UniformLocation: Clone;
    type Buffer;
    type Texture;

    fn create_shader(&self, shader_type: u32) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compiled(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;
    fn delete_shader(&self, shader: &Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_linked(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn delete_program(&self, program: &Self::Program);
    fn use_program(&self, program: Option<&Self::Program>);

    fn active_uniform_count(&self, program: &Self::Program) -> u32;
    fn active_attribute_count(&self, program: &Self::Program) -> u32;
    fn active_uniform(&self, program: &Self::Program, index: u32) -> Option<ActiveInfo>;
    fn active_attribute(&self, program: &Self::Program, index: u32) -> Option<ActiveInfo>;
    fn uniform_location(&self, program: &Self::Program, name: &str) -> Option<Self::UniformLocation>;
    fn attrib_location(&self, program: &Self::Program, name: &str) -> i32;

    fn uniform1i(&self, location: &Self::UniformLocation, value: i32);
    fn uniform1f(&self, location: &Self::UniformLocation, value: f32);
    fn uniform1iv(&self, location: &Self::UniformLocation, values: &[i32]);
    fn uniform2iv(&self, location: &Self::UniformLocation, values: &[i32]);
    fn uniform3iv(&self, location: &Self::UniformLocation, values: &[i32]);
    fn uniform4iv(&self, location: &Self::UniformLocation, values: &[i32]);
    fn uniform1fv(&self, location: &Self::UniformLocation, values: &[f32]);
    fn uniform2fv(&self, location: &Self::UniformLocation, values: &[f32]);
    fn uniform3fv(&self, location: &Self::UniformLocation, values: &[f32]);
    fn uniform4fv(&self, location: &Self::UniformLocation, values: &[f32]);
    fn uniform_matrix2fv(&self, location: &Self::UniformLocation, transpose: bool, values: &[f32]);
    fn uniform_matrix3fv(&self, location: &Self::UniformLocation, transpose: bool, values: &[f32]);
    fn uniform_matrix4fv(&self, location: &Self::UniformLocation, transpose: bool, values: &[f32]);

    fn active_texture(&self, unit: u32);
    fn bind_texture(&self, target: u32, texture: Option<&Self::Texture>);

    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn delete_buffer(&self, buffer: &Self::Buffer);
    fn bind_array_buffer(&self, buffer: Option<&Self::Buffer>);
    fn bind_element_array_buffer(&self, buffer: Option<&Self::Buffer>);
    /* STATIC_DRAW into whatever ARRAY_BUFFER / ELEMENT_ARRAY_BUFFER is bound */
    fn buffer_data_f32(&self, values: &[f32]);
    fn buffer_data_u16(&self, values: &[u16]);
    fn enable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer(&self, index: u32, size: i32, data_type: u32, normalize: bool, stride: i32, offset: i32);

    fn get_error(&self) -> u32;
    fn check_errors(&self) -> bool { true }
}

pub(crate) fn handle_context_errors<C: GlContext>(context: &C) -> Result<(),Message> {
    if !context.check_errors() { return Ok(()); }
    let mut errors = vec![];
    loop {
        let err = context.get_error();
        if err == WebGlRenderingContext::NO_ERROR { break; }
        errors.push(err);
    }
    if errors.len() > 0 {
        Err(Message::WebGLFailure(format!("webgl errors: {}",errors.iter().map(|x| format!("{}",x)).collect::<Vec<_>>().join(","))))
    } else {
        Ok(())
    }
}
