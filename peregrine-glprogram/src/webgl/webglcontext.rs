use js_sys::{ Float32Array, Uint16Array };
use web_sys::{ WebGlRenderingContext, WebGlShader, WebGlProgram, WebGlUniformLocation, WebGlBuffer, WebGlTexture, WebGlActiveInfo };
use crate::console::set_verbosity;
use crate::util::config::GlConfig;
use crate::util::message::Message;
use super::context::{ ActiveInfo, GlContext };

fn active_info(info: Option<WebGlActiveInfo>) -> Option<ActiveInfo> {
    info.map(|info| ActiveInfo {
        name: info.name(),
        type_code: info.type_(),
        size: info.size()
    })
}

#[derive(Clone)]
pub struct WebGlContext {
    context: WebGlRenderingContext,
    check_errors: bool
}

impl WebGlContext {
    pub fn new(context: WebGlRenderingContext, config: &GlConfig) -> Result<WebGlContext,Message> {
        set_verbosity(config.verbosity()?);
        Ok(WebGlContext {
            context,
            check_errors: config.check_errors()?
        })
    }

    pub fn context(&self) -> &WebGlRenderingContext { &self.context }
}

impl GlContext for WebGlContext {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type UniformLocation = WebGlUniformLocation;
    type Buffer = WebGlBuffer;
    type Texture = WebGlTexture;

    fn create_shader(&self, shader_type: u32) -> Option<WebGlShader> { self.context.create_shader(shader_type) }
    fn shader_source(&self, shader: &WebGlShader, source: &str) { self.context.shader_source(shader,source); }
    fn compile_shader(&self, shader: &WebGlShader) { self.context.compile_shader(shader); }

    fn shader_compiled(&self, shader: &WebGlShader) -> bool {
        self.context.get_shader_parameter(shader,WebGlRenderingContext::COMPILE_STATUS).as_bool().unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> { self.context.get_shader_info_log(shader) }
    fn delete_shader(&self, shader: &WebGlShader) { self.context.delete_shader(Some(shader)); }

    fn create_program(&self) -> Option<WebGlProgram> { self.context.create_program() }
    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) { self.context.attach_shader(program,shader); }
    fn link_program(&self, program: &WebGlProgram) { self.context.link_program(program); }

    fn program_linked(&self, program: &WebGlProgram) -> bool {
        self.context.get_program_parameter(program,WebGlRenderingContext::LINK_STATUS).as_bool().unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> { self.context.get_program_info_log(program) }
    fn delete_program(&self, program: &WebGlProgram) { self.context.delete_program(Some(program)); }
    fn use_program(&self, program: Option<&WebGlProgram>) { self.context.use_program(program); }

    fn active_uniform_count(&self, program: &WebGlProgram) -> u32 {
        self.context.get_program_parameter(program,WebGlRenderingContext::ACTIVE_UNIFORMS).as_f64().unwrap_or(0.) as u32
    }

    fn active_attribute_count(&self, program: &WebGlProgram) -> u32 {
        self.context.get_program_parameter(program,WebGlRenderingContext::ACTIVE_ATTRIBUTES).as_f64().unwrap_or(0.) as u32
    }

    fn active_uniform(&self, program: &WebGlProgram, index: u32) -> Option<ActiveInfo> {
        active_info(self.context.get_active_uniform(program,index))
    }

    fn active_attribute(&self, program: &WebGlProgram, index: u32) -> Option<ActiveInfo> {
        active_info(self.context.get_active_attrib(program,index))
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.context.get_uniform_location(program,name)
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 { self.context.get_attrib_location(program,name) }

    fn uniform1i(&self, location: &WebGlUniformLocation, value: i32) { self.context.uniform1i(Some(location),value); }
    fn uniform1f(&self, location: &WebGlUniformLocation, value: f32) { self.context.uniform1f(Some(location),value); }
    fn uniform1iv(&self, location: &WebGlUniformLocation, values: &[i32]) { self.context.uniform1iv_with_i32_array(Some(location),values); }
    fn uniform2iv(&self, location: &WebGlUniformLocation, values: &[i32]) { self.context.uniform2iv_with_i32_array(Some(location),values); }
    fn uniform3iv(&self, location: &WebGlUniformLocation, values: &[i32]) { self.context.uniform3iv_with_i32_array(Some(location),values); }
    fn uniform4iv(&self, location: &WebGlUniformLocation, values: &[i32]) { self.context.uniform4iv_with_i32_array(Some(location),values); }
    fn uniform1fv(&self, location: &WebGlUniformLocation, values: &[f32]) { self.context.uniform1fv_with_f32_array(Some(location),values); }
    fn uniform2fv(&self, location: &WebGlUniformLocation, values: &[f32]) { self.context.uniform2fv_with_f32_array(Some(location),values); }
    fn uniform3fv(&self, location: &WebGlUniformLocation, values: &[f32]) { self.context.uniform3fv_with_f32_array(Some(location),values); }
    fn uniform4fv(&self, location: &WebGlUniformLocation, values: &[f32]) { self.context.uniform4fv_with_f32_array(Some(location),values); }

    fn uniform_matrix2fv(&self, location: &WebGlUniformLocation, transpose: bool, values: &[f32]) {
        self.context.uniform_matrix2fv_with_f32_array(Some(location),transpose,values);
    }

    fn uniform_matrix3fv(&self, location: &WebGlUniformLocation, transpose: bool, values: &[f32]) {
        self.context.uniform_matrix3fv_with_f32_array(Some(location),transpose,values);
    }

    fn uniform_matrix4fv(&self, location: &WebGlUniformLocation, transpose: bool, values: &[f32]) {
        self.context.uniform_matrix4fv_with_f32_array(Some(location),transpose,values);
    }

    fn active_texture(&self, unit: u32) { self.context.active_texture(unit); }
    fn bind_texture(&self, target: u32, texture: Option<&WebGlTexture>) { self.context.bind_texture(target,texture); }

    fn create_buffer(&self) -> Option<WebGlBuffer> { self.context.create_buffer() }
    fn delete_buffer(&self, buffer: &WebGlBuffer) { self.context.delete_buffer(Some(buffer)); }

    fn bind_array_buffer(&self, buffer: Option<&WebGlBuffer>) {
        self.context.bind_buffer(WebGlRenderingContext::ARRAY_BUFFER,buffer);
    }

    fn bind_element_array_buffer(&self, buffer: Option<&WebGlBuffer>) {
        self.context.bind_buffer(WebGlRenderingContext::ELEMENT_ARRAY_BUFFER,buffer);
    }

    fn buffer_data_f32(&self, values: &[f32]) {
        let values_js = Float32Array::from(values);
        self.context.buffer_data_with_opt_array_buffer(
            WebGlRenderingContext::ARRAY_BUFFER,
            Some(&values_js.buffer()),
            WebGlRenderingContext::STATIC_DRAW
        );
    }

    fn buffer_data_u16(&self, values: &[u16]) {
        let values_js = Uint16Array::from(values);
        self.context.buffer_data_with_opt_array_buffer(
            WebGlRenderingContext::ELEMENT_ARRAY_BUFFER,
            Some(&values_js.buffer()),
            WebGlRenderingContext::STATIC_DRAW
        );
    }

    fn enable_vertex_attrib_array(&self, index: u32) { self.context.enable_vertex_attrib_array(index); }

    fn vertex_attrib_pointer(&self, index: u32, size: i32, data_type: u32, normalize: bool, stride: i32, offset: i32) {
        self.context.vertex_attrib_pointer_with_i32(index,size,data_type,normalize,stride,offset);
    }

    fn get_error(&self) -> u32 { self.context.get_error() }
    fn check_errors(&self) -> bool { self.check_errors }
}
