use web_sys::WebGlRenderingContext;
use crate::console::report;
use crate::webgl::context::{ GlContext, handle_context_errors };
use crate::util::message::Message;

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum ShaderKind {
    Vertex,
    Fragment
}

impl ShaderKind {
    pub fn gl_value(&self) -> u32 {
        match self {
            ShaderKind::Vertex => WebGlRenderingContext::VERTEX_SHADER,
            ShaderKind::Fragment => WebGlRenderingContext::FRAGMENT_SHADER
        }
    }
}

pub struct ShaderStage<C: GlContext> {
    shader: C::Shader,
    kind: ShaderKind
}

impl<C: GlContext> ShaderStage<C> {
    pub fn shader(&self) -> &C::Shader { &self.shader }
    pub fn kind(&self) -> ShaderKind { self.kind }

    pub(crate) fn discard(&self, context: &C) {
        context.delete_shader(&self.shader);
    }
}

fn check_shader<C: GlContext>(context: &C, shader: &C::Shader) -> Result<(),Message> {
    if context.shader_compiled(shader) {
        handle_context_errors(context)?;
        Ok(())
    } else {
        Err(Message::CompileError(context.shader_info_log(shader).unwrap_or_else(|| String::from("Unknown error compiling shader"))))
    }
}

fn try_compile<C: GlContext>(context: &C, shader: &C::Shader, source: &str) -> Result<(),Message> {
    context.shader_source(shader,source);
    handle_context_errors(context)?;
    context.compile_shader(shader);
    handle_context_errors(context)?;
    check_shader(context,shader)
}

/// Compiles one stage. On failure the shader object is deleted before the error is returned,
/// so a failed compile never leaves anything allocated.
pub fn compile_shader<C: GlContext>(context: &C, kind: ShaderKind, source: &str) -> Result<ShaderStage<C>,Message> {
    if source.trim().is_empty() {
        return Err(Message::CompileError(format!("empty {:?} shader source",kind)));
    }
    let shader = context.create_shader(kind.gl_value()).ok_or_else(|| Message::WebGLFailure("Unable to create shader object".to_string()))?;
    if let Err(e) = try_compile(context,&shader,source) {
        context.delete_shader(&shader);
        report(&e);
        return Err(e);
    }
    Ok(ShaderStage { shader, kind })
}
