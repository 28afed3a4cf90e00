use web_sys::WebGlRenderingContext;
use crate::webgl::context::{ GlContext, handle_context_errors };
use crate::webgl::gltype::{ GLArity, GLMatrix, GlType, Marshal };
use crate::util::message::Message;
use super::introspect::VariableDescriptor;

/* Only one texture unit is ever used by sampler setters */
const SAMPLER_UNIT : i32 = 0;

pub enum UniformValue<'a,C: GlContext> {
    Int(i32),
    Float(f32),
    Ints(&'a [i32]),
    Floats(&'a [f32]),
    Texture(&'a C::Texture)
}

impl<'a,C: GlContext> UniformValue<'a,C> {
    fn describe(&self) -> String {
        match self {
            UniformValue::Int(_) => "int".to_string(),
            UniformValue::Float(_) => "float".to_string(),
            UniformValue::Ints(v) => format!("{} ints",v.len()),
            UniformValue::Floats(v) => format!("{} floats",v.len()),
            UniformValue::Texture(_) => "texture".to_string()
        }
    }
}

impl<'a,C: GlContext> From<i32> for UniformValue<'a,C> {
    fn from(v: i32) -> Self { UniformValue::Int(v) }
}

impl<'a,C: GlContext> From<f32> for UniformValue<'a,C> {
    fn from(v: f32) -> Self { UniformValue::Float(v) }
}

impl<'a,C: GlContext> From<&'a [i32]> for UniformValue<'a,C> {
    fn from(v: &'a [i32]) -> Self { UniformValue::Ints(v) }
}

impl<'a,C: GlContext> From<&'a [f32]> for UniformValue<'a,C> {
    fn from(v: &'a [f32]) -> Self { UniformValue::Floats(v) }
}

fn check_len(name: &str, len: usize, unit: usize) -> Result<(),Message> {
    if len == 0 || len % unit != 0 {
        return Err(Message::BadUniformValue(format!("{}: got {} values, need a multiple of {}",name,len,unit)));
    }
    Ok(())
}

pub struct UniformSetter<C: GlContext> {
    name: String,
    location: Option<C::UniformLocation>,
    marshal: Marshal
}

impl<C: GlContext> Clone for UniformSetter<C> {
    fn clone(&self) -> Self {
        UniformSetter { name: self.name.clone(), location: self.location.clone(), marshal: self.marshal }
    }
}

impl<C: GlContext> UniformSetter<C> {
    pub fn new(descriptor: &VariableDescriptor<Option<C::UniformLocation>>) -> Result<UniformSetter<C>,Message> {
        let code = descriptor.type_code;
        let marshal = if descriptor.is_array && code == WebGlRenderingContext::INT {
            Marshal::IntVector(GLArity::Scalar)
        } else if descriptor.is_array && code == WebGlRenderingContext::FLOAT {
            Marshal::FloatVector(GLArity::Scalar)
        } else {
            GlType::from_code(code)?.marshal()
        };
        Ok(UniformSetter {
            name: descriptor.name.clone(),
            location: descriptor.location.clone(),
            marshal
        })
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn marshal(&self) -> Marshal { self.marshal }

    fn mismatch(&self, value: &UniformValue<C>) -> Message {
        Message::BadUniformValue(format!("{}: cannot set {:?} uniform from {}",self.name,self.marshal,value.describe()))
    }

    pub fn apply(&self, context: &C, value: UniformValue<C>) -> Result<(),Message> {
        let location = match &self.location {
            Some(location) => location,
            None => { return Ok(()); }
        };
        match (self.marshal,&value) {
            (Marshal::Int,UniformValue::Int(v)) => context.uniform1i(location,*v),
            (Marshal::Float,UniformValue::Float(v)) => context.uniform1f(location,*v),
            (Marshal::IntVector(arity),UniformValue::Ints(v)) => {
                check_len(&self.name,v.len(),arity.to_num())?;
                match arity {
                    GLArity::Scalar => context.uniform1iv(location,v),
                    GLArity::Vec2 => context.uniform2iv(location,v),
                    GLArity::Vec3 => context.uniform3iv(location,v),
                    GLArity::Vec4 => context.uniform4iv(location,v)
                }
            },
            (Marshal::FloatVector(arity),UniformValue::Floats(v)) => {
                check_len(&self.name,v.len(),arity.to_num())?;
                match arity {
                    GLArity::Scalar => context.uniform1fv(location,v),
                    GLArity::Vec2 => context.uniform2fv(location,v),
                    GLArity::Vec3 => context.uniform3fv(location,v),
                    GLArity::Vec4 => context.uniform4fv(location,v)
                }
            },
            (Marshal::Matrix(size),UniformValue::Floats(v)) => {
                check_len(&self.name,v.len(),size.to_num())?;
                match size {
                    GLMatrix::Mat2 => context.uniform_matrix2fv(location,false,v),
                    GLMatrix::Mat3 => context.uniform_matrix3fv(location,false,v),
                    GLMatrix::Mat4 => context.uniform_matrix4fv(location,false,v)
                }
            },
            (Marshal::Sampler(target),UniformValue::Texture(texture)) => {
                context.uniform1i(location,SAMPLER_UNIT);
                context.active_texture(WebGlRenderingContext::TEXTURE0);
                context.bind_texture(target,Some(*texture));
            },
            _ => { return Err(self.mismatch(&value)); }
        }
        handle_context_errors(context)?;
        Ok(())
    }
}
