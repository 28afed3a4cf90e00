use std::collections::HashMap;
use crate::webgl::context::{ GlContext, handle_context_errors };
use crate::util::message::Message;
use super::attribute::{ AttributeSetter, BufferDescription };
use super::compiler::ShaderStage;
use super::introspect::Introspection;
use super::uniform::{ UniformSetter, UniformValue };

/// A linked program together with a setter for each of its active uniforms and attributes.
/// Only ever built from a successful link.
pub struct ProgramHolder<C: GlContext> {
    program: C::Program,
    stages: Vec<ShaderStage<C>>,
    uniform_setters: HashMap<String,UniformSetter<C>>,
    attribute_setters: HashMap<String,AttributeSetter>
}

pub(super) type Setters<C> = (HashMap<String,UniformSetter<C>>,HashMap<String,AttributeSetter>);

pub(super) fn make_setters<C: GlContext>(variables: &Introspection<C>) -> Result<Setters<C>,Message> {
    let mut uniform_setters = HashMap::new();
    for uniform in &variables.uniforms {
        uniform_setters.insert(uniform.name.clone(),UniformSetter::new(uniform)?);
    }
    let mut attribute_setters = HashMap::new();
    for attribute in &variables.attributes {
        attribute_setters.insert(attribute.name.clone(),AttributeSetter::new(&attribute.name,attribute.location));
    }
    Ok((uniform_setters,attribute_setters))
}

impl<C: GlContext> ProgramHolder<C> {
    pub(super) fn new(program: C::Program, stages: Vec<ShaderStage<C>>, setters: Setters<C>) -> ProgramHolder<C> {
        let (uniform_setters,attribute_setters) = setters;
        ProgramHolder { program, stages, uniform_setters, attribute_setters }
    }

    pub fn program(&self) -> &C::Program { &self.program }
    pub fn stages(&self) -> &[ShaderStage<C>] { &self.stages }
    pub fn uniform_setters(&self) -> &HashMap<String,UniformSetter<C>> { &self.uniform_setters }
    pub fn attribute_setters(&self) -> &HashMap<String,AttributeSetter> { &self.attribute_setters }

    pub fn set_uniform(&self, context: &C, name: &str, value: UniformValue<C>) -> Result<(),Message> {
        let setter = self.uniform_setters.get(name).ok_or_else(|| Message::NoSuchVariable(format!("uniform '{}'",name)))?;
        setter.apply(context,value)
    }

    pub fn set_attribute(&self, context: &C, name: &str, desc: &BufferDescription<C>) -> Result<(),Message> {
        let setter = self.attribute_setters.get(name).ok_or_else(|| Message::NoSuchVariable(format!("attribute '{}'",name)))?;
        setter.apply(context,desc)
    }

    pub fn use_program(&self, context: &C) -> Result<(),Message> {
        context.use_program(Some(&self.program));
        handle_context_errors(context)?;
        Ok(())
    }

    pub fn discard(self, context: &C) -> Result<(),Message> {
        context.delete_program(&self.program);
        for stage in &self.stages {
            stage.discard(context);
        }
        handle_context_errors(context)?;
        Ok(())
    }
}
