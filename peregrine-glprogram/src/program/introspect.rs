use crate::webgl::context::{ ActiveInfo, GlContext, handle_context_errors };
use crate::util::message::Message;

const ARRAY_SUFFIX : &str = "[0]";

#[derive(Clone,Debug,PartialEq)]
pub struct VariableDescriptor<L> {
    pub name: String,
    pub type_code: u32,
    pub is_array: bool,
    pub array_size: i32,
    pub location: L
}

pub struct Introspection<C: GlContext> {
    pub uniforms: Vec<VariableDescriptor<Option<C::UniformLocation>>>,
    pub attributes: Vec<VariableDescriptor<u32>>
}

/* "foo[0]" and "foo" name the same variable */
pub(crate) fn strip_array_suffix(name: &str) -> &str {
    name.strip_suffix(ARRAY_SUFFIX).unwrap_or(name)
}

fn describe<L>(info: &ActiveInfo, location: L) -> VariableDescriptor<L> {
    VariableDescriptor {
        name: strip_array_suffix(&info.name).to_string(),
        type_code: info.type_code,
        is_array: info.size > 1 && info.name.ends_with(ARRAY_SUFFIX),
        array_size: info.size,
        location
    }
}

/* drivers can overstate the count, so the first missing index ends the list */
fn active_infos<F>(count: u32, mut get: F) -> Vec<ActiveInfo> where F: FnMut(u32) -> Option<ActiveInfo> {
    let mut out = vec![];
    for index in 0..count {
        match get(index) {
            Some(info) => out.push(info),
            None => break
        }
    }
    out
}

pub fn introspect<C: GlContext>(context: &C, program: &C::Program) -> Result<Introspection<C>,Message> {
    let uniform_infos = active_infos(context.active_uniform_count(program),|i| context.active_uniform(program,i));
    handle_context_errors(context)?;
    let mut uniforms = vec![];
    for info in &uniform_infos {
        let location = context.uniform_location(program,&info.name);
        handle_context_errors(context)?;
        uniforms.push(describe(info,location));
    }
    let attribute_infos = active_infos(context.active_attribute_count(program),|i| context.active_attribute(program,i));
    handle_context_errors(context)?;
    let mut attributes = vec![];
    for info in &attribute_infos {
        let location = context.attrib_location(program,&info.name);
        handle_context_errors(context)?;
        if location < 0 {
            return Err(Message::WebGLFailure(format!("cannot get attrib '{}'",info.name)));
        }
        attributes.push(describe(info,location as u32));
    }
    Ok(Introspection { uniforms, attributes })
}

#[cfg(test)]
mod test {
    use super::*;
    use web_sys::WebGlRenderingContext as GL;
    use crate::test::fakegl::FakeGl;

    #[test]
    fn test_strip() {
        assert_eq!("uLights",strip_array_suffix("uLights[0]"));
        assert_eq!("uLights[1]",strip_array_suffix("uLights[1]"));
        assert_eq!("uColour",strip_array_suffix("uColour"));
    }

    #[test]
    fn test_introspect() {
        let gl = FakeGl::new();
        gl.add_uniform("uMatrix",GL::FLOAT_MAT4,1);
        gl.add_uniform("uWeights[0]",GL::FLOAT,4);
        gl.add_uniform("uSingle[0]",GL::INT,1);
        gl.add_attribute("aPosition",GL::FLOAT_VEC2,1);
        let program = gl.create_program().unwrap();
        let out = introspect(&gl,&program).ok().unwrap();
        assert_eq!(3,out.uniforms.len());
        assert_eq!(1,out.attributes.len());
        let weights = out.uniforms.iter().find(|u| u.name == "uWeights").unwrap();
        assert!(weights.is_array);
        assert_eq!(4,weights.array_size);
        assert!(weights.location.is_some());
        let single = out.uniforms.iter().find(|u| u.name == "uSingle").unwrap();
        assert!(!single.is_array);
        assert_eq!("aPosition",out.attributes[0].name);
        assert_eq!(0,out.attributes[0].location);
    }

    #[test]
    fn test_uniform_location_uses_raw_name() {
        let gl = FakeGl::new();
        gl.add_uniform("uWeights[0]",GL::FLOAT,4);
        let program = gl.create_program().unwrap();
        let out = introspect(&gl,&program).ok().unwrap();
        assert_eq!(gl.location_of("uWeights[0]"),out.uniforms[0].location);
    }

    #[test]
    fn test_overstated_count_stops_early() {
        let gl = FakeGl::new();
        gl.add_uniform("uA",GL::FLOAT,1);
        gl.add_uniform("uB",GL::FLOAT,1);
        gl.add_attribute("aA",GL::FLOAT_VEC2,1);
        gl.overstate_counts(3);
        let program = gl.create_program().unwrap();
        let out = introspect(&gl,&program).ok().unwrap();
        assert_eq!(2,out.uniforms.len());
        assert_eq!(1,out.attributes.len());
    }

    #[test]
    fn test_missing_attrib_location() {
        let gl = FakeGl::new();
        gl.add_attribute("aGone",GL::FLOAT_VEC2,1);
        gl.hide_attribute("aGone");
        let program = gl.create_program().unwrap();
        assert!(match introspect(&gl,&program) { Err(Message::WebGLFailure(_)) => true, _ => false });
    }
}
