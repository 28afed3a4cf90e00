use crate::{ log, log_extra };
use crate::console::report;
use crate::webgl::context::{ GlContext, handle_context_errors };
use crate::util::message::Message;
use super::compiler::ShaderStage;
use super::holder::{ ProgramHolder, Setters, make_setters };
use super::introspect::introspect;

fn check_program<C: GlContext>(context: &C, program: &C::Program) -> Result<(),Message> {
    if !context.program_linked(program) {
        Err(Message::LinkError(context.program_info_log(program).unwrap_or_else(|| String::from("Unknown error linking program"))))
    } else {
        Ok(())
    }
}

fn try_link<C: GlContext>(context: &C, program: &C::Program, stages: &[ShaderStage<C>]) -> Result<(),Message> {
    handle_context_errors(context)?;
    for stage in stages {
        context.attach_shader(program,stage.shader());
        handle_context_errors(context)?;
    }
    context.link_program(program);
    handle_context_errors(context)?;
    check_program(context,program)?;
    Ok(())
}

fn try_setters<C: GlContext>(context: &C, program: &C::Program) -> Result<Setters<C>,Message> {
    let variables = introspect(context,program)?;
    make_setters(&variables)
}

fn release<C: GlContext>(context: &C, program: Option<&C::Program>, stages: &[ShaderStage<C>]) {
    if let Some(program) = program {
        context.delete_program(program);
    }
    for stage in stages {
        stage.discard(context);
    }
}

/// Attaches whichever stages are present, links, and builds the setters. Any failure deletes
/// the program and the stages: there is no partially usable result.
pub fn link_program<C: GlContext>(context: &C, vertex: Option<ShaderStage<C>>, fragment: Option<ShaderStage<C>>) -> Result<ProgramHolder<C>,Message> {
    let stages = vertex.into_iter().chain(fragment.into_iter()).collect::<Vec<_>>();
    let program = match context.create_program() {
        Some(program) => program,
        None => {
            release(context,None,&stages);
            return Err(Message::WebGLFailure(format!("could not create program")));
        }
    };
    let setters = try_link(context,&program,&stages).and_then(|_| try_setters(context,&program));
    match setters {
        Ok(setters) => {
            log!("shader program created");
            log_extra!("{} uniform setters, {} attribute setters",setters.0.len(),setters.1.len());
            Ok(ProgramHolder::new(program,stages,setters))
        },
        Err(e) => {
            release(context,Some(&program),&stages);
            report(&e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use web_sys::WebGlRenderingContext as GL;
    use crate::program::compiler::{ compile_shader, ShaderKind };
    use crate::program::attribute::{ BufferDescription, upload_array_buffer, upload_element_buffer };
    use peregrine_mesh::{ create_ring, VERTEX_SIZE };
    use crate::program::uniform::UniformValue;
    use crate::test::fakegl::{ FakeGl, GlCall, BAD_SOURCE, VS, FS };

    fn stages(gl: &FakeGl) -> (Option<ShaderStage<FakeGl>>,Option<ShaderStage<FakeGl>>) {
        (compile_shader(gl,ShaderKind::Vertex,VS).ok(),compile_shader(gl,ShaderKind::Fragment,FS).ok())
    }

    #[test]
    fn test_one_setter_per_variable() {
        let gl = FakeGl::new();
        gl.add_uniform("uTransform",GL::FLOAT_MAT4,1);
        gl.add_uniform("uPalette[0]",GL::FLOAT_VEC4,8);
        gl.add_uniform("uSampler",GL::SAMPLER_2D,1);
        gl.add_attribute("aPosition",GL::FLOAT_VEC2,1);
        gl.add_attribute("aColour",GL::FLOAT_VEC4,1);
        let (vs,fs) = stages(&gl);
        let holder = link_program(&gl,vs,fs).ok().unwrap();
        let mut uniforms = holder.uniform_setters().keys().cloned().collect::<Vec<_>>();
        uniforms.sort();
        assert_eq!(vec!["uPalette","uSampler","uTransform"],uniforms);
        let mut attribs = holder.attribute_setters().keys().cloned().collect::<Vec<_>>();
        attribs.sort();
        assert_eq!(vec!["aColour","aPosition"],attribs);
        assert_eq!(2,holder.stages().len());
        assert!(gl.calls().iter().filter(|c| match c { GlCall::AttachShader(..) => true, _ => false }).count() == 2);
    }

    #[test]
    fn test_partial_program() {
        let gl = FakeGl::new();
        let vs = compile_shader(&gl,ShaderKind::Vertex,VS).ok();
        let holder = link_program(&gl,vs,None).ok().unwrap();
        assert_eq!(1,holder.stages().len());
        assert_eq!(1,gl.calls().iter().filter(|c| match c { GlCall::AttachShader(..) => true, _ => false }).count());
    }

    #[test]
    fn test_link_failure() {
        let gl = FakeGl::new();
        gl.add_uniform("uTransform",GL::FLOAT_MAT4,1);
        gl.fail_link();
        let (vs,fs) = stages(&gl);
        match link_program(&gl,vs,fs) {
            Err(Message::LinkError(log)) => assert_eq!(FakeGl::link_log(),log),
            _ => panic!("expected link error")
        }
        assert_eq!(0,gl.live_programs());
        assert_eq!(0,gl.live_shaders());
        /* no introspection after a failed link */
        assert!(!gl.calls().iter().any(|c| match c { GlCall::GetActiveUniform(_) => true, _ => false }));
    }

    #[test]
    fn test_unknown_type_fails_whole_program() {
        let gl = FakeGl::new();
        gl.add_uniform("uVolume",0x8b5f,1);
        let (vs,fs) = stages(&gl);
        assert!(match link_program(&gl,vs,fs) { Err(Message::UnknownType(0x8b5f)) => true, _ => false });
        assert_eq!(0,gl.live_programs());
    }

    #[test]
    fn test_failed_stage_never_reaches_link() {
        let gl = FakeGl::new();
        let vs = compile_shader(&gl,ShaderKind::Vertex,BAD_SOURCE).ok();
        assert!(vs.is_none());
        assert_eq!(0,gl.live_shaders());
    }

    #[test]
    fn test_holder_setters() {
        let gl = FakeGl::new();
        gl.add_uniform("uOpacity",GL::FLOAT,1);
        gl.add_attribute("aPosition",GL::FLOAT_VEC2,1);
        let (vs,fs) = stages(&gl);
        let holder = link_program(&gl,vs,fs).ok().unwrap();
        holder.use_program(&gl).ok().unwrap();
        holder.set_uniform(&gl,"uOpacity",UniformValue::Float(0.25)).ok().unwrap();
        holder.set_attribute(&gl,"aPosition",&BufferDescription::new(&3,2).interleaved(24,0)).ok().unwrap();
        let location = gl.location_of("uOpacity").unwrap();
        assert!(gl.calls().contains(&GlCall::Uniform1f(location,0.25)));
        assert!(gl.calls().contains(&GlCall::VertexAttribPointer(0,2,GL::FLOAT,false,24,0)));
        assert!(match holder.set_uniform(&gl,"uMissing",UniformValue::Int(1)) { Err(Message::NoSuchVariable(_)) => true, _ => false });
        holder.discard(&gl).ok().unwrap();
        assert_eq!(0,gl.live_programs());
        assert_eq!(0,gl.live_shaders());
    }

    #[test]
    fn test_ring_reaches_gpu() {
        let gl = FakeGl::new();
        gl.add_attribute("aPosition",GL::FLOAT_VEC2,1);
        gl.add_attribute("aColour",GL::FLOAT_VEC4,1);
        let (vs,fs) = stages(&gl);
        let holder = link_program(&gl,vs,fs).ok().unwrap();
        let ring = create_ring(0.,0.,1.,2.,8).ok().unwrap();
        let indices = ring.indices_u16().ok().unwrap().unwrap();
        let vertices = upload_array_buffer(&gl,&ring.positions).ok().unwrap();
        let elements = upload_element_buffer(&gl,&indices).ok().unwrap();
        let stride = (VERTEX_SIZE*4) as i32;
        holder.set_attribute(&gl,"aPosition",&BufferDescription::new(&vertices,2).interleaved(stride,0)).ok().unwrap();
        holder.set_attribute(&gl,"aColour",&BufferDescription::new(&vertices,4).interleaved(stride,8)).ok().unwrap();
        assert_eq!(Some(ring.positions.clone()),gl.buffer_floats(vertices));
        assert_eq!(Some(indices),gl.buffer_shorts(elements));
        assert_eq!(Some(elements),gl.element_buffer());
        let calls = gl.calls();
        assert!(calls.contains(&GlCall::VertexAttribPointer(0,2,GL::FLOAT,false,24,0)));
        assert!(calls.contains(&GlCall::VertexAttribPointer(1,4,GL::FLOAT,false,24,8)));
        assert_eq!(2,gl.live_buffers());
    }
}
