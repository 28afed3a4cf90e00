use crate::program::compiler::{ compile_shader, ShaderKind, ShaderStage };
use crate::program::holder::ProgramHolder;
use crate::program::linker::link_program;
use crate::webgl::context::GlContext;
use crate::util::message::Message;
use crate::warn;

/// Finds shader source text by element id.
pub trait ScriptLookup {
    fn script_text(&self, id: &str) -> Option<String>;
}

/* <script type="x-shader/x-vertex" id="..."> elements in the page */
pub struct DocumentScripts(web_sys::Document);

impl DocumentScripts {
    pub fn new() -> Result<DocumentScripts,Message> {
        let window = web_sys::window().ok_or_else(|| Message::ConfusedWebBrowser(format!("cannot get window")))?;
        let document = window.document().ok_or_else(|| Message::ConfusedWebBrowser(format!("cannot get document")))?;
        Ok(DocumentScripts(document))
    }
}

impl ScriptLookup for DocumentScripts {
    fn script_text(&self, id: &str) -> Option<String> {
        self.0.get_element_by_id(id).and_then(|el| el.text_content())
    }
}

/// A missing element is `Ok(None)`: the caller can still link the other stage.
pub fn compile_script<C: GlContext, L: ScriptLookup>(context: &C, lookup: &L, kind: ShaderKind, id: &str) -> Result<Option<ShaderStage<C>>,Message> {
    match lookup.script_text(id) {
        Some(source) => Ok(Some(compile_shader(context,kind,&source)?)),
        None => {
            warn!("no shader script with id '{}'",id);
            Ok(None)
        }
    }
}

pub fn program_from_scripts<C: GlContext, L: ScriptLookup>(context: &C, lookup: &L, vs_id: &str, fs_id: &str) -> Result<ProgramHolder<C>,Message> {
    let vertex = compile_script(context,lookup,ShaderKind::Vertex,vs_id)?;
    let fragment = match compile_script(context,lookup,ShaderKind::Fragment,fs_id) {
        Ok(fragment) => fragment,
        Err(e) => {
            if let Some(vertex) = &vertex { vertex.discard(context); }
            return Err(e);
        }
    };
    link_program(context,vertex,fragment)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;
    use crate::test::fakegl::{ FakeGl, BAD_SOURCE, VS, FS };

    struct MapScripts(HashMap<String,String>);

    impl MapScripts {
        fn new(scripts: &[(&str,&str)]) -> MapScripts {
            MapScripts(scripts.iter().map(|(k,v)| (k.to_string(),v.to_string())).collect())
        }
    }

    impl ScriptLookup for MapScripts {
        fn script_text(&self, id: &str) -> Option<String> { self.0.get(id).cloned() }
    }

    #[test]
    fn test_lookup_miss_is_not_an_error() {
        let gl = FakeGl::new();
        let scripts = MapScripts::new(&[]);
        assert!(compile_script(&gl,&scripts,ShaderKind::Vertex,"shader-vs").ok().unwrap().is_none());
        assert_eq!(0,gl.calls().len());
    }

    #[test]
    fn test_program_from_scripts() {
        let gl = FakeGl::new();
        let scripts = MapScripts::new(&[("shader-vs",VS),("shader-fs",FS)]);
        let holder = program_from_scripts(&gl,&scripts,"shader-vs","shader-fs").ok().unwrap();
        assert_eq!(2,holder.stages().len());
    }

    #[test]
    fn test_links_whatever_resolved() {
        let gl = FakeGl::new();
        let scripts = MapScripts::new(&[("shader-vs",VS)]);
        let holder = program_from_scripts(&gl,&scripts,"shader-vs","shader-fs").ok().unwrap();
        assert_eq!(1,holder.stages().len());
        assert_eq!(ShaderKind::Vertex,holder.stages()[0].kind());
    }

    #[test]
    fn test_bad_fragment_releases_vertex() {
        let gl = FakeGl::new();
        let scripts = MapScripts::new(&[("shader-vs",VS),("shader-fs",BAD_SOURCE)]);
        assert!(match program_from_scripts(&gl,&scripts,"shader-vs","shader-fs") { Err(Message::CompileError(_)) => true, _ => false });
        assert_eq!(0,gl.live_shaders());
        assert_eq!(0,gl.live_programs());
    }
}
