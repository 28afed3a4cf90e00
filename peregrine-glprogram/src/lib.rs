pub mod console;

mod program {
    pub(crate) mod attribute;
    pub(crate) mod compiler;
    pub(crate) mod holder;
    pub(crate) mod introspect;
    pub(crate) mod linker;
    pub(crate) mod uniform;
}

mod source {
    pub(crate) mod fetch;
    pub(crate) mod script;
}

mod util {
    pub(crate) mod config;
    pub(crate) mod message;
}

mod webgl {
    pub(crate) mod context;
    pub(crate) mod gltype;
    pub(crate) mod texture;
    pub(crate) mod webglcontext;
}


pub use crate::program::attribute::{ AttributeSetter, BufferDescription, create_buffer, upload_array_buffer, upload_element_buffer };
pub use crate::program::compiler::{ compile_shader, ShaderKind, ShaderStage };
pub use crate::program::holder::ProgramHolder;
pub use crate::program::introspect::{ introspect, Introspection, VariableDescriptor };
pub use crate::program::linker::link_program;
pub use crate::program::uniform::{ UniformSetter, UniformValue };
pub use crate::source::fetch::{ fetch_text, program_from_fetch, program_from_urls, SourceFetch, WebFetch };
pub use crate::source::script::{ compile_script, program_from_scripts, DocumentScripts, ScriptLookup };
pub use crate::util::config::{ Config, ConfigError, ConfigKeyInfo, ConfigValue, GlConfig, GlConfigKey, GlConfigValue, TextureFilter };
pub use crate::util::message::{ Message, MessageLevel };
pub use crate::webgl::context::{ ActiveInfo, GlContext };
pub use crate::webgl::gltype::{ GLArity, GLMatrix, GlType, Marshal };
pub use crate::webgl::texture::load_texture;
pub use crate::webgl::webglcontext::WebGlContext;
