use std::future::Future;
use std::pin::Pin;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{ Request, RequestInit, RequestMode, Response };
use crate::program::compiler::{ compile_shader, ShaderKind };
use crate::program::holder::ProgramHolder;
use crate::program::linker::link_program;
use crate::webgl::context::GlContext;
use crate::util::message::Message;
use crate::log_extra;

async fn get(url: &str) -> Result<Response,Message> {
    let mut init = RequestInit::new();
    init.method("GET").mode(RequestMode::Cors);
    let req = Request::new_with_str_and_init(url,&init).map_err(|e| Message::ConfusedWebBrowser(format!("cannot create request: {:?}",e)))?;
    let window = web_sys::window().ok_or_else(|| Message::ConfusedWebBrowser(format!("cannot get window")))?;
    let response = JsFuture::from(window.fetch_with_request(&req)).await.map_err(|e| Message::SourceUnavailable(format!("{}: cannot send request: {:?}",url,e.as_string())))?;
    let response : Response = response.dyn_into().map_err(|e| Message::ConfusedWebBrowser(format!("cannot cast response to response: {:?}",e.as_string())))?;
    if !response.ok() {
        return Err(Message::SourceUnavailable(format!("{}: unexpected status code: {}",url,response.status())));
    }
    Ok(response)
}

pub async fn fetch_text(url: &str) -> Result<String,Message> {
    let response = get(url).await?;
    let text_future = response.text().map_err(|e| Message::ConfusedWebBrowser(format!("cannot get text: {:?}",e.as_string())))?;
    let text = JsFuture::from(text_future).await.map_err(|e| Message::SourceUnavailable(format!("{}: {:?}",url,e.as_string())))?;
    let text = text.as_string().ok_or_else(|| Message::ConfusedWebBrowser(format!("{}: response body is not text",url)))?;
    log_extra!("fetched {} ({} bytes)",url,text.len());
    Ok(text)
}

/// Where shader source text comes from, by url.
pub trait SourceFetch {
    fn fetch<'a>(&'a self, url: &'a str) -> Pin<Box<dyn Future<Output=Result<String,Message>> + 'a>>;
}

/* browser fetch() */
pub struct WebFetch;

impl SourceFetch for WebFetch {
    fn fetch<'a>(&'a self, url: &'a str) -> Pin<Box<dyn Future<Output=Result<String,Message>> + 'a>> {
        Box::pin(fetch_text(url))
    }
}

/// Fetches both sources before anything is compiled, so an unavailable source never
/// allocates GL objects.
pub async fn program_from_fetch<C: GlContext, F: SourceFetch>(context: &C, fetch: &F, vs_url: &str, fs_url: &str) -> Result<ProgramHolder<C>,Message> {
    let vs_source = fetch.fetch(vs_url).await?;
    let fs_source = fetch.fetch(fs_url).await?;
    let vertex = compile_shader(context,ShaderKind::Vertex,&vs_source)?;
    let fragment = match compile_shader(context,ShaderKind::Fragment,&fs_source) {
        Ok(fragment) => fragment,
        Err(e) => {
            vertex.discard(context);
            return Err(e);
        }
    };
    link_program(context,Some(vertex),Some(fragment))
}

pub async fn program_from_urls<C: GlContext>(context: &C, vs_url: &str, fs_url: &str) -> Result<ProgramHolder<C>,Message> {
    program_from_fetch(context,&WebFetch,vs_url,fs_url).await
}
