use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{ HtmlImageElement, WebGlRenderingContext as GL, WebGlTexture, WebGlUniformLocation };
use crate::util::config::TextureFilter;
use crate::util::message::Message;
use super::context::handle_context_errors;
use super::webglcontext::WebGlContext;
use crate::error;

type Callback = Rc<RefCell<Option<Box<dyn FnOnce(Result<WebGlTexture,Message>)>>>>;

fn upload(context: &WebGlContext, image: &HtmlImageElement, location: Option<&WebGlUniformLocation>, filter: TextureFilter) -> Result<WebGlTexture,Message> {
    let gl = context.context();
    gl.active_texture(GL::TEXTURE0);
    let texture = gl.create_texture().ok_or_else(|| Message::WebGLFailure(format!("cannot create texture")))?;
    gl.bind_texture(GL::TEXTURE_2D,Some(&texture));
    gl.tex_image_2d_with_u32_and_u32_and_image(GL::TEXTURE_2D,0,GL::RGBA as i32,GL::RGBA,GL::UNSIGNED_BYTE,image)
        .map_err(|e| Message::WebGLFailure(format!("cannot upload texture: {:?}",e.as_string())))?;
    gl.tex_parameteri(GL::TEXTURE_2D,GL::TEXTURE_MIN_FILTER,filter.gl_value() as i32);
    gl.tex_parameteri(GL::TEXTURE_2D,GL::TEXTURE_MAG_FILTER,filter.gl_value() as i32);
    if let Some(location) = location {
        gl.uniform1i(Some(location),0);
    }
    handle_context_errors(context)?;
    Ok(texture)
}

fn finish(callback: &Callback, result: Result<WebGlTexture,Message>) {
    if let Err(e) = &result {
        error!("texture load failed: {}",e);
    }
    if let Some(cb) = callback.borrow_mut().take() {
        cb(result);
    }
}

/// Loads `src` into a new 2D texture on unit 0 and points the sampler at `location` to it.
/// The callback runs once, after the image loads or fails to.
pub fn load_texture<F>(context: &WebGlContext, src: &str, location: Option<WebGlUniformLocation>, filter: TextureFilter, callback: F) -> Result<(),Message>
        where F: FnOnce(Result<WebGlTexture,Message>) + 'static {
    let image = HtmlImageElement::new().map_err(|e| Message::ConfusedWebBrowser(format!("creating image element: {:?}",e)))?;
    image.set_cross_origin(Some("anonymous"));
    let callback : Callback = Rc::new(RefCell::new(Some(Box::new(callback))));
    let (context2,image2,callback2) = (context.clone(),image.clone(),callback.clone());
    let onload = Closure::once_into_js(move || {
        let result = upload(&context2,&image2,location.as_ref(),filter);
        finish(&callback2,result);
    });
    let src2 = src.to_string();
    let onerror = Closure::once_into_js(move || {
        finish(&callback,Err(Message::SourceUnavailable(format!("cannot load image {}",src2))));
    });
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    image.set_src(src);
    Ok(())
}
