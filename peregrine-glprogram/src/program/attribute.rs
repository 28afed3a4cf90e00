use web_sys::WebGlRenderingContext;
use crate::webgl::context::{ GlContext, handle_context_errors };
use crate::util::message::Message;

/// Where an attribute's data lives and how it is laid out. Unset fields default to tightly
/// packed, unnormalised floats.
pub struct BufferDescription<'a,C: GlContext> {
    pub buffer: &'a C::Buffer,
    pub nums_per_element: i32,
    pub data_type: u32,
    pub normalize: bool,
    pub stride: i32,
    pub offset: i32
}

impl<'a,C: GlContext> BufferDescription<'a,C> {
    pub fn new(buffer: &'a C::Buffer, nums_per_element: i32) -> BufferDescription<'a,C> {
        BufferDescription {
            buffer, nums_per_element,
            data_type: WebGlRenderingContext::FLOAT,
            normalize: false,
            stride: 0,
            offset: 0
        }
    }

    pub fn data_type(mut self, data_type: u32) -> Self { self.data_type = data_type; self }
    pub fn normalize(mut self, normalize: bool) -> Self { self.normalize = normalize; self }

    /* interleaved layouts, eg (x,y,r,g,b,a) mesh vertices */
    pub fn interleaved(mut self, stride: i32, offset: i32) -> Self {
        self.stride = stride;
        self.offset = offset;
        self
    }
}

#[derive(Clone,Debug,PartialEq)]
pub struct AttributeSetter {
    name: String,
    index: u32
}

impl AttributeSetter {
    pub fn new(name: &str, index: u32) -> AttributeSetter {
        AttributeSetter { name: name.to_string(), index }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn index(&self) -> u32 { self.index }

    pub fn apply<C: GlContext>(&self, context: &C, desc: &BufferDescription<C>) -> Result<(),Message> {
        context.bind_array_buffer(Some(desc.buffer));
        handle_context_errors(context)?;
        context.enable_vertex_attrib_array(self.index);
        handle_context_errors(context)?;
        context.vertex_attrib_pointer(self.index,desc.nums_per_element,desc.data_type,desc.normalize,desc.stride,desc.offset);
        handle_context_errors(context)?;
        Ok(())
    }
}

fn new_buffer<C: GlContext, F>(context: &C, fill: F) -> Result<C::Buffer,Message> where F: FnOnce(&C::Buffer) {
    let buffer = context.create_buffer().ok_or_else(|| Message::WebGLFailure(format!("failed to create buffer")))?;
    fill(&buffer);
    if let Err(e) = handle_context_errors(context) {
        context.delete_buffer(&buffer);
        return Err(e);
    }
    Ok(buffer)
}

/// Copies vertex data into a new ARRAY_BUFFER, eg `MeshBuffer::positions`.
pub fn upload_array_buffer<C: GlContext>(context: &C, values: &[f32]) -> Result<C::Buffer,Message> {
    new_buffer(context,|buffer| {
        context.bind_array_buffer(Some(buffer));
        context.buffer_data_f32(values);
    })
}

/// Copies indices into a new ELEMENT_ARRAY_BUFFER, which is left bound for `drawElements`.
pub fn upload_element_buffer<C: GlContext>(context: &C, indices: &[u16]) -> Result<C::Buffer,Message> {
    new_buffer(context,|buffer| {
        context.bind_element_array_buffer(Some(buffer));
        context.buffer_data_u16(indices);
    })
}

/* one tightly packed float attribute per buffer */
pub fn create_buffer<C: GlContext>(context: &C, setter: &AttributeSetter, nums_per_element: i32, values: &[f32]) -> Result<C::Buffer,Message> {
    let buffer = upload_array_buffer(context,values)?;
    if let Err(e) = setter.apply(context,&BufferDescription::new(&buffer,nums_per_element)) {
        context.delete_buffer(&buffer);
        return Err(e);
    }
    Ok(buffer)
}
