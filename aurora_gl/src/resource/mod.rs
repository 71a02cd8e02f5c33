//! GPU resource module
//!
//! RAII wrappers over driver objects. Every resource holds a [`Context`]
//! clone, releases its handle on `delete()` or drop, and validates its
//! arguments before touching the driver.
//!
//! [`Context`]: crate::Context

pub mod buffer;
pub mod texture;
pub mod renderbuffer;
pub mod attachment;
pub mod framebuffer;
pub mod vertex_array;

pub use buffer::Buffer;
pub use texture::{
    Texture, TextureKind, TextureSpec,
    PixelData, UploadInfo,
};
pub use renderbuffer::Renderbuffer;
pub use attachment::{
    Attachment, AttachmentBacking, AttachmentObject, AttachmentSpec,
};
pub use framebuffer::Framebuffer;
pub use vertex_array::{
    AttribFormat, AttributeLayout, VertexArray, VertexDescriptor, VertexInput,
};
