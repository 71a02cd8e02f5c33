/// Driver trait - the graphics API calls the resource layer is built on

use std::ptr::NonNull;

use crate::driver::{
    AttachmentPoint, BufferFlags, BufferId, BufferTarget, DebugHook, DebugMessage, ErrorCode,
    FramebufferId, FramebufferStatus, InternalFormat, PixelFormat, PixelType, RenderbufferId,
    ScalarType, TextureId, TextureParameter, TextureTarget, VertexArrayId,
};
use crate::error::Result;

// ============================================================================
// Call parameters
// ============================================================================

/// Destination region of a sub-image upload
///
/// Coordinates beyond the target's dimensionality are ignored by the
/// driver (a 2D upload ignores `z` and `depth`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureRegion {
    pub level: u32,
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

/// Any driver object, for calls that accept every kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectHandle {
    Buffer(BufferId),
    Texture(TextureId),
    Renderbuffer(RenderbufferId),
    Framebuffer(FramebufferId),
    VertexArray(VertexArrayId),
}

/// Attached object of a framebuffer slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentId {
    Renderbuffer(RenderbufferId),
    Texture(TextureId),
}

// ============================================================================
// Driver trait
// ============================================================================

/// Calls into the graphics API
///
/// Implemented by the OpenGL backend and by the mock driver used in tests.
/// Every method runs on the thread owning the graphics context.
///
/// Creation, storage and upload calls are fallible. Map and unmap report
/// failure the way the API does (null pointer, false) and leave the
/// reason to [`Driver::get_error`].
pub trait Driver {
    // ===== OBJECT LIFECYCLE =====

    fn create_buffer(&mut self) -> Result<BufferId>;
    fn delete_buffer(&mut self, id: BufferId);

    /// Create a texture object bound to `target` for its whole lifetime
    fn create_texture(&mut self, target: TextureTarget) -> Result<TextureId>;
    fn delete_texture(&mut self, id: TextureId);

    fn create_renderbuffer(&mut self) -> Result<RenderbufferId>;
    fn delete_renderbuffer(&mut self, id: RenderbufferId);

    fn create_framebuffer(&mut self) -> Result<FramebufferId>;
    fn delete_framebuffer(&mut self, id: FramebufferId);

    fn create_vertex_array(&mut self) -> Result<VertexArrayId>;
    fn delete_vertex_array(&mut self, id: VertexArrayId);

    // ===== BUFFERS =====

    /// Allocate immutable storage of `size` bytes, optionally initialized
    fn buffer_storage(
        &mut self,
        id: BufferId,
        size: usize,
        data: Option<&[u8]>,
        flags: BufferFlags,
    ) -> Result<()>;

    /// Map `size` bytes at `offset`. Returns `None` on failure.
    fn map_buffer_range(
        &mut self,
        id: BufferId,
        offset: usize,
        size: usize,
        access: BufferFlags,
    ) -> Option<NonNull<u8>>;

    /// Unmap the buffer. Returns `false` if the contents became corrupt
    /// while mapped or the buffer was not mapped.
    fn unmap_buffer(&mut self, id: BufferId) -> bool;

    /// Upload `data` at `offset`
    fn buffer_sub_data(&mut self, id: BufferId, offset: usize, data: &[u8]) -> Result<()>;

    /// Read back `out.len()` bytes starting at `offset`
    fn get_buffer_sub_data(&mut self, id: BufferId, offset: usize, out: &mut [u8]) -> Result<()>;

    fn bind_buffer(&mut self, target: BufferTarget, id: Option<BufferId>);

    fn bind_buffer_base(&mut self, target: BufferTarget, index: u32, id: Option<BufferId>);

    // ===== TEXTURES =====

    fn texture_storage_1d(
        &mut self,
        id: TextureId,
        levels: u32,
        format: InternalFormat,
        width: u32,
    ) -> Result<()>;

    fn texture_storage_2d(
        &mut self,
        id: TextureId,
        levels: u32,
        format: InternalFormat,
        width: u32,
        height: u32,
    ) -> Result<()>;

    fn texture_storage_2d_multisample(
        &mut self,
        id: TextureId,
        samples: u32,
        format: InternalFormat,
        width: u32,
        height: u32,
        fixed_sample_locations: bool,
    ) -> Result<()>;

    fn texture_storage_3d(
        &mut self,
        id: TextureId,
        levels: u32,
        format: InternalFormat,
        width: u32,
        height: u32,
        depth: u32,
    ) -> Result<()>;

    fn texture_storage_3d_multisample(
        &mut self,
        id: TextureId,
        samples: u32,
        format: InternalFormat,
        width: u32,
        height: u32,
        depth: u32,
        fixed_sample_locations: bool,
    ) -> Result<()>;

    fn texture_sub_image_1d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        format: PixelFormat,
        pixel_type: PixelType,
        data: &[u8],
    ) -> Result<()>;

    fn texture_sub_image_2d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        format: PixelFormat,
        pixel_type: PixelType,
        data: &[u8],
    ) -> Result<()>;

    fn texture_sub_image_3d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        format: PixelFormat,
        pixel_type: PixelType,
        data: &[u8],
    ) -> Result<()>;

    fn compressed_texture_sub_image_1d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        format: InternalFormat,
        data: &[u8],
    ) -> Result<()>;

    fn compressed_texture_sub_image_2d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        format: InternalFormat,
        data: &[u8],
    ) -> Result<()>;

    fn compressed_texture_sub_image_3d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        format: InternalFormat,
        data: &[u8],
    ) -> Result<()>;

    fn generate_texture_mipmap(&mut self, id: TextureId);

    fn texture_parameter_i(&mut self, id: TextureId, name: TextureParameter, value: i32);

    fn texture_parameter_f(&mut self, id: TextureId, name: TextureParameter, value: f32);

    fn get_texture_parameter_i(&mut self, id: TextureId, name: TextureParameter) -> i32;

    /// Whether the texture was allocated with immutable storage
    fn texture_immutable_format(&mut self, id: TextureId) -> bool {
        self.get_texture_parameter_i(id, TextureParameter::ImmutableFormat) != 0
    }

    fn bind_texture(&mut self, target: TextureTarget, id: Option<TextureId>);

    fn bind_texture_unit(&mut self, unit: u32, id: Option<TextureId>);

    /// Number of texture image units available to bind
    fn max_texture_units(&mut self) -> u32;

    // ===== RENDERBUFFERS =====

    fn renderbuffer_storage(
        &mut self,
        id: RenderbufferId,
        format: InternalFormat,
        width: u32,
        height: u32,
    ) -> Result<()>;

    fn renderbuffer_storage_multisample(
        &mut self,
        id: RenderbufferId,
        samples: u32,
        format: InternalFormat,
        width: u32,
        height: u32,
    ) -> Result<()>;

    // ===== FRAMEBUFFERS =====

    fn framebuffer_renderbuffer(
        &mut self,
        id: FramebufferId,
        point: AttachmentPoint,
        renderbuffer: RenderbufferId,
    );

    fn framebuffer_texture(
        &mut self,
        id: FramebufferId,
        point: AttachmentPoint,
        texture: TextureId,
        level: u32,
    );

    /// Set the draw-buffer list. `points` is non-empty.
    fn framebuffer_draw_buffers(&mut self, id: FramebufferId, points: &[AttachmentPoint]);

    /// Disable color output entirely
    fn framebuffer_disable_draw_buffers(&mut self, id: FramebufferId);

    fn check_framebuffer_status(&mut self, id: FramebufferId) -> FramebufferStatus;

    /// Bind for drawing, or bind the default framebuffer with `None`
    fn bind_framebuffer(&mut self, id: Option<FramebufferId>);

    // ===== VERTEX ARRAYS =====

    fn vertex_array_vertex_buffer(
        &mut self,
        id: VertexArrayId,
        binding: u32,
        buffer: BufferId,
        offset: usize,
        stride: u32,
    );

    fn vertex_array_binding_divisor(&mut self, id: VertexArrayId, binding: u32, divisor: u32);

    fn enable_vertex_array_attrib(&mut self, id: VertexArrayId, slot: u32);

    fn vertex_array_attrib_binding(&mut self, id: VertexArrayId, slot: u32, binding: u32);

    /// Float-path format (floats, half floats, normalized integers)
    fn vertex_array_attrib_format(
        &mut self,
        id: VertexArrayId,
        slot: u32,
        count: u32,
        scalar: ScalarType,
        normalized: bool,
        relative_offset: u32,
    );

    /// Integer-path format
    fn vertex_array_attrib_i_format(
        &mut self,
        id: VertexArrayId,
        slot: u32,
        count: u32,
        scalar: ScalarType,
        relative_offset: u32,
    );

    /// 64-bit path format
    fn vertex_array_attrib_l_format(
        &mut self,
        id: VertexArrayId,
        slot: u32,
        count: u32,
        scalar: ScalarType,
        relative_offset: u32,
    );

    fn vertex_array_element_buffer(&mut self, id: VertexArrayId, buffer: BufferId);

    fn bind_vertex_array(&mut self, id: Option<VertexArrayId>);

    /// Number of vertex attribute slots; valid slots are `0..max`
    fn max_vertex_attribs(&mut self) -> u32;

    // ===== DEBUG =====

    /// Install or remove the debug hook. The driver owns the hook until it
    /// is replaced, removed, or the driver is dropped.
    fn set_debug_hook(&mut self, hook: Option<DebugHook>, synchronous: bool);

    /// Inject a message into the debug stream (delivered to the hook)
    fn insert_debug_message(&mut self, message: &DebugMessage);

    /// Attach a human-readable name shown by debuggers and debug messages
    fn object_label(&mut self, object: ObjectHandle, label: &str);

    /// Pop the oldest pending error flag
    fn get_error(&mut self) -> ErrorCode;
}
