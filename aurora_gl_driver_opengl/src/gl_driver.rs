/// GlDriver - the aurora Driver on top of OpenGL 4.5 direct state access
///
/// Every call goes straight to the `gl` function pointers loaded by
/// [`GlDriver::load_with`]. Fallible calls drain the GL error flag after the
/// call and turn a raised flag into a driver error.

use aurora_gl::aurora::driver::{
    AttachmentPoint, BufferFlags, BufferId, BufferTarget, DebugHook, DebugMessage, Driver,
    ErrorCode, FramebufferId, FramebufferStatus, InternalFormat, ObjectHandle, PixelFormat,
    PixelType, RenderbufferId, ScalarType, TextureId, TextureParameter, TextureRegion,
    TextureTarget, VertexArrayId,
};
use aurora_gl::aurora::Result;
use aurora_gl::{aurora_bail, aurora_debug, aurora_err, aurora_info};
use gl::types::{GLboolean, GLchar, GLenum, GLint, GLsizei, GLsizeiptr, GLintptr, GLuint};
use std::ffi::{c_void, CStr};
use std::ptr::{self, NonNull};

use crate::gl_conversions::*;
use crate::gl_debug::{self, HookSlot};

const SOURCE: &str = "aurora::opengl";

fn gl_bool(value: bool) -> GLboolean {
    if value {
        gl::TRUE
    } else {
        gl::FALSE
    }
}

fn data_ptr(data: &[u8]) -> *const c_void {
    data.as_ptr() as *const c_void
}

/// OpenGL implementation of [`Driver`]
///
/// The driver is tied to the GL context that was current when it was
/// loaded. It must only be used on that thread, while that context is
/// current, and must be dropped before the context is destroyed.
pub struct GlDriver {
    debug_hook: Option<HookSlot>,
    max_texture_units: Option<u32>,
    max_vertex_attribs: Option<u32>,
}

impl GlDriver {
    /// Load the GL entry points through `loader` and create the driver
    ///
    /// Fails when the context does not expose the OpenGL 4.5 direct state
    /// access entry points.
    ///
    /// # Safety
    /// A GL context must be current on the calling thread, and `loader`
    /// must return entry points of that context.
    pub unsafe fn load_with<F>(loader: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);

        let required = [
            ("glCreateBuffers", gl::CreateBuffers::is_loaded()),
            ("glNamedBufferStorage", gl::NamedBufferStorage::is_loaded()),
            ("glCreateTextures", gl::CreateTextures::is_loaded()),
            ("glTextureStorage2D", gl::TextureStorage2D::is_loaded()),
            ("glCreateFramebuffers", gl::CreateFramebuffers::is_loaded()),
            ("glCreateVertexArrays", gl::CreateVertexArrays::is_loaded()),
            ("glDebugMessageCallback", gl::DebugMessageCallback::is_loaded()),
        ];
        if let Some((name, _)) = required.iter().find(|(_, loaded)| !loaded) {
            aurora_bail!(DriverError, SOURCE, "OpenGL 4.5 entry point {} is not available", name);
        }

        // Uploads are tightly packed
        gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
        gl::PixelStorei(gl::PACK_ALIGNMENT, 1);

        let version = gl_string(gl::VERSION);
        let renderer = gl_string(gl::RENDERER);
        aurora_info!(SOURCE, "OpenGL {} on {}", version, renderer);

        Ok(Self {
            debug_hook: None,
            max_texture_units: None,
            max_vertex_attribs: None,
        })
    }

    /// Pop the error flag and fail if it was raised by `call`
    fn check(&mut self, call: &str) -> Result<()> {
        let code = error_code_from_gl(unsafe { gl::GetError() });
        if code == ErrorCode::NoError {
            Ok(())
        } else {
            Err(aurora_err!(DriverError, SOURCE, "{} failed: {}", call, code))
        }
    }

    fn create_name(&mut self, call: &str, create: impl FnOnce(*mut GLuint)) -> Result<u32> {
        let mut name: GLuint = 0;
        create(&mut name);
        self.check(call)?;
        if name == 0 {
            aurora_bail!(DriverError, SOURCE, "{} returned no object", call);
        }
        Ok(name)
    }

    fn remove_debug_hook(&mut self) {
        if self.debug_hook.take().is_some() {
            unsafe {
                gl::Disable(gl::DEBUG_OUTPUT);
                gl::DebugMessageCallback(None, ptr::null());
            }
        }
    }
}

fn gl_string(name: GLenum) -> String {
    let raw = unsafe { gl::GetString(name) };
    if raw.is_null() {
        return String::from("unknown");
    }
    unsafe { CStr::from_ptr(raw as *const GLchar) }
        .to_string_lossy()
        .into_owned()
}

fn ids_or_none<T>(id: Option<T>, raw: impl Fn(T) -> u32) -> GLuint {
    id.map(raw).unwrap_or(0)
}

impl Driver for GlDriver {
    // ===== OBJECT LIFECYCLE =====

    fn create_buffer(&mut self) -> Result<BufferId> {
        let name = self.create_name("glCreateBuffers", |out| unsafe { gl::CreateBuffers(1, out) })?;
        BufferId::from_raw(name).ok_or_else(|| aurora_err!(DriverError, SOURCE, "Null buffer name"))
    }

    fn delete_buffer(&mut self, id: BufferId) {
        let name = id.raw();
        unsafe { gl::DeleteBuffers(1, &name) };
    }

    fn create_texture(&mut self, target: TextureTarget) -> Result<TextureId> {
        let gl_target = texture_target_to_gl(target);
        let name = self.create_name("glCreateTextures", |out| unsafe {
            gl::CreateTextures(gl_target, 1, out)
        })?;
        TextureId::from_raw(name).ok_or_else(|| aurora_err!(DriverError, SOURCE, "Null texture name"))
    }

    fn delete_texture(&mut self, id: TextureId) {
        let name = id.raw();
        unsafe { gl::DeleteTextures(1, &name) };
    }

    fn create_renderbuffer(&mut self) -> Result<RenderbufferId> {
        let name = self.create_name("glCreateRenderbuffers", |out| unsafe {
            gl::CreateRenderbuffers(1, out)
        })?;
        RenderbufferId::from_raw(name)
            .ok_or_else(|| aurora_err!(DriverError, SOURCE, "Null renderbuffer name"))
    }

    fn delete_renderbuffer(&mut self, id: RenderbufferId) {
        let name = id.raw();
        unsafe { gl::DeleteRenderbuffers(1, &name) };
    }

    fn create_framebuffer(&mut self) -> Result<FramebufferId> {
        let name = self.create_name("glCreateFramebuffers", |out| unsafe {
            gl::CreateFramebuffers(1, out)
        })?;
        FramebufferId::from_raw(name)
            .ok_or_else(|| aurora_err!(DriverError, SOURCE, "Null framebuffer name"))
    }

    fn delete_framebuffer(&mut self, id: FramebufferId) {
        let name = id.raw();
        unsafe { gl::DeleteFramebuffers(1, &name) };
    }

    fn create_vertex_array(&mut self) -> Result<VertexArrayId> {
        let name = self.create_name("glCreateVertexArrays", |out| unsafe {
            gl::CreateVertexArrays(1, out)
        })?;
        VertexArrayId::from_raw(name)
            .ok_or_else(|| aurora_err!(DriverError, SOURCE, "Null vertex array name"))
    }

    fn delete_vertex_array(&mut self, id: VertexArrayId) {
        let name = id.raw();
        unsafe { gl::DeleteVertexArrays(1, &name) };
    }

    // ===== BUFFERS =====

    fn buffer_storage(
        &mut self,
        id: BufferId,
        size: usize,
        data: Option<&[u8]>,
        flags: BufferFlags,
    ) -> Result<()> {
        let bits = storage_flags_to_gl(flags);
        // GL reads `size` bytes from the pointer, so a short slice is
        // uploaded separately
        let full = data.filter(|data| data.len() >= size);
        let initial = full.map_or(ptr::null(), data_ptr);
        unsafe { gl::NamedBufferStorage(id.raw(), size as GLsizeiptr, initial, bits) };
        self.check("glNamedBufferStorage")?;

        if let Some(partial) = data.filter(|data| full.is_none() && !data.is_empty()) {
            unsafe {
                gl::NamedBufferSubData(id.raw(), 0, partial.len() as GLsizeiptr, data_ptr(partial))
            };
            self.check("glNamedBufferSubData")?;
        }
        Ok(())
    }

    fn map_buffer_range(
        &mut self,
        id: BufferId,
        offset: usize,
        size: usize,
        access: BufferFlags,
    ) -> Option<NonNull<u8>> {
        let pointer = unsafe {
            gl::MapNamedBufferRange(
                id.raw(),
                offset as GLintptr,
                size as GLsizeiptr,
                map_access_to_gl(access),
            )
        };
        NonNull::new(pointer as *mut u8)
    }

    fn unmap_buffer(&mut self, id: BufferId) -> bool {
        unsafe { gl::UnmapNamedBuffer(id.raw()) == gl::TRUE }
    }

    fn buffer_sub_data(&mut self, id: BufferId, offset: usize, data: &[u8]) -> Result<()> {
        unsafe {
            gl::NamedBufferSubData(
                id.raw(),
                offset as GLintptr,
                data.len() as GLsizeiptr,
                data_ptr(data),
            )
        };
        self.check("glNamedBufferSubData")
    }

    fn get_buffer_sub_data(&mut self, id: BufferId, offset: usize, out: &mut [u8]) -> Result<()> {
        unsafe {
            gl::GetNamedBufferSubData(
                id.raw(),
                offset as GLintptr,
                out.len() as GLsizeiptr,
                out.as_mut_ptr() as *mut c_void,
            )
        };
        self.check("glGetNamedBufferSubData")
    }

    fn bind_buffer(&mut self, target: BufferTarget, id: Option<BufferId>) {
        unsafe { gl::BindBuffer(buffer_target_to_gl(target), ids_or_none(id, BufferId::raw)) };
    }

    fn bind_buffer_base(&mut self, target: BufferTarget, index: u32, id: Option<BufferId>) {
        unsafe {
            gl::BindBufferBase(buffer_target_to_gl(target), index, ids_or_none(id, BufferId::raw))
        };
    }

    // ===== TEXTURES =====

    fn texture_storage_1d(
        &mut self,
        id: TextureId,
        levels: u32,
        format: InternalFormat,
        width: u32,
    ) -> Result<()> {
        unsafe {
            gl::TextureStorage1D(
                id.raw(),
                levels as GLsizei,
                internal_format_to_gl(format),
                width as GLsizei,
            )
        };
        self.check("glTextureStorage1D")
    }

    fn texture_storage_2d(
        &mut self,
        id: TextureId,
        levels: u32,
        format: InternalFormat,
        width: u32,
        height: u32,
    ) -> Result<()> {
        unsafe {
            gl::TextureStorage2D(
                id.raw(),
                levels as GLsizei,
                internal_format_to_gl(format),
                width as GLsizei,
                height as GLsizei,
            )
        };
        self.check("glTextureStorage2D")
    }

    fn texture_storage_2d_multisample(
        &mut self,
        id: TextureId,
        samples: u32,
        format: InternalFormat,
        width: u32,
        height: u32,
        fixed_sample_locations: bool,
    ) -> Result<()> {
        unsafe {
            gl::TextureStorage2DMultisample(
                id.raw(),
                samples as GLsizei,
                internal_format_to_gl(format),
                width as GLsizei,
                height as GLsizei,
                gl_bool(fixed_sample_locations),
            )
        };
        self.check("glTextureStorage2DMultisample")
    }

    fn texture_storage_3d(
        &mut self,
        id: TextureId,
        levels: u32,
        format: InternalFormat,
        width: u32,
        height: u32,
        depth: u32,
    ) -> Result<()> {
        unsafe {
            gl::TextureStorage3D(
                id.raw(),
                levels as GLsizei,
                internal_format_to_gl(format),
                width as GLsizei,
                height as GLsizei,
                depth as GLsizei,
            )
        };
        self.check("glTextureStorage3D")
    }

    fn texture_storage_3d_multisample(
        &mut self,
        id: TextureId,
        samples: u32,
        format: InternalFormat,
        width: u32,
        height: u32,
        depth: u32,
        fixed_sample_locations: bool,
    ) -> Result<()> {
        unsafe {
            gl::TextureStorage3DMultisample(
                id.raw(),
                samples as GLsizei,
                internal_format_to_gl(format),
                width as GLsizei,
                height as GLsizei,
                depth as GLsizei,
                gl_bool(fixed_sample_locations),
            )
        };
        self.check("glTextureStorage3DMultisample")
    }

    fn texture_sub_image_1d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        format: PixelFormat,
        pixel_type: PixelType,
        data: &[u8],
    ) -> Result<()> {
        unsafe {
            gl::TextureSubImage1D(
                id.raw(),
                region.level as GLint,
                region.x as GLint,
                region.width as GLsizei,
                pixel_format_to_gl(format),
                pixel_type_to_gl(pixel_type),
                data_ptr(data),
            )
        };
        self.check("glTextureSubImage1D")
    }

    fn texture_sub_image_2d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        format: PixelFormat,
        pixel_type: PixelType,
        data: &[u8],
    ) -> Result<()> {
        unsafe {
            gl::TextureSubImage2D(
                id.raw(),
                region.level as GLint,
                region.x as GLint,
                region.y as GLint,
                region.width as GLsizei,
                region.height as GLsizei,
                pixel_format_to_gl(format),
                pixel_type_to_gl(pixel_type),
                data_ptr(data),
            )
        };
        self.check("glTextureSubImage2D")
    }

    fn texture_sub_image_3d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        format: PixelFormat,
        pixel_type: PixelType,
        data: &[u8],
    ) -> Result<()> {
        unsafe {
            gl::TextureSubImage3D(
                id.raw(),
                region.level as GLint,
                region.x as GLint,
                region.y as GLint,
                region.z as GLint,
                region.width as GLsizei,
                region.height as GLsizei,
                region.depth as GLsizei,
                pixel_format_to_gl(format),
                pixel_type_to_gl(pixel_type),
                data_ptr(data),
            )
        };
        self.check("glTextureSubImage3D")
    }

    fn compressed_texture_sub_image_1d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        format: InternalFormat,
        data: &[u8],
    ) -> Result<()> {
        unsafe {
            gl::CompressedTextureSubImage1D(
                id.raw(),
                region.level as GLint,
                region.x as GLint,
                region.width as GLsizei,
                internal_format_to_gl(format),
                data.len() as GLsizei,
                data_ptr(data),
            )
        };
        self.check("glCompressedTextureSubImage1D")
    }

    fn compressed_texture_sub_image_2d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        format: InternalFormat,
        data: &[u8],
    ) -> Result<()> {
        unsafe {
            gl::CompressedTextureSubImage2D(
                id.raw(),
                region.level as GLint,
                region.x as GLint,
                region.y as GLint,
                region.width as GLsizei,
                region.height as GLsizei,
                internal_format_to_gl(format),
                data.len() as GLsizei,
                data_ptr(data),
            )
        };
        self.check("glCompressedTextureSubImage2D")
    }

    fn compressed_texture_sub_image_3d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        format: InternalFormat,
        data: &[u8],
    ) -> Result<()> {
        unsafe {
            gl::CompressedTextureSubImage3D(
                id.raw(),
                region.level as GLint,
                region.x as GLint,
                region.y as GLint,
                region.z as GLint,
                region.width as GLsizei,
                region.height as GLsizei,
                region.depth as GLsizei,
                internal_format_to_gl(format),
                data.len() as GLsizei,
                data_ptr(data),
            )
        };
        self.check("glCompressedTextureSubImage3D")
    }

    fn generate_texture_mipmap(&mut self, id: TextureId) {
        unsafe { gl::GenerateTextureMipmap(id.raw()) };
    }

    fn texture_parameter_i(&mut self, id: TextureId, name: TextureParameter, value: i32) {
        unsafe { gl::TextureParameteri(id.raw(), texture_parameter_to_gl(name), value) };
    }

    fn texture_parameter_f(&mut self, id: TextureId, name: TextureParameter, value: f32) {
        unsafe { gl::TextureParameterf(id.raw(), texture_parameter_to_gl(name), value) };
    }

    fn get_texture_parameter_i(&mut self, id: TextureId, name: TextureParameter) -> i32 {
        let mut value: GLint = 0;
        unsafe { gl::GetTextureParameteriv(id.raw(), texture_parameter_to_gl(name), &mut value) };
        value
    }

    fn bind_texture(&mut self, target: TextureTarget, id: Option<TextureId>) {
        unsafe { gl::BindTexture(texture_target_to_gl(target), ids_or_none(id, TextureId::raw)) };
    }

    fn bind_texture_unit(&mut self, unit: u32, id: Option<TextureId>) {
        unsafe { gl::BindTextureUnit(unit, ids_or_none(id, TextureId::raw)) };
    }

    fn max_texture_units(&mut self) -> u32 {
        if let Some(units) = self.max_texture_units {
            return units;
        }
        let mut value: GLint = 0;
        unsafe { gl::GetIntegerv(gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS, &mut value) };
        let units = value.max(0) as u32;
        self.max_texture_units = Some(units);
        units
    }

    // ===== RENDERBUFFERS =====

    fn renderbuffer_storage(
        &mut self,
        id: RenderbufferId,
        format: InternalFormat,
        width: u32,
        height: u32,
    ) -> Result<()> {
        unsafe {
            gl::NamedRenderbufferStorage(
                id.raw(),
                internal_format_to_gl(format),
                width as GLsizei,
                height as GLsizei,
            )
        };
        self.check("glNamedRenderbufferStorage")
    }

    fn renderbuffer_storage_multisample(
        &mut self,
        id: RenderbufferId,
        samples: u32,
        format: InternalFormat,
        width: u32,
        height: u32,
    ) -> Result<()> {
        unsafe {
            gl::NamedRenderbufferStorageMultisample(
                id.raw(),
                samples as GLsizei,
                internal_format_to_gl(format),
                width as GLsizei,
                height as GLsizei,
            )
        };
        self.check("glNamedRenderbufferStorageMultisample")
    }

    // ===== FRAMEBUFFERS =====

    fn framebuffer_renderbuffer(
        &mut self,
        id: FramebufferId,
        point: AttachmentPoint,
        renderbuffer: RenderbufferId,
    ) {
        unsafe {
            gl::NamedFramebufferRenderbuffer(
                id.raw(),
                attachment_point_to_gl(point),
                gl::RENDERBUFFER,
                renderbuffer.raw(),
            )
        };
    }

    fn framebuffer_texture(
        &mut self,
        id: FramebufferId,
        point: AttachmentPoint,
        texture: TextureId,
        level: u32,
    ) {
        unsafe {
            gl::NamedFramebufferTexture(
                id.raw(),
                attachment_point_to_gl(point),
                texture.raw(),
                level as GLint,
            )
        };
    }

    fn framebuffer_draw_buffers(&mut self, id: FramebufferId, points: &[AttachmentPoint]) {
        let buffers: Vec<GLenum> = points.iter().map(|&point| attachment_point_to_gl(point)).collect();
        unsafe {
            gl::NamedFramebufferDrawBuffers(id.raw(), buffers.len() as GLsizei, buffers.as_ptr())
        };
    }

    fn framebuffer_disable_draw_buffers(&mut self, id: FramebufferId) {
        unsafe { gl::NamedFramebufferDrawBuffer(id.raw(), gl::NONE) };
    }

    fn check_framebuffer_status(&mut self, id: FramebufferId) -> FramebufferStatus {
        let status = unsafe { gl::CheckNamedFramebufferStatus(id.raw(), gl::FRAMEBUFFER) };
        framebuffer_status_from_gl(status)
    }

    fn bind_framebuffer(&mut self, id: Option<FramebufferId>) {
        unsafe { gl::BindFramebuffer(gl::FRAMEBUFFER, ids_or_none(id, FramebufferId::raw)) };
    }

    // ===== VERTEX ARRAYS =====

    fn vertex_array_vertex_buffer(
        &mut self,
        id: VertexArrayId,
        binding: u32,
        buffer: BufferId,
        offset: usize,
        stride: u32,
    ) {
        unsafe {
            gl::VertexArrayVertexBuffer(
                id.raw(),
                binding,
                buffer.raw(),
                offset as GLintptr,
                stride as GLsizei,
            )
        };
    }

    fn vertex_array_binding_divisor(&mut self, id: VertexArrayId, binding: u32, divisor: u32) {
        unsafe { gl::VertexArrayBindingDivisor(id.raw(), binding, divisor) };
    }

    fn enable_vertex_array_attrib(&mut self, id: VertexArrayId, slot: u32) {
        unsafe { gl::EnableVertexArrayAttrib(id.raw(), slot) };
    }

    fn vertex_array_attrib_binding(&mut self, id: VertexArrayId, slot: u32, binding: u32) {
        unsafe { gl::VertexArrayAttribBinding(id.raw(), slot, binding) };
    }

    fn vertex_array_attrib_format(
        &mut self,
        id: VertexArrayId,
        slot: u32,
        count: u32,
        scalar: ScalarType,
        normalized: bool,
        relative_offset: u32,
    ) {
        unsafe {
            gl::VertexArrayAttribFormat(
                id.raw(),
                slot,
                count as GLint,
                scalar_type_to_gl(scalar),
                gl_bool(normalized),
                relative_offset,
            )
        };
    }

    fn vertex_array_attrib_i_format(
        &mut self,
        id: VertexArrayId,
        slot: u32,
        count: u32,
        scalar: ScalarType,
        relative_offset: u32,
    ) {
        unsafe {
            gl::VertexArrayAttribIFormat(
                id.raw(),
                slot,
                count as GLint,
                scalar_type_to_gl(scalar),
                relative_offset,
            )
        };
    }

    fn vertex_array_attrib_l_format(
        &mut self,
        id: VertexArrayId,
        slot: u32,
        count: u32,
        scalar: ScalarType,
        relative_offset: u32,
    ) {
        unsafe {
            gl::VertexArrayAttribLFormat(
                id.raw(),
                slot,
                count as GLint,
                scalar_type_to_gl(scalar),
                relative_offset,
            )
        };
    }

    fn vertex_array_element_buffer(&mut self, id: VertexArrayId, buffer: BufferId) {
        unsafe { gl::VertexArrayElementBuffer(id.raw(), buffer.raw()) };
    }

    fn bind_vertex_array(&mut self, id: Option<VertexArrayId>) {
        unsafe { gl::BindVertexArray(ids_or_none(id, VertexArrayId::raw)) };
    }

    fn max_vertex_attribs(&mut self) -> u32 {
        if let Some(attribs) = self.max_vertex_attribs {
            return attribs;
        }
        let mut value: GLint = 0;
        unsafe { gl::GetIntegerv(gl::MAX_VERTEX_ATTRIBS, &mut value) };
        let attribs = value.max(0) as u32;
        self.max_vertex_attribs = Some(attribs);
        attribs
    }

    // ===== DEBUG =====

    fn set_debug_hook(&mut self, hook: Option<DebugHook>, synchronous: bool) {
        let Some(hook) = hook else {
            self.remove_debug_hook();
            aurora_debug!(SOURCE, "Debug output disabled");
            return;
        };

        let mut slot: HookSlot = Box::new(hook);
        unsafe {
            gl::DebugMessageCallback(Some(gl_debug::debug_callback), gl_debug::user_param(&mut slot));
            gl::Enable(gl::DEBUG_OUTPUT);
            if synchronous {
                gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
            } else {
                gl::Disable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
            }
        }
        // GL now points at the new slot, so the previous hook can go
        self.debug_hook = Some(slot);
    }

    fn insert_debug_message(&mut self, message: &DebugMessage) {
        let text = message.message.as_bytes();
        unsafe {
            gl::DebugMessageInsert(
                debug_source_to_gl(message.source),
                debug_type_to_gl(message.kind),
                message.id,
                debug_severity_to_gl(message.severity),
                text.len() as GLsizei,
                text.as_ptr() as *const GLchar,
            )
        };
    }

    fn object_label(&mut self, object: ObjectHandle, label: &str) {
        let (identifier, name) = object_handle_to_gl(object);
        unsafe {
            gl::ObjectLabel(
                identifier,
                name,
                label.len() as GLsizei,
                label.as_ptr() as *const GLchar,
            )
        };
    }

    fn get_error(&mut self) -> ErrorCode {
        error_code_from_gl(unsafe { gl::GetError() })
    }
}

impl Drop for GlDriver {
    fn drop(&mut self) {
        self.remove_debug_hook();
    }
}
