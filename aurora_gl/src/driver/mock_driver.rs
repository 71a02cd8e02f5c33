/// Mock driver for tests (no GPU required)
///
/// Records every call as a string, in order, and simulates just enough
/// driver state to exercise the resource layer: object names, buffer
/// memory (mapped pointers are real), texture and renderbuffer sizes,
/// framebuffer attachments and texture parameters.
///
/// `MockDriver` is a cheap handle over shared state. Keep a clone to
/// inspect calls after moving the driver into a [`Context`](crate::Context).

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ptr::NonNull;
use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::aurora_bail;
use crate::driver::{
    AttachmentId, AttachmentPoint, BufferFlags, BufferId, BufferTarget, DebugHook, DebugMessage,
    Driver, ErrorCode, FramebufferId, ObjectHandle, FramebufferStatus, InternalFormat, PixelFormat, PixelType,
    RenderbufferId, ScalarType, TextureId, TextureParameter, TextureRegion, TextureTarget,
    VertexArrayId,
};
use crate::error::Result;
use crate::utils::NameAllocator;

// ============================================================================
// Fault injection
// ============================================================================

/// Failures the mock driver can be told to produce
#[derive(Debug, Clone)]
pub struct MockFaults {
    /// `map_buffer_range` returns null and raises `GL_INVALID_OPERATION`
    pub fail_map: bool,
    /// `unmap_buffer` returns false
    pub fail_unmap: bool,
    /// `buffer_storage` fails
    pub fail_buffer_storage: bool,
    /// Texture storage calls fail
    pub fail_texture_storage: bool,
    /// Renderbuffer storage calls fail
    pub fail_renderbuffer_storage: bool,
    /// Texture storage succeeds but is reported as mutable
    pub mutable_texture_storage: bool,
    /// The n-th `create_texture` call (0-based, counted from now) fails
    pub fail_texture_creation_at: Option<usize>,
    /// Status returned by every completeness query
    pub framebuffer_status: Option<FramebufferStatus>,
    /// Reported by `max_texture_units`
    pub max_texture_units: u32,
    /// Reported by `max_vertex_attribs`
    pub max_vertex_attribs: u32,
}

impl Default for MockFaults {
    fn default() -> Self {
        Self {
            fail_map: false,
            fail_unmap: false,
            fail_buffer_storage: false,
            fail_texture_storage: false,
            fail_renderbuffer_storage: false,
            mutable_texture_storage: false,
            fail_texture_creation_at: None,
            framebuffer_status: None,
            max_texture_units: 32,
            max_vertex_attribs: 16,
        }
    }
}

// ============================================================================
// Simulated objects
// ============================================================================

#[derive(Debug, Default)]
struct MockBuffer {
    /// Allocated once by `buffer_storage`, never resized
    memory: Option<Vec<u8>>,
    flags: BufferFlags,
    mapped: Option<(usize, usize)>,
}

#[derive(Debug)]
struct MockTexture {
    target: TextureTarget,
    /// Width, height, depth once storage is allocated
    size: Option<(u32, u32, u32)>,
    levels: u32,
    samples: u32,
    format: Option<InternalFormat>,
    params_i: FxHashMap<TextureParameter, i32>,
    params_f: FxHashMap<TextureParameter, f32>,
}

#[derive(Debug, Default)]
struct MockRenderbuffer {
    size: Option<(u32, u32)>,
    samples: u32,
    format: Option<InternalFormat>,
}

#[derive(Debug, Default)]
struct MockFramebuffer {
    attachments: Vec<(AttachmentPoint, AttachmentId)>,
    draw_buffers: Option<Vec<AttachmentPoint>>,
}

#[derive(Default)]
struct MockState {
    calls: Vec<String>,
    faults: MockFaults,
    texture_creations: usize,

    buffer_names: NameAllocator,
    texture_names: NameAllocator,
    renderbuffer_names: NameAllocator,
    framebuffer_names: NameAllocator,
    vertex_array_names: NameAllocator,

    buffers: FxHashMap<u32, MockBuffer>,
    textures: FxHashMap<u32, MockTexture>,
    renderbuffers: FxHashMap<u32, MockRenderbuffer>,
    framebuffers: FxHashMap<u32, MockFramebuffer>,
    vertex_arrays: FxHashSet<u32>,

    bound_framebuffer: Option<FramebufferId>,
    bound_vertex_array: Option<VertexArrayId>,

    errors: VecDeque<ErrorCode>,
    labels: FxHashMap<ObjectHandle, String>,
    debug_hook: Option<DebugHook>,
    debug_synchronous: bool,
}

impl MockState {
    fn record(&mut self, call: String) {
        self.calls.push(call);
    }

    /// 0 once the names run out, which callers report as a null name
    fn next_name(names: &mut NameAllocator) -> u32 {
        names.acquire().map_or(0, |name| name.get())
    }
}

// ============================================================================
// Mock driver
// ============================================================================

#[derive(Clone, Default)]
pub struct MockDriver {
    state: Rc<RefCell<MockState>>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adjust the fault configuration
    ///
    /// Restarts the count used by `fail_texture_creation_at`.
    pub fn configure(&self, f: impl FnOnce(&mut MockFaults)) {
        let mut state = self.state.borrow_mut();
        f(&mut state.faults);
        state.texture_creations = 0;
    }

    /// All recorded calls, in order
    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    /// Recorded calls whose name is `name`
    pub fn calls_named(&self, name: &str) -> Vec<String> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|call| call.split('(').next() == Some(name))
            .cloned()
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.state.borrow().calls.len()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Number of driver objects of every kind currently alive
    pub fn live_object_count(&self) -> usize {
        let state = self.state.borrow();
        state.buffers.len()
            + state.textures.len()
            + state.renderbuffers.len()
            + state.framebuffers.len()
            + state.vertex_arrays.len()
    }

    pub fn buffer_exists(&self, id: BufferId) -> bool {
        self.state.borrow().buffers.contains_key(&id.raw())
    }

    pub fn texture_exists(&self, id: TextureId) -> bool {
        self.state.borrow().textures.contains_key(&id.raw())
    }

    pub fn renderbuffer_exists(&self, id: RenderbufferId) -> bool {
        self.state.borrow().renderbuffers.contains_key(&id.raw())
    }

    pub fn framebuffer_exists(&self, id: FramebufferId) -> bool {
        self.state.borrow().framebuffers.contains_key(&id.raw())
    }

    pub fn vertex_array_exists(&self, id: VertexArrayId) -> bool {
        self.state.borrow().vertex_arrays.contains(&id.raw())
    }

    /// Copy of a buffer's simulated memory
    pub fn buffer_contents(&self, id: BufferId) -> Option<Vec<u8>> {
        self.state.borrow().buffers.get(&id.raw()).and_then(|b| b.memory.clone())
    }

    /// Flags passed to `buffer_storage`
    pub fn buffer_flags(&self, id: BufferId) -> Option<BufferFlags> {
        self.state.borrow().buffers.get(&id.raw()).map(|b| b.flags)
    }

    pub fn buffer_is_mapped(&self, id: BufferId) -> bool {
        self.state
            .borrow()
            .buffers
            .get(&id.raw())
            .map(|b| b.mapped.is_some())
            .unwrap_or(false)
    }

    /// Allocated (width, height, depth) of a texture
    pub fn texture_size(&self, id: TextureId) -> Option<(u32, u32, u32)> {
        self.state.borrow().textures.get(&id.raw()).and_then(|t| t.size)
    }

    pub fn texture_target(&self, id: TextureId) -> Option<TextureTarget> {
        self.state.borrow().textures.get(&id.raw()).map(|t| t.target)
    }

    pub fn texture_levels(&self, id: TextureId) -> Option<u32> {
        self.state.borrow().textures.get(&id.raw()).map(|t| t.levels)
    }

    pub fn texture_samples(&self, id: TextureId) -> Option<u32> {
        self.state.borrow().textures.get(&id.raw()).map(|t| t.samples)
    }

    pub fn texture_format(&self, id: TextureId) -> Option<InternalFormat> {
        self.state.borrow().textures.get(&id.raw()).and_then(|t| t.format)
    }

    pub fn texture_parameter_f_value(&self, id: TextureId, name: TextureParameter) -> Option<f32> {
        self.state
            .borrow()
            .textures
            .get(&id.raw())
            .and_then(|t| t.params_f.get(&name).copied())
    }

    pub fn texture_parameter_i_value(&self, id: TextureId, name: TextureParameter) -> Option<i32> {
        self.state
            .borrow()
            .textures
            .get(&id.raw())
            .and_then(|t| t.params_i.get(&name).copied())
    }

    pub fn renderbuffer_size(&self, id: RenderbufferId) -> Option<(u32, u32)> {
        self.state.borrow().renderbuffers.get(&id.raw()).and_then(|r| r.size)
    }

    pub fn renderbuffer_samples(&self, id: RenderbufferId) -> Option<u32> {
        self.state.borrow().renderbuffers.get(&id.raw()).map(|r| r.samples)
    }

    pub fn renderbuffer_format(&self, id: RenderbufferId) -> Option<InternalFormat> {
        self.state.borrow().renderbuffers.get(&id.raw()).and_then(|r| r.format)
    }

    pub fn framebuffer_attachments(&self, id: FramebufferId) -> Vec<(AttachmentPoint, AttachmentId)> {
        self.state
            .borrow()
            .framebuffers
            .get(&id.raw())
            .map(|f| f.attachments.clone())
            .unwrap_or_default()
    }

    /// `Some(vec![])` when draw buffers were disabled
    pub fn framebuffer_draw_buffers(&self, id: FramebufferId) -> Option<Vec<AttachmentPoint>> {
        self.state
            .borrow()
            .framebuffers
            .get(&id.raw())
            .and_then(|f| f.draw_buffers.clone())
    }

    pub fn bound_framebuffer(&self) -> Option<FramebufferId> {
        self.state.borrow().bound_framebuffer
    }

    pub fn bound_vertex_array(&self) -> Option<VertexArrayId> {
        self.state.borrow().bound_vertex_array
    }

    pub fn object_label_of(&self, object: ObjectHandle) -> Option<String> {
        self.state.borrow().labels.get(&object).cloned()
    }

    /// Queue an error flag for `get_error`
    pub fn push_error(&self, code: ErrorCode) {
        self.state.borrow_mut().errors.push_back(code);
    }

    pub fn has_debug_hook(&self) -> bool {
        self.state.borrow().debug_hook.is_some()
    }

    pub fn debug_synchronous(&self) -> bool {
        self.state.borrow().debug_synchronous
    }

    /// Deliver a message as if the driver produced it
    ///
    /// The hook is taken out of the state while it runs, so it may inspect
    /// this driver.
    pub fn emit_debug_message(&self, message: &DebugMessage) {
        let hook = self.state.borrow_mut().debug_hook.take();
        if let Some(mut hook) = hook {
            hook(message);
            let mut state = self.state.borrow_mut();
            if state.debug_hook.is_none() {
                state.debug_hook = Some(hook);
            }
        }
    }

    fn storage_failure(&self, call: &str) -> bool {
        let state = self.state.borrow();
        match call {
            "buffer_storage" => state.faults.fail_buffer_storage,
            "renderbuffer_storage" => state.faults.fail_renderbuffer_storage,
            _ => state.faults.fail_texture_storage,
        }
    }

    fn allocate_texture(
        &mut self,
        id: TextureId,
        levels: u32,
        samples: u32,
        format: InternalFormat,
        size: (u32, u32, u32),
    ) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let texture = match state.textures.get_mut(&id.raw()) {
            Some(texture) => texture,
            None => aurora_bail!(DriverError, "aurora::mock", "Unknown texture {}", id),
        };
        if texture.size.is_some() {
            aurora_bail!(DriverError, "aurora::mock", "Texture {} storage is immutable", id);
        }
        texture.size = Some(size);
        texture.levels = levels;
        texture.samples = samples;
        texture.format = Some(format);
        Ok(())
    }

    fn allocate_renderbuffer(
        &mut self,
        id: RenderbufferId,
        samples: u32,
        format: InternalFormat,
        width: u32,
        height: u32,
    ) -> Result<()> {
        let mut state = self.state.borrow_mut();
        match state.renderbuffers.get_mut(&id.raw()) {
            Some(renderbuffer) => {
                renderbuffer.size = Some((width, height));
                renderbuffer.samples = samples;
                renderbuffer.format = Some(format);
                Ok(())
            }
            None => aurora_bail!(DriverError, "aurora::mock", "Unknown renderbuffer {}", id),
        }
    }

    /// Records `call(id, level, x, y, z, width, height, depth, data_len)`
    fn check_upload(&self, id: TextureId, call: &str, region: &TextureRegion, data_len: usize) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.record(format!(
            "{}({}, {}, {}, {}, {}, {}, {}, {}, {})",
            call,
            id,
            region.level,
            region.x,
            region.y,
            region.z,
            region.width,
            region.height,
            region.depth,
            data_len
        ));
        match state.textures.get(&id.raw()) {
            Some(texture) if texture.size.is_some() => Ok(()),
            Some(_) => aurora_bail!(DriverError, "aurora::mock", "Texture {} has no storage", id),
            None => aurora_bail!(DriverError, "aurora::mock", "Unknown texture {}", id),
        }
    }
}

impl Driver for MockDriver {
    // ===== OBJECT LIFECYCLE =====

    fn create_buffer(&mut self) -> Result<BufferId> {
        let mut state = self.state.borrow_mut();
        let raw = MockState::next_name(&mut state.buffer_names);
        state.buffers.insert(raw, MockBuffer::default());
        state.record(format!("create_buffer() -> {}", raw));
        BufferId::from_raw(raw).ok_or_else(|| crate::aurora_err!(DriverError, "aurora::mock", "Null buffer name"))
    }

    fn delete_buffer(&mut self, id: BufferId) {
        let mut state = self.state.borrow_mut();
        state.record(format!("delete_buffer({})", id));
        if state.buffers.remove(&id.raw()).is_some() {
            state.buffer_names.release(id.raw());
        }
    }

    fn create_texture(&mut self, target: TextureTarget) -> Result<TextureId> {
        let mut state = self.state.borrow_mut();
        let attempt = state.texture_creations;
        state.texture_creations += 1;
        if state.faults.fail_texture_creation_at == Some(attempt) {
            state.record(format!("create_texture({:?}) -> failed", target));
            drop(state);
            aurora_bail!(DriverError, "aurora::mock", "Texture creation #{} failed", attempt);
        }
        let raw = MockState::next_name(&mut state.texture_names);
        state.textures.insert(
            raw,
            MockTexture {
                target,
                size: None,
                levels: 0,
                samples: 0,
                format: None,
                params_i: FxHashMap::default(),
                params_f: FxHashMap::default(),
            },
        );
        state.record(format!("create_texture({:?}) -> {}", target, raw));
        TextureId::from_raw(raw).ok_or_else(|| crate::aurora_err!(DriverError, "aurora::mock", "Null texture name"))
    }

    fn delete_texture(&mut self, id: TextureId) {
        let mut state = self.state.borrow_mut();
        state.record(format!("delete_texture({})", id));
        if state.textures.remove(&id.raw()).is_some() {
            state.texture_names.release(id.raw());
        }
    }

    fn create_renderbuffer(&mut self) -> Result<RenderbufferId> {
        let mut state = self.state.borrow_mut();
        let raw = MockState::next_name(&mut state.renderbuffer_names);
        state.renderbuffers.insert(raw, MockRenderbuffer::default());
        state.record(format!("create_renderbuffer() -> {}", raw));
        RenderbufferId::from_raw(raw)
            .ok_or_else(|| crate::aurora_err!(DriverError, "aurora::mock", "Null renderbuffer name"))
    }

    fn delete_renderbuffer(&mut self, id: RenderbufferId) {
        let mut state = self.state.borrow_mut();
        state.record(format!("delete_renderbuffer({})", id));
        if state.renderbuffers.remove(&id.raw()).is_some() {
            state.renderbuffer_names.release(id.raw());
        }
    }

    fn create_framebuffer(&mut self) -> Result<FramebufferId> {
        let mut state = self.state.borrow_mut();
        let raw = MockState::next_name(&mut state.framebuffer_names);
        state.framebuffers.insert(raw, MockFramebuffer::default());
        state.record(format!("create_framebuffer() -> {}", raw));
        FramebufferId::from_raw(raw)
            .ok_or_else(|| crate::aurora_err!(DriverError, "aurora::mock", "Null framebuffer name"))
    }

    fn delete_framebuffer(&mut self, id: FramebufferId) {
        let mut state = self.state.borrow_mut();
        state.record(format!("delete_framebuffer({})", id));
        if state.framebuffers.remove(&id.raw()).is_some() {
            state.framebuffer_names.release(id.raw());
        }
        if state.bound_framebuffer == Some(id) {
            state.bound_framebuffer = None;
        }
    }

    fn create_vertex_array(&mut self) -> Result<VertexArrayId> {
        let mut state = self.state.borrow_mut();
        let raw = MockState::next_name(&mut state.vertex_array_names);
        state.vertex_arrays.insert(raw);
        state.record(format!("create_vertex_array() -> {}", raw));
        VertexArrayId::from_raw(raw)
            .ok_or_else(|| crate::aurora_err!(DriverError, "aurora::mock", "Null vertex array name"))
    }

    fn delete_vertex_array(&mut self, id: VertexArrayId) {
        let mut state = self.state.borrow_mut();
        state.record(format!("delete_vertex_array({})", id));
        if state.vertex_arrays.remove(&id.raw()) {
            state.vertex_array_names.release(id.raw());
        }
        if state.bound_vertex_array == Some(id) {
            state.bound_vertex_array = None;
        }
    }

    // ===== BUFFERS =====

    fn buffer_storage(
        &mut self,
        id: BufferId,
        size: usize,
        data: Option<&[u8]>,
        flags: BufferFlags,
    ) -> Result<()> {
        self.state
            .borrow_mut()
            .record(format!("buffer_storage({}, {}, {:?})", id, size, flags));
        if self.storage_failure("buffer_storage") {
            self.push_error(ErrorCode::OutOfMemory);
            aurora_bail!(DriverError, "aurora::mock", "Buffer {} storage allocation failed", id);
        }
        let mut state = self.state.borrow_mut();
        let buffer = match state.buffers.get_mut(&id.raw()) {
            Some(buffer) => buffer,
            None => aurora_bail!(DriverError, "aurora::mock", "Unknown buffer {}", id),
        };
        if buffer.memory.is_some() {
            aurora_bail!(DriverError, "aurora::mock", "Buffer {} storage is immutable", id);
        }
        let mut memory = vec![0u8; size];
        if let Some(data) = data {
            let len = data.len().min(size);
            memory[..len].copy_from_slice(&data[..len]);
        }
        buffer.memory = Some(memory);
        buffer.flags = flags;
        Ok(())
    }

    fn map_buffer_range(
        &mut self,
        id: BufferId,
        offset: usize,
        size: usize,
        access: BufferFlags,
    ) -> Option<NonNull<u8>> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        state.record(format!("map_buffer_range({}, {}, {}, {:?})", id, offset, size, access));
        if state.faults.fail_map {
            state.errors.push_back(ErrorCode::InvalidOperation);
            return None;
        }
        let buffer = state.buffers.get_mut(&id.raw())?;
        if buffer.mapped.is_some() {
            state.errors.push_back(ErrorCode::InvalidOperation);
            return None;
        }
        let memory = buffer.memory.as_mut()?;
        if offset.checked_add(size).map_or(true, |end| end > memory.len()) {
            state.errors.push_back(ErrorCode::InvalidValue);
            return None;
        }
        // The vector is never resized after storage, so the pointer stays
        // valid until the buffer is deleted.
        let ptr = NonNull::new(memory[offset..].as_mut_ptr())?;
        buffer.mapped = Some((offset, size));
        Some(ptr)
    }

    fn unmap_buffer(&mut self, id: BufferId) -> bool {
        let mut state = self.state.borrow_mut();
        state.record(format!("unmap_buffer({})", id));
        if state.faults.fail_unmap {
            return false;
        }
        match state.buffers.get_mut(&id.raw()) {
            Some(buffer) => buffer.mapped.take().is_some(),
            None => false,
        }
    }

    fn buffer_sub_data(&mut self, id: BufferId, offset: usize, data: &[u8]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.record(format!("buffer_sub_data({}, {}, {})", id, offset, data.len()));
        let memory = match state.buffers.get_mut(&id.raw()).and_then(|b| b.memory.as_mut()) {
            Some(memory) => memory,
            None => aurora_bail!(DriverError, "aurora::mock", "Buffer {} has no storage", id),
        };
        match offset.checked_add(data.len()) {
            Some(end) if end <= memory.len() => {
                memory[offset..end].copy_from_slice(data);
                Ok(())
            }
            _ => aurora_bail!(DriverError, "aurora::mock", "Sub-data range out of buffer {}", id),
        }
    }

    fn get_buffer_sub_data(&mut self, id: BufferId, offset: usize, out: &mut [u8]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.record(format!("get_buffer_sub_data({}, {}, {})", id, offset, out.len()));
        let memory = match state.buffers.get(&id.raw()).and_then(|b| b.memory.as_ref()) {
            Some(memory) => memory,
            None => aurora_bail!(DriverError, "aurora::mock", "Buffer {} has no storage", id),
        };
        match offset.checked_add(out.len()) {
            Some(end) if end <= memory.len() => {
                out.copy_from_slice(&memory[offset..end]);
                Ok(())
            }
            _ => aurora_bail!(DriverError, "aurora::mock", "Read-back range out of buffer {}", id),
        }
    }

    fn bind_buffer(&mut self, target: BufferTarget, id: Option<BufferId>) {
        self.state
            .borrow_mut()
            .record(format!("bind_buffer({:?}, {})", target, id.map_or(0, BufferId::raw)));
    }

    fn bind_buffer_base(&mut self, target: BufferTarget, index: u32, id: Option<BufferId>) {
        self.state.borrow_mut().record(format!(
            "bind_buffer_base({:?}, {}, {})",
            target,
            index,
            id.map_or(0, BufferId::raw)
        ));
    }

    // ===== TEXTURES =====

    fn texture_storage_1d(
        &mut self,
        id: TextureId,
        levels: u32,
        format: InternalFormat,
        width: u32,
    ) -> Result<()> {
        self.state
            .borrow_mut()
            .record(format!("texture_storage_1d({}, {}, {:?}, {})", id, levels, format, width));
        if self.storage_failure("texture_storage") {
            aurora_bail!(DriverError, "aurora::mock", "Texture {} storage allocation failed", id);
        }
        self.allocate_texture(id, levels, 1, format, (width, 1, 1))
    }

    fn texture_storage_2d(
        &mut self,
        id: TextureId,
        levels: u32,
        format: InternalFormat,
        width: u32,
        height: u32,
    ) -> Result<()> {
        self.state.borrow_mut().record(format!(
            "texture_storage_2d({}, {}, {:?}, {}, {})",
            id, levels, format, width, height
        ));
        if self.storage_failure("texture_storage") {
            aurora_bail!(DriverError, "aurora::mock", "Texture {} storage allocation failed", id);
        }
        let depth = match self.texture_target(id) {
            Some(TextureTarget::Cubemap) => 6,
            _ => 1,
        };
        self.allocate_texture(id, levels, 1, format, (width, height, depth))
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
        self.state.borrow_mut().record(format!(
            "texture_storage_2d_multisample({}, {}, {:?}, {}, {}, {})",
            id, samples, format, width, height, fixed_sample_locations
        ));
        if self.storage_failure("texture_storage") {
            aurora_bail!(DriverError, "aurora::mock", "Texture {} storage allocation failed", id);
        }
        self.allocate_texture(id, 1, samples, format, (width, height, 1))
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
        self.state.borrow_mut().record(format!(
            "texture_storage_3d({}, {}, {:?}, {}, {}, {})",
            id, levels, format, width, height, depth
        ));
        if self.storage_failure("texture_storage") {
            aurora_bail!(DriverError, "aurora::mock", "Texture {} storage allocation failed", id);
        }
        self.allocate_texture(id, levels, 1, format, (width, height, depth))
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
        self.state.borrow_mut().record(format!(
            "texture_storage_3d_multisample({}, {}, {:?}, {}, {}, {}, {})",
            id, samples, format, width, height, depth, fixed_sample_locations
        ));
        if self.storage_failure("texture_storage") {
            aurora_bail!(DriverError, "aurora::mock", "Texture {} storage allocation failed", id);
        }
        self.allocate_texture(id, 1, samples, format, (width, height, depth))
    }

    fn texture_sub_image_1d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        _format: PixelFormat,
        _pixel_type: PixelType,
        data: &[u8],
    ) -> Result<()> {
        self.check_upload(id, "texture_sub_image_1d", region, data.len())
    }

    fn texture_sub_image_2d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        _format: PixelFormat,
        _pixel_type: PixelType,
        data: &[u8],
    ) -> Result<()> {
        self.check_upload(id, "texture_sub_image_2d", region, data.len())
    }

    fn texture_sub_image_3d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        _format: PixelFormat,
        _pixel_type: PixelType,
        data: &[u8],
    ) -> Result<()> {
        self.check_upload(id, "texture_sub_image_3d", region, data.len())
    }

    fn compressed_texture_sub_image_1d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        _format: InternalFormat,
        data: &[u8],
    ) -> Result<()> {
        self.check_upload(id, "compressed_texture_sub_image_1d", region, data.len())
    }

    fn compressed_texture_sub_image_2d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        _format: InternalFormat,
        data: &[u8],
    ) -> Result<()> {
        self.check_upload(id, "compressed_texture_sub_image_2d", region, data.len())
    }

    fn compressed_texture_sub_image_3d(
        &mut self,
        id: TextureId,
        region: &TextureRegion,
        _format: InternalFormat,
        data: &[u8],
    ) -> Result<()> {
        self.check_upload(id, "compressed_texture_sub_image_3d", region, data.len())
    }

    fn generate_texture_mipmap(&mut self, id: TextureId) {
        self.state.borrow_mut().record(format!("generate_texture_mipmap({})", id));
    }

    fn texture_parameter_i(&mut self, id: TextureId, name: TextureParameter, value: i32) {
        let mut state = self.state.borrow_mut();
        state.record(format!("texture_parameter_i({}, {:?}, {})", id, name, value));
        if let Some(texture) = state.textures.get_mut(&id.raw()) {
            texture.params_i.insert(name, value);
        }
    }

    fn texture_parameter_f(&mut self, id: TextureId, name: TextureParameter, value: f32) {
        let mut state = self.state.borrow_mut();
        state.record(format!("texture_parameter_f({}, {:?}, {})", id, name, value));
        if let Some(texture) = state.textures.get_mut(&id.raw()) {
            texture.params_f.insert(name, value);
        }
    }

    fn get_texture_parameter_i(&mut self, id: TextureId, name: TextureParameter) -> i32 {
        let mut state = self.state.borrow_mut();
        state.record(format!("get_texture_parameter_i({}, {:?})", id, name));
        let mutable = state.faults.mutable_texture_storage;
        let texture = match state.textures.get(&id.raw()) {
            Some(texture) => texture,
            None => return 0,
        };
        match name {
            TextureParameter::ImmutableFormat => (texture.size.is_some() && !mutable) as i32,
            TextureParameter::ImmutableLevels => texture.levels as i32,
            _ => texture.params_i.get(&name).copied().unwrap_or(0),
        }
    }

    fn bind_texture(&mut self, target: TextureTarget, id: Option<TextureId>) {
        self.state
            .borrow_mut()
            .record(format!("bind_texture({:?}, {})", target, id.map_or(0, TextureId::raw)));
    }

    fn bind_texture_unit(&mut self, unit: u32, id: Option<TextureId>) {
        self.state
            .borrow_mut()
            .record(format!("bind_texture_unit({}, {})", unit, id.map_or(0, TextureId::raw)));
    }

    fn max_texture_units(&mut self) -> u32 {
        self.state.borrow().faults.max_texture_units
    }

    // ===== RENDERBUFFERS =====

    fn renderbuffer_storage(
        &mut self,
        id: RenderbufferId,
        format: InternalFormat,
        width: u32,
        height: u32,
    ) -> Result<()> {
        self.state.borrow_mut().record(format!(
            "renderbuffer_storage({}, {:?}, {}, {})",
            id, format, width, height
        ));
        if self.storage_failure("renderbuffer_storage") {
            aurora_bail!(DriverError, "aurora::mock", "Renderbuffer {} storage allocation failed", id);
        }
        self.allocate_renderbuffer(id, 1, format, width, height)
    }

    fn renderbuffer_storage_multisample(
        &mut self,
        id: RenderbufferId,
        samples: u32,
        format: InternalFormat,
        width: u32,
        height: u32,
    ) -> Result<()> {
        self.state.borrow_mut().record(format!(
            "renderbuffer_storage_multisample({}, {}, {:?}, {}, {})",
            id, samples, format, width, height
        ));
        if self.storage_failure("renderbuffer_storage") {
            aurora_bail!(DriverError, "aurora::mock", "Renderbuffer {} storage allocation failed", id);
        }
        self.allocate_renderbuffer(id, samples, format, width, height)
    }

    // ===== FRAMEBUFFERS =====

    fn framebuffer_renderbuffer(
        &mut self,
        id: FramebufferId,
        point: AttachmentPoint,
        renderbuffer: RenderbufferId,
    ) {
        let mut state = self.state.borrow_mut();
        state.record(format!("framebuffer_renderbuffer({}, {}, {})", id, point, renderbuffer));
        if let Some(framebuffer) = state.framebuffers.get_mut(&id.raw()) {
            framebuffer.attachments.retain(|(p, _)| *p != point);
            framebuffer
                .attachments
                .push((point, AttachmentId::Renderbuffer(renderbuffer)));
        }
    }

    fn framebuffer_texture(
        &mut self,
        id: FramebufferId,
        point: AttachmentPoint,
        texture: TextureId,
        level: u32,
    ) {
        let mut state = self.state.borrow_mut();
        state.record(format!("framebuffer_texture({}, {}, {}, {})", id, point, texture, level));
        if let Some(framebuffer) = state.framebuffers.get_mut(&id.raw()) {
            framebuffer.attachments.retain(|(p, _)| *p != point);
            framebuffer.attachments.push((point, AttachmentId::Texture(texture)));
        }
    }

    fn framebuffer_draw_buffers(&mut self, id: FramebufferId, points: &[AttachmentPoint]) {
        let mut state = self.state.borrow_mut();
        let names: Vec<String> = points.iter().map(|p| p.to_string()).collect();
        state.record(format!("framebuffer_draw_buffers({}, [{}])", id, names.join(", ")));
        if let Some(framebuffer) = state.framebuffers.get_mut(&id.raw()) {
            framebuffer.draw_buffers = Some(points.to_vec());
        }
    }

    fn framebuffer_disable_draw_buffers(&mut self, id: FramebufferId) {
        let mut state = self.state.borrow_mut();
        state.record(format!("framebuffer_disable_draw_buffers({})", id));
        if let Some(framebuffer) = state.framebuffers.get_mut(&id.raw()) {
            framebuffer.draw_buffers = Some(Vec::new());
        }
    }

    fn check_framebuffer_status(&mut self, id: FramebufferId) -> FramebufferStatus {
        let mut state = self.state.borrow_mut();
        state.record(format!("check_framebuffer_status({})", id));
        if let Some(status) = state.faults.framebuffer_status {
            return status;
        }
        match state.framebuffers.get(&id.raw()) {
            None => FramebufferStatus::Undefined,
            Some(framebuffer) if framebuffer.attachments.is_empty() => {
                FramebufferStatus::IncompleteMissingAttachment
            }
            Some(_) => FramebufferStatus::Complete,
        }
    }

    fn bind_framebuffer(&mut self, id: Option<FramebufferId>) {
        let mut state = self.state.borrow_mut();
        state.record(format!("bind_framebuffer({})", id.map_or(0, FramebufferId::raw)));
        state.bound_framebuffer = id;
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
        self.state.borrow_mut().record(format!(
            "vertex_array_vertex_buffer({}, {}, {}, {}, {})",
            id, binding, buffer, offset, stride
        ));
    }

    fn vertex_array_binding_divisor(&mut self, id: VertexArrayId, binding: u32, divisor: u32) {
        self.state
            .borrow_mut()
            .record(format!("vertex_array_binding_divisor({}, {}, {})", id, binding, divisor));
    }

    fn enable_vertex_array_attrib(&mut self, id: VertexArrayId, slot: u32) {
        self.state
            .borrow_mut()
            .record(format!("enable_vertex_array_attrib({}, {})", id, slot));
    }

    fn vertex_array_attrib_binding(&mut self, id: VertexArrayId, slot: u32, binding: u32) {
        self.state
            .borrow_mut()
            .record(format!("vertex_array_attrib_binding({}, {}, {})", id, slot, binding));
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
        self.state.borrow_mut().record(format!(
            "vertex_array_attrib_format({}, {}, {}, {:?}, {}, {})",
            id, slot, count, scalar, normalized, relative_offset
        ));
    }

    fn vertex_array_attrib_i_format(
        &mut self,
        id: VertexArrayId,
        slot: u32,
        count: u32,
        scalar: ScalarType,
        relative_offset: u32,
    ) {
        self.state.borrow_mut().record(format!(
            "vertex_array_attrib_i_format({}, {}, {}, {:?}, {})",
            id, slot, count, scalar, relative_offset
        ));
    }

    fn vertex_array_attrib_l_format(
        &mut self,
        id: VertexArrayId,
        slot: u32,
        count: u32,
        scalar: ScalarType,
        relative_offset: u32,
    ) {
        self.state.borrow_mut().record(format!(
            "vertex_array_attrib_l_format({}, {}, {}, {:?}, {})",
            id, slot, count, scalar, relative_offset
        ));
    }

    fn vertex_array_element_buffer(&mut self, id: VertexArrayId, buffer: BufferId) {
        self.state
            .borrow_mut()
            .record(format!("vertex_array_element_buffer({}, {})", id, buffer));
    }

    fn bind_vertex_array(&mut self, id: Option<VertexArrayId>) {
        let mut state = self.state.borrow_mut();
        state.record(format!("bind_vertex_array({})", id.map_or(0, VertexArrayId::raw)));
        state.bound_vertex_array = id;
    }

    fn max_vertex_attribs(&mut self) -> u32 {
        self.state.borrow().faults.max_vertex_attribs
    }

    // ===== DEBUG =====

    fn set_debug_hook(&mut self, hook: Option<DebugHook>, synchronous: bool) {
        let previous = {
            let mut state = self.state.borrow_mut();
            state.record(format!(
                "set_debug_hook({}, {})",
                if hook.is_some() { "some" } else { "none" },
                synchronous
            ));
            state.debug_synchronous = hook.is_some() && synchronous;
            std::mem::replace(&mut state.debug_hook, hook)
        };
        // Dropped outside the borrow: a hook may own a clone of this driver
        drop(previous);
    }

    fn insert_debug_message(&mut self, message: &DebugMessage) {
        self.state
            .borrow_mut()
            .record(format!("insert_debug_message({})", message.id));
        self.emit_debug_message(message);
    }

    fn object_label(&mut self, object: ObjectHandle, label: &str) {
        let mut state = self.state.borrow_mut();
        state.record(format!("object_label({:?}, {})", object, label));
        state.labels.insert(object, label.to_string());
    }

    fn get_error(&mut self) -> ErrorCode {
        self.state.borrow_mut().errors.pop_front().unwrap_or(ErrorCode::NoError)
    }
}

#[cfg(test)]
#[path = "mock_driver_tests.rs"]
mod tests;
