/// Buffer - immutable-storage GPU buffer with an append cursor
///
/// Host access depends on the storage flags given at creation:
/// - `MAP_PERSISTENT`: mapped once at creation, for the buffer's lifetime
/// - `DYNAMIC_STORAGE`: a host shadow holds the canonical copy and
///   [`Buffer::transfer`] pushes it to the driver
/// - otherwise: mapped on demand with [`Buffer::map`]
///
/// The cursor ("current offset") is a bump allocator over the byte range:
/// consecutive [`Buffer::store`] calls append without the caller tracking
/// offsets. It is independent of the mapping strategy.

use std::fmt;
use std::ptr::NonNull;

use bytemuck::Pod;

use crate::context::Context;
use crate::driver::{BufferFlags, BufferId, BufferTarget, ObjectHandle};
use crate::error::Result;
use crate::{aurora_bail, aurora_debug, aurora_err, aurora_trace, aurora_warn};

// ===== HOST ACCESS =====

/// A live driver mapping covering `size` bytes from `offset`
#[derive(Debug, Clone, Copy)]
struct Mapping {
    ptr: NonNull<u8>,
    offset: usize,
    size: usize,
}

impl Mapping {
    fn contains(&self, offset: usize, end: usize) -> bool {
        offset >= self.offset && end <= self.offset + self.size
    }
}

/// How the host reaches the buffer contents
#[derive(Debug)]
enum HostAccess {
    /// Host-authoritative storage
    Shadow(Vec<u8>),
    /// Mapped at creation, never unmapped
    Persistent(Mapping),
    /// Mapped on demand
    Mappable(Option<Mapping>),
    /// Buffer deleted
    Released,
}

// ===== BUFFER =====

/// GPU buffer with immutable storage
pub struct Buffer {
    context: Context,
    id: Option<BufferId>,
    capacity: usize,
    cursor: usize,
    flags: BufferFlags,
    host: HostAccess,
}

impl Buffer {
    /// Create a buffer of `capacity` bytes
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if `capacity` is 0, or `MAP_PERSISTENT` is
    ///   requested without `MAP_READ` or `MAP_WRITE` (before any driver call)
    /// - `DriverError` if storage allocation or the persistent mapping fails;
    ///   the driver handle is released before returning
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aurora_gl::aurora::{Context, resource::Buffer, driver::BufferFlags};
    ///
    /// # fn run(context: &Context) -> aurora_gl::aurora::Result<()> {
    /// let mut staging = Buffer::create(context, 256, BufferFlags::DYNAMIC_STORAGE)?;
    /// staging.store(&[0u8; 64])?;
    /// staging.transfer()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn create(context: &Context, capacity: usize, flags: BufferFlags) -> Result<Self> {
        // ========== VALIDATION ==========
        if capacity == 0 {
            aurora_bail!(InvalidConfiguration, "aurora::Buffer", "Buffer capacity must be greater than zero");
        }
        if flags.contains(BufferFlags::MAP_PERSISTENT)
            && !flags.intersects(BufferFlags::MAP_READ | BufferFlags::MAP_WRITE)
        {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Buffer",
                "Persistently mapped buffer has to be either readable or writable (flags: {:?})",
                flags
            );
        }

        // ========== ALLOCATION ==========
        let id = context.driver().create_buffer()?;
        let mut buffer = Self {
            context: context.clone(),
            id: Some(id),
            capacity,
            cursor: 0,
            flags,
            host: HostAccess::Mappable(None),
        };

        if let Err(err) = buffer.allocate(id) {
            buffer.delete();
            return Err(err);
        }

        aurora_debug!(
            "aurora::Buffer",
            "Created buffer {} ({} bytes, {} memory, flags {:?})",
            id,
            capacity,
            buffer.memory_kind(),
            flags
        );
        Ok(buffer)
    }

    fn allocate(&mut self, id: BufferId) -> Result<()> {
        let mut driver = self.context.driver();
        driver.buffer_storage(id, self.capacity, None, self.flags)?;

        if self.flags.contains(BufferFlags::MAP_PERSISTENT) {
            let ptr = match driver.map_buffer_range(id, 0, self.capacity, self.flags.map_access()) {
                Some(ptr) => ptr,
                None => {
                    let code = driver.get_error();
                    aurora_bail!(DriverError, "aurora::Buffer", "Couldn't map buffer: {}", code);
                }
            };
            self.host = HostAccess::Persistent(Mapping { ptr, offset: 0, size: self.capacity });
        } else if self.flags.contains(BufferFlags::DYNAMIC_STORAGE) {
            self.host = HostAccess::Shadow(vec![0u8; self.capacity]);
        }
        Ok(())
    }

    // ===== MAPPING =====

    /// Map the whole buffer. A no-op for persistent buffers.
    ///
    /// # Errors
    ///
    /// - `InvalidState` for host-shadowed, deleted or already mapped buffers
    /// - `InvalidConfiguration` if the storage has neither `MAP_READ` nor `MAP_WRITE`
    /// - `DriverError` if the driver returns a null pointer
    pub fn map(&mut self) -> Result<()> {
        if matches!(self.host, HostAccess::Persistent(_)) {
            return Ok(());
        }
        self.map_range(0, self.capacity)
    }

    /// Map `size` bytes starting at `offset`
    ///
    /// Offsets passed to [`Buffer::store_at`] and [`Buffer::read`] stay
    /// relative to the start of the buffer and must fall in the mapped range.
    pub fn map_range(&mut self, offset: usize, size: usize) -> Result<()> {
        let id = self.require_id()?;
        match self.host {
            HostAccess::Shadow(_) => {
                aurora_bail!(InvalidState, "aurora::Buffer", "Dynamic storage buffers cannot be mapped");
            }
            HostAccess::Persistent(_) => {
                aurora_bail!(
                    InvalidState,
                    "aurora::Buffer",
                    "Persistent buffer {} is mapped for its whole lifetime",
                    id
                );
            }
            HostAccess::Mappable(Some(_)) => {
                aurora_bail!(InvalidState, "aurora::Buffer", "Buffer {} is already mapped", id);
            }
            HostAccess::Mappable(None) | HostAccess::Released => {}
        }
        if !self.flags.intersects(BufferFlags::MAP_READ | BufferFlags::MAP_WRITE) {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Buffer",
                "Buffer {} storage was created without MAP_READ or MAP_WRITE",
                id
            );
        }
        match offset.checked_add(size) {
            Some(end) if size > 0 && end <= self.capacity => {}
            _ => aurora_bail!(
                OutOfBounds,
                "aurora::Buffer",
                "Map range (offset {}, size {}) exceeds buffer capacity {}",
                offset,
                size,
                self.capacity
            ),
        }

        let mut driver = self.context.driver();
        match driver.map_buffer_range(id, offset, size, self.flags.map_access()) {
            Some(ptr) => {
                self.host = HostAccess::Mappable(Some(Mapping { ptr, offset, size }));
                aurora_trace!("aurora::Buffer", "Mapped buffer {} [{}..{})", id, offset, offset + size);
                Ok(())
            }
            None => {
                let code = driver.get_error();
                aurora_bail!(DriverError, "aurora::Buffer", "Couldn't map buffer: {}", code);
            }
        }
    }

    /// Unmap an on-demand mapping. The cursor is left untouched.
    pub fn unmap(&mut self) -> Result<()> {
        let id = self.require_id()?;
        match self.host {
            HostAccess::Mappable(Some(_)) => self.release_mapping(id),
            HostAccess::Persistent(_) => aurora_bail!(
                InvalidState,
                "aurora::Buffer",
                "Persistent buffer {} cannot be unmapped",
                id
            ),
            _ => aurora_bail!(InvalidState, "aurora::Buffer", "Buffer {} is not mapped", id),
        }
    }

    fn release_mapping(&mut self, id: BufferId) -> Result<()> {
        self.host = HostAccess::Mappable(None);
        if !self.context.driver().unmap_buffer(id) {
            aurora_bail!(DriverError, "aurora::Buffer", "Couldn't unmap buffer {}", id);
        }
        Ok(())
    }

    // ===== DATA TRANSFER =====

    /// Copy `data` at the cursor and advance it
    pub fn store(&mut self, data: &[u8]) -> Result<()> {
        self.store_at(data, self.cursor)
    }

    /// Copy `data` at `offset`
    ///
    /// The cursor advances only when `offset` equals the current cursor.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if no host-visible memory is available (not mapped)
    /// - `InvalidConfiguration` if a mapped buffer lacks `MAP_WRITE`
    /// - `OutOfBounds` if `offset + data.len()` exceeds the capacity or the
    ///   mapped range; the cursor is unchanged
    pub fn store_at(&mut self, data: &[u8], offset: usize) -> Result<()> {
        let id = self.require_id()?;
        if matches!(self.host, HostAccess::Mappable(None)) {
            aurora_bail!(
                InvalidState,
                "aurora::Buffer",
                "Non-persistent buffer {} has to be mapped prior to storing data",
                id
            );
        }
        if !matches!(self.host, HostAccess::Shadow(_)) && !self.flags.contains(BufferFlags::MAP_WRITE) {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Buffer",
                "Buffer {} was not created with MAP_WRITE",
                id
            );
        }
        let end = match offset.checked_add(data.len()) {
            Some(end) if end <= self.capacity => end,
            _ => aurora_bail!(
                OutOfBounds,
                "aurora::Buffer",
                "Data transfer would cause buffer overflow: offset {} + {} bytes exceeds capacity {}",
                offset,
                data.len(),
                self.capacity
            ),
        };

        self.host_bytes_mut(offset, end)?.copy_from_slice(data);

        if offset == self.cursor {
            self.cursor = end;
        }
        Ok(())
    }

    /// Store one plain-data value at the cursor
    pub fn store_value<T: Pod>(&mut self, value: &T) -> Result<()> {
        self.store(bytemuck::bytes_of(value))
    }

    /// Store a slice of plain-data values at the cursor
    pub fn store_slice<T: Pod>(&mut self, values: &[T]) -> Result<()> {
        self.store(bytemuck::cast_slice(values))
    }

    /// Publish stored data to the driver and reset the cursor
    ///
    /// - host-shadowed: uploads the first `offset()` bytes
    /// - persistent: nothing to do, the mapping is coherent
    /// - mapped on demand: unmaps
    pub fn transfer(&mut self) -> Result<()> {
        let id = self.require_id()?;
        match &self.host {
            HostAccess::Shadow(shadow) => {
                if self.cursor > 0 {
                    self.context
                        .driver()
                        .buffer_sub_data(id, 0, &shadow[..self.cursor])?;
                    aurora_trace!("aurora::Buffer", "Uploaded {} bytes to buffer {}", self.cursor, id);
                }
            }
            HostAccess::Persistent(_) => {}
            HostAccess::Mappable(Some(_)) => self.release_mapping(id)?,
            HostAccess::Mappable(None) | HostAccess::Released => {}
        }
        self.cursor = 0;
        Ok(())
    }

    /// Copy `size` bytes starting at `offset` into `out`
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` if `offset + size` exceeds the capacity or the mapped range
    /// - `InvalidConfiguration` if `out` is shorter than `size`, or a mapped
    ///   buffer lacks `MAP_READ`
    /// - `InvalidState` if a mappable buffer is not mapped
    pub fn read(&mut self, out: &mut [u8], size: usize, offset: usize) -> Result<()> {
        let id = self.require_id()?;
        let end = match offset.checked_add(size) {
            Some(end) if end <= self.capacity => end,
            _ => aurora_bail!(
                OutOfBounds,
                "aurora::Buffer",
                "Requested read (offset {}, size {}) exceeds buffer capacity {}",
                offset,
                size,
                self.capacity
            ),
        };
        if out.len() < size {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Buffer",
                "Destination is too small: {} bytes provided, {} requested",
                out.len(),
                size
            );
        }

        if let HostAccess::Shadow(_) = self.host {
            return self.context.driver().get_buffer_sub_data(id, offset, &mut out[..size]);
        }
        if !self.flags.contains(BufferFlags::MAP_READ) {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Buffer",
                "Buffer {} was not created with MAP_READ",
                id
            );
        }
        if matches!(self.host, HostAccess::Mappable(None)) {
            aurora_bail!(
                InvalidState,
                "aurora::Buffer",
                "Buffer {} has to be mapped prior to reading data",
                id
            );
        }
        out[..size].copy_from_slice(self.host_bytes_mut(offset, end)?);
        Ok(())
    }

    /// Host-visible bytes `[offset, end)`
    ///
    /// `end` is already checked against the capacity.
    fn host_bytes_mut(&mut self, offset: usize, end: usize) -> Result<&mut [u8]> {
        let mapping = match &mut self.host {
            HostAccess::Shadow(shadow) => return Ok(&mut shadow[offset..end]),
            HostAccess::Persistent(mapping) | HostAccess::Mappable(Some(mapping)) => *mapping,
            HostAccess::Mappable(None) | HostAccess::Released => {
                return Err(aurora_err!(InvalidState, "aurora::Buffer", "Buffer has no host-visible memory"));
            }
        };
        if !mapping.contains(offset, end) {
            return Err(aurora_err!(
                OutOfBounds,
                "aurora::Buffer",
                "Range [{}..{}) is outside the mapped range [{}..{})",
                offset,
                end,
                mapping.offset,
                mapping.offset + mapping.size
            ));
        }
        // SAFETY: the driver keeps `mapping.size` bytes at `mapping.ptr` valid
        // until the buffer is unmapped or deleted, both of which need `&mut
        // self`. The range was checked against the mapping above.
        let bytes = unsafe {
            std::slice::from_raw_parts_mut(mapping.ptr.as_ptr().add(offset - mapping.offset), end - offset)
        };
        Ok(bytes)
    }

    /// Rewind the cursor to 0 without touching any data
    pub fn reset_offset(&mut self) {
        self.cursor = 0;
    }

    // ===== BINDING =====

    pub fn bind(&self, target: BufferTarget) -> Result<()> {
        let id = self.require_id()?;
        self.context.driver().bind_buffer(target, Some(id));
        Ok(())
    }

    /// Bind to an indexed binding point (uniform, storage, ...)
    pub fn bind_base(&self, target: BufferTarget, index: u32) -> Result<()> {
        let id = self.require_id()?;
        if !target.is_indexed() {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Buffer",
                "{:?} has no indexed binding points",
                target
            );
        }
        self.context.driver().bind_buffer_base(target, index, Some(id));
        Ok(())
    }

    /// Name the buffer for debuggers and debug messages
    pub fn set_label(&self, label: &str) -> Result<()> {
        let id = self.require_id()?;
        self.context.driver().object_label(ObjectHandle::Buffer(id), label);
        Ok(())
    }

    // ===== LIFECYCLE =====

    /// Release the driver handle and any host memory. Idempotent.
    pub fn delete(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        self.host = HostAccess::Released;
        self.cursor = 0;
        match self.context.try_driver() {
            Some(mut driver) => driver.delete_buffer(id),
            None => aurora_warn!("aurora::Buffer", "Driver busy, leaking buffer {}", id),
        }
    }

    fn require_id(&self) -> Result<BufferId> {
        self.id
            .ok_or_else(|| aurora_err!(InvalidState, "aurora::Buffer", "Buffer has been deleted"))
    }

    // ===== ACCESSORS =====

    /// Driver handle, `None` once deleted
    pub fn id(&self) -> Option<BufferId> {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current cursor
    pub fn offset(&self) -> usize {
        self.cursor
    }

    pub fn flags(&self) -> BufferFlags {
        self.flags
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self.host, HostAccess::Persistent(_) | HostAccess::Mappable(Some(_)))
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self.host, HostAccess::Persistent(_))
    }

    pub fn is_host_shadowed(&self) -> bool {
        matches!(self.host, HostAccess::Shadow(_))
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    fn memory_kind(&self) -> &'static str {
        match self.host {
            HostAccess::Shadow(_) => "client",
            _ => "driver",
        }
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("id", &self.id)
            .field("capacity", &self.capacity)
            .field("offset", &self.cursor)
            .field("flags", &self.flags)
            .field("memory", &self.memory_kind())
            .field("mapped", &self.is_mapped())
            .finish()
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        self.delete();
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
