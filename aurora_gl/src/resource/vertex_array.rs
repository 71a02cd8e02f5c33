/// Vertex array - binds vertex buffers and describes their attribute layout
///
/// Buffers are referenced by id only. Deleting a buffer still used by a
/// vertex array is a caller error this module does not detect.
///
/// # Example
///
/// ```no_run
/// use aurora_gl::aurora::driver::ScalarType;
/// use aurora_gl::aurora::resource::{Buffer, VertexArray, VertexDescriptor, VertexInput};
///
/// # fn run(context: &aurora_gl::Context, vertices: &Buffer, indices: &Buffer) -> aurora_gl::aurora::Result<()> {
/// // position (vec3) + uv (vec2), tightly packed
/// let input = VertexInput::for_buffer(vertices, 20)?
///     .with_descriptor(VertexDescriptor::new(0, ScalarType::Float, 3))
///     .with_descriptor(VertexDescriptor::new(1, ScalarType::Float, 2));
/// let vertex_array = VertexArray::create(context, vec![input], Some(indices))?;
/// vertex_array.bind()?;
/// # Ok(())
/// # }
/// ```

use std::fmt;

use crate::context::Context;
use crate::driver::{BufferId, ObjectHandle, ScalarType, VertexArrayId};
use crate::error::Result;
use crate::resource::Buffer;
use crate::{aurora_bail, aurora_debug, aurora_err, aurora_warn};

// ===== DESCRIPTORS =====

/// Which attribute format call a descriptor goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttribFormat {
    /// Read as floating point, optionally normalizing integer data
    Float { normalized: bool },
    /// Read as integers
    Integer,
    /// Read as 64-bit doubles
    Long,
}

/// One vertex attribute, or a matrix spanning `rows` consecutive slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexDescriptor {
    pub slot: u32,
    pub scalar: ScalarType,
    /// Components per row, 1 to 4
    pub count: u32,
    pub rows: u32,
    pub normalized: bool,
}

impl VertexDescriptor {
    pub fn new(slot: u32, scalar: ScalarType, count: u32) -> Self {
        Self {
            slot,
            scalar,
            count,
            rows: 1,
            normalized: false,
        }
    }

    /// Matrix attribute: one slot per row, starting at `slot`
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    pub fn format(&self) -> AttribFormat {
        match self.scalar {
            ScalarType::Double => AttribFormat::Long,
            ScalarType::Float | ScalarType::HalfFloat => AttribFormat::Float {
                normalized: self.normalized,
            },
            _ if self.normalized => AttribFormat::Float { normalized: true },
            _ => AttribFormat::Integer,
        }
    }

    /// Bytes one row occupies inside a vertex
    pub fn row_size(&self) -> u32 {
        self.count * self.scalar.size()
    }

    /// Checks the component count and that every row slot is below
    /// `max_attribs`
    fn validate(&self, max_attribs: u32) -> Result<()> {
        if !(1..=4).contains(&self.count) {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::VertexArray",
                "Attribute {} component count has to be between 1 and 4 (got {})",
                self.slot,
                self.count
            );
        }
        if self.rows == 0 {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::VertexArray",
                "Attribute {} has an invalid row count 0",
                self.slot
            );
        }
        if self.slot.checked_add(self.rows).map_or(true, |end| end > max_attribs) {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::VertexArray",
                "Attribute {} with {} row(s) exceeds the {} vertex attribute slots",
                self.slot,
                self.rows,
                max_attribs
            );
        }
        Ok(())
    }
}

/// Resolved format call for one attribute slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLayout {
    pub slot: u32,
    pub count: u32,
    pub scalar: ScalarType,
    pub format: AttribFormat,
    /// Byte offset inside one vertex
    pub relative_offset: u32,
}

/// A vertex buffer binding and the attributes read from it
#[derive(Debug, Clone, PartialEq)]
pub struct VertexInput {
    pub buffer: BufferId,
    pub stride: u32,
    /// Byte offset of the first vertex in the buffer
    pub offset: usize,
    /// 0 advances per vertex, n advances every n instances
    pub divisor: u32,
    pub descriptors: Vec<VertexDescriptor>,
}

impl VertexInput {
    pub fn new(buffer: BufferId, stride: u32) -> Self {
        Self {
            buffer,
            stride,
            offset: 0,
            divisor: 0,
            descriptors: Vec::new(),
        }
    }

    /// Input reading from `buffer`, which must not be deleted
    pub fn for_buffer(buffer: &Buffer, stride: u32) -> Result<Self> {
        let id = buffer
            .id()
            .ok_or_else(|| aurora_err!(InvalidState, "aurora::VertexArray", "Vertex buffer has been deleted"))?;
        Ok(Self::new(id, stride))
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_divisor(mut self, divisor: u32) -> Self {
        self.divisor = divisor;
        self
    }

    pub fn with_descriptor(mut self, descriptor: VertexDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Per-slot format calls, in emission order
    ///
    /// Offsets start at 0 for every input and advance by one row size
    /// per row, so row `r` of a descriptor lands in slot `slot + r`.
    /// Fails when a slot or an offset does not fit in 32 bits.
    pub fn attribute_layout(&self) -> Result<Vec<AttributeLayout>> {
        let mut relative_offset: u32 = 0;
        let mut layout = Vec::new();
        for descriptor in &self.descriptors {
            for row in 0..descriptor.rows {
                let slot = descriptor.slot.checked_add(row).ok_or_else(|| {
                    aurora_err!(
                        OutOfBounds,
                        "aurora::VertexArray",
                        "Attribute {} row {} has no slot",
                        descriptor.slot,
                        row
                    )
                })?;
                layout.push(AttributeLayout {
                    slot,
                    count: descriptor.count,
                    scalar: descriptor.scalar,
                    format: descriptor.format(),
                    relative_offset,
                });
                relative_offset = descriptor
                    .count
                    .checked_mul(descriptor.scalar.size())
                    .and_then(|row_size| relative_offset.checked_add(row_size))
                    .ok_or_else(|| {
                        aurora_err!(
                            OutOfBounds,
                            "aurora::VertexArray",
                            "Attribute {} offset overflows a vertex",
                            descriptor.slot
                        )
                    })?;
            }
        }
        Ok(layout)
    }
}

// ===== VERTEX ARRAY =====

pub struct VertexArray {
    context: Context,
    id: Option<VertexArrayId>,
    inputs: Vec<VertexInput>,
    index_buffer: Option<BufferId>,
}

impl VertexArray {
    /// Create a vertex array from its inputs and optional index buffer
    ///
    /// Input `i` goes to binding index `i`. Descriptors are validated
    /// before any driver call.
    pub fn create(context: &Context, inputs: Vec<VertexInput>, index_buffer: Option<&Buffer>) -> Result<Self> {
        // ========== VALIDATION ==========
        let max_attribs = context.driver().max_vertex_attribs();
        for descriptor in inputs.iter().flat_map(|input| &input.descriptors) {
            descriptor.validate(max_attribs)?;
        }
        let layouts = inputs
            .iter()
            .map(VertexInput::attribute_layout)
            .collect::<Result<Vec<_>>>()?;
        let index_buffer = match index_buffer {
            Some(buffer) => Some(buffer.id().ok_or_else(|| {
                aurora_err!(InvalidState, "aurora::VertexArray", "Index buffer has been deleted")
            })?),
            None => None,
        };
        let Ok(binding_count) = u32::try_from(inputs.len()) else {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::VertexArray",
                "Too many vertex inputs ({})",
                inputs.len()
            );
        };

        // ========== DRIVER CALLS ==========
        let id = context.driver().create_vertex_array()?;
        {
            let mut driver = context.driver();
            for ((binding, input), layout) in (0..binding_count).zip(&inputs).zip(layouts) {
                driver.vertex_array_vertex_buffer(id, binding, input.buffer, input.offset, input.stride);
                driver.vertex_array_binding_divisor(id, binding, input.divisor);

                for attribute in layout {
                    driver.enable_vertex_array_attrib(id, attribute.slot);
                    driver.vertex_array_attrib_binding(id, attribute.slot, binding);
                    match attribute.format {
                        AttribFormat::Long => driver.vertex_array_attrib_l_format(
                            id,
                            attribute.slot,
                            attribute.count,
                            attribute.scalar,
                            attribute.relative_offset,
                        ),
                        AttribFormat::Float { normalized } => driver.vertex_array_attrib_format(
                            id,
                            attribute.slot,
                            attribute.count,
                            attribute.scalar,
                            normalized,
                            attribute.relative_offset,
                        ),
                        AttribFormat::Integer => driver.vertex_array_attrib_i_format(
                            id,
                            attribute.slot,
                            attribute.count,
                            attribute.scalar,
                            attribute.relative_offset,
                        ),
                    }
                }
            }
            if let Some(buffer) = index_buffer {
                driver.vertex_array_element_buffer(id, buffer);
            }
        }

        aurora_debug!(
            "aurora::VertexArray",
            "Created vertex array {} ({} input(s), indexed: {})",
            id,
            inputs.len(),
            index_buffer.is_some()
        );
        Ok(Self {
            context: context.clone(),
            id: Some(id),
            inputs,
            index_buffer,
        })
    }

    pub fn bind(&self) -> Result<()> {
        let id = self.require_id()?;
        self.context.driver().bind_vertex_array(Some(id));
        Ok(())
    }

    pub fn unbind(&self) {
        self.context.driver().bind_vertex_array(None);
    }

    pub fn set_label(&self, label: &str) -> Result<()> {
        let id = self.require_id()?;
        self.context.driver().object_label(ObjectHandle::VertexArray(id), label);
        Ok(())
    }

    /// Release the driver handle. Idempotent.
    pub fn delete(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        match self.context.try_driver() {
            Some(mut driver) => driver.delete_vertex_array(id),
            None => aurora_warn!("aurora::VertexArray", "Driver busy, leaking vertex array {}", id),
        }
    }

    fn require_id(&self) -> Result<VertexArrayId> {
        self.id
            .ok_or_else(|| aurora_err!(InvalidState, "aurora::VertexArray", "Vertex array has been deleted"))
    }

    pub fn id(&self) -> Option<VertexArrayId> {
        self.id
    }

    pub fn inputs(&self) -> &[VertexInput] {
        &self.inputs
    }

    pub fn index_buffer(&self) -> Option<BufferId> {
        self.index_buffer
    }
}

impl fmt::Debug for VertexArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexArray")
            .field("id", &self.id)
            .field("inputs", &self.inputs.len())
            .field("index_buffer", &self.index_buffer)
            .finish()
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        self.delete();
    }
}

#[cfg(test)]
#[path = "vertex_array_tests.rs"]
mod tests;
