/// Framebuffer - render target built from attachment specs
///
/// Attachments are kept in spec order: `specs()[i]` describes
/// `attachments()[i]`. Specs without a fixed size track the framebuffer
/// size and are rebuilt by [`Framebuffer::resize`]; fixed-size attachments
/// keep their object across resizes and are only re-attached.
///
/// # Example
///
/// ```no_run
/// use aurora_gl::aurora::driver::{AttachmentPoint, InternalFormat};
/// use aurora_gl::aurora::resource::{AttachmentSpec, Framebuffer};
///
/// # fn run(context: &aurora_gl::Context) -> aurora_gl::aurora::Result<()> {
/// let mut framebuffer = Framebuffer::create(
///     context,
///     vec![
///         AttachmentSpec::texture(AttachmentPoint::Color(0), InternalFormat::Rgba8),
///         AttachmentSpec::renderbuffer(AttachmentPoint::Depth, InternalFormat::DepthComponent24),
///     ],
///     800,
///     600,
/// )?;
/// framebuffer.resize(1024, 768)?;
/// # Ok(())
/// # }
/// ```

use std::fmt;

use crate::context::Context;
use crate::driver::{AttachmentId, AttachmentPoint, FramebufferId, FramebufferStatus, ObjectHandle};
use crate::error::{Error, Result};
use crate::resource::{Attachment, AttachmentSpec};
use crate::{aurora_bail, aurora_debug, aurora_err, aurora_error, aurora_trace, aurora_warn};

pub struct Framebuffer {
    context: Context,
    id: Option<FramebufferId>,
    width: u32,
    height: u32,
    specs: Vec<AttachmentSpec>,
    /// Parallel to `specs`. `None` while an attachment awaits (re)building.
    attachments: Vec<Option<Attachment>>,
}

impl Framebuffer {
    /// Create a framebuffer and build all of its attachments
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` for an empty spec list, a zero size, an
    ///   invalid spec or a point used twice, before any driver call
    /// - `FramebufferIncomplete` if the driver does not report completeness
    /// - any error from building an attachment
    ///
    /// On error every object created so far is released.
    pub fn create(context: &Context, specs: Vec<AttachmentSpec>, width: u32, height: u32) -> Result<Self> {
        // ========== VALIDATION ==========
        if specs.is_empty() {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Framebuffer",
                "At least one framebuffer attachment must be specified"
            );
        }
        if width == 0 || height == 0 {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Framebuffer",
                "Framebuffer width and height have to be greater than 0 (got {}x{})",
                width,
                height
            );
        }
        for (index, spec) in specs.iter().enumerate() {
            spec.validate()?;
            if specs[..index].iter().any(|other| other.point == spec.point) {
                aurora_bail!(
                    InvalidConfiguration,
                    "aurora::Framebuffer",
                    "{} is specified more than once",
                    spec.point
                );
            }
        }

        // ========== BUILD ==========
        let mut framebuffer = Self {
            context: context.clone(),
            id: None,
            width,
            height,
            attachments: specs.iter().map(|_| None).collect(),
            specs,
        };
        if let Err(err) = framebuffer.build(width, height) {
            framebuffer.delete();
            return Err(err);
        }

        aurora_debug!(
            "aurora::Framebuffer",
            "Created framebuffer {:?} ({}x{}, {} attachment(s))",
            framebuffer.id,
            width,
            height,
            framebuffer.specs.len()
        );
        Ok(framebuffer)
    }

    /// Create a handle, build every missing attachment at `width`x`height`,
    /// attach everything, set draw buffers and check completeness
    fn build(&mut self, width: u32, height: u32) -> Result<()> {
        let id = self.context.driver().create_framebuffer()?;
        self.id = Some(id);

        for (spec, slot) in self.specs.iter().zip(self.attachments.iter_mut()) {
            if slot.is_none() {
                let (w, h) = spec.size_for(width, height);
                aurora_trace!("aurora::Framebuffer", "Building {} at {}x{}", spec.point, w, h);
                *slot = Some(Attachment::build(&self.context, spec, w, h)?);
            }
        }

        let mut driver = self.context.driver();
        for attachment in self.attachments.iter().flatten() {
            match attachment.id() {
                Some(AttachmentId::Texture(texture)) => {
                    driver.framebuffer_texture(id, attachment.point(), texture, 0)
                }
                Some(AttachmentId::Renderbuffer(renderbuffer)) => {
                    driver.framebuffer_renderbuffer(id, attachment.point(), renderbuffer)
                }
                None => aurora_bail!(
                    InvalidState,
                    "aurora::Framebuffer",
                    "{} object has been deleted",
                    attachment.point()
                ),
            }
        }

        let draw_buffers = self.draw_buffers();
        if draw_buffers.is_empty() {
            driver.framebuffer_disable_draw_buffers(id);
        } else {
            driver.framebuffer_draw_buffers(id, &draw_buffers);
        }

        let status = driver.check_framebuffer_status(id);
        if status != FramebufferStatus::Complete {
            aurora_error!("aurora::Framebuffer", "Couldn't create framebuffer {}: {}", id, status);
            return Err(Error::FramebufferIncomplete(status));
        }
        Ok(())
    }

    /// Writable color points, in spec order
    pub fn draw_buffers(&self) -> Vec<AttachmentPoint> {
        self.specs
            .iter()
            .filter(|spec| spec.draws())
            .map(|spec| spec.point)
            .collect()
    }

    // ===== RESIZE =====

    /// Rebuild the size-tracking attachments at `width`x`height`
    ///
    /// A zero dimension or the current size is a no-op. Fixed-size
    /// attachments keep their objects and are re-attached to the new
    /// handle. The size changes only on success; a failed resize releases
    /// the framebuffer entirely.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 || (width, height) == (self.width, self.height) {
            return Ok(());
        }
        let old = self.require_id()?;

        self.context.driver().bind_framebuffer(None);

        for (spec, slot) in self.specs.iter().zip(self.attachments.iter_mut()) {
            if spec.is_resizable() {
                *slot = None;
            }
        }
        self.id = None;
        self.context.driver().delete_framebuffer(old);

        if let Err(err) = self.build(width, height) {
            self.delete();
            return Err(err);
        }

        aurora_debug!(
            "aurora::Framebuffer",
            "Resized framebuffer {}x{} -> {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        self.width = width;
        self.height = height;
        Ok(())
    }

    // ===== ATTACHMENTS =====

    /// Object attached at `point`
    pub fn get_attachment_id(&self, point: AttachmentPoint) -> Result<AttachmentId> {
        self.attachment(point)
            .and_then(Attachment::id)
            .ok_or_else(|| aurora_err!(InvalidState, "aurora::Framebuffer", "Couldn't find attachment {}", point))
    }

    pub fn attachment(&self, point: AttachmentPoint) -> Option<&Attachment> {
        self.attachments().find(|attachment| attachment.point() == point)
    }

    /// Live attachments, in spec order
    pub fn attachments(&self) -> impl Iterator<Item = &Attachment> {
        self.attachments.iter().flatten()
    }

    pub fn specs(&self) -> &[AttachmentSpec] {
        &self.specs
    }

    // ===== BINDING =====

    pub fn bind(&self) -> Result<()> {
        let id = self.require_id()?;
        self.context.driver().bind_framebuffer(Some(id));
        Ok(())
    }

    /// Bind the default framebuffer
    pub fn unbind(&self) {
        self.context.driver().bind_framebuffer(None);
    }

    pub fn set_label(&self, label: &str) -> Result<()> {
        let id = self.require_id()?;
        self.context.driver().object_label(ObjectHandle::Framebuffer(id), label);
        Ok(())
    }

    // ===== LIFECYCLE =====

    /// Release the handle and every attachment. Idempotent.
    pub fn delete(&mut self) {
        if let Some(id) = self.id.take() {
            match self.context.try_driver() {
                Some(mut driver) => driver.delete_framebuffer(id),
                None => aurora_warn!("aurora::Framebuffer", "Driver busy, leaking framebuffer {}", id),
            }
        }
        for slot in &mut self.attachments {
            *slot = None;
        }
    }

    fn require_id(&self) -> Result<FramebufferId> {
        self.id
            .ok_or_else(|| aurora_err!(InvalidState, "aurora::Framebuffer", "Framebuffer has been deleted"))
    }

    // ===== ACCESSORS =====

    pub fn id(&self) -> Option<FramebufferId> {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Framebuffer")
            .field("id", &self.id)
            .field("size", &(self.width, self.height))
            .field("attachments", &self.attachments)
            .finish()
    }
}

impl Drop for Framebuffer {
    fn drop(&mut self) {
        self.delete();
    }
}

#[cfg(test)]
#[path = "framebuffer_tests.rs"]
mod tests;
