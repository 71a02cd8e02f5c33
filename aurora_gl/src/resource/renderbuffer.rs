/// Renderbuffer - render-only image storage for framebuffer attachments

use std::fmt;

use crate::context::Context;
use crate::driver::{InternalFormat, ObjectHandle, RenderbufferId};
use crate::error::Result;
use crate::{aurora_bail, aurora_err, aurora_trace, aurora_warn};

pub struct Renderbuffer {
    context: Context,
    id: Option<RenderbufferId>,
    format: InternalFormat,
    width: u32,
    height: u32,
    samples: u32,
}

impl Renderbuffer {
    /// Create a renderbuffer, multisampled when `samples > 1`
    pub fn create(
        context: &Context,
        format: InternalFormat,
        width: u32,
        height: u32,
        samples: u32,
    ) -> Result<Self> {
        if width == 0 || height == 0 || samples == 0 {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Renderbuffer",
                "Renderbuffer size and samples have to be greater than 0 (got {}x{}, {} samples)",
                width,
                height,
                samples
            );
        }
        if format.is_compressed() {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Renderbuffer",
                "Compressed format {:?} cannot be rendered to",
                format
            );
        }

        let id = context.driver().create_renderbuffer()?;
        let mut renderbuffer = Self {
            context: context.clone(),
            id: Some(id),
            format,
            width,
            height,
            samples,
        };

        let allocated = {
            let mut driver = context.driver();
            if samples > 1 {
                driver.renderbuffer_storage_multisample(id, samples, format, width, height)
            } else {
                driver.renderbuffer_storage(id, format, width, height)
            }
        };
        if let Err(err) = allocated {
            renderbuffer.delete();
            return Err(err);
        }

        aurora_trace!(
            "aurora::Renderbuffer",
            "Created renderbuffer {} ({}x{}, {:?}, {} sample(s))",
            id,
            width,
            height,
            format,
            samples
        );
        Ok(renderbuffer)
    }

    pub fn set_label(&self, label: &str) -> Result<()> {
        let id = self.require_id()?;
        self.context.driver().object_label(ObjectHandle::Renderbuffer(id), label);
        Ok(())
    }

    /// Release the driver handle. Idempotent.
    pub fn delete(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        match self.context.try_driver() {
            Some(mut driver) => driver.delete_renderbuffer(id),
            None => aurora_warn!("aurora::Renderbuffer", "Driver busy, leaking renderbuffer {}", id),
        }
    }

    fn require_id(&self) -> Result<RenderbufferId> {
        self.id
            .ok_or_else(|| aurora_err!(InvalidState, "aurora::Renderbuffer", "Renderbuffer has been deleted"))
    }

    pub fn id(&self) -> Option<RenderbufferId> {
        self.id
    }

    pub fn format(&self) -> InternalFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }
}

impl fmt::Debug for Renderbuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderbuffer")
            .field("id", &self.id)
            .field("format", &self.format)
            .field("size", &(self.width, self.height))
            .field("samples", &self.samples)
            .finish()
    }
}

impl Drop for Renderbuffer {
    fn drop(&mut self) {
        self.delete();
    }
}

#[cfg(test)]
#[path = "renderbuffer_tests.rs"]
mod tests;
