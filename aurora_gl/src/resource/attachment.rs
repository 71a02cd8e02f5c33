/// Framebuffer attachments - declarations and the objects backing them
///
/// An [`AttachmentSpec`] is a cheap declaration. The framebuffer turns it
/// into a live [`Attachment`] (a texture or renderbuffer) when it is built,
/// and again on resize when the `AttachmentSpec` tracks the framebuffer size.

use crate::context::Context;
use crate::driver::{AttachmentId, AttachmentPoint, InternalFormat, MagFilter, MinFilter, WrapMode};
use crate::error::Result;
use crate::resource::{Renderbuffer, Texture, TextureSpec};
use crate::aurora_bail;

// ===== ATTACHMENT SPEC =====

/// Object kind backing an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentBacking {
    /// Render-only storage
    Renderbuffer,
    /// Sampleable texture with one mip level
    Texture { min_filter: MinFilter, mag_filter: MagFilter },
}

/// Declaration of one framebuffer attachment
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentSpec {
    /// Fixed width, or 0 together with `height` to track the framebuffer size
    pub width: u32,
    pub height: u32,
    pub format: InternalFormat,
    pub point: AttachmentPoint,
    pub backing: AttachmentBacking,
    pub samples: u32,
    /// Color attachments that are drawn to. Ignored for depth and stencil.
    pub writable: bool,
    pub readable: bool,
}

impl AttachmentSpec {
    fn new(point: AttachmentPoint, format: InternalFormat, backing: AttachmentBacking) -> Self {
        Self {
            width: 0,
            height: 0,
            format,
            point,
            backing,
            samples: 1,
            writable: true,
            readable: true,
        }
    }

    /// Texture attachment with linear filtering, tracking the framebuffer size
    pub fn texture(point: AttachmentPoint, format: InternalFormat) -> Self {
        Self::new(
            point,
            format,
            AttachmentBacking::Texture {
                min_filter: MinFilter::Linear,
                mag_filter: MagFilter::Linear,
            },
        )
    }

    /// Renderbuffer attachment tracking the framebuffer size
    pub fn renderbuffer(point: AttachmentPoint, format: InternalFormat) -> Self {
        Self::new(point, format, AttachmentBacking::Renderbuffer)
    }

    /// Give the attachment its own size. Resizes leave it untouched.
    pub fn with_fixed_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_filters(mut self, min_filter: MinFilter, mag_filter: MagFilter) -> Self {
        self.backing = AttachmentBacking::Texture { min_filter, mag_filter };
        self
    }

    pub fn with_writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }

    pub fn with_readable(mut self, readable: bool) -> Self {
        self.readable = readable;
        self
    }

    /// Whether the attachment follows the framebuffer size
    pub fn is_resizable(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    pub fn is_renderbuffer(&self) -> bool {
        self.backing == AttachmentBacking::Renderbuffer
    }

    /// Whether this attachment belongs in the draw-buffer list
    pub fn draws(&self) -> bool {
        self.writable && self.point.is_color()
    }

    /// Concrete size when the framebuffer is `width`x`height`
    pub fn size_for(&self, width: u32, height: u32) -> (u32, u32) {
        if self.is_resizable() {
            (width, height)
        } else {
            (self.width, self.height)
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if (self.width == 0) != (self.height == 0) {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Framebuffer",
                "{} size has to be fully fixed or fully tracking (got {}x{})",
                self.point,
                self.width,
                self.height
            );
        }
        if self.samples == 0 {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Framebuffer",
                "{} samples count has to be greater than 0",
                self.point
            );
        }
        if let AttachmentBacking::Texture { min_filter, .. } = self.backing {
            if min_filter.uses_mipmaps() {
                aurora_bail!(
                    InvalidConfiguration,
                    "aurora::Framebuffer",
                    "{} min filter {:?} needs mipmaps, attachment textures have one level",
                    self.point,
                    min_filter
                );
            }
        }

        let format = self.format;
        let compatible = match self.point {
            AttachmentPoint::Color(_) => !format.has_depth() && !format.has_stencil(),
            AttachmentPoint::Depth => format.has_depth(),
            AttachmentPoint::Stencil => format.has_stencil(),
            AttachmentPoint::DepthStencil => format.has_depth() && format.has_stencil(),
        };
        if !compatible || format.is_compressed() {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Framebuffer",
                "Format {:?} cannot be attached to {}",
                format,
                self.point
            );
        }
        Ok(())
    }
}

// ===== ATTACHMENT =====

/// Object owned by a live attachment
#[derive(Debug)]
pub enum AttachmentObject {
    Texture(Texture),
    Renderbuffer(Renderbuffer),
}

/// Live attachment: the object built from a spec, at a concrete size
#[derive(Debug)]
pub struct Attachment {
    point: AttachmentPoint,
    width: u32,
    height: u32,
    object: AttachmentObject,
}

impl Attachment {
    /// Build the backing object of `spec` at `width`x`height`
    pub(crate) fn build(context: &Context, spec: &AttachmentSpec, width: u32, height: u32) -> Result<Self> {
        let object = match spec.backing {
            AttachmentBacking::Renderbuffer => AttachmentObject::Renderbuffer(Renderbuffer::create(
                context,
                spec.format,
                width,
                height,
                spec.samples,
            )?),
            AttachmentBacking::Texture { min_filter, mag_filter } => {
                let texture_spec = TextureSpec::two_d(width, height, spec.format)
                    .with_samples(spec.samples)
                    .with_mipmaps(1)
                    .with_min_filter(min_filter)
                    .with_mag_filter(mag_filter)
                    .with_wrap_mode(WrapMode::ClampToEdge);
                AttachmentObject::Texture(Texture::create(context, &texture_spec, true)?)
            }
        };
        Ok(Self {
            point: spec.point,
            width,
            height,
            object,
        })
    }

    /// Driver object id, `None` once the object was deleted
    pub fn id(&self) -> Option<AttachmentId> {
        match &self.object {
            AttachmentObject::Texture(texture) => texture.id().map(AttachmentId::Texture),
            AttachmentObject::Renderbuffer(renderbuffer) => {
                renderbuffer.id().map(AttachmentId::Renderbuffer)
            }
        }
    }

    pub fn point(&self) -> AttachmentPoint {
        self.point
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

    pub fn object(&self) -> &AttachmentObject {
        &self.object
    }

    /// Backing texture, for sampling the rendered image
    pub fn texture(&self) -> Option<&Texture> {
        match &self.object {
            AttachmentObject::Texture(texture) => Some(texture),
            AttachmentObject::Renderbuffer(_) => None,
        }
    }

    pub fn renderbuffer(&self) -> Option<&Renderbuffer> {
        match &self.object {
            AttachmentObject::Renderbuffer(renderbuffer) => Some(renderbuffer),
            AttachmentObject::Texture(_) => None,
        }
    }
}
