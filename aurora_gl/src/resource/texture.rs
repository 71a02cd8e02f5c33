/// Texture - immutable-storage texture with validated sub-region uploads
///
/// A [`TextureSpec`] declares the texture; [`Texture::create`] allocates
/// its storage exactly once. Every [`Texture::upload`] is checked against
/// the mip level extent and the caller's data slice before the driver sees
/// it, so a bad region never reaches the driver as an out-of-range read.

use std::fmt;

use crate::context::Context;
use crate::driver::{
    InternalFormat, MagFilter, MinFilter, ObjectHandle, PixelFormat, PixelType, TextureId,
    TextureParameter, TextureParameterValue, TextureRegion, TextureTarget, WrapMode,
};
use crate::error::Result;
use crate::{aurora_bail, aurora_debug, aurora_err, aurora_trace, aurora_warn};

// ===== TEXTURE SPEC =====

/// Shape of a texture, before multisampling is taken into account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    OneD,
    /// Layers are counted in `height`
    OneDArray,
    TwoD,
    /// Layers are counted in `depth`
    TwoDArray,
    ThreeD,
    /// Square faces, `depth` is always 6
    Cubemap,
}

/// Declarative texture description
#[derive(Debug, Clone, PartialEq)]
pub struct TextureSpec {
    pub kind: TextureKind,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub format: InternalFormat,
    /// Sample count, 1 for single-sampled textures
    pub samples: u32,
    /// Mip level count. Ignored by multisampled textures.
    pub mipmaps: u32,
    pub min_filter: MinFilter,
    pub mag_filter: MagFilter,
    pub wrap_mode: WrapMode,
}

impl TextureSpec {
    fn with_kind(kind: TextureKind, width: u32, height: u32, depth: u32, format: InternalFormat) -> Self {
        Self {
            kind,
            width,
            height,
            depth,
            format,
            samples: 1,
            mipmaps: 4,
            min_filter: MinFilter::LinearMipmapLinear,
            mag_filter: MagFilter::Linear,
            wrap_mode: WrapMode::ClampToEdge,
        }
    }

    pub fn one_d(width: u32, format: InternalFormat) -> Self {
        Self::with_kind(TextureKind::OneD, width, 1, 1, format)
    }

    pub fn one_d_array(width: u32, layers: u32, format: InternalFormat) -> Self {
        Self::with_kind(TextureKind::OneDArray, width, layers, 1, format)
    }

    pub fn two_d(width: u32, height: u32, format: InternalFormat) -> Self {
        Self::with_kind(TextureKind::TwoD, width, height, 1, format)
    }

    pub fn two_d_array(width: u32, height: u32, layers: u32, format: InternalFormat) -> Self {
        Self::with_kind(TextureKind::TwoDArray, width, height, layers, format)
    }

    pub fn three_d(width: u32, height: u32, depth: u32, format: InternalFormat) -> Self {
        Self::with_kind(TextureKind::ThreeD, width, height, depth, format)
    }

    pub fn cubemap(size: u32, format: InternalFormat) -> Self {
        Self::with_kind(TextureKind::Cubemap, size, size, 6, format)
    }

    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_mipmaps(mut self, mipmaps: u32) -> Self {
        self.mipmaps = mipmaps;
        self
    }

    pub fn with_min_filter(mut self, filter: MinFilter) -> Self {
        self.min_filter = filter;
        self
    }

    pub fn with_mag_filter(mut self, filter: MagFilter) -> Self {
        self.mag_filter = filter;
        self
    }

    pub fn with_wrap_mode(mut self, wrap_mode: WrapMode) -> Self {
        self.wrap_mode = wrap_mode;
        self
    }

    pub fn is_multisampled(&self) -> bool {
        self.samples > 1
    }

    /// Driver target for this spec
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for multisampled kinds other than 2D and 2D
    /// arrays.
    pub fn target(&self) -> Result<TextureTarget> {
        let target = match (self.kind, self.is_multisampled()) {
            (TextureKind::OneD, false) => TextureTarget::OneD,
            (TextureKind::OneDArray, false) => TextureTarget::OneDArray,
            (TextureKind::TwoD, false) => TextureTarget::TwoD,
            (TextureKind::TwoD, true) => TextureTarget::TwoDMultisample,
            (TextureKind::TwoDArray, false) => TextureTarget::TwoDArray,
            (TextureKind::TwoDArray, true) => TextureTarget::TwoDMultisampleArray,
            (TextureKind::ThreeD, false) => TextureTarget::ThreeD,
            (TextureKind::Cubemap, false) => TextureTarget::Cubemap,
            (kind, true) => aurora_bail!(
                InvalidConfiguration,
                "aurora::Texture",
                "{:?} textures cannot be multisampled ({} samples requested)",
                kind,
                self.samples
            ),
        };
        Ok(target)
    }

    fn validate(&self) -> Result<TextureTarget> {
        if self.samples == 0 {
            aurora_bail!(InvalidConfiguration, "aurora::Texture", "Samples count has to be higher than 0");
        }
        if self.mipmaps == 0 {
            aurora_bail!(InvalidConfiguration, "aurora::Texture", "Mipmaps count has to be higher than 0");
        }
        let target = self.target()?;

        let used = target.upload_dimensions();
        let extents = [self.width, self.height, self.depth];
        for (axis, extent) in extents.iter().enumerate() {
            let in_use = (axis as u32) < used;
            if in_use && *extent == 0 {
                aurora_bail!(
                    InvalidConfiguration,
                    "aurora::Texture",
                    "Texture size has to be higher than 0 (got {}x{}x{} for {:?})",
                    self.width,
                    self.height,
                    self.depth,
                    target
                );
            }
            if !in_use && *extent != 1 {
                aurora_bail!(
                    InvalidConfiguration,
                    "aurora::Texture",
                    "{:?} textures take {} dimension(s), got {}x{}x{}",
                    target,
                    used,
                    self.width,
                    self.height,
                    self.depth
                );
            }
        }

        if target == TextureTarget::Cubemap && (self.width != self.height || self.depth != 6) {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Texture",
                "Cubemap faces have to be square with 6 faces (got {}x{}x{})",
                self.width,
                self.height,
                self.depth
            );
        }

        if !target.is_multisampled() {
            let max_levels = max_mip_levels(target, self.width, self.height, self.depth);
            if self.mipmaps > max_levels {
                aurora_bail!(
                    InvalidConfiguration,
                    "aurora::Texture",
                    "{} mipmaps requested but a {}x{}x{} texture has at most {}",
                    self.mipmaps,
                    self.width,
                    self.height,
                    self.depth,
                    max_levels
                );
            }
        }
        Ok(target)
    }
}

/// Longest mip chain of a texture (array layers and faces do not shrink)
fn max_mip_levels(target: TextureTarget, width: u32, height: u32, depth: u32) -> u32 {
    let largest = match target {
        TextureTarget::OneD | TextureTarget::OneDArray => width,
        TextureTarget::ThreeD => width.max(height).max(depth),
        _ => width.max(height),
    };
    u32::BITS - largest.leading_zeros()
}

// ===== UPLOAD INFO =====

/// Client data description of an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelData {
    /// Pixels laid out as `format` components of `pixel_type`
    Uncompressed { format: PixelFormat, pixel_type: PixelType },
    /// Data in the texture's compressed format, `image_size` bytes long
    Compressed { image_size: usize },
}

/// Destination region and data layout of one [`Texture::upload`]
///
/// Dimensions a target does not use stay at offset 0 and extent 1. Array
/// layers and cubemap faces are addressed by the last used coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadInfo {
    pub pixels: PixelData,
    pub level: u32,
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    /// Byte offset of the first uploaded pixel in the data slice.
    /// Computed from the region when `None`.
    pub data_offset: Option<usize>,
    /// Regenerate the mip chain after uploading
    pub generate_mipmap: bool,
}

impl UploadInfo {
    pub fn new(pixels: PixelData, width: u32, height: u32, depth: u32) -> Self {
        Self {
            pixels,
            level: 0,
            x: 0,
            y: 0,
            z: 0,
            width,
            height,
            depth,
            data_offset: None,
            generate_mipmap: false,
        }
    }

    /// Uncompressed 2D region at the origin of level 0
    pub fn two_d(format: PixelFormat, pixel_type: PixelType, width: u32, height: u32) -> Self {
        Self::new(PixelData::Uncompressed { format, pixel_type }, width, height, 1)
    }

    pub fn at(mut self, x: u32, y: u32, z: u32) -> Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_data_offset(mut self, offset: usize) -> Self {
        self.data_offset = Some(offset);
        self
    }

    pub fn with_mipmap_generation(mut self, generate: bool) -> Self {
        self.generate_mipmap = generate;
        self
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self.pixels, PixelData::Compressed { .. })
    }

    /// Bytes per pixel of uncompressed data, `None` for compressed data
    pub fn bytes_per_pixel(&self) -> Option<usize> {
        match self.pixels {
            PixelData::Uncompressed { format, pixel_type } => Some(pixel_type.bytes_per_pixel(format)),
            PixelData::Compressed { .. } => None,
        }
    }

    /// Byte offset of the first pixel read from the data slice
    ///
    /// The client data is assumed to be laid out with the region's own
    /// row length, so the offset is `(x + y·w + z·w·h) × bytes_per_pixel`.
    /// `None` when that does not fit in `usize`.
    pub fn data_offset(&self) -> Option<usize> {
        if let Some(offset) = self.data_offset {
            return Some(offset);
        }
        let Some(bpp) = self.bytes_per_pixel() else {
            return Some(0);
        };
        let (w, h) = (self.width as usize, self.height as usize);
        let row = (self.y as usize).checked_mul(w)?;
        let slice = (self.z as usize).checked_mul(w)?.checked_mul(h)?;
        (self.x as usize)
            .checked_add(row)?
            .checked_add(slice)?
            .checked_mul(bpp)
    }

    /// Number of bytes read from the data slice, `None` when it does not
    /// fit in `usize`
    pub fn data_length(&self) -> Option<usize> {
        match self.pixels {
            PixelData::Compressed { image_size } => Some(image_size),
            PixelData::Uncompressed { format, pixel_type } => (self.width as usize)
                .checked_mul(self.height as usize)?
                .checked_mul(self.depth as usize)?
                .checked_mul(pixel_type.bytes_per_pixel(format)),
        }
    }

    fn region(&self) -> TextureRegion {
        TextureRegion {
            level: self.level,
            x: self.x,
            y: self.y,
            z: self.z,
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }
}

// ===== TEXTURE =====

/// Texture with immutable storage
pub struct Texture {
    context: Context,
    id: Option<TextureId>,
    target: TextureTarget,
    width: u32,
    height: u32,
    depth: u32,
    levels: u32,
    samples: u32,
    format: InternalFormat,
}

impl Texture {
    /// Create a texture and allocate its storage
    ///
    /// With `apply_sampler_params`, the `TextureSpec` filters and wrap mode are set
    /// along with BASE_LEVEL 0 and MAX_LEVEL `mipmaps - 1` (single-sampled
    /// textures only).
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` for an invalid spec, before any driver call
    /// - `DriverError` if creation or storage allocation fails, or the
    ///   storage is not reported immutable; the handle is released first
    pub fn create(context: &Context, spec: &TextureSpec, apply_sampler_params: bool) -> Result<Self> {
        let target = spec.validate()?;
        let levels = if target.is_multisampled() { 1 } else { spec.mipmaps };

        let id = context.driver().create_texture(target)?;
        let mut texture = Self {
            context: context.clone(),
            id: Some(id),
            target,
            width: spec.width,
            height: spec.height,
            depth: spec.depth,
            levels,
            samples: spec.samples,
            format: spec.format,
        };

        if let Err(err) = texture.allocate(id, spec, apply_sampler_params) {
            texture.delete();
            return Err(err);
        }

        aurora_debug!(
            "aurora::Texture",
            "Created {:?} texture {} ({}x{}x{}, {:?}, {} level(s), {} sample(s))",
            target,
            id,
            texture.width,
            texture.height,
            texture.depth,
            texture.format,
            texture.levels,
            texture.samples
        );
        Ok(texture)
    }

    fn allocate(&mut self, id: TextureId, spec: &TextureSpec, apply_sampler_params: bool) -> Result<()> {
        let mut driver = self.context.driver();
        let (w, h, d) = (self.width, self.height, self.depth);

        match self.target {
            TextureTarget::OneD => driver.texture_storage_1d(id, self.levels, self.format, w)?,
            TextureTarget::OneDArray | TextureTarget::TwoD | TextureTarget::Cubemap => {
                driver.texture_storage_2d(id, self.levels, self.format, w, h)?
            }
            TextureTarget::TwoDMultisample => {
                driver.texture_storage_2d_multisample(id, self.samples, self.format, w, h, true)?
            }
            TextureTarget::ThreeD | TextureTarget::TwoDArray => {
                driver.texture_storage_3d(id, self.levels, self.format, w, h, d)?
            }
            TextureTarget::TwoDMultisampleArray => {
                driver.texture_storage_3d_multisample(id, self.samples, self.format, w, h, d, true)?
            }
        }

        if apply_sampler_params && !self.target.is_multisampled() {
            let max_level = self.levels as i32 - 1;
            driver.texture_parameter_i(id, TextureParameter::BaseLevel, 0);
            driver.texture_parameter_i(id, TextureParameter::MaxLevel, max_level);
            driver.texture_parameter_i(id, TextureParameter::MinFilter, spec.min_filter as i32);
            driver.texture_parameter_i(id, TextureParameter::MagFilter, spec.mag_filter as i32);
            driver.texture_parameter_i(id, TextureParameter::WrapS, spec.wrap_mode as i32);
            driver.texture_parameter_i(id, TextureParameter::WrapT, spec.wrap_mode as i32);
            driver.texture_parameter_i(id, TextureParameter::WrapR, spec.wrap_mode as i32);
        }

        if !driver.texture_immutable_format(id) {
            aurora_bail!(
                DriverError,
                "aurora::Texture",
                "Couldn't create immutable storage for texture {}",
                id
            );
        }
        Ok(())
    }

    // ===== UPLOAD =====

    /// Upload a sub-region from `data`
    ///
    /// # Errors
    ///
    /// Before any driver call:
    /// - `InvalidConfiguration` for multisampled textures, an empty region,
    ///   or pixel data that does not match the texture's compression
    /// - `OutOfBounds` if the level does not exist, the region leaves the
    ///   level extent, or `data` is shorter than offset plus length
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aurora_gl::aurora::driver::{PixelFormat, PixelType};
    /// use aurora_gl::aurora::resource::{Texture, UploadInfo};
    ///
    /// # fn run(texture: &Texture, pixels: &[u8]) -> aurora_gl::aurora::Result<()> {
    /// let info = UploadInfo::two_d(PixelFormat::Rgba, PixelType::UnsignedByte, 64, 64)
    ///     .with_mipmap_generation(true);
    /// texture.upload(&info, pixels)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn upload(&self, info: &UploadInfo, data: &[u8]) -> Result<()> {
        let id = self.require_id()?;

        // ========== VALIDATION ==========
        if self.target.is_multisampled() {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Texture",
                "Multisampled texture {} cannot be uploaded to",
                id
            );
        }
        match info.pixels {
            PixelData::Compressed { image_size } => {
                if !self.format.is_compressed() {
                    aurora_bail!(
                        InvalidConfiguration,
                        "aurora::Texture",
                        "Compressed upload to texture {} with uncompressed format {:?}",
                        id,
                        self.format
                    );
                }
                if image_size == 0 {
                    aurora_bail!(
                        InvalidConfiguration,
                        "aurora::Texture",
                        "Image size for compressed upload has to be greater than 0"
                    );
                }
            }
            PixelData::Uncompressed { .. } => {
                if self.format.is_compressed() {
                    aurora_bail!(
                        InvalidConfiguration,
                        "aurora::Texture",
                        "Uncompressed upload to texture {} with compressed format {:?}",
                        id,
                        self.format
                    );
                }
            }
        }
        if info.width == 0 || info.height == 0 || info.depth == 0 {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Texture",
                "Upload region has to be at least 1x1x1 (got {}x{}x{})",
                info.width,
                info.height,
                info.depth
            );
        }
        if info.level >= self.levels {
            aurora_bail!(
                OutOfBounds,
                "aurora::Texture",
                "Mip level {} does not exist, texture {} has {} level(s)",
                info.level,
                id,
                self.levels
            );
        }

        let extent = self.level_extent(info.level);
        let fits = |offset: u32, size: u32, limit: u32| {
            offset.checked_add(size).map_or(false, |end| end <= limit)
        };
        if !fits(info.x, info.width, extent.0)
            || !fits(info.y, info.height, extent.1)
            || !fits(info.z, info.depth, extent.2)
        {
            aurora_bail!(
                OutOfBounds,
                "aurora::Texture",
                "Upload region ({}, {}, {}) + {}x{}x{} exceeds level {} extent {}x{}x{}",
                info.x,
                info.y,
                info.z,
                info.width,
                info.height,
                info.depth,
                info.level,
                extent.0,
                extent.1,
                extent.2
            );
        }

        let (Some(offset), Some(length)) = (info.data_offset(), info.data_length()) else {
            aurora_bail!(
                OutOfBounds,
                "aurora::Texture",
                "Upload region {}x{}x{} at ({}, {}, {}) overflows the addressable data size",
                info.width,
                info.height,
                info.depth,
                info.x,
                info.y,
                info.z
            );
        };
        let pixels = match offset.checked_add(length) {
            Some(end) if end <= data.len() => &data[offset..end],
            _ => aurora_bail!(
                OutOfBounds,
                "aurora::Texture",
                "Requested transfer data size exceeds provided buffer size (offset: {}, calculated: {}, provided: {})",
                offset,
                length,
                data.len()
            ),
        };

        // ========== DISPATCH ==========
        let region = info.region();
        let mut driver = self.context.driver();
        match (info.pixels, self.target.upload_dimensions()) {
            (PixelData::Uncompressed { format, pixel_type }, 1) => {
                driver.texture_sub_image_1d(id, &region, format, pixel_type, pixels)?
            }
            (PixelData::Uncompressed { format, pixel_type }, 2) => {
                driver.texture_sub_image_2d(id, &region, format, pixel_type, pixels)?
            }
            (PixelData::Uncompressed { format, pixel_type }, _) => {
                driver.texture_sub_image_3d(id, &region, format, pixel_type, pixels)?
            }
            (PixelData::Compressed { .. }, 1) => {
                driver.compressed_texture_sub_image_1d(id, &region, self.format, pixels)?
            }
            (PixelData::Compressed { .. }, 2) => {
                driver.compressed_texture_sub_image_2d(id, &region, self.format, pixels)?
            }
            (PixelData::Compressed { .. }, _) => {
                driver.compressed_texture_sub_image_3d(id, &region, self.format, pixels)?
            }
        }

        if info.generate_mipmap {
            driver.generate_texture_mipmap(id);
        }

        aurora_trace!(
            "aurora::Texture",
            "Uploaded {} bytes to texture {} level {}",
            length,
            id,
            info.level
        );
        Ok(())
    }

    /// Width, height and depth of mip `level`
    ///
    /// Array layers and cubemap faces keep their count at every level.
    pub fn level_extent(&self, level: u32) -> (u32, u32, u32) {
        let shrink = |extent: u32| (extent >> level.min(31)).max(1);
        match self.target {
            TextureTarget::OneD => (shrink(self.width), 1, 1),
            TextureTarget::OneDArray => (shrink(self.width), self.height, 1),
            TextureTarget::TwoD | TextureTarget::TwoDMultisample => {
                (shrink(self.width), shrink(self.height), 1)
            }
            TextureTarget::TwoDArray | TextureTarget::TwoDMultisampleArray | TextureTarget::Cubemap => {
                (shrink(self.width), shrink(self.height), self.depth)
            }
            TextureTarget::ThreeD => (shrink(self.width), shrink(self.height), shrink(self.depth)),
        }
    }

    /// Regenerate levels 1.. from level 0
    pub fn generate_mipmap(&self) -> Result<()> {
        let id = self.require_id()?;
        if self.target.is_multisampled() {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Texture",
                "Multisampled texture {} has no mipmaps",
                id
            );
        }
        self.context.driver().generate_texture_mipmap(id);
        Ok(())
    }

    // ===== PARAMETERS =====

    /// Set a sampler parameter. The value's variant picks the integer or
    /// float driver call.
    pub fn set_parameter(&self, name: TextureParameter, value: impl Into<TextureParameterValue>) -> Result<()> {
        let id = self.require_id()?;
        if matches!(name, TextureParameter::ImmutableFormat | TextureParameter::ImmutableLevels) {
            aurora_bail!(InvalidConfiguration, "aurora::Texture", "{:?} is read-only", name);
        }
        let mut driver = self.context.driver();
        match value.into() {
            TextureParameterValue::Int(value) => driver.texture_parameter_i(id, name, value),
            TextureParameterValue::Float(value) => driver.texture_parameter_f(id, name, value),
        }
        Ok(())
    }

    // ===== BINDING =====

    pub fn bind(&self) -> Result<()> {
        let id = self.require_id()?;
        self.context.driver().bind_texture(self.target, Some(id));
        Ok(())
    }

    /// Bind to texture image unit `unit`
    pub fn bind_to_unit(&self, unit: u32) -> Result<()> {
        let id = self.require_id()?;
        let mut driver = self.context.driver();
        let available = driver.max_texture_units();
        if unit >= available {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Texture",
                "Texture unit {} out of range, {} units available",
                unit,
                available
            );
        }
        driver.bind_texture_unit(unit, Some(id));
        Ok(())
    }

    /// Bind `textures` to consecutive units starting at `first_unit`
    pub fn bind_textures(context: &Context, first_unit: u32, textures: &[&Texture]) -> Result<()> {
        let ids = textures
            .iter()
            .map(|texture| texture.require_id())
            .collect::<Result<Vec<_>>>()?;

        let mut driver = context.driver();
        let available = driver.max_texture_units();
        let end = first_unit as u64 + ids.len() as u64;
        if end > available as u64 {
            aurora_bail!(
                InvalidConfiguration,
                "aurora::Texture",
                "Units {}..{} out of range, {} units available",
                first_unit,
                end,
                available
            );
        }
        for (unit, id) in (first_unit..).zip(ids) {
            driver.bind_texture_unit(unit, Some(id));
        }
        Ok(())
    }

    /// Name the texture for debuggers and debug messages
    pub fn set_label(&self, label: &str) -> Result<()> {
        let id = self.require_id()?;
        self.context.driver().object_label(ObjectHandle::Texture(id), label);
        Ok(())
    }

    // ===== LIFECYCLE =====

    /// Release the driver handle. Idempotent.
    pub fn delete(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        match self.context.try_driver() {
            Some(mut driver) => driver.delete_texture(id),
            None => aurora_warn!("aurora::Texture", "Driver busy, leaking texture {}", id),
        }
    }

    fn require_id(&self) -> Result<TextureId> {
        self.id
            .ok_or_else(|| aurora_err!(InvalidState, "aurora::Texture", "Texture has been deleted"))
    }

    // ===== ACCESSORS =====

    pub fn id(&self) -> Option<TextureId> {
        self.id
    }

    pub fn target(&self) -> TextureTarget {
        self.target
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn size(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.depth)
    }

    /// Number of mip levels
    pub fn levels(&self) -> u32 {
        self.levels
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    pub fn format(&self) -> InternalFormat {
        self.format
    }

    pub fn is_1d(&self) -> bool {
        matches!(self.target, TextureTarget::OneD | TextureTarget::OneDArray)
    }

    pub fn is_2d(&self) -> bool {
        matches!(
            self.target,
            TextureTarget::TwoD
                | TextureTarget::TwoDArray
                | TextureTarget::TwoDMultisample
                | TextureTarget::TwoDMultisampleArray
        )
    }

    pub fn is_3d(&self) -> bool {
        self.target == TextureTarget::ThreeD
    }

    pub fn is_array(&self) -> bool {
        self.target.is_array()
    }

    pub fn is_cubemap(&self) -> bool {
        self.target == TextureTarget::Cubemap
    }

    pub fn is_multisampled(&self) -> bool {
        self.target.is_multisampled()
    }
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id)
            .field("target", &self.target)
            .field("size", &(self.width, self.height, self.depth))
            .field("levels", &self.levels)
            .field("samples", &self.samples)
            .field("format", &self.format)
            .finish()
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        self.delete();
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
