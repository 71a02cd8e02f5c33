//! Plain value types exchanged with the driver
//!
//! Handles, flags and enums. None of these hold driver state; the OpenGL
//! backend converts them to GL enums at the call boundary.

use bitflags::bitflags;
use std::fmt;
use std::num::NonZeroU32;

// ============================================================================
// HANDLES
// ============================================================================

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(NonZeroU32);

        impl $name {
            /// Wrap a raw driver name. Returns `None` for 0, which drivers
            /// use to mean "no object".
            pub fn from_raw(raw: u32) -> Option<Self> {
                NonZeroU32::new(raw).map(Self)
            }

            /// Raw driver name
            pub fn raw(self) -> u32 {
                self.0.get()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_handle!(
    /// Driver name of a buffer object
    BufferId
);
define_handle!(
    /// Driver name of a texture object
    TextureId
);
define_handle!(
    /// Driver name of a renderbuffer object
    RenderbufferId
);
define_handle!(
    /// Driver name of a framebuffer object
    FramebufferId
);
define_handle!(
    /// Driver name of a vertex array object
    VertexArrayId
);

// ============================================================================
// BUFFERS
// ============================================================================

bitflags! {
    /// Immutable buffer storage flags
    ///
    /// Also used as access flags for `map_buffer_range`, where only the
    /// `MAP_*` bits are meaningful.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct BufferFlags: u32 {
        const MAP_READ = 0x0001;
        const MAP_WRITE = 0x0002;
        const MAP_PERSISTENT = 0x0040;
        const MAP_COHERENT = 0x0080;
        /// Contents are owned by a host shadow and pushed with sub-data uploads
        const DYNAMIC_STORAGE = 0x0100;
        const CLIENT_STORAGE = 0x0200;

        /// Persistent and coherent mapping
        const PERSISTENT = Self::MAP_PERSISTENT.bits() | Self::MAP_COHERENT.bits();
    }
}

impl BufferFlags {
    /// The subset of flags accepted by a map call
    pub fn map_access(self) -> BufferFlags {
        self & (BufferFlags::MAP_READ
            | BufferFlags::MAP_WRITE
            | BufferFlags::MAP_PERSISTENT
            | BufferFlags::MAP_COHERENT)
    }
}

/// Buffer binding points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    Array,
    ElementArray,
    Uniform,
    ShaderStorage,
    AtomicCounter,
    TransformFeedback,
    CopyRead,
    CopyWrite,
    PixelPack,
    PixelUnpack,
    DrawIndirect,
    DispatchIndirect,
    Query,
    Texture,
}

impl BufferTarget {
    /// Targets that have indexed binding points (`bind_buffer_base`)
    pub fn is_indexed(self) -> bool {
        matches!(
            self,
            BufferTarget::Uniform
                | BufferTarget::ShaderStorage
                | BufferTarget::AtomicCounter
                | BufferTarget::TransformFeedback
        )
    }
}

// ============================================================================
// TEXTURES
// ============================================================================

/// Texture target kinds
///
/// Each kind has its own storage call shape and sub-image dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureTarget {
    OneD,
    OneDArray,
    TwoD,
    TwoDArray,
    ThreeD,
    Cubemap,
    TwoDMultisample,
    TwoDMultisampleArray,
}

impl TextureTarget {
    pub fn is_multisampled(self) -> bool {
        matches!(self, TextureTarget::TwoDMultisample | TextureTarget::TwoDMultisampleArray)
    }

    pub fn is_array(self) -> bool {
        matches!(
            self,
            TextureTarget::OneDArray | TextureTarget::TwoDArray | TextureTarget::TwoDMultisampleArray
        )
    }

    /// Number of coordinates a sub-image call takes (1, 2 or 3)
    ///
    /// Array layers and cubemap faces count as the last coordinate.
    pub fn upload_dimensions(self) -> u32 {
        match self {
            TextureTarget::OneD => 1,
            TextureTarget::OneDArray | TextureTarget::TwoD | TextureTarget::TwoDMultisample => 2,
            TextureTarget::TwoDArray
            | TextureTarget::ThreeD
            | TextureTarget::Cubemap
            | TextureTarget::TwoDMultisampleArray => 3,
        }
    }
}

/// Sized internal formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InternalFormat {
    R8,
    Rg8,
    Rgb8,
    Rgba8,
    R16,
    Rg16,
    Rgba16,
    R16f,
    Rg16f,
    Rgb16f,
    Rgba16f,
    R32f,
    Rg32f,
    Rgb32f,
    Rgba32f,
    R8i,
    R8ui,
    R16i,
    R16ui,
    R32i,
    R32ui,
    Rgba8i,
    Rgba8ui,
    Rgba16i,
    Rgba16ui,
    Rgba32i,
    Rgba32ui,
    Srgb8,
    Srgb8Alpha8,
    Rgb10A2,
    R11fG11fB10f,
    DepthComponent16,
    DepthComponent24,
    DepthComponent32f,
    Depth24Stencil8,
    Depth32fStencil8,
    StencilIndex8,
    CompressedRedRgtc1,
    CompressedRgRgtc2,
    CompressedRgbaBptcUnorm,
    CompressedSrgbAlphaBptcUnorm,
}

impl InternalFormat {
    pub fn has_depth(self) -> bool {
        matches!(
            self,
            InternalFormat::DepthComponent16
                | InternalFormat::DepthComponent24
                | InternalFormat::DepthComponent32f
                | InternalFormat::Depth24Stencil8
                | InternalFormat::Depth32fStencil8
        )
    }

    pub fn has_stencil(self) -> bool {
        matches!(
            self,
            InternalFormat::Depth24Stencil8
                | InternalFormat::Depth32fStencil8
                | InternalFormat::StencilIndex8
        )
    }

    pub fn is_compressed(self) -> bool {
        matches!(
            self,
            InternalFormat::CompressedRedRgtc1
                | InternalFormat::CompressedRgRgtc2
                | InternalFormat::CompressedRgbaBptcUnorm
                | InternalFormat::CompressedSrgbAlphaBptcUnorm
        )
    }
}

/// Layout of the components of client pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Red,
    Rg,
    Rgb,
    Bgr,
    Rgba,
    Bgra,
    RedInteger,
    RgInteger,
    RgbInteger,
    BgrInteger,
    RgbaInteger,
    BgraInteger,
    DepthComponent,
    StencilIndex,
    DepthStencil,
}

impl PixelFormat {
    /// Number of components per pixel
    pub fn components(self) -> usize {
        match self {
            PixelFormat::Red
            | PixelFormat::RedInteger
            | PixelFormat::DepthComponent
            | PixelFormat::StencilIndex => 1,
            PixelFormat::Rg | PixelFormat::RgInteger | PixelFormat::DepthStencil => 2,
            PixelFormat::Rgb | PixelFormat::Bgr | PixelFormat::RgbInteger | PixelFormat::BgrInteger => 3,
            PixelFormat::Rgba | PixelFormat::Bgra | PixelFormat::RgbaInteger | PixelFormat::BgraInteger => 4,
        }
    }
}

/// Data type of client pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelType {
    UnsignedByte,
    Byte,
    UnsignedShort,
    Short,
    UnsignedInt,
    Int,
    HalfFloat,
    Float,
    UnsignedShort565,
    UnsignedShort4444,
    UnsignedInt8888,
    UnsignedInt8888Rev,
    UnsignedInt2101010Rev,
    UnsignedInt248,
    UnsignedInt10f11f11fRev,
    Float32UnsignedInt248Rev,
}

impl PixelType {
    /// Size in bytes of one component, or of a whole pixel for packed types
    pub fn size(self) -> usize {
        match self {
            PixelType::UnsignedByte | PixelType::Byte => 1,
            PixelType::UnsignedShort
            | PixelType::Short
            | PixelType::HalfFloat
            | PixelType::UnsignedShort565
            | PixelType::UnsignedShort4444 => 2,
            PixelType::UnsignedInt
            | PixelType::Int
            | PixelType::Float
            | PixelType::UnsignedInt8888
            | PixelType::UnsignedInt8888Rev
            | PixelType::UnsignedInt2101010Rev
            | PixelType::UnsignedInt248
            | PixelType::UnsignedInt10f11f11fRev => 4,
            PixelType::Float32UnsignedInt248Rev => 8,
        }
    }

    /// Packed types encode a whole pixel in one value
    pub fn is_packed(self) -> bool {
        matches!(
            self,
            PixelType::UnsignedShort565
                | PixelType::UnsignedShort4444
                | PixelType::UnsignedInt8888
                | PixelType::UnsignedInt8888Rev
                | PixelType::UnsignedInt2101010Rev
                | PixelType::UnsignedInt248
                | PixelType::UnsignedInt10f11f11fRev
                | PixelType::Float32UnsignedInt248Rev
        )
    }

    /// Bytes occupied by one pixel of `format` in this type
    pub fn bytes_per_pixel(self, format: PixelFormat) -> usize {
        if self.is_packed() {
            self.size()
        } else {
            self.size() * format.components()
        }
    }
}

/// Minification filters. Discriminants are the OpenGL enum values, which
/// travel through the integer parameter call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum MinFilter {
    Nearest = 0x2600,
    Linear = 0x2601,
    NearestMipmapNearest = 0x2700,
    LinearMipmapNearest = 0x2701,
    NearestMipmapLinear = 0x2702,
    LinearMipmapLinear = 0x2703,
}

impl MinFilter {
    pub fn uses_mipmaps(self) -> bool {
        !matches!(self, MinFilter::Nearest | MinFilter::Linear)
    }
}

/// Magnification filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum MagFilter {
    Nearest = 0x2600,
    Linear = 0x2601,
}

/// Texture coordinate wrap modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum WrapMode {
    Repeat = 0x2901,
    ClampToBorder = 0x812D,
    ClampToEdge = 0x812F,
    MirroredRepeat = 0x8370,
    MirrorClampToEdge = 0x8743,
}

/// Texture parameter names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureParameter {
    BaseLevel,
    MaxLevel,
    MinFilter,
    MagFilter,
    WrapS,
    WrapT,
    WrapR,
    MinLod,
    MaxLod,
    LodBias,
    MaxAnisotropy,
    /// Read-only: non-zero once immutable storage is allocated
    ImmutableFormat,
    /// Read-only: number of levels allocated by immutable storage
    ImmutableLevels,
}

/// A texture parameter value. The variant picks the integer or float
/// driver call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextureParameterValue {
    Int(i32),
    Float(f32),
}

impl From<i32> for TextureParameterValue {
    fn from(value: i32) -> Self {
        TextureParameterValue::Int(value)
    }
}

impl From<f32> for TextureParameterValue {
    fn from(value: f32) -> Self {
        TextureParameterValue::Float(value)
    }
}

impl From<MinFilter> for TextureParameterValue {
    fn from(value: MinFilter) -> Self {
        TextureParameterValue::Int(value as i32)
    }
}

impl From<MagFilter> for TextureParameterValue {
    fn from(value: MagFilter) -> Self {
        TextureParameterValue::Int(value as i32)
    }
}

impl From<WrapMode> for TextureParameterValue {
    fn from(value: WrapMode) -> Self {
        TextureParameterValue::Int(value as i32)
    }
}

// ============================================================================
// FRAMEBUFFERS
// ============================================================================

/// Named framebuffer slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentPoint {
    /// Color attachment N
    Color(u32),
    Depth,
    Stencil,
    DepthStencil,
}

impl AttachmentPoint {
    pub fn is_color(self) -> bool {
        matches!(self, AttachmentPoint::Color(_))
    }
}

impl fmt::Display for AttachmentPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentPoint::Color(index) => write!(f, "COLOR_ATTACHMENT{}", index),
            AttachmentPoint::Depth => write!(f, "DEPTH_ATTACHMENT"),
            AttachmentPoint::Stencil => write!(f, "STENCIL_ATTACHMENT"),
            AttachmentPoint::DepthStencil => write!(f, "DEPTH_STENCIL_ATTACHMENT"),
        }
    }
}

/// Result of a framebuffer completeness query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramebufferStatus {
    Complete,
    Undefined,
    IncompleteAttachment,
    IncompleteMissingAttachment,
    IncompleteDrawBuffer,
    IncompleteReadBuffer,
    Unsupported,
    IncompleteMultisample,
    IncompleteLayerTargets,
    /// Status value the layer does not know about
    Unknown(u32),
}

impl fmt::Display for FramebufferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramebufferStatus::Complete => write!(f, "GL_FRAMEBUFFER_COMPLETE"),
            FramebufferStatus::Undefined => write!(f, "GL_FRAMEBUFFER_UNDEFINED"),
            FramebufferStatus::IncompleteAttachment => {
                write!(f, "GL_FRAMEBUFFER_INCOMPLETE_ATTACHMENT")
            }
            FramebufferStatus::IncompleteMissingAttachment => {
                write!(f, "GL_FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT")
            }
            FramebufferStatus::IncompleteDrawBuffer => {
                write!(f, "GL_FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER")
            }
            FramebufferStatus::IncompleteReadBuffer => {
                write!(f, "GL_FRAMEBUFFER_INCOMPLETE_READ_BUFFER")
            }
            FramebufferStatus::Unsupported => write!(f, "GL_FRAMEBUFFER_UNSUPPORTED"),
            FramebufferStatus::IncompleteMultisample => {
                write!(f, "GL_FRAMEBUFFER_INCOMPLETE_MULTISAMPLE")
            }
            FramebufferStatus::IncompleteLayerTargets => {
                write!(f, "GL_FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS")
            }
            FramebufferStatus::Unknown(raw) => write!(f, "unknown status 0x{:X}", raw),
        }
    }
}

// ============================================================================
// VERTEX ARRAYS
// ============================================================================

/// Scalar component type of a vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    HalfFloat,
    Float,
    Double,
}

impl ScalarType {
    /// Size in bytes of one component
    pub fn size(self) -> u32 {
        match self {
            ScalarType::Byte | ScalarType::UnsignedByte => 1,
            ScalarType::Short | ScalarType::UnsignedShort | ScalarType::HalfFloat => 2,
            ScalarType::Int | ScalarType::UnsignedInt | ScalarType::Float => 4,
            ScalarType::Double => 8,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            ScalarType::Byte
                | ScalarType::UnsignedByte
                | ScalarType::Short
                | ScalarType::UnsignedShort
                | ScalarType::Int
                | ScalarType::UnsignedInt
        )
    }
}

// ============================================================================
// DEBUG
// ============================================================================

/// Driver error flag, as returned by `get_error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NoError,
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    StackOverflow,
    StackUnderflow,
    OutOfMemory,
    InvalidFramebufferOperation,
    ContextLost,
    Unknown(u32),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::NoError => write!(f, "GL_NO_ERROR"),
            ErrorCode::InvalidEnum => write!(f, "GL_INVALID_ENUM"),
            ErrorCode::InvalidValue => write!(f, "GL_INVALID_VALUE"),
            ErrorCode::InvalidOperation => write!(f, "GL_INVALID_OPERATION"),
            ErrorCode::StackOverflow => write!(f, "GL_STACK_OVERFLOW"),
            ErrorCode::StackUnderflow => write!(f, "GL_STACK_UNDERFLOW"),
            ErrorCode::OutOfMemory => write!(f, "GL_OUT_OF_MEMORY"),
            ErrorCode::InvalidFramebufferOperation => write!(f, "GL_INVALID_FRAMEBUFFER_OPERATION"),
            ErrorCode::ContextLost => write!(f, "GL_CONTEXT_LOST"),
            ErrorCode::Unknown(raw) => write!(f, "unknown error 0x{:X}", raw),
        }
    }
}
