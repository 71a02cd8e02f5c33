//! Conversions between aurora driver types and OpenGL enums
//!
//! Pure functions, usable without a context.

use aurora_gl::aurora::driver::{
    AttachmentPoint, BufferFlags, BufferTarget, DebugSeverity, DebugSource, DebugType, ErrorCode,
    FramebufferStatus, InternalFormat, ObjectHandle, PixelFormat, PixelType, ScalarType,
    TextureParameter, TextureTarget,
};
use gl::types::{GLbitfield, GLenum};

/// Not exposed by every generator profile
pub(crate) const TEXTURE_MAX_ANISOTROPY: GLenum = 0x84FE;

// ===== BUFFERS =====

pub(crate) fn buffer_target_to_gl(target: BufferTarget) -> GLenum {
    match target {
        BufferTarget::Array => gl::ARRAY_BUFFER,
        BufferTarget::ElementArray => gl::ELEMENT_ARRAY_BUFFER,
        BufferTarget::Uniform => gl::UNIFORM_BUFFER,
        BufferTarget::ShaderStorage => gl::SHADER_STORAGE_BUFFER,
        BufferTarget::AtomicCounter => gl::ATOMIC_COUNTER_BUFFER,
        BufferTarget::TransformFeedback => gl::TRANSFORM_FEEDBACK_BUFFER,
        BufferTarget::CopyRead => gl::COPY_READ_BUFFER,
        BufferTarget::CopyWrite => gl::COPY_WRITE_BUFFER,
        BufferTarget::PixelPack => gl::PIXEL_PACK_BUFFER,
        BufferTarget::PixelUnpack => gl::PIXEL_UNPACK_BUFFER,
        BufferTarget::DrawIndirect => gl::DRAW_INDIRECT_BUFFER,
        BufferTarget::DispatchIndirect => gl::DISPATCH_INDIRECT_BUFFER,
        BufferTarget::Query => gl::QUERY_BUFFER,
        BufferTarget::Texture => gl::TEXTURE_BUFFER,
    }
}

/// Storage flags for `glNamedBufferStorage`
pub(crate) fn storage_flags_to_gl(flags: BufferFlags) -> GLbitfield {
    let mut bits = map_access_to_gl(flags);
    if flags.contains(BufferFlags::DYNAMIC_STORAGE) {
        bits |= gl::DYNAMIC_STORAGE_BIT;
    }
    if flags.contains(BufferFlags::CLIENT_STORAGE) {
        bits |= gl::CLIENT_STORAGE_BIT;
    }
    bits
}

/// Access flags for `glMapNamedBufferRange`
pub(crate) fn map_access_to_gl(flags: BufferFlags) -> GLbitfield {
    let mut bits = 0;
    if flags.contains(BufferFlags::MAP_READ) {
        bits |= gl::MAP_READ_BIT;
    }
    if flags.contains(BufferFlags::MAP_WRITE) {
        bits |= gl::MAP_WRITE_BIT;
    }
    if flags.contains(BufferFlags::MAP_PERSISTENT) {
        bits |= gl::MAP_PERSISTENT_BIT;
    }
    if flags.contains(BufferFlags::MAP_COHERENT) {
        bits |= gl::MAP_COHERENT_BIT;
    }
    bits
}

// ===== TEXTURES =====

pub(crate) fn texture_target_to_gl(target: TextureTarget) -> GLenum {
    match target {
        TextureTarget::OneD => gl::TEXTURE_1D,
        TextureTarget::OneDArray => gl::TEXTURE_1D_ARRAY,
        TextureTarget::TwoD => gl::TEXTURE_2D,
        TextureTarget::TwoDArray => gl::TEXTURE_2D_ARRAY,
        TextureTarget::ThreeD => gl::TEXTURE_3D,
        TextureTarget::Cubemap => gl::TEXTURE_CUBE_MAP,
        TextureTarget::TwoDMultisample => gl::TEXTURE_2D_MULTISAMPLE,
        TextureTarget::TwoDMultisampleArray => gl::TEXTURE_2D_MULTISAMPLE_ARRAY,
    }
}

pub(crate) fn internal_format_to_gl(format: InternalFormat) -> GLenum {
    match format {
        InternalFormat::R8 => gl::R8,
        InternalFormat::Rg8 => gl::RG8,
        InternalFormat::Rgb8 => gl::RGB8,
        InternalFormat::Rgba8 => gl::RGBA8,
        InternalFormat::R16 => gl::R16,
        InternalFormat::Rg16 => gl::RG16,
        InternalFormat::Rgba16 => gl::RGBA16,
        InternalFormat::R16f => gl::R16F,
        InternalFormat::Rg16f => gl::RG16F,
        InternalFormat::Rgb16f => gl::RGB16F,
        InternalFormat::Rgba16f => gl::RGBA16F,
        InternalFormat::R32f => gl::R32F,
        InternalFormat::Rg32f => gl::RG32F,
        InternalFormat::Rgb32f => gl::RGB32F,
        InternalFormat::Rgba32f => gl::RGBA32F,
        InternalFormat::R8i => gl::R8I,
        InternalFormat::R8ui => gl::R8UI,
        InternalFormat::R16i => gl::R16I,
        InternalFormat::R16ui => gl::R16UI,
        InternalFormat::R32i => gl::R32I,
        InternalFormat::R32ui => gl::R32UI,
        InternalFormat::Rgba8i => gl::RGBA8I,
        InternalFormat::Rgba8ui => gl::RGBA8UI,
        InternalFormat::Rgba16i => gl::RGBA16I,
        InternalFormat::Rgba16ui => gl::RGBA16UI,
        InternalFormat::Rgba32i => gl::RGBA32I,
        InternalFormat::Rgba32ui => gl::RGBA32UI,
        InternalFormat::Srgb8 => gl::SRGB8,
        InternalFormat::Srgb8Alpha8 => gl::SRGB8_ALPHA8,
        InternalFormat::Rgb10A2 => gl::RGB10_A2,
        InternalFormat::R11fG11fB10f => gl::R11F_G11F_B10F,
        InternalFormat::DepthComponent16 => gl::DEPTH_COMPONENT16,
        InternalFormat::DepthComponent24 => gl::DEPTH_COMPONENT24,
        InternalFormat::DepthComponent32f => gl::DEPTH_COMPONENT32F,
        InternalFormat::Depth24Stencil8 => gl::DEPTH24_STENCIL8,
        InternalFormat::Depth32fStencil8 => gl::DEPTH32F_STENCIL8,
        InternalFormat::StencilIndex8 => gl::STENCIL_INDEX8,
        InternalFormat::CompressedRedRgtc1 => gl::COMPRESSED_RED_RGTC1,
        InternalFormat::CompressedRgRgtc2 => gl::COMPRESSED_RG_RGTC2,
        InternalFormat::CompressedRgbaBptcUnorm => gl::COMPRESSED_RGBA_BPTC_UNORM,
        InternalFormat::CompressedSrgbAlphaBptcUnorm => gl::COMPRESSED_SRGB_ALPHA_BPTC_UNORM,
    }
}

pub(crate) fn pixel_format_to_gl(format: PixelFormat) -> GLenum {
    match format {
        PixelFormat::Red => gl::RED,
        PixelFormat::Rg => gl::RG,
        PixelFormat::Rgb => gl::RGB,
        PixelFormat::Bgr => gl::BGR,
        PixelFormat::Rgba => gl::RGBA,
        PixelFormat::Bgra => gl::BGRA,
        PixelFormat::RedInteger => gl::RED_INTEGER,
        PixelFormat::RgInteger => gl::RG_INTEGER,
        PixelFormat::RgbInteger => gl::RGB_INTEGER,
        PixelFormat::BgrInteger => gl::BGR_INTEGER,
        PixelFormat::RgbaInteger => gl::RGBA_INTEGER,
        PixelFormat::BgraInteger => gl::BGRA_INTEGER,
        PixelFormat::DepthComponent => gl::DEPTH_COMPONENT,
        PixelFormat::StencilIndex => gl::STENCIL_INDEX,
        PixelFormat::DepthStencil => gl::DEPTH_STENCIL,
    }
}

pub(crate) fn pixel_type_to_gl(pixel_type: PixelType) -> GLenum {
    match pixel_type {
        PixelType::UnsignedByte => gl::UNSIGNED_BYTE,
        PixelType::Byte => gl::BYTE,
        PixelType::UnsignedShort => gl::UNSIGNED_SHORT,
        PixelType::Short => gl::SHORT,
        PixelType::UnsignedInt => gl::UNSIGNED_INT,
        PixelType::Int => gl::INT,
        PixelType::HalfFloat => gl::HALF_FLOAT,
        PixelType::Float => gl::FLOAT,
        PixelType::UnsignedShort565 => gl::UNSIGNED_SHORT_5_6_5,
        PixelType::UnsignedShort4444 => gl::UNSIGNED_SHORT_4_4_4_4,
        PixelType::UnsignedInt8888 => gl::UNSIGNED_INT_8_8_8_8,
        PixelType::UnsignedInt8888Rev => gl::UNSIGNED_INT_8_8_8_8_REV,
        PixelType::UnsignedInt2101010Rev => gl::UNSIGNED_INT_2_10_10_10_REV,
        PixelType::UnsignedInt248 => gl::UNSIGNED_INT_24_8,
        PixelType::UnsignedInt10f11f11fRev => gl::UNSIGNED_INT_10F_11F_11F_REV,
        PixelType::Float32UnsignedInt248Rev => gl::FLOAT_32_UNSIGNED_INT_24_8_REV,
    }
}

pub(crate) fn texture_parameter_to_gl(parameter: TextureParameter) -> GLenum {
    match parameter {
        TextureParameter::BaseLevel => gl::TEXTURE_BASE_LEVEL,
        TextureParameter::MaxLevel => gl::TEXTURE_MAX_LEVEL,
        TextureParameter::MinFilter => gl::TEXTURE_MIN_FILTER,
        TextureParameter::MagFilter => gl::TEXTURE_MAG_FILTER,
        TextureParameter::WrapS => gl::TEXTURE_WRAP_S,
        TextureParameter::WrapT => gl::TEXTURE_WRAP_T,
        TextureParameter::WrapR => gl::TEXTURE_WRAP_R,
        TextureParameter::MinLod => gl::TEXTURE_MIN_LOD,
        TextureParameter::MaxLod => gl::TEXTURE_MAX_LOD,
        TextureParameter::LodBias => gl::TEXTURE_LOD_BIAS,
        TextureParameter::MaxAnisotropy => TEXTURE_MAX_ANISOTROPY,
        TextureParameter::ImmutableFormat => gl::TEXTURE_IMMUTABLE_FORMAT,
        TextureParameter::ImmutableLevels => gl::TEXTURE_IMMUTABLE_LEVELS,
    }
}

// ===== FRAMEBUFFERS =====

pub(crate) fn attachment_point_to_gl(point: AttachmentPoint) -> GLenum {
    match point {
        AttachmentPoint::Color(index) => gl::COLOR_ATTACHMENT0 + index,
        AttachmentPoint::Depth => gl::DEPTH_ATTACHMENT,
        AttachmentPoint::Stencil => gl::STENCIL_ATTACHMENT,
        AttachmentPoint::DepthStencil => gl::DEPTH_STENCIL_ATTACHMENT,
    }
}

pub(crate) fn framebuffer_status_from_gl(status: GLenum) -> FramebufferStatus {
    match status {
        gl::FRAMEBUFFER_COMPLETE => FramebufferStatus::Complete,
        gl::FRAMEBUFFER_UNDEFINED => FramebufferStatus::Undefined,
        gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => FramebufferStatus::IncompleteAttachment,
        gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => FramebufferStatus::IncompleteMissingAttachment,
        gl::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => FramebufferStatus::IncompleteDrawBuffer,
        gl::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => FramebufferStatus::IncompleteReadBuffer,
        gl::FRAMEBUFFER_UNSUPPORTED => FramebufferStatus::Unsupported,
        gl::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => FramebufferStatus::IncompleteMultisample,
        gl::FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS => FramebufferStatus::IncompleteLayerTargets,
        other => FramebufferStatus::Unknown(other),
    }
}

// ===== VERTEX ARRAYS =====

pub(crate) fn scalar_type_to_gl(scalar: ScalarType) -> GLenum {
    match scalar {
        ScalarType::Byte => gl::BYTE,
        ScalarType::UnsignedByte => gl::UNSIGNED_BYTE,
        ScalarType::Short => gl::SHORT,
        ScalarType::UnsignedShort => gl::UNSIGNED_SHORT,
        ScalarType::Int => gl::INT,
        ScalarType::UnsignedInt => gl::UNSIGNED_INT,
        ScalarType::HalfFloat => gl::HALF_FLOAT,
        ScalarType::Float => gl::FLOAT,
        ScalarType::Double => gl::DOUBLE,
    }
}

// ===== DEBUG =====

/// Identifier and name of an object, for `glObjectLabel`
pub(crate) fn object_handle_to_gl(object: ObjectHandle) -> (GLenum, u32) {
    match object {
        ObjectHandle::Buffer(id) => (gl::BUFFER, id.raw()),
        ObjectHandle::Texture(id) => (gl::TEXTURE, id.raw()),
        ObjectHandle::Renderbuffer(id) => (gl::RENDERBUFFER, id.raw()),
        ObjectHandle::Framebuffer(id) => (gl::FRAMEBUFFER, id.raw()),
        ObjectHandle::VertexArray(id) => (gl::VERTEX_ARRAY, id.raw()),
    }
}

pub(crate) fn debug_source_to_gl(source: DebugSource) -> GLenum {
    match source {
        DebugSource::Api => gl::DEBUG_SOURCE_API,
        DebugSource::WindowSystem => gl::DEBUG_SOURCE_WINDOW_SYSTEM,
        DebugSource::ShaderCompiler => gl::DEBUG_SOURCE_SHADER_COMPILER,
        DebugSource::ThirdParty => gl::DEBUG_SOURCE_THIRD_PARTY,
        DebugSource::Application => gl::DEBUG_SOURCE_APPLICATION,
        DebugSource::Other => gl::DEBUG_SOURCE_OTHER,
    }
}

pub(crate) fn debug_source_from_gl(source: GLenum) -> DebugSource {
    match source {
        gl::DEBUG_SOURCE_API => DebugSource::Api,
        gl::DEBUG_SOURCE_WINDOW_SYSTEM => DebugSource::WindowSystem,
        gl::DEBUG_SOURCE_SHADER_COMPILER => DebugSource::ShaderCompiler,
        gl::DEBUG_SOURCE_THIRD_PARTY => DebugSource::ThirdParty,
        gl::DEBUG_SOURCE_APPLICATION => DebugSource::Application,
        _ => DebugSource::Other,
    }
}

pub(crate) fn debug_type_to_gl(kind: DebugType) -> GLenum {
    match kind {
        DebugType::Error => gl::DEBUG_TYPE_ERROR,
        DebugType::DeprecatedBehavior => gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR,
        DebugType::UndefinedBehavior => gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR,
        DebugType::Portability => gl::DEBUG_TYPE_PORTABILITY,
        DebugType::Performance => gl::DEBUG_TYPE_PERFORMANCE,
        DebugType::Marker => gl::DEBUG_TYPE_MARKER,
        DebugType::PushGroup => gl::DEBUG_TYPE_PUSH_GROUP,
        DebugType::PopGroup => gl::DEBUG_TYPE_POP_GROUP,
        DebugType::Other => gl::DEBUG_TYPE_OTHER,
    }
}

pub(crate) fn debug_type_from_gl(kind: GLenum) -> DebugType {
    match kind {
        gl::DEBUG_TYPE_ERROR => DebugType::Error,
        gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => DebugType::DeprecatedBehavior,
        gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => DebugType::UndefinedBehavior,
        gl::DEBUG_TYPE_PORTABILITY => DebugType::Portability,
        gl::DEBUG_TYPE_PERFORMANCE => DebugType::Performance,
        gl::DEBUG_TYPE_MARKER => DebugType::Marker,
        gl::DEBUG_TYPE_PUSH_GROUP => DebugType::PushGroup,
        gl::DEBUG_TYPE_POP_GROUP => DebugType::PopGroup,
        _ => DebugType::Other,
    }
}

pub(crate) fn debug_severity_to_gl(severity: DebugSeverity) -> GLenum {
    match severity {
        DebugSeverity::Notification => gl::DEBUG_SEVERITY_NOTIFICATION,
        DebugSeverity::Low => gl::DEBUG_SEVERITY_LOW,
        DebugSeverity::Medium => gl::DEBUG_SEVERITY_MEDIUM,
        DebugSeverity::High => gl::DEBUG_SEVERITY_HIGH,
    }
}

/// Unknown severities are reported as notifications
pub(crate) fn debug_severity_from_gl(severity: GLenum) -> DebugSeverity {
    match severity {
        gl::DEBUG_SEVERITY_HIGH => DebugSeverity::High,
        gl::DEBUG_SEVERITY_MEDIUM => DebugSeverity::Medium,
        gl::DEBUG_SEVERITY_LOW => DebugSeverity::Low,
        _ => DebugSeverity::Notification,
    }
}

pub(crate) fn error_code_from_gl(code: GLenum) -> ErrorCode {
    match code {
        gl::NO_ERROR => ErrorCode::NoError,
        gl::INVALID_ENUM => ErrorCode::InvalidEnum,
        gl::INVALID_VALUE => ErrorCode::InvalidValue,
        gl::INVALID_OPERATION => ErrorCode::InvalidOperation,
        gl::STACK_OVERFLOW => ErrorCode::StackOverflow,
        gl::STACK_UNDERFLOW => ErrorCode::StackUnderflow,
        gl::OUT_OF_MEMORY => ErrorCode::OutOfMemory,
        gl::INVALID_FRAMEBUFFER_OPERATION => ErrorCode::InvalidFramebufferOperation,
        gl::CONTEXT_LOST => ErrorCode::ContextLost,
        other => ErrorCode::Unknown(other),
    }
}

#[cfg(test)]
#[path = "gl_conversions_tests.rs"]
mod tests;
