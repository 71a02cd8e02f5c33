//! Unit tests for OpenGL enum conversions
//!
//! Pure mappings, no GL context required. Values are checked against the
//! numbers from the OpenGL registry.

use super::*;
use aurora_gl::aurora::driver::{BufferId, MagFilter, MinFilter, WrapMode};

// ============================================================================
// BUFFER CONVERSION TESTS
// ============================================================================

#[test]
fn test_buffer_target_to_gl() {
    assert_eq!(buffer_target_to_gl(BufferTarget::Array), 0x8892);
    assert_eq!(buffer_target_to_gl(BufferTarget::ElementArray), 0x8893);
    assert_eq!(buffer_target_to_gl(BufferTarget::Uniform), 0x8A11);
    assert_eq!(buffer_target_to_gl(BufferTarget::ShaderStorage), 0x90D2);
    assert_eq!(buffer_target_to_gl(BufferTarget::DrawIndirect), 0x8F3F);
}

#[test]
fn test_storage_flags_to_gl() {
    assert_eq!(storage_flags_to_gl(BufferFlags::empty()), 0);
    assert_eq!(storage_flags_to_gl(BufferFlags::DYNAMIC_STORAGE), gl::DYNAMIC_STORAGE_BIT);
    assert_eq!(
        storage_flags_to_gl(BufferFlags::MAP_WRITE | BufferFlags::PERSISTENT),
        gl::MAP_WRITE_BIT | gl::MAP_PERSISTENT_BIT | gl::MAP_COHERENT_BIT
    );
    assert_eq!(
        storage_flags_to_gl(BufferFlags::MAP_READ | BufferFlags::CLIENT_STORAGE),
        gl::MAP_READ_BIT | gl::CLIENT_STORAGE_BIT
    );
}

#[test]
fn test_map_access_drops_storage_only_bits() {
    let flags = BufferFlags::MAP_READ | BufferFlags::DYNAMIC_STORAGE | BufferFlags::CLIENT_STORAGE;
    assert_eq!(map_access_to_gl(flags), gl::MAP_READ_BIT);
}

// ============================================================================
// TEXTURE CONVERSION TESTS
// ============================================================================

#[test]
fn test_texture_target_to_gl() {
    assert_eq!(texture_target_to_gl(TextureTarget::OneD), 0x0DE0);
    assert_eq!(texture_target_to_gl(TextureTarget::TwoD), 0x0DE1);
    assert_eq!(texture_target_to_gl(TextureTarget::ThreeD), 0x806F);
    assert_eq!(texture_target_to_gl(TextureTarget::Cubemap), 0x8513);
    assert_eq!(texture_target_to_gl(TextureTarget::TwoDArray), 0x8C1A);
    assert_eq!(texture_target_to_gl(TextureTarget::TwoDMultisample), 0x9100);
}

#[test]
fn test_color_formats_to_gl() {
    assert_eq!(internal_format_to_gl(InternalFormat::Rgba8), 0x8058);
    assert_eq!(internal_format_to_gl(InternalFormat::Rgba16f), 0x881A);
    assert_eq!(internal_format_to_gl(InternalFormat::Rgba32f), 0x8814);
    assert_eq!(internal_format_to_gl(InternalFormat::Srgb8Alpha8), 0x8C43);
    assert_eq!(internal_format_to_gl(InternalFormat::R11fG11fB10f), 0x8C3A);
}

#[test]
fn test_depth_stencil_formats_to_gl() {
    assert_eq!(internal_format_to_gl(InternalFormat::DepthComponent24), 0x81A6);
    assert_eq!(internal_format_to_gl(InternalFormat::DepthComponent32f), 0x8CAC);
    assert_eq!(internal_format_to_gl(InternalFormat::Depth24Stencil8), 0x88F0);
    assert_eq!(internal_format_to_gl(InternalFormat::StencilIndex8), 0x8D48);
}

#[test]
fn test_compressed_formats_to_gl() {
    assert_eq!(internal_format_to_gl(InternalFormat::CompressedRedRgtc1), 0x8DBB);
    assert_eq!(internal_format_to_gl(InternalFormat::CompressedRgbaBptcUnorm), 0x8E8C);
}

#[test]
fn test_pixel_format_and_type_to_gl() {
    assert_eq!(pixel_format_to_gl(PixelFormat::Rgba), 0x1908);
    assert_eq!(pixel_format_to_gl(PixelFormat::Bgra), 0x80E1);
    assert_eq!(pixel_format_to_gl(PixelFormat::RgbaInteger), 0x8D99);
    assert_eq!(pixel_format_to_gl(PixelFormat::DepthStencil), 0x84F9);
    assert_eq!(pixel_type_to_gl(PixelType::UnsignedByte), 0x1401);
    assert_eq!(pixel_type_to_gl(PixelType::HalfFloat), 0x140B);
    assert_eq!(pixel_type_to_gl(PixelType::UnsignedInt248), 0x84FA);
}

#[test]
fn test_texture_parameters_to_gl() {
    assert_eq!(texture_parameter_to_gl(TextureParameter::MinFilter), 0x2801);
    assert_eq!(texture_parameter_to_gl(TextureParameter::MagFilter), 0x2800);
    assert_eq!(texture_parameter_to_gl(TextureParameter::MaxLevel), 0x813D);
    assert_eq!(texture_parameter_to_gl(TextureParameter::MaxAnisotropy), 0x84FE);
    assert_eq!(texture_parameter_to_gl(TextureParameter::ImmutableFormat), 0x912F);
}

#[test]
fn test_filter_discriminants_are_gl_values() {
    assert_eq!(MinFilter::Nearest as u32, gl::NEAREST);
    assert_eq!(MinFilter::LinearMipmapLinear as u32, gl::LINEAR_MIPMAP_LINEAR);
    assert_eq!(MagFilter::Linear as u32, gl::LINEAR);
    assert_eq!(WrapMode::ClampToEdge as u32, gl::CLAMP_TO_EDGE);
    assert_eq!(WrapMode::MirrorClampToEdge as u32, gl::MIRROR_CLAMP_TO_EDGE);
}

// ============================================================================
// FRAMEBUFFER CONVERSION TESTS
// ============================================================================

#[test]
fn test_attachment_points_to_gl() {
    assert_eq!(attachment_point_to_gl(AttachmentPoint::Color(0)), 0x8CE0);
    assert_eq!(attachment_point_to_gl(AttachmentPoint::Color(3)), 0x8CE3);
    assert_eq!(attachment_point_to_gl(AttachmentPoint::Depth), 0x8D00);
    assert_eq!(attachment_point_to_gl(AttachmentPoint::Stencil), 0x8D20);
    assert_eq!(attachment_point_to_gl(AttachmentPoint::DepthStencil), 0x821A);
}

#[test]
fn test_framebuffer_status_from_gl() {
    assert_eq!(framebuffer_status_from_gl(0x8CD5), FramebufferStatus::Complete);
    assert_eq!(framebuffer_status_from_gl(0x8CDD), FramebufferStatus::Unsupported);
    assert_eq!(
        framebuffer_status_from_gl(0x8CD7),
        FramebufferStatus::IncompleteMissingAttachment
    );
    assert_eq!(framebuffer_status_from_gl(0x8D56), FramebufferStatus::IncompleteMultisample);
    // The query itself failed
    assert_eq!(framebuffer_status_from_gl(0), FramebufferStatus::Unknown(0));
}

// ============================================================================
// VERTEX ARRAY CONVERSION TESTS
// ============================================================================

#[test]
fn test_scalar_types_to_gl() {
    assert_eq!(scalar_type_to_gl(ScalarType::Byte), 0x1400);
    assert_eq!(scalar_type_to_gl(ScalarType::UnsignedShort), 0x1403);
    assert_eq!(scalar_type_to_gl(ScalarType::Float), 0x1406);
    assert_eq!(scalar_type_to_gl(ScalarType::HalfFloat), 0x140B);
    assert_eq!(scalar_type_to_gl(ScalarType::Double), 0x140A);
}

// ============================================================================
// DEBUG CONVERSION TESTS
// ============================================================================

#[test]
fn test_object_handle_to_gl() {
    let id = BufferId::from_raw(7).unwrap();
    assert_eq!(object_handle_to_gl(ObjectHandle::Buffer(id)), (0x82E0, 7));
}

#[test]
fn test_debug_enums_from_gl() {
    assert_eq!(debug_source_from_gl(0x8246), DebugSource::Api);
    assert_eq!(debug_source_from_gl(0x824A), DebugSource::Application);
    assert_eq!(debug_type_from_gl(0x824C), DebugType::Error);
    assert_eq!(debug_type_from_gl(0x8250), DebugType::Performance);
    assert_eq!(debug_severity_from_gl(0x9146), DebugSeverity::High);
    assert_eq!(debug_severity_from_gl(0x826B), DebugSeverity::Notification);
}

#[test]
fn test_unknown_debug_enums_fall_back() {
    assert_eq!(debug_source_from_gl(0xDEAD), DebugSource::Other);
    assert_eq!(debug_type_from_gl(0xDEAD), DebugType::Other);
    assert_eq!(debug_severity_from_gl(0xDEAD), DebugSeverity::Notification);
}

#[test]
fn test_debug_enums_to_gl_match_from_gl() {
    for source in [DebugSource::Api, DebugSource::ThirdParty, DebugSource::Application] {
        assert_eq!(debug_source_from_gl(debug_source_to_gl(source)), source);
    }
    for kind in [DebugType::Error, DebugType::Marker, DebugType::PopGroup] {
        assert_eq!(debug_type_from_gl(debug_type_to_gl(kind)), kind);
    }
    for severity in [DebugSeverity::Low, DebugSeverity::Medium, DebugSeverity::High] {
        assert_eq!(debug_severity_from_gl(debug_severity_to_gl(severity)), severity);
    }
}

#[test]
fn test_error_codes_from_gl() {
    assert_eq!(error_code_from_gl(0), ErrorCode::NoError);
    assert_eq!(error_code_from_gl(0x0501), ErrorCode::InvalidValue);
    assert_eq!(error_code_from_gl(0x0505), ErrorCode::OutOfMemory);
    assert_eq!(error_code_from_gl(0x0507), ErrorCode::ContextLost);
    assert_eq!(error_code_from_gl(0x1234), ErrorCode::Unknown(0x1234));
}
