//! Unit tests for Framebuffer and its attachments

use super::*;
use crate::driver::{InternalFormat, MagFilter, MinFilter, MockDriver, TextureTarget};
use crate::error::Error;

// ============================================================================
// Helpers
// ============================================================================

fn setup() -> (MockDriver, Context) {
    let mock = MockDriver::new();
    let context = Context::new(mock.clone());
    (mock, context)
}

fn color(index: u32) -> AttachmentSpec {
    AttachmentSpec::texture(AttachmentPoint::Color(index), InternalFormat::Rgba8)
}

fn fixed_depth() -> AttachmentSpec {
    AttachmentSpec::renderbuffer(AttachmentPoint::Depth, InternalFormat::DepthComponent24)
        .with_fixed_size(512, 512)
}

// ============================================================================
// Creation tests
// ============================================================================

#[test]
fn test_create_attaches_every_spec() {
    let (mock, context) = setup();
    let framebuffer = Framebuffer::create(&context, vec![color(0), fixed_depth()], 800, 600).unwrap();

    let id = framebuffer.id().unwrap();
    assert!(mock.framebuffer_exists(id));
    assert_eq!(framebuffer.size(), (800, 600));
    assert_eq!(framebuffer.attachments().count(), 2);

    let attached = mock.framebuffer_attachments(id);
    assert_eq!(attached.len(), 2);
    assert_eq!(attached[0].0, AttachmentPoint::Color(0));
    assert_eq!(attached[1].0, AttachmentPoint::Depth);

    let color_attachment = framebuffer.attachment(AttachmentPoint::Color(0)).unwrap();
    let texture = color_attachment.texture().unwrap();
    assert_eq!(color_attachment.size(), (800, 600));
    assert_eq!(mock.texture_size(texture.id().unwrap()), Some((800, 600, 1)));
    assert_eq!(mock.texture_levels(texture.id().unwrap()), Some(1));

    let depth = framebuffer.attachment(AttachmentPoint::Depth).unwrap();
    let renderbuffer = depth.renderbuffer().unwrap();
    assert_eq!(depth.size(), (512, 512));
    assert_eq!(mock.renderbuffer_size(renderbuffer.id().unwrap()), Some((512, 512)));
}

#[test]
fn test_create_sets_draw_buffers_in_spec_order() {
    let (mock, context) = setup();
    let framebuffer = Framebuffer::create(
        &context,
        vec![color(2), fixed_depth(), color(0)],
        64,
        64,
    )
    .unwrap();

    assert_eq!(
        mock.framebuffer_draw_buffers(framebuffer.id().unwrap()),
        Some(vec![AttachmentPoint::Color(2), AttachmentPoint::Color(0)])
    );
    assert_eq!(framebuffer.draw_buffers().len(), 2);
}

#[test]
fn test_create_skips_non_writable_color() {
    let (mock, context) = setup();
    let framebuffer = Framebuffer::create(
        &context,
        vec![color(0), color(1).with_writable(false)],
        64,
        64,
    )
    .unwrap();

    assert_eq!(
        mock.framebuffer_draw_buffers(framebuffer.id().unwrap()),
        Some(vec![AttachmentPoint::Color(0)])
    );
    // Still attached, just not drawn to
    assert_eq!(mock.framebuffer_attachments(framebuffer.id().unwrap()).len(), 2);
}

#[test]
fn test_create_depth_only_disables_draw_buffers() {
    let (mock, context) = setup();
    let framebuffer = Framebuffer::create(
        &context,
        vec![AttachmentSpec::texture(AttachmentPoint::Depth, InternalFormat::DepthComponent32f)],
        256,
        256,
    )
    .unwrap();

    let id = framebuffer.id().unwrap();
    assert_eq!(mock.calls_named("framebuffer_disable_draw_buffers").len(), 1);
    assert!(mock.calls_named("framebuffer_draw_buffers").is_empty());
    assert_eq!(mock.framebuffer_draw_buffers(id), Some(Vec::new()));
}

#[test]
fn test_create_checks_completeness_last() {
    let (mock, context) = setup();
    let _framebuffer = Framebuffer::create(&context, vec![color(0)], 32, 32).unwrap();

    let calls = mock.calls();
    assert!(calls.last().unwrap().starts_with("check_framebuffer_status"));
}

#[test]
fn test_create_multisampled_attachments() {
    let (mock, context) = setup();
    let framebuffer = Framebuffer::create(
        &context,
        vec![
            color(0).with_samples(4),
            AttachmentSpec::renderbuffer(AttachmentPoint::DepthStencil, InternalFormat::Depth24Stencil8)
                .with_samples(4),
        ],
        128,
        128,
    )
    .unwrap();

    let texture = framebuffer.attachment(AttachmentPoint::Color(0)).unwrap().texture().unwrap();
    assert_eq!(texture.target(), TextureTarget::TwoDMultisample);
    assert_eq!(mock.texture_samples(texture.id().unwrap()), Some(4));

    let renderbuffer = framebuffer
        .attachment(AttachmentPoint::DepthStencil)
        .unwrap()
        .renderbuffer()
        .unwrap();
    assert_eq!(renderbuffer.samples(), 4);
    assert_eq!(mock.calls_named("renderbuffer_storage_multisample").len(), 1);
    assert!(mock.calls_named("renderbuffer_storage").is_empty());
}

#[test]
fn test_create_texture_attachment_filters() {
    let (mock, context) = setup();
    let framebuffer = Framebuffer::create(
        &context,
        vec![color(0).with_filters(MinFilter::Nearest, MagFilter::Nearest)],
        16,
        16,
    )
    .unwrap();

    let texture = framebuffer.attachment(AttachmentPoint::Color(0)).unwrap().texture().unwrap();
    let id = texture.id().unwrap();
    assert_eq!(
        mock.texture_parameter_i_value(id, crate::driver::TextureParameter::MinFilter),
        Some(MinFilter::Nearest as i32)
    );
    assert_eq!(
        mock.texture_parameter_i_value(id, crate::driver::TextureParameter::MaxLevel),
        Some(0)
    );
}

// ============================================================================
// Validation tests
// ============================================================================

fn assert_rejected(specs: Vec<AttachmentSpec>, width: u32, height: u32) {
    let (mock, context) = setup();
    let result = Framebuffer::create(&context, specs, width, height);
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))), "{:?}", result);
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_create_rejects_empty_specs() {
    assert_rejected(Vec::new(), 64, 64);
}

#[test]
fn test_create_rejects_zero_size() {
    assert_rejected(vec![color(0)], 0, 64);
    assert_rejected(vec![color(0)], 64, 0);
}

#[test]
fn test_create_rejects_duplicate_points() {
    assert_rejected(vec![color(1), fixed_depth(), color(1)], 64, 64);
}

#[test]
fn test_create_rejects_half_fixed_size() {
    assert_rejected(vec![color(0).with_fixed_size(64, 0)], 64, 64);
}

#[test]
fn test_create_rejects_zero_samples() {
    assert_rejected(vec![color(0).with_samples(0)], 64, 64);
}

#[test]
fn test_create_rejects_mipmap_filter() {
    assert_rejected(
        vec![color(0).with_filters(MinFilter::LinearMipmapLinear, MagFilter::Linear)],
        64,
        64,
    );
}

#[test]
fn test_create_rejects_format_point_mismatch() {
    assert_rejected(
        vec![AttachmentSpec::texture(AttachmentPoint::Color(0), InternalFormat::DepthComponent24)],
        64,
        64,
    );
    assert_rejected(
        vec![AttachmentSpec::renderbuffer(AttachmentPoint::Depth, InternalFormat::Rgba8)],
        64,
        64,
    );
    assert_rejected(
        vec![AttachmentSpec::renderbuffer(AttachmentPoint::DepthStencil, InternalFormat::DepthComponent24)],
        64,
        64,
    );
    assert_rejected(
        vec![AttachmentSpec::renderbuffer(AttachmentPoint::Color(0), InternalFormat::StencilIndex8)],
        64,
        64,
    );
}

#[test]
fn test_create_rejects_compressed_format() {
    assert_rejected(
        vec![AttachmentSpec::texture(AttachmentPoint::Color(0), InternalFormat::CompressedRgbaBptcUnorm)],
        64,
        64,
    );
}

// ============================================================================
// Failure cleanup tests
// ============================================================================

#[test]
fn test_create_incomplete_releases_everything() {
    let (mock, context) = setup();
    mock.configure(|faults| faults.framebuffer_status = Some(FramebufferStatus::Unsupported));

    let result = Framebuffer::create(&context, vec![color(0), fixed_depth()], 64, 64);

    assert_eq!(result.unwrap_err(), Error::FramebufferIncomplete(FramebufferStatus::Unsupported));
    assert_eq!(mock.live_object_count(), 0);
}

#[test]
fn test_create_attachment_failure_releases_everything() {
    let (mock, context) = setup();
    mock.configure(|faults| faults.fail_renderbuffer_storage = true);

    let result = Framebuffer::create(&context, vec![color(0), fixed_depth()], 64, 64);

    assert!(matches!(result, Err(Error::DriverError(_))));
    assert_eq!(mock.live_object_count(), 0);
    assert!(mock.calls_named("check_framebuffer_status").is_empty());
}

// ============================================================================
// Resize tests
// ============================================================================

#[test]
fn test_resize_rebuilds_only_tracking_attachments() {
    let (mock, context) = setup();
    let mut framebuffer = Framebuffer::create(
        &context,
        vec![
            color(0),
            AttachmentSpec::renderbuffer(AttachmentPoint::Depth, InternalFormat::DepthComponent24)
                .with_fixed_size(512, 512),
        ],
        800,
        600,
    )
    .unwrap();
    let depth_before = framebuffer.get_attachment_id(AttachmentPoint::Depth).unwrap();
    mock.clear_calls();

    framebuffer.resize(1024, 768).unwrap();

    assert_eq!(framebuffer.size(), (1024, 768));
    assert_eq!(mock.calls_named("create_texture").len(), 1);
    assert_eq!(mock.calls_named("delete_texture").len(), 1);
    assert!(mock.calls_named("create_renderbuffer").is_empty());
    assert!(mock.calls_named("delete_renderbuffer").is_empty());

    let color_attachment = framebuffer.attachment(AttachmentPoint::Color(0)).unwrap();
    assert_eq!(color_attachment.size(), (1024, 768));
    let texture_id = color_attachment.texture().unwrap().id().unwrap();
    assert_eq!(mock.texture_size(texture_id), Some((1024, 768, 1)));

    let depth = framebuffer.attachment(AttachmentPoint::Depth).unwrap();
    assert_eq!(depth.id(), Some(depth_before));
    assert_eq!(depth.size(), (512, 512));

    let id = framebuffer.id().unwrap();
    assert!(mock.framebuffer_exists(id));
    assert_eq!(mock.framebuffer_attachments(id).len(), 2);
    assert!(mock
        .framebuffer_attachments(id)
        .contains(&(AttachmentPoint::Depth, depth_before)));
}

#[test]
fn test_resize_unbinds_and_replaces_handle() {
    let (mock, context) = setup();
    let mut framebuffer = Framebuffer::create(&context, vec![color(0)], 64, 64).unwrap();
    framebuffer.bind().unwrap();
    let old = framebuffer.id().unwrap();
    mock.clear_calls();

    framebuffer.resize(128, 32).unwrap();

    let calls = mock.calls();
    assert_eq!(calls[0], "bind_framebuffer(0)");
    assert_eq!(mock.calls_named("delete_framebuffer"), vec![format!("delete_framebuffer({})", old)]);

    let new = framebuffer.id().unwrap();
    assert_eq!(mock.calls_named("create_framebuffer"), vec![format!("create_framebuffer() -> {}", new)]);
    let deleted_at = calls.iter().position(|call| call.starts_with("delete_framebuffer")).unwrap();
    let created_at = calls.iter().position(|call| call.starts_with("create_framebuffer")).unwrap();
    assert!(deleted_at < created_at);
    assert!(mock.framebuffer_exists(new));
    assert_eq!(mock.bound_framebuffer(), None);
    assert_eq!(mock.calls_named("framebuffer_draw_buffers").len(), 1);
    assert_eq!(mock.calls_named("check_framebuffer_status").len(), 1);
}

#[test]
fn test_resize_same_size_is_noop() {
    let (mock, context) = setup();
    let mut framebuffer = Framebuffer::create(&context, vec![color(0)], 64, 64).unwrap();
    mock.clear_calls();

    framebuffer.resize(64, 64).unwrap();
    framebuffer.resize(0, 128).unwrap();
    framebuffer.resize(128, 0).unwrap();

    assert_eq!(mock.call_count(), 0);
    assert_eq!(framebuffer.size(), (64, 64));
}

#[test]
fn test_resize_failure_releases_framebuffer() {
    let (mock, context) = setup();
    let mut framebuffer = Framebuffer::create(&context, vec![color(0), fixed_depth()], 64, 64).unwrap();
    mock.configure(|faults| faults.fail_texture_creation_at = Some(0));

    let result = framebuffer.resize(256, 256);

    assert!(matches!(result, Err(Error::DriverError(_))));
    assert_eq!(framebuffer.size(), (64, 64));
    assert!(framebuffer.id().is_none());
    assert_eq!(framebuffer.attachments().count(), 0);
    assert_eq!(mock.live_object_count(), 0);
    assert!(matches!(framebuffer.bind(), Err(Error::InvalidState(_))));
}

#[test]
fn test_resize_after_delete_fails() {
    let (_mock, context) = setup();
    let mut framebuffer = Framebuffer::create(&context, vec![color(0)], 64, 64).unwrap();
    framebuffer.delete();

    assert!(matches!(framebuffer.resize(32, 32), Err(Error::InvalidState(_))));
}

// ============================================================================
// Attachment lookup tests
// ============================================================================

#[test]
fn test_get_attachment_id() {
    let (mock, context) = setup();
    let framebuffer = Framebuffer::create(&context, vec![color(0), fixed_depth()], 64, 64).unwrap();

    let color_id = framebuffer.get_attachment_id(AttachmentPoint::Color(0)).unwrap();
    assert!(matches!(color_id, AttachmentId::Texture(_)));
    let depth_id = framebuffer.get_attachment_id(AttachmentPoint::Depth).unwrap();
    assert!(matches!(depth_id, AttachmentId::Renderbuffer(_)));

    let attached = mock.framebuffer_attachments(framebuffer.id().unwrap());
    assert!(attached.contains(&(AttachmentPoint::Color(0), color_id)));
}

#[test]
fn test_get_attachment_id_missing_point() {
    let (_mock, context) = setup();
    let framebuffer = Framebuffer::create(&context, vec![color(0)], 64, 64).unwrap();

    let result = framebuffer.get_attachment_id(AttachmentPoint::Stencil);
    assert!(matches!(result, Err(Error::InvalidState(_))));
    assert!(framebuffer.attachment(AttachmentPoint::Color(1)).is_none());
}

#[test]
fn test_specs_are_kept() {
    let (_mock, context) = setup();
    let specs = vec![color(0), fixed_depth()];
    let framebuffer = Framebuffer::create(&context, specs.clone(), 64, 64).unwrap();

    assert_eq!(framebuffer.specs(), specs.as_slice());
    assert!(framebuffer.specs()[0].is_resizable());
    assert!(!framebuffer.specs()[1].is_resizable());
}

// ============================================================================
// Binding and lifecycle tests
// ============================================================================

#[test]
fn test_bind_and_unbind() {
    let (mock, context) = setup();
    let framebuffer = Framebuffer::create(&context, vec![color(0)], 64, 64).unwrap();

    framebuffer.bind().unwrap();
    assert_eq!(mock.bound_framebuffer(), framebuffer.id());

    framebuffer.unbind();
    assert_eq!(mock.bound_framebuffer(), None);
}

#[test]
fn test_set_label() {
    let (mock, context) = setup();
    let framebuffer = Framebuffer::create(&context, vec![color(0)], 64, 64).unwrap();

    framebuffer.set_label("gbuffer").unwrap();

    let handle = ObjectHandle::Framebuffer(framebuffer.id().unwrap());
    assert_eq!(mock.object_label_of(handle), Some("gbuffer".to_string()));
}

#[test]
fn test_delete_releases_attachments() {
    let (mock, context) = setup();
    let mut framebuffer = Framebuffer::create(&context, vec![color(0), fixed_depth()], 64, 64).unwrap();
    assert_eq!(mock.live_object_count(), 3);

    framebuffer.delete();
    framebuffer.delete();

    assert_eq!(mock.live_object_count(), 0);
    assert_eq!(mock.calls_named("delete_framebuffer").len(), 1);
    assert!(framebuffer.id().is_none());
    assert!(matches!(framebuffer.set_label("x"), Err(Error::InvalidState(_))));
}

#[test]
fn test_drop_releases_everything() {
    let (mock, context) = setup();
    {
        let _framebuffer = Framebuffer::create(&context, vec![color(0), color(1), fixed_depth()], 64, 64).unwrap();
        assert_eq!(mock.live_object_count(), 4);
    }
    assert_eq!(mock.live_object_count(), 0);
}

// ============================================================================
// AttachmentSpec tests
// ============================================================================

#[test]
fn test_attachment_spec_defaults() {
    let spec = color(3);

    assert_eq!(spec.size_for(640, 480), (640, 480));
    assert_eq!(spec.samples, 1);
    assert!(spec.writable);
    assert!(spec.readable);
    assert!(spec.draws());
    assert!(!spec.is_renderbuffer());
    assert!(fixed_depth().is_renderbuffer());
    assert_eq!(fixed_depth().size_for(640, 480), (512, 512));
    assert!(!fixed_depth().draws());
}
