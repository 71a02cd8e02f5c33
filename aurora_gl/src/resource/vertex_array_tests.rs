//! Unit tests for VertexArray and the attribute layout computation

use super::*;
use crate::driver::{BufferFlags, MockDriver};
use crate::error::Error;

fn setup() -> (MockDriver, Context) {
    let mock = MockDriver::new();
    let context = Context::new(mock.clone());
    (mock, context)
}

fn buffer_id(raw: u32) -> BufferId {
    BufferId::from_raw(raw).unwrap()
}

// ============================================================================
// Layout tests
// ============================================================================

#[test]
fn test_layout_accumulates_offsets() {
    let input = VertexInput::new(buffer_id(1), 24)
        .with_descriptor(VertexDescriptor::new(0, ScalarType::Float, 3))
        .with_descriptor(VertexDescriptor::new(1, ScalarType::Float, 2))
        .with_descriptor(VertexDescriptor::new(2, ScalarType::UnsignedByte, 4).with_normalized(true));

    let layout = input.attribute_layout().unwrap();

    let offsets: Vec<u32> = layout.iter().map(|a| a.relative_offset).collect();
    assert_eq!(offsets, vec![0, 12, 20]);
    let slots: Vec<u32> = layout.iter().map(|a| a.slot).collect();
    assert_eq!(slots, vec![0, 1, 2]);
}

#[test]
fn test_layout_matrix_rows_use_consecutive_slots() {
    let input = VertexInput::new(buffer_id(1), 80)
        .with_descriptor(VertexDescriptor::new(4, ScalarType::Float, 4).with_rows(4))
        .with_descriptor(VertexDescriptor::new(8, ScalarType::Int, 1));

    let layout = input.attribute_layout().unwrap();

    assert_eq!(layout.len(), 5);
    let slots: Vec<u32> = layout.iter().map(|a| a.slot).collect();
    assert_eq!(slots, vec![4, 5, 6, 7, 8]);
    let offsets: Vec<u32> = layout.iter().map(|a| a.relative_offset).collect();
    assert_eq!(offsets, vec![0, 16, 32, 48, 64]);
    assert!(layout[..4].iter().all(|a| a.count == 4));
}

#[test]
fn test_layout_empty_input() {
    assert!(VertexInput::new(buffer_id(1), 0).attribute_layout().unwrap().is_empty());
}

#[test]
fn test_layout_rejects_offset_overflow() {
    let huge_row = VertexInput::new(buffer_id(1), 0)
        .with_descriptor(VertexDescriptor::new(0, ScalarType::Float, 0x4000_0000));
    assert!(matches!(huge_row.attribute_layout(), Err(Error::OutOfBounds(_))));

    let half = VertexDescriptor::new(0, ScalarType::Float, 0x2000_0000);
    let two_halves = VertexInput::new(buffer_id(1), 0)
        .with_descriptor(half)
        .with_descriptor(VertexDescriptor { slot: 1, ..half });
    assert!(matches!(two_halves.attribute_layout(), Err(Error::OutOfBounds(_))));
}

#[test]
fn test_descriptor_format_selection() {
    let format = |scalar, normalized| VertexDescriptor::new(0, scalar, 1).with_normalized(normalized).format();

    assert_eq!(format(ScalarType::Double, false), AttribFormat::Long);
    assert_eq!(format(ScalarType::Double, true), AttribFormat::Long);
    assert_eq!(format(ScalarType::Float, false), AttribFormat::Float { normalized: false });
    assert_eq!(format(ScalarType::HalfFloat, true), AttribFormat::Float { normalized: true });
    assert_eq!(format(ScalarType::Int, false), AttribFormat::Integer);
    assert_eq!(format(ScalarType::UnsignedShort, false), AttribFormat::Integer);
    assert_eq!(format(ScalarType::Byte, true), AttribFormat::Float { normalized: true });
}

#[test]
fn test_descriptor_row_size() {
    assert_eq!(VertexDescriptor::new(0, ScalarType::Double, 3).row_size(), 24);
    assert_eq!(VertexDescriptor::new(0, ScalarType::HalfFloat, 2).row_size(), 4);
    assert_eq!(VertexDescriptor::new(0, ScalarType::UnsignedByte, 4).row_size(), 4);
}

// ============================================================================
// Creation tests
// ============================================================================

#[test]
fn test_create_emits_calls_in_order() {
    let (mock, context) = setup();
    let input = VertexInput::new(buffer_id(7), 20)
        .with_offset(64)
        .with_descriptor(VertexDescriptor::new(0, ScalarType::Float, 3))
        .with_descriptor(VertexDescriptor::new(1, ScalarType::HalfFloat, 2).with_normalized(true));

    let vertex_array = VertexArray::create(&context, vec![input], None).unwrap();
    let id = vertex_array.id().unwrap();

    assert_eq!(
        mock.calls(),
        vec![
            format!("create_vertex_array() -> {}", id),
            format!("vertex_array_vertex_buffer({}, 0, 7, 64, 20)", id),
            format!("vertex_array_binding_divisor({}, 0, 0)", id),
            format!("enable_vertex_array_attrib({}, 0)", id),
            format!("vertex_array_attrib_binding({}, 0, 0)", id),
            format!("vertex_array_attrib_format({}, 0, 3, Float, false, 0)", id),
            format!("enable_vertex_array_attrib({}, 1)", id),
            format!("vertex_array_attrib_binding({}, 1, 0)", id),
            format!("vertex_array_attrib_format({}, 1, 2, HalfFloat, true, 12)", id),
        ]
    );
    assert!(mock.vertex_array_exists(id));
}

#[test]
fn test_create_uses_one_binding_per_input() {
    let (mock, context) = setup();
    let per_vertex = VertexInput::new(buffer_id(1), 12)
        .with_descriptor(VertexDescriptor::new(0, ScalarType::Float, 3));
    let per_instance = VertexInput::new(buffer_id(2), 64)
        .with_divisor(1)
        .with_descriptor(VertexDescriptor::new(1, ScalarType::Float, 4).with_rows(4));

    let vertex_array = VertexArray::create(&context, vec![per_vertex, per_instance], None).unwrap();
    let id = vertex_array.id().unwrap();

    assert_eq!(
        mock.calls_named("vertex_array_binding_divisor"),
        vec![
            format!("vertex_array_binding_divisor({}, 0, 0)", id),
            format!("vertex_array_binding_divisor({}, 1, 1)", id),
        ]
    );
    let bindings = mock.calls_named("vertex_array_attrib_binding");
    assert_eq!(bindings.len(), 5);
    assert_eq!(bindings[0], format!("vertex_array_attrib_binding({}, 0, 0)", id));
    assert_eq!(bindings[4], format!("vertex_array_attrib_binding({}, 4, 1)", id));

    // Offsets restart for every input
    let formats = mock.calls_named("vertex_array_attrib_format");
    assert_eq!(formats[1], format!("vertex_array_attrib_format({}, 1, 4, Float, false, 0)", id));
    assert_eq!(formats[4], format!("vertex_array_attrib_format({}, 4, 4, Float, false, 48)", id));
}

#[test]
fn test_create_dispatches_format_calls() {
    let (mock, context) = setup();
    let input = VertexInput::new(buffer_id(1), 32)
        .with_descriptor(VertexDescriptor::new(0, ScalarType::Double, 2))
        .with_descriptor(VertexDescriptor::new(1, ScalarType::Int, 1))
        .with_descriptor(VertexDescriptor::new(2, ScalarType::UnsignedByte, 4).with_normalized(true));

    let vertex_array = VertexArray::create(&context, vec![input], None).unwrap();
    let id = vertex_array.id().unwrap();

    assert_eq!(
        mock.calls_named("vertex_array_attrib_l_format"),
        vec![format!("vertex_array_attrib_l_format({}, 0, 2, Double, 0)", id)]
    );
    assert_eq!(
        mock.calls_named("vertex_array_attrib_i_format"),
        vec![format!("vertex_array_attrib_i_format({}, 1, 1, Int, 16)", id)]
    );
    assert_eq!(
        mock.calls_named("vertex_array_attrib_format"),
        vec![format!("vertex_array_attrib_format({}, 2, 4, UnsignedByte, true, 20)", id)]
    );
}

#[test]
fn test_create_attaches_index_buffer_last() {
    let (mock, context) = setup();
    let vertices = Buffer::create(&context, 64, BufferFlags::DYNAMIC_STORAGE).unwrap();
    let indices = Buffer::create(&context, 32, BufferFlags::DYNAMIC_STORAGE).unwrap();
    mock.clear_calls();

    let input = VertexInput::for_buffer(&vertices, 8)
        .unwrap()
        .with_descriptor(VertexDescriptor::new(0, ScalarType::Float, 2));
    let vertex_array = VertexArray::create(&context, vec![input], Some(&indices)).unwrap();

    let id = vertex_array.id().unwrap();
    let index_id = indices.id().unwrap();
    assert_eq!(
        mock.calls().last().unwrap(),
        &format!("vertex_array_element_buffer({}, {})", id, index_id)
    );
    assert_eq!(mock.calls_named("vertex_array_element_buffer").len(), 1);
    assert_eq!(vertex_array.index_buffer(), Some(index_id));
    assert_eq!(vertex_array.inputs()[0].buffer, vertices.id().unwrap());
}

#[test]
fn test_create_without_inputs() {
    let (mock, context) = setup();
    let vertex_array = VertexArray::create(&context, Vec::new(), None).unwrap();

    assert_eq!(mock.call_count(), 1);
    assert!(vertex_array.inputs().is_empty());
    assert!(vertex_array.index_buffer().is_none());
}

// ============================================================================
// Validation tests
// ============================================================================

fn assert_rejected(descriptor: VertexDescriptor) {
    let (mock, context) = setup();
    let input = VertexInput::new(buffer_id(1), 16).with_descriptor(descriptor);

    let result = VertexArray::create(&context, vec![input], None);

    assert!(matches!(result, Err(Error::InvalidConfiguration(_))), "{:?}", result);
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_create_rejects_component_count() {
    assert_rejected(VertexDescriptor::new(0, ScalarType::Float, 0));
    assert_rejected(VertexDescriptor::new(0, ScalarType::Float, 5));
}

#[test]
fn test_create_rejects_zero_rows() {
    assert_rejected(VertexDescriptor::new(0, ScalarType::Float, 4).with_rows(0));
}

#[test]
fn test_create_rejects_slot_overflow() {
    assert_rejected(VertexDescriptor::new(u32::MAX, ScalarType::Float, 4).with_rows(2));
}

#[test]
fn test_create_rejects_slots_past_attrib_limit() {
    assert_rejected(VertexDescriptor::new(16, ScalarType::Float, 1));
    assert_rejected(VertexDescriptor::new(4000, ScalarType::Float, 4).with_rows(4));
    // Last row lands on slot 16
    assert_rejected(VertexDescriptor::new(13, ScalarType::Float, 4).with_rows(4));
}

#[test]
fn test_attrib_limit_comes_from_driver() {
    let (mock, context) = setup();
    mock.configure(|faults| faults.max_vertex_attribs = 8);
    let matrix = |slot| {
        VertexInput::new(buffer_id(1), 64)
            .with_descriptor(VertexDescriptor::new(slot, ScalarType::Float, 4).with_rows(4))
    };

    let result = VertexArray::create(&context, vec![matrix(6)], None);
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))), "{:?}", result);
    assert_eq!(mock.call_count(), 0);

    let vertex_array = VertexArray::create(&context, vec![matrix(4)], None).unwrap();
    let enabled = mock.calls_named("enable_vertex_array_attrib");
    assert_eq!(enabled.len(), 4);
    assert_eq!(enabled[3], format!("enable_vertex_array_attrib({}, 7)", vertex_array.id().unwrap()));
}

#[test]
fn test_deleted_buffers_are_rejected() {
    let (mock, context) = setup();
    let mut buffer = Buffer::create(&context, 16, BufferFlags::DYNAMIC_STORAGE).unwrap();
    buffer.delete();
    mock.clear_calls();

    assert!(matches!(VertexInput::for_buffer(&buffer, 4), Err(Error::InvalidState(_))));
    let result = VertexArray::create(&context, Vec::new(), Some(&buffer));
    assert!(matches!(result, Err(Error::InvalidState(_))));
    assert_eq!(mock.call_count(), 0);
}

// ============================================================================
// Binding and lifecycle tests
// ============================================================================

#[test]
fn test_bind_and_unbind() {
    let (mock, context) = setup();
    let vertex_array = VertexArray::create(&context, Vec::new(), None).unwrap();

    vertex_array.bind().unwrap();
    assert_eq!(mock.bound_vertex_array(), vertex_array.id());

    vertex_array.unbind();
    assert_eq!(mock.bound_vertex_array(), None);
}

#[test]
fn test_set_label() {
    let (mock, context) = setup();
    let vertex_array = VertexArray::create(&context, Vec::new(), None).unwrap();

    vertex_array.set_label("terrain").unwrap();

    let handle = ObjectHandle::VertexArray(vertex_array.id().unwrap());
    assert_eq!(mock.object_label_of(handle), Some("terrain".to_string()));
}

#[test]
fn test_delete_is_idempotent() {
    let (mock, context) = setup();
    let mut vertex_array = VertexArray::create(&context, Vec::new(), None).unwrap();
    let id = vertex_array.id().unwrap();
    vertex_array.bind().unwrap();

    vertex_array.delete();
    vertex_array.delete();

    assert!(!mock.vertex_array_exists(id));
    assert_eq!(mock.calls_named("delete_vertex_array").len(), 1);
    assert_eq!(mock.bound_vertex_array(), None);
    assert!(matches!(vertex_array.bind(), Err(Error::InvalidState(_))));
}

#[test]
fn test_drop_deletes_handle() {
    let (mock, context) = setup();
    let id = {
        let vertex_array = VertexArray::create(&context, Vec::new(), None).unwrap();
        vertex_array.id().unwrap()
    };
    assert!(!mock.vertex_array_exists(id));
}
