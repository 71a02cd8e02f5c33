//! KHR_debug callback forwarding to an aurora debug hook

use aurora_gl::aurora::driver::{DebugHook, DebugMessage};
use gl::types::{GLchar, GLenum, GLsizei, GLuint};
use std::ffi::{c_void, CStr};
use std::panic::{self, AssertUnwindSafe};

use crate::gl_conversions::{debug_severity_from_gl, debug_source_from_gl, debug_type_from_gl};

/// Heap slot whose address is handed to GL as the callback's user pointer
///
/// The slot must stay installed (and unmoved) until GL no longer holds
/// the pointer.
pub(crate) type HookSlot = Box<DebugHook>;

pub(crate) fn user_param(slot: &mut HookSlot) -> *const c_void {
    let hook: *mut DebugHook = &mut **slot;
    hook as *const c_void
}

/// Read the message text, which is NUL terminated when `length` is negative
///
/// # Safety
/// `message` must be null or point to `length` readable bytes (or a NUL
/// terminated string when `length < 0`).
unsafe fn message_text(message: *const GLchar, length: GLsizei) -> String {
    if message.is_null() {
        return String::new();
    }
    if length < 0 {
        return CStr::from_ptr(message).to_string_lossy().into_owned();
    }
    let bytes = std::slice::from_raw_parts(message as *const u8, length as usize);
    let text = String::from_utf8_lossy(bytes);
    text.trim_end_matches('\0').to_string()
}

/// Entry point registered with `glDebugMessageCallback`
///
/// A panicking hook is caught here; unwinding into the driver is not allowed.
pub(crate) extern "system" fn debug_callback(
    source: GLenum,
    gltype: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
    user_param: *mut c_void,
) {
    if user_param.is_null() {
        return;
    }

    let message = DebugMessage {
        source: debug_source_from_gl(source),
        kind: debug_type_from_gl(gltype),
        id,
        severity: debug_severity_from_gl(severity),
        message: unsafe { message_text(message, length) },
    };

    // SAFETY: user_param is the address of the HookSlot owned by the driver,
    // which unregisters the callback before dropping the slot.
    let hook = unsafe { &mut *(user_param as *mut DebugHook) };
    let _ = panic::catch_unwind(AssertUnwindSafe(|| hook(&message)));
}
