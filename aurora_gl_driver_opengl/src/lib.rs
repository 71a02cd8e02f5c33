/*!
# Aurora GL - OpenGL Driver

OpenGL 4.5 implementation of the aurora_gl [`Driver`](aurora_gl::aurora::driver::Driver)
trait, built on the `gl` bindings and direct state access.

The crate owns no window or context. Create the context with your
windowing library, make it current, then load the driver from it:

```no_run
use aurora_gl::aurora::{Context, ContextConfig};
use aurora_gl_driver_opengl::GlDriver;

# fn get_proc_address(_: &str) -> *const std::ffi::c_void { std::ptr::null() }
# fn main() -> aurora_gl::Result<()> {
// SAFETY: a context is current on this thread
let driver = unsafe { GlDriver::load_with(get_proc_address)? };
let context = Context::with_config(driver, ContextConfig::default().with_debug_output(true));
# Ok(())
# }
```
*/

mod gl_conversions;
mod gl_debug;
mod gl_driver;

pub use gl_driver::GlDriver;
