/// Small helpers shared by the mock driver

pub mod name_allocator;

pub use name_allocator::NameAllocator;
