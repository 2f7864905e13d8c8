/*!
 * Typed Malloc
 *
 * C-style `malloc`/`calloc`/`realloc`/`free` sized in elements of a value
 * type instead of bytes. Element sizes are resolved once per type and cached
 * process-wide; storage comes straight from the native heap.
 */

pub mod core;
pub mod memory;
pub mod monitoring;

// Re-exports
pub use crate::core::types::{Address, Size};
pub use memory::{
    byte_len, calloc, free, global_cache, malloc, realloc, size_of_type, MemoryError,
    MemoryResult, RawHeap, SystemHeap, TypeSizeCache, TypedAllocator,
};
pub use monitoring::init_tracing;
