/*!
 * Memory Module
 * Typed allocation over the native heap
 */

pub mod allocator;
pub mod heap;
pub mod size;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use allocator::{byte_len, TypedAllocator};
pub use heap::SystemHeap;
pub use size::{global_cache, size_of_type, TypeSizeCache};
pub use traits::*;
pub use types::*;

use crate::core::types::{Address, Size};

static SYSTEM_ALLOCATOR: TypedAllocator<SystemHeap> = TypedAllocator::system();

/// Allocate `count` uninitialized `T`s on the process heap
///
/// Null when `count` is zero. See [`TypedAllocator::malloc`].
pub fn malloc<T: Copy + 'static>(count: Size) -> MemoryResult<Address> {
    SYSTEM_ALLOCATOR.malloc::<T>(count)
}

/// Allocate `count` zeroed `T`s on the process heap
///
/// Null when `count` is zero. See [`TypedAllocator::calloc`].
pub fn calloc<T: Copy + 'static>(count: Size) -> MemoryResult<Address> {
    SYSTEM_ALLOCATOR.calloc::<T>(count)
}

/// Resize a process heap block to `count` `T`s
///
/// # Safety
///
/// `address` must be null or a live block from [`malloc`], [`calloc`] or [`realloc`].
/// See [`TypedAllocator::realloc`].
pub unsafe fn realloc<T: Copy + 'static>(address: Address, count: Size) -> MemoryResult<Address> {
    unsafe { SYSTEM_ALLOCATOR.realloc::<T>(address, count) }
}

/// Release a process heap block; null is a no-op
///
/// # Safety
///
/// `address` must be null or a live block from [`malloc`], [`calloc`] or [`realloc`].
pub unsafe fn free(address: Address) {
    unsafe { SYSTEM_ALLOCATOR.free(address) }
}
