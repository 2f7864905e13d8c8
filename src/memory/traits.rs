/*!
 * Memory Traits
 * Heap backend abstraction
 */

use crate::core::types::{Address, Size};

/// Untyped byte heap the typed primitives forward to
///
/// Every method reports failure by returning null. Implementations never
/// see a zero-byte request from [`TypedAllocator`](super::TypedAllocator).
///
/// # Safety
///
/// A non-null address returned by [`allocate`](Self::allocate) or
/// [`reallocate`](Self::reallocate) must be a live, writable block of at least
/// `bytes` bytes, aligned to
/// [`HEAP_ALIGNMENT`](crate::core::limits::HEAP_ALIGNMENT), that stays valid until it is
/// passed to `reallocate` or [`release`](Self::release). Safe code such as
/// [`TypedAllocator::calloc`](super::TypedAllocator::calloc) writes through it.
///
/// Implementing the trait therefore requires `unsafe impl`:
///
/// ```compile_fail
/// use typed_malloc::{Address, RawHeap, Size};
///
/// struct Bogus;
///
/// impl RawHeap for Bogus {
///     fn allocate(&self, _bytes: Size) -> Address {
///         0x10 as Address
///     }
///     unsafe fn reallocate(&self, _address: Address, _bytes: Size) -> Address {
///         std::ptr::null_mut()
///     }
///     unsafe fn release(&self, _address: Address) {}
/// }
/// ```
pub unsafe trait RawHeap: Send + Sync {
    /// Allocate `bytes` uninitialized bytes
    fn allocate(&self, bytes: Size) -> Address;

    /// Resize a block to `bytes`, possibly moving it
    ///
    /// On failure the original block must be left untouched.
    ///
    /// # Safety
    ///
    /// `address` must be a live block obtained from this heap.
    unsafe fn reallocate(&self, address: Address, bytes: Size) -> Address;

    /// Return a block to the heap
    ///
    /// # Safety
    ///
    /// `address` must be a live block obtained from this heap. It is dangling afterwards.
    unsafe fn release(&self, address: Address);
}
