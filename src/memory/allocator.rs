/*!
 * Typed Allocator
 * malloc/calloc/realloc/free sized in elements of a value type
 */

use super::heap::SystemHeap;
use super::size::size_of_type;
use super::traits::RawHeap;
use super::types::{MemoryError, MemoryResult};
use crate::core::limits::{HEAP_ALIGNMENT, MAX_ALLOCATION_BYTES};
use crate::core::types::{Address, Size};
use std::any::type_name;
use std::{mem, ptr};
use tracing::{debug, error, trace};

/// Byte length of `count` elements of `T`
///
/// Zero-length requests are always valid. Anything else must fit in
/// [`MAX_ALLOCATION_BYTES`] and must not need more alignment than the heap provides.
pub fn byte_len<T: Copy + 'static>(count: Size) -> MemoryResult<Size> {
    let element_size = size_of_type::<T>();
    let bytes = count
        .checked_mul(element_size)
        .filter(|bytes| *bytes <= MAX_ALLOCATION_BYTES)
        .ok_or(MemoryError::SizeOverflow {
            count,
            element_size,
            type_name: type_name::<T>(),
            limit: MAX_ALLOCATION_BYTES,
        })?;

    if bytes == 0 {
        return Ok(0);
    }

    let alignment = mem::align_of::<T>();
    if alignment > HEAP_ALIGNMENT {
        return Err(MemoryError::AlignmentError {
            type_name: type_name::<T>(),
            alignment,
            supported: HEAP_ALIGNMENT,
        });
    }

    Ok(bytes)
}

/// Typed front end over a [`RawHeap`]
///
/// Blocks are untracked: the caller owns every non-null address it receives
/// and must hand it back to [`realloc`](Self::realloc) or [`free`](Self::free)
/// on the same heap exactly once. Double free, use after free and freeing
/// through a different heap are undefined behavior and are not detected.
#[derive(Debug, Clone, Default)]
pub struct TypedAllocator<H: RawHeap = SystemHeap> {
    heap: H,
}

impl TypedAllocator<SystemHeap> {
    /// Allocator over the native process heap
    pub const fn system() -> Self {
        Self { heap: SystemHeap }
    }
}

impl<H: RawHeap> TypedAllocator<H> {
    /// Allocator over a caller-supplied heap backend
    pub fn with_heap(heap: H) -> Self {
        Self { heap }
    }

    /// Backend this allocator forwards to
    pub fn heap(&self) -> &H {
        &self.heap
    }

    /// Allocate room for `count` uninitialized `T`s
    ///
    /// Returns null without touching the heap when the request is zero bytes.
    pub fn malloc<T: Copy + 'static>(&self, count: Size) -> MemoryResult<Address> {
        self.allocate::<T>(count).map(|(address, _)| address)
    }

    /// Allocate room for `count` `T`s with every byte set to zero
    pub fn calloc<T: Copy + 'static>(&self, count: Size) -> MemoryResult<Address> {
        let (address, bytes) = self.allocate::<T>(count)?;
        if bytes > 0 {
            // SAFETY: `address` is a fresh block of exactly `bytes` writable bytes.
            unsafe { ptr::write_bytes(address.cast::<u8>(), 0, bytes) };
        }
        Ok(address)
    }

    /// Resize a block to hold `count` `T`s
    ///
    /// A null `address` allocates a fresh block. A zero-byte target releases
    /// the block and returns null. Otherwise the returned address replaces
    /// `address`, which is dangling if the heap moved the block. The common
    /// prefix of the old and new sizes is preserved.
    ///
    /// On error the original block is untouched and still owned by the caller.
    ///
    /// # Safety
    ///
    /// `address` must be null or a live block returned by this allocator.
    pub unsafe fn realloc<T: Copy + 'static>(
        &self,
        address: Address,
        count: Size,
    ) -> MemoryResult<Address> {
        if address.is_null() {
            return self.malloc::<T>(count);
        }

        let bytes = byte_len::<T>(count)?;
        if bytes == 0 {
            debug!(
                address = ?address,
                type_name = type_name::<T>(),
                "realloc to zero bytes, releasing block"
            );
            // SAFETY: caller guarantees `address` is live and owned by this heap.
            unsafe { self.heap.release(address) };
            return Ok(ptr::null_mut());
        }

        // SAFETY: caller guarantees `address` is live and owned by this heap.
        let resized = unsafe { self.heap.reallocate(address, bytes) };
        if resized.is_null() {
            return Err(exhausted::<T>(bytes, count));
        }

        trace!(
            from = ?address,
            to = ?resized,
            bytes,
            count,
            relocated = resized != address,
            "realloc"
        );
        Ok(resized)
    }

    /// Release a block; null is a no-op
    ///
    /// # Safety
    ///
    /// `address` must be null or a live block returned by this allocator.
    /// It must not be used afterwards.
    pub unsafe fn free(&self, address: Address) {
        if address.is_null() {
            return;
        }

        trace!(address = ?address, "free");
        // SAFETY: caller guarantees `address` is live and owned by this heap.
        unsafe { self.heap.release(address) }
    }

    fn allocate<T: Copy + 'static>(&self, count: Size) -> MemoryResult<(Address, Size)> {
        let bytes = byte_len::<T>(count)?;
        if bytes == 0 {
            debug!(count, type_name = type_name::<T>(), "Zero-byte request, returning null");
            return Ok((ptr::null_mut(), 0));
        }

        let address = self.heap.allocate(bytes);
        if address.is_null() {
            return Err(exhausted::<T>(bytes, count));
        }

        trace!(address = ?address, bytes, count, type_name = type_name::<T>(), "Allocated block");
        Ok((address, bytes))
    }
}

fn exhausted<T>(requested: Size, count: Size) -> MemoryError {
    error!(
        requested,
        count,
        type_name = type_name::<T>(),
        "OOM: heap could not satisfy request"
    );
    MemoryError::OutOfMemory {
        requested,
        count,
        type_name: type_name::<T>(),
    }
}
