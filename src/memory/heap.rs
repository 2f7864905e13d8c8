/*!
 * System Heap
 * Native process heap backend
 */

use super::traits::RawHeap;
use crate::core::types::{Address, Size};

/// The process heap, reached through the C runtime's `malloc`/`realloc`/`free`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHeap;

// SAFETY: malloc/realloc return blocks of at least the requested size, aligned
// for any fundamental type, valid until passed to realloc or free.
unsafe impl RawHeap for SystemHeap {
    #[inline]
    fn allocate(&self, bytes: Size) -> Address {
        // SAFETY: malloc accepts any size and returns null when it cannot satisfy it.
        unsafe { libc::malloc(bytes) }
    }

    #[inline]
    unsafe fn reallocate(&self, address: Address, bytes: Size) -> Address {
        // SAFETY: caller guarantees `address` came from malloc/realloc and is still live.
        // realloc leaves the original block intact when it returns null.
        unsafe { libc::realloc(address, bytes) }
    }

    #[inline]
    unsafe fn release(&self, address: Address) {
        // SAFETY: caller guarantees `address` came from malloc/realloc and is still live.
        unsafe { libc::free(address) }
    }
}
