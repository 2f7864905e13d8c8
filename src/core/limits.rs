/*!
 * Allocation Limits and Constants
 */

/// Largest byte length a single block may span
/// Rust layouts cannot exceed `isize::MAX` bytes
pub const MAX_ALLOCATION_BYTES: usize = isize::MAX as usize;

/// Alignment the native heap guarantees for every block it returns
#[cfg(target_pointer_width = "64")]
pub const HEAP_ALIGNMENT: usize = 16;

/// Alignment the native heap guarantees for every block it returns
#[cfg(not(target_pointer_width = "64"))]
pub const HEAP_ALIGNMENT: usize = 8;
