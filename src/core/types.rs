/*!
 * Core Types
 * Common types used across the allocator
 */

use std::ffi::c_void;

/// Raw address of a heap block
///
/// Carries no ownership or bounds metadata. Null means "no block".
pub type Address = *mut c_void;

/// Size type for byte lengths and element counts
pub type Size = usize;
