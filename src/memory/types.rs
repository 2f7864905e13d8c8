/*!
 * Memory Types
 * Common types for typed allocation
 */

use crate::core::types::Size;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Out of memory: requested {requested} bytes ({count} x {type_name})")]
    OutOfMemory {
        requested: Size,
        count: Size,
        type_name: &'static str,
    },

    #[error("Allocation size overflow: {count} x {type_name} ({element_size} bytes each) exceeds {limit} bytes")]
    SizeOverflow {
        count: Size,
        element_size: Size,
        type_name: &'static str,
        limit: Size,
    },

    #[error("Alignment error: {type_name} requires alignment {alignment}, heap guarantees {supported}")]
    AlignmentError {
        type_name: &'static str,
        alignment: Size,
        supported: Size,
    },
}

impl MemoryError {
    /// Whether the heap itself refused the request
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, MemoryError::OutOfMemory { .. })
    }
}
