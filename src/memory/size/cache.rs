/*!
 * Type Size Cache
 * Append-only concurrent map from type identity to per-element byte size
 */

use crate::core::types::Size;
use ahash::RandomState;
use dashmap::DashMap;
use std::any::{type_name, TypeId};
use std::mem;
use tracing::trace;

/// Concurrent get-or-compute cache of element sizes keyed by [`TypeId`]
///
/// Entries are never removed or replaced. Lookups of populated entries only
/// take a shard read lock; a miss goes through `entry()`, so concurrent first
/// resolutions of one type install exactly one value.
pub struct TypeSizeCache {
    sizes: DashMap<TypeId, Size, RandomState>,
}

impl TypeSizeCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            sizes: DashMap::with_hasher(RandomState::new()),
        }
    }

    /// Bytes one `T` occupies in a contiguous array (its stride)
    #[inline]
    pub fn resolve<T: Copy + 'static>(&self) -> Size {
        let key = TypeId::of::<T>();
        if let Some(size) = self.sizes.get(&key) {
            return *size;
        }

        *self.sizes.entry(key).or_insert_with(|| {
            let size = mem::size_of::<T>();
            trace!(type_name = type_name::<T>(), size, "Resolved element size");
            size
        })
    }

    /// Whether `T` has been resolved at least once
    pub fn is_cached<T: 'static>(&self) -> bool {
        self.sizes.contains_key(&TypeId::of::<T>())
    }

    /// Number of distinct types resolved so far
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether no type has been resolved yet
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl Default for TypeSizeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeSizeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeSizeCache")
            .field("entries", &self.sizes.len())
            .finish()
    }
}
