/*!
 * Size Resolver
 *
 * Resolves the per-element byte size of a value type from the compiler's
 * layout (`size_of`, which includes trailing padding and equals the array
 * stride) and memoizes it in a process-wide [`TypeSizeCache`].
 */

mod cache;

pub use cache::TypeSizeCache;

use crate::core::types::Size;
use std::sync::OnceLock;

static SIZE_CACHE: OnceLock<TypeSizeCache> = OnceLock::new();

/// Process-wide cache, created empty on first use and never torn down
pub fn global_cache() -> &'static TypeSizeCache {
    SIZE_CACHE.get_or_init(TypeSizeCache::new)
}

/// Per-element byte size of `T`
#[inline]
pub fn size_of_type<T: Copy + 'static>() -> Size {
    global_cache().resolve::<T>()
}
