/*!
 * Size Resolver Tests
 * Element sizes come from the type layout and are cached per type
 */

use pretty_assertions::assert_eq;
use std::mem;
use typed_malloc::{global_cache, size_of_type, TypeSizeCache};

#[allow(dead_code)]
#[repr(C)]
#[derive(Clone, Copy)]
struct Header {
    kind: u8,
    length: u64,
    flags: u16,
}

#[allow(dead_code)]
#[derive(Clone, Copy)]
struct Vertex {
    position: [f32; 3],
    color: u32,
}

#[allow(dead_code)]
#[derive(Clone, Copy)]
struct OnlyResolvedHere(u16, u8);

#[test]
fn test_size_includes_type_padding() {
    // 1 + 7 pad + 8 + 2 + 6 trailing pad
    assert_eq!(size_of_type::<Header>(), 24);
    assert_eq!(size_of_type::<Vertex>(), 16);
}

#[test]
fn test_size_equals_array_stride() {
    assert_eq!(
        size_of_type::<Header>() * 4,
        mem::size_of::<[Header; 4]>()
    );
    assert_eq!(size_of_type::<(u8, u32)>() * 3, mem::size_of::<[(u8, u32); 3]>());
}

#[test]
fn test_primitive_sizes() {
    assert_eq!(size_of_type::<u8>(), 1);
    assert_eq!(size_of_type::<i16>(), 2);
    assert_eq!(size_of_type::<f32>(), 4);
    assert_eq!(size_of_type::<u64>(), 8);
    assert_eq!(size_of_type::<u128>(), 16);
    assert_eq!(size_of_type::<usize>(), mem::size_of::<usize>());
}

#[test]
fn test_repeated_queries_are_stable() {
    let first = size_of_type::<Vertex>();
    for _ in 0..100 {
        assert_eq!(size_of_type::<Vertex>(), first);
    }
}

#[test]
fn test_global_cache_is_populated_lazily() {
    assert!(!global_cache().is_cached::<OnlyResolvedHere>());
    assert_eq!(size_of_type::<OnlyResolvedHere>(), 4);
    assert!(global_cache().is_cached::<OnlyResolvedHere>());
    assert!(!global_cache().is_empty());
}

#[test]
fn test_independent_cache_instances() {
    let cache = TypeSizeCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.resolve::<Header>(), size_of_type::<Header>());
    assert_eq!(cache.len(), 1);
}
