//! Persistence: mutation produces new roots; old roots never change.
//!
//! These tests work at the ops layer, holding raw root indices across
//! mutations the way a driver holding stale versions would.

use safe_bump::Idx;

use crate::SegForest;
use crate::arena::NodeArena;
use crate::node::Node;
use crate::ops::merge::merge_recursive;
use crate::ops::query::{count_in_range, sum_in_range};
use crate::ops::split::split_recursive;
use crate::ops::update::{build_recursive, update_recursive};

const N: u32 = 16;

fn raw(node: Option<Idx<Node>>) -> Option<usize> {
    node.map(Idx::into_raw)
}

fn sums(store: &NodeArena, root: Option<Idx<Node>>) -> Vec<i64> {
    let mut out = Vec::new();
    for l in 1..=N {
        for r in l..=N {
            out.push(sum_in_range(store, root, 1, N, l, r));
        }
    }
    out
}

#[test]
fn old_root_survives_update() {
    let mut store = NodeArena::with_capacity(4096);
    let old = build_recursive(&mut store, 1, N, &[2, 4, 6, 8, 10]).unwrap();
    let before = sums(&store, old);

    let new = update_recursive(&mut store, old, 1, N, 3, 100).unwrap();
    assert_eq!(sums(&store, old), before);
    assert_eq!(sum_in_range(&store, Some(new), 1, N, 3, 3), 106);
    assert_eq!(sum_in_range(&store, old, 1, N, 3, 3), 6);
}

#[test]
fn old_root_survives_split() {
    let mut store = NodeArena::with_capacity(4096);
    let source = build_recursive(&mut store, 1, N, &[1, 1, 2, 3, 5, 8, 13]).unwrap();
    let before = sums(&store, source);
    let total = sum_in_range(&store, source, 1, N, 1, N);

    let outcome = split_recursive(&mut store, source, 1, N, 3, 6).unwrap();
    // Conservation, evaluated against the pre-split root.
    let rem = sum_in_range(&store, outcome.remaining, 1, N, 1, N);
    let ext = sum_in_range(&store, outcome.extracted, 1, N, 1, N);
    assert_eq!(rem + ext, total);
    assert_eq!(sums(&store, source), before);
}

#[test]
fn inputs_survive_merge() {
    let mut store = NodeArena::with_capacity(8192);
    let source = build_recursive(&mut store, 1, N, &[7, 7, 7, 7, 7, 7, 7, 7]).unwrap();
    let outcome = split_recursive(&mut store, source, 1, N, 2, 5).unwrap();
    let rem_before = sums(&store, outcome.remaining);
    let ext_before = sums(&store, outcome.extracted);
    let source_before = sums(&store, source);

    let merged = merge_recursive(&mut store, outcome.remaining, outcome.extracted, 1, N).unwrap();
    // The merged tree answers like the pre-split source; none of the
    // three older roots moved.
    assert_eq!(sums(&store, merged), source_before);
    assert_eq!(sums(&store, outcome.remaining), rem_before);
    assert_eq!(sums(&store, outcome.extracted), ext_before);
    assert_eq!(sums(&store, source), source_before);
}

/// A contained-range split transfers whole subtrees by index: splitting
/// off the entire domain allocates nothing and reuses the source root.
#[test]
fn full_split_is_wholesale_transfer() {
    let mut store = NodeArena::with_capacity(4096);
    let source = build_recursive(&mut store, 1, N, &[1, 2, 3, 4, 5, 6]).unwrap();
    let before = store.len();

    let outcome = split_recursive(&mut store, source, 1, N, 1, N).unwrap();
    assert_eq!(store.len(), before);
    assert_eq!(raw(outcome.extracted), raw(source));
    assert_eq!(raw(outcome.remaining), None);
}

/// One-sided merges fuse by reuse: merging with an empty tree allocates
/// nothing and returns the occupied root.
#[test]
fn one_sided_merge_reuses_nodes() {
    let mut store = NodeArena::with_capacity(4096);
    let root = build_recursive(&mut store, 1, N, &[9, 9, 9]).unwrap();
    let before = store.len();

    let merged = merge_recursive(&mut store, root, None, 1, N).unwrap();
    assert_eq!(raw(merged), raw(root));
    let merged = merge_recursive(&mut store, None, root, 1, N).unwrap();
    assert_eq!(raw(merged), raw(root));
    assert_eq!(store.len(), before);
}

/// A point update allocates one fresh node per level — O(log N), with
/// everything off the path shared with the old root.
#[test]
fn update_allocates_one_path() {
    let mut store = NodeArena::with_capacity(1 << 16);
    let values: Vec<i64> = (0..1024).collect();
    let root = build_recursive(&mut store, 1, 1024, &values).unwrap();
    let before = store.len();

    update_recursive(&mut store, root, 1, 1024, 777, 1).unwrap();
    let allocated = store.len() - before;
    assert!(
        allocated <= 11,
        "expected one root-to-leaf path, got {allocated}"
    );
}

#[test]
fn zero_delta_update_is_identity() {
    let mut forest = SegForest::new(8, 1024);
    let v = forest.build(&[1, 2, 3, 4]).unwrap();
    let root_before = raw(forest.root_of(v).unwrap());
    let arena_before = forest.arena_len();

    let returned = forest.update(v, 2, 0).unwrap();
    assert_eq!(returned, v);
    // Bit-for-bit: the same root index, no allocation at all.
    assert_eq!(raw(forest.root_of(v).unwrap()), root_before);
    assert_eq!(forest.arena_len(), arena_before);
    assert_eq!(forest.query_sum(v, 1, 8), Ok(10));
    assert_eq!(forest.query_count(v, 2, 2), Ok(1));
}

#[test]
fn count_queries_see_old_roots_too() {
    let mut store = NodeArena::with_capacity(4096);
    let old = build_recursive(&mut store, 1, N, &[5, 5]).unwrap();
    let new = update_recursive(&mut store, old, 1, N, 2, 5).unwrap();

    assert_eq!(count_in_range(&store, old, 1, N, 1, N), 2);
    assert_eq!(count_in_range(&store, Some(new), 1, N, 1, N), 3);
}
