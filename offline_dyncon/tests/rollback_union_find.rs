use offline_dyncon::rollback_union_find::{Merge, RollbackUnionFind};
use rand::{Rng, SeedableRng};

mod common;

#[test]
fn test_union_and_find() {
    let mut uf = RollbackUnionFind::new(5);
    assert_eq!(uf.components(), 5);
    assert!(uf.union(0, 1));
    assert!(uf.union(2, 3));
    assert!(!uf.union(1, 0));
    assert!(uf.same(0, 1));
    assert!(!uf.same(1, 2));
    assert_eq!(uf.components(), 3);
    assert_eq!(uf.history_len(), 2);
    assert!(uf.union(1, 3));
    assert_eq!(uf.size_of(2), 4);
    assert_eq!(uf.size_of(4), 1);
    assert_eq!(uf.components(), 2);
}

#[test]
fn test_smaller_goes_under_larger() {
    let mut uf = RollbackUnionFind::new(4);
    uf.union(0, 1);
    uf.union(0, 2);
    let big = uf.find(0);
    uf.union(3, 0);
    assert_eq!(uf.find(3), big);
    assert_eq!(
        uf.last_merge(),
        Some(&Merge {
            absorbed: 3,
            root: big,
            root_size: 3
        })
    );
}

#[test]
fn test_undo_restores_exact_state() {
    let mut uf = RollbackUnionFind::new(6);
    uf.union(0, 1);
    uf.union(2, 3);
    let before = format!("{uf:?}");
    assert!(uf.union(1, 2));
    assert!(uf.union(4, 5));
    assert!(!uf.union(0, 3));
    uf.undo();
    uf.undo();
    assert_eq!(format!("{uf:?}"), before);
    assert!(!uf.same(0, 3));
    assert_eq!(uf.size_of(0), 2);
    assert_eq!(uf.components(), 4);
}

#[test]
#[should_panic(expected = "no merge")]
fn test_undo_on_empty_history() {
    let mut uf = RollbackUnionFind::new(3);
    uf.undo();
}

#[test]
#[should_panic]
fn test_rollback_past_history() {
    let mut uf = RollbackUnionFind::new(3);
    uf.union(0, 1);
    uf.rollback(2);
}

#[test]
fn test_random_rollback_matches_replay() {
    common::init_logger();
    const N: usize = 30;
    let mut rng = rand::rngs::StdRng::seed_from_u64(9232345);
    let mut uf = RollbackUnionFind::new(N);
    let mut applied: Vec<(usize, usize)> = vec![];
    let mut depths = vec![];
    for q in 0..2000 {
        if depths.is_empty() || rng.gen_bool(0.6) {
            depths.push((uf.history_len(), applied.len()));
            for _ in 0..rng.gen_range(1..4) {
                let (u, v) = (rng.gen_range(0..N), rng.gen_range(0..N));
                uf.union(u, v);
                applied.push((u, v));
            }
        } else {
            let (depth, count) = depths.pop().unwrap();
            uf.rollback(depth);
            applied.truncate(count);
        }
        if q % 50 == 0 {
            let mut replay = RollbackUnionFind::new(N);
            for &(u, v) in &applied {
                replay.union(u, v);
            }
            assert_eq!(replay.components(), uf.components(), "q {q}");
            for u in 0..N {
                for v in 0..N {
                    assert_eq!(replay.same(u, v), uf.same(u, v), "q {q} u {u} v {v}");
                }
            }
        }
    }
}
