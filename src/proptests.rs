use super::*;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeMap, HashSet};

/// Asserts the BST property and the cached length by walking the tree.
fn validate_tree<R>(t: &Bst<R>) {
    if t.is_empty() {
        assert_eq!(t.len(), 0, "empty tree must report zero length");
        assert_eq!(t.validate(), Err(ValidateError::EmptyTree));
        return;
    }
    assert_eq!(t.validate(), Ok(true), "BST property violated");

    let mut seen = HashSet::new();
    for node in t.iter() {
        assert!(seen.insert(node.key()), "key {} visited twice", node.key());
    }
    assert_eq!(seen.len(), t.len(), "reachable node count must match Bst::len");
}

/// Depth of every node, in the order the level-order walk yields them.
fn depths(root: Option<&Node>) -> Vec<usize> {
    let mut out = Vec::new();
    let mut frontier: Queue<(&Node, usize)> = root.map(|r| (r, 0)).into_iter().collect();
    while let Ok((node, depth)) = frontier.pop() {
        out.push(depth);
        for child in [node.left(), node.right()].into_iter().flatten() {
            frontier.push((child, depth + 1));
        }
    }
    out
}

#[derive(Clone, Debug)]
enum Op {
    Insert(i64, String),
    Delete(i64),
    Search(i64),
}

fn key_strategy() -> impl Strategy<Value = i64> + Clone {
    // Narrow range so deletes and overwrites actually hit existing keys.
    -200i64..200
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        50 => (key.clone(), "[a-z]{0,6}").prop_map(|(k, v)| Op::Insert(k, v)),
        30 => key.clone().prop_map(Op::Delete),
        20 => key.prop_map(Op::Search),
    ];
    prop::collection::vec(op, 0..=600)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        max_shrink_iters: 10_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_btreemap(ops in ops_strategy(), seed in any::<u64>()) {
        let mut t = Bst::with_rng(None, StdRng::seed_from_u64(seed));
        let mut m: BTreeMap<i64, String> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let old_t = t.insert(key, value.clone());
                    let old_m = m.insert(key, value);
                    prop_assert_eq!(old_t, old_m);
                }
                Op::Delete(key) => {
                    let got = t.delete(key);
                    let expected = if m.is_empty() {
                        Err(DeleteError::EmptyTree)
                    } else if m.len() == 1 && m.contains_key(&key) {
                        Err(DeleteError::DeleteRootLeaf)
                    } else if m.remove(&key).is_some() {
                        Ok(())
                    } else {
                        Err(DeleteError::KeyNotFound(key))
                    };
                    prop_assert_eq!(got, expected);
                }
                Op::Search(key) => {
                    prop_assert_eq!(t.search(key), m.get(&key).map(String::as_str));
                }
            }

            prop_assert_eq!(t.len(), m.len());
            validate_tree(&t);
        }

        let mut got: Vec<(i64, String)> =
            t.iter().map(|n| (n.key(), n.value().to_string())).collect();
        got.sort_unstable();
        let expected: Vec<(i64, String)> = m.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_level_order_totality(keys in prop::collection::vec(key_strategy(), 1..=300)) {
        let mut t = Bst::new();
        for &k in &keys {
            t.insert(k, k.to_string());
        }

        let unique: HashSet<i64> = keys.iter().copied().collect();
        let mut it = t.iter();
        let mut visited = Vec::new();
        while let Ok(node) = it.next_node() {
            visited.push(node.key());
        }
        prop_assert_eq!(visited.len(), unique.len());
        prop_assert_eq!(visited.iter().copied().collect::<HashSet<_>>(), unique);
        for _ in 0..3 {
            prop_assert_eq!(it.next_node().err(), Some(IteratorStopped));
        }

        // Depth never decreases along a level-order walk.
        let d = depths(t.root());
        prop_assert!(d.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_delete_each_branch(
        keys in prop::collection::hash_set(key_strategy(), 2..=120),
        pick in any::<prop::sample::Index>(),
        left_side in any::<bool>(),
    ) {
        let keys: Vec<i64> = keys.into_iter().collect();
        let mut t = Bst::new();
        for &k in &keys {
            t.insert(k, format!("v{k}"));
        }
        let target = keys[pick.index(keys.len())];
        let before = t.len();
        let side = if left_side { Side::Left } else { Side::Right };

        t.delete_with_side(target, side).unwrap();

        prop_assert_eq!(t.len(), before - 1);
        prop_assert_eq!(t.search(target), None);
        validate_tree(&t);
        for &k in keys.iter().filter(|&&k| k != target) {
            let expected = format!("v{k}");
            prop_assert_eq!(t.search(k), Some(expected.as_str()));
        }
    }

    #[test]
    fn prop_literal_and_inserted_trees_equal(keys in prop::collection::vec(key_strategy(), 1..=100)) {
        let mut inserted = Bst::new();
        for &k in &keys {
            inserted.insert(k, k.to_string());
        }

        // Re-inserting the level-order sequence reproduces the shape.
        let order: Vec<i64> = inserted.iter().map(Node::key).collect();
        let mut replayed = Bst::new();
        for k in order {
            replayed.insert(k, k.to_string());
        }
        prop_assert_eq!(&inserted, &replayed);

        let root = inserted.root().cloned();
        prop_assert_eq!(&inserted, &Bst::from_root(root));
    }
}

#[test]
fn delete_side_distribution_stays_balanced() {
    // Repeatedly deleting the root of a complete tree alternates sides at
    // random; both sides must show up.
    let keys: Vec<i64> = (1..=1023).collect();
    let mut t = Bst::with_rng(None, StdRng::seed_from_u64(17));
    fn insert_balanced(t: &mut Bst, keys: &[i64]) {
        if keys.is_empty() {
            return;
        }
        let mid = keys.len() / 2;
        t.insert(keys[mid], keys[mid].to_string());
        insert_balanced(t, &keys[..mid]);
        insert_balanced(t, &keys[mid + 1..]);
    }
    insert_balanced(&mut t, &keys);
    assert_eq!(t.height(), 10);

    let mut promoted_from_right = 0;
    let mut promoted_from_left = 0;
    for _ in 0..200 {
        let root = t.root().map(Node::key).unwrap();
        if t.root().is_some_and(|r| r.left().is_some() && r.right().is_some()) {
            t.delete(root).unwrap();
            let new_root = t.root().map(Node::key).unwrap();
            if new_root > root {
                promoted_from_right += 1;
            } else {
                promoted_from_left += 1;
            }
        } else {
            break;
        }
        validate_tree(&t);
    }
    assert!(promoted_from_right > 0 && promoted_from_left > 0);
}
