#![cfg(test)]

// Property tests for ChainHashMap kept inside the crate so they can stay
// next to the implementation they exercise.

use crate::chain_hash_map::{ChainHashMap, KeyNotFound};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hasher};

// Key newtype with Borrow<str> to exercise borrowed lookup.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    OrDefault(usize),
    Remove(usize),
    Get(usize),
    At(usize),
    Contains(String),
    Find(usize),
    Mutate(usize, i32),
    Iterate,
    Clear,
}

fn key_from(pool: &[String], i: usize) -> Key {
    Key(pool[i].clone())
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            8 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            5 => idx.clone().prop_map(OpI::OrDefault),
            5 => idx.clone().prop_map(OpI::Remove),
            5 => idx.clone().prop_map(OpI::Get),
            3 => idx.clone().prop_map(OpI::At),
            3 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            4 => idx.clone().prop_map(OpI::Find),
            5 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            3 => Just(OpI::Iterate),
            1 => Just(OpI::Clear),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// State-machine equivalence against std::collections::HashMap. Shared by
// the default-hasher and constant-hasher runs; invariants exercised across
// random operation sequences:
// - Overwrite semantics: `insert` returns exactly what the model returns.
// - `get`/`contains_key`/`at` parity, including borrowed `&str` lookups.
// - `or_insert_default` matches the model's entry-or-default and a present
//   key keeps its value.
// - `find == end` iff the model lacks the key; a found cursor dereferences
//   to the model's pair.
// - `iter` yields each live pair exactly once; the collected map equals
//   the model.
// - `remove` parity and idempotence; `clear` resets to `begin == end`.
// - `len`/`is_empty` parity after every op.
fn run_state_machine<S>(
    mut sut: ChainHashMap<Key, i32, S>,
    pool: Vec<String>,
    ops: Vec<OpI>,
) -> Result<(), TestCaseError>
where
    S: BuildHasher,
{
    let mut model: HashMap<Key, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = key_from(&pool, i);
                prop_assert_eq!(sut.insert(k.clone(), v), model.insert(k, v));
            }
            OpI::OrDefault(i) => {
                let k = key_from(&pool, i);
                let got = *sut.or_insert_default(k.clone());
                let want = *model.entry(k).or_default();
                prop_assert_eq!(got, want);
            }
            OpI::Remove(i) => {
                let k = key_from(&pool, i);
                prop_assert_eq!(sut.remove(&k), model.remove(&k));
                // Second removal of the same key is always a no-op.
                prop_assert_eq!(sut.remove(&k), None);
            }
            OpI::Get(i) => {
                let k = key_from(&pool, i);
                prop_assert_eq!(sut.get(&k).copied(), model.get(&k).copied());
            }
            OpI::At(i) => {
                let k = key_from(&pool, i);
                match sut.at(&k) {
                    Ok(v) => prop_assert_eq!(Some(v), model.get(&k)),
                    Err(KeyNotFound) => prop_assert!(!model.contains_key(&k)),
                }
            }
            OpI::Contains(s) => {
                let has = sut.contains_key(s.as_str());
                let has_model = model.keys().any(|k| k.0 == s);
                prop_assert_eq!(has, has_model);
            }
            OpI::Find(i) => {
                let k = key_from(&pool, i);
                let c = sut.find(&k);
                prop_assert_eq!(c == sut.end(), !model.contains_key(&k));
                if c != sut.end() {
                    prop_assert_eq!(c.key(&sut), Some(&k));
                    prop_assert_eq!(c.value(&sut), model.get(&k));
                }
            }
            OpI::Mutate(i, d) => {
                let k = key_from(&pool, i);
                match (sut.get_mut(&k), model.get_mut(&k)) {
                    (Some(sv), Some(mv)) => {
                        *sv = sv.saturating_add(d);
                        *mv = mv.saturating_add(d);
                    }
                    (None, None) => {}
                    _ => prop_assert!(false, "get_mut presence diverged from model"),
                }
            }
            OpI::Iterate => {
                let got: BTreeMap<Key, i32> =
                    sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                let want: BTreeMap<Key, i32> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(got, want);
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.begin(), sut.end());
            }
        }

        // Post-conditions after each op
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_state_machine(ChainHashMap::new(), pool, ops)?;
    }
}

// Collision variant using a constant hasher to force every key into one
// bucket; this stresses chain probing, relinking and traversal.
#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        let sut = ChainHashMap::with_buckets_and_hasher(16, ConstBuildHasher);
        run_state_machine(sut, pool, ops)?;
    }
}
