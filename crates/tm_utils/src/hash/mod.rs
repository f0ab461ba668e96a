//! Provide hash containers, re-exports *hashbrown* and *foldhash*.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};
pub use hasher::{NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// Iteration order depends only on the inserted keys, never on a
/// per-process random seed.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;

#[cfg(test)]
mod tests {
    use super::{HashMap, HashSet};

    #[test]
    fn fixed_state_is_deterministic() {
        let mut a: HashMap<&str, u32> = HashMap::default();
        let mut b: HashMap<&str, u32> = HashMap::default();
        for (index, key) in ["name", "age", "address.city", "id"].iter().enumerate() {
            a.insert(key, index as u32);
            b.insert(key, index as u32);
        }

        assert!(a.keys().eq(b.keys()));
    }

    #[test]
    fn set_alias() {
        let mut set: HashSet<u64> = HashSet::default();
        assert!(set.insert(7));
        assert!(!set.insert(7));
        assert_eq!(set.len(), 1);
    }
}
