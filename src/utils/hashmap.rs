//! Hash-map and hash-set aliases used by the mesh processing routines.

/// Hashmap using [`hashbrown::HashMap`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;
/// Hashset using [`hashbrown::HashSet`].
pub type HashSet<K> = hashbrown::HashSet<K>;
pub use hashbrown::hash_map::Entry;
