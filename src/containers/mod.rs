//! Containers keyed by strongly-typed identifiers.
mod key_generator;
mod keyed_vec;

use fnv::FnvBuildHasher;
pub use key_generator::KeyGenerator;
pub use keyed_vec::KeyedVec;
pub use keyed_vec::StorageKey;

/// [`std::collections::HashMap`] that defaults to a faster hasher.
pub type HashMap<K, V, Hasher = FnvBuildHasher> = std::collections::HashMap<K, V, Hasher>;

/// [`std::collections::HashSet`] that defaults to a faster hasher.
pub type HashSet<K, Hasher = FnvBuildHasher> = std::collections::HashSet<K, Hasher>;
