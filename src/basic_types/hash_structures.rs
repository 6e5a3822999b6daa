//! Hash structures keyed by proposition names use FNV instead of the default SipHash.

pub(crate) type HashMap<K, V, Hasher = fnv::FnvBuildHasher> =
    std::collections::HashMap<K, V, Hasher>;
