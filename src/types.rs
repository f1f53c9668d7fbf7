/// Raw SAM FLAG column value.
pub type FlagBits = u16;
/// Raw SAM MAPQ column value (255 means unavailable).
pub type MapQ = u8;

// Fast hash maps using AHash instead of the default SipHash.
// Import with `use crate::types::HashMap`; construct with `HashMap::default()`.
pub type HashMap<K, V> = ahash::HashMap<K, V>;
