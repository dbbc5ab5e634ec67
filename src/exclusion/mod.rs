mod bounded;
mod glob;
mod matcher;

pub use bounded::BoundedMap;
pub use glob::{CompiledGlob, MAX_WILDCARDS};
pub use matcher::{CacheCapacities, ExclusionMatcher};
