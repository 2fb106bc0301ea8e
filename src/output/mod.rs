mod plain;
mod serde_sums;

pub use plain::*;
pub use serde_sums::*;
