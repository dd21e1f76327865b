mod offsets;
mod weights;

pub mod standard;

pub use offsets::*;
pub use weights::*;
