mod asset;
mod price;

pub use asset::*;
pub use price::*;
