pub mod sina;
pub use sina::*;

pub mod bark;
pub use bark::*;
