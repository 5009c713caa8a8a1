pub mod quote;
pub use quote::*;

pub mod portfolio;
pub use portfolio::*;

pub mod settings;
pub use settings::*;

pub mod valuation;
pub use valuation::*;
