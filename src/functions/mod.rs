pub mod valuation;
pub use valuation::*;

pub mod report;
pub use report::*;
