pub mod api;
pub use api::*;

pub mod io_error;
pub use io_error::*;
