//! Input/output helpers.
//!
//! - extrapolation request JSON (`request`)
//! - result exports (`export`)

pub mod export;
pub mod request;

pub use export::*;
pub use request::*;
