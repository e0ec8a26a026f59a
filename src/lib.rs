pub mod api;
pub mod benchmarks;
pub mod config;
pub mod consts;
pub mod course;
pub mod error;
pub mod lies;
pub mod loader;
pub mod round;
pub mod sg;

pub use error::{SgError, SgResult};
// cmd and reports live in the sgforge binary.
