//! JSON known-answer suites
//!
//! Each file under `src/vectors/` names a primitive family and holds
//! groups of cases for one algorithm. Group-level fields are copied down
//! to every case of the group before dispatch.

pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod model;
pub mod runner;

pub use error::*;
pub use loader::*;
pub use model::*;
pub use runner::*;
