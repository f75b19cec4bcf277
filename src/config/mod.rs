//! Configuration model for mobitor.
//!
//! Settings come from an optional YAML file (`--config`), with CLI flags
//! layered on top. Unknown fields in the YAML are ignored, and every field
//! has a default so an empty file is valid.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use types::{ExitCodePolicy, SeverityMatch};
