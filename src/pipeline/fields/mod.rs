//! Typed value recovery from located text spans.
//!
//! Every parser here returns `Option` or an empty collection when nothing
//! is textually present. No parser substitutes a default value.

pub mod types;
pub mod labeled;
pub mod date;
pub mod identifier;
pub mod yes_no;
pub mod diagnosis;
pub mod patient;

pub use types::*;
pub use labeled::*;
pub use date::*;
pub use identifier::*;
pub use yes_no::*;
pub use diagnosis::*;
pub use patient::*;
