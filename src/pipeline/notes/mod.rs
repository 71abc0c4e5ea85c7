pub mod rules;
pub mod clerking;
pub mod classify;

pub use rules::*;
pub use clerking::*;
pub use classify::*;
