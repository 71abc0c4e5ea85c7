pub mod detect;
pub mod segment;
pub mod checkbox;
pub mod clean;

pub use detect::*;
pub use segment::*;
pub use checkbox::*;
pub use clean::*;
