pub mod document;
pub mod entry;
pub mod enums;
pub mod section;

pub use document::*;
pub use entry::*;
pub use enums::*;
pub use section::*;
