pub mod link;
pub mod span;
pub mod target;

pub use link::LinkOccurrence;
pub use span::Span;
pub use target::{CREATE_SCHEME, ResolvedTarget};
