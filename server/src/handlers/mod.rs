//! Request handlers for table events.

mod page;
mod selection;

pub use page::*;
pub use selection::*;
