mod catalog;
mod event;

pub use catalog::*;
pub use event::*;
