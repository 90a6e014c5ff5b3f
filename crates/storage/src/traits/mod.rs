//! Store capability traits.
//!
//! Handlers and services depend on these, never on a concrete backend.

pub mod category;
pub mod question;

pub use category::CategoryStore;
pub use question::QuestionStore;
