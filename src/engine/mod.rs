// src/engine/mod.rs

//! Pure selection logic behind the question endpoints.
//!
//! Nothing in here touches the store or fails: empty inputs produce empty
//! outputs and the handlers decide what that means over HTTP.

pub mod pagination;
pub mod search;
pub mod selector;

pub use pagination::paginate;
pub use search::{SearchResult, search};
pub use selector::next_question;
