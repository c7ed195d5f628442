//! Shared rules vocabulary.
//!
//! Both engines report their state through these types:
//! - `Outcome` for the marking game
//! - `MergeStatus` for the merge game
//! - the `Game` trait that the session layer drives

pub mod outcome;

pub use outcome::{Game, MergeStatus, Outcome};
