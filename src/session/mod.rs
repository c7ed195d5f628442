//! Session layer: who owns which game, and how chat actions reach it.
//!
//! The store is an explicit value the front-end owns and passes around.
//! Taking `&mut self` for every action serializes access per store.

pub mod action;
pub mod store;

pub use action::PlayerAction;
pub use store::{Reply, Session, SessionStore};
