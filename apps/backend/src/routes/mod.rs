//! HTTP route handlers.

pub mod chat;
pub mod documents;
pub mod notes;
pub mod questions;
