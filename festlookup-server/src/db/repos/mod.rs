//! Repository implementations for database access

pub mod festivals;

pub use festivals::{DbError, FestivalRepo};
