//! Database access: per-request connections and the festival repository

pub mod connection;
pub mod repos;

pub use connection::connect;
pub use repos::{DbError, FestivalRepo};
