//! Infrastructure implementations.

pub mod database;

pub use self::database::{memory::Memory, Database};
