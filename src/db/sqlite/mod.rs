//! SQLite implementation of the database traits.
//!
//! The todo collection is a table of JSON documents keyed by a
//! store-assigned id.

mod connection;
mod helpers;
mod todo;

#[cfg(test)]
mod todo_test;

pub use connection::SqliteDatabase;
pub use todo::SqliteTodoRepository;
