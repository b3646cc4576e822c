//! To-do list HTTP service backed by a document collection.
//!
//! - `db`: record store adapter over the `todos` collection
//! - `api`: HTTP handlers, routing and server bootstrap
//! - `search`: the one-shot search engine indexing call made at startup

pub mod api;
pub mod db;
pub mod search;
