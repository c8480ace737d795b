//! MongoDB-backed document store

pub mod client;
mod impl_document_store;
pub mod translate;

pub use client::MongoStore;
