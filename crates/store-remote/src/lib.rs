//! Remote store implementation for giftbook.
//!
//! Two thin clients talk to the hosted backend: [`CollectionClient`] for the
//! schema-less keyed-collection database and [`BlobClient`] for object
//! storage. [`CompositeWriter`] sequences asset uploads with their dependent
//! record writes so partial failures surface instead of leaving silent
//! orphans. The per-domain repositories implement the `giftbook-core` traits
//! on top of those clients.

pub mod blob;
pub mod client;
pub mod config;
pub mod coordinator;
pub mod record;

pub mod anniversaries;
pub mod friend_groups;
pub mod friends;
pub mod gift_categories;
pub mod gifts;

mod repositories;

pub use blob::BlobClient;
pub use client::CollectionClient;
pub use config::RemoteConfig;
pub use coordinator::CompositeWriter;
pub use repositories::Repositories;

#[cfg(test)]
pub(crate) mod mock_server;
