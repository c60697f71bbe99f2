//! Gift collection backed by the remote store and object storage.

mod model;
mod repository;

pub use repository::GiftRepository;
