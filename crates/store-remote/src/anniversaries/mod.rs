//! Anniversary collection backed by the remote store.

mod model;
mod repository;

pub use repository::AnniversaryRepository;
