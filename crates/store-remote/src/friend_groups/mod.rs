//! Friend-group collection backed by the remote store.

mod model;
mod repository;

pub use repository::FriendGroupRepository;
