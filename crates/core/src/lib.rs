//! Domain models, repository contracts, and the error taxonomy for giftbook.
//!
//! This crate is free of transport concerns: it defines what a friend, gift,
//! group, category, or anniversary looks like and which operations a backing
//! store must offer. The remote implementation lives in
//! `giftbook-store-remote`.

pub mod anniversaries;
pub mod errors;
pub mod friend_groups;
pub mod friends;
pub mod gift_categories;
pub mod gifts;
pub mod scope;

pub use errors::{Error, Result};
pub use scope::{AssignedKey, UserScope};
