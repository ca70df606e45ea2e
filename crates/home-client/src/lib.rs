#![allow(non_snake_case)]

pub mod auth;
pub mod client;
pub mod error;
pub mod favorites;
pub mod properties;

pub use client::ApiClient;
pub use error::ClientError;
pub use favorites::{toggle, toggle_membership, FavoriteEndpoint};
