pub mod favorites;
pub mod listing;
pub mod login;
pub mod property;
