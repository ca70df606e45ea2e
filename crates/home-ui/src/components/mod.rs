pub mod favorite;
pub mod nav;
pub mod property_card;
pub mod toast;
