#![allow(non_snake_case)]

pub mod middleware;
pub mod session;

pub use middleware::gate::{require_session, AppState};
pub use session::CookieSettings;
