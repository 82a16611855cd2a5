pub mod auth;
pub mod core;
pub mod handlers;
pub mod models;
pub mod stores;
