pub mod auth;
pub mod logger;
pub mod models;
pub mod reset;
pub mod ui;
