pub mod activity;
pub mod admin;
pub mod auth;
pub mod charts;
pub mod config;
pub mod export;
pub mod logging;
pub mod modal;
pub mod page;
pub mod render;
pub mod runtime;
pub mod settings;
pub mod sim;
pub mod store;
