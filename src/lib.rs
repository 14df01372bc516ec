// src/lib.rs
pub mod app;
pub mod banner;
pub mod client;
pub mod config;
pub mod errors;
pub mod flows;
pub mod models;
pub mod ui;
