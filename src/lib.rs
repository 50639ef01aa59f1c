pub mod cli;
pub mod config;
pub mod editor;
pub mod filesystem;
pub mod manager;
pub mod store;
pub mod transfer;
pub mod tui;
