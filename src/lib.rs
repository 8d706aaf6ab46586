pub mod app;
pub mod config;
pub mod file_io;
pub mod logging;
pub mod state;

mod action;
mod action_handler;
mod input;
mod ui;
