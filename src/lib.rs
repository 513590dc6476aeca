pub mod app;
pub mod command;
pub mod config;
pub mod terminal;
pub mod timer;

pub use app::{run, App, Flow};
pub use config::Config;
