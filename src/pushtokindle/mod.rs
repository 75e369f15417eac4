mod config;
mod models;
mod sender;

pub use self::config::*;
pub use sender::*;
