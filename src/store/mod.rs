mod config;
mod models;
mod prompt;
mod store;

pub use self::config::*;
pub use prompt::*;
pub use store::*;
