mod address;
mod error;
mod models;

pub use address::*;
pub use error::*;
pub use models::*;
