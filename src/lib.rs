pub mod common;
pub mod pushtokindle;
pub mod store;
