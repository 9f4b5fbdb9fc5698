pub mod args;
pub mod client;
pub mod models;
pub mod parsing;
