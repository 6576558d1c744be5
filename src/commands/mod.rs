pub mod config;
pub mod echo;
pub mod meta;
