pub mod meta;
pub mod validate;
