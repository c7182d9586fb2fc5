pub mod catalog;
pub mod errors;
pub mod tool;
