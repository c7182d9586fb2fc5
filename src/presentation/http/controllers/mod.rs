// src/presentation/http/controllers/mod.rs
pub mod records;
pub mod tools;
