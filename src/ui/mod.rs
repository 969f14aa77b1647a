// src/ui/mod.rs
pub mod form;
pub mod results;
pub mod status;
