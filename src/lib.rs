// src/lib.rs
pub mod cli;
pub mod dev;
pub mod npda;
