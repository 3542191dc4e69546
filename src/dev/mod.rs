// src/dev/mod.rs
// Test and fuzzing support. Not used by the acceptance path itself.
pub mod generator;
pub mod oracle;
