//! Integration test suite modules.

mod config_io;
mod fairness;
mod flip_sequence;
