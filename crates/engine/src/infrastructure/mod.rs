//! Infrastructure - storage ports and their file-backed implementations.

pub mod persistence;
pub mod ports;
