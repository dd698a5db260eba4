//! Settings models shared by the front ends.

pub mod config;
