//! Subcommand modules for the `bioalg` binary.

pub mod blosum;
pub mod nw;
pub mod nw3;
pub mod utils;
