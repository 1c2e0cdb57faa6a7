//! Command implementations for carportctl

pub mod replay;
pub mod variants;

pub use replay::ReplayArgs;
