// ABOUTME: Library root for the jobboard crate
// ABOUTME: Job board state, intake form, REST client and text rendering

pub mod board;
pub mod config;
pub mod error;
pub mod intake;
pub mod remote;
pub mod render;

pub use error::BoardError;
