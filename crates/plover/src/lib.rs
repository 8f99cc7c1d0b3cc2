#![doc = include_str!("../README.md")]

mod config;
pub mod content;
pub mod source;
pub mod taxonomy;

pub use config::*;
