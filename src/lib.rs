#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod selectors;
pub mod services;
pub mod tools;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
