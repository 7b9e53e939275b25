pub mod config;
pub mod error;
pub mod llm;
pub mod profile;
pub mod recommend;

pub use error::{Error, Result};
