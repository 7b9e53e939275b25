mod client;
mod prompt;
mod types;

pub use client::RecommendationClient;
pub use types::{Recommendation, RecommendationRequest};
