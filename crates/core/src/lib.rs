pub mod score;
pub mod types;

pub use score::{formatted_score, score};
pub use types::*;
