pub mod completions;
pub mod score;
pub mod styles;
