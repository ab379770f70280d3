pub mod errors;
pub mod prompt;
pub mod render;
