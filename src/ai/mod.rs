//! Text generation integration.

pub mod client;

pub use client::{BedrockGenerator, ResultSelection, TextGenerator, select_result};
