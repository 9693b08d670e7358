#[cfg(not(target_arch = "wasm32"))]
pub mod client;
pub mod loader;
pub mod models;
pub mod normalizer;

#[cfg(test)]
mod tests;

#[cfg(not(target_arch = "wasm32"))]
pub use client::FeedClient;
pub use loader::*;
pub use models::*;
pub use normalizer::*;
