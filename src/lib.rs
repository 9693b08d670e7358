pub mod config;
pub mod controls;
pub mod error;
pub mod feed;
pub mod filter;
pub mod inquiry;
pub mod view;
pub mod widget;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
