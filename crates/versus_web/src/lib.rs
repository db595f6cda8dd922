//! Browser-hosted WASM frontend for the voting client.
//!
//! This crate is a stub by default so the workspace builds on native targets
//! without a wasm toolchain. All state handling lives in the `versus` crate;
//! this one only renders it and carries frames over the WebSocket.
//!
//! Enable the real app with: `--features web` (and a wasm32 target).

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
