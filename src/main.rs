//! # Voxel World Entry Point
//!
//! Builds the configured world headlessly and logs timings.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

fn main() {
    voxel_world::run();
}
