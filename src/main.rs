//! # Voxel World Entry Point
//!
//! Runs the headless driver: generates a world, orbits a camera around it and logs
//! meshing and draw statistics.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- settings.json
//! ```

fn main() {
    voxel_world::run();
}
