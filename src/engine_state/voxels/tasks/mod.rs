//! # Voxel Task System
//!
//! Staged tasks that populate the voxel world a little at a time so no single
//! frame pays for generating the whole world.

pub mod chunk_generation_task;
