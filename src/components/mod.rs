//! UI components.

pub mod particle_scene;
