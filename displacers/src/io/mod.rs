//! Collaborators around the engine: heightmap loading and trajectory export.

pub mod export;
pub mod heightmap;
