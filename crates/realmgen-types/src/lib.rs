//! Shared type definitions for the Realmgen world generator.
//!
//! This crate is the single source of truth for the wire and value types
//! used across the Realmgen workspace: the biome configuration consumed by
//! the generator, the tile and grid types it produces, and the request
//! surface the session layer accepts.
//!
//! # Modules
//!
//! - [`biome`] -- Biome configuration (coverage map, landmark placements)
//! - [`grid`] -- The rectangular tile arena with its nested wire form
//! - [`position`] -- Wire coordinate pairs
//! - [`quest`] -- Quest value types and reward shapes
//! - [`request`] -- The generation request surface and its defaults
//! - [`terrain`] -- Terrain categories with open custom vocabulary
//! - [`tile`] -- The atomic grid cell

pub mod biome;
pub mod grid;
pub mod position;
pub mod quest;
pub mod request;
pub mod terrain;
pub mod tile;

// Re-export all public types at crate root for convenience.
pub use biome::{BiomeConfig, DEFAULT_MAP_EDGE, LandmarkEntries, LandmarkSpec, MapSize};
pub use grid::WorldGrid;
pub use position::Position;
pub use quest::{Quest, QuestKind, QuestRewards};
pub use request::{DEFAULT_MERCHANT_DENSITY, GenerationRequest};
pub use terrain::Terrain;
pub use tile::Tile;
