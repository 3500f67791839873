//! Procedural world generation for the Realmgen workspace.
//!
//! This crate turns a biome configuration (or the built-in basic mode)
//! into a fully populated [`WorldGrid`]: Perlin-noise elevation drives
//! terrain classification under per-category coverage budgets, landmarks
//! are embedded from configuration or mandatory fallbacks, merchants are
//! scattered across dry ground, and per-tile predicates hand out quests.
//!
//! Randomness is injected into every stage, so a seeded generator
//! reproduces the same world bit for bit.
//!
//! # Modules
//!
//! - [`elevation`] -- The elevation source trait with its Perlin-noise
//!   and constant implementations.
//! - [`error`] -- Generation failure types.
//! - [`landmark`] -- Configured and mandatory landmark placement.
//! - [`merchant`] -- Merchant scatter with sampling without replacement.
//! - [`pipeline`] -- The staged generation entry points.
//! - [`quest`] -- Priority-ordered quest assignment.
//! - [`terrain`] -- Elevation thresholds and the coverage-weighted
//!   category pool.
//!
//! [`WorldGrid`]: realmgen_types::WorldGrid

pub mod elevation;
pub mod error;
pub mod landmark;
pub mod merchant;
pub mod pipeline;
pub mod quest;
pub mod terrain;

// Re-export primary types at crate root.
pub use elevation::{DEFAULT_ELEVATION_SCALE, ElevationSource, FlatElevation, PerlinElevation};
pub use error::WorldGenError;
pub use landmark::{CAVE_LABEL, TREASURE_LABEL, VILLAGE_LABEL, place_configured, place_mandatory};
pub use merchant::{merchant_target, scatter_merchants};
pub use pipeline::{GenerationMode, GenerationParams, generate, generate_world};
pub use quest::{FOREST_QUEST_CHANCE, QuestOptions, assign_quests, is_near_water};
pub use terrain::{CategoryBudgets, MOUNTAIN_THRESHOLD, WATER_THRESHOLD, classify};
