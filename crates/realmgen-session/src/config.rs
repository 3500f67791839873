//! Biome configuration resolution with an explicit built-in fallback.
//!
//! The external authoring service supplies biome configuration as JSON;
//! this module only consumes it. A missing or unusable payload is
//! recovered locally by substituting the built-in default configuration,
//! never surfaced to the caller as an error. The provenance of the
//! resolved configuration is reported alongside it, so the fallback stays
//! observable and testable instead of being inferred from swallowed parse
//! errors.

use std::collections::BTreeMap;

use realmgen_types::{
    BiomeConfig, DEFAULT_MAP_EDGE, LandmarkEntries, LandmarkSpec, MapSize, Position,
};
use tracing::warn;

/// Where a resolved biome configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigProvenance {
    /// The supplied JSON parsed and validated cleanly.
    Supplied,
    /// No configuration was supplied; the built-in default was used.
    FallbackMissing,
    /// The supplied JSON failed to parse or validate; the built-in
    /// default was used.
    FallbackInvalid,
}

/// A biome configuration together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// The configuration the pipeline will run with.
    pub config: BiomeConfig,
    /// Where the configuration came from.
    pub provenance: ConfigProvenance,
}

/// Resolve raw configuration JSON into a usable biome configuration.
///
/// A missing payload quietly takes the built-in default; a payload that
/// fails to parse or validate takes it too, after logging the reason.
/// Callers always get a configuration to run with.
pub fn resolve_config(raw: Option<&str>) -> ResolvedConfig {
    let Some(raw) = raw else {
        return ResolvedConfig {
            config: default_config(),
            provenance: ConfigProvenance::FallbackMissing,
        };
    };

    match serde_json::from_str::<BiomeConfig>(raw) {
        Ok(config) => match validate(&config) {
            Ok(()) => ResolvedConfig {
                config,
                provenance: ConfigProvenance::Supplied,
            },
            Err(reason) => {
                warn!(%reason, "Rejecting supplied biome configuration");
                ResolvedConfig {
                    config: default_config(),
                    provenance: ConfigProvenance::FallbackInvalid,
                }
            }
        },
        Err(error) => {
            warn!(%error, "Failed to parse biome configuration");
            ResolvedConfig {
                config: default_config(),
                provenance: ConfigProvenance::FallbackInvalid,
            }
        }
    }
}

/// The built-in configuration used when none is supplied or the supplied
/// one is unusable.
///
/// A fixed four-way coverage split over the default 50x50 map, with two
/// structures, two crash sites, and one hidden core at fixed tiles. All
/// landmark entries rely on their kind's default label.
#[must_use]
pub fn default_config() -> BiomeConfig {
    let mut terrain = BTreeMap::new();
    terrain.insert("grass".to_owned(), 40.0);
    terrain.insert("forest".to_owned(), 30.0);
    terrain.insert("desert".to_owned(), 20.0);
    terrain.insert("swamp".to_owned(), 10.0);

    let mut landmarks = BTreeMap::new();
    landmarks.insert(
        "structures".to_owned(),
        LandmarkEntries::Many(vec![unlabeled(10, 10), unlabeled(40, 40)]),
    );
    landmarks.insert(
        "crashSites".to_owned(),
        LandmarkEntries::Many(vec![unlabeled(15, 35), unlabeled(35, 15)]),
    );
    landmarks.insert(
        "hiddenCore".to_owned(),
        LandmarkEntries::One(unlabeled(25, 25)),
    );

    BiomeConfig {
        map_size: MapSize {
            width: DEFAULT_MAP_EDGE,
            height: DEFAULT_MAP_EDGE,
        },
        terrain,
        landmarks,
    }
}

/// Coverage must be finite and non-negative; anything else rejects the
/// whole configuration in favor of the default.
fn validate(config: &BiomeConfig) -> Result<(), String> {
    for (name, &percent) in &config.terrain {
        if !percent.is_finite() || percent < 0.0 {
            return Err(format!("coverage for \"{name}\" is {percent}"));
        }
    }
    Ok(())
}

const fn unlabeled(x: i64, y: i64) -> LandmarkSpec {
    LandmarkSpec {
        position: Position::new(x, y),
        kind: None,
    }
}
