//! The generation request surface.
//!
//! Documented for completeness: routing, transport, and field validation
//! middleware live outside this workspace. The session layer consumes this
//! shape directly.

use serde::{Deserialize, Serialize};

use crate::biome::DEFAULT_MAP_EDGE;

/// Default fraction of tiles to seed with merchants.
pub const DEFAULT_MERCHANT_DENSITY: f64 = 0.05;

/// Parameters accepted by the world-generation surface.
///
/// All fields are optional on the wire; missing ones take the documented
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    /// Player identifier. Must be non-empty; the session layer rejects
    /// requests without one.
    pub player: String,
    /// Session the generated world belongs to.
    pub session_id: i64,
    /// Requested grid width (columns), used in basic mode.
    pub width: usize,
    /// Requested grid height (rows), used in basic mode.
    pub height: usize,
    /// Merchant scatter density as a fraction of total tiles.
    pub landmark_percentage: f64,
    /// When set, generation follows a supplied biome configuration instead
    /// of the basic mandatory-landmark layout.
    pub imaginary_world: bool,
    /// Free-text theme forwarded to the external configuration author;
    /// never interpreted here.
    pub prompt: Option<String>,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            player: String::new(),
            session_id: 0,
            width: DEFAULT_MAP_EDGE,
            height: DEFAULT_MAP_EDGE,
            landmark_percentage: DEFAULT_MERCHANT_DENSITY,
            imaginary_world: false,
            prompt: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn minimal_request_takes_defaults() {
        let request: GenerationRequest =
            serde_json::from_value(serde_json::json!({"player": "aria", "sessionId": 7}))
                .unwrap();
        assert_eq!(request.player, "aria");
        assert_eq!(request.session_id, 7);
        assert_eq!(request.width, 50);
        assert_eq!(request.height, 50);
        assert_eq!(request.landmark_percentage, DEFAULT_MERCHANT_DENSITY);
        assert!(!request.imaginary_world);
        assert_eq!(request.prompt, None);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let request: GenerationRequest = serde_json::from_value(serde_json::json!({
            "player": "aria",
            "sessionId": 7,
            "width": 20,
            "height": 10,
            "landmarkPercentage": 0.1,
            "imaginaryWorld": true,
            "prompt": "a drowned coastline",
        }))
        .unwrap();
        assert_eq!(request.width, 20);
        assert_eq!(request.height, 10);
        assert_eq!(request.landmark_percentage, 0.1);
        assert!(request.imaginary_world);
        assert_eq!(request.prompt.as_deref(), Some("a drowned coastline"));
    }
}
