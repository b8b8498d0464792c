//! Engine settings
//!
//! A small JSON-serializable knob set. The core never touches the file
//! system: hosts read the text however they like and hand it to
//! [`EngineSettings::from_json`] (strict) or
//! [`EngineSettings::from_json_or_default`] (falls back to defaults and logs
//! a warning).
//!
//! ```json
//! { "verify_rollback": true, "max_perft_depth": 6, "default_promotion": "Queen" }
//! ```
//!
//! Missing fields take their default value.

use crate::error::{ChessRulesError, ChessRulesResult};
use crate::types::PromotionPiece;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Deepest perft the engine accepts unless configured otherwise
pub const DEFAULT_MAX_PERFT_DEPTH: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Compare the board against its entry snapshot after every perft undo
    pub verify_rollback: bool,
    /// Perft calls deeper than this fail with `DepthLimitExceeded`
    pub max_perft_depth: u32,
    /// Piece chosen when a promotion is requested by squares alone
    pub default_promotion: PromotionPiece,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            verify_rollback: true,
            max_perft_depth: DEFAULT_MAX_PERFT_DEPTH,
            default_promotion: PromotionPiece::Queen,
        }
    }
}

impl EngineSettings {
    pub fn from_json(json: &str) -> ChessRulesResult<Self> {
        serde_json::from_str(json).map_err(|e| ChessRulesError::Settings {
            message: e.to_string(),
        })
    }

    /// Parse `json`, falling back to defaults when it is not valid
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                debug!("[SETTINGS] Loaded engine settings: {:?}", settings);
                settings
            }
            Err(e) => {
                warn!("[SETTINGS] {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> ChessRulesResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChessRulesError::Settings {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert!(settings.verify_rollback);
        assert_eq!(settings.max_perft_depth, 6);
        assert_eq!(settings.default_promotion, PromotionPiece::Queen);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = EngineSettings::from_json(r#"{ "max_perft_depth": 3 }"#)
            .expect("Partial settings should parse");
        assert_eq!(settings.max_perft_depth, 3);
        assert!(settings.verify_rollback, "Unset fields keep their default");
    }

    #[test]
    fn test_json_round_trip() {
        let settings = EngineSettings {
            verify_rollback: false,
            max_perft_depth: 2,
            default_promotion: PromotionPiece::Knight,
        };
        let json = settings.to_json().expect("Settings serialize");
        assert_eq!(EngineSettings::from_json(&json), Ok(settings));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            EngineSettings::from_json("{ not json"),
            Err(ChessRulesError::Settings { .. })
        ));
        assert_eq!(
            EngineSettings::from_json_or_default(r#"{ "default_promotion": "King" }"#),
            EngineSettings::default(),
            "Unknown promotion piece falls back to defaults"
        );
    }
}
