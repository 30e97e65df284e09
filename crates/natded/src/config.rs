//! Engine configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Which spelling of each lexeme the renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// First ASCII spelling (`~`, `&`, `>`)
    #[default]
    Ascii,
    /// First non-ASCII spelling (`¬`, `∧`, `⊃`), falling back to the first spelling
    Unicode,
}

/// Configuration shared by the calculus, the proof engine and the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on a rule's premise count; bounds the pairing search
    pub max_rule_premises: usize,
    /// Maximum sub-proof nesting depth (0 means no limit)
    pub max_nesting_depth: usize,
    pub render_style: RenderStyle,
    /// Record equivalence rewrites substituted back into the premise
    /// instead of the standalone rewritten sub-formula
    pub contextual_equivalence: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_rule_premises: 8,
            max_nesting_depth: 0, // 0 means no limit
            render_style: RenderStyle::Ascii,
            contextual_equivalence: false,
        }
    }
}

impl EngineConfig {
    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        if config.max_rule_premises == 0 {
            return Err(Error::Config("max_rule_premises must be at least 1".into()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_rule_premises, 8);
        assert_eq!(config.max_nesting_depth, 0);
        assert_eq!(config.render_style, RenderStyle::Ascii);
    }

    #[test]
    fn test_partial_json() {
        let config =
            EngineConfig::from_json(r#"{"max_nesting_depth": 2, "render_style": "unicode"}"#)
                .unwrap();
        assert_eq!(config.max_nesting_depth, 2);
        assert_eq!(config.render_style, RenderStyle::Unicode);
        assert_eq!(config.max_rule_premises, 8);
    }

    #[test]
    fn test_rejects_zero_premise_bound() {
        assert!(EngineConfig::from_json(r#"{"max_rule_premises": 0}"#).is_err());
        assert!(EngineConfig::from_json("not json").is_err());
    }
}
