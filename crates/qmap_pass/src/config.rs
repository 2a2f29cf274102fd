//! Pass configuration (§6's cost knobs, plus the inlining flags the
//! original exposed as `setInlineAll`/`setDontInline`), mirroring
//! `qns_core::config`'s serde-backed config structs and JSON round-trip
//! helpers.

use qmap_alloc::CostConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Driver configuration: the §6 cost knobs plus the inlining policy of
/// §4.7 step 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassConfig {
    /// Added to `TotalCost` per SWAP. Default 7.
    pub swap_cost: u32,
    /// Added per REV. Default 4.
    pub rev_cost: u32,
    /// Added per LCNOT. Default 10.
    pub lcx_cost: u32,
    /// If true, inline all gates except those named in `basis` before
    /// allocation (`setInlineAll`). If false, inlining is skipped
    /// entirely (`setDontInline`).
    pub inline: bool,
    /// Gate names kept intact when `inline` is set.
    pub basis: Vec<String>,
}

impl Default for PassConfig {
    fn default() -> Self {
        let costs = CostConfig::default();
        Self {
            swap_cost: costs.swap_cost,
            rev_cost: costs.rev_cost,
            lcx_cost: costs.lcx_cost,
            inline: true,
            basis: Vec::new(),
        }
    }
}

impl PassConfig {
    pub fn costs(&self) -> CostConfig {
        CostConfig {
            swap_cost: self.swap_cost,
            rev_cost: self.rev_cost,
            lcx_cost: self.lcx_cost,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(|e| {
            qmap_arch::ArchError::Malformed(format!("invalid pass config JSON: {e}"))
        })?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(|e| {
            qmap_arch::ArchError::Malformed(format!("could not serialize pass config: {e}"))
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_spec_cost_knobs() {
        let config = PassConfig::default();
        assert_eq!(config.swap_cost, 7);
        assert_eq!(config.rev_cost, 4);
        assert_eq!(config.lcx_cost, 10);
        assert!(config.inline);
    }

    #[test]
    fn json_round_trip() {
        let config = PassConfig {
            swap_cost: 1,
            rev_cost: 2,
            lcx_cost: 3,
            inline: false,
            basis: vec!["cx".to_string()],
        };
        let json = config.to_json().unwrap();
        let parsed = PassConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
