//! Engine configuration

use crypt_core::decorations::DEFAULT_PREVIEW_BUDGET;
use crypt_core::listing::DEFAULT_TOOLTIP_BUDGET;

/// Tunables for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptConfig {
    /// Characters of the first code line shown in ghost text
    pub preview_budget: usize,

    /// Materialize into an untitled document when the original file is gone
    pub fallback_to_untitled: bool,

    /// Characters of code shown in sidebar tooltips
    pub tooltip_budget: usize,
}

impl Default for CryptConfig {
    fn default() -> Self {
        Self {
            preview_budget: DEFAULT_PREVIEW_BUDGET,
            fallback_to_untitled: true,
            tooltip_budget: DEFAULT_TOOLTIP_BUDGET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CryptConfig::default();
        assert_eq!(config.preview_budget, 30);
        assert!(config.fallback_to_untitled);
        assert_eq!(config.tooltip_budget, 100);
    }
}
