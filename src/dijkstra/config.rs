//! Solver configuration.

/// Default cost threshold at or above which an edge is unusable.
pub const FORBIDDEN_LEN: f64 = 1e11;

/// Configuration for [`DijkstraSolver`](super::DijkstraSolver).
///
/// # Examples
///
/// ```
/// use u_shortpath::dijkstra::{SolverConfig, FORBIDDEN_LEN};
///
/// let config = SolverConfig::default()
///     .with_forbidden_len(1e6)
///     .with_capacity_hint(1024);
/// assert!(config.validate().is_ok());
/// assert!(config.forbidden_len < FORBIDDEN_LEN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Edges whose cost is `>= forbidden_len` are skipped during
    /// relaxation, as if absent for that query.
    pub forbidden_len: f64,

    /// Number of nodes to reserve scratch storage for up front.
    ///
    /// Storage grows on demand either way; this only avoids the first
    /// reallocations.
    pub capacity_hint: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            forbidden_len: FORBIDDEN_LEN,
            capacity_hint: 0,
        }
    }
}

impl SolverConfig {
    pub fn with_forbidden_len(mut self, len: f64) -> Self {
        self.forbidden_len = len;
        self
    }

    pub fn with_capacity_hint(mut self, nodes: usize) -> Self {
        self.capacity_hint = nodes;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.forbidden_len.is_nan() {
            return Err("forbidden_len must not be NaN".into());
        }
        if self.forbidden_len <= 0.0 {
            return Err(format!(
                "forbidden_len must be positive, got {}",
                self.forbidden_len
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.forbidden_len, FORBIDDEN_LEN);
        assert_eq!(config.capacity_hint, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_infinite_threshold_is_valid() {
        let config = SolverConfig::default().with_forbidden_len(f64::INFINITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_threshold() {
        assert!(SolverConfig::default()
            .with_forbidden_len(0.0)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_forbidden_len(-3.0)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_forbidden_len(f64::NAN)
            .validate()
            .is_err());
    }
}
