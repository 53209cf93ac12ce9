//! KinshipPolicy v1: search bounds, seniority fallback, cache sizing.
//!
//! `params_hash` covers only the parameters that can change a
//! classification result; cache sizing is excluded so that two services
//! with different cache capacities still report the same policy hash.

use serde::{Deserialize, Serialize};
use crate::canonical::canonical_hash_hex;
use crate::DEFAULT_POLICY_VERSION;

/// How seniority is decided when birth dates cannot settle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityFallback {
    /// Lower person id is treated as older.
    ///
    /// This conflates record-creation order with birth order and can
    /// misclassify seniority.
    IdentifierOrder,
    /// Leave seniority unknown and render seniority-neutral terms.
    Unresolved,
}

impl SeniorityFallback {
    /// Parse from a string (`identifier_order` / `id` / `unresolved` / `none`).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "identifier_order" | "identifier" | "id" => Some(Self::IdentifierOrder),
            "unresolved" | "none" => Some(Self::Unresolved),
            _ => None,
        }
    }
}

impl Default for SeniorityFallback {
    fn default() -> Self {
        Self::IdentifierOrder
    }
}

impl std::fmt::Display for SeniorityFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierOrder => write!(f, "identifier_order"),
            Self::Unresolved => write!(f, "unresolved"),
        }
    }
}

/// Parameters that affect classification, for deterministic hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PolicyParams {
    version: String,
    max_path_length: usize,
    max_recursion_depth: usize,
    seniority_fallback: SeniorityFallback,
}

/// Kinship policy version 1.
///
/// ## Parameters
///
/// - `max_path_length`: Hop limit for path search
/// - `max_recursion_depth`: Limit on nested sub-queries (spouse stripping,
///   second-cousin composition)
/// - `seniority_fallback`: Rule used when birth dates are missing or equal
/// - `snapshot_cache_capacity`: Snapshots kept by the service layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinshipPolicy {
    /// Policy version identifier.
    pub version: String,
    /// Maximum number of hops in a connecting path.
    pub max_path_length: usize,
    /// Maximum nesting of engine sub-queries.
    pub max_recursion_depth: usize,
    /// Seniority rule when birth dates do not decide.
    pub seniority_fallback: SeniorityFallback,
    /// Number of family snapshots the service caches.
    pub snapshot_cache_capacity: usize,
}

impl KinshipPolicy {
    /// Create a new policy with custom parameters.
    pub fn new(
        max_path_length: usize,
        max_recursion_depth: usize,
        seniority_fallback: SeniorityFallback,
        snapshot_cache_capacity: usize,
    ) -> Self {
        Self {
            version: DEFAULT_POLICY_VERSION.to_string(),
            max_path_length: max_path_length.max(1),
            max_recursion_depth,
            seniority_fallback,
            snapshot_cache_capacity: snapshot_cache_capacity.max(1),
        }
    }

    /// Load the policy from environment variables, with defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self::new(
            std::env::var("KINSHIP_MAX_PATH_LENGTH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_path_length),
            std::env::var("KINSHIP_MAX_RECURSION_DEPTH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_recursion_depth),
            std::env::var("KINSHIP_SENIORITY_FALLBACK")
                .ok()
                .and_then(|s| SeniorityFallback::from_str(&s))
                .unwrap_or(defaults.seniority_fallback),
            std::env::var("KINSHIP_SNAPSHOT_CACHE_CAPACITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.snapshot_cache_capacity),
        )
    }

    /// Get the policy ID.
    pub fn policy_id(&self) -> &str {
        &self.version
    }

    /// Same policy with a different seniority fallback.
    pub fn with_seniority_fallback(mut self, fallback: SeniorityFallback) -> Self {
        self.seniority_fallback = fallback;
        self
    }

    /// Compute a hash of the classification parameters.
    pub fn params_hash(&self) -> Result<String, serde_json::Error> {
        canonical_hash_hex(&self.to_params())
    }

    fn to_params(&self) -> PolicyParams {
        PolicyParams {
            version: self.version.clone(),
            max_path_length: self.max_path_length,
            max_recursion_depth: self.max_recursion_depth,
            seniority_fallback: self.seniority_fallback,
        }
    }
}

impl Default for KinshipPolicy {
    fn default() -> Self {
        Self {
            version: DEFAULT_POLICY_VERSION.to_string(),
            max_path_length: 16,
            max_recursion_depth: 8,
            seniority_fallback: SeniorityFallback::IdentifierOrder,
            snapshot_cache_capacity: 64,
        }
    }
}
