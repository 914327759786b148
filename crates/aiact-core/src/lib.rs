pub mod config;
pub mod engine;
pub mod error;
pub mod harvest;
pub mod profile;
pub mod purpose;
pub mod report;
pub mod search;
pub mod taxonomy;

pub use config::{Config, SearchConfig};
pub use engine::{classify, ClassificationResult, Confidence, RiskLevel};
pub use error::{AiActError, Result};
pub use harvest::{Harvester, DEFAULT_MAX_RESULTS};
pub use profile::{ProfileBuilder, SystemProfile};
pub use purpose::extract_purpose;
pub use report::{ClassificationReport, SystemInfo};
pub use search::{check_curl_available, DuckDuckGo, NullSearch, SearchHit, SearchProvider};
pub use taxonomy::{
    all_matches, best_match, contains_any, first_match, Taxonomy, BIOMETRIC_INDICATORS,
    BIOMETRIC_PURPOSES, DATA_INDICATORS, DECISION_ROLES, DEPLOYMENT_CONTEXTS, RISK_CONTEXTS,
    SECTORS, USER_BASES,
};
