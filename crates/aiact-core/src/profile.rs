//! System profile
//!
//! Stage 1 output: a structured view of one AI system, derived from its
//! description plus any supplementary search context. Built once per
//! classification request and immutable afterwards.

use serde::{Deserialize, Serialize};

use crate::purpose::extract_purpose;
use crate::taxonomy::{
    all_matches, best_match, first_match, BIOMETRIC_INDICATORS, BIOMETRIC_PURPOSES,
    DATA_INDICATORS, DECISION_ROLES, DEFAULT_DECISION_ROLE, DEFAULT_DEPLOYMENT_CONTEXT,
    DEFAULT_SECTOR, DEFAULT_USER_BASE, DEPLOYMENT_CONTEXTS, RISK_CONTEXTS, SECTORS, USER_BASES,
};

/// Structured profile of an AI system.
///
/// Scalar categorical fields always carry a value; the documented defaults
/// stand in when nothing matched. The two set-valued fields hold
/// taxonomy-defined labels in declaration order, without duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemProfile {
    pub name: String,
    pub company: String,
    pub description: String,
    pub sector: String,
    pub primary_purpose: String,
    pub user_base: String,
    pub biometrics_involved: bool,
    pub biometrics_purpose: Option<String>,
    pub decision_making_role: String,
    pub high_risk_context: Vec<String>,
    pub data_processed: Vec<String>,
    pub deployment_context: String,
    pub additional_info: Option<String>,
    pub search_sources: Vec<String>,
}

/// Builds a [`SystemProfile`] from a description and optional pre-fetched
/// search context. Performs no retrieval itself and has no failure path:
/// missing optional data degrades to defaults.
pub struct ProfileBuilder<'a> {
    name: &'a str,
    company: &'a str,
    description: &'a str,
    additional_info: Option<String>,
    search_sources: Vec<String>,
}

impl<'a> ProfileBuilder<'a> {
    pub fn new(name: &'a str, company: &'a str, description: &'a str) -> Self {
        Self {
            name,
            company,
            description,
            additional_info: None,
            search_sources: Vec::new(),
        }
    }

    /// Attach supplementary text gathered by the search collaborator.
    /// Empty text is treated as absent.
    pub fn with_context(mut self, context: &str) -> Self {
        if !context.is_empty() {
            self.additional_info = Some(context.to_string());
        }
        self
    }

    /// Attach the ordered, deduplicated source URLs behind the context.
    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.search_sources = sources;
        self
    }

    pub fn build(self) -> SystemProfile {
        let corpus = match &self.additional_info {
            Some(info) => format!(
                "{}\n\nAdditional Context from Web Search:\n{}",
                self.description, info
            ),
            None => self.description.to_string(),
        };
        let lower = corpus.to_lowercase();

        let biometrics_involved = first_match(&lower, BIOMETRIC_INDICATORS).is_some();
        // The purpose scan runs over the whole corpus, not the span that
        // established involvement.
        let biometrics_purpose = if biometrics_involved {
            first_match(&lower, BIOMETRIC_PURPOSES).map(String::from)
        } else {
            None
        };

        SystemProfile {
            name: self.name.to_string(),
            company: self.company.to_string(),
            description: self.description.to_string(),
            sector: best_match(&lower, SECTORS, DEFAULT_SECTOR).to_string(),
            primary_purpose: extract_purpose(&corpus, self.name),
            user_base: first_match(&lower, USER_BASES)
                .unwrap_or(DEFAULT_USER_BASE)
                .to_string(),
            biometrics_involved,
            biometrics_purpose,
            decision_making_role: first_match(&lower, DECISION_ROLES)
                .unwrap_or(DEFAULT_DECISION_ROLE)
                .to_string(),
            high_risk_context: all_matches(&lower, RISK_CONTEXTS)
                .into_iter()
                .map(String::from)
                .collect(),
            data_processed: all_matches(&lower, DATA_INDICATORS)
                .into_iter()
                .map(String::from)
                .collect(),
            deployment_context: first_match(&lower, DEPLOYMENT_CONTEXTS)
                .unwrap_or(DEFAULT_DEPLOYMENT_CONTEXT)
                .to_string(),
            additional_info: self.additional_info,
            search_sources: self.search_sources,
        }
    }
}
