//! Classification reports
//!
//! Bundles one classification run into an exportable record: JSON for
//! machine consumers and a plain-text report for filing. Terminal
//! rendering with colors lives in the CLI; this module stays color-free.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::engine::ClassificationResult;
use crate::error::Result;
use crate::profile::SystemProfile;

const BANNER: &str =
    "================================================================================";

/// The system under assessment, as entered by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub name: String,
    pub company: String,
    pub description: String,
}

/// One complete classification record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub timestamp: String,
    pub system: SystemInfo,
    pub profile: SystemProfile,
    pub classification: ClassificationResult,
}

impl ClassificationReport {
    pub fn new(profile: &SystemProfile, result: &ClassificationResult) -> Self {
        Self::with_timestamp(profile, result, Local::now())
    }

    pub fn with_timestamp(
        profile: &SystemProfile,
        result: &ClassificationResult,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            timestamp: timestamp.to_rfc3339(),
            system: SystemInfo {
                name: profile.name.clone(),
                company: profile.company.clone(),
                description: profile.description.clone(),
            },
            profile: profile.clone(),
            classification: result.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the plain-text report.
    pub fn render_text(&self) -> String {
        let mut out = Vec::new();

        out.push("EU AI ACT CLASSIFICATION REPORT".to_string());
        out.push(BANNER.to_string());
        out.push(String::new());
        out.push(format!("System: {}", self.system.name));
        out.push(format!("Company: {}", self.system.company));
        out.push(format!("Date: {}", self.timestamp));
        out.push(String::new());
        out.push(format!(
            "CLASSIFICATION: {}",
            self.classification.risk_level.as_str()
        ));
        out.push(format!("Confidence: {}", self.classification.confidence));
        out.push(String::new());

        out.push("REASONING:".to_string());
        for (i, reason) in self.classification.reasoning.iter().enumerate() {
            out.push(format!("{}. {}", i + 1, reason));
        }
        out.push(String::new());

        out.push("RELEVANT PROVISIONS:".to_string());
        for article in &self.classification.relevant_articles {
            out.push(format!("- {}", article));
        }
        out.push(String::new());

        out.push("RECOMMENDATIONS:".to_string());
        for (i, rec) in self.classification.recommendations.iter().enumerate() {
            out.push(format!("{}. {}", i + 1, rec));
        }
        out.push(String::new());

        if !self.profile.search_sources.is_empty() {
            out.push(format!(
                "SOURCES: {} web sources consulted",
                self.profile.search_sources.len()
            ));
            out.push(String::new());
        }

        out.push(BANNER.to_string());
        out.push(
            "This is a preliminary assessment. Consult legal professionals for compliance."
                .to_string(),
        );

        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::classify;
    use crate::profile::ProfileBuilder;

    fn sample_report() -> ClassificationReport {
        let profile = ProfileBuilder::new(
            "Nimbus",
            "Acme",
            "A chatbot that answers customer questions",
        )
        .build();
        let result = classify(&profile);
        ClassificationReport::new(&profile, &result)
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        let parsed: ClassificationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_json_uses_display_strings_for_levels() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"Additional Transparency Requirements\""));
        assert!(json.contains("\"timestamp\""));
        assert!(json.contains("\"system\""));
        assert!(json.contains("\"profile\""));
        assert!(json.contains("\"classification\""));
    }

    #[test]
    fn test_text_report_structure() {
        let report = sample_report();
        let text = report.render_text();
        assert!(text.starts_with("EU AI ACT CLASSIFICATION REPORT"));
        assert!(text.contains("System: Nimbus"));
        assert!(text.contains("Company: Acme"));
        assert!(text.contains("CLASSIFICATION: Additional Transparency Requirements"));
        assert!(text.contains("Confidence: Low"));
        assert!(text.contains("1. TRANSPARENCY: Interactive AI system (Article 50.1)"));
        assert!(text.contains("- Article 50 - Transparency"));
        assert!(text.contains("1. Disclose AI interaction to users"));
        assert!(text.contains("preliminary assessment"));
        // No search ran, so no source count line.
        assert!(!text.contains("SOURCES:"));
    }

    #[test]
    fn test_text_report_mentions_sources_when_present() {
        let profile = ProfileBuilder::new("Nimbus", "Acme", "A planning tool")
            .with_context("- Vendor: context")
            .with_sources(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string(),
            ])
            .build();
        let result = classify(&profile);
        let text = ClassificationReport::new(&profile, &result).render_text();
        assert!(text.contains("SOURCES: 2 web sources consulted"));
    }
}
