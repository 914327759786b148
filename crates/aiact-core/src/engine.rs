//! Risk classification engine
//!
//! Stage 2: evaluates a fixed, ordered rule chain over a [`SystemProfile`]
//! and its raw description. Stages are tested in order - scope exceptions,
//! prohibited practices, high-risk systems, transparency obligations - and
//! the first stage that fires decides the risk level; anything that falls
//! through is low-risk.
//!
//! [`classify`] is a pure function: every call builds its own accumulator
//! and returns a fresh [`ClassificationResult`], so repeated calls with the
//! same profile are byte-identical and concurrent callers share nothing.

use serde::{Deserialize, Serialize};

use crate::profile::SystemProfile;
use crate::taxonomy::contains_any;

/// Risk category under the EU AI Act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Prohibited")]
    Prohibited,
    #[serde(rename = "High-Risk")]
    HighRisk,
    #[serde(rename = "Low-Risk")]
    LowRisk,
    #[serde(rename = "Additional Transparency Requirements")]
    TransparencyRequirements,
    /// Reserved for general-purpose AI obligations; no rule produces it yet.
    #[serde(rename = "GPAI Requirements")]
    GpaiRequirements,
    #[serde(rename = "Exception")]
    Exception,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prohibited => "Prohibited",
            Self::HighRisk => "High-Risk",
            Self::LowRisk => "Low-Risk",
            Self::TransparencyRequirements => "Additional Transparency Requirements",
            Self::GpaiRequirements => "GPAI Requirements",
            Self::Exception => "Exception",
        }
    }

    /// Provisions cited for this level. Static lookup, independent of how
    /// the level was reached.
    pub fn articles(&self) -> &'static [&'static str] {
        match self {
            Self::Prohibited => &["Article 5 - Prohibited Practices"],
            Self::HighRisk => &["Article 6 & Annex III", "Articles 8-15 - Requirements"],
            Self::TransparencyRequirements => &["Article 50 - Transparency"],
            Self::LowRisk => &["Article 69 - Codes of Conduct (voluntary)"],
            Self::Exception => &["Article 2 - Scope exceptions"],
            Self::GpaiRequirements => &[],
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence label derived from how many reasons accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one classification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub risk_level: RiskLevel,
    pub reasoning: Vec<String>,
    pub relevant_articles: Vec<String>,
    pub decision_path: Vec<String>,
    pub confidence: Confidence,
    pub recommendations: Vec<String>,
}

/// General obligations appended for every high-risk finding.
const HIGH_RISK_OBLIGATIONS: &[&str] = &[
    "Implement risk management system (Article 9)",
    "Ensure high-quality training data (Article 10)",
    "Maintain technical documentation (Article 11)",
    "Enable logging and traceability (Article 12)",
    "Implement human oversight (Article 14)",
    "Ensure accuracy and robustness (Article 15)",
    "Undergo conformity assessment (Article 43)",
    "Register in EU database (Article 71)",
];

/// Per-call accumulator. Constructed fresh inside [`classify`] so no state
/// survives between calls.
#[derive(Default)]
struct Evaluation {
    reasoning: Vec<String>,
    decision_path: Vec<String>,
    recommendations: Vec<String>,
}

impl Evaluation {
    fn reason(&mut self, text: &str) {
        self.reasoning.push(text.to_string());
    }

    fn stage(&mut self, label: &str) {
        self.decision_path.push(label.to_string());
    }

    fn high_risk_recommendations(&mut self, category: &str) {
        self.recommendations
            .extend(HIGH_RISK_OBLIGATIONS.iter().map(|s| s.to_string()));

        let specific: &[&str] = match category {
            "safety" => &["Conduct vehicle safety testing", "Implement fail-safe mechanisms"],
            "biometric" => &["Strict biometric data access controls", "GDPR compliance"],
            "employment" => &["Human-in-the-loop for decisions", "Bias testing"],
            "border_control" => &["Data protection for sensitive data", "Appeal mechanisms"],
            _ => &[],
        };
        self.recommendations.extend(specific.iter().map(|s| s.to_string()));
    }

    fn into_result(self, risk_level: RiskLevel) -> ClassificationResult {
        // Confidence counts the accumulated reasons; the placeholder below
        // must not inflate it.
        let confidence = if self.reasoning.len() >= 3 {
            Confidence::High
        } else if self.reasoning.len() >= 2 {
            Confidence::Medium
        } else {
            Confidence::Low
        };

        let reasoning = if self.reasoning.is_empty() {
            vec!["No specific risks identified".to_string()]
        } else {
            self.reasoning
        };

        let recommendations = if self.recommendations.is_empty() {
            vec!["Monitor regulatory developments".to_string()]
        } else {
            self.recommendations
        };

        ClassificationResult {
            risk_level,
            reasoning,
            relevant_articles: risk_level.articles().iter().map(|s| s.to_string()).collect(),
            decision_path: self.decision_path,
            confidence,
            recommendations,
        }
    }
}

/// Classify a profile against the EU AI Act rule chain.
pub fn classify(profile: &SystemProfile) -> ClassificationResult {
    let mut eval = Evaluation::default();
    let description = profile.description.to_lowercase();

    let risk_level = if check_exceptions(&description, &mut eval) {
        RiskLevel::Exception
    } else if check_prohibited(profile, &description, &mut eval) {
        RiskLevel::Prohibited
    } else if check_high_risk(profile, &mut eval) {
        RiskLevel::HighRisk
    } else if check_transparency(&description, &mut eval) {
        RiskLevel::TransparencyRequirements
    } else {
        RiskLevel::LowRisk
    };

    eval.into_result(risk_level)
}

/// Article 2 scope exceptions.
fn check_exceptions(description: &str, eval: &mut Evaluation) -> bool {
    eval.stage("Article 2: Scope exceptions");

    if description.contains("research") && description.contains("scientific") {
        eval.reason("May qualify for scientific research exception (Article 2.6)");
        return true;
    }

    if contains_any(description, &["military", "defence", "defense"]) {
        eval.reason("Military/defence exception applies (Article 2.3)");
        return true;
    }

    false
}

/// Article 5 prohibited practices, first match wins.
fn check_prohibited(profile: &SystemProfile, description: &str, eval: &mut Evaluation) -> bool {
    eval.stage("Article 5: Prohibited AI practices");

    if contains_any(description, &["manipulate", "subliminal", "exploit vulnerabilities"]) {
        eval.reason("PROHIBITED: Subliminal manipulation (Article 5.1a)");
        return true;
    }

    if description.contains("social scor") {
        eval.reason("PROHIBITED: Social scoring system (Article 5.1c)");
        return true;
    }

    if profile.biometrics_involved
        && profile.biometrics_purpose.as_deref() == Some("identification")
        && contains_any(description, &["real-time", "live"])
        && profile.deployment_context.to_lowercase().contains("public")
    {
        eval.reason("PROHIBITED: Real-time remote biometric identification (Article 5.1h)");
        return true;
    }

    // "Workplace" is a deployment-context label and never appears in
    // high_risk_context, so only the education arm of this set can fire.
    if profile.biometrics_purpose.as_deref() == Some("emotion recognition")
        && ["Workplace", "Educational assessment"]
            .iter()
            .any(|ctx| profile.high_risk_context.iter().any(|c| c == ctx))
    {
        eval.reason("PROHIBITED: Emotion recognition in workplace/education (Article 5.1f)");
        return true;
    }

    false
}

/// Article 6 / Annex III high-risk categories, fixed priority order. The
/// first matching category records its reasoning and recommendations and
/// stops the scan: one call never reports two categories.
fn check_high_risk(profile: &SystemProfile, eval: &mut Evaluation) -> bool {
    eval.stage("Article 6 & Annex III: High-risk systems");

    let has_context = |label: &str| profile.high_risk_context.iter().any(|c| c == label);

    if profile.biometrics_involved
        && matches!(
            profile.biometrics_purpose.as_deref(),
            Some("identification") | Some("categorisation")
        )
    {
        eval.reason("HIGH-RISK: Biometric identification system (Annex III.1)");
        eval.high_risk_recommendations("biometric");
        return true;
    }

    if has_context("Critical infrastructure") {
        eval.reason("HIGH-RISK: Critical infrastructure system (Annex III.2)");
        eval.high_risk_recommendations("infrastructure");
        return true;
    }

    if has_context("Safety-critical environment") || has_context("Vehicle operation") {
        eval.reason("HIGH-RISK: Safety component in vehicle operation (Annex III.2)");
        eval.reason("System operates in safety-critical context");
        eval.high_risk_recommendations("safety");
        return true;
    }

    if has_context("Educational assessment") {
        eval.reason("HIGH-RISK: Educational assessment system (Annex III.3)");
        eval.high_risk_recommendations("education");
        return true;
    }

    if has_context("Employment decision") {
        eval.reason("HIGH-RISK: Employment decision system (Annex III.4)");
        eval.high_risk_recommendations("employment");
        return true;
    }

    if has_context("Essential services access") || has_context("Financial decision") {
        eval.reason("HIGH-RISK: Essential services/creditworthiness (Annex III.5)");
        eval.high_risk_recommendations("essential_services");
        return true;
    }

    if has_context("Law enforcement") {
        eval.reason("HIGH-RISK: Law enforcement application (Annex III.6)");
        eval.high_risk_recommendations("law_enforcement");
        return true;
    }

    if has_context("Border control") {
        eval.reason("HIGH-RISK: Border control system (Annex III.7)");
        eval.high_risk_recommendations("border_control");
        return true;
    }

    if has_context("Justice administration") {
        eval.reason("HIGH-RISK: Administration of justice (Annex III.8)");
        eval.high_risk_recommendations("justice");
        return true;
    }

    false
}

/// Article 50 transparency obligations.
fn check_transparency(description: &str, eval: &mut Evaluation) -> bool {
    eval.stage("Article 50: Transparency requirements");

    if contains_any(description, &["chat", "conversational", "assistant", "interact"]) {
        eval.reason("TRANSPARENCY: Interactive AI system (Article 50.1)");
        eval.recommendations.push("Disclose AI interaction to users".to_string());
        return true;
    }

    if description.contains("generat") {
        eval.reason("TRANSPARENCY: Generative AI system (Article 50.2)");
        eval.recommendations.push("Label AI-generated content".to_string());
        return true;
    }

    false
}
