//! Builtin Taxonomy Tables
//!
//! Every table is an ordered `&'static` slice. Order is part of the
//! contract: sector ties resolve to the earlier entry, and the first-hit
//! tables stop at the earliest matching label.

/// One taxonomy entry: a label and the keywords that select it.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy {
    /// Label assigned to the profile when the entry matches
    pub label: &'static str,
    /// Substring keywords, matched against the lowercase corpus
    pub keywords: &'static [&'static str],
}

/// Sector fallback when no keyword hits
pub const DEFAULT_SECTOR: &str = "General";

/// Decision-making role fallback
pub const DEFAULT_DECISION_ROLE: &str = "Informational";

/// Deployment context fallback
pub const DEFAULT_DEPLOYMENT_CONTEXT: &str = "General commercial use";

/// User base fallback
pub const DEFAULT_USER_BASE: &str = "General public";

/// Sector taxonomy. Matched with the argmax discipline: the label with the
/// most distinct keyword hits wins, ties go to the earlier entry.
pub const SECTORS: &[Taxonomy] = &[
    Taxonomy {
        label: "Automotive",
        keywords: &["car", "vehicle", "driver", "automotive", "driving", "autonomous"],
    },
    Taxonomy {
        label: "Healthcare",
        keywords: &[
            "health",
            "medical",
            "patient",
            "clinical",
            "diagnosis",
            "treatment",
            "hospital",
        ],
    },
    Taxonomy {
        label: "Financial",
        keywords: &["bank", "finance", "credit", "loan", "mortgage", "payment", "insurance"],
    },
    Taxonomy {
        label: "Education",
        keywords: &["education", "student", "learning", "school", "university", "academic"],
    },
    Taxonomy {
        label: "Law Enforcement",
        keywords: &["police", "law enforcement", "crime", "investigation", "surveillance"],
    },
    Taxonomy {
        label: "Employment",
        keywords: &["recruitment", "hiring", "employment", "hr", "candidate", "job"],
    },
    Taxonomy {
        label: "Critical Infrastructure",
        keywords: &["infrastructure", "energy", "water", "electricity", "utility"],
    },
    Taxonomy {
        label: "Border Control",
        keywords: &["border", "migration", "asylum", "immigration", "customs"],
    },
    Taxonomy {
        label: "Justice",
        keywords: &["court", "justice", "legal", "judicial", "litigation"],
    },
];

/// Biometric modality indicators. First hit establishes biometric
/// involvement; the matched modality itself is not recorded on the profile.
pub const BIOMETRIC_INDICATORS: &[Taxonomy] = &[
    Taxonomy {
        label: "facial recognition",
        keywords: &[
            "facial recognition",
            "face recognition",
            "face detection",
            "facial identification",
        ],
    },
    Taxonomy {
        label: "fingerprint",
        keywords: &["fingerprint", "fingerprint scan", "fingerprint recognition"],
    },
    Taxonomy {
        label: "emotion recognition",
        keywords: &[
            "emotion recognition",
            "emotion detection",
            "emotional state",
            "sentiment analysis",
        ],
    },
    Taxonomy {
        label: "voice biometric",
        keywords: &["voice recognition", "speaker identification", "voice biometric"],
    },
    Taxonomy {
        label: "iris scan",
        keywords: &["iris scan", "iris recognition", "retinal scan"],
    },
    Taxonomy {
        label: "gait recognition",
        keywords: &["gait", "walking pattern"],
    },
    Taxonomy {
        label: "behavioral biometric",
        keywords: &["keystroke", "mouse movement", "behavioral biometric"],
    },
];

/// Biometric purpose priority list. Scanned over the whole corpus once
/// involvement is established, independent of which modality matched.
pub const BIOMETRIC_PURPOSES: &[Taxonomy] = &[
    Taxonomy {
        label: "identification",
        keywords: &["identification", "identify"],
    },
    Taxonomy {
        label: "emotion recognition",
        keywords: &["emotion", "sentiment"],
    },
    Taxonomy {
        label: "categorisation",
        keywords: &["categorization", "categorisation"],
    },
    Taxonomy {
        label: "authentication",
        keywords: &["verification", "authenticate"],
    },
];

/// Decision-making role, first hit wins.
pub const DECISION_ROLES: &[Taxonomy] = &[
    Taxonomy {
        label: "Decision-making",
        keywords: &[
            "decide", "decision", "approve", "reject", "determine", "evaluate", "assess",
            "score", "rate",
        ],
    },
    Taxonomy {
        label: "Assistive/Recommendatory",
        keywords: &["recommend", "suggest", "assist", "advise", "guide", "help"],
    },
    Taxonomy {
        label: "Fully Automated Decision",
        keywords: &["automated decision", "automatic decision", "without human intervention"],
    },
    Taxonomy {
        label: "Informational",
        keywords: &["inform", "display", "show", "present", "visualize"],
    },
];

/// Annex III high-risk contexts. Accumulating: every matching label joins
/// the profile set in this order.
pub const RISK_CONTEXTS: &[Taxonomy] = &[
    Taxonomy {
        label: "Safety-critical environment",
        keywords: &["safety", "critical", "emergency", "life-threatening"],
    },
    Taxonomy {
        label: "Vehicle operation",
        keywords: &["vehicle", "car", "driver", "driving", "autonomous vehicle", "self-driving"],
    },
    Taxonomy {
        label: "Medical decision",
        keywords: &[
            "diagnosis",
            "treatment",
            "medical decision",
            "clinical decision",
            "patient care",
        ],
    },
    Taxonomy {
        label: "Financial decision",
        keywords: &["credit", "loan", "financial decision", "creditworthiness", "credit score"],
    },
    Taxonomy {
        label: "Law enforcement",
        keywords: &[
            "law enforcement",
            "police",
            "crime",
            "investigation",
            "predictive policing",
        ],
    },
    Taxonomy {
        label: "Employment decision",
        keywords: &[
            "recruitment",
            "hiring",
            "employment decision",
            "candidate selection",
            "performance evaluation",
        ],
    },
    Taxonomy {
        label: "Educational assessment",
        keywords: &[
            "exam",
            "grade",
            "admission",
            "educational assessment",
            "student evaluation",
        ],
    },
    Taxonomy {
        label: "Border control",
        keywords: &["border", "migration", "asylum", "visa", "immigration"],
    },
    Taxonomy {
        label: "Justice administration",
        keywords: &["court", "judge", "judicial", "legal proceeding", "evidence"],
    },
    Taxonomy {
        label: "Essential services access",
        keywords: &["public benefit", "social service", "essential service", "welfare"],
    },
    Taxonomy {
        label: "Critical infrastructure",
        keywords: &[
            "power grid",
            "water supply",
            "transportation system",
            "energy infrastructure",
        ],
    },
];

/// Data types processed. Accumulating.
pub const DATA_INDICATORS: &[Taxonomy] = &[
    Taxonomy {
        label: "Personal data",
        keywords: &["personal", "user data", "individual data"],
    },
    Taxonomy {
        label: "Location data",
        keywords: &["location", "navigation", "gps", "geolocation"],
    },
    Taxonomy {
        label: "Biometric data",
        keywords: &["biometric", "facial", "fingerprint", "iris", "voice print"],
    },
    Taxonomy {
        label: "Voice/Audio data",
        keywords: &["voice", "speech", "audio", "conversation", "recording"],
    },
    Taxonomy {
        label: "Video/Image data",
        keywords: &["video", "camera", "image", "photograph", "visual"],
    },
    Taxonomy {
        label: "Financial data",
        keywords: &["financial", "transaction", "payment", "banking", "credit card"],
    },
    Taxonomy {
        label: "Health data",
        keywords: &["health", "medical", "clinical", "patient record", "diagnosis"],
    },
    Taxonomy {
        label: "Behavioral data",
        keywords: &["behavior", "behaviour", "pattern", "habit", "activity"],
    },
    Taxonomy {
        label: "Sensitive attributes",
        keywords: &[
            "race",
            "ethnicity",
            "religion",
            "political",
            "sexual orientation",
            "health status",
        ],
    },
];

/// Deployment context, first hit wins.
pub const DEPLOYMENT_CONTEXTS: &[Taxonomy] = &[
    Taxonomy {
        label: "In-vehicle system",
        keywords: &["vehicle", "car", "automotive", "in-car"],
    },
    Taxonomy {
        label: "Healthcare facility",
        keywords: &["hospital", "clinic", "medical facility", "healthcare"],
    },
    Taxonomy {
        label: "Workplace",
        keywords: &["workplace", "office", "work environment", "employee"],
    },
    Taxonomy {
        label: "Public space",
        keywords: &["public", "street", "outdoor", "public area"],
    },
    Taxonomy {
        label: "Educational institution",
        keywords: &["school", "university", "classroom", "campus"],
    },
    Taxonomy {
        label: "Border crossing",
        keywords: &["border", "airport", "customs", "immigration"],
    },
    Taxonomy {
        label: "Law enforcement",
        keywords: &["police station", "law enforcement", "investigation"],
    },
    Taxonomy {
        label: "Court/Legal",
        keywords: &["court", "courthouse", "legal proceeding"],
    },
    Taxonomy {
        label: "Online service",
        keywords: &["online", "web", "app", "digital", "cloud"],
    },
    Taxonomy {
        label: "Critical infrastructure",
        keywords: &["power plant", "water treatment", "infrastructure"],
    },
];

/// User base, first hit wins.
pub const USER_BASES: &[Taxonomy] = &[
    Taxonomy {
        label: "Vehicle drivers and passengers",
        keywords: &["driver", "passenger", "vehicle occupant"],
    },
    Taxonomy {
        label: "Patients and healthcare providers",
        keywords: &["patient", "doctor", "nurse", "clinician", "healthcare provider"],
    },
    Taxonomy {
        label: "General consumers",
        keywords: &["customer", "consumer", "user", "client"],
    },
    Taxonomy {
        label: "Employees and workers",
        keywords: &["employee", "worker", "staff", "personnel"],
    },
    Taxonomy {
        label: "Students and educators",
        keywords: &["student", "teacher", "educator", "learner"],
    },
    Taxonomy {
        label: "Law enforcement officers",
        keywords: &["police", "officer", "law enforcement"],
    },
    Taxonomy {
        label: "Border control agents",
        keywords: &["border agent", "customs officer", "immigration officer"],
    },
    Taxonomy {
        label: "Judges and legal professionals",
        keywords: &["judge", "lawyer", "attorney", "legal professional"],
    },
    Taxonomy {
        label: "General public",
        keywords: &["public", "citizen", "resident", "population"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unique_labels(table: &[Taxonomy]) {
        for (i, entry) in table.iter().enumerate() {
            assert!(
                !table[..i].iter().any(|e| e.label == entry.label),
                "duplicate label: {}",
                entry.label
            );
        }
    }

    #[test]
    fn test_tables_are_populated() {
        for table in [
            SECTORS,
            BIOMETRIC_INDICATORS,
            BIOMETRIC_PURPOSES,
            DECISION_ROLES,
            RISK_CONTEXTS,
            DATA_INDICATORS,
            DEPLOYMENT_CONTEXTS,
            USER_BASES,
        ] {
            assert!(!table.is_empty());
            for entry in table {
                assert!(!entry.keywords.is_empty(), "empty keywords for {}", entry.label);
            }
            assert_unique_labels(table);
        }
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(RISK_CONTEXTS.len(), 11);
        assert_eq!(DATA_INDICATORS.len(), 9);
        assert_eq!(BIOMETRIC_PURPOSES.len(), 4);
    }

    #[test]
    fn test_declaration_order() {
        // Order drives tie-breaks and first-hit winners; pin the anchors.
        assert_eq!(SECTORS[0].label, "Automotive");
        assert_eq!(SECTORS[SECTORS.len() - 1].label, "Justice");
        assert_eq!(RISK_CONTEXTS[0].label, "Safety-critical environment");
        assert_eq!(RISK_CONTEXTS[1].label, "Vehicle operation");
        assert_eq!(BIOMETRIC_PURPOSES[0].label, "identification");
        assert_eq!(DECISION_ROLES[0].label, "Decision-making");
    }
}
