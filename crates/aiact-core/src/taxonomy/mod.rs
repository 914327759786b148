//! # Taxonomy Module
//!
//! Fixed keyword taxonomies used to derive a structured system profile from
//! free text, and the matching disciplines that scan a corpus against them.
//!
//! A taxonomy is an ordered list of `(label, keyword-set)` pairs declared
//! once at compile time. Declaration order is load-bearing: it decides
//! tie-breaks and first-hit winners, so the tables must never be reordered.
//!
//! ## Module layout
//!
//! - `builtin`: the taxonomy tables (sectors, biometrics, decision roles,
//!   risk contexts, data types, deployment contexts, user bases)
//! - `matcher`: the three matching disciplines over a lowercase corpus

mod builtin;
mod matcher;

pub use builtin::{
    Taxonomy, BIOMETRIC_INDICATORS, BIOMETRIC_PURPOSES, DATA_INDICATORS, DECISION_ROLES,
    DEFAULT_DECISION_ROLE, DEFAULT_DEPLOYMENT_CONTEXT, DEFAULT_SECTOR, DEFAULT_USER_BASE,
    DEPLOYMENT_CONTEXTS, RISK_CONTEXTS, SECTORS, USER_BASES,
};
pub use matcher::{all_matches, best_match, contains_any, first_match};
