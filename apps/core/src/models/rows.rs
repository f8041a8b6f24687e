//! Typed rows mirroring the collaborator REST payloads.
//!
//! The collaborator does no pre-validation, so everything here is kept raw:
//! `process_type` stays a plain string (the canonicalizer validates it against
//! the closed taxonomy), icon identifiers stay arbitrary strings (the resolver
//! classifies them at resolution time).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRow {
    pub id: i64,
    pub name: String,
    /// Raw icon identifier — absolute URL, percent-encoded URL, `/media/...`
    /// path, or symbolic key. No shape guarantee.
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkHistoryRow {
    pub id: i64,
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    /// `None` for a current position.
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessExperienceRow {
    pub id: i64,
    /// Raw process-type key, e.g. `"basic_design"`. Not guaranteed to be one
    /// of the seven canonical types, nor unique across rows.
    pub process_type: String,
    /// May be negative in malformed payloads; clamped on canonicalization.
    pub experience_count: i64,
    #[serde(default)]
    pub description: String,
}
