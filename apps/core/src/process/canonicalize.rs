//! Canonicalizes sparse process-experience records into the complete,
//! taxonomy-ordered seven-row table every view renders.
//!
//! The collaborator guarantees nothing: rows may be missing, duplicated, or
//! carry unknown process types. All of that is absorbed here — the output is
//! always seven entries, in taxonomy order, with non-negative counts.

use std::collections::HashMap;

use tracing::debug;

use crate::models::ProcessExperienceRow;
use crate::process::taxonomy::ProcessType;

/// Placeholder description for stages with no backing record.
pub const DEFAULT_DESCRIPTION: &str = "経験なし";

/// One row of the canonical table. Constructed fresh on every call; the
/// caller owns the vector.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CanonicalProcessEntry {
    pub process_type: ProcessType,
    pub display_label: &'static str,
    pub experience_count: u32,
    pub description: String,
    /// Backend id of the record this entry came from; `None` when the entry
    /// is a synthesized default.
    pub record_id: Option<i64>,
}

impl CanonicalProcessEntry {
    fn default_for(process_type: ProcessType) -> Self {
        CanonicalProcessEntry {
            process_type,
            display_label: process_type.label(),
            experience_count: 0,
            description: DEFAULT_DESCRIPTION.to_string(),
            record_id: None,
        }
    }
}

/// Builds the canonical table from raw rows.
///
/// - Unknown process types are discarded (not an error).
/// - Duplicate types: last occurrence wins, no accumulation.
/// - Stages without a row get the synthesized default entry.
pub fn canonicalize(records: &[ProcessExperienceRow]) -> Vec<CanonicalProcessEntry> {
    let mut latest: HashMap<ProcessType, &ProcessExperienceRow> = HashMap::new();
    for record in records {
        match ProcessType::from_key(&record.process_type) {
            Some(process_type) => {
                latest.insert(process_type, record);
            }
            None => {
                debug!(
                    process_type = %record.process_type,
                    id = record.id,
                    "discarding process-experience record with unknown type"
                );
            }
        }
    }

    ProcessType::ALL
        .into_iter()
        .map(|process_type| match latest.get(&process_type) {
            Some(record) => CanonicalProcessEntry {
                process_type,
                display_label: process_type.label(),
                experience_count: record.experience_count.clamp(0, u32::MAX as i64) as u32,
                description: record.description.clone(),
                record_id: Some(record.id),
            },
            None => CanonicalProcessEntry::default_for(process_type),
        })
        .collect()
}
