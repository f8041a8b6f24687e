//! Public-portfolio view assembly.
//!
//! The one place the pieces meet: skill rows get their icons resolved,
//! work-history rows get period/duration labels, process-experience rows get
//! canonicalized. The editor and the public page both render straight from
//! the resulting view model.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::IconSources;
use crate::errors::CoreError;
use crate::history::{format_interval, interval_of, period_label};
use crate::icon::{resolve, IconRegistry, IconResolution};
use crate::models::{ProcessExperienceRow, SkillRow, WorkHistoryRow};
use crate::process::{canonicalize, CanonicalProcessEntry};

#[derive(Debug, Clone)]
pub struct SkillView {
    pub name: String,
    /// Live resolution state — the renderer reads `current()` and reports
    /// load failures back into it.
    pub icon: IconResolution,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct WorkHistoryView {
    pub company: String,
    pub position: String,
    pub period: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct PortfolioView {
    pub skills: Vec<SkillView>,
    pub history: Vec<WorkHistoryView>,
    /// Always exactly seven entries, in taxonomy order.
    pub process_experience: Vec<CanonicalProcessEntry>,
}

/// Assembles the portfolio view from typed rows. Infallible: every malformed
/// field has already been absorbed by the underlying resolvers.
pub fn build_portfolio_view(
    skills: &[SkillRow],
    history: &[WorkHistoryRow],
    process: &[ProcessExperienceRow],
    registry: &IconRegistry,
    sources: &IconSources,
    today: NaiveDate,
) -> PortfolioView {
    let skills = skills
        .iter()
        .map(|row| SkillView {
            name: row.name.clone(),
            icon: resolve(&row.icon, registry, sources),
        })
        .collect();

    let history = history
        .iter()
        .map(|row| {
            let interval = interval_of(row);
            WorkHistoryView {
                company: row.company.clone(),
                position: row.position.clone(),
                period: period_label(&interval),
                duration: format_interval(&interval, today),
                description: row.description.clone(),
            }
        })
        .collect();

    PortfolioView {
        skills,
        history,
        process_experience: canonicalize(process),
    }
}

/// Decodes a raw collaborator payload
/// (`{"skills": [...], "work_history": [...], "process_experience": [...]}`)
/// and assembles the view. Absent sections are treated as empty; a section
/// that fails to deserialize is the only error path in this crate.
pub fn portfolio_from_payload(
    payload: &Value,
    registry: &IconRegistry,
    sources: &IconSources,
    today: NaiveDate,
) -> Result<PortfolioView, CoreError> {
    let skills: Vec<SkillRow> = decode_section(payload, "skills")?;
    let history: Vec<WorkHistoryRow> = decode_section(payload, "work_history")?;
    let process: Vec<ProcessExperienceRow> = decode_section(payload, "process_experience")?;

    Ok(build_portfolio_view(
        &skills, &history, &process, registry, sources, today,
    ))
}

fn decode_section<T: DeserializeOwned>(payload: &Value, key: &str) -> Result<Vec<T>, CoreError> {
    match payload.get(key) {
        Some(section) => Ok(serde_json::from_value(section.clone())?),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::ResolvedIcon;
    use crate::process::ProcessType;
    use serde_json::json;

    fn sources() -> IconSources {
        IconSources {
            media_base_url: "https://api.example.com".to_string(),
            icon_cdn_base: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons".to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    #[test]
    fn test_build_view_resolves_each_section() {
        let skills = vec![SkillRow {
            id: 1,
            name: "React".to_string(),
            icon: "DiReact".to_string(),
        }];
        let history = vec![WorkHistoryRow {
            id: 1,
            company: "株式会社Example".to_string(),
            position: "エンジニア".to_string(),
            start_date: NaiveDate::from_ymd_opt(2021, 4, 1).unwrap(),
            end_date: None,
            description: "自社サービス開発".to_string(),
        }];
        let process = vec![ProcessExperienceRow {
            id: 5,
            process_type: "implementation".to_string(),
            experience_count: 4,
            description: "実装を担当".to_string(),
        }];

        let view = build_portfolio_view(
            &skills,
            &history,
            &process,
            &IconRegistry::builtin(),
            &sources(),
            today(),
        );

        assert!(matches!(
            view.skills[0].icon.current(),
            ResolvedIcon::Component { .. }
        ));
        assert_eq!(view.history[0].period, "2021/04 〜 現在");
        assert_eq!(view.history[0].duration, "3年");
        assert_eq!(view.process_experience.len(), 7);
        assert_eq!(
            view.process_experience[ProcessType::Implementation.order()].experience_count,
            4
        );
    }

    #[test]
    fn test_payload_decodes_and_assembles() {
        let payload = json!({
            "skills": [{"id": 1, "name": "Rust", "icon": "rust"}],
            "work_history": [],
            "process_experience": [
                {"id": 2, "process_type": "testing", "experience_count": 3, "description": "結合試験"}
            ]
        });
        let view = portfolio_from_payload(&payload, &IconRegistry::builtin(), &sources(), today())
            .expect("well-formed payload");
        assert_eq!(view.skills.len(), 1);
        assert!(view.history.is_empty());
        assert_eq!(
            view.process_experience[ProcessType::Testing.order()].record_id,
            Some(2)
        );
    }

    #[test]
    fn test_absent_sections_mean_empty_not_error() {
        let view = portfolio_from_payload(&json!({}), &IconRegistry::builtin(), &sources(), today())
            .expect("empty payload is fine");
        assert!(view.skills.is_empty());
        assert!(view.history.is_empty());
        // Canonicalization still produces the complete table.
        assert_eq!(view.process_experience.len(), 7);
    }

    #[test]
    fn test_malformed_section_is_payload_error() {
        let payload = json!({"skills": [{"id": "not-a-number"}]});
        let err = portfolio_from_payload(&payload, &IconRegistry::builtin(), &sources(), today())
            .unwrap_err();
        assert!(matches!(err, CoreError::Payload(_)));
    }
}
