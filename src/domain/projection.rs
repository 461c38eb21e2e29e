use anyhow::Result;
use log::{info, warn};
use serde_json::Value;

use crate::domain::models::{RankedEntry, RawRecord, ResultStat};
use crate::errors::ProjectionError;

/// What to do with a batch that contains records failing validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionPolicy {
    /// Log and drop each invalid record, keep the rest
    #[default]
    SkipMalformed,
    /// Fail the whole batch on the first invalid record
    RejectBatch,
}

/// Validate one raw person record and keep only name, single and average for `event_id`
pub fn project_record(value: Value, event_id: &str) -> Result<RankedEntry, ProjectionError> {
    let record: RawRecord =
        serde_json::from_value(value).map_err(|e| ProjectionError::Malformed(e.to_string()))?;
    let name = record.person.name;

    let Some(event) = record.personal_records.get(event_id) else {
        return Err(ProjectionError::MissingEvent {
            name,
            event_id: event_id.to_string(),
        });
    };

    let single = best_of(&event.single, &name, event_id, "single")?;
    let average = best_of(&event.average, &name, event_id, "average")?;

    Ok(RankedEntry {
        name,
        single,
        average,
    })
}

/// Project a whole response according to `policy`
pub fn project_all(
    values: Vec<Value>,
    event_id: &str,
    policy: ProjectionPolicy,
) -> Result<Vec<RankedEntry>> {
    let total = values.len();
    let mut entries = Vec::with_capacity(total);

    for (index, value) in values.into_iter().enumerate() {
        match project_record(value, event_id) {
            Ok(entry) => entries.push(entry),
            Err(e) => match policy {
                ProjectionPolicy::SkipMalformed => {
                    warn!("Skipping record {}: {}", index, e);
                }
                ProjectionPolicy::RejectBatch => {
                    anyhow::bail!("Rejected batch at record {}: {}", index, e);
                }
            },
        }
    }

    info!("Projected {} of {} records", entries.len(), total);
    Ok(entries)
}

fn best_of(
    stat: &Option<ResultStat>,
    name: &str,
    event_id: &str,
    statistic: &'static str,
) -> Result<i64, ProjectionError> {
    stat.as_ref()
        .map(|s| s.best)
        .ok_or_else(|| ProjectionError::MissingStatistic {
            name: name.to_string(),
            event_id: event_id.to_string(),
            statistic,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person(name: &str, single: i64, average: i64) -> Value {
        json!({
            "person": {"name": name, "wca_id": "2015TEST01"},
            "personal_records": {
                "555": {
                    "single": {"best": single, "world_rank": 10},
                    "average": {"best": average, "world_rank": 12}
                },
                "333": {"single": {"best": 600}}
            }
        })
    }

    #[test]
    fn test_project_valid_record() {
        let entry = project_record(person("Kevin Hays", 4512, 4980), "555").unwrap();
        assert_eq!(entry, RankedEntry::new("Kevin Hays", 4512, 4980));
    }

    #[test]
    fn test_missing_event_is_reported() {
        let err = project_record(person("Kevin Hays", 4512, 4980), "666").unwrap_err();
        assert_eq!(
            err,
            ProjectionError::MissingEvent {
                name: "Kevin Hays".to_string(),
                event_id: "666".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_average_is_reported() {
        let value = json!({
            "person": {"name": "Only Single"},
            "personal_records": {"555": {"single": {"best": 5000}}}
        });
        let err = project_record(value, "555").unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::MissingStatistic { statistic: "average", .. }
        ));
    }

    #[test]
    fn test_schema_mismatch_is_malformed() {
        let value = json!({"personal_records": {}});
        let err = project_record(value, "555").unwrap_err();
        assert!(matches!(err, ProjectionError::Malformed(_)));

        let value = json!({"person": {"name": 42}});
        assert!(matches!(
            project_record(value, "555"),
            Err(ProjectionError::Malformed(_))
        ));
    }

    #[test]
    fn test_skip_policy_keeps_valid_records() {
        let values = vec![
            person("First", 5000, 5500),
            json!({"person": {"name": "No Records"}}),
            person("Third", 4800, 5200),
        ];
        let entries = project_all(values, "555", ProjectionPolicy::SkipMalformed).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Third"]);
    }

    #[test]
    fn test_reject_policy_fails_whole_batch() {
        let values = vec![
            person("First", 5000, 5500),
            json!({"person": {"name": "No Records"}}),
        ];
        let result = project_all(values, "555", ProjectionPolicy::RejectBatch);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_response_projects_to_empty_list() {
        let entries = project_all(Vec::new(), "555", ProjectionPolicy::RejectBatch).unwrap();
        assert!(entries.is_empty());
    }
}
