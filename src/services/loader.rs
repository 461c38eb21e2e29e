use anyhow::Result;
use log::{error, info};

use crate::api::RecordSource;
use crate::config::get_competitors;
use crate::config::settings::RankingSettings;
use crate::domain::{ProjectionPolicy, RankedEntry, RankingBoard, SortKey, project_all};

/// Runs the fetch -> project -> sort pipeline once
pub struct RankingLoader<S> {
    source: S,
    competitors: Vec<&'static str>,
    event_id: String,
    default_sort: SortKey,
    policy: ProjectionPolicy,
}

impl<S: RecordSource> RankingLoader<S> {
    pub fn new(source: S, settings: &RankingSettings) -> Self {
        Self {
            source,
            competitors: get_competitors(),
            event_id: settings.event_id.clone(),
            default_sort: settings.default_sort,
            policy: settings.policy,
        }
    }

    pub fn with_competitors(mut self, competitors: Vec<&'static str>) -> Self {
        self.competitors = competitors;
        self
    }

    /// Fetch and project the ranking; failures are logged and yield `None`
    pub async fn load(&self) -> Option<Vec<RankedEntry>> {
        match self.try_load().await {
            Ok(entries) => Some(entries),
            Err(e) => {
                error!("Failed to load ranking: {:?}", e);
                None
            }
        }
    }

    /// A board populated with the loaded ranking, or an empty one
    pub async fn load_board(&self) -> RankingBoard {
        let mut board = RankingBoard::new();
        if let Some(entries) = self.load().await {
            board.populate(entries, self.default_sort);
        }
        board
    }

    async fn try_load(&self) -> Result<Vec<RankedEntry>> {
        info!(
            "Loading event {} ranking for {} competitors",
            self.event_id,
            self.competitors.len()
        );
        let values = self.source.fetch_records(&self.competitors).await?;
        project_all(values, &self.event_id, self.policy)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::{Value, json};

    /// Record source answering with a canned response
    pub(crate) struct StubSource {
        response: Option<Vec<Value>>,
    }

    impl StubSource {
        pub(crate) fn ok(records: Vec<Value>) -> Self {
            Self {
                response: Some(records),
            }
        }

        pub(crate) fn failing() -> Self {
            Self { response: None }
        }
    }

    impl RecordSource for StubSource {
        async fn fetch_records(&self, _wca_ids: &[&str]) -> Result<Vec<Value>> {
            match &self.response {
                Some(records) => Ok(records.clone()),
                None => anyhow::bail!("connection refused"),
            }
        }
    }

    pub(crate) fn person(name: &str, single: i64, average: i64) -> Value {
        json!({
            "person": {"name": name},
            "personal_records": {
                "555": {"single": {"best": single}, "average": {"best": average}}
            }
        })
    }

    pub(crate) fn three_records() -> Vec<Value> {
        vec![
            person("record1", 4100, 4500),
            person("record2", 2900, 3200),
            person("record3", 3000, 5100),
        ]
    }

    fn names(board: &RankingBoard) -> Vec<&str> {
        board.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_load_board_sorts_by_average() {
        let loader = RankingLoader::new(StubSource::ok(three_records()), &RankingSettings::default());
        let board = loader.load_board().await;

        assert_eq!(names(&board), vec!["record2", "record1", "record3"]);
        assert_eq!(board.sort_key(), Some(SortKey::Average));
    }

    #[tokio::test]
    async fn test_single_sort_after_load() {
        let loader = RankingLoader::new(StubSource::ok(three_records()), &RankingSettings::default());
        let mut board = loader.load_board().await;

        board.apply_sort(SortKey::Single);
        assert_eq!(names(&board), vec!["record2", "record3", "record1"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_board_empty() {
        let loader = RankingLoader::new(StubSource::failing(), &RankingSettings::default());

        assert!(loader.load().await.is_none());
        assert_eq!(loader.load_board().await, RankingBoard::Empty);
    }

    #[tokio::test]
    async fn test_malformed_record_is_skipped_by_default() {
        let mut records = three_records();
        records.push(json!({"person": {"name": "No 5x5"}, "personal_records": {}}));
        let loader = RankingLoader::new(StubSource::ok(records), &RankingSettings::default());

        let board = loader.load_board().await;
        assert_eq!(board.entries().len(), 3);
    }

    #[tokio::test]
    async fn test_malformed_record_rejects_batch_when_strict() {
        let mut records = three_records();
        records.push(json!({"person": {"name": "No 5x5"}, "personal_records": {}}));
        let settings = RankingSettings {
            policy: ProjectionPolicy::RejectBatch,
            ..RankingSettings::default()
        };
        let loader = RankingLoader::new(StubSource::ok(records), &settings);

        assert_eq!(loader.load_board().await, RankingBoard::Empty);
    }

    #[tokio::test]
    async fn test_custom_competitor_list() {
        let loader = RankingLoader::new(StubSource::ok(Vec::new()), &RankingSettings::default())
            .with_competitors(vec!["2009YAUR01"]);

        assert_eq!(loader.competitors, vec!["2009YAUR01"]);
        assert_eq!(loader.load().await, Some(Vec::new()));
    }
}
