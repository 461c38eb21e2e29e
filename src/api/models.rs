use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{RankingBoard, RankingRow, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardState {
    Empty,
    Populated,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingItem {
    pub rank: usize,
    pub name: String,
    pub single: i64,
    pub average: i64,
    pub single_display: String,
    pub average_display: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub state: BoardState,
    pub sort_key: Option<SortKey>,
    pub fetched_at: Option<DateTime<Utc>>,
    pub items: Vec<RankingItem>,
}

impl From<RankingRow> for RankingItem {
    fn from(row: RankingRow) -> Self {
        Self {
            rank: row.rank,
            name: row.name,
            single: row.single,
            average: row.average,
            single_display: row.single_display,
            average_display: row.average_display,
        }
    }
}

impl From<&RankingBoard> for RankingResponse {
    fn from(board: &RankingBoard) -> Self {
        let state = if board.is_populated() {
            BoardState::Populated
        } else {
            BoardState::Empty
        };

        Self {
            state,
            sort_key: board.sort_key(),
            fetched_at: board.fetched_at(),
            items: board.rows().into_iter().map(RankingItem::from).collect(),
        }
    }
}
