//! Server-rendered ranking page.

use askama::Template;

use crate::domain::{RankingBoard, RankingRow, SortKey};

pub const FAVICON_SVG: &str = include_str!("../../static/favicon.svg");

/// The ranking table with one sort button per [`SortKey`].
/// Names are HTML-escaped by the template.
#[derive(Template, Debug)]
#[template(path = "ranking.html")]
pub struct RankingPage {
    pub title: &'static str,
    pub sort_keys: [SortKey; 2],
    pub rows: Vec<RankingRow>,
}

impl RankingPage {
    pub fn new(board: &RankingBoard) -> Self {
        Self {
            title: "5x5 Yau Ranking",
            sort_keys: [SortKey::Single, SortKey::Average],
            rows: board.rows(),
        }
    }
}

pub fn render_page(board: &RankingBoard) -> askama::Result<String> {
    RankingPage::new(board).render()
}
