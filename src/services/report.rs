use anyhow::Result;
use colored::Colorize;

use crate::api::WcaClient;
use crate::config::settings::AppConfig;
use crate::domain::{RankingBoard, SortKey};
use crate::services::loader::RankingLoader;

/// Prints the ranking to the terminal
pub struct ReportService {
    config: AppConfig,
    sort: SortKey,
}

impl ReportService {
    pub fn new(config: AppConfig, sort: SortKey) -> Self {
        Self { config, sort }
    }

    pub async fn run(&self) -> Result<()> {
        let client = WcaClient::new(&self.config.api)?;
        let loader = RankingLoader::new(client, &self.config.ranking);

        let mut board = loader.load_board().await;
        board.apply_sort(self.sort);

        println!("{}", render_table(&board));
        Ok(())
    }
}

pub fn render_table(board: &RankingBoard) -> String {
    if !board.is_populated() {
        return "No ranking data available".yellow().to_string();
    }

    let rows = board.rows();
    let name_width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let header = format!(
        "{:>4}  {:<name_width$}  {:>9}  {:>9}",
        "Rank", "Name", "Single", "Average"
    );
    let mut lines = vec![header.bold().to_string()];

    for row in rows {
        lines.push(format!(
            "{:>4}  {:<name_width$}  {:>9}  {:>9}",
            row.rank, row.name, row.single_display, row.average_display
        ));
    }

    lines.join("\n")
}
