pub mod loader;
pub mod report;
pub mod server;

pub use loader::RankingLoader;
pub use report::ReportService;
pub use server::ServerService;
