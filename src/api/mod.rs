pub mod handlers;
pub mod models;
pub mod page;
pub mod routes;
pub mod wca_client;

pub use wca_client::{RecordSource, WcaClient};
