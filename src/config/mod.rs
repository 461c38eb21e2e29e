pub mod competitors;
pub mod settings;

pub use competitors::get_competitors;
pub use settings::AppConfig;
