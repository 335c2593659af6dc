pub mod traits;
pub mod evolution;
pub mod report;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use report::ReportConfig;
pub use traits::{ConfigSection, ConfigManifest, FieldManifest};
