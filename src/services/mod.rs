pub mod csv_export;
pub mod places_client;
pub mod search_engine;
pub mod website_auditor;

pub use csv_export::*;
pub use places_client::*;
pub use search_engine::*;
pub use website_auditor::*;
