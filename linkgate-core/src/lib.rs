pub mod budget;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod records;
pub mod urls;

pub use budget::DomainBudget;
pub use config::LimitsConfig;
pub use error::RecordError;
pub use model::{FrontierEntry, LinkCandidate, LinkClass, PageContext};
pub use pipeline::LimitsPipeline;
