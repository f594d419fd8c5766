pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TransformConfig;

pub use crate::core::transformer::{EventTransformer, StandardEventTransformer};
pub use crate::core::verify::{detailed_diff, verify_outputs, DetailedDiff, VerificationReport};
pub use crate::core::{StandardAddressExtractor, StandardFinanceExtractor};
pub use domain::model::{Address, Event, FinancialProperties, TransformedRecord};
pub use domain::ports::{AddressExtractor, FinanceExtractor};
pub use utils::error::{Result, TransformError};
