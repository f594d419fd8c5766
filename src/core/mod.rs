pub mod address;
pub mod finance;
pub mod transformer;
pub mod verify;

pub use crate::domain::model::{
    Address, Event, EventContext, FinancialProperties, Traits, TransformedRecord,
};
pub use crate::domain::ports::{AddressExtractor, FinanceExtractor};
pub use crate::utils::error::Result;
pub use address::StandardAddressExtractor;
pub use finance::StandardFinanceExtractor;
