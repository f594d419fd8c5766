use crate::core::{Address, AddressExtractor};

pub const DEFAULT_MISSING_ADDRESS_VALUE: &str = "no data found";

#[derive(Debug, Clone)]
pub struct StandardAddressExtractor {
    missing_value: String,
}

impl StandardAddressExtractor {
    pub fn new(missing_value: impl Into<String>) -> Self {
        Self {
            missing_value: missing_value.into(),
        }
    }

    pub fn missing_value(&self) -> &str {
        &self.missing_value
    }

    fn field_or_default(&self, field: Option<&String>) -> String {
        field.cloned().unwrap_or_else(|| self.missing_value.clone())
    }
}

impl Default for StandardAddressExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MISSING_ADDRESS_VALUE)
    }
}

impl AddressExtractor for StandardAddressExtractor {
    fn get_city(&self, address: Option<&Address>) -> String {
        self.field_or_default(address.and_then(|a| a.city.as_ref()))
    }

    fn get_country(&self, address: Option<&Address>) -> String {
        self.field_or_default(address.and_then(|a| a.country.as_ref()))
    }

    fn get_street(&self, address: Option<&Address>) -> String {
        self.field_or_default(address.and_then(|a| a.street.as_ref()))
    }
}
