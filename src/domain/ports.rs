use crate::domain::model::{Address, FinancialProperties};
use serde_json::Number;

pub trait FinanceExtractor: Send + Sync {
    fn get_price(&self, finance: Option<&FinancialProperties>) -> Number;
    fn get_revenue(&self, finance: Option<&FinancialProperties>) -> Number;

    /// 兩邊先轉成 f64 再相減
    fn get_profit(&self, finance: Option<&FinancialProperties>) -> f64 {
        let price = self.get_price(finance).as_f64().unwrap_or(0.0);
        let revenue = self.get_revenue(finance).as_f64().unwrap_or(0.0);
        price - revenue
    }
}

pub trait AddressExtractor: Send + Sync {
    fn get_city(&self, address: Option<&Address>) -> String;
    fn get_country(&self, address: Option<&Address>) -> String;
    fn get_street(&self, address: Option<&Address>) -> String;
}
