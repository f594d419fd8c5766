use crate::core::{FinanceExtractor, FinancialProperties};
use serde_json::Number;

/// 缺少 finance 或缺少個別欄位時一律視為 0
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFinanceExtractor;

impl FinanceExtractor for StandardFinanceExtractor {
    fn get_price(&self, finance: Option<&FinancialProperties>) -> Number {
        finance
            .and_then(|f| f.price.clone())
            .unwrap_or_else(|| Number::from(0))
    }

    fn get_revenue(&self, finance: Option<&FinancialProperties>) -> Number {
        finance
            .and_then(|f| f.revenue.clone())
            .unwrap_or_else(|| Number::from(0))
    }
}
