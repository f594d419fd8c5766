use crate::config::TransformConfig;
use crate::core::{
    AddressExtractor, Event, FinanceExtractor, Result, StandardAddressExtractor,
    StandardFinanceExtractor, TransformedRecord,
};
use crate::utils::error::TransformError;

pub type StandardEventTransformer = EventTransformer<StandardFinanceExtractor, StandardAddressExtractor>;

/// 將單筆事件攤平成六個欄位的轉換器。extractor 由外部注入，方便單獨測試。
pub struct EventTransformer<F: FinanceExtractor, A: AddressExtractor> {
    finance: F,
    address: A,
}

impl<F: FinanceExtractor, A: AddressExtractor> EventTransformer<F, A> {
    pub fn new(finance: F, address: A) -> Self {
        Self { finance, address }
    }

    /// `metadata` 不參與轉換，只為了符合外部事件處理流程的呼叫介面
    pub fn transform_event(&self, event: &Event, _metadata: &serde_json::Value) -> TransformedRecord {
        let properties = event.properties.as_ref();
        let address = event.resolved_address();

        let record = TransformedRecord {
            revenue: self.finance.get_revenue(properties),
            price: self.finance.get_price(properties),
            profit: self.finance.get_profit(properties),
            city: self.address.get_city(Some(&address)),
            country: self.address.get_country(Some(&address)),
            street: self.address.get_street(Some(&address)),
        };

        tracing::debug!(
            "Transformed event: price={} revenue={} profit={} city={}",
            record.price,
            record.revenue,
            record.profit,
            record.city
        );

        record
    }

    /// 解析原始 JSON 後再轉換
    pub fn transform_value(
        &self,
        event: &serde_json::Value,
        metadata: &serde_json::Value,
    ) -> Result<TransformedRecord> {
        let event = Event::from_value(event)?;
        Ok(self.transform_event(&event, metadata))
    }

    /// 依序轉換多筆事件，任何一筆型別不符就中止並標示其位置
    pub fn transform_batch(
        &self,
        events: &[serde_json::Value],
        metadata: &serde_json::Value,
    ) -> Result<Vec<TransformedRecord>> {
        let mut records = Vec::with_capacity(events.len());

        for (index, event) in events.iter().enumerate() {
            let record = self.transform_value(event, metadata).map_err(|e| match e {
                TransformError::TypeMismatch { message } => TransformError::TypeMismatch {
                    message: format!("event #{}: {}", index, message),
                },
                other => other,
            })?;
            records.push(record);
        }

        tracing::info!("Transformed {} events", records.len());
        Ok(records)
    }
}

impl StandardEventTransformer {
    pub fn from_config(config: &TransformConfig) -> Self {
        Self::new(
            StandardFinanceExtractor,
            StandardAddressExtractor::new(config.missing_address_value()),
        )
    }
}

impl Default for StandardEventTransformer {
    fn default() -> Self {
        Self::new(StandardFinanceExtractor, StandardAddressExtractor::default())
    }
}
