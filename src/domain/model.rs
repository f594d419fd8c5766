use crate::utils::error::{Result, TransformError};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// 單筆使用者事件。除了 `properties` 與 `context` 之外的欄位一律忽略。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub properties: Option<FinancialProperties>,
    #[serde(default)]
    pub context: Option<EventContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventContext {
    #[serde(default)]
    pub traits: Option<Traits>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Traits {
    #[serde(default)]
    pub address: Option<Address>,
}

/// 數值保持原樣（整數仍是整數），只有計算 profit 時才轉成 f64
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialProperties {
    #[serde(default)]
    pub price: Option<Number>,
    #[serde(default)]
    pub revenue: Option<Number>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
}

impl Event {
    /// 從原始 JSON 解析事件；型別不符（例如字串 price）回傳 `TypeMismatch`
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(TransformError::TypeMismatch {
                message: format!("event must be a JSON object, got {}", json_type_name(value)),
            });
        }

        Event::deserialize(value).map_err(|e| TransformError::TypeMismatch {
            message: e.to_string(),
        })
    }

    /// `context.traits.address`，每一層缺少時以空的 mapping 取代
    pub fn resolved_address(&self) -> Address {
        self.context
            .clone()
            .unwrap_or_default()
            .traits
            .unwrap_or_default()
            .address
            .unwrap_or_default()
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// 轉換後的扁平記錄，序列化後正好六個欄位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformedRecord {
    pub revenue: Number,
    pub price: Number,
    pub profit: f64,
    pub city: String,
    pub country: String,
    pub street: String,
}
