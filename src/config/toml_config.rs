use crate::core::address::DEFAULT_MISSING_ADDRESS_VALUE;
use crate::utils::error::{Result, TransformError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformConfig {
    pub transformation: Option<TransformationSection>,
    pub defaults: Option<DefaultsConfig>,
    pub verification: Option<VerificationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformationSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub missing_address_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    pub enabled: bool,
}

impl TransformConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TransformError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TransformError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MISSING_TEXT})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TransformError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn name(&self) -> &str {
        self.transformation
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or("default")
    }

    pub fn missing_address_value(&self) -> &str {
        self.defaults
            .as_ref()
            .and_then(|d| d.missing_address_value.as_deref())
            .unwrap_or(DEFAULT_MISSING_ADDRESS_VALUE)
    }

    pub fn verification_enabled(&self) -> bool {
        self.verification.as_ref().map(|v| v.enabled).unwrap_or(false)
    }
}

impl Validate for TransformConfig {
    fn validate(&self) -> Result<()> {
        if let Some(transformation) = &self.transformation {
            validate_non_empty_string("transformation.name", &transformation.name)?;
        }

        // 空字串是合法的預設值，但不接受只有空白
        let missing = self.missing_address_value();
        if !missing.is_empty() {
            validate_non_empty_string("defaults.missing_address_value", missing)?;
        }

        Ok(())
    }
}
