use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Type mismatch in event: {message}")]
    TypeMismatch { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

/// CLI 結束碼：1 保留給「輸出與預期不符」，不屬於錯誤
pub const EXIT_CONFIG_ERROR: i32 = 2;
pub const EXIT_INPUT_ERROR: i32 = 3;
pub const EXIT_IO_ERROR: i32 = 4;

impl TransformError {
    /// 是否為輸入資料本身的問題（而非設定或環境）
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TransformError::TypeMismatch { .. } | TransformError::SerializationError(_)
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            e if e.is_input_error() => EXIT_INPUT_ERROR,
            TransformError::IoError(_) => EXIT_IO_ERROR,
            _ => EXIT_CONFIG_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
