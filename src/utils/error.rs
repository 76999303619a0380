use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Validation error in '{field}': {reason}")]
    ValidationError { field: String, reason: String },
}

impl BridgeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            BridgeError::IoError(e) => format!("無法讀取設定檔: {}", e),
            BridgeError::ConfigParseError { message } => format!("設定檔格式錯誤: {}", message),
            BridgeError::ValidationError { field, reason } => {
                format!("設定值 '{}' 無效: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BridgeError::IoError(_) => "Check that the config file exists and is readable",
            BridgeError::ConfigParseError { .. } => {
                "Use [[pairings]] tables with species = dog|fish|tree and mechanism = land|water|leaf"
            }
            BridgeError::ValidationError { .. } => "List at least one pairing in the config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
