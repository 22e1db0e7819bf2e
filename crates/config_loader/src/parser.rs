//! 配置解析模块
//!
//! 支持 TOML (主要) 和 JSON (可选) 格式。

use contracts::ContractError;

use crate::BridgeConfig;

/// 配置文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML 格式 (推荐)
    Toml,
    /// JSON 格式
    Json,
}

impl ConfigFormat {
    /// 从文件扩展名推断格式
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// 按格式解析配置
pub fn parse(content: &str, format: ConfigFormat) -> Result<BridgeConfig, ContractError> {
    match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| ContractError::ConfigParse {
            message: format!("TOML parse error: {e}"),
            source: Some(Box::new(e)),
        }),
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|e| ContractError::ConfigParse {
                message: format!("JSON parse error: {e}"),
                source: Some(Box::new(e)),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(ConfigFormat::from_extension("TOML"), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_extension("json"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("yaml"), None);
    }

    #[test]
    fn test_parse_json() {
        let config = parse(
            r#"{"ntfy": {"topic": "mypager"}, "game": {"application_name": "SpaceQuest"}}"#,
            ConfigFormat::Json,
        )
        .unwrap();
        assert_eq!(config.ntfy.topic.as_deref(), Some("mypager"));
        assert_eq!(config.game.application_name.as_deref(), Some("SpaceQuest"));
    }

    #[test]
    fn test_parse_empty_toml_uses_defaults() {
        let config = parse("", ConfigFormat::Toml).unwrap();
        assert_eq!(config, BridgeConfig::default());
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let err = parse("[ntfy\ntopic = 1", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(
            err,
            ContractError::ConfigParse {
                source: Some(_),
                ..
            }
        ));
    }
}
