//! 配置校验模块
//!
//! 校验规则：
//! - ntfy.server 非空时必须是 http/https 绝对 URL
//! - ntfy.timeout_secs > 0
//! - game.attributes 的键不能为空

use contracts::ContractError;
use url::Url;

use crate::BridgeConfig;

/// 校验 BridgeConfig
///
/// 返回第一个遇到的错误，或 Ok(())。
pub fn validate(config: &BridgeConfig) -> Result<(), ContractError> {
    validate_server(config)?;
    validate_timeout(config)?;
    validate_attributes(config)?;
    Ok(())
}

/// 校验服务器地址
fn validate_server(config: &BridgeConfig) -> Result<(), ContractError> {
    let Some(server) = config.ntfy.server.as_deref().filter(|s| !s.is_empty()) else {
        return Ok(());
    };

    let url = Url::parse(server).map_err(|e| {
        ContractError::config_validation("ntfy.server", format!("invalid URL '{server}': {e}"))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ContractError::config_validation(
            "ntfy.server",
            format!("unsupported scheme '{}', expected http or https", url.scheme()),
        ));
    }
    Ok(())
}

/// 校验超时
fn validate_timeout(config: &BridgeConfig) -> Result<(), ContractError> {
    if config.ntfy.timeout_secs == Some(0) {
        return Err(ContractError::config_validation(
            "ntfy.timeout_secs",
            "timeout_secs must be > 0",
        ));
    }
    Ok(())
}

/// 校验游戏属性
fn validate_attributes(config: &BridgeConfig) -> Result<(), ContractError> {
    if config.game.attributes.keys().any(|k| k.is_empty()) {
        return Err(ContractError::config_validation(
            "game.attributes",
            "attribute name cannot be empty",
        ));
    }
    Ok(())
}
