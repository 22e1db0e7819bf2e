//! BridgeConfig - file representation of the bridge settings

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use contracts::{
    MemoryAttributeStore, ATTR_APPLICATION_NAME, ATTR_NTFY_SERVER, ATTR_NTFY_TOPIC,
};

/// Complete bridge configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// ntfy settings
    #[serde(default)]
    pub ntfy: NtfySettings,

    /// Game attribute snapshot
    #[serde(default)]
    pub game: GameSettings,
}

/// ntfy server settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NtfySettings {
    /// Server base URL (default: public instance)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    /// Topic to publish to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Overall HTTP request timeout in seconds (default: none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Game-side settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Shown in the notification text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,

    /// Raw game attributes (name -> value)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
}

impl BridgeConfig {
    /// Build the attribute store the trigger reads from
    ///
    /// Dedicated fields override entries of the same name in `attributes`.
    pub fn attribute_store(&self) -> MemoryAttributeStore {
        let mut store = MemoryAttributeStore::from(self.game.attributes.clone());

        let overrides = [
            (ATTR_NTFY_TOPIC, &self.ntfy.topic),
            (ATTR_NTFY_SERVER, &self.ntfy.server),
            (ATTR_APPLICATION_NAME, &self.game.application_name),
        ];
        for (name, value) in overrides {
            if let Some(value) = value {
                store.set(name, value.clone());
            }
        }
        store
    }
}
