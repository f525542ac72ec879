use serde::{Deserialize, Serialize};
use translator::Attributes;

#[derive(Debug, Clone, Deserialize)]
pub struct Inbound {
    pub payload: Attributes,
    #[serde(default)]
    pub hap: Option<Hap>,
}

/// Context HomeKit hosts attach to a message
#[derive(Debug, Clone, Deserialize)]
pub struct Hap {
    /// Current value of every characteristic of the accessory
    #[serde(rename = "allChars", default)]
    pub all_chars: Attributes,
}

#[derive(Debug, Clone, Serialize)]
pub struct Outbound {
    pub payload: Attributes,
}
