use serde_json::Value;

/// The HomeKit `On` characteristic. Zigbee does not always report power
/// state, then HomeKit is told the device did not respond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnState {
    Known(bool),
    NoResponse,
}

impl OnState {
    pub const NO_RESPONSE: &'static str = "NO_RESPONSE";
}

impl From<OnState> for Value {
    fn from(state: OnState) -> Self {
        match state {
            OnState::Known(is_on) => Value::Bool(is_on),
            OnState::NoResponse => Value::from(OnState::NO_RESPONSE),
        }
    }
}
