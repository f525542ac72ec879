use crate::Direction;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid device kind: {kind}, no such device for {direction}")]
    UnknownDeviceKind { kind: String, direction: Direction },
}
