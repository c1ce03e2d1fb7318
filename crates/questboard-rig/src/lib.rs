//! questboard-rig: Pure wire codec for the board rig protocol (sans-IO).
//!
//! The rig bridge sits between the browser and the Arduino behind the
//! chessboard: sensor activations flow up as bare ASCII frames, and
//! client commands flow down as JSON that the bridge translates into
//! newline-terminated serial commands. This crate implements both
//! translations as pure functions; sockets and serial ports live in
//! the bridge process.

pub mod command;
pub mod event;

pub use command::{ClientMessage, RigCommand};
pub use event::RigEvent;

/// Errors raised while decoding or encoding rig protocol data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// An inbound frame was neither a sensor id nor a known keyword.
    #[error("unrecognized rig frame: {0:?}")]
    UnrecognizedFrame(String),

    /// A quest position outside the board's square range.
    #[error("quest position {0} is out of range (1..=48)")]
    PositionOutOfRange(u8),

    /// A quest-positions command with no positions.
    #[error("quest positions list is empty")]
    EmptyPositions,
}
