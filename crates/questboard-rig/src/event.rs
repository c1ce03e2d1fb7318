//! Inbound frames: rig to client.

use crate::ProtocolError;

/// One frame received from the rig bridge.
///
/// The bridge forwards Arduino output verbatim: bare ASCII digit
/// frames are sensor cell activations, and `EFFECT_DONE` signals that
/// a board light effect finished. Range-checking the cell id against
/// the board is the consumer's job; the codec only guarantees it is a
/// digit frame that fits a `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigEvent {
    /// A board cell reported a piece.
    SensorActivated(u8),
    /// The rig finished playing a light effect.
    EffectDone,
}

impl RigEvent {
    /// Parse one inbound frame.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnrecognizedFrame`] for anything that
    /// is not an ASCII digit frame fitting a `u8` or the literal
    /// `EFFECT_DONE`.
    pub fn parse(frame: &str) -> Result<Self, ProtocolError> {
        if frame == "EFFECT_DONE" {
            return Ok(Self::EffectDone);
        }
        if !frame.is_empty() && frame.bytes().all(|b| b.is_ascii_digit()) {
            return frame
                .parse::<u8>()
                .map(Self::SensorActivated)
                .map_err(|_| ProtocolError::UnrecognizedFrame(frame.to_string()));
        }
        Err(ProtocolError::UnrecognizedFrame(frame.to_string()))
    }
}
