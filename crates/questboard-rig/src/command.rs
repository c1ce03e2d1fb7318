//! Outbound commands: client JSON messages and their serial encodings.

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// Board squares addressable by quest positions.
const MAX_POSITION: u8 = 48;

/// A JSON message from the client to the rig bridge.
///
/// Tagged by a `type` field, matching the bridge's dispatch table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Light up the squares holding quest numbers.
    QuestcardPositions {
        /// Board squares to highlight, each `1..=48`.
        positions: Vec<u8>,
    },
    /// Set the piece highlight color.
    PieceColor {
        /// RGB channel values.
        color: [u8; 3],
    },
    /// Play the board's startup light effect.
    InitEffect,
}

/// A newline-terminated serial command for the Arduino.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RigCommand {
    /// `QUEST:a,b,c` -- highlight quest squares.
    QuestPositions(Vec<u8>),
    /// `COLOR:r,g,b` -- set piece color.
    PieceColor([u8; 3]),
    /// `INIT_EFFECT` -- play the startup effect.
    InitEffect,
}

impl RigCommand {
    /// Encode the command as the bridge writes it to the serial port,
    /// trailing newline included.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::QuestPositions(positions) => {
                let joined = positions
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("QUEST:{joined}\n")
            }
            Self::PieceColor([r, g, b]) => format!("COLOR:{r},{g},{b}\n"),
            Self::InitEffect => "INIT_EFFECT\n".to_string(),
        }
    }
}

impl TryFrom<ClientMessage> for RigCommand {
    type Error = ProtocolError;

    /// Translate a client message into its serial command, validating
    /// positions the way the bridge does.
    fn try_from(message: ClientMessage) -> Result<Self, Self::Error> {
        match message {
            ClientMessage::QuestcardPositions { positions } => {
                if positions.is_empty() {
                    return Err(ProtocolError::EmptyPositions);
                }
                for &p in &positions {
                    if p == 0 || p > MAX_POSITION {
                        return Err(ProtocolError::PositionOutOfRange(p));
                    }
                }
                Ok(Self::QuestPositions(positions))
            }
            ClientMessage::PieceColor { color } => Ok(Self::PieceColor(color)),
            ClientMessage::InitEffect => Ok(Self::InitEffect),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn client_message_json_tags_match_the_bridge() {
        let msg = ClientMessage::QuestcardPositions {
            positions: vec![3, 17, 42],
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(
            json,
            r#"{"type":"questcard_positions","positions":[3,17,42]}"#
        );

        let msg = ClientMessage::PieceColor { color: [255, 140, 0] };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"type":"piece_color","color":[255,140,0]}"#);

        let msg: ClientMessage = serde_json::from_str(r#"{"type":"init_effect"}"#).unwrap();
        assert_eq!(msg, ClientMessage::InitEffect);
    }

    #[test]
    fn quest_positions_encode_with_newline() {
        let cmd = RigCommand::QuestPositions(vec![1, 24, 48]);
        assert_eq!(cmd.encode(), "QUEST:1,24,48\n");
    }

    #[test]
    fn piece_color_encodes_channels_in_order() {
        let cmd = RigCommand::PieceColor([255, 140, 0]);
        assert_eq!(cmd.encode(), "COLOR:255,140,0\n");
    }

    #[test]
    fn init_effect_encodes_bare_keyword() {
        assert_eq!(RigCommand::InitEffect.encode(), "INIT_EFFECT\n");
    }

    #[test]
    fn valid_positions_translate() {
        let msg = ClientMessage::QuestcardPositions {
            positions: vec![1, 48],
        };
        let cmd = RigCommand::try_from(msg).unwrap();
        assert_eq!(cmd, RigCommand::QuestPositions(vec![1, 48]));
    }

    #[test]
    fn position_zero_is_rejected() {
        let msg = ClientMessage::QuestcardPositions {
            positions: vec![5, 0],
        };
        assert_eq!(
            RigCommand::try_from(msg),
            Err(ProtocolError::PositionOutOfRange(0))
        );
    }

    #[test]
    fn position_above_48_is_rejected() {
        let msg = ClientMessage::QuestcardPositions {
            positions: vec![49],
        };
        assert_eq!(
            RigCommand::try_from(msg),
            Err(ProtocolError::PositionOutOfRange(49))
        );
    }

    #[test]
    fn empty_positions_are_rejected() {
        let msg = ClientMessage::QuestcardPositions { positions: vec![] };
        assert_eq!(
            RigCommand::try_from(msg),
            Err(ProtocolError::EmptyPositions)
        );
    }

    #[test]
    fn round_trip_client_json_to_serial() {
        let json = r#"{"type":"piece_color","color":[0,200,120]}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        let cmd = RigCommand::try_from(msg).unwrap();
        assert_eq!(cmd.encode(), "COLOR:0,200,120\n");
    }
}
