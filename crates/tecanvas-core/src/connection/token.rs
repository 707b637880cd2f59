//! Flat token encoding of a connection.
//!
//! The view needs one string per connection to use as a checkbox name, the
//! backend needs the structured pair. This module is the only place where the
//! two meet.
//!
//! # Known limitation
//!
//! Ids are joined with [`SEPARATOR`] and no escaping is applied. A group id
//! that itself contains `" ::: "` does not survive a round trip: decoding
//! splits at its first occurrence and the pair comes back wrong. Group ids are
//! short codes in practice. Do not add escaping here without changing the
//! token format on both the template and the decoder.

use crate::error::{Result, TecanvasError};
use crate::group::GroupId;

use super::model::Connection;

/// Separator placed between the TE id and the Canvas id.
pub const SEPARATOR: &str = " ::: ";

/// Joins a TE group id and a Canvas group id into a token.
pub fn encode(te_group: &GroupId, canvas_group: &GroupId) -> String {
    format!("{}{}{}", te_group, SEPARATOR, canvas_group)
}

/// Splits a token back into its pair.
///
/// Only the first two separator-delimited parts are used. A token without the
/// separator is rejected rather than read as an empty pair.
pub fn decode(token: &str) -> Result<Connection> {
    let mut parts = token.split(SEPARATOR);
    match (parts.next(), parts.next()) {
        (Some(te_group), Some(canvas_group)) => Ok(Connection::new(te_group, canvas_group)),
        _ => Err(TecanvasError::malformed_token(token)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_joins_with_separator() {
        let token = encode(&GroupId::from("G1"), &GroupId::from("C7"));
        assert_eq!(token, "G1 ::: C7");
    }

    #[test]
    fn test_decode_round_trips_separator_free_ids() {
        let pairs = [
            ("G1", "C7"),
            ("DV1234", "5521"),
            ("te:grp", "ca:grp"),
            ("a::b", "c :: d"),
            ("", ""),
            ("Grupp Ä", "Kurs Ö"),
        ];
        for (te, canvas) in pairs {
            let token = encode(&GroupId::from(te), &GroupId::from(canvas));
            assert_eq!(decode(&token).unwrap(), Connection::new(te, canvas), "{token}");
        }
    }

    #[test]
    fn test_decode_without_separator_is_malformed() {
        for token in ["", "G1", "G1:::C7", "G1 :: C7", "G1 ::C7"] {
            let err = decode(token).unwrap_err();
            assert_eq!(err, TecanvasError::malformed_token(token));
        }
    }

    #[test]
    fn test_decode_uses_first_two_parts_only() {
        let connection = decode("G1 ::: C7 ::: extra").unwrap();
        assert_eq!(connection, Connection::new("G1", "C7"));
    }
}
