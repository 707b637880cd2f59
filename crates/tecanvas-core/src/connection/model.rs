//! Connection domain model.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::token;
use crate::error::TecanvasError;
use crate::group::GroupId;

/// A link between a TE group and a Canvas group.
///
/// The pair is the primary key on the backend. Uniqueness is enforced there,
/// not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Connection {
    pub te_group: GroupId,
    pub canvas_group: GroupId,
}

impl Connection {
    pub fn new(te_group: impl Into<GroupId>, canvas_group: impl Into<GroupId>) -> Self {
        Self {
            te_group: te_group.into(),
            canvas_group: canvas_group.into(),
        }
    }

    /// Flat token form of this pair, used as a form control name.
    pub fn to_token(&self) -> String {
        token::encode(&self.te_group, &self.canvas_group)
    }
}

impl FromStr for Connection {
    type Err = TecanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        token::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip_through_from_str() {
        let connection = Connection::new("DV1234", "5521");
        let parsed: Connection = connection.to_token().parse().unwrap();
        assert_eq!(parsed, connection);
    }

    #[test]
    fn test_from_str_rejects_plain_id() {
        let err = "DV1234".parse::<Connection>().unwrap_err();
        assert!(err.is_malformed_token());
    }
}
