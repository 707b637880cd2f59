//! Interpretation of submitted edit forms.
//!
//! The view template names its controls so that the submitted field names
//! alone carry the intent; values are never read.
//!
//! - Add form: checked `te:<id>` and `ca:<id>` controls. The last one checked
//!   on each side wins.
//! - Delete form: one checked control per connection, named with the
//!   connection token (see [`crate::connection::token`]).

use crate::connection::{Connection, token};
use crate::error::{Result, TecanvasError};
use crate::group::GroupId;

const TE_MARKER: &str = "te";
const CANVAS_MARKER: &str = "ca";
const FIELD_DELIMITER: char = ':';

/// Which side of a connection an add-form field selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIntent {
    TeSide(GroupId),
    CanvasSide(GroupId),
}

impl FieldIntent {
    /// Classifies an add-form field name.
    ///
    /// The first two characters are the side marker and the third is the
    /// delimiter. Everything after is the raw group id. Any other shape is an
    /// invariant violation, since the form is generated by our own template.
    pub fn classify(field: &str) -> Result<Self> {
        let mut chars = field.chars();
        let marker: String = chars.by_ref().take(2).collect();
        let delimiter = chars.next();
        let id = GroupId::new(chars.as_str());

        match (marker.as_str(), delimiter) {
            (TE_MARKER, Some(_)) => Ok(FieldIntent::TeSide(id)),
            (CANVAS_MARKER, Some(_)) => Ok(FieldIntent::CanvasSide(id)),
            (TE_MARKER | CANVAS_MARKER, None) => Err(TecanvasError::invariant(format!(
                "add field '{}' is missing its delimiter",
                field
            ))),
            _ => Err(TecanvasError::invariant(format!(
                "add field '{}' has neither a '{}' nor a '{}' prefix",
                field, TE_MARKER, CANVAS_MARKER
            ))),
        }
    }

    /// Form field name that selects this side, e.g. `te:DV1234`.
    pub fn field_name(&self) -> String {
        match self {
            FieldIntent::TeSide(id) => format!("{}{}{}", TE_MARKER, FIELD_DELIMITER, id),
            FieldIntent::CanvasSide(id) => format!("{}{}{}", CANVAS_MARKER, FIELD_DELIMITER, id),
        }
    }
}

/// Parses the field names of an add submission into the connection to create.
///
/// At least one TE field and one Canvas field are required. When a side is
/// submitted more than once, the later field replaces the earlier one.
pub fn parse_add_intent<I, S>(fields: I) -> Result<Connection>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut te_group: Option<GroupId> = None;
    let mut canvas_group: Option<GroupId> = None;

    for field in fields {
        match FieldIntent::classify(field.as_ref())? {
            FieldIntent::TeSide(id) => te_group = Some(id),
            FieldIntent::CanvasSide(id) => canvas_group = Some(id),
        }
    }

    match (te_group, canvas_group) {
        (Some(te_group), Some(canvas_group)) => Ok(Connection {
            te_group,
            canvas_group,
        }),
        (None, _) => Err(TecanvasError::invariant("no TE group submitted")),
        (_, None) => Err(TecanvasError::invariant("no Canvas group submitted")),
    }
}

/// Parses the field names of a delete submission into the connections to remove.
///
/// Every token is decoded before anything is returned, so one malformed token
/// rejects the whole batch.
pub fn parse_delete_intent<I, S>(fields: I) -> Result<Vec<Connection>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|field| token::decode(field.as_ref()))
        .collect()
}
