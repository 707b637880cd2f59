//! Wire formats of the backend API.
//!
//! The two API revisions differ in shape: the current one wraps every list in
//! `{"data": [...]}` and lists objects with an `id`, the legacy one returns
//! bare arrays of strings or integers. Decoding accepts either shape on every
//! endpoint.

use serde::Deserialize;
use tecanvas_core::{Connection, GroupId, GroupType};

/// A list response, wrapped or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Wrapped { data } => data,
            Listing::Bare(items) => items,
        }
    }
}

/// An id as the backend sends it. Canvas ids are integers on the legacy API.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Text(String),
    Number(i64),
}

impl From<IdValue> for GroupId {
    fn from(value: IdValue) -> Self {
        match value {
            IdValue::Text(id) => GroupId::new(id),
            IdValue::Number(id) => GroupId::from(id),
        }
    }
}

impl IdValue {
    fn into_string(self) -> String {
        match self {
            IdValue::Text(id) => id,
            IdValue::Number(id) => id.to_string(),
        }
    }
}

/// One element of a group or type listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdEntry {
    Object { id: IdValue },
    Plain(IdValue),
}

impl IdEntry {
    fn into_value(self) -> IdValue {
        match self {
            IdEntry::Object { id } => id,
            IdEntry::Plain(id) => id,
        }
    }
}

impl From<IdEntry> for GroupId {
    fn from(entry: IdEntry) -> Self {
        entry.into_value().into()
    }
}

impl From<IdEntry> for GroupType {
    fn from(entry: IdEntry) -> Self {
        GroupType::new(entry.into_value().into_string())
    }
}

/// One connection record. Extra fields (`te_type`, `delete_flag`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionDto {
    pub te_group: IdValue,
    pub canvas_group: IdValue,
}

impl From<ConnectionDto> for Connection {
    fn from(dto: ConnectionDto) -> Self {
        Connection::new(GroupId::from(dto.te_group), GroupId::from(dto.canvas_group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(json: &str) -> Vec<GroupId> {
        serde_json::from_str::<Listing<IdEntry>>(json)
            .unwrap()
            .into_items()
            .into_iter()
            .map(GroupId::from)
            .collect()
    }

    #[test]
    fn test_wrapped_objects_with_id() {
        assert_eq!(
            ids(r#"{"data":[{"id":"DV1234","extra":1},{"id":"DV5678"}]}"#),
            vec![GroupId::from("DV1234"), GroupId::from("DV5678")]
        );
    }

    #[test]
    fn test_bare_strings_and_integers() {
        assert_eq!(ids(r#"["DV1234"]"#), vec![GroupId::from("DV1234")]);
        assert_eq!(
            ids("[17, 42]"),
            vec![GroupId::from("17"), GroupId::from("42")]
        );
    }

    #[test]
    fn test_wrapped_mixed_canvas_ids() {
        assert_eq!(
            ids(r#"{"data":[17, "course-42", {"id": 9}]}"#),
            vec![
                GroupId::from("17"),
                GroupId::from("course-42"),
                GroupId::from("9")
            ]
        );
    }

    #[test]
    fn test_connection_records_ignore_extra_fields() {
        let json = r#"{"data":[{"te_group":"A","canvas_group":"1","te_type":"courseevt","delete_flag":false}]}"#;
        let connections: Vec<Connection> = serde_json::from_str::<Listing<ConnectionDto>>(json)
            .unwrap()
            .into_items()
            .into_iter()
            .map(Connection::from)
            .collect();
        assert_eq!(connections, vec![Connection::new("A", "1")]);
    }

    #[test]
    fn test_legacy_bare_connection_array() {
        let json = r#"[{"te_group":"B","canvas_group":2}]"#;
        let connections: Vec<Connection> = serde_json::from_str::<Listing<ConnectionDto>>(json)
            .unwrap()
            .into_items()
            .into_iter()
            .map(Connection::from)
            .collect();
        assert_eq!(connections, vec![Connection::new("B", "2")]);
    }

    #[test]
    fn test_object_is_not_a_listing() {
        assert!(serde_json::from_str::<Listing<IdEntry>>(r#"{"message":"boom"}"#).is_err());
    }
}
