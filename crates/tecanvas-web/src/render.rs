//! HTML rendering of the connection page.

use minijinja::Environment;
use serde::Serialize;
use tecanvas_core::{FieldIntent, GroupId, Snapshot};

const INDEX_TEMPLATE: &str = "index.html";
const INDEX_SOURCE: &str = include_str!("../templates/index.html");

/// A selectable group with the form field name that selects it.
#[derive(Debug, Serialize)]
struct GroupChoice {
    id: String,
    field: String,
}

#[derive(Debug, Serialize)]
struct ConnectionRow {
    te_group: String,
    canvas_group: String,
    token: String,
}

#[derive(Debug, Serialize)]
struct PageView {
    group_types: Vec<String>,
    selected_type: Option<String>,
    groups: Vec<GroupChoice>,
    canvas_groups: Vec<GroupChoice>,
    connections: Vec<ConnectionRow>,
}

fn group_choices(ids: &[GroupId], side: fn(GroupId) -> FieldIntent) -> Vec<GroupChoice> {
    ids.iter()
        .map(|id| GroupChoice {
            id: id.to_string(),
            field: side(id.clone()).field_name(),
        })
        .collect()
}

impl PageView {
    fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            group_types: snapshot.group_types.iter().map(|t| t.to_string()).collect(),
            selected_type: snapshot.selected_type.as_ref().map(|t| t.to_string()),
            groups: group_choices(&snapshot.groups, FieldIntent::TeSide),
            canvas_groups: group_choices(&snapshot.canvas_groups, FieldIntent::CanvasSide),
            connections: snapshot
                .connections
                .iter()
                .map(|connection| ConnectionRow {
                    te_group: connection.te_group.to_string(),
                    canvas_group: connection.canvas_group.to_string(),
                    token: connection.to_token(),
                })
                .collect(),
        }
    }
}

/// Renders snapshots through the embedded page template.
///
/// The template name ends in `.html`, so minijinja escapes every value.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, INDEX_SOURCE)?;
        Ok(Self { env })
    }

    pub fn render(&self, snapshot: &Snapshot) -> Result<String, minijinja::Error> {
        self.env
            .get_template(INDEX_TEMPLATE)?
            .render(PageView::from_snapshot(snapshot))
    }
}
