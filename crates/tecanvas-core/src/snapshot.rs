//! Read-only view data.

use crate::connection::Connection;
use crate::group::{GroupId, GroupType};

/// Everything one rendering of the connection page needs.
///
/// Built fresh for every view request and dropped after rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub group_types: Vec<GroupType>,
    /// Type filter that was applied to `groups`.
    pub selected_type: Option<GroupType>,
    /// TE groups
    pub groups: Vec<GroupId>,
    pub canvas_groups: Vec<GroupId>,
    pub connections: Vec<Connection>,
}
