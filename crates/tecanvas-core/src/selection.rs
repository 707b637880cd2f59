//! Process-wide TE group type selection.
//!
//! There is one selection for the whole server, shared by every viewer. It is
//! advisory UI state (a listing filter), so concurrent writers simply race and
//! the last one wins.
//!
//! Single-writer discipline: only the type-selection endpoint calls
//! [`SelectionState::set`]. Everything else reads the value once per view and
//! passes it on explicitly.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::group::GroupType;

/// Currently selected TE group type. Unset by default.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Arc<RwLock<Option<GroupType>>>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `group_type` selected.
    pub fn with_selected(group_type: GroupType) -> Self {
        Self {
            selected: Arc::new(RwLock::new(Some(group_type))),
        }
    }

    /// Returns the selected type, if any.
    pub async fn get(&self) -> Option<GroupType> {
        self.selected.read().await.clone()
    }

    /// Overwrites the selection unconditionally. `None` clears it.
    pub async fn set(&self, group_type: Option<GroupType>) {
        *self.selected.write().await = group_type;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_is_unset() {
        assert_eq!(SelectionState::new().get().await, None);
    }

    #[tokio::test]
    async fn test_set_overwrites_and_clears() {
        let state = SelectionState::with_selected(GroupType::new("lecture"));
        state.set(Some(GroupType::new("seminar"))).await;
        assert_eq!(state.get().await, Some(GroupType::new("seminar")));

        state.set(None).await;
        assert_eq!(state.get().await, None);
    }

    #[tokio::test]
    async fn test_clones_share_one_selection() {
        let state = SelectionState::new();
        let writer = state.clone();
        writer.set(Some(GroupType::new("lecture"))).await;
        assert_eq!(state.get().await, Some(GroupType::new("lecture")));
    }
}
