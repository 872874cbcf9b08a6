//! User list component.

use dioxus::prelude::*;

use dashboard_core::UserRecord;

use super::UserRow;

/// Props for UserList component.
#[derive(Props, Clone, PartialEq)]
pub struct UserListProps {
    /// Records to display, already in server order.
    pub users: Vec<UserRecord>,
    /// Callback when a row's delete is clicked.
    pub on_delete: EventHandler<String>,
    /// Callback when a row's rename is confirmed.
    pub on_rename: EventHandler<(String, String)>,
}

/// List component rendering one row per fetched record.
///
/// The whole list is rebuilt from the input batch on every refresh; rows
/// are keyed by record id, which is unique within a batch.
#[component]
pub fn UserList(props: UserListProps) -> Element {
    rsx! {
        ul { class: "user-list",
            if props.users.is_empty() {
                div { class: "empty-state",
                    p { "No admins found" }
                }
            } else {
                for user in props.users.iter() {
                    UserRow {
                        key: "{user.id}",
                        user: user.clone(),
                        on_delete: props.on_delete.clone(),
                        on_rename: props.on_rename.clone(),
                    }
                }
            }
        }
    }
}
