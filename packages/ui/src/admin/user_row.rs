//! User row component with the inline name editor.

use dioxus::prelude::*;
use std::rc::Rc;

use dashboard_core::UserRecord;

/// Props for UserRow component.
#[derive(Props, Clone, PartialEq)]
pub struct UserRowProps {
    /// The record to display.
    pub user: UserRecord,
    /// Callback when delete is clicked, carrying the record id.
    pub on_delete: EventHandler<String>,
    /// Callback when an edit is confirmed, carrying (id, new name).
    pub on_rename: EventHandler<(String, String)>,
}

/// One list row: the name field, an edit toggle, and a delete button.
///
/// The edit toggle is a two-state machine. In the viewing state the name
/// field is disabled and the control shows "edit"; clicking it enables and
/// focuses the field and flips the control to "done". Clicking again
/// disables the field, flips the control back, and raises `on_rename` with
/// the field's current value. The rename is never awaited here; the row
/// returns to viewing regardless of what the server ends up saying.
#[component]
pub fn UserRow(props: UserRowProps) -> Element {
    let mut editing = use_signal(|| false);
    let mut name = use_signal(|| props.user.name.clone());
    let mut name_input = use_signal(|| None::<Rc<MountedData>>);

    let user_id = props.user.id.clone();
    let id_for_delete = user_id.clone();
    let id_for_rename = user_id.clone();

    let toggle_edit = move |_| {
        if editing() {
            editing.set(false);
            props.on_rename.call((id_for_rename.clone(), name()));
        } else {
            editing.set(true);
            if let Some(input) = name_input() {
                spawn(async move {
                    let _ = input.set_focus(true).await;
                });
            }
        }
    };

    rsx! {
        li {
            class: "user-row",
            "data-user-id": "{props.user.id}",

            input {
                class: "admin-name",
                r#type: "text",
                disabled: !editing(),
                value: "{name}",
                oninput: move |e| name.set(e.value()),
                onmounted: move |e| name_input.set(Some(e.data())),
            }

            span { class: "admin-email", "{props.user.email_address}" }

            button {
                class: "btn btn-small edit-button",
                onclick: toggle_edit,
                span { class: "material-icons teal",
                    if editing() { "done" } else { "edit" }
                }
            }

            button {
                class: "btn btn-small delete-button",
                onclick: move |_| props.on_delete.call(id_for_delete.clone()),
                span { class: "material-icons red", "delete" }
            }
        }
    }
}
