//! Add-admin modal form component.

use dioxus::prelude::*;
use tracing::info;

/// Props for AddAdminForm component.
#[derive(Props, Clone, PartialEq)]
pub struct AddAdminFormProps {
    /// Callback when the form is dismissed.
    pub on_cancel: EventHandler<()>,
}

/// Modal form for creating a new admin, rendered over a dimming overlay.
///
/// Cancel dismisses the form with no network call. Submit is a stub: the
/// `/create-admin` request contract is not settled yet, so it only logs the
/// click and leaves the form open. The field values are not read anywhere.
#[component]
pub fn AddAdminForm(props: AddAdminFormProps) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);

    let submit = move |_| {
        // TODO: connect to /create-admin once the request shape is agreed
        info!("add-admin submit clicked");
    };

    rsx! {
        div { class: "overlay" }

        div { class: "admin-form",
            h3 { "New Admin" }

            div { class: "form-group",
                label { "Name" }
                input {
                    r#type: "text",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
            }

            div { class: "form-group",
                label { "Email" }
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    id: "admin-form-submit-button",
                    onclick: submit,
                    "Create"
                }
                button {
                    class: "btn btn-secondary",
                    id: "admin-form-cancel-button",
                    onclick: move |_| props.on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
