//! Main admin dashboard component.

use dioxus::prelude::*;
use tracing::{debug, warn};

use api::AdminApi;
use dashboard_core::UserRecord;

use super::{AddAdminForm, UserList};

/// Main admin dashboard component.
///
/// Expects an [`AdminApi`] in context, provided once at startup. The
/// profile list is fetched at mount and never re-fetched; edit and delete
/// are fire-and-forget, so the rendered list does not react to their
/// outcome. Failures are logged and otherwise invisible.
#[component]
pub fn AdminDashboard() -> Element {
    let api = use_context::<AdminApi>();
    let mut show_add_form = use_signal(|| false);

    // Load the user list once; replaces the rendered rows wholesale.
    let api_for_list = api.clone();
    let profiles = use_resource(move || {
        let api = api_for_list.clone();
        async move {
            match api.list_profiles().await {
                Ok(users) => {
                    debug!(count = users.len(), "refreshed user list");
                    users
                }
                Err(e) => {
                    warn!(error = %e, "failed to fetch profiles");
                    Vec::new()
                }
            }
        }
    });

    let display_users: Vec<UserRecord> = profiles.read().as_ref().cloned().unwrap_or_default();

    // Delete handler: one POST per click, no row removal on success.
    let api_for_delete = api.clone();
    let on_delete = move |id: String| {
        let api = api_for_delete.clone();
        spawn(async move {
            if let Err(e) = api.delete_admin(&id).await {
                warn!(error = %e, id = %id, "delete-admin request failed");
            }
        });
    };

    // Rename handler: fired after the row has already flipped back to
    // viewing; the UI never waits on this request.
    let api_for_rename = api.clone();
    let on_rename = move |(id, name): (String, String)| {
        let api = api_for_rename.clone();
        spawn(async move {
            if let Err(e) = api.edit_admin(&id, &name).await {
                warn!(error = %e, id = %id, "edit-admin request failed");
            }
        });
    };

    rsx! {
        div { class: "admin-dashboard",
            header { class: "admin-header",
                h1 { "Admin Dashboard" }
                button {
                    class: "btn btn-primary",
                    id: "add-admin-button",
                    onclick: move |_| show_add_form.set(true),
                    "+ Add Admin"
                }
            }

            UserList {
                users: display_users,
                on_delete: on_delete,
                on_rename: on_rename,
            }

            if show_add_form() {
                AddAdminForm {
                    on_cancel: move |_| show_add_form.set(false),
                }
            }
        }
    }
}
