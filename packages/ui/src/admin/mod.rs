//! Admin dashboard components for user/admin management.

mod add_admin_form;
mod dashboard;
mod user_list;
mod user_row;

pub use add_admin_form::AddAdminForm;
pub use dashboard::AdminDashboard;
pub use user_list::UserList;
pub use user_row::UserRow;
