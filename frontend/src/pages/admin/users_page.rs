//! Admin user listing.

use dioxus::prelude::*;

use common::user::UserProfile;

use crate::api::admin_api::get_all_users;
use crate::components::admin_components::data_table::{DataTable, TableRow};
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::session::SessionState;


/// Admin users page
#[component]
pub fn AdminUsersPage() -> Element {
    rsx! {
        Title { "Modelcraft - Admin Users" }
        SuspendWrapper {
            AdminUsersTable {}
        }
    }
}

#[component]
fn AdminUsersTable() -> Element {
    let session = use_context::<SessionState>();
    let token = session.token().unwrap_or_default();

    let users = use_resource(move || get_all_users(token.clone()))
        .suspend()?
        .cloned();
    let users = match users {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(users) => users,
    };

    let rows: Vec<TableRow> = users
        .iter()
        .map(|user: &UserProfile| TableRow {
            key: user._id.clone(),
            cells: vec![
                user._id.clone(),
                user.name.clone(),
                user.email.clone(),
                user.role.clone(),
                user.created_at.clone(),
            ],
        })
        .collect();

    rsx! {
        DataTable {
            title: "Users".to_string(),
            description: "Registered accounts.".to_string(),
            headers: vec![
                "ID".to_string(),
                "Name".to_string(),
                "Email".to_string(),
                "Role".to_string(),
                "Joined".to_string(),
            ],
            rows,
        }
    }
}
