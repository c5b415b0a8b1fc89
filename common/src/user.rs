//! User and session models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserProfile {
    pub _id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl UserProfile {
    /// Admin console access is limited to staff roles.
    pub fn is_staff(&self) -> bool {
        matches!(self.role.as_str(), "admin" | "employee")
    }
}

/// Issued by the upstream catalog service on login/register; the token is
/// sent as a bearer credential on admin calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_check_covers_admin_and_employee() {
        let mut user = UserProfile::default();
        for (role, expected) in [("admin", true), ("employee", true), ("customer", false), ("", false)] {
            user.role = role.to_string();
            assert_eq!(user.is_staff(), expected, "role {:?}", role);
        }
    }
}
