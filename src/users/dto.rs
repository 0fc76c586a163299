use serde::Serialize;
use uuid::Uuid;

use crate::users::repo_types::{Gender, User};

/// Contact entry returned to the sidebar. Explicit allow-list of
/// non-sensitive fields; the password hash never appears here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUser {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub full_name: String,
    pub username: String,
    pub gender: Gender,
    pub profile_pic: String,
}

impl From<User> for ContactUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            full_name: u.full_name,
            username: u.username,
            gender: u.gender,
            profile_pic: u.profile_pic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            full_name: "Ada Lovelace".into(),
            username: "ada".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            gender: Gender::Female,
            profile_pic: "https://avatar.iran.liara.run/public/girl?username=ada".into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn contact_user_uses_wire_field_names() {
        let json = serde_json::to_string(&ContactUser::from(sample_user())).unwrap();
        assert!(json.contains("\"_id\""));
        assert!(json.contains("\"fullName\":\"Ada Lovelace\""));
        assert!(json.contains("\"gender\":\"female\""));
        assert!(json.contains("\"profilePic\""));
    }

    #[test]
    fn contact_user_never_contains_password() {
        let json = serde_json::to_string(&ContactUser::from(sample_user())).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
    }
}
