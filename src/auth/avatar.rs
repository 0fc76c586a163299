use crate::users::repo_types::Gender;

/// Profile picture URL for a new user, derived once at signup from the
/// username and gender.
pub fn profile_pic_url(base_url: &str, gender: Gender, username: &str) -> String {
    let variant = match gender {
        Gender::Male => "boy",
        Gender::Female => "girl",
    };
    format!("{base_url}/public/{variant}?username={username}")
}
