use serde::Serialize;

/// A registered user.
///
/// Deliberately not `Serialize`: the bcrypt digest must never reach a
/// response body. Handlers expose [`PublicUser`] instead.
#[derive(Clone, Debug)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    pub fn new(id: u64, name: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
        }
    }
}

/// Client-safe projection of a user record.
#[derive(Clone, Debug, Serialize)]
pub struct PublicUser {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_user_has_no_password_material() {
        let user = User::new(
            7,
            "Ana".to_string(),
            "ana@x.com".to_string(),
            "$2b$10$abcdefghijklmnopqrstuv".to_string(),
        );

        let public = PublicUser::from(&user);
        let json = serde_json::to_string(&public).unwrap();

        assert!(json.contains("ana@x.com"));
        assert!(!json.contains("$2b$10$"));
        assert!(!json.contains("password"));
    }
}
