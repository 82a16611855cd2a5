pub mod authenticator;
pub mod cookie;
pub mod password;
pub mod token;

pub use authenticator::{
    require_auth, Authenticator, Identity, SessionAuthenticator, TokenAuthenticator,
};
pub use password::PasswordHasher;
pub use token::{Claims, TokenKeys};
