pub mod user_register;
pub use self::user_register::register;

pub mod user_login;
pub use self::user_login::login;

pub mod fallback;
pub use self::fallback::fallback;

// common types and fixed response messages for the handlers
use serde::Deserialize;

/// Form fields shared by login and registration.
#[derive(Deserialize, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub const MSG_LOGIN_SUCCESS: &str = "login success";
pub const MSG_INCORRECT_PASSWORD: &str = "incorrect password";
pub const MSG_USERNAME_NOT_FOUND: &str = "username not found";
pub const MSG_NO_CREDENTIALS: &str = "username and password not found";
pub const MSG_REGISTER_SUCCESS: &str = "registration success";
pub const MSG_USER_EXISTS: &str = "user already exists";
pub const MSG_MISSING_FIELDS: &str = "missing username or password";
pub const MSG_STORE_ERROR: &str = "error accessing credential store";
pub const MSG_NON_POST: &str = "GET request";
pub const MSG_NOT_FOUND: &str = "not found";
