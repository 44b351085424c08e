//! Authentication: password hashing and session state.

mod password;
mod session;

pub use password::{hash_password, verify_password};
pub use session::{current_user, sign_in, sign_out, SESSION_USER_ID_KEY};
