//! Postgres md5 password authentication.
//!
//! When the server sends `AuthenticationMD5Password`, the frontend must send back a
//! [`PasswordMessage`][crate::postgres::frontend::PasswordMessage] containing:
//!
//! ```text
//! concat('md5', md5(concat(md5(concat(password, username)), random-salt)))
//! ```
//!
//! Keep in mind the `md5()` function returns its result as a hex string.
//!
//! <https://www.postgresql.org/docs/current/protocol-flow.html#PROTOCOL-FLOW-START-UP>
use md5::{Digest, Md5};

use crate::common::verbose;

/// Compute md5 password response from username, password and the 4 bytes salt
/// sent by the server.
///
/// The result is prefixed with `md5` and can be sent as is.
pub fn md5_password(user: &str, password: &str, salt: [u8; 4]) -> String {
    verbose!(user, "md5 password response");

    let mut md5 = Md5::new();
    md5.update(password.as_bytes());
    md5.update(user.as_bytes());
    let inner = format!("{:x}", md5.finalize_reset());

    md5.update(inner.as_bytes());
    md5.update(salt);
    format!("md5{:x}", md5.finalize())
}
