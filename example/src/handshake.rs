use std::env::var;

use bytes::BytesMut;
use postro_frontend::{
    Result, StartupConfig,
    postgres::frontend::{self, PasswordMessage},
};

/// Salt as sent by the server in `AuthenticationMD5Password`.
const SALT: [u8; 4] = [0x93, 0x2c, 0x3a, 0x58];

pub fn main(buf: &mut BytesMut) -> Result<()> {
    let mut config = StartupConfig::new(var("PGUSER").unwrap_or_else(|_| "postgres".into()));
    if let Ok(db) = var("PGDATABASE") {
        config = config.set_database(db);
    }
    if let Ok(pass) = var("PGPASS") {
        config = config.set_password(pass);
    }

    let offset = buf.len();
    frontend::write(config.startup(), buf)?;
    crate::dump(buf, offset, false);

    let password = config.md5_response(SALT);
    let offset = buf.len();
    frontend::write(PasswordMessage { password: &password }, buf)?;
    crate::dump(buf, offset, true);

    Ok(())
}
