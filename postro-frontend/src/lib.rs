//! Postgres Frontend Message Encoder
//!
//! Encode client to server messages of the postgres wire protocol version 3.0 into a
//! caller owned [`BytesMut`][bytes::BytesMut]. Every message goes through a single framing
//! function, [`postgres::frontend::write`], which writes the message type, the length prefix
//! and the message body.
//!
//! This crate does not perform any io, the transport that owns the socket is responsible to
//! send the written buffer.
//!
//! # Examples
//!
//! Startup and md5 authentication:
//!
//! ```
//! use bytes::BytesMut;
//! use postro_frontend::{StartupConfig, postgres::frontend::{self, PasswordMessage}};
//!
//! # fn app() -> postro_frontend::Result<()> {
//! let config = StartupConfig::new("alice").set_password("s3cret");
//! let mut buf = BytesMut::new();
//!
//! frontend::write(config.startup(), &mut buf)?;
//!
//! // salt received in `AuthenticationMD5Password`
//! let salt = [0xde, 0xad, 0xbe, 0xef];
//! let password = config.md5_response(salt);
//! frontend::write(PasswordMessage { password: &password }, &mut buf)?;
//! # Ok(())
//! # }
//! # app().unwrap();
//! ```
//!
//! Extended query:
//!
//! ```
//! use bytes::BytesMut;
//! use postro_frontend::postgres::{PgFormat, PgType, frontend::{self, Bind, Parse, Sync}};
//!
//! # fn app() -> postro_frontend::Result<()> {
//! let mut buf = BytesMut::new();
//!
//! frontend::write(Parse {
//!     prepare_name: "q1".into(),
//!     sql: "SELECT $1",
//!     oids: &[i32::OID],
//! }, &mut buf)?;
//!
//! frontend::write(Bind {
//!     portal_name: Default::default(),
//!     stmt_name: "q1".into(),
//!     param_formats: &[PgFormat::Binary],
//!     params: &[Some(&420i32.to_be_bytes())],
//!     result_formats: &[PgFormat::Binary],
//! }, &mut buf)?;
//!
//! frontend::write(Sync, &mut buf)?;
//! # Ok(())
//! # }
//! # app().unwrap();
//! ```

pub mod common;
mod ext;

// Protocol
pub mod postgres;

// Authentication
pub mod auth;
pub mod startup;

mod error;


pub use common::OptionalStr;
pub use postgres::{FrontendProtocol, Oid, PgFormat, PgType};
pub use startup::{StartupConfig, StartupConfigBuilder};
pub use error::{Error, ErrorKind, Result};
