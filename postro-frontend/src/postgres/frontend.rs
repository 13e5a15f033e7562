//! Postgres Frontend Messages
//!
//! <https://www.postgresql.org/docs/current/protocol-message-formats.html>
use std::fmt;

use bytes::{BufMut, BytesMut};

use super::{Oid, ParamCountMismatch, PgFormat, ProtocolVersion};
use crate::{
    Result,
    common::{OptionalStr, debug, span, verbose},
    ext::{BufMutExt, FmtExt, StrExt, UsizeExt},
};

/// Write a frontend message to `buf`.
///
/// The message is validated before anything is written, on error `buf` is left untouched.
pub fn write<F: FrontendProtocol>(msg: F, buf: &mut BytesMut) -> Result<()> {
    span!("frontend", msgtype = ?F::MSGTYPE.map(char::from));

    let size_hint = match msg.size_hint() {
        Ok(ok) => ok,
        Err(err) => {
            debug!("frontend message rejected: {err}");
            return Err(err);
        }
    };

    // [msgtype] + length
    let prefix = match F::MSGTYPE {
        Some(_) => 1 + 4,
        None => 4,
    };

    // length includes itself, but not the message type
    let len = (4 + size_hint).try_u32("message length")?;

    buf.reserve(prefix + size_hint);

    let offset = buf.len();
    if let Some(msgtype) = F::MSGTYPE {
        buf.put_u8(msgtype);
    }
    buf.put_u32(len);

    msg.encode(&mut *buf);

    debug_assert_eq!(
        buf.len() - offset,
        prefix + size_hint,
        "Frontend message body size not equal to size hint"
    );

    verbose!(len, frame = ?buf[offset..].lossy(), "frontend message written");

    Ok(())
}

/// A type which can be encoded into postgres frontend message
pub trait FrontendProtocol {
    /// Message type.
    ///
    /// Only [`Startup`] have no message type.
    const MSGTYPE: Option<u8>;

    /// Size of the main body.
    ///
    /// Note that this is **only** the size of main body as oppose of actual postgres message which
    /// include the length itself.
    ///
    /// This is also where the message is validated, returns error if any field cannot be
    /// represented in the protocol.
    fn size_hint(&self) -> Result<usize>;

    /// Write the main body of the message.
    ///
    /// The length of body written must be equal to the
    /// length returned by [`size_hint`][FrontendProtocol::size_hint], and this must only
    /// be called after [`size_hint`][FrontendProtocol::size_hint] succeed.
    fn encode(self, buf: impl BufMut);
}

const USER_KEY: &str = "user";
const DATABASE_KEY: &str = "database";

/// Postgres Startup frontend message
///
/// For historical reasons, the very first message sent by the client (the [`Startup`] message)
/// has no initial message-type byte.
///
/// Only `user` and `database` parameters are supported.
#[derive(Debug, Clone, Copy)]
pub struct Startup<'a> {
    /// The database user name to connect as. Required; there is no default.
    pub user: &'a str,
    /// The database to connect to. Defaults to the user name.
    pub database: OptionalStr<'a>,
}

impl FrontendProtocol for Startup<'_> {
    const MSGTYPE: Option<u8> = None;

    fn size_hint(&self) -> Result<usize> {
        let mut size = size_of::<u16>() * 2
            + USER_KEY.len() + 1
            + self.user.nul_string_len("user")?;

        if let Some(db) = self.database.get() {
            size += DATABASE_KEY.len() + 1 + db.nul_string_len("database")?;
        }

        Ok(size)
    }

    fn encode(self, mut buf: impl BufMut) {
        // The most significant 16 bits are the major version number.
        // The least significant 16 bits are the minor version number.
        let version = ProtocolVersion::V3_0;
        buf.put_u16(version.major);
        buf.put_u16(version.minor);

        // user: The database user name to connect as. Required; there is no default.
        buf.put_nul_string(USER_KEY);
        buf.put_nul_string(self.user);

        // database: The database to connect to. Defaults to the user name.
        if let Some(db) = self.database.get() {
            buf.put_nul_string(DATABASE_KEY);
            buf.put_nul_string(db);
        }
    }
}

/// Identifies the message as a password response.
#[derive(Debug, Clone, Copy)]
pub struct PasswordMessage<'a> {
    /// The password (encrypted, if requested)
    ///
    /// For md5 authentication, see [`auth::md5_password`][crate::auth::md5_password].
    pub password: &'a str,
}

impl FrontendProtocol for PasswordMessage<'_> {
    const MSGTYPE: Option<u8> = Some(b'p');

    fn size_hint(&self) -> Result<usize> {
        Ok(self.password.nul_string_len("password")?)
    }

    fn encode(self, mut buf: impl BufMut) {
        buf.put_nul_string(self.password);
    }
}

/// Identifies the message as a simple query
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    /// the query string itself
    pub sql: &'a str,
}

impl FrontendProtocol for Query<'_> {
    const MSGTYPE: Option<u8> = Some(b'Q');

    fn size_hint(&self) -> Result<usize> {
        Ok(self.sql.nul_string_len("sql")?)
    }

    fn encode(self, mut buf: impl BufMut) {
        buf.put_nul_string(self.sql);
    }
}

/// Identifies the message as a Parse command
#[derive(Debug, Clone, Copy)]
pub struct Parse<'a> {
    /// prepared statement name (an empty string selects the unnamed prepared statement).
    pub prepare_name: OptionalStr<'a>,
    /// The query string to be parsed.
    pub sql: &'a str,
    /// Specifies the object ID of the parameter data type.
    ///
    /// Note that this is not an indication of the number of parameters that might appear in the query string,
    /// only the number that the frontend wants to prespecify types for. Empty list let the server infer
    /// all parameter types.
    ///
    /// Placing a zero here is equivalent to leaving the type unspecified.
    pub oids: &'a [Oid],
}

impl FrontendProtocol for Parse<'_> {
    const MSGTYPE: Option<u8> = Some(b'P');

    fn size_hint(&self) -> Result<usize> {
        self.oids.len().try_u16("parameter data types")?;

        Ok(self.prepare_name.as_str().nul_string_len("prepare name")?
            + self.sql.nul_string_len("sql")?
            + size_of::<u16>()
            + size_of::<u32>() * self.oids.len())
    }

    fn encode(self, mut buf: impl BufMut) {
        buf.put_nul_string(self.prepare_name.as_str());
        buf.put_nul_string(self.sql);
        buf.put_u16(self.oids.len().to_u16());
        for oid in self.oids {
            buf.put_u32(oid.get());
        }
    }
}

/// Identifies the message as a Bind command.
#[derive(Clone, Copy)]
pub struct Bind<'a> {
    /// The name of the destination portal (an empty string selects the unnamed portal).
    pub portal_name: OptionalStr<'a>,
    /// The name of the source prepared statement (an empty string selects the unnamed prepared statement).
    pub stmt_name: OptionalStr<'a>,

    /// The parameter [`PgFormat`].
    ///
    /// Must have the same length as `params`.
    pub param_formats: &'a [PgFormat],

    /// The value of the parameter, in the format indicated by the associated format code.
    ///
    /// `None` is a NULL parameter value, which is different from an empty value.
    pub params: &'a [Option<&'a [u8]>],

    /// The result-columns [`PgFormat`].
    ///
    /// This can be empty to indicate that there are no result columns or that the result
    /// columns should all use the default format (text); or one, in which case the
    /// specified format code is applied to all result columns (if any); or it can equal
    /// the actual number of result columns of the query.
    pub result_formats: &'a [PgFormat],
}

impl FrontendProtocol for Bind<'_> {
    const MSGTYPE: Option<u8> = Some(b'B');

    fn size_hint(&self) -> Result<usize> {
        if self.param_formats.len() != self.params.len() {
            return Err(ParamCountMismatch {
                formats: self.param_formats.len(),
                values: self.params.len(),
            }.into());
        }

        self.params.len().try_u16("parameter count")?;
        self.result_formats.len().try_u16("result format count")?;

        let mut params_size = 0;
        for value in self.params.iter().flatten() {
            params_size += value.len();
            value.len().try_i32("parameter value")?;
        }

        Ok(self.portal_name.as_str().nul_string_len("portal name")?
            + self.stmt_name.as_str().nul_string_len("statement name")?
            + size_of::<u16>()
            + size_of::<u16>() * self.param_formats.len()
            + size_of::<u16>()
            + size_of::<i32>() * self.params.len()
            + params_size
            + size_of::<u16>()
            + size_of::<u16>() * self.result_formats.len())
    }

    fn encode(self, mut buf: impl BufMut) {
        buf.put_nul_string(self.portal_name.as_str());
        buf.put_nul_string(self.stmt_name.as_str());

        buf.put_u16(self.param_formats.len().to_u16());
        for format in self.param_formats {
            buf.put_u16(format.format_code());
        }

        buf.put_u16(self.params.len().to_u16());
        for param in self.params {
            match param {
                // -1 for NULL, no value bytes follow
                None => buf.put_i32(-1),
                Some(value) => {
                    buf.put_i32(value.len().to_i32());
                    buf.put_slice(value);
                },
            }
        }

        buf.put_u16(self.result_formats.len().to_u16());
        for format in self.result_formats {
            buf.put_u16(format.format_code());
        }
    }
}

impl fmt::Debug for Bind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Params<'a>(&'a [Option<&'a [u8]>]);

        impl fmt::Debug for Params<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut list = f.debug_list();
                for param in self.0 {
                    match param {
                        Some(value) => list.entry(&value.lossy()),
                        None => list.entry(&format_args!("NULL")),
                    };
                }
                list.finish()
            }
        }

        f.debug_struct("Bind")
            .field("portal_name", &self.portal_name)
            .field("stmt_name", &self.stmt_name)
            .field("param_formats", &self.param_formats)
            .field("params", &Params(self.params))
            .field("result_formats", &self.result_formats)
            .finish()
    }
}

/// Identifies the message as a Execute command
#[derive(Debug, Clone, Copy)]
pub struct Execute<'a> {
    /// The name of the portal to execute (an empty string selects the unnamed portal).
    pub portal_name: OptionalStr<'a>,
    /// Maximum number of rows to return, if portal contains a query that returns rows
    /// (ignored otherwise). Zero denotes “no limit”.
    pub max_row: u32,
}

impl FrontendProtocol for Execute<'_> {
    const MSGTYPE: Option<u8> = Some(b'E');

    fn size_hint(&self) -> Result<usize> {
        Ok(self.portal_name.as_str().nul_string_len("portal name")? + size_of::<u32>())
    }

    fn encode(self, mut buf: impl BufMut) {
        buf.put_nul_string(self.portal_name.as_str());
        buf.put_u32(self.max_row);
    }
}

/// Target of [`Describe`] and [`Close`] command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Prepared statement, written as `'S'`.
    Statement,
    /// Portal, written as `'P'`.
    Portal,
}

impl Target {
    fn as_u8(self) -> u8 {
        match self {
            Target::Statement => b'S',
            Target::Portal => b'P',
        }
    }
}

/// Identifies the message as a Close command
#[derive(Debug, Clone, Copy)]
pub struct Close<'a> {
    pub target: Target,
    /// The name of the prepared statement or portal to close
    /// (an empty string selects the unnamed prepared statement or portal).
    pub name: OptionalStr<'a>,
}

impl FrontendProtocol for Close<'_> {
    const MSGTYPE: Option<u8> = Some(b'C');

    fn size_hint(&self) -> Result<usize> {
        Ok(size_of::<u8>() + self.name.as_str().nul_string_len("name")?)
    }

    fn encode(self, mut buf: impl BufMut) {
        buf.put_u8(self.target.as_u8());
        buf.put_nul_string(self.name.as_str());
    }
}

/// Identifies the message as a Describe command.
#[derive(Debug, Clone, Copy)]
pub struct Describe<'a> {
    pub target: Target,
    /// The name of the prepared statement or portal to describe
    /// (an empty string selects the unnamed prepared statement or portal).
    pub name: OptionalStr<'a>,
}

impl FrontendProtocol for Describe<'_> {
    const MSGTYPE: Option<u8> = Some(b'D');

    fn size_hint(&self) -> Result<usize> {
        Ok(size_of::<u8>() + self.name.as_str().nul_string_len("name")?)
    }

    fn encode(self, mut buf: impl BufMut) {
        buf.put_u8(self.target.as_u8());
        buf.put_nul_string(self.name.as_str());
    }
}

macro_rules! empty_message {
    ($(#[$doc:meta])* $name:ident, $msgtype:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl FrontendProtocol for $name {
            const MSGTYPE: Option<u8> = Some($msgtype);

            fn size_hint(&self) -> Result<usize> { Ok(0) }

            fn encode(self, _: impl BufMut) { }
        }
    };
}

empty_message!(
    /// Identifies the message as a Sync command
    Sync, b'S'
);

empty_message!(
    /// Identifies the message as a Flush command
    Flush, b'H'
);

empty_message!(
    /// Identifies the message as a termination
    Terminate, b'X'
);

#[cfg(test)]
mod test {
    use bytes::{Buf, Bytes, BytesMut};

    use super::*;
    use crate::{ErrorKind, postgres::PgType};

    fn encode<F: FrontendProtocol>(msg: F) -> Bytes {
        let mut buf = BytesMut::new();
        write(msg, &mut buf).unwrap();
        buf.freeze()
    }

    /// Split one frame, returns message type, length and body.
    fn read_frame(buf: &mut Bytes, tagged: bool) -> (Option<u8>, u32, Bytes) {
        let msgtype = tagged.then(|| buf.get_u8());
        let len = buf.get_u32();
        let body = buf.split_to(len as usize - 4);
        (msgtype, len, body)
    }

    fn get_nul_string(buf: &mut Bytes) -> String {
        let end = buf.iter().position(|e| *e == b'\0').expect("string did not nul terminated");
        let string = buf.split_to(end);
        buf.advance(1);
        String::from_utf8(string.to_vec()).unwrap()
    }

    /// Encoded frame must match the declared size.
    fn assert_frame<F: FrontendProtocol + Copy>(msg: F) {
        let size = msg.size_hint().unwrap();
        let tagged = F::MSGTYPE.is_some();
        let mut bytes = encode(msg);
        let total = bytes.len();

        let (msgtype, len, body) = read_frame(&mut bytes, tagged);
        assert_eq!(msgtype, F::MSGTYPE);
        assert_eq!(len as usize, size + 4);
        assert_eq!(body.len(), size);
        assert_eq!(total, size + if tagged { 5 } else { 4 });
        assert!(bytes.is_empty());
    }

    #[test]
    fn startup_user_only() {
        let msg = Startup { user: "alice", database: OptionalStr::NONE };
        assert_eq!(msg.size_hint().unwrap(), 4 + 5 + 6);

        let bytes = encode(msg);
        assert_eq!(&bytes[..], b"\0\0\0\x13\0\x03\0\0user\0alice\0");
        assert_frame(msg);
    }

    #[test]
    fn startup_with_database() {
        let msg = Startup { user: "alice", database: "shop".into() };
        let mut bytes = encode(msg);
        let (_, len, mut body) = read_frame(&mut bytes, false);
        assert_eq!(len, 4 + 4 + 5 + 6 + 9 + 5);

        assert_eq!(body.get_u16(), 3);
        assert_eq!(body.get_u16(), 0);
        assert_eq!(get_nul_string(&mut body), "user");
        assert_eq!(get_nul_string(&mut body), "alice");
        assert_eq!(get_nul_string(&mut body), "database");
        assert_eq!(get_nul_string(&mut body), "shop");
        assert!(body.is_empty());

        // empty database is absent
        let empty = Startup { user: "alice", database: "".into() };
        assert_eq!(encode(empty), encode(Startup { user: "alice", database: OptionalStr::NONE }));
    }

    #[test]
    fn password_message() {
        let msg = PasswordMessage { password: "md598511ceaec347a656f032c7f2a16ef17" };
        let bytes = encode(msg);
        assert_eq!(&bytes[..5], b"p\0\0\0\x28");
        assert_eq!(&bytes[5..], b"md598511ceaec347a656f032c7f2a16ef17\0");
        assert_frame(msg);
    }

    #[test]
    fn parse_message() {
        let msg = Parse { prepare_name: "s1".into(), sql: "SELECT $1", oids: &[i32::OID] };
        let bytes = encode(msg);
        assert_eq!(&bytes[..], b"P\0\0\0\x17s1\0SELECT $1\0\0\x01\0\0\0\x17");
        assert_frame(msg);

        let msg = Parse { prepare_name: OptionalStr::NONE, sql: "SELECT 1", oids: &[] };
        let bytes = encode(msg);
        assert_eq!(&bytes[..], b"P\0\0\0\x10\0SELECT 1\0\0\0");
        assert_frame(msg);
    }

    #[test]
    fn bind_empty() {
        let msg = Bind {
            portal_name: OptionalStr::NONE,
            stmt_name: OptionalStr::NONE,
            param_formats: &[],
            params: &[],
            result_formats: &[],
        };
        let bytes = encode(msg);
        assert_eq!(&bytes[..], b"B\0\0\0\x0c\0\0\0\0\0\0\0\0");
        assert_frame(msg);
    }

    #[test]
    fn bind_null_and_empty_value() {
        let msg = Bind {
            portal_name: OptionalStr::NONE,
            stmt_name: OptionalStr::NONE,
            param_formats: &[PgFormat::Text, PgFormat::Text],
            params: &[None, Some(b"")],
            result_formats: &[],
        };
        let bytes = encode(msg);
        assert_eq!(
            &bytes[5..],
            b"\0\0\0\x02\0\0\0\0\0\x02\xff\xff\xff\xff\0\0\0\0\0\0",
        );
        assert_frame(msg);
    }

    #[test]
    fn bind_values() {
        let value = 420i32.to_be_bytes();
        let msg = Bind {
            portal_name: "p1".into(),
            stmt_name: "s1".into(),
            param_formats: &[PgFormat::Binary, PgFormat::Text],
            params: &[Some(&value), Some(b"foo")],
            result_formats: &[PgFormat::Binary],
        };
        let bytes = encode(msg);
        assert_eq!(
            &bytes[..],
            b"B\0\0\0\x25p1\0s1\0\0\x02\0\x01\0\0\0\x02\0\0\0\x04\0\0\x01\xa4\0\0\0\x03foo\0\x01\0\x01",
        );
        assert_frame(msg);
    }

    #[test]
    fn bind_debug() {
        let msg = Bind {
            portal_name: OptionalStr::NONE,
            stmt_name: "s1".into(),
            param_formats: &[PgFormat::Text, PgFormat::Binary],
            params: &[None, Some(b"a\x01")],
            result_formats: &[],
        };
        assert_eq!(
            format!("{msg:?}"),
            "Bind { portal_name: None, stmt_name: \"s1\", param_formats: [Text, Binary], \
            params: [NULL, b\"a\\x01\"], result_formats: [] }",
        );
    }

    /// Declares one more byte than it writes.
    #[derive(Clone, Copy)]
    struct Undersized;

    impl FrontendProtocol for Undersized {
        const MSGTYPE: Option<u8> = Some(b'Z');

        fn size_hint(&self) -> Result<usize> { Ok(2) }

        fn encode(self, mut buf: impl BufMut) {
            buf.put_u8(0);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "size hint")]
    fn size_hint_mismatch_panics() {
        let mut buf = BytesMut::new();
        let _ = write(Undersized, &mut buf);
    }

    #[test]
    fn bind_param_count_mismatch() {
        let mut buf = BytesMut::from(&b"Q\0\0\0\x05\0"[..]);
        let msg = Bind {
            portal_name: OptionalStr::NONE,
            stmt_name: OptionalStr::NONE,
            param_formats: &[PgFormat::Binary],
            params: &[None, None],
            result_formats: &[],
        };

        let err = write(msg, &mut buf).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ParamCount(e) if e.formats == 1 && e.values == 2));
        // sink untouched
        assert_eq!(&buf[..], b"Q\0\0\0\x05\0");
    }

    #[test]
    fn nul_in_string() {
        let mut buf = BytesMut::new();

        let err = write(Query { sql: "SELECT\01" }, &mut buf).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Nul(e) if e.field == "sql" && e.position == 6));

        let err = write(Startup { user: "al\0ice", database: OptionalStr::NONE }, &mut buf).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Nul(e) if e.field == "user"));

        let msg = Bind {
            portal_name: "\0".into(),
            stmt_name: OptionalStr::NONE,
            param_formats: &[],
            params: &[],
            result_formats: &[],
        };
        let err = write(msg, &mut buf).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Nul(e) if e.field == "portal name"));

        assert!(buf.is_empty());
    }

    #[test]
    fn count_out_of_range() {
        let oids = vec![Oid::UNSPECIFIED; 65_536];
        let mut buf = BytesMut::new();
        let msg = Parse { prepare_name: OptionalStr::NONE, sql: "", oids: &oids };
        let err = write(msg, &mut buf).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::OutOfRange(e) if e.value == 65_536));
        assert!(buf.is_empty());

        assert_frame(Parse { prepare_name: OptionalStr::NONE, sql: "", oids: &oids[1..] });
    }

    #[test]
    fn extended_query_messages() {
        assert_eq!(&encode(Sync)[..], b"S\0\0\0\x04");
        assert_eq!(&encode(Flush)[..], b"H\0\0\0\x04");
        assert_eq!(&encode(Terminate)[..], b"X\0\0\0\x04");
        assert_eq!(&encode(Query { sql: "BEGIN" })[..], b"Q\0\0\0\x0aBEGIN\0");

        let msg = Execute { portal_name: OptionalStr::NONE, max_row: 0 };
        assert_eq!(&encode(msg)[..], b"E\0\0\0\x09\0\0\0\0\0");
        assert_frame(msg);

        let msg = Describe { target: Target::Statement, name: "s1".into() };
        assert_eq!(&encode(msg)[..], b"D\0\0\0\x08Ss1\0");
        assert_frame(msg);

        let msg = Close { target: Target::Portal, name: OptionalStr::NONE };
        assert_eq!(&encode(msg)[..], b"C\0\0\0\x06P\0");
        assert_frame(msg);
    }

    #[test]
    fn frames_append_in_order() {
        let mut buf = BytesMut::new();
        write(Parse { prepare_name: OptionalStr::NONE, sql: "SELECT 1", oids: &[] }, &mut buf).unwrap();
        write(Sync, &mut buf).unwrap();

        let mut bytes = buf.freeze();
        let (msgtype, _, _) = read_frame(&mut bytes, true);
        assert_eq!(msgtype, Some(b'P'));
        let (msgtype, len, _) = read_frame(&mut bytes, true);
        assert_eq!(msgtype, Some(b'S'));
        assert_eq!(len, 4);
        assert!(bytes.is_empty());
    }

    #[test]
    fn parse_round_trip() {
        let oids = [i64::OID, Oid::UNSPECIFIED, String::OID];
        let msg = Parse { prepare_name: "stmt".into(), sql: "SELECT $1, $2, $3", oids: &oids };
        let mut bytes = encode(msg);
        let (_, _, mut body) = read_frame(&mut bytes, true);

        assert_eq!(get_nul_string(&mut body), "stmt");
        assert_eq!(get_nul_string(&mut body), "SELECT $1, $2, $3");
        let decoded = (0..body.get_u16()).map(|_| Oid::new(body.get_u32())).collect::<Vec<_>>();
        assert_eq!(decoded, oids);
        assert!(body.is_empty());
    }

    #[test]
    fn bind_round_trip() {
        let param_formats = [PgFormat::Binary, PgFormat::Text, PgFormat::Text];
        let params: [Option<&[u8]>; 3] = [Some(&[0, 0, 0, 7]), None, Some(b"")];
        let result_formats = [PgFormat::Binary, PgFormat::Text];
        let msg = Bind {
            portal_name: "portal".into(),
            stmt_name: "stmt".into(),
            param_formats: &param_formats,
            params: &params,
            result_formats: &result_formats,
        };
        let mut bytes = encode(msg);
        let (_, _, mut body) = read_frame(&mut bytes, true);

        assert_eq!(get_nul_string(&mut body), "portal");
        assert_eq!(get_nul_string(&mut body), "stmt");

        let formats = (0..body.get_u16())
            .map(|_| PgFormat::from_code(body.get_u16()).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(formats, param_formats);

        let values = (0..body.get_u16())
            .map(|_| match body.get_i32() {
                -1 => None,
                len => Some(body.split_to(len as usize).to_vec()),
            })
            .collect::<Vec<_>>();
        assert_eq!(values, params.map(|e| e.map(<[u8]>::to_vec)));

        let results = (0..body.get_u16())
            .map(|_| PgFormat::from_code(body.get_u16()).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(results, result_formats);
        assert!(body.is_empty());
    }
}
