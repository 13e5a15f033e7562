use bytes::BytesMut;
use postro_frontend::{
    OptionalStr, PgFormat, PgType, Result,
    postgres::frontend::{self, Bind, Describe, Execute, Parse, Sync, Target},
};

pub fn main(buf: &mut BytesMut) -> Result<()> {
    let offset = buf.len();

    frontend::write(Parse {
        prepare_name: "example".into(),
        sql: "SELECT $1::int4, $2::text",
        oids: &[i32::OID, String::OID],
    }, buf)?;

    let id = 420i32.to_be_bytes();
    frontend::write(Bind {
        portal_name: OptionalStr::NONE,
        stmt_name: "example".into(),
        param_formats: &[PgFormat::Binary, PgFormat::Text],
        params: &[Some(&id), None],
        result_formats: &[PgFormat::Binary],
    }, buf)?;

    frontend::write(Describe { target: Target::Portal, name: OptionalStr::NONE }, buf)?;
    frontend::write(Execute { portal_name: OptionalStr::NONE, max_row: 0 }, buf)?;
    frontend::write(Sync, buf)?;

    crate::dump(buf, offset, true);

    // rejected, nothing written
    let len = buf.len();
    let err = frontend::write(Bind {
        portal_name: OptionalStr::NONE,
        stmt_name: "example".into(),
        param_formats: &[PgFormat::Binary],
        params: &[Some(&id), None],
        result_formats: &[],
    }, buf).unwrap_err();
    tracing::warn!("{err}");
    assert_eq!(len, buf.len());

    Ok(())
}
