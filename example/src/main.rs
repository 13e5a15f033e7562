use bytes::{Bytes, BytesMut};
use tracing::trace_span;
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use postro_frontend::Result;

mod handshake;
mod query;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::Registry::default()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mut buf = BytesMut::new();

    trace_span!("handshake").in_scope(|| handshake::main(&mut buf))?;
    trace_span!("query").in_scope(|| query::main(&mut buf))?;

    tracing::info!("{} bytes ready to send", buf.len());

    Ok(())
}

/// Log each frame in `buf` starting at `offset`.
fn dump(buf: &[u8], mut offset: usize, tagged: bool) {
    while offset < buf.len() {
        let start = offset;
        if tagged {
            offset += 1;
        }
        let len = u32::from_be_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]]);
        offset += len as usize;

        let frame = Bytes::copy_from_slice(&buf[start..offset]);
        let msgtype = if tagged { buf[start] as char } else { '-' };
        tracing::info!("[{msgtype}] {frame:?}");
    }
}
