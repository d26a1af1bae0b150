//! One-shot delivery of encoded messages to the relay socket.
//!
//! The transport never inspects message bytes. It opens one connection,
//! sends each buffer as an atomic unit (one datagram, or one contiguous
//! write in stream mode), and closes. There is no handshake, no response,
//! and no retry; failures carry the operation and socket path so the caller
//! can decide what to do.

use std::path::Path;

use bytes::Bytes;
use tempfile::TempDir;
use tokio::io::AsyncWriteExt;
use tokio::net::{UnixDatagram, UnixStream};
use tracing::{debug, trace};

use crate::config::SocketMode;
use crate::error::{ClientError, Result};

/// Deliver `msgs` to the relay at `socket_path`, in order, over one
/// connection.
///
/// In datagram mode the client binds its own socket to a temporary path
/// first; the temporary directory holding it is removed on every exit path,
/// success or failure.
pub async fn send(socket_path: &Path, mode: SocketMode, msgs: &[Bytes]) -> Result<()> {
    match mode {
        SocketMode::Datagram => send_datagrams(socket_path, msgs).await,
        SocketMode::Stream => send_stream(socket_path, msgs).await,
    }
}

async fn send_datagrams(socket_path: &Path, msgs: &[Bytes]) -> Result<()> {
    // Binding to a real path (rather than an unnamed socket) lets the relay
    // identify the sender; some peers refuse unbound datagram sockets.
    // TempDir removes the socket file with the directory when dropped.
    let dir = tempfile::Builder::new()
        .prefix("courier-client")
        .tempdir()
        .map_err(|e| ClientError::transport("create client socket dir", socket_path, e))?;
    let client_path = dir.path().join("client.sock");

    let sock = UnixDatagram::bind(&client_path)
        .map_err(|e| ClientError::transport("bind client socket", client_path.clone(), e))?;
    sock.connect(socket_path)
        .map_err(|e| ClientError::transport("connect", socket_path, e))?;
    debug!(
        relay = %socket_path.display(),
        client = %client_path.display(),
        "connected datagram socket"
    );

    for msg in msgs {
        let sent = sock
            .send(msg)
            .await
            .map_err(|e| ClientError::transport("send datagram", socket_path, e))?;
        trace!(bytes = sent, "sent datagram");
    }

    drop(sock);
    cleanup(dir, socket_path)
}

async fn send_stream(socket_path: &Path, msgs: &[Bytes]) -> Result<()> {
    let mut stream = UnixStream::connect(socket_path)
        .await
        .map_err(|e| ClientError::transport("connect", socket_path, e))?;
    debug!(relay = %socket_path.display(), "connected stream socket");

    // No framing layer on top: the relay reframes the byte stream using
    // each message's leading size field.
    for msg in msgs {
        stream
            .write_all(msg)
            .await
            .map_err(|e| ClientError::transport("write", socket_path, e))?;
        trace!(bytes = msg.len(), "wrote message");
    }

    stream
        .shutdown()
        .await
        .map_err(|e| ClientError::transport("shutdown", socket_path, e))?;
    Ok(())
}

fn cleanup(dir: TempDir, socket_path: &Path) -> Result<()> {
    // Dropping the TempDir would also delete it, but closing explicitly
    // surfaces the error instead of swallowing it.
    dir.close()
        .map_err(|e| ClientError::transport("remove client socket dir", socket_path, e))
}
