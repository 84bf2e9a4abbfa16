// crates/ttt-server/src/client.rs

use anyhow::{bail, Result};
use bytes::{Buf, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tracing::{debug, error, info, warn};
use ttt_core::OutputMessage;
use ttt_protocol::text_codec;
use ttt_protocol::wire_types::MAX_LINE_LEN;

use crate::types::{ClientId, ClientRegistry, GameRequest, GameTx, OutboundRx};

/// Run the client I/O loop for a single connection.
///
/// Whatever ends the connection, the client is removed from the registry
/// and the game loop is told so its lobby can be closed.
pub async fn run_client(
    client_id: ClientId,
    stream: TcpStream,
    game_tx: GameTx,
    out_rx: OutboundRx,
    clients: ClientRegistry,
) -> Result<()> {
    stream.set_nodelay(true)?;

    // Split stream
    let (read_stream, write_stream) = stream.into_split();

    // Writer task: consume OutputMessages and write lines
    let writer_handle = tokio::spawn(run_writer(client_id, write_stream, out_rx));

    let result = run_reader(client_id, read_stream, &game_tx).await;

    // Remove client from registry
    {
        let mut guard = clients.write().await;
        guard.remove(&client_id);
    }

    if game_tx
        .send(GameRequest::Disconnected { client_id })
        .is_err()
    {
        warn!(client = %client_id, "game channel closed before disconnect was reported");
    }

    // Registry entry is gone, so the writer drains what is queued and stops.
    if let Err(e) = writer_handle.await {
        error!(client = %client_id, "writer task failed: {}", e);
    }

    result
}

/// Frame newline-terminated lines, parse them and forward commands.
///
/// Malformed lines are dropped without a reply. Returns `Ok` on EOF.
async fn run_reader(
    client_id: ClientId,
    mut read_stream: OwnedReadHalf,
    game_tx: &GameTx,
) -> Result<()> {
    let mut buffer = BytesMut::with_capacity(MAX_LINE_LEN);

    loop {
        // Process complete lines
        while let Some(newline_pos) = buffer.iter().position(|&b| b == b'\n') {
            let line = buffer.split_to(newline_pos + 1);
            let line_str = String::from_utf8_lossy(&line);
            let line_str = line_str.trim();

            if line_str.is_empty() {
                continue;
            }

            debug!(client = %client_id, line = line_str, "recv");

            match text_codec::parse_input_line(line_str) {
                Some(msg) => {
                    if game_tx.send(GameRequest::Message { client_id, msg }).is_err() {
                        bail!("game channel closed");
                    }
                }
                None => debug!(client = %client_id, line = line_str, "ignoring malformed line"),
            }
        }

        if buffer.len() > MAX_LINE_LEN {
            bail!("line exceeds {} bytes", MAX_LINE_LEN);
        }

        // EOF - client disconnected
        if read_stream.read_buf(&mut buffer).await? == 0 {
            if buffer.has_remaining() {
                debug!(client = %client_id, "discarding unterminated trailing data");
            }
            info!(client = %client_id, "connection closed by peer");
            return Ok(());
        }
    }
}

async fn run_writer(client_id: ClientId, mut write_stream: OwnedWriteHalf, mut out_rx: OutboundRx) {
    while let Some(msg) = out_rx.recv().await {
        if let Err(e) = write_line(&mut write_stream, &msg).await {
            error!(client = %client_id, "write error: {}", e);
            break;
        }
        debug!(client = %client_id, ?msg, "sent");
    }
}

async fn write_line(stream: &mut OwnedWriteHalf, msg: &OutputMessage) -> Result<()> {
    let data = format!("{}\n", text_codec::format_output(msg));

    stream.write_all(data.as_bytes()).await?;
    stream.flush().await?;

    Ok(())
}
