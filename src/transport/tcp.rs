use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::net::tcp::OwnedReadHalf;
use tokio::spawn;
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use crate::broker::HandshakeEngine;
use crate::config::BrokerSettings;
use crate::transport::framing::LineFramer;
use crate::transport::message::{BrokerFrame, ClientFrame};
use crate::utils::error::BrokerError;

/// Binds the listening endpoint and serves peers one at a time.
///
/// Binding is the only fatal step: if the endpoint cannot be acquired the
/// error propagates and the process never enters the read loop. From then
/// on every failure is logged and survived. Connections are accepted
/// sequentially; the handshake protocol is a single-peer conversation and
/// the engine is driven by one session at a time.
pub async fn start_tcp_server(
    addr: &str,
    engine: Arc<Mutex<HandshakeEngine>>,
    settings: BrokerSettings,
) -> Result<(), BrokerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| BrokerError::TransportOpen {
            addr: addr.to_string(),
            source,
        })?;

    info!("broker listening on {addr}");

    loop {
        let (stream, peer_addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("accept failed: {e}");
                tokio::time::sleep(Duration::from_millis(settings.error_pause_ms)).await;
                continue;
            }
        };

        let peer_id = format!("peer-{}", uuid::Uuid::new_v4());
        info!("{peer_id} connected from {peer_addr}");

        run_session(stream, &peer_id, engine.clone(), &settings).await;

        info!("{peer_id} disconnected");
    }
}

/// Drives one connected peer until it hangs up.
///
/// Acknowledgments flow through a channel to a spawned writer task that
/// owns the write half, so the engine never touches the socket directly.
/// Both stream halves are released when this returns, whichever way the
/// loop ends.
async fn run_session(
    stream: tokio::net::TcpStream,
    peer_id: &str,
    engine: Arc<Mutex<HandshakeEngine>>,
    settings: &BrokerSettings,
) {
    let (read_half, write_half) = stream.into_split();

    let (tx, mut rx) = mpsc::unbounded_channel::<BrokerFrame>();
    engine.lock().unwrap().attach_writer(tx);

    // Forward acknowledgments from the engine to the peer. A failed write
    // is logged and dropped; the peer retransmits anything it misses.
    let writer_peer = peer_id.to_string();
    let writer = spawn(async move {
        let mut write_half = write_half;
        while let Some(frame) = rx.recv().await {
            if let Err(e) = write_half.write_all(frame.encode().as_bytes()).await {
                warn!("failed to send {frame} to {writer_peer}: {e}");
            } else {
                debug!("{writer_peer} tx: {frame}");
            }
        }
    });

    read_loop(read_half, peer_id, &engine, settings).await;

    // Closes the channel so the writer task drains and drops the write half.
    engine.lock().unwrap().detach_writer();
    let _ = writer.await;
}

async fn read_loop(
    mut read_half: OwnedReadHalf,
    peer_id: &str,
    engine: &Arc<Mutex<HandshakeEngine>>,
    settings: &BrokerSettings,
) {
    let mut framer = LineFramer::new();
    let mut buf = [0u8; 1024];
    let read_timeout = Duration::from_millis(settings.read_timeout_ms);

    loop {
        match tokio::time::timeout(read_timeout, read_half.read(&mut buf)).await {
            // No bytes arrived inside the timeout window; try again.
            Err(_elapsed) => continue,
            // Peer closed the connection.
            Ok(Ok(0)) => return,
            Ok(Ok(n)) => {
                framer.extend(&buf[..n]);
                while let Some(frame) = framer.next_frame() {
                    debug!("{peer_id} rx: {frame}");
                    match ClientFrame::parse(&frame) {
                        Ok(command) => engine.lock().unwrap().handle(command),
                        Err(e) => trace!("{peer_id} ignoring frame: {e}"),
                    }
                }
            }
            Ok(Err(e)) => {
                warn!("{peer_id} {}", BrokerError::TransportIo(e));
                tokio::time::sleep(Duration::from_millis(settings.error_pause_ms)).await;
            }
        }
    }
}
