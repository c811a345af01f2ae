// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The daemon emulator: a UDP receive loop that decodes segment datagrams and
//! publishes each outcome to a bounded channel drained by test code.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use xray_emitter::emitter::{Emitter, EmitterConfig};
use xray_emitter::sampling::AlwaysSample;
use xray_emitter::segment::Segment;
use xray_emitter::wire;

use crate::errors::{DaemonError, RecvError};

/// Default port the daemon binds on loopback, matching the conventional local
/// X-Ray daemon test port.
pub const DEFAULT_DAEMON_PORT: u16 = 2010;

/// Service version label stamped into the emitter configuration the daemon
/// hands back to its caller.
const SERVICE_VERSION: &str = "TestVersion";

// Sized well above any expected segment document.
const BUFFER_SIZE: usize = 64_000;

// A full channel blocks the receive loop rather than dropping outcomes, so a
// test can never silently lose a segment.
const OUTCOME_CHANNEL_BUFFER_SIZE: usize = 200;

/// How long [`DaemonHandle::recv`] waits for an outcome before giving up.
pub const RECV_TIMEOUT: Duration = Duration::from_millis(100);

/// One result of the receive loop: a decoded segment, or the read/decode
/// error that took its place.
type Outcome = Result<Segment, RecvError>;

/// The receive-loop half of the fixture. Owns the UDP socket; consumed by
/// [`TestDaemon::run`], which is meant to be spawned on its own task.
pub struct TestDaemon {
    socket: UdpSocket,
    outcome_tx: Sender<Outcome>,
    cancel_token: CancellationToken,
}

/// The test-driver half of the fixture: drains outcomes and signals shutdown.
pub struct DaemonHandle {
    daemon_addr: SocketAddr,
    outcome_rx: Receiver<Outcome>,
    cancel_token: CancellationToken,
}

impl TestDaemon {
    /// Binds the daemon on `127.0.0.1:2010` and returns it together with its
    /// handle and an emitter already pointed at the bound address.
    pub async fn new() -> Result<(TestDaemon, DaemonHandle, Emitter), DaemonError> {
        Self::bind(SocketAddr::from(([127, 0, 0, 1], DEFAULT_DAEMON_PORT))).await
    }

    /// Binds the daemon on an explicit address. Tests that run concurrently
    /// should bind port 0 and read the effective address off the handle.
    ///
    /// The returned emitter uses the [`AlwaysSample`] strategy, so nothing a
    /// test emits is ever dropped by a sampling decision. If emitter setup
    /// fails after the bind succeeded, the daemon socket is dropped along
    /// with the error.
    pub async fn bind(addr: SocketAddr) -> Result<(TestDaemon, DaemonHandle, Emitter), DaemonError> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|source| DaemonError::Bind { addr, source })?;
        let daemon_addr = socket.local_addr()?;
        debug!("Test daemon listening on {}", daemon_addr);

        let emitter = Emitter::connect(EmitterConfig {
            daemon_addr: daemon_addr.to_string(),
            service_version: SERVICE_VERSION.to_string(),
            sampling_strategy: Arc::new(AlwaysSample),
        })
        .await?;

        let (outcome_tx, outcome_rx) = mpsc::channel(OUTCOME_CHANNEL_BUFFER_SIZE);
        let cancel_token = CancellationToken::new();

        let daemon = TestDaemon {
            socket,
            outcome_tx,
            cancel_token: cancel_token.clone(),
        };
        let handle = DaemonHandle {
            daemon_addr,
            outcome_rx,
            cancel_token,
        };

        Ok((daemon, handle, emitter))
    }

    /// Receive loop. Runs until the handle stops it or is dropped.
    ///
    /// Read and decode errors become outcomes on the channel; they never
    /// terminate the loop. Each iteration is an independent attempt.
    pub async fn run(self) {
        let mut buf = [0u8; BUFFER_SIZE];
        loop {
            let read = tokio::select! {
                _ = self.cancel_token.cancelled() => break,
                read = self.socket.recv_from(&mut buf) => read,
            };

            let outcome = match read {
                Ok((amt, src)) => {
                    trace!("Received {} byte datagram from {}", amt, src);
                    decode_datagram(&buf[..amt])
                }
                Err(e) => Err(RecvError::Read(e)),
            };

            // A closed channel means the handle is gone and nobody will ever
            // drain another outcome.
            if self.outcome_tx.send(outcome).await.is_err() {
                break;
            }
        }
        debug!("Test daemon receive loop stopped");
    }
}

/// Strips the protocol header and decodes the remaining bytes as a segment.
/// Decoded segments are always published as sampled, normalizing test
/// expectations regardless of the flag on the wire.
fn decode_datagram(datagram: &[u8]) -> Outcome {
    let payload = wire::payload(datagram);
    match serde_json::from_slice::<Segment>(payload) {
        Ok(mut segment) => {
            segment.sampled = true;
            Ok(segment)
        }
        Err(e) => {
            debug!("Failed to decode segment payload: {}", e);
            Err(RecvError::Decode(e))
        }
    }
}

impl DaemonHandle {
    /// The address the daemon is listening on.
    pub fn daemon_addr(&self) -> SocketAddr {
        self.daemon_addr
    }

    /// Waits up to [`RECV_TIMEOUT`] for the next outcome.
    ///
    /// Outcomes are delivered in arrival order. A queued read or decode error
    /// is returned as-is, so callers distinguish a loop-side failure from a
    /// quiet socket by matching on the error variant.
    pub async fn recv(&mut self) -> Result<Segment, RecvError> {
        match timeout(RECV_TIMEOUT, self.outcome_rx.recv()).await {
            Ok(Some(outcome)) => outcome,
            Ok(None) => Err(RecvError::Closed),
            Err(_) => Err(RecvError::Timeout),
        }
    }

    /// Signals the receive loop to stop. Idempotent and fire-and-forget: the
    /// queue is not drained and the loop task is not joined.
    pub fn stop(&self) {
        self.cancel_token.cancel();
    }
}
