// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::net::SocketAddr;

use thiserror::Error;
use xray_emitter::errors::ConfigError;

/// Failures constructing a [`TestDaemon`](crate::daemon::TestDaemon).
///
/// Construction fails fast: on any error after a successful bind the daemon
/// socket is dropped, so a half-constructed daemon never leaks its port.
#[derive(Debug, Error)]
pub enum DaemonError {
    #[error("failed to bind daemon socket on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("failed to query daemon socket address: {0}")]
    Socket(#[from] io::Error),
    #[error("failed to configure emitter against daemon: {0}")]
    Config(#[from] ConfigError),
}

/// Failures surfaced by [`DaemonHandle::recv`](crate::daemon::DaemonHandle::recv).
///
/// `Read` and `Decode` originate in the receive loop and are passed through
/// the outcome channel unchanged; `Timeout` and `Closed` are produced by
/// `recv` itself.
#[derive(Debug, Error)]
pub enum RecvError {
    #[error("timed out waiting for a segment")]
    Timeout,
    #[error("daemon receive loop has shut down")]
    Closed,
    #[error("failed to read from daemon socket: {0}")]
    Read(#[from] io::Error),
    #[error("failed to decode segment payload: {0}")]
    Decode(#[from] serde_json::Error),
}
