// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::net::AddrParseError;

use thiserror::Error;

/// Failures while building an [`Emitter`](crate::emitter::Emitter) from its
/// configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid daemon address '{addr}': {source}")]
    InvalidDaemonAddr {
        addr: String,
        #[source]
        source: AddrParseError,
    },
    #[error("failed to open emitter socket: {0}")]
    Socket(#[from] io::Error),
}

/// Failures while emitting a single segment datagram.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to encode segment: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to send segment datagram: {0}")]
    Send(#[from] io::Error),
}
