// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! UDP emitter that sends segment datagrams to an X-Ray daemon address.
//!
//! Configuration is an explicit object handed to [`Emitter::connect`] rather
//! than process-global state, so concurrent tests can each target their own
//! daemon.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::UdpSocket;
use tracing::{debug, trace};

use crate::errors::{ConfigError, EmitError};
use crate::sampling::{SamplingDecision, SamplingRequest, SamplingStrategy};
use crate::segment::Segment;
use crate::wire;

/// Configuration for an [`Emitter`].
#[derive(Clone)]
pub struct EmitterConfig {
    /// `host:port` of the daemon the emitter sends to.
    pub daemon_addr: String,
    /// Version label reported for the emitting service.
    pub service_version: String,
    /// Strategy consulted for sampling decisions.
    pub sampling_strategy: Arc<dyn SamplingStrategy + Send + Sync>,
}

/// Sends `header + JSON(segment)` datagrams over a connected UDP socket.
pub struct Emitter {
    socket: UdpSocket,
    service_version: String,
    sampling_strategy: Arc<dyn SamplingStrategy + Send + Sync>,
}

impl Emitter {
    /// Resolves the configured daemon address and opens a connected UDP
    /// socket on an ephemeral local port.
    pub async fn connect(config: EmitterConfig) -> Result<Emitter, ConfigError> {
        let daemon_addr: SocketAddr =
            config
                .daemon_addr
                .parse()
                .map_err(|source| ConfigError::InvalidDaemonAddr {
                    addr: config.daemon_addr.clone(),
                    source,
                })?;

        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        socket.connect(daemon_addr).await?;
        debug!("Emitter connected to daemon at {}", daemon_addr);

        Ok(Emitter {
            socket,
            service_version: config.service_version,
            sampling_strategy: config.sampling_strategy,
        })
    }

    /// Encodes and sends one segment datagram.
    pub async fn emit(&self, segment: &Segment) -> Result<(), EmitError> {
        let datagram = wire::encode(segment)?;
        self.socket.send(&datagram).await?;
        trace!("Emitted segment '{}' ({} bytes)", segment.id, datagram.len());
        Ok(())
    }

    /// Consults the configured sampling strategy.
    pub fn sampling_decision(&self, request: &SamplingRequest) -> SamplingDecision {
        self.sampling_strategy.should_trace(request)
    }

    pub fn service_version(&self) -> &str {
        &self.service_version
    }
}
