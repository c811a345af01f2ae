// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! In-process X-Ray daemon emulator for tests.
//!
//! Binds a local UDP socket, decodes each incoming datagram as an X-Ray
//! segment document after stripping the protocol header, and hands every
//! outcome (segment or error) to test code through a bounded channel with a
//! timeout-bounded receive. This is a fixture for exercising an emission
//! path end to end, not a production daemon.

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod daemon;
pub mod errors;

pub use daemon::{DaemonHandle, TestDaemon, DEFAULT_DAEMON_PORT};
pub use errors::{DaemonError, RecvError};
