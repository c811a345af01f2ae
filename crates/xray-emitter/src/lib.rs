// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Minimal AWS X-Ray emission surface: the segment data model, the daemon UDP
//! wire format, a pluggable sampling strategy, and a UDP emitter that sends
//! `header + JSON(segment)` datagrams to a local X-Ray daemon address.
//!
//! This crate is the SDK-side contract consumed by the `xray-test-daemon`
//! fixture; it deliberately stops short of the full SDK segment lifecycle.

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod emitter;
pub mod errors;
pub mod sampling;
pub mod segment;
pub mod wire;
