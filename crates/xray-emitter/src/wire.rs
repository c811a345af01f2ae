// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The X-Ray daemon UDP wire format: a fixed protocol header followed by a
//! JSON-encoded segment document.

use crate::segment::Segment;

/// The protocol header every daemon datagram starts with. Its length is the
/// contract the daemon relies on when slicing off the payload.
pub const HEADER: &[u8] = b"{\"format\": \"json\", \"version\": 1}\n";

/// Encodes a segment into a complete daemon datagram.
pub fn encode(segment: &Segment) -> Result<Vec<u8>, serde_json::Error> {
    let mut datagram = HEADER.to_vec();
    serde_json::to_writer(&mut datagram, segment)?;
    Ok(datagram)
}

/// Returns the JSON payload of a datagram, past the protocol header.
///
/// The header bytes are not validated; a datagram shorter than the header
/// yields an empty payload, which then fails JSON decoding downstream.
pub fn payload(datagram: &[u8]) -> &[u8] {
    datagram.get(HEADER.len()..).unwrap_or_default()
}
