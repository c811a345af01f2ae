// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Pluggable sampling decisions for the emission path.

/// The request attributes a strategy may inspect when deciding whether to
/// record a trace. All fields are optional; strategies must tolerate absent
/// values.
#[derive(Debug, Clone, Default)]
pub struct SamplingRequest {
    pub host: Option<String>,
    pub method: Option<String>,
    pub url: Option<String>,
    pub service_name: Option<String>,
}

/// The outcome of a sampling decision.
#[derive(Debug, Clone, Default)]
pub struct SamplingDecision {
    pub sample: bool,
    /// Name of the rule that matched, when the strategy tracks rules.
    pub rule: Option<String>,
}

/// Decides whether a given trace request should be recorded.
pub trait SamplingStrategy {
    fn should_trace(&self, request: &SamplingRequest) -> SamplingDecision;
}

/// Deterministic strategy that records every trace. Installed by the test
/// daemon so test expectations never depend on sampling state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysSample;

impl SamplingStrategy for AlwaysSample {
    fn should_trace(&self, _request: &SamplingRequest) -> SamplingDecision {
        SamplingDecision {
            sample: true,
            rule: None,
        }
    }
}
