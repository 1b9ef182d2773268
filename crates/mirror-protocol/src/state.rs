//! Per-request lifecycle.

use std::fmt;

/// The stages a single request moves through.
///
/// ```text
/// Idle -> Encoding -> Sent -> AwaitingResponse -> Decoded
///                                              -> Failed
/// ```
///
/// `Decoded` and `Failed` are terminal and there is no retry stage: a
/// failure at any point ends that call, and recovery is the caller's
/// decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestPhase {
    /// No work started.
    Idle,

    /// The request is being encrypted or signed.
    Encoding,

    /// The body has been handed to the transport.
    Sent,

    /// Waiting for the mirror's response.
    AwaitingResponse,

    /// The response was decrypted successfully.
    Decoded,

    /// Some stage failed; terminal for this call.
    Failed,
}

impl RequestPhase {
    /// Human-readable name of the phase.
    pub fn description(&self) -> &'static str {
        match self {
            RequestPhase::Idle => "idle",
            RequestPhase::Encoding => "encoding",
            RequestPhase::Sent => "sent",
            RequestPhase::AwaitingResponse => "awaiting response",
            RequestPhase::Decoded => "decoded",
            RequestPhase::Failed => "failed",
        }
    }
}

impl fmt::Display for RequestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
