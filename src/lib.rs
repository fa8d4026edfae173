//! Black-box probe suite for a remote video-upload HTTP API.
//!
//! The binary runs a fixed, ordered set of probes against the service's
//! `/api` root and prints a PASS/FAIL summary. Nothing here implements the
//! service itself; the remote API is only ever observed from the outside.

pub mod config;
pub mod probe;
pub mod runner;
