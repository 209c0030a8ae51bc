//! # load_srv - HTTP API for the Service Load Calculator
//!
//! A thin axum boundary over the [`load_core`] calculation engine. The
//! engine never sees the wire format: [`wire`] owns the two request adapters
//! (direct units list and the legacy flat indexed keys) and the frozen
//! response labels, [`api`] owns routing and status-code mapping.

pub mod api;
pub mod wire;
