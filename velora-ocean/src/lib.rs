//! Core types and backend client for Velora ocean analysis answers.
//!
//! This crate provides:
//! - `analysis`: the `AnalysisResult` answer shape and its nested groups
//! - `reply`: decoding of `POST /query` bodies into answers or rejections
//! - `backend`: the `AnalysisBackend` trait and its transport error type
//! - `config`: backend base-URL resolution
//! - `client`: a reqwest implementation of the backend (feature `api`)

pub mod analysis;
pub mod backend;
#[cfg(feature = "api")]
pub mod client;
pub mod config;
pub mod parameter;
pub mod region;
pub mod reply;

pub use analysis::{
    AnalysisResult, Insight, InsightSource, ParsedQuery, RawRecord, Risk, RiskFactors, Stats,
    Trend, TrendDirection, YearValue,
};
pub use backend::{AnalysisBackend, BackendError};
pub use config::ApiConfig;
pub use parameter::Parameter;
pub use reply::{QueryReply, Rejection};
