//! # probe-harness
//!
//! Sequential HTTP-contract verification against a fixed API surface.
//!
//! A run probes liveness, acquires a bearer credential for each principal,
//! then walks the check catalog group by group. Groups whose credential is
//! missing are skipped, update/delete checks whose resource was never created
//! are skipped, and every executed check records exactly one outcome.
//!
//! Requests are awaited one at a time; nothing is spawned or joined.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use probe_client::ApiClient;
//! use probe_config::ProbeConfig;
//! use probe_harness::{Harness, NullObserver};
//!
//! let config = ProbeConfig::load()?;
//! let client = ApiClient::new(&config.target)?;
//! let mut observer = NullObserver;
//! let report = Harness::new(&client, &config, &mut observer).run_sequence().await;
//! println!("{} failed", report.summary().failed);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod check;
pub mod observer;
pub mod recorder;
pub mod runner;

pub use check::{CheckResult, Checked, EndpointCheck};
pub use observer::{NullObserver, Observer};
pub use recorder::Recorder;
pub use runner::{Harness, LIVENESS_CHECK, LIVENESS_HALT};
