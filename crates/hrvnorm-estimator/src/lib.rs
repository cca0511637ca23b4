//! Percentile estimation against normative HRV reference data.
//!
//! This crate turns a measured heart-rate-variability value into
//! population context, using the cohort table from
//! [`hrvnorm_reference`]:
//!
//! - [`percentile`]: where a measured value ranks within its cohort,
//!   with a 95% confidence interval and a sample-size grade
//! - [`range`]: the cohort's normative 5th-95th percentile band
//!
//! Every operation is a pure function of its inputs and the immutable
//! reference table; results for identical inputs are bit-identical.
//!
//! # Examples
//!
//! ## Ranking a measurement
//!
//! ```
//! use hrvnorm_estimator::{Reliability, estimate};
//!
//! let result = estimate(30, "male", "sdNN", 50.0).unwrap();
//! assert_eq!(format!("{:.1}", result.percentile), "50.2");
//! assert_eq!(result.n, 330);
//! assert_eq!(result.reliability, Reliability::High);
//! ```
//!
//! ## Reading the normative band
//!
//! ```
//! use hrvnorm_estimator::normative_range;
//!
//! let range = normative_range(40, "female", "RMSSD").unwrap();
//! assert_eq!(format!("{:.1}", range.p5), "5.9");
//! assert_eq!(format!("{:.1}", range.p95), "55.5");
//! ```

pub use self::{percentile::*, range::*};
pub use hrvnorm_reference::NormsError;

pub mod percentile;
pub mod range;
