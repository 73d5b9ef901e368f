//! Summary statistics for simulation samples.
//!
//! Batch runs produce long lists of per-game numbers (final scores, drive
//! counts, yards). This crate condenses them:
//!
//! - **Descriptive statistics**: count, min, max, mean, median, variance, standard deviation
//! - **Percentiles**: nearest-rank percentile values at chosen points
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation and storage
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use gridiron_stats::descriptive::DescriptiveStats;
//!
//! let scores = [3.0, 7.0, 6.0, 0.0, 9.0];
//! let stats = DescriptiveStats::new(scores).unwrap();
//! assert_eq!(stats.mean, 5.0);
//! assert_eq!(stats.median, 6.0);
//! ```
//!
//! ## Computing percentiles
//!
//! ```
//! use gridiron_stats::percentiles::Percentiles;
//!
//! let drives = [2.0, 2.0, 3.0, 4.0, 7.0];
//! let percentiles = Percentiles::new(&drives, &[50.0, 90.0]);
//! assert_eq!(percentiles.get(50.0), Some(3.0));
//! assert_eq!(percentiles.get(90.0), Some(7.0));
//! ```

pub mod descriptive;
pub mod percentiles;
