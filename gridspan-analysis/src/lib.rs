//! Analysis over facility networks and their spanning trees.
//!
//! Two baseline estimators price the naive topologies a planner would
//! reach for without optimisation — a star around the hub and a
//! sequential identifier-order build — while the statistics aggregator
//! summarises a finished tree and the comparison report puts the three
//! costs side by side. Everything here is a read-only query; the network
//! and tree are never mutated.

#![forbid(unsafe_code)]

mod baseline;
mod comparison;
mod stats;

pub use baseline::{BaselineError, sequential_network_cost, star_network_cost};
pub use comparison::{NetworkComparison, savings_percent};
pub use stats::TreeStatistics;
