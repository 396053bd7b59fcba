//! Kruskal's-algorithm spanning-tree solver for facility networks.
//!
//! Sorts every feasible connection by cost and merges components through
//! a union-find, then re-roots the accepted edges at the start vertex so
//! the result matches the parent/key shape produced by the Prim solver.
//! Chiefly used to cross-check Prim's output: any two minimum spanning
//! trees of the same network have the same total cost.

#![forbid(unsafe_code)]

mod solver;

pub use solver::KruskalSolver;
