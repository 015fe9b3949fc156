mod agent;
pub mod expected_value;
pub mod graph;
mod random;

pub use agent::{Agent, ExpectedValueAgent};
pub use expected_value::{best_column, choose_best_column, compute_expected_values, node_values};
pub use graph::{build_graph, Edge, NodeId, OutcomeGraph, BRANCH_PROBABILITY};
pub use random::RandomAgent;
