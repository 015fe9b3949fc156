use std::collections::HashMap;

use crate::game::{Board, Direction, Node, OffBoardPolicy};

/// Index of a node in an [`OutcomeGraph`].
pub type NodeId = usize;

/// Probability of a ball taking either branch of a peg.
pub const BRANCH_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: f64,
}

/// The peg/slot DAG implied by a board. Nodes live in an arena and are
/// interned, so each peg and slot appears exactly once.
#[derive(Debug, Clone)]
pub struct OutcomeGraph {
    nodes: Vec<Node>,
    ids: HashMap<Node, NodeId>,
    edges: Vec<Vec<Edge>>,
    start_nodes: Vec<NodeId>,
}

impl OutcomeGraph {
    /// Build the graph for the board's current layout.
    pub fn build(board: &Board) -> Self {
        let mut graph = OutcomeGraph {
            nodes: Vec::new(),
            ids: HashMap::new(),
            edges: Vec::new(),
            start_nodes: Vec::with_capacity(board.columns()),
        };

        for pos in board.pegs() {
            let from = graph.intern(Node::Peg(pos));
            let left = board.branch(pos, Direction::Left);
            let right = board.branch(pos, Direction::Right);

            let (targets, weight) = match (left, right) {
                (Some(l), Some(r)) => (vec![l, r], BRANCH_PROBABILITY),
                (Some(only), None) | (None, Some(only)) => {
                    let weight = match board.off_board_policy() {
                        OffBoardPolicy::Nudge => 1.0,
                        OffBoardPolicy::Lost => BRANCH_PROBABILITY,
                    };
                    (vec![only], weight)
                }
                (None, None) => (Vec::new(), 0.0),
            };

            for target in targets {
                let to = graph.intern(target);
                graph.edges[from].push(Edge { to, weight });
            }
        }

        for col in 0..board.columns() {
            let start = graph.intern(board.fall_from(0, col));
            graph.start_nodes.push(start);
        }

        log::debug!(
            "built outcome graph: {} nodes, {} edges",
            graph.nodes.len(),
            graph.edges.iter().map(Vec::len).sum::<usize>()
        );
        graph
    }

    fn intern(&mut self, node: Node) -> NodeId {
        if let Some(&id) = self.ids.get(&node) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(node);
        self.edges.push(Vec::new());
        self.ids.insert(node, id);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Node {
        self.nodes[id]
    }

    pub fn id_of(&self, node: Node) -> Option<NodeId> {
        self.ids.get(&node).copied()
    }

    pub fn edges(&self, id: NodeId) -> &[Edge] {
        &self.edges[id]
    }

    /// Outgoing edges of `node`; empty for slots and unknown nodes.
    pub fn edges_of(&self, node: Node) -> &[Edge] {
        match self.id_of(node) {
            Some(id) => &self.edges[id],
            None => &[],
        }
    }

    /// Entry node of every column, indexed by column.
    pub fn start_nodes(&self) -> &[NodeId] {
        &self.start_nodes
    }

    pub fn start_node(&self, col: usize) -> Option<Node> {
        self.start_nodes.get(col).map(|&id| self.nodes[id])
    }
}

/// Build the outcome graph of `board`.
pub fn build_graph(board: &Board) -> OutcomeGraph {
    OutcomeGraph::build(board)
}
