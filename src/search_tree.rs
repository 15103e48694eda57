use crate::rollout::Outcome;
use crate::search_node::{NodeState, SearchNode};
use ego_tree::{NodeId, NodeRef, Tree};

/// Exploration constant of the UCB1 formula.
pub const EXPLORATION_PARAMETER: f64 = std::f64::consts::SQRT_2;

/// Per-decision UCT tree rooted at the real board.
///
/// Nodes are owned by the arena; a node reaches its parent through the arena id,
/// so there is no ownership cycle. The tree lives for one move request.
#[derive(Debug)]
pub struct SearchTree {
    tree: Tree<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self {
            tree: Tree::new(SearchNode::root()),
        }
    }

    pub fn root(&self) -> &SearchNode {
        self.tree.root().value()
    }

    /// Sum of visits over all root children.
    pub fn total_visits(&self) -> u32 {
        self.root().visits
    }

    /// Creates the node for `column` under the root, or returns the existing one.
    pub fn expand(&mut self, column: usize) -> NodeId {
        if let Some(existing) = self.child_for(column) {
            return existing.id();
        }
        self.tree
            .root_mut()
            .append(SearchNode::for_column(column))
            .id()
    }

    /// Where `column` is in the node lifecycle.
    pub fn state(&self, column: usize) -> NodeState {
        self.child_for(column)
            .map_or(NodeState::Unexpanded, |node| node.value().state())
    }

    /// Adds one rollout result to `node_id` and every ancestor up to the root.
    pub fn backpropagate(&mut self, node_id: NodeId, outcome: Outcome) {
        let branch: Vec<NodeId> = match self.tree.get(node_id) {
            Some(node) => std::iter::once(node.id())
                .chain(node.ancestors().map(|ancestor| ancestor.id()))
                .collect(),
            None => return,
        };

        for id in branch {
            if let Some(mut node) = self.tree.get_mut(id) {
                let search_node = node.value();
                search_node.visits += 1;
                if outcome == Outcome::Win {
                    search_node.wins += 1;
                }
            }
        }
    }

    /// Root children in expansion order.
    pub fn children(&self) -> impl Iterator<Item = &SearchNode> {
        self.tree.root().children().map(|child| child.value())
    }

    fn child_for(&self, column: usize) -> Option<NodeRef<'_, SearchNode>> {
        self.tree
            .root()
            .children()
            .find(|child| child.value().column == Some(column))
    }
}

/// Calculates the UCB1 (Upper Confidence Bound 1) value for a node.
///
/// An unvisited node scores `+inf` so it is always preferred over scored siblings.
pub fn ucb_value(total_visits: u32, node_wins: u32, node_visits: u32) -> f64 {
    if node_visits == 0 {
        f64::INFINITY
    } else {
        ((node_wins as f64) / (node_visits as f64))
            + EXPLORATION_PARAMETER
                * f64::sqrt(f64::ln(total_visits as f64) / (node_visits as f64))
    }
}
