/// Lifecycle of a column's node during a single UCT decision.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum NodeState {
    /// No node has been created for the column yet.
    Unexpanded,
    /// The node exists but no rollout has finished through it.
    Expanded,
    /// At least one rollout has been recorded; the node can be scored.
    Evaluated,
}

/// Represents a single node in the UCT search tree.
///
/// The root node carries no column; every other node is the column played from
/// its parent's position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchNode {
    /// The column played to reach this node. `None` for the root.
    pub column: Option<usize>,
    /// Rollouts through this node won by the searching player (`wi`).
    pub wins: u32,
    /// Rollouts routed through this node (`ni`).
    pub visits: u32,
}

impl SearchNode {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn for_column(column: usize) -> Self {
        Self {
            column: Some(column),
            ..Self::default()
        }
    }

    pub fn state(&self) -> NodeState {
        if self.visits == 0 {
            NodeState::Expanded
        } else {
            NodeState::Evaluated
        }
    }

    /// Calculates the win rate of this node.
    pub fn wins_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            (self.wins as f64) / (self.visits as f64)
        }
    }
}
