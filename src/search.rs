use crate::board::{Board, Player};
use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::random::RandomGenerator;
use crate::report::{ColumnStatistic, best_statistic};
use crate::rollout::{Outcome, RolloutPolicy};
use crate::search_tree::{SearchTree, ucb_value};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// The move-selection strategies the engine knows.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Strategy {
    /// Uniform random choice, taking an immediate win when one exists.
    Ur,
    /// Pure Monte Carlo game search: flat rollouts scored by win ratio.
    Pmcgs,
    /// Upper Confidence bounds applied to Trees.
    Uct,
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "UR" => Ok(Strategy::Ur),
            "PMCGS" => Ok(Strategy::Pmcgs),
            "UCT" => Ok(Strategy::Uct),
            other => Err(Error::UnknownStrategy {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Ur => "UR",
            Strategy::Pmcgs => "PMCGS",
            Strategy::Uct => "UCT",
        };
        f.write_str(name)
    }
}

/// The result of one move request.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveDecision {
    pub strategy: Strategy,
    /// Selected 0-based column; `None` when the board has no legal column.
    pub column: Option<usize>,
    /// Per-column statistics in ascending column order. Empty for UR.
    pub statistics: Vec<ColumnStatistic>,
}

impl MoveDecision {
    fn no_move(strategy: Strategy) -> Self {
        Self {
            strategy,
            column: None,
            statistics: Vec::new(),
        }
    }

    /// The statistic of the selected column, if the strategy produced one.
    pub fn selected_statistic(&self) -> Option<&ColumnStatistic> {
        let column = self.column?;
        self.statistics.iter().find(|s| s.column == column)
    }

    /// 1-based selected column as shown to users.
    pub fn display_column(&self) -> Option<usize> {
        self.column.map(|column| column + 1)
    }
}

/// Chooses moves for one player on one board.
///
/// It holds the real board, the player to move, the random number generator, and
/// the configuration for the search. Every request works on copies of the board,
/// and UCT rebuilds its tree from scratch each time.
pub struct SearchEngine<K: RandomGenerator> {
    board: Board,
    player: Player,
    random: K,
    config: SearchConfig,
}

/// A builder for creating instances of `SearchEngine`.
pub struct SearchEngineBuilder<K: RandomGenerator> {
    board: Board,
    player: Player,
    random_generator: K,
    config: SearchConfig,
}

impl<K: RandomGenerator> SearchEngineBuilder<K> {
    /// Creates a new builder for `player` deciding on `board`.
    pub fn new(board: Board, player: Player) -> Self {
        Self {
            board,
            player,
            random_generator: K::default(),
            config: SearchConfig::default(),
        }
    }

    /// Sets the random number generator used for rollouts and random moves.
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the number of rollouts per legal column.
    pub fn with_simulations(mut self, simulations: u32) -> Self {
        self.config.simulations = simulations;
        self
    }

    pub fn build(self) -> SearchEngine<K> {
        SearchEngine::new(self.board, self.player, self.random_generator, self.config)
    }
}

impl<K: RandomGenerator> SearchEngine<K> {
    /// Returns a new builder for `SearchEngine`.
    pub fn builder(board: Board, player: Player) -> SearchEngineBuilder<K> {
        SearchEngineBuilder::new(board, player)
    }

    /// Creates a new engine. Prefer `SearchEngine::builder()`.
    pub fn new(board: Board, player: Player, rg: K, config: SearchConfig) -> Self {
        Self {
            board,
            player,
            random: rg,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs `strategy` against the current board.
    pub fn select_move(&mut self, strategy: Strategy) -> Result<MoveDecision> {
        let decision = match strategy {
            Strategy::Ur => MoveDecision {
                strategy,
                column: self.uniform_random()?,
                statistics: Vec::new(),
            },
            Strategy::Pmcgs => self.pmcgs()?,
            Strategy::Uct => self.uct()?,
        };
        debug!(
            %strategy,
            player = %self.player,
            column = ?decision.display_column(),
            "move selected"
        );
        Ok(decision)
    }

    /// Takes the lowest column that wins on the spot, else a uniformly random legal column.
    pub fn uniform_random(&mut self) -> Result<Option<usize>> {
        let columns = self.board.legal_columns();
        for &column in &columns {
            if self.board.apply_move(column, self.player)?.check_win(self.player) {
                trace!(column, "immediate win found");
                return Ok(Some(column));
            }
        }
        Ok(self.random.choose(&columns).copied())
    }

    /// Scores every legal column by the win ratio of flat random rollouts.
    pub fn pmcgs(&mut self) -> Result<MoveDecision> {
        self.config.validate()?;
        let columns = self.board.legal_columns();
        if columns.is_empty() {
            return Ok(MoveDecision::no_move(Strategy::Pmcgs));
        }

        let mut statistics = Vec::with_capacity(columns.len());
        for column in columns {
            let (wins, visits) = self.simulate_column(column)?;
            let score = (wins as f64) / (visits as f64);
            trace!(column, wins, visits, score, "pmcgs column scored");
            statistics.push(ColumnStatistic {
                column,
                wins,
                visits,
                score,
            });
        }

        Ok(Self::decide(Strategy::Pmcgs, statistics))
    }

    /// Scores every legal column by its UCB1 value over a per-call search tree.
    ///
    /// Every column gets the same number of rollouts and is scored against the
    /// root's final total, so the exploration term is equal across columns and
    /// the choice matches PMCGS under the same seed.
    pub fn uct(&mut self) -> Result<MoveDecision> {
        self.config.validate()?;
        let columns = self.board.legal_columns();
        if columns.is_empty() {
            return Ok(MoveDecision::no_move(Strategy::Uct));
        }

        let tree = self.build_uct_tree(&columns)?;
        let total_visits = tree.total_visits();
        let statistics: Vec<ColumnStatistic> = tree
            .children()
            .filter_map(|node| {
                let column = node.column?;
                let score = ucb_value(total_visits, node.wins, node.visits);
                trace!(
                    column,
                    wins = node.wins,
                    visits = node.visits,
                    score,
                    "uct column scored"
                );
                Some(ColumnStatistic {
                    column,
                    wins: node.wins,
                    visits: node.visits,
                    score,
                })
            })
            .collect();

        Ok(Self::decide(Strategy::Uct, statistics))
    }

    /// Expands one root child per column and routes its rollouts through it.
    fn build_uct_tree(&mut self, columns: &[usize]) -> Result<SearchTree> {
        let rollout = self.rollout_policy();
        let mut tree = SearchTree::new();
        for &column in columns {
            let board = self.board.apply_move(column, self.player)?;
            let node_id = tree.expand(column);
            for _ in 0..self.config.simulations {
                let outcome = rollout.run(&board, self.player.opponent(), &mut self.random)?;
                tree.backpropagate(node_id, outcome);
            }
        }
        Ok(tree)
    }

    fn simulate_column(&mut self, column: usize) -> Result<(u32, u32)> {
        let rollout = self.rollout_policy();
        let board = self.board.apply_move(column, self.player)?;
        let mut wins = 0;
        let mut visits = 0;
        for _ in 0..self.config.simulations {
            if rollout.run(&board, self.player.opponent(), &mut self.random)? == Outcome::Win {
                wins += 1;
            }
            visits += 1;
        }
        Ok((wins, visits))
    }

    fn rollout_policy(&self) -> RolloutPolicy {
        RolloutPolicy::new(self.player, self.config.max_rollout_plies)
    }

    fn decide(strategy: Strategy, statistics: Vec<ColumnStatistic>) -> MoveDecision {
        let column = best_statistic(&statistics).map(|best| best.column);
        MoveDecision {
            strategy,
            column,
            statistics,
        }
    }
}
