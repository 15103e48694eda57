//! Move selection from per-column statistics, and the text report built from it.

use crate::error::{Error, Result};
use crate::search::{MoveDecision, Strategy};
use std::fmt;
use std::str::FromStr;

/// Statistics gathered for one legal column during a decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStatistic {
    /// 0-based column index.
    pub column: usize,
    /// Rollouts won by the searching player (`wi`).
    pub wins: u32,
    /// Rollouts run (`ni`).
    pub visits: u32,
    /// Win ratio for PMCGS, UCB value for UCT.
    pub score: f64,
}

impl ColumnStatistic {
    /// 1-based column number as shown to users.
    pub fn display_column(&self) -> usize {
        self.column + 1
    }
}

/// Picks the highest-scoring statistic, keeping the first one seen on ties.
pub fn best_statistic(statistics: &[ColumnStatistic]) -> Option<&ColumnStatistic> {
    let mut best: Option<&ColumnStatistic> = None;
    for statistic in statistics {
        match best {
            Some(current) if statistic.score <= current.score => {}
            _ => best = Some(statistic),
        }
    }
    best
}

/// How much of a decision gets reported.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum Verbosity {
    /// Every column's statistics plus the selected move.
    Verbose,
    /// The selected move only.
    Brief,
    /// Nothing.
    #[default]
    None,
}

impl FromStr for Verbosity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Verbose" => Ok(Verbosity::Verbose),
            "Brief" => Ok(Verbosity::Brief),
            "None" => Ok(Verbosity::None),
            other => Err(Error::InvalidVerbosity {
                token: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verbosity::Verbose => "Verbose",
            Verbosity::Brief => "Brief",
            Verbosity::None => "None",
        };
        f.write_str(name)
    }
}

/// The part of a [`MoveDecision`] a given verbosity exposes.
///
/// `statistics` holds every column for `Verbose`, only the selected column for
/// `Brief`, and nothing for `None`. `Display` renders the text lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub strategy: Strategy,
    pub verbosity: Verbosity,
    pub column: Option<usize>,
    pub statistics: Vec<ColumnStatistic>,
}

impl Report {
    pub fn new(decision: &MoveDecision, verbosity: Verbosity) -> Self {
        let statistics = match verbosity {
            Verbosity::Verbose => decision.statistics.clone(),
            Verbosity::Brief => decision.selected_statistic().into_iter().copied().collect(),
            Verbosity::None => Vec::new(),
        };
        Self {
            strategy: decision.strategy,
            verbosity,
            column: decision.column,
            statistics,
        }
    }

    /// The report as individual output lines.
    pub fn lines(&self) -> Vec<String> {
        if self.verbosity == Verbosity::None {
            return Vec::new();
        }
        let Some(column) = self.column else {
            return vec!["No move available".to_string()];
        };

        let mut lines = Vec::new();
        if self.verbosity == Verbosity::Verbose {
            for statistic in &self.statistics {
                lines.push(self.column_line(statistic));
            }
        }

        let selected = format!("FINAL Move selected: {}", column + 1);
        let brief_ratio = self
            .statistics
            .iter()
            .find(|statistic| statistic.column == column)
            .filter(|_| self.verbosity == Verbosity::Brief && self.strategy == Strategy::Pmcgs);
        match brief_ratio {
            Some(statistic) => {
                lines.push(format!("{selected}, Win Ratio: {:.2}", statistic.score))
            }
            None => lines.push(selected),
        }
        lines
    }

    fn column_line(&self, statistic: &ColumnStatistic) -> String {
        match self.strategy {
            Strategy::Uct => format!(
                "Column {}: UCB Value: {:.2}",
                statistic.display_column(),
                statistic.score
            ),
            _ => format!(
                "Column {}: wi: {}, ni: {}, Win Ratio: {:.2}",
                statistic.display_column(),
                statistic.wins,
                statistic.visits,
                statistic.score
            ),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(column: usize, wins: u32, visits: u32, score: f64) -> ColumnStatistic {
        ColumnStatistic {
            column,
            wins,
            visits,
            score,
        }
    }

    fn decision(
        strategy: Strategy,
        column: Option<usize>,
        statistics: Vec<ColumnStatistic>,
    ) -> MoveDecision {
        MoveDecision {
            strategy,
            column,
            statistics,
        }
    }

    #[test]
    fn best_statistic_prefers_lowest_column_on_ties() {
        let stats = vec![stat(0, 1, 4, 0.25), stat(2, 3, 4, 0.75), stat(5, 3, 4, 0.75)];
        assert_eq!(best_statistic(&stats).map(|s| s.column), Some(2));
    }

    #[test]
    fn best_statistic_prefers_infinity() {
        let stats = vec![stat(0, 4, 4, 2.5), stat(1, 0, 0, f64::INFINITY), stat(2, 4, 4, 2.5)];
        assert_eq!(best_statistic(&stats).map(|s| s.column), Some(1));
    }

    #[test]
    fn best_statistic_of_nothing_is_none() {
        assert_eq!(best_statistic(&[]), None);
    }

    #[test]
    fn all_zero_scores_select_first_column() {
        let stats = vec![stat(3, 0, 5, 0.0), stat(4, 0, 5, 0.0)];
        assert_eq!(best_statistic(&stats).map(|s| s.column), Some(3));
    }

    #[test]
    fn verbosity_tokens() {
        assert_eq!("Verbose".parse::<Verbosity>(), Ok(Verbosity::Verbose));
        assert_eq!("Brief".parse::<Verbosity>(), Ok(Verbosity::Brief));
        assert_eq!("None".parse::<Verbosity>(), Ok(Verbosity::None));
        assert_eq!(
            "verbose".parse::<Verbosity>(),
            Err(Error::InvalidVerbosity {
                token: "verbose".to_string()
            })
        );
    }

    #[test]
    fn verbose_pmcgs_report_lists_every_column() {
        let decision = decision(
            Strategy::Pmcgs,
            Some(1),
            vec![stat(0, 1, 4, 0.25), stat(1, 3, 4, 0.75)],
        );

        let report = Report::new(&decision, Verbosity::Verbose);

        assert_eq!(
            report.lines(),
            vec![
                "Column 1: wi: 1, ni: 4, Win Ratio: 0.25",
                "Column 2: wi: 3, ni: 4, Win Ratio: 0.75",
                "FINAL Move selected: 2",
            ]
        );
    }

    #[test]
    fn brief_pmcgs_report_shows_selected_ratio_only() {
        let decision = decision(
            Strategy::Pmcgs,
            Some(1),
            vec![stat(0, 1, 4, 0.25), stat(1, 3, 4, 0.75)],
        );

        let report = Report::new(&decision, Verbosity::Brief);

        assert_eq!(report.statistics, vec![stat(1, 3, 4, 0.75)]);
        assert_eq!(report.lines(), vec!["FINAL Move selected: 2, Win Ratio: 0.75"]);
    }

    #[test]
    fn uct_reports_ucb_values() {
        let decision = decision(
            Strategy::Uct,
            Some(0),
            vec![stat(0, 2, 2, 3.0), stat(6, 0, 0, f64::INFINITY)],
        );

        let verbose = Report::new(&decision, Verbosity::Verbose).to_string();
        let brief = Report::new(&decision, Verbosity::Brief).to_string();

        assert_eq!(
            verbose,
            "Column 1: UCB Value: 3.00\nColumn 7: UCB Value: inf\nFINAL Move selected: 1\n"
        );
        assert_eq!(brief, "FINAL Move selected: 1\n");
    }

    #[test]
    fn none_verbosity_reports_nothing() {
        let decision = decision(Strategy::Pmcgs, Some(3), vec![stat(3, 1, 1, 1.0)]);
        let report = Report::new(&decision, Verbosity::None);
        assert!(report.statistics.is_empty());
        assert!(report.lines().is_empty());
    }

    #[test]
    fn missing_move_is_reported() {
        let decision = decision(Strategy::Uct, None, Vec::new());
        let report = Report::new(&decision, Verbosity::Brief);
        assert_eq!(report.lines(), vec!["No move available"]);
    }
}
