//! Bid submissions and win-rate statistics

use crate::core::error::DomainError;
use crate::core::percent::bounded_percent;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a submitted bid, supplied by the data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidOutcome {
    Won,
    Lost,
    #[default]
    Pending,
}

impl BidOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            BidOutcome::Won => "Won",
            BidOutcome::Lost => "Lost",
            BidOutcome::Pending => "Pending",
        }
    }

    pub fn is_decided(&self) -> bool {
        !matches!(self, BidOutcome::Pending)
    }
}

impl fmt::Display for BidOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BidOutcome::Won => write!(f, "won"),
            BidOutcome::Lost => write!(f, "lost"),
            BidOutcome::Pending => write!(f, "pending"),
        }
    }
}

impl std::str::FromStr for BidOutcome {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "won" => Ok(BidOutcome::Won),
            "lost" => Ok(BidOutcome::Lost),
            "pending" => Ok(BidOutcome::Pending),
            _ => Err(DomainError::invalid_status("bid", s)),
        }
    }
}

/// A submitted bid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidRecord {
    /// Bid identifier ("BID-2024-001")
    pub id: String,
    /// Entity acronym
    pub entity: String,
    pub project: String,
    pub submission_date: NaiveDate,
    /// Bid value in whole pesos
    pub bid_value: i64,
    #[serde(default)]
    pub status: BidOutcome,
    /// Expected margin in percent, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub award_date: Option<NaiveDate>,
}

/// `round(100 * won / total)`, 0 when there are no bids
pub fn win_rate(won: u32, total: u32) -> u32 {
    bounded_percent(u64::from(won), u64::from(total))
}

/// Win statistics for one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityWinRate {
    pub entity: String,
    pub total_bids: u32,
    pub won_bids: u32,
}

impl EntityWinRate {
    pub fn new(entity: impl Into<String>, total_bids: u32, won_bids: u32) -> Self {
        Self {
            entity: entity.into(),
            total_bids,
            won_bids,
        }
    }

    /// Count bids for `entity` (matched by acronym, case-insensitive)
    pub fn from_bids(entity: &str, bids: &[BidRecord]) -> Self {
        let mine = bids.iter().filter(|b| b.entity.eq_ignore_ascii_case(entity));
        let (total, won) = mine.fold((0u32, 0u32), |(total, won), bid| {
            (total + 1, won + u32::from(bid.status == BidOutcome::Won))
        });
        Self::new(entity, total, won)
    }

    pub fn win_rate(&self) -> u32 {
        win_rate(self.won_bids, self.total_bids)
    }
}

/// Submitted vs won bids for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPerformance {
    /// Month label ("Jul")
    pub month: String,
    pub submitted: u32,
    pub won: u32,
}

impl MonthlyPerformance {
    pub fn win_rate(&self) -> u32 {
        win_rate(self.won, self.submitted)
    }
}

/// Aggregate over a set of bid records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BidPortfolio {
    pub total_bids: u32,
    pub won: u32,
    pub lost: u32,
    pub pending: u32,
    /// Sum of all bid values
    pub total_value: i64,
    /// Sum of won bid values
    pub won_value: i64,
    /// Mean of the known, non-zero margins
    pub average_margin: Option<f64>,
}

impl BidPortfolio {
    pub fn from_bids(bids: &[BidRecord]) -> Self {
        let mut portfolio = Self::default();
        let mut margin_sum = 0.0;
        let mut margin_count = 0u32;

        for bid in bids {
            portfolio.total_bids += 1;
            portfolio.total_value = portfolio.total_value.saturating_add(bid.bid_value);
            match bid.status {
                BidOutcome::Won => {
                    portfolio.won += 1;
                    portfolio.won_value = portfolio.won_value.saturating_add(bid.bid_value);
                }
                BidOutcome::Lost => portfolio.lost += 1,
                BidOutcome::Pending => portfolio.pending += 1,
            }
            // Same filter as `format_margin`: zero and non-finite margins are "N/A"
            if let Some(margin) = bid.margin.filter(|m| m.is_finite() && *m != 0.0) {
                margin_sum += margin;
                margin_count += 1;
            }
        }

        if margin_count > 0 {
            portfolio.average_margin = Some(margin_sum / f64::from(margin_count));
        }
        portfolio
    }

    /// Won share of all bids, pending included
    pub fn win_rate(&self) -> u32 {
        win_rate(self.won, self.total_bids)
    }
}
