//! Bid Dashboard use case.
//!
//! Win rates per entity, monthly performance, portfolio totals, and the most
//! recent bid activity.

use crate::config::ReportParams;
use crate::ports::repository::{ProcurementRepository, RepositoryError};
use bidtrack_domain::core::percent::bounded_percent;
use bidtrack_domain::{BidPortfolio, BidRecord, EntityWinRate, MonthlyPerformance};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Where the per-entity win rates came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WinRateSource {
    /// Reported by the data source
    Reported,
    /// Counted from the bid records
    Derived,
}

/// Dashboard data
#[derive(Debug, Clone, Serialize)]
pub struct BidDashboard {
    pub win_rates: Vec<EntityWinRate>,
    pub win_rate_source: WinRateSource,
    pub monthly: Vec<MonthlyPerformance>,
    pub portfolio: BidPortfolio,
    /// Newest submissions first
    pub recent: Vec<BidRecord>,
}

impl BidDashboard {
    /// Win rate over all entity rows: `round(100 * Σwon / Σtotal)`
    pub fn overall_win_rate(&self) -> u32 {
        let (won, total) = self
            .win_rates
            .iter()
            .fold((0u64, 0u64), |(won, total), r| {
                (won + u64::from(r.won_bids), total + u64::from(r.total_bids))
            });
        bounded_percent(won, total)
    }
}

pub struct BidDashboardUseCase {
    repository: Arc<dyn ProcurementRepository>,
}

impl BidDashboardUseCase {
    pub fn new(repository: Arc<dyn ProcurementRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, params: &ReportParams) -> Result<BidDashboard, RepositoryError> {
        let bids = self.repository.bids()?;
        let reported = self.repository.win_rates()?;

        let (win_rates, win_rate_source) = if reported.is_empty() {
            (Self::derive_win_rates(&bids), WinRateSource::Derived)
        } else {
            (reported, WinRateSource::Reported)
        };
        debug!(
            "Dashboard: {} bids, {} entity win rates ({:?})",
            bids.len(),
            win_rates.len(),
            win_rate_source
        );

        let portfolio = BidPortfolio::from_bids(&bids);

        let mut recent = bids;
        recent.sort_by(|a, b| {
            b.submission_date
                .cmp(&a.submission_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        recent.truncate(params.recent_limit);

        Ok(BidDashboard {
            win_rates,
            win_rate_source,
            monthly: self.repository.monthly_performance()?,
            portfolio,
            recent,
        })
    }

    /// One row per entity acronym, in first-seen order
    fn derive_win_rates(bids: &[BidRecord]) -> Vec<EntityWinRate> {
        let mut entities: Vec<&str> = Vec::new();
        for bid in bids {
            if !entities.iter().any(|e| e.eq_ignore_ascii_case(&bid.entity)) {
                entities.push(&bid.entity);
            }
        }
        entities
            .into_iter()
            .map(|entity| EntityWinRate::from_bids(entity, bids))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MemoryRepository;

    #[test]
    fn test_derived_win_rates() {
        let dashboard = BidDashboardUseCase::new(Arc::new(MemoryRepository::sample()))
            .execute(&ReportParams::default())
            .unwrap();

        assert_eq!(dashboard.win_rate_source, WinRateSource::Derived);
        let entities: Vec<_> = dashboard.win_rates.iter().map(|r| r.entity.as_str()).collect();
        assert_eq!(entities, vec!["DPWH", "DOH"]);
        assert_eq!(dashboard.win_rates[1].total_bids, 2);
        assert_eq!(dashboard.win_rates[1].win_rate(), 50);
        assert_eq!(dashboard.overall_win_rate(), 33);
    }

    #[test]
    fn test_reported_win_rates_take_precedence() {
        let mut repo = MemoryRepository::sample();
        repo.win_rates = vec![
            EntityWinRate::new("DOH", 12, 9),
            EntityWinRate::new("DA", 9, 6),
        ];
        let dashboard = BidDashboardUseCase::new(Arc::new(repo))
            .execute(&ReportParams::default())
            .unwrap();

        assert_eq!(dashboard.win_rate_source, WinRateSource::Reported);
        assert_eq!(dashboard.win_rates[0].win_rate(), 75);
        assert_eq!(dashboard.win_rates[1].win_rate(), 67);
        assert_eq!(dashboard.overall_win_rate(), 71); // 15/21
    }

    #[test]
    fn test_recent_sorted_and_limited() {
        let dashboard = BidDashboardUseCase::new(Arc::new(MemoryRepository::sample()))
            .execute(&ReportParams::default().with_recent_limit(2))
            .unwrap();

        let ids: Vec<_> = dashboard.recent.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["BID-2024-001", "BID-2024-002"]);
        // Portfolio covers every bid, not just the recent ones
        assert_eq!(dashboard.portfolio.total_bids, 3);
        assert_eq!(dashboard.portfolio.total_value, 460_000_000);
    }

    #[test]
    fn test_overall_win_rate_with_large_reported_counts() {
        let mut repo = MemoryRepository::sample();
        repo.win_rates = vec![
            EntityWinRate::new("DOH", 3_000_000_000, 3_000_000_000),
            EntityWinRate::new("DPWH", 3_000_000_000, 0),
        ];
        let dashboard = BidDashboardUseCase::new(Arc::new(repo))
            .execute(&ReportParams::default())
            .unwrap();

        assert_eq!(dashboard.overall_win_rate(), 50);
    }

    #[test]
    fn test_empty_repository() {
        let dashboard = BidDashboardUseCase::new(Arc::new(MemoryRepository::default()))
            .execute(&ReportParams::default())
            .unwrap();
        assert!(dashboard.win_rates.is_empty());
        assert_eq!(dashboard.overall_win_rate(), 0);
        assert!(dashboard.recent.is_empty());
    }
}
