//! Report parameters: use case presentation control.
//!
//! [`ReportParams`] groups the static parameters that shape what the use
//! cases compute for display: currency format, deadline reference date and
//! list limits. These are application-layer concerns, not domain policy.

use bidtrack_domain::MoneyFormat;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Report shaping parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportParams {
    /// Currency formatting for bid values
    pub money: MoneyFormat,
    /// Include reviewer notes in checklist reviews
    pub show_notes: bool,
    /// Reference date for deadline arithmetic; `None` skips it
    pub today: Option<NaiveDate>,
    /// Number of bids listed as recent activity
    pub recent_limit: usize,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            money: MoneyFormat::default(),
            show_notes: true,
            today: None,
            recent_limit: 10,
        }
    }
}

impl ReportParams {
    // ==================== Builder Methods ====================

    pub fn with_money(mut self, money: MoneyFormat) -> Self {
        self.money = money;
        self
    }

    pub fn with_show_notes(mut self, show: bool) -> Self {
        self.show_notes = show;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }
}
