use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct DashboardStats {
    /// Stored status label to number of memberships.
    pub memberships_by_status: BTreeMap<String, i64>,
    pub pending_renewals: i64,
    /// Minor currency units.
    pub verified_donations_total: i64,
    pub pending_donations: i64,
    pub enquiries: i64,
    pub open_complaints: i64,
    pub upcoming_events: i64,
    pub event_bookings: i64,
}
