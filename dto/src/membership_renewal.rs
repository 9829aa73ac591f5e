use crate::media::Media;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

crate::labelled_enum!(
    RenewalStatus {
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
    }
);

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MembershipRenewal {
    pub id: i32,
    pub membership_id: i32,
    pub plan_id: i32,
    pub payment_proof: Option<Media>,
    pub transaction_id: Option<String>,
    pub status: RenewalStatus,
    pub admin_comment: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MembershipRenewalForm {
    pub plan_id: i32,
    pub transaction_id: Option<String>,
    pub payment_proof: Option<String>,
}

/// Admin decision on a pending renewal. Only `APPROVED` and `REJECTED` are meaningful.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RenewalDecision {
    pub status: RenewalStatus,
    pub comment: Option<String>,
}
