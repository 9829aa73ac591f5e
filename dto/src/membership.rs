use crate::media::Media;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

crate::labelled_enum!(
    MembershipStatus {
        Pending => "PENDING",
        Active => "ACTIVE",
        Rejected => "REJECTED",
        Expired => "EXPIRED",
    }
);

impl MembershipStatus {
    /// Status as it should be understood at `now`:
    /// an active membership whose expiration date is reached is expired,
    /// even though no one has recorded it yet.
    pub fn effective(&self, expires_at: Option<NaiveDateTime>, now: NaiveDateTime) -> Self {
        match (self, expires_at) {
            (MembershipStatus::Active, Some(expires_at)) if expires_at <= now => {
                MembershipStatus::Expired
            }
            (status, _) => *status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Membership {
    pub id: i32,
    pub membership_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub plan_id: i32,
    pub status: MembershipStatus,
    pub effective_status: MembershipStatus,
    pub expires_at: Option<NaiveDateTime>,
    pub profile_picture: Option<Media>,
    pub documents: Vec<Media>,
    pub payment_proof: Option<Media>,
    pub transaction_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Application submitted by a visitor.
/// Files are carried as data strings and uploaded before the membership is stored.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MembershipForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub plan_id: i32,
    pub transaction_id: Option<String>,
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
    pub payment_proof: Option<String>,
}

/// Identity fields an admin can correct.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MembershipUpdateForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub plan_id: i32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MembershipStatusUpdate {
    pub status: MembershipStatus,
    pub expires_at: Option<NaiveDateTime>,
}

/// What a visitor can learn about a membership from its number.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MembershipCheck {
    pub membership_number: String,
    pub first_name: String,
    pub last_name: String,
    pub plan_name: String,
    pub status: MembershipStatus,
    pub expires_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[parameterized(
        status = {
            MembershipStatus::Active,
            MembershipStatus::Active,
            MembershipStatus::Active,
            MembershipStatus::Active,
            MembershipStatus::Pending,
            MembershipStatus::Rejected,
        },
        expires_at = {
            Some(at(20)),
            Some(at(10)),
            Some(at(15)),
            None,
            Some(at(10)),
            Some(at(10)),
        },
        expected_status = {
            MembershipStatus::Active,
            MembershipStatus::Expired,
            MembershipStatus::Expired,
            MembershipStatus::Active,
            MembershipStatus::Pending,
            MembershipStatus::Rejected,
        }
    )]
    fn should_compute_effective_status(
        status: MembershipStatus,
        expires_at: Option<NaiveDateTime>,
        expected_status: MembershipStatus,
    ) {
        assert_eq!(expected_status, status.effective(expires_at, at(15)));
    }

    #[test]
    fn should_accept_application_without_documents() {
        let form: MembershipForm = serde_json::from_str(
            r#"{
                "first_name": "Jon",
                "last_name": "Doe",
                "email": "jon@doe.com",
                "phone": "+33612345678",
                "gender": null,
                "birthdate": "1980-02-01",
                "address": null,
                "occupation": null,
                "plan_id": 1,
                "transaction_id": null,
                "profile_picture": null,
                "payment_proof": null
            }"#,
        )
        .unwrap();
        assert!(form.documents.is_empty());
        assert_eq!(NaiveDate::from_ymd_opt(1980, 2, 1), form.birthdate);
    }
}
