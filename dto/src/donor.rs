use crate::media::Media;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

crate::labelled_enum!(
    DonorStatus {
        Pending => "PENDING",
        Verified => "VERIFIED",
    }
);

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Donor {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Minor currency units.
    pub amount: i32,
    pub message: Option<String>,
    pub status: DonorStatus,
    pub image: Option<Media>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct DonorForm {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub amount: i32,
    pub message: Option<String>,
    pub status: Option<DonorStatus>,
    pub image: Option<String>,
}
