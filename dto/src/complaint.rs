use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

crate::labelled_enum!(
    ComplaintStatus {
        Open => "OPEN",
        Resolved => "RESOLVED",
    }
);

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Complaint {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: ComplaintStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ComplaintForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: Option<ComplaintStatus>,
}
