use crate::media::Media;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Where and how visitors can pay their membership fee or donation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentDetail {
    pub id: i32,
    pub method: String,
    pub account_name: Option<String>,
    pub account_number: Option<String>,
    pub bank_name: Option<String>,
    pub instructions: Option<String>,
    pub is_active: bool,
    pub qr_code: Option<Media>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentDetailForm {
    pub method: String,
    pub account_name: Option<String>,
    pub account_number: Option<String>,
    pub bank_name: Option<String>,
    pub instructions: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    pub qr_code: Option<String>,
}
