use crate::media::Media;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Site-wide settings. There is only ever one of them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct WebSetting {
    pub site_name: String,
    pub tagline: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
    pub logo: Option<Media>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct WebSettingForm {
    pub site_name: String,
    pub tagline: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
    pub logo: Option<String>,
}
