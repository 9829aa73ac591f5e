use crate::media::Media;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TeamMember {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub position: i32,
    pub image: Option<Media>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TeamMemberForm {
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    #[serde(default)]
    pub position: i32,
    pub image: Option<String>,
}
