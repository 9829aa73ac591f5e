use crate::media::Media;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub is_published: bool,
    pub image: Option<Media>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewsForm {
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    #[serde(default)]
    pub is_published: bool,
    pub image: Option<String>,
}
