use crate::media::Media;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct GalleryItem {
    pub id: i32,
    pub title: String,
    pub category: Option<String>,
    pub image: Option<Media>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct GalleryForm {
    pub title: String,
    pub category: Option<String>,
    pub image: Option<String>,
}
