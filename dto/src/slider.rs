use crate::media::Media;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Slider {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub link: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub image: Option<Media>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct SliderForm {
    pub title: String,
    pub subtitle: Option<String>,
    pub link: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub is_active: bool,
    pub image: Option<String>,
}
