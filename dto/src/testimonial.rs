use crate::media::Media;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    pub designation: Option<String>,
    pub message: String,
    pub image: Option<Media>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TestimonialForm {
    pub name: String,
    pub designation: Option<String>,
    pub message: String,
    pub image: Option<String>,
}
