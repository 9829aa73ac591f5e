use crate::media::Media;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub event_date: NaiveDateTime,
    pub image: Option<Media>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub event_date: NaiveDateTime,
    pub image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct EventBooking {
    pub id: i32,
    pub event_id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub seats: i32,
    pub membership_number: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct EventBookingForm {
    pub event_id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default = "one_seat")]
    pub seats: i32,
    pub membership_number: Option<String>,
}

fn one_seat() -> i32 {
    1
}
