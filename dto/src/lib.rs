pub mod action;
pub mod admin;
pub mod complaint;
pub mod dashboard;
pub mod donor;
pub mod enquiry;
pub mod event;
pub mod gallery;
pub mod media;
pub mod membership;
pub mod membership_plan;
pub mod membership_renewal;
pub mod news;
pub mod page;
pub mod payment_detail;
pub mod slider;
pub mod team_member;
pub mod testimonial;
pub mod web_setting;

/// Error returned when a stored or submitted label doesn't match any variant.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnknownVariant(pub String);

impl std::fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown value [value: {}]", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

/// Declare a status-like enum stored as an upper-case label.
macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($label => Ok(Self::$variant),)+
                    _ => Err($crate::UnknownVariant(value.to_owned())),
                }
            }
        }
    };
}

pub(crate) use labelled_enum;
