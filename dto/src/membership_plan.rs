use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

crate::labelled_enum!(
    /// Unit in which a plan's duration is expressed.
    DurationUnit {
        Month => "MONTH",
        Year => "YEAR",
        Lifetime => "LIFETIME",
    }
);

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MembershipPlan {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Minor currency units.
    pub price: i32,
    pub duration: i32,
    pub duration_unit: DurationUnit,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MembershipPlanForm {
    pub name: String,
    pub description: Option<String>,
    pub price: i32,
    pub duration: i32,
    pub duration_unit: DurationUnit,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_read_duration_unit_labels() {
        assert_eq!(Ok(DurationUnit::Month), DurationUnit::from_str("MONTH"));
        assert_eq!(Ok(DurationUnit::Lifetime), DurationUnit::from_str("LIFETIME"));
        assert!(DurationUnit::from_str("month").is_err());
    }

    #[test]
    fn should_default_to_active_plan() {
        let form: MembershipPlanForm = serde_json::from_str(
            r#"{"name":"Monthly","description":null,"price":500,"duration":1,"duration_unit":"MONTH"}"#,
        )
        .unwrap();
        assert!(form.is_active);
        assert_eq!(DurationUnit::Month, form.duration_unit);
    }
}
