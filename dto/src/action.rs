use serde::{Deserialize, Serialize};

/// Outcome of a write operation, as returned to the caller.
/// A failure never carries data, a success never carries an error.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ActionResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_omit_missing_fields() {
        let failure: ActionResult<u8> = ActionResult::failure("Nope");
        assert_eq!(
            r#"{"success":false,"error":"Nope"}"#,
            serde_json::to_string(&failure).unwrap()
        );

        let success = ActionResult::success(3);
        assert_eq!(
            r#"{"success":true,"data":3}"#,
            serde_json::to_string(&success).unwrap()
        );
    }
}
