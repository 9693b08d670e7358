use serde::{Deserialize, Serialize};

pub const DEFAULT_FAILURE: &str = "Submission failed. Please try again.";

/// Fields posted to the inquiry relay for one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InquiryForm {
    pub unit: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub csrf_token: String,
}

impl InquiryForm {
    pub fn for_unit(unit_id: &str) -> Self {
        Self {
            unit: unit_id.to_string(),
            ..Self::default()
        }
    }

    /// Form-encoded field list in the order the relay reads them.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("unit", self.unit.as_str()),
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("message", self.message.as_str()),
            ("csrf_token", self.csrf_token.as_str()),
        ]
    }
}

/// JSON body returned by the relays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            error: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            error: None,
        }
    }
}

/// How the page reacts to a submission response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum InquiryOutcome {
    /// Show the thank-you panel
    Success,
    /// Keep the form, show this message inline
    Failed { message: String },
    /// CSRF rejection: reload the whole page, no inline text
    Reload,
}

impl InquiryOutcome {
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 403 {
            return InquiryOutcome::Reload;
        }

        let response = match serde_json::from_str::<RelayResponse>(body) {
            Ok(response) => response,
            Err(e) => {
                log::error!("Unreadable inquiry response ({}): {}", status, e);
                return InquiryOutcome::Failed {
                    message: DEFAULT_FAILURE.to_string(),
                };
            }
        };

        let ok = (200..300).contains(&status);
        if ok && response.success {
            return InquiryOutcome::Success;
        }

        let message = response
            .error
            .or(response.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FAILURE.to_string());
        InquiryOutcome::Failed { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_reloads_without_reading_body() {
        assert_eq!(
            InquiryOutcome::from_response(403, "<html>"),
            InquiryOutcome::Reload
        );
    }

    #[test]
    fn test_success() {
        assert_eq!(
            InquiryOutcome::from_response(200, r#"{"success":true}"#),
            InquiryOutcome::Success
        );
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            InquiryOutcome::from_response(422, r#"{"success":false,"error":"Email required"}"#),
            InquiryOutcome::Failed {
                message: "Email required".into()
            }
        );
        assert_eq!(
            InquiryOutcome::from_response(200, r#"{"success":false,"message":"Relay down"}"#),
            InquiryOutcome::Failed {
                message: "Relay down".into()
            }
        );
        assert_eq!(
            InquiryOutcome::from_response(500, "not json"),
            InquiryOutcome::Failed {
                message: DEFAULT_FAILURE.into()
            }
        );
        assert_eq!(
            InquiryOutcome::from_response(500, r#"{"success":true}"#),
            InquiryOutcome::Failed {
                message: DEFAULT_FAILURE.into()
            }
        );
    }

    #[test]
    fn test_form_fields_carry_unit_id() {
        let mut form = InquiryForm::for_unit("Unit 4B");
        form.csrf_token = "abc".into();
        let fields = form.fields();
        assert_eq!(fields[0], ("unit", "Unit 4B"));
        assert!(fields.contains(&("csrf_token", "abc")));
    }
}
