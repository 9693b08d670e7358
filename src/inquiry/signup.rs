use crate::error::ValidationError;
use crate::inquiry::submission::RelayResponse;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
            .unwrap();
}

pub const SIGNUP_SUCCESS: &str = "Successfully joined email list";
pub const SIGNUP_FAILED: &str = "Failed to send email. Please try again.";

/// Mail-list signup as received by the relay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub interests: String,
    pub consent: bool,
}

/// A signup that passed validation, inputs trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSignup {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub interests: Option<String>,
}

impl ValidSignup {
    /// Subject line of the notification the relay sends.
    pub fn subject(&self) -> String {
        format!("New Email List Signup - {} {}", self.first_name, self.last_name)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl SignupForm {
    /// Required fields first, then consent. Nothing is sent when this fails.
    pub fn validate(&self) -> Result<ValidSignup, ValidationError> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();

        if first_name.is_empty() {
            return Err(ValidationError::MissingField("firstName"));
        }
        if last_name.is_empty() {
            return Err(ValidationError::MissingField("lastName"));
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !self.consent {
            return Err(ValidationError::ConsentRequired);
        }

        let interests = self.interests.trim();
        Ok(ValidSignup {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            interests: (!interests.is_empty()).then(|| interests.to_string()),
        })
    }

    /// Relay-shaped response for a validation failure.
    pub fn rejection(&self) -> Option<RelayResponse> {
        self.validate()
            .err()
            .map(|e| RelayResponse::rejected(e.to_string()))
    }

    /// Full relay exchange. `notify` sends the notification and runs only for
    /// a valid signup; it reports whether delivery succeeded.
    pub fn relay<F>(&self, notify: F) -> RelayResponse
    where
        F: FnOnce(&ValidSignup) -> bool,
    {
        let signup = match self.validate() {
            Ok(signup) => signup,
            Err(e) => return RelayResponse::rejected(e.to_string()),
        };
        if notify(&signup) {
            log::info!("Signup relayed for {}", signup.email);
            RelayResponse::ok(SIGNUP_SUCCESS)
        } else {
            log::warn!("Signup notification failed for {}", signup.email);
            RelayResponse::rejected(SIGNUP_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> SignupForm {
        SignupForm {
            first_name: " Ada ".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            interests: "".into(),
            consent: true,
        }
    }

    #[test]
    fn test_valid_signup_is_trimmed() {
        let signup = complete().validate().unwrap();
        assert_eq!(signup.first_name, "Ada");
        assert_eq!(signup.interests, None);
        assert_eq!(signup.subject(), "New Email List Signup - Ada Lovelace");
    }

    #[test]
    fn test_missing_fields() {
        let mut form = complete();
        form.last_name = "   ".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingField("lastName")));
    }

    #[test]
    fn test_invalid_email() {
        let mut form = complete();
        for email in ["", "ada", "ada@", "ada@example", "a b@example.com"] {
            form.email = email.into();
            assert_eq!(form.validate(), Err(ValidationError::InvalidEmail), "{}", email);
        }
    }

    #[test]
    fn test_consent_required() {
        let mut form = complete();
        form.consent = false;
        let rejection = form.rejection().unwrap();
        assert!(!rejection.success);
        assert_eq!(
            rejection.message.as_deref(),
            Some("Please agree to receive updates")
        );
    }

    #[test]
    fn test_complete_form_has_no_rejection() {
        assert!(complete().rejection().is_none());
    }

    #[test]
    fn test_relay_success() {
        let mut subject = String::new();
        let response = complete().relay(|signup| {
            subject = signup.subject();
            true
        });
        assert_eq!(subject, "New Email List Signup - Ada Lovelace");
        assert_eq!(response, RelayResponse::ok(SIGNUP_SUCCESS));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"success": true, "message": "Successfully joined email list"})
        );
    }

    #[test]
    fn test_relay_delivery_failure() {
        let response = complete().relay(|_| false);
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some(SIGNUP_FAILED));
    }

    #[test]
    fn test_relay_invalid_form_sends_nothing() {
        let mut form = complete();
        form.email = "ada@".into();
        let mut sent = false;
        let response = form.relay(|_| {
            sent = true;
            true
        });
        assert!(!sent);
        assert!(!response.success);
        assert_eq!(response, form.rejection().unwrap());
    }
}
