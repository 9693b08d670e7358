use serde::Deserialize;

/// Body of the token issuance endpoint: `{"csrf_token": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CsrfToken {
    pub csrf_token: String,
}

/// One token per page load, reused by every submission in that load.
#[derive(Debug, Clone, Default)]
pub struct CsrfCache {
    token: Option<String>,
}

impl CsrfCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.token.is_some()
    }

    /// Store the issued token. Later issuances in the same load are ignored.
    /// Returns whether the body carried a usable token.
    pub fn accept_body(&mut self, body: &str) -> bool {
        if self.token.is_some() {
            return true;
        }
        match serde_json::from_str::<CsrfToken>(body) {
            Ok(issued) if !issued.csrf_token.is_empty() => {
                self.token = Some(issued.csrf_token);
                true
            }
            Ok(_) => {
                log::error!("CSRF token endpoint returned an empty token");
                false
            }
            Err(e) => {
                log::error!("Error fetching CSRF token: {}", e);
                false
            }
        }
    }

    /// Hidden form field value; empty until a token arrives.
    pub fn field_value(&self) -> &str {
        self.token.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_token_wins() {
        let mut cache = CsrfCache::new();
        assert!(cache.accept_body(r#"{"csrf_token":"first"}"#));
        assert!(cache.accept_body(r#"{"csrf_token":"second"}"#));
        assert_eq!(cache.token(), Some("first"));
    }

    #[test]
    fn test_bad_bodies_leave_cache_empty() {
        let mut cache = CsrfCache::new();
        assert!(!cache.accept_body("oops"));
        assert!(!cache.accept_body(r#"{"csrf_token":""}"#));
        assert!(!cache.is_loaded());
        assert_eq!(cache.field_value(), "");
    }
}
