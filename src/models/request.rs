use serde::Deserialize;

/// One entry of a batch source: promote every account with `email`, optionally resetting its password.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromotionRequest {
    pub email: String,
    #[serde(default)]
    pub new_password: Option<String>,
}

impl PromotionRequest {
    pub fn new(email: impl Into<String>, new_password: Option<String>) -> Self {
        Self {
            email: email.into(),
            new_password,
        }
    }

    /// The password to set, if one was given and it is not empty.
    pub fn password(&self) -> Option<&str> {
        self.new_password.as_deref().filter(|p| !p.is_empty())
    }
}

/// Parse a JSON array of `{ "email": ..., "new_password": ... }` objects.
/// A record without `email` fails the whole parse.
pub fn parse_requests(raw: &str) -> Result<Vec<PromotionRequest>, serde_json::Error> {
    serde_json::from_str(raw)
}
