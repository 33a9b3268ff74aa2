use std::fmt;

/// Instance id and access token pair identifying one messaging account.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub instance_id: String,
    pub token: String,
}

impl Credentials {
    pub fn new(instance_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            token: token.into(),
        }
    }

    pub fn trimmed(&self) -> Self {
        Self {
            instance_id: self.instance_id.trim().to_owned(),
            token: self.token.trim().to_owned(),
        }
    }
}

// The token must never reach logs through `?credentials`.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("instance_id", &self.instance_id)
            .field("token", &if self.token.is_empty() { "" } else { "[REDACTED]" })
            .finish()
    }
}
