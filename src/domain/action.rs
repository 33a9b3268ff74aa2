use std::fmt;

/// The four remote operations the console can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiAction {
    GetSettings,
    GetStateInstance,
    SendMessage,
    SendFileByUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl ApiAction {
    pub const ALL: [ApiAction; 4] = [
        Self::GetSettings,
        Self::GetStateInstance,
        Self::SendMessage,
        Self::SendFileByUrl,
    ];

    /// Remote method name, used both as the URL path segment and as the label.
    pub fn method_name(self) -> &'static str {
        match self {
            Self::GetSettings => "getSettings",
            Self::GetStateInstance => "getStateInstance",
            Self::SendMessage => "sendMessage",
            Self::SendFileByUrl => "sendFileByUrl",
        }
    }

    pub fn http_method(self) -> HttpMethod {
        match self {
            Self::GetSettings | Self::GetStateInstance => HttpMethod::Get,
            Self::SendMessage | Self::SendFileByUrl => HttpMethod::Post,
        }
    }

    /// Function key that triggers the action in the console.
    pub fn trigger_key(self) -> &'static str {
        match self {
            Self::GetSettings => "f1",
            Self::GetStateInstance => "f2",
            Self::SendMessage => "f3",
            Self::SendFileByUrl => "f4",
        }
    }

    pub fn from_trigger_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.trigger_key() == key)
    }
}

impl fmt::Display for ApiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}
