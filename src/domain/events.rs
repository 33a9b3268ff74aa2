use super::action::ApiAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    Paste(String),
    ActionCompleted(CompletedAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }
}

/// Rendered result of one finished action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedAction {
    pub action: ApiAction,
    pub text: String,
    pub is_error: bool,
}
