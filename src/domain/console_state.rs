//! State of the interactive console: form fields, output region, progress.

use unicode_width::UnicodeWidthChar;

use super::{
    action::ApiAction,
    credentials::Credentials,
    events::CompletedAction,
    field_input_state::FieldInputState,
    request::{ActionFields, ActionInput},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    InstanceId,
    Token,
    DemoMode,
    PhoneNumber,
    MessageText,
    FileUrl,
    FileName,
}

impl FormField {
    /// Top-to-bottom order on screen; focus cycles through it.
    pub const ORDER: [FormField; 7] = [
        Self::InstanceId,
        Self::Token,
        Self::DemoMode,
        Self::PhoneNumber,
        Self::MessageText,
        Self::FileUrl,
        Self::FileName,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::InstanceId => "idInstance",
            Self::Token => "apiTokenInstance",
            Self::DemoMode => "Demo mode",
            Self::PhoneNumber => "Phone number",
            Self::MessageText => "Message text",
            Self::FileUrl => "File URL",
            Self::FileName => "File name",
        }
    }

    pub fn is_toggle(self) -> bool {
        self == Self::DemoMode
    }

    pub fn is_masked(self) -> bool {
        self == Self::Token
    }

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default()
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    instance_id: FieldInputState,
    token: FieldInputState,
    demo_mode: bool,
    phone_number: FieldInputState,
    message_text: FieldInputState,
    file_url: FieldInputState,
    file_name: FieldInputState,
    focused: FormField,
}

impl FormState {
    /// Form pre-filled from configured credentials and demo flag.
    pub fn prefilled(credentials: &Credentials, demo_mode: bool) -> Self {
        Self {
            instance_id: FieldInputState::with_text(&credentials.instance_id),
            token: FieldInputState::with_text(&credentials.token),
            demo_mode,
            ..Self::default()
        }
    }

    pub fn focused(&self) -> FormField {
        self.focused
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    pub fn toggle_demo_mode(&mut self) {
        self.demo_mode = !self.demo_mode;
    }

    /// Text state of `field`; `None` for the demo toggle.
    pub fn field(&self, field: FormField) -> Option<&FieldInputState> {
        match field {
            FormField::InstanceId => Some(&self.instance_id),
            FormField::Token => Some(&self.token),
            FormField::DemoMode => None,
            FormField::PhoneNumber => Some(&self.phone_number),
            FormField::MessageText => Some(&self.message_text),
            FormField::FileUrl => Some(&self.file_url),
            FormField::FileName => Some(&self.file_name),
        }
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FieldInputState> {
        match self.focused {
            FormField::InstanceId => Some(&mut self.instance_id),
            FormField::Token => Some(&mut self.token),
            FormField::DemoMode => None,
            FormField::PhoneNumber => Some(&mut self.phone_number),
            FormField::MessageText => Some(&mut self.message_text),
            FormField::FileUrl => Some(&mut self.file_url),
            FormField::FileName => Some(&mut self.file_name),
        }
    }

    /// Snapshot of the form as action input; values are passed untrimmed.
    pub fn to_action_input(&self) -> ActionInput {
        ActionInput {
            credentials: Credentials::new(self.instance_id.text(), self.token.text()),
            demo_mode: self.demo_mode,
            fields: ActionFields {
                phone_number: self.phone_number.text().to_owned(),
                message_text: self.message_text.text().to_owned(),
                file_url: self.file_url.text().to_owned(),
                file_name: self.file_name.text().to_owned(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputState {
    text: String,
    is_error: bool,
    scroll: u16,
    /// Columns available for the text; 0 until the panel has been laid out.
    wrap_width: u16,
}

impl OutputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Records the panel width and keeps the scroll offset inside the
    /// wrapped text.
    pub fn set_wrap_width(&mut self, width: u16) {
        self.wrap_width = width;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Text split into display rows no wider than the wrap width.
    pub fn wrapped_lines(&self) -> Vec<String> {
        let width = usize::from(self.wrap_width);
        let mut rows = Vec::new();

        for line in self.text.lines() {
            if width == 0 {
                rows.push(line.to_owned());
                continue;
            }

            let mut row = String::new();
            let mut used = 0;
            for ch in line.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if used + ch_width > width && !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                    used = 0;
                }
                row.push(ch);
                used += ch_width;
            }
            rows.push(row);
        }

        rows
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.wrapped_lines().len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    /// Replaces the whole region; the last write wins.
    fn overwrite(&mut self, text: String, is_error: bool) {
        self.text = text;
        self.is_error = is_error;
        self.scroll = 0;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastCompletion {
    pub action: ApiAction,
    pub is_error: bool,
    pub at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleState {
    running: bool,
    form: FormState,
    output: OutputState,
    pending: usize,
    last_completion: Option<LastCompletion>,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new(FormState::default())
    }
}

impl ConsoleState {
    pub fn new(form: FormState) -> Self {
        Self {
            running: true,
            form,
            output: OutputState::default(),
            pending: 0,
            last_completion: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn output(&self) -> &OutputState {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut OutputState {
        &mut self.output
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn last_completion(&self) -> Option<&LastCompletion> {
        self.last_completion.as_ref()
    }

    pub fn mark_launched(&mut self) {
        self.pending += 1;
    }

    pub fn apply_completion(&mut self, completed: CompletedAction, at: String) {
        self.pending = self.pending.saturating_sub(1);
        self.output.overwrite(completed.text, completed.is_error);
        self.last_completion = Some(LastCompletion {
            action: completed.action,
            is_error: completed.is_error,
            at,
        });
    }
}
