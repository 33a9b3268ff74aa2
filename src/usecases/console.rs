use anyhow::Result;

use crate::domain::{
    action::ApiAction,
    console_state::{ConsoleState, FormState},
    events::{AppEvent, KeyInput},
};

use super::contracts::{ActionLauncher, ConsoleOrchestrator};

const OUTPUT_SCROLL_STEP: u16 = 10;

pub struct DefaultConsoleOrchestrator<L>
where
    L: ActionLauncher,
{
    state: ConsoleState,
    launcher: L,
}

impl<L> DefaultConsoleOrchestrator<L>
where
    L: ActionLauncher,
{
    pub fn new(form: FormState, launcher: L) -> Self {
        Self {
            state: ConsoleState::new(form),
            launcher,
        }
    }

    fn trigger(&mut self, action: ApiAction) {
        let input = self.state.form().to_action_input();
        tracing::info!(
            action = %action,
            demo_mode = input.demo_mode,
            pending = self.state.pending(),
            "action triggered"
        );

        if self.launcher.launch(action, input) {
            self.state.mark_launched();
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.ctrl {
            match key.key.as_str() {
                "d" => self.state.form_mut().toggle_demo_mode(),
                "u" => {
                    if let Some(field) = self.state.form_mut().focused_field_mut() {
                        field.clear();
                    }
                }
                _ => {}
            }
            return;
        }

        if let Some(action) = ApiAction::from_trigger_key(&key.key) {
            self.trigger(action);
            return;
        }

        match key.key.as_str() {
            "tab" | "down" => self.state.form_mut().focus_next(),
            "backtab" | "up" => self.state.form_mut().focus_previous(),
            "pageup" => self.state.output_mut().scroll_up(OUTPUT_SCROLL_STEP),
            "pagedown" => self.state.output_mut().scroll_down(OUTPUT_SCROLL_STEP),
            "enter" | " " if self.state.form().focused().is_toggle() => {
                self.state.form_mut().toggle_demo_mode();
            }
            "enter" => self.state.form_mut().focus_next(),
            other => self.edit_focused_field(other),
        }
    }

    fn edit_focused_field(&mut self, key: &str) {
        let Some(field) = self.state.form_mut().focused_field_mut() else {
            return;
        };

        match key {
            "backspace" => field.backspace(),
            "delete" => field.delete(),
            "left" => field.move_left(),
            "right" => field.move_right(),
            "home" => field.move_home(),
            "end" => field.move_end(),
            text => {
                let mut chars = text.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    field.insert_char(ch);
                }
            }
        }
    }

    fn paste(&mut self, text: &str) {
        let Some(field) = self.state.form_mut().focused_field_mut() else {
            return;
        };

        // Fields are single-line; pasted line breaks are dropped.
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            if !field.insert_char(ch) {
                break;
            }
        }
    }
}

impl<L> ConsoleOrchestrator for DefaultConsoleOrchestrator<L>
where
    L: ActionLauncher,
{
    fn state(&self) -> &ConsoleState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ConsoleState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::Paste(text) => self.paste(&text),
            AppEvent::ActionCompleted(completed) => {
                tracing::debug!(
                    action = %completed.action,
                    is_error = completed.is_error,
                    "action result displayed"
                );
                let at = chrono::Local::now().format("%H:%M:%S").to_string();
                self.state.apply_completion(completed, at);
            }
        }

        Ok(())
    }
}
