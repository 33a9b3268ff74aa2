//! Domain layer: actions, operator input, canned responses and console state.

pub mod action;
pub mod console_state;
pub mod credentials;
pub mod events;
pub mod field_input_state;
pub mod mock_catalog;
pub mod request;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
