//! Use case layer: action dispatch, rendering and console orchestration.

pub mod bootstrap;
pub mod console;
pub mod context;
pub mod contracts;
pub mod dispatch;
pub mod launcher;
pub mod render;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
