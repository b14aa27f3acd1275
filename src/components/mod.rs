//! UI Components
//!
//! Reusable Leptos components.

mod belongings_form;
mod checklist_view;
mod confirm_button;
mod log_panel;
mod photo_preview;
mod timer_panel;

pub use belongings_form::BelongingsForm;
pub use checklist_view::ChecklistView;
pub use confirm_button::ConfirmButton;
pub use log_panel::LogPanel;
pub use photo_preview::PhotoPreview;
pub use timer_panel::TimerPanel;
