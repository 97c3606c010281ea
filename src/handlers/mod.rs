//! Event and command handlers. Each handler mutates [`crate::State`] and
//! returns whether the visible workspace needs to be retiled.
mod command_handler;
mod display_event_handler;
mod focus_handler;
mod goto_workspace_handler;
mod mouse_combo_handler;
mod window_handler;
mod window_move_handler;
mod window_resize_handler;
