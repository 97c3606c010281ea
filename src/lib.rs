//! `stackwm` is a minimal reparenting-free tiling window manager for X11.
//!
//! The crate is split the same way the binary thinks about the problem: the
//! in-memory model of managed windows ([`state::State`] and [`models`]), the
//! pure layout math ([`layouts`]), the event handlers ([`handlers`]), and a
//! display-server boundary ([`display_servers`]) behind which all Xlib calls
//! live.
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate
)]
mod command;
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
mod event_loop;
mod handlers;
pub mod layouts;
pub mod models;
pub mod state;
pub mod utils;

pub use command::Command;
pub use display_action::DisplayAction;
pub use display_event::DisplayEvent;
pub use display_servers::DisplayServer;
pub use models::Manager;
pub use models::Mode;
pub use models::Workspace;
pub use state::State;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StackWmError>;

#[derive(Debug, Error)]
pub enum StackWmError {
    /// Another window manager already holds the substructure-redirect
    /// registration on the root window.
    #[error("could not register for substructure events; is another WM running?")]
    RootRegistrationDenied,
    #[error("could not open a connection to the X server")]
    XConnectionFailed,
}
