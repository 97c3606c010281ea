use crate::display_servers::DisplayServer;
use crate::state::State;
use crate::Result;

/// Ties the pure window management [`State`] to a [`DisplayServer`]
/// backend. All policy lives in `state`; the server only translates
/// events in and executes queued actions out.
pub struct Manager<SERVER: DisplayServer> {
    pub state: State,
    pub display_server: SERVER,
}

impl<SERVER: DisplayServer> Manager<SERVER> {
    /// Connects to the display and registers as the window manager.
    ///
    /// # Errors
    /// Fails when the display is unreachable or another window manager
    /// already owns substructure redirection on the root window.
    pub fn new() -> Result<Self> {
        let display_server = SERVER::new()?;
        let state = State::new(display_server.screen());
        Ok(Self {
            state,
            display_server,
        })
    }
}

#[cfg(test)]
impl Manager<crate::display_servers::MockDisplayServer> {
    #[must_use]
    pub fn new_test() -> Self {
        let display_server = crate::display_servers::MockDisplayServer::default();
        let state = State::new(display_server.screen());
        Self {
            state,
            display_server,
        }
    }
}
