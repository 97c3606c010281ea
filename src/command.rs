use crate::models::WorkspaceId;
use serde::{Deserialize, Serialize};

/// User-initiated operations, normally bound to key combinations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Command {
    Execute(String),
    CloseWindow,
    Quit,
    ToggleFloating,
    FocusWindowUp,
    FocusWindowDown,
    MoveWindowUp,
    MoveWindowDown,
    IncreaseGap,
    DecreaseGap,
    IncreaseMainWidth,
    DecreaseMainWidth,
    GotoWorkspace(WorkspaceId),
    SendWindowToWorkspace(WorkspaceId),
}
