use tokio::sync::watch;

/// Edit/view mode toggle, scoped to one mounted portfolio layout.
///
/// Each layout instance owns its own controller; sibling layouts never
/// share edit state, and a remounted layout starts over in view mode.
/// Descendant views and data-layer guards receive an [`EditModeHandle`]
/// through the layout's single hand-off point rather than any global
/// state.
pub struct EditModeController {
    tx: watch::Sender<bool>,
}

impl EditModeController {
    /// A fresh controller starts in view mode (`enabled == false`).
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Flip the mode and re-notify every handle. No other constraints.
    pub fn toggle(&self) {
        self.tx.send_modify(|enabled| *enabled = !*enabled);
        tracing::debug!(enabled = self.is_enabled(), "edit mode toggled");
    }

    pub fn is_enabled(&self) -> bool {
        *self.tx.borrow()
    }

    /// A cheap cloneable handle for descendant views and guards.
    pub fn handle(&self) -> EditModeHandle {
        EditModeHandle {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for EditModeController {
    fn default() -> Self {
        Self::new()
    }
}

/// Read side of one layout's edit mode.
///
/// `enabled == false` means strictly read-only: consumers hide mutation
/// affordances, and the mutating operations themselves treat calls as
/// no-ops (see `MutationWorkflow` and `ProfileStore`).
#[derive(Debug, Clone)]
pub struct EditModeHandle {
    rx: watch::Receiver<bool>,
}

impl EditModeHandle {
    pub fn is_enabled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait until the mode changes. Used by consumers that re-render on
    /// toggle; errors when the owning controller is gone.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.rx.changed().await
    }
}
