//! Input gate around an action in flight

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ActionRejected;
use crate::ports::BattleView;

/// Closed from the moment an action is submitted until its playback is
/// over. Submissions while closed are rejected, never queued.
#[derive(Clone)]
pub struct ActionGate {
    closed: Arc<AtomicBool>,
    view: Arc<dyn BattleView>,
}

impl ActionGate {
    pub fn new(view: Arc<dyn BattleView>) -> Self {
        Self {
            closed: Arc::new(AtomicBool::new(false)),
            view,
        }
    }

    /// Close the gate and disable input.
    ///
    /// The gate reopens, and input comes back, when the returned pass drops.
    pub fn try_close(&self) -> Result<GatePass, ActionRejected> {
        self.closed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ActionRejected)?;

        self.view.set_input_enabled(false);
        Ok(GatePass { gate: self.clone() })
    }

    pub fn is_open(&self) -> bool {
        !self.closed.load(Ordering::Acquire)
    }
}

impl fmt::Debug for ActionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionGate")
            .field("open", &self.is_open())
            .finish()
    }
}

/// Held while an action plays
#[must_use = "dropping the pass reopens the gate"]
#[derive(Debug)]
pub struct GatePass {
    gate: ActionGate,
}

impl Drop for GatePass {
    fn drop(&mut self) {
        self.gate.view.set_input_enabled(true);
        self.gate.closed.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingView, ViewEvent};

    #[test]
    fn test_second_action_is_rejected() {
        let view = RecordingView::new();
        let gate = ActionGate::new(view.clone());

        let pass = gate.try_close().unwrap();
        assert!(!gate.is_open());
        assert_eq!(gate.try_close().unwrap_err(), ActionRejected);

        drop(pass);
        assert!(gate.is_open());
        assert!(gate.try_close().is_ok());
    }

    #[test]
    fn test_input_follows_the_pass() {
        let view = RecordingView::new();
        let gate = ActionGate::new(view.clone());

        let pass = gate.try_close().unwrap();
        let _ = gate.try_close();
        drop(pass);

        assert_eq!(
            view.input_events(),
            vec![ViewEvent::Input(false), ViewEvent::Input(true)]
        );
    }
}
