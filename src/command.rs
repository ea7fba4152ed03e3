//! Command-based control for transition engines.
//!
//! Lets an outer application loop drive engines by message (e.g. from a
//! queue fed by sensors or a UI task) instead of calling methods directly.

use crate::engine::{EngineError, TransitionEngine};
use crate::strip::LedStrip;
use crate::time::{TimeInstant, TimeSource};
use crate::types::Mode;

/// Actions for controlling a transition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineAction {
    /// Select playback mode.
    SetMode(Mode),
    /// Fade toward a color.
    SetTarget { r: i32, g: i32, b: i32 },
    /// Flash a color, auto-reverting to off.
    Pulse { r: i32, g: i32, b: i32 },
    /// Set a color immediately, bypassing the fade.
    SetColor { r: i32, g: i32, b: i32 },
}

/// Command targeting a specific strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineCommand<Id> {
    pub strip_id: Id,
    pub action: EngineAction,
}

impl<Id> EngineCommand<Id> {
    /// Creates command.
    pub fn new(strip_id: Id, action: EngineAction) -> Self {
        Self { strip_id, action }
    }
}

impl<'t, I, S, T, const STEPS: usize> TransitionEngine<'t, I, S, T, STEPS>
where
    I: TimeInstant,
    S: LedStrip,
    T: TimeSource<I>,
{
    /// Handles an engine action by dispatching to the appropriate method.
    ///
    /// This is a convenience method for command-based control, allowing
    /// actions to be dispatched without matching on the action type manually.
    ///
    /// # Errors
    /// Propagates the dispatched method's error (invalid color, etc.).
    pub fn handle_action(&mut self, action: EngineAction) -> Result<(), EngineError> {
        match action {
            EngineAction::SetMode(mode) => {
                self.set_mode(mode);
                Ok(())
            }
            EngineAction::SetTarget { r, g, b } => self.set_target(r, g, b),
            EngineAction::Pulse { r, g, b } => self.pulse(r, g, b),
            EngineAction::SetColor { r, g, b } => self.set_color(r, g, b),
        }
    }
}
