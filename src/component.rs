//! Component trait - Interface for UI components
//!
//! Dialogs, the table and the shell each keep their own state and talk to the
//! App only through Actions.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` / `handle_mouse_event` turn input into an Action.
///    Local input state (text being typed, calendar cursor) may change here.
/// 2. `update` applies an Action and may return a follow-up Action.
/// 3. `draw` renders into the given area.
pub trait Component {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render the component. Rendering must not change shared application state.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
