use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use super::state::GameState;

/// Events the frame driver reacts to, decoded from crossterm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved over the terminal (mouse move, or drag as the
    /// touch-move analogue); coordinates are terminal cells
    PointerMoved { column: u16, row: u16 },
    /// Mouse click; only meaningful while game over
    Restart,
    Quit,
    Resized { cols: u16, rows: u16 },
}

/// Drain all pending terminal events into game input events.
/// Never blocks; the frame limiter owns pacing.
pub fn poll_events() -> Result<Vec<InputEvent>, io::Error> {
    let mut events = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => events.push(InputEvent::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    events.push(InputEvent::Quit)
                }
                _ => {}
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    events.push(InputEvent::PointerMoved {
                        column: mouse.column,
                        row: mouse.row,
                    })
                }
                MouseEventKind::Down(MouseButton::Left) => events.push(InputEvent::Restart),
                _ => {}
            },
            Event::Resize(cols, rows) => events.push(InputEvent::Resized { cols, rows }),
            _ => {}
        }
    }

    Ok(events)
}

/// Center the player paddle on the pointer's field-space y, clamped to the
/// field. No-op while game over.
pub fn apply_pointer(state: &mut GameState, field_y: f32) {
    if state.game_over {
        return;
    }
    state.player.y = field_y - state.player.height / 2.0;
    let field_height = state.field_height;
    state.player.clamp_y(field_height);
}
