use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::game::{FrameInput, Pong, FIELD_HEIGHT};

/// Session state: owns the game and the input sampled between ticks.
pub struct App {
    pub should_quit: bool,
    pub paused: bool,
    pub game: Pong,
    /// Terminal area the field was last drawn into, set by the renderer.
    /// Used to map mouse rows back into field coordinates.
    pub field_area: Rect,
    pointer_y: i32,
    up_held: bool,
    down_held: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            paused: false,
            game: Pong::new(),
            field_area: Rect::default(),
            pointer_y: FIELD_HEIGHT / 2,
            up_held: false,
            down_held: false,
        }
    }

    pub fn on_tick(&mut self) {
        if self.paused {
            return;
        }
        let input = FrameInput {
            pointer_y: self.pointer_y,
            up_held: self.up_held,
            down_held: self.down_held,
        };
        self.game.tick(&input);
        // Held flags are re-armed by key autorepeat between ticks.
        self.up_held = false;
        self.down_held = false;
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            // Toggle fires once per press; the event layer drops repeats of
            // kind other than Press, so holding 'r' does not oscillate.
            KeyCode::Char('r') | KeyCode::Char('R') => self.game.toggle_mode(),
            KeyCode::Char('p') | KeyCode::Char('P') => self.paused = !self.paused,
            KeyCode::Up => self.up_held = true,
            KeyCode::Down => self.down_held = true,
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
            return;
        }
        let area = self.field_area;
        if area.height == 0 {
            return;
        }
        let row = mouse.row.saturating_sub(area.y).min(area.height - 1);
        // Center of the hovered cell, scaled up to field units.
        self.pointer_y =
            ((row as i32 * 2 + 1) * FIELD_HEIGHT) / (area.height as i32 * 2);
    }
}
