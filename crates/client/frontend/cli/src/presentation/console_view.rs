use anyhow::Result;
use client_frontend_core::{Console, Screen};
use game_core::Rgb;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use super::terminal::Tui;

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Copies console cells into the frame buffer, clipped to `area`.
pub struct ConsoleView<'a> {
    console: &'a Console,
}

impl<'a> ConsoleView<'a> {
    pub fn new(console: &'a Console) -> Self {
        Self { console }
    }
}

impl Widget for ConsoleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.min(self.console.width());
        let height = area.height.min(self.console.height());

        for y in 0..height {
            for x in 0..width {
                let Some(cell) = self.console.cell(x as i32, y as i32) else {
                    continue;
                };
                if let Some(target) = buf.cell_mut((area.x + x, area.y + y)) {
                    target
                        .set_char(cell.glyph)
                        .set_fg(to_color(cell.fg))
                        .set_bg(to_color(cell.bg));
                }
            }
        }
    }
}

/// [`Screen`] that draws into the real terminal.
pub struct TerminalScreen<'t> {
    terminal: &'t mut Tui,
}

impl<'t> TerminalScreen<'t> {
    pub fn new(terminal: &'t mut Tui) -> Self {
        Self { terminal }
    }
}

impl Screen for TerminalScreen<'_> {
    fn present(&mut self, console: &Console) -> Result<()> {
        self.terminal
            .draw(|frame| frame.render_widget(ConsoleView::new(console), frame.area()))?;
        Ok(())
    }
}
