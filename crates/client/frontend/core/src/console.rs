//! Fixed-size character grid every handler renders into.
use anyhow::Result;
use game_core::Rgb;
use game_core::color;

/// One character cell: glyph plus foreground and background colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: color::WHITE,
            bg: color::BLACK,
        }
    }
}

/// Off-screen console. Coordinates outside the grid are clipped silently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Console {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Console {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let in_bounds = x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32;
        in_bounds.then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Sets glyph and foreground, keeping the background.
    pub fn put(&mut self, x: i32, y: i32, glyph: char, fg: Rgb) {
        if let Some(i) = self.index(x, y) {
            let cell = &mut self.cells[i];
            cell.glyph = glyph;
            cell.fg = fg;
        }
    }

    pub fn set_bg(&mut self, x: i32, y: i32, bg: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.cells[i].bg = bg;
        }
    }

    pub fn print(&mut self, x: i32, y: i32, text: &str, fg: Rgb) {
        for (offset, ch) in text.chars().enumerate() {
            self.put(x + offset as i32, y, ch, fg);
        }
    }

    pub fn print_centered(&mut self, y: i32, text: &str, fg: Rgb) {
        let len = text.chars().count() as i32;
        let x = (self.width as i32 - len) / 2;
        self.print(x, y, text, fg);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, fill: Cell) {
        for row in y..y + height {
            for col in x..x + width {
                if let Some(i) = self.index(col, row) {
                    self.cells[i] = fill;
                }
            }
        }
    }

    /// Draws a single-line box with an optional title on the top edge.
    pub fn draw_frame(&mut self, x: i32, y: i32, width: i32, height: i32, title: &str, fg: Rgb) {
        if width < 2 || height < 2 {
            return;
        }
        let (right, bottom) = (x + width - 1, y + height - 1);

        for col in x + 1..right {
            self.put(col, y, '─', fg);
            self.put(col, bottom, '─', fg);
        }
        for row in y + 1..bottom {
            self.put(x, row, '│', fg);
            self.put(right, row, '│', fg);
        }
        self.put(x, y, '┌', fg);
        self.put(right, y, '┐', fg);
        self.put(x, bottom, '└', fg);
        self.put(right, bottom, '┘', fg);

        if !title.is_empty() {
            let label = format!(" {title} ");
            let len = label.chars().count() as i32;
            self.print(x + (width - len) / 2, y, &label, fg);
        }
    }

    /// Glyphs of one row as a string; empty for rows outside the console.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width as i32)
            .filter_map(|x| self.cell(x, y).map(|c| c.glyph))
            .collect()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Breaks `text` into lines of at most `width` characters on word boundaries.
///
/// Words longer than `width` are split. Embedded newlines start new lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                lines.push(word.drain(..width).collect());
            }
            if word.is_empty() {
                continue;
            }

            let line_len = line.chars().count();
            let needed = if line.is_empty() { word.len() } else { line_len + 1 + word.len() };
            if needed > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.extend(word);
        }
        if !line.is_empty() || paragraph.trim().is_empty() {
            lines.push(line);
        }
    }

    lines
}

/// Output surface a finished console is presented on.
pub trait Screen: Send {
    fn present(&mut self, console: &Console) -> Result<()>;
}
