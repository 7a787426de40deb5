//! Drawing routines for an active session.
//!
//! Layout (80x50 console):
//!
//! ```text
//! rows 0..43   map
//! row  45      HP bar (20 wide)     | message log at x=21, 40x5
//! row  47      turn counter         |
//! ```
use game_core::{Entity, Message, Position, Session, color};

use crate::console::{Cell, Console, wrap};

pub const PANEL_HEIGHT: i32 = 5;
pub const BAR_WIDTH: i32 = 20;
pub const LOG_X: i32 = 21;
pub const LOG_WIDTH: i32 = 40;

/// Row the bottom panel starts on.
pub fn panel_top(console: &Console) -> i32 {
    console.height() as i32 - PANEL_HEIGHT
}

pub fn render_session(console: &mut Console, session: &Session) {
    render_map(console, session);

    let top = panel_top(console);
    if let Some(fighter) = session.player_fighter() {
        render_bar(console, 0, top, fighter.hp, fighter.max_hp, BAR_WIDTH);
    }
    console.print(0, top + 2, &format!("Turn: {}", session.turn()), color::WHITE);

    render_messages(console, session.log.iter(), LOG_X, top, LOG_WIDTH, PANEL_HEIGHT);
}

/// Terrain, then entities by render order with the player drawn last.
pub fn render_map(console: &mut Console, session: &Session) {
    let map = &session.map;
    for y in 0..map.height() as i32 {
        for x in 0..map.width() as i32 {
            if let Some(tile) = map.tile(Position::new(x, y)) {
                let fg = if tile.is_walkable() { color::FLOOR } else { color::WALL };
                console.put(x, y, tile.glyph(), fg);
            }
        }
    }

    let mut entities: Vec<&Entity> = map.entities.iter().collect();
    entities.sort_by_key(|entity| entity.render_order);
    for entity in entities.into_iter().chain(std::iter::once(&session.player)) {
        console.put(entity.position.x, entity.position.y, entity.glyph, entity.color);
    }
}

pub fn render_bar(console: &mut Console, x: i32, y: i32, value: u32, maximum: u32, width: i32) {
    let filled = if maximum == 0 {
        0
    } else {
        (value.min(maximum) as i64 * width as i64 / maximum as i64) as i32
    };

    let empty = Cell {
        glyph: ' ',
        fg: color::BAR_TEXT,
        bg: color::BAR_EMPTY,
    };
    console.fill_rect(x, y, width, 1, empty);
    if filled > 0 {
        console.fill_rect(x, y, filled, 1, Cell { bg: color::BAR_FILLED, ..empty });
    }
    console.print(x + 1, y, &format!("HP: {value}/{maximum}"), color::BAR_TEXT);
}

/// Draws `messages` bottom-up in the given box, newest at the bottom.
///
/// Each message is word-wrapped to `width`; older messages are cut off once
/// the box is full.
pub fn render_messages<'a, I>(console: &mut Console, messages: I, x: i32, y: i32, width: i32, height: i32)
where
    I: DoubleEndedIterator<Item = &'a Message>,
{
    let mut row = y + height - 1;
    for message in messages.rev() {
        for line in wrap(&message.full_text(), width.max(1) as usize).iter().rev() {
            if row < y {
                return;
            }
            console.print(x, row, line, message.color);
            row -= 1;
        }
    }
}

/// Framed, scrollable view of the full log ending at `cursor`.
pub fn render_history(console: &mut Console, session: &Session, cursor: usize) {
    let width = console.width() as i32;
    let height = panel_top(console) - 1;
    console.draw_frame(0, 0, width, height, "Message history", color::WHITE);

    let shown: Vec<&Message> = session.log.iter().take(cursor + 1).collect();
    render_messages(console, shown.into_iter(), 1, 1, width - 2, height - 2);
}
