/// Player intents produced by input handling and resolved by [`crate::Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Skip the turn.
    Wait,
    /// Step by one tile; bumping into a blocking entity stays in place.
    Move { dx: i32, dy: i32 },
    /// Take the first item on the player's tile.
    Pickup,
}

impl Action {
    pub const fn step(dx: i32, dy: i32) -> Self {
        Self::Move { dx, dy }
    }
}
