use std::collections::BTreeSet;

/// Rooms that can still be won in the current run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RoomPool {
    rooms: BTreeSet<String>,
}

impl RoomPool {
    pub(crate) fn new<I>(rooms: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            rooms: rooms.into_iter().collect(),
        }
    }

    pub(crate) fn contains(&self, room: &str) -> bool {
        self.rooms.contains(room)
    }

    pub(crate) fn take(&mut self, room: &str) -> bool {
        self.rooms.remove(room)
    }

    /// Returns `true` only when the room was not already offered.
    pub(crate) fn release(&mut self, room: &str) -> bool {
        self.rooms.insert(room.to_string())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
