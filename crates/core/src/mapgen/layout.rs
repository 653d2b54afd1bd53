//! Rectangular rooms: placement geometry and interior carving.

use rand_chacha::rand_core::Rng;

use crate::random::range_inclusive;
use crate::state::Map;
use crate::types::{Pos, TileKind};

/// Outer rectangle of a room; the walls sit on its edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct RoomRect {
    pub(super) x1: i32,
    pub(super) y1: i32,
    pub(super) x2: i32,
    pub(super) y2: i32,
}

impl RoomRect {
    pub(super) fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x1: x, y1: y, x2: x + width, y2: y + height }
    }

    pub(super) fn center(self) -> Pos {
        Pos::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Cells strictly inside the outer rectangle.
    pub(super) fn inner(self) -> impl Iterator<Item = Pos> {
        ((self.y1 + 1)..self.y2)
            .flat_map(move |y| ((self.x1 + 1)..self.x2).map(move |x| Pos::new(x, y)))
    }

    /// Edge-inclusive overlap test.
    pub(super) fn intersects(self, other: &Self) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    pub(super) fn random_inner_point<R: Rng + ?Sized>(self, rng: &mut R) -> Pos {
        let x = range_inclusive(rng, self.x1 + 1, self.x2 - 1);
        let y = range_inclusive(rng, self.y1 + 1, self.y2 - 1);
        Pos::new(x, y)
    }
}

pub(super) fn carve_room(map: &mut Map, room: RoomRect) {
    for pos in room.inner() {
        map.set_tile(pos, TileKind::Floor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_lies_in_interior_for_minimum_room() {
        let room = RoomRect::new(4, 4, 3, 3);
        let center = room.center();
        assert!(room.inner().any(|pos| pos == center));
        assert_eq!(room.inner().count(), 4);
    }

    #[test]
    fn touching_edges_count_as_intersection() {
        let left = RoomRect::new(0, 0, 5, 5);
        let touching = RoomRect::new(5, 0, 4, 4);
        let apart = RoomRect::new(6, 0, 4, 4);
        assert!(left.intersects(&touching));
        assert!(touching.intersects(&left));
        assert!(!left.intersects(&apart));
    }

    #[test]
    fn carving_only_touches_interior() {
        let mut map = Map::new(10, 10);
        let room = RoomRect::new(1, 1, 4, 4);
        carve_room(&mut map, room);
        assert_eq!(map.tile_at(Pos::new(1, 1)), TileKind::Wall);
        assert_eq!(map.tile_at(Pos::new(2, 2)), TileKind::Floor);
        assert_eq!(map.tile_at(Pos::new(4, 4)), TileKind::Floor);
        assert_eq!(map.tile_at(Pos::new(5, 5)), TileKind::Wall);
    }
}
