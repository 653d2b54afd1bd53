//! Line rasterization for corridor carving.

use std::iter::Chain;

use crate::types::Pos;

/// Bresenham rasterization from `start` to `end`, both endpoints included.
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    current: Pos,
    end: Pos,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    finished: bool,
}

impl BresenhamLine {
    pub fn new(start: Pos, end: Pos) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = (end.y - start.y).abs();
        Self {
            current: start,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx - dy,
            finished: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.finished {
            return None;
        }
        let point = self.current;
        if point == self.end {
            self.finished = true;
            return Some(point);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.current.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.current.y += self.sy;
        }
        Some(point)
    }
}

/// L-shaped tunnel through one of the two corners of the bounding box.
/// The corner cell is yielded by both legs.
pub fn tunnel_between(
    start: Pos,
    end: Pos,
    horizontal_first: bool,
) -> Chain<BresenhamLine, BresenhamLine> {
    let corner =
        if horizontal_first { Pos::new(end.x, start.y) } else { Pos::new(start.x, end.y) };
    BresenhamLine::new(start, corner).chain(BresenhamLine::new(corner, end))
}
