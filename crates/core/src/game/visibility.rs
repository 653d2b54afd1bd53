//! Recursive octant shadowcasting over the map's visible and explored bitmaps.

use crate::state::Map;
use crate::types::Pos;

/// Clears `visible`, recomputes it from `origin`, then folds it into `explored`.
/// A cell is lit when its squared distance is below `radius * radius`;
/// the origin is always lit.
pub fn compute_fov(map: &mut Map, origin: Pos, radius: i32) {
    map.clear_visible();
    map.set_visible(origin);
    for octant in 0..8 {
        scan_octant(map, origin, radius, 1, Slope::new(0, 1), Slope::new(1, 1), octant);
    }
    map.accumulate_explored();
}

/// Maps octant-local (distance, height) onto the grid.
/// Bit 0 mirrors the distance axis, bit 1 the height axis, bit 2 swaps them.
fn transform_octant(origin: Pos, dist: i32, height: i32, octant: u8) -> Pos {
    let d = if octant & 0x1 != 0 { -dist } else { dist };
    let h = if octant & 0x2 != 0 { -height } else { height };
    if octant & 0x4 != 0 { Pos::new(origin.x + h, origin.y + d) } else { Pos::new(origin.x + d, origin.y + h) }
}

/// Rational slope `num / den` with `den > 0`.
#[derive(Clone, Copy, Debug)]
struct Slope {
    num: i32,
    den: i32,
}

impl Slope {
    fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    /// `floor(slope * dist + 0.5)`
    fn column(self, dist: i32) -> i32 {
        (2 * self.num * dist + self.den).div_euclid(2 * self.den)
    }
}

fn scan_octant(
    map: &mut Map,
    origin: Pos,
    radius: i32,
    dist: i32,
    low: Slope,
    high: Slope,
    octant: u8,
) {
    if dist > radius {
        return;
    }
    let first = low.column(dist);
    let last = high.column(dist);
    let radius_squared = radius * radius;

    let mut low = low;
    let mut in_gap = false;
    for height in first..=last {
        let pos = transform_octant(origin, dist, height, octant);
        if origin.distance_squared(pos) < radius_squared {
            map.set_visible(pos);
        }
        if map.is_opaque(pos) {
            if in_gap {
                scan_octant(
                    map,
                    origin,
                    radius,
                    dist + 1,
                    low,
                    Slope::new(2 * height - 1, 2 * dist),
                    octant,
                );
            }
            // The shadow covers the whole opaque cell, not just its near edge.
            low = Slope::new(2 * height + 1, 2 * dist);
            in_gap = false;
        } else {
            in_gap = true;
            if height == last {
                scan_octant(map, origin, radius, dist + 1, low, high, octant);
            }
        }
    }
}

#[cfg(test)]
fn draw_map_diag(map: &Map, origin: Pos) -> String {
    let mut text = String::new();
    for y in 0..map.height() {
        for x in 0..map.width() {
            let p = Pos::new(x as i32, y as i32);
            let c = if p == origin { '@' } else { map.tile_at(p).glyph() };
            let v = if map.is_visible(p) { 'v' } else { 'h' };
            text.push_str(&format!("{c}{v} "));
        }
        text.push('\n');
    }
    text
}
