// Pointer coordinate transform
//
// Touch panels and mice report coordinates in the panel's native orientation.
// The transform maps them into view space: axes are swapped first, then each
// axis is optionally mirrored against the view size.

use glam::{IVec2, UVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Orientation flags, set at startup and on orientation changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerModes {
    pub invert_x: bool,
    pub invert_y: bool,
    pub swap_axes: bool,
}

impl PointerModes {
    /// Raw panel coordinates to view coordinates
    pub fn transform(&self, raw: IVec2, view: UVec2) -> IVec2 {
        let mut out = if self.swap_axes { IVec2::new(raw.y, raw.x) } else { raw };
        let view = view.as_ivec2();

        if self.invert_x {
            out.x = view.x - out.x;
        }
        if self.invert_y {
            out.y = view.y - out.y;
        }
        out
    }

    /// View coordinates back to raw panel coordinates
    pub fn inverse(&self, pos: IVec2, view: UVec2) -> IVec2 {
        let view = view.as_ivec2();
        let mut out = pos;

        if self.invert_x {
            out.x = view.x - out.x;
        }
        if self.invert_y {
            out.y = view.y - out.y;
        }
        if self.swap_axes {
            IVec2::new(out.y, out.x)
        } else {
            out
        }
    }
}

/// View position scaled to 0..1 on both axes, for touch / light-gun input
pub fn normalized(pos: IVec2, view: UVec2) -> Vec2 {
    let size = view.max(UVec2::ONE).as_vec2();
    (pos.as_vec2() / size).clamp(Vec2::ZERO, Vec2::ONE)
}
