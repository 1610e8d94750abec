// File: crates/bizchart-core/src/geometry.rs
// Summary: Integer layout rectangles and float drawing geometry.

/// Pixel rectangle used by the layout engine.
/// Width/height may be zero or negative for degenerate input; see [`Rect::is_drawable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const EMPTY: Rect = Rect::from_ltrb(0, 0, 0, 0);

    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// A rectangle with non-positive width or height has nothing to draw.
    pub const fn is_drawable(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }

    /// Shrink (positive `dx`/`dy`) or grow (negative) on every side.
    pub const fn inset(&self, dx: i32, dy: i32) -> Self {
        Self::from_ltrb(self.left + dx, self.top + dy, self.right - dx, self.bottom - dy)
    }

    pub fn to_f32(&self) -> RectF {
        RectF::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeF {
    pub width: f32,
    pub height: f32,
}

impl SizeF {
    pub const fn new(width: f32, height: f32) -> Self { Self { width, height } }
}

/// Float rectangle passed to drawing primitives.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn is_drawable(&self) -> bool { self.width() > 0.0 && self.height() > 0.0 }
    pub fn center(&self) -> PointF {
        PointF::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
