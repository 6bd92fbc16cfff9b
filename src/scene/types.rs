pub use glam::DVec2 as Vec2;

/// Axis-aligned client rectangle (position plus size).
///
/// Width and height are signed: a transformer proposal can cross over
/// itself, and the bound-box function is what rejects those.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Point containment, tolerant of negative width or height.
    pub fn contains(&self, point: Vec2) -> bool {
        let (min_x, max_x) = min_max(self.x, self.right());
        let (min_y, max_y) = min_max(self.y, self.bottom());
        point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
    }
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// One of the eight resize anchors the transformer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleName {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl HandleName {
    pub const ALL: [HandleName; 8] = [
        HandleName::TopLeft,
        HandleName::Top,
        HandleName::TopRight,
        HandleName::Right,
        HandleName::BottomRight,
        HandleName::Bottom,
        HandleName::BottomLeft,
        HandleName::Left,
    ];

    pub fn to_kebab_case(&self) -> &'static str {
        match self {
            HandleName::Right => "right",
            HandleName::Bottom => "bottom",
            HandleName::Left => "left",
            HandleName::Top => "top",
            HandleName::BottomRight => "bottom-right",
            HandleName::BottomLeft => "bottom-left",
            HandleName::TopRight => "top-right",
            HandleName::TopLeft => "top-left",
        }
    }

    pub fn cursor(&self) -> &'static str {
        match self {
            HandleName::Right | HandleName::Left => "ew-resize",
            HandleName::Top | HandleName::Bottom => "ns-resize",
            HandleName::TopLeft | HandleName::BottomRight => "nwse-resize",
            HandleName::TopRight | HandleName::BottomLeft => "nesw-resize",
        }
    }

    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            HandleName::TopLeft
                | HandleName::TopRight
                | HandleName::BottomLeft
                | HandleName::BottomRight
        )
    }

    /// Whether dragging this anchor moves the left edge.
    pub fn moves_left(&self) -> bool {
        matches!(
            self,
            HandleName::Left | HandleName::TopLeft | HandleName::BottomLeft
        )
    }

    pub fn moves_right(&self) -> bool {
        matches!(
            self,
            HandleName::Right | HandleName::TopRight | HandleName::BottomRight
        )
    }

    pub fn moves_top(&self) -> bool {
        matches!(
            self,
            HandleName::Top | HandleName::TopLeft | HandleName::TopRight
        )
    }

    pub fn moves_bottom(&self) -> bool {
        matches!(
            self,
            HandleName::Bottom | HandleName::BottomLeft | HandleName::BottomRight
        )
    }

    /// Anchor center for a given client rectangle.
    pub fn calc_position(&self, bbox: &BBox) -> Vec2 {
        let mid = bbox.center();
        match self {
            HandleName::TopLeft => Vec2::new(bbox.x, bbox.y),
            HandleName::Top => Vec2::new(mid.x, bbox.y),
            HandleName::TopRight => Vec2::new(bbox.right(), bbox.y),
            HandleName::Right => Vec2::new(bbox.right(), mid.y),
            HandleName::BottomRight => Vec2::new(bbox.right(), bbox.bottom()),
            HandleName::Bottom => Vec2::new(mid.x, bbox.bottom()),
            HandleName::BottomLeft => Vec2::new(bbox.x, bbox.bottom()),
            HandleName::Left => Vec2::new(bbox.x, mid.y),
        }
    }
}
