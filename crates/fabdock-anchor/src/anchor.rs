//! Anchor positions within a container rectangle.

use fabdock_geometry::{LayoutDirection, Point, Rect};

/// Horizontal component of an anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalAnchor {
    /// Leading edge: left under LTR, right under RTL.
    Start,
    Center,
    /// Trailing edge: right under LTR, left under RTL.
    End,
}

impl HorizontalAnchor {
    /// X coordinate of this anchor on `container`.
    pub fn resolve_x(&self, container: Rect, direction: LayoutDirection) -> f32 {
        let (leading, trailing) = if direction.is_rtl() {
            (container.right(), container.left())
        } else {
            (container.left(), container.right())
        };
        match self {
            HorizontalAnchor::Start => leading,
            HorizontalAnchor::Center => container.center_x(),
            HorizontalAnchor::End => trailing,
        }
    }
}

/// Vertical component of an anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalAnchor {
    Top,
    Center,
    Bottom,
}

impl VerticalAnchor {
    /// Y coordinate of this anchor on `container`.
    pub fn resolve_y(&self, container: Rect) -> f32 {
        match self {
            VerticalAnchor::Top => container.top(),
            VerticalAnchor::Center => container.center_y(),
            VerticalAnchor::Bottom => container.bottom(),
        }
    }
}

/// One of the nine rest positions of the action button on its container:
/// the four corners, the four edge midpoints, and the center.
///
/// Start/end variants follow the layout direction, so a `BottomEnd` button
/// sits bottom-right under LTR and bottom-left under RTL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopStart,
    TopCenter,
    TopEnd,
    CenterStart,
    Center,
    CenterEnd,
    BottomStart,
    BottomCenter,
    /// The conventional rest position for a floating action button.
    #[default]
    BottomEnd,
}

impl Anchor {
    /// All nine anchors in canonical order. Drop resolution enumerates
    /// candidates in this order and keeps the earliest one on distance ties.
    pub const CANONICAL: [Anchor; 9] = [
        Anchor::BottomStart,
        Anchor::BottomCenter,
        Anchor::BottomEnd,
        Anchor::CenterStart,
        Anchor::Center,
        Anchor::CenterEnd,
        Anchor::TopStart,
        Anchor::TopCenter,
        Anchor::TopEnd,
    ];

    /// The four corner anchors, the default allowed set for a button.
    pub const CORNERS: [Anchor; 4] = [
        Anchor::BottomStart,
        Anchor::BottomEnd,
        Anchor::TopStart,
        Anchor::TopEnd,
    ];

    /// Horizontal component of this anchor.
    pub const fn horizontal(self) -> HorizontalAnchor {
        match self {
            Anchor::TopStart | Anchor::CenterStart | Anchor::BottomStart => {
                HorizontalAnchor::Start
            }
            Anchor::TopCenter | Anchor::Center | Anchor::BottomCenter => HorizontalAnchor::Center,
            Anchor::TopEnd | Anchor::CenterEnd | Anchor::BottomEnd => HorizontalAnchor::End,
        }
    }

    /// Vertical component of this anchor.
    pub const fn vertical(self) -> VerticalAnchor {
        match self {
            Anchor::TopStart | Anchor::TopCenter | Anchor::TopEnd => VerticalAnchor::Top,
            Anchor::CenterStart | Anchor::Center | Anchor::CenterEnd => VerticalAnchor::Center,
            Anchor::BottomStart | Anchor::BottomCenter | Anchor::BottomEnd => VerticalAnchor::Bottom,
        }
    }

    /// The point on `container` this anchor stands for.
    pub fn reference_point(self, container: Rect, direction: LayoutDirection) -> Point {
        Point::new(
            self.horizontal().resolve_x(container, direction),
            self.vertical().resolve_y(container),
        )
    }
}
