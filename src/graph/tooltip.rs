/// Tooltip offset from the pointer
pub const POINTER_OFFSET_X: f64 = 10.0;
pub const POINTER_OFFSET_Y: f64 = -30.0;

/// Gap kept between the tooltip and the viewport edge
pub const EDGE_MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

/// Position the tooltip next to the pointer while keeping it inside the viewport
pub fn place_tooltip(pointer_x: f64, pointer_y: f64, tooltip: Size, viewport: Size) -> Placement {
    let mut left = pointer_x + POINTER_OFFSET_X;
    let mut top = pointer_y + POINTER_OFFSET_Y;

    if left + tooltip.width > viewport.width {
        left = viewport.width - tooltip.width - EDGE_MARGIN;
    }
    if top + tooltip.height > viewport.height {
        top = viewport.height - tooltip.height - EDGE_MARGIN;
    }
    if left < EDGE_MARGIN {
        left = EDGE_MARGIN;
    }
    if top < EDGE_MARGIN {
        top = EDGE_MARGIN;
    }

    Placement { left, top }
}
