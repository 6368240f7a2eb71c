use crate::shape::QuadCurve;

/// Progress of the two-click curve construction.
///
/// The curve is owned here, outside the shape list, until the second press
/// commits it; abandoning the sequence simply drops it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CurveStep {
    #[default]
    AwaitingFirstClick,
    /// First drag in progress: end and control follow the pointer together
    DraggingEnd(QuadCurve),
    /// End point fixed; the next press commits the curve and bends it
    AwaitingSecondClick(QuadCurve),
}

impl CurveStep {
    /// The curve not yet committed to the list, if any
    pub fn pending(&self) -> Option<&QuadCurve> {
        match self {
            CurveStep::AwaitingFirstClick => None,
            CurveStep::DraggingEnd(curve) | CurveStep::AwaitingSecondClick(curve) => Some(curve),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, CurveStep::AwaitingFirstClick)
    }
}

/// Flags toggled from the surrounding UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditModes {
    /// Presses pick and drag existing shapes instead of creating new ones
    pub move_enabled: bool,
    /// Hovering a shape bakes it into the raster
    pub fix_enabled: bool,
    /// Hovering a shape deletes it
    pub erase_enabled: bool,
}

/// What a hover does to the shape under the pointer.
///
/// Fix wins when both fix and erase are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverAction {
    Fix,
    Erase,
}

impl EditModes {
    pub fn hover_action(&self) -> Option<HoverAction> {
        if self.fix_enabled {
            Some(HoverAction::Fix)
        } else if self.erase_enabled {
            Some(HoverAction::Erase)
        } else {
            None
        }
    }
}
