// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay placement from trigger and document geometry.
//!
//! ## Formulas
//!
//! Offsets are relative to the document body's top-left, so a scrolled
//! document (whose body rect has moved up or left) is compensated for.
//!
//! | Side | `top` | `left` |
//! |---|---|---|
//! | `top` | trigger top | trigger horizontal center |
//! | `bottom` | trigger bottom | trigger horizontal center |
//! | `left` | trigger vertical center | trigger left |
//! | `right` | trigger vertical center | trigger right |
//!
//! The anchor is an edge midpoint; centering the overlay on it is left to styling.
//! Without a side, nothing is set and the overlay stays at its default flow position.
//!
//! ```
//! use kurbo::Rect;
//! use understory_tooltip::Side;
//! use understory_tooltip::position::compute;
//!
//! let trigger = Rect::new(50.0, 100.0, 150.0, 130.0);
//! let body = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let style = compute(trigger, body, Some(Side::Right));
//! assert_eq!(style.to_string(), "left: 150px; top: 115px");
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::types::Side;

/// A positioned CSS property.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Inset {
    /// `top`
    Top,
    /// `left`
    Left,
}

impl Inset {
    /// CSS property name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
        }
    }
}

/// Computed placement: zero or two insets in pixels, in the order they were set.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PositionStyle {
    entries: [Option<(Inset, f64)>; 2],
}

impl PositionStyle {
    fn pair(first: (Inset, f64), second: (Inset, f64)) -> Self {
        Self {
            entries: [Some(first), Some(second)],
        }
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    /// True when no property is set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pixel value of `inset`, if set.
    pub fn get(&self, inset: Inset) -> Option<f64> {
        self.iter().find(|(i, _)| *i == inset).map(|(_, v)| v)
    }

    /// Pixel value of `top`, if set.
    pub fn top(&self) -> Option<f64> {
        self.get(Inset::Top)
    }

    /// Pixel value of `left`, if set.
    pub fn left(&self) -> Option<f64> {
        self.get(Inset::Left)
    }

    /// Iterate set properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Inset, f64)> + '_ {
        self.entries.iter().flatten().copied()
    }

    /// CSS value of `inset`, e.g. `"100px"`.
    pub fn css_value(&self, inset: Inset) -> Option<String> {
        self.get(inset).map(px)
    }

    /// Property/value pairs ready for a style attribute.
    pub fn to_css(&self) -> Vec<(&'static str, String)> {
        self.iter().map(|(i, v)| (i.as_str(), px(v))).collect()
    }
}

impl core::fmt::Display for PositionStyle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (n, (inset, value)) in self.iter().enumerate() {
            if n > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {value}px", inset.as_str())?;
        }
        Ok(())
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Compute the overlay style for `side` from the trigger and body rectangles.
///
/// `None` (an unrecognized position) yields an empty style.
pub fn compute(trigger: Rect, body: Rect, side: Option<Side>) -> PositionStyle {
    let Some(side) = side else {
        return PositionStyle::default();
    };

    let offset_top = trigger.y0 - body.y0;
    let offset_bottom = trigger.y1 - body.y0;
    let offset_left = trigger.x0 - body.x0;
    let offset_right = trigger.x1 - body.x0;
    let center_x = offset_left + trigger.width() / 2.0;
    let center_y = offset_top + trigger.height() / 2.0;

    match side {
        Side::Top => PositionStyle::pair((Inset::Top, offset_top), (Inset::Left, center_x)),
        Side::Bottom => PositionStyle::pair((Inset::Top, offset_bottom), (Inset::Left, center_x)),
        Side::Left => PositionStyle::pair((Inset::Left, offset_left), (Inset::Top, center_y)),
        Side::Right => PositionStyle::pair((Inset::Left, offset_right), (Inset::Top, center_y)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    // top:100 left:50 bottom:130 right:150 (100x30)
    fn trigger() -> Rect {
        Rect::new(50.0, 100.0, 150.0, 130.0)
    }

    fn body() -> Rect {
        Rect::new(0.0, 0.0, 1024.0, 768.0)
    }

    fn css(style: &PositionStyle) -> Vec<(&'static str, String)> {
        style.to_css()
    }

    #[test]
    fn top_anchors_to_top_edge_center() {
        let s = compute(trigger(), body(), Some(Side::Top));
        assert_eq!(
            css(&s),
            vec![("top", "100px".to_string()), ("left", "100px".to_string())]
        );
    }

    #[test]
    fn right_anchors_to_right_edge_middle() {
        let s = compute(trigger(), body(), Some(Side::Right));
        assert_eq!(
            css(&s),
            vec![("left", "150px".to_string()), ("top", "115px".to_string())]
        );
    }

    #[test]
    fn bottom_anchors_to_bottom_edge_center() {
        let s = compute(trigger(), body(), Some(Side::Bottom));
        assert_eq!(s.top(), Some(130.0));
        assert_eq!(s.left(), Some(100.0));
    }

    #[test]
    fn left_anchors_to_left_edge_middle() {
        let s = compute(trigger(), body(), Some(Side::Left));
        assert_eq!(s.left(), Some(50.0));
        assert_eq!(s.top(), Some(115.0));
    }

    // Every supported side sets exactly two pixel properties.
    #[test]
    fn supported_sides_set_two_keys() {
        for side in Side::ALL {
            let s = compute(trigger(), body(), Some(side));
            assert_eq!(s.len(), 2, "{side}");
            assert!(s.top().is_some() && s.left().is_some(), "{side}");
            for (_, value) in s.to_css() {
                assert!(value.ends_with("px"), "{side}: {value}");
            }
        }
    }

    #[test]
    fn unknown_side_sets_nothing() {
        let s = compute(trigger(), body(), None);
        assert!(s.is_empty());
        assert_eq!(s.to_string(), "");
        assert_eq!(s.css_value(Inset::Top), None);
    }

    // A document scrolled by 40px down and 10px right has its body rect at (-10, -40).
    #[test]
    fn scroll_is_compensated() {
        let scrolled = Rect::new(-10.0, -40.0, 1014.0, 728.0);
        let s = compute(trigger(), scrolled, Some(Side::Top));
        assert_eq!(s.top(), Some(140.0));
        assert_eq!(s.left(), Some(110.0));
    }

    #[test]
    fn unmounted_trigger_positions_at_origin() {
        let s = compute(Rect::ZERO, body(), Some(Side::Right));
        assert_eq!(s.to_string(), "left: 0px; top: 0px");
    }

    #[test]
    fn fractional_values_keep_their_decimals() {
        let odd = Rect::new(0.0, 0.0, 25.0, 11.0);
        let s = compute(odd, body(), Some(Side::Bottom));
        assert_eq!(s.css_value(Inset::Left).as_deref(), Some("12.5px"));
        let s = compute(odd, body(), Some(Side::Left));
        assert_eq!(s.css_value(Inset::Top).as_deref(), Some("5.5px"));
    }
}
