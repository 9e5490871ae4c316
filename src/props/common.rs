//! Props shared by layout and typography elements.

use std::fmt;

use super::size::SizeProp;

/// Edge offsets for an absolutely positioned element.
///
/// Only offsets that are set are emitted, so a partial record pins the
/// element on some edges and leaves the rest to the layout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offsets {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}

impl Offsets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, value: f64) -> Self {
        self.top = Some(value);
        self
    }

    pub fn right(mut self, value: f64) -> Self {
        self.right = Some(value);
        self
    }

    pub fn bottom(mut self, value: f64) -> Self {
        self.bottom = Some(value);
        self
    }

    pub fn left(mut self, value: f64) -> Self {
        self.left = Some(value);
        self
    }

    /// Offsets as `(property, value)` pairs in top, right, bottom, left order.
    pub fn entries(&self) -> [(&'static str, Option<f64>); 4] {
        [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ]
    }
}

/// Absolute positioning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Absolute {
    /// Pinned to all four edges at 0
    Fill,
    Offsets(Offsets),
}

impl Absolute {
    pub fn offsets(&self) -> Offsets {
        match self {
            Absolute::Fill => Offsets {
                top: Some(0.0),
                right: Some(0.0),
                bottom: Some(0.0),
                left: Some(0.0),
            },
            Absolute::Offsets(offsets) => *offsets,
        }
    }
}

impl From<Offsets> for Absolute {
    fn from(offsets: Offsets) -> Self {
        Absolute::Offsets(offsets)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Solid,
    Dotted,
    Dashed,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Dashed => "dashed",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A border: width in pixels, line style and a theme color name.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f64,
    pub style: BorderStyle,
    pub color: String,
}

impl Border {
    pub fn new(width: f64, style: BorderStyle, color: impl Into<String>) -> Self {
        Self {
            width,
            style,
            color: color.into(),
        }
    }
}

/// Props every layout and typography element accepts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonProps {
    /// Fill the remaining space of the parent (`flex: 1`)
    pub grow: bool,
    /// Center content; layouts center both axes, typography centers text
    pub center: bool,
    pub px: Option<SizeProp>,
    pub py: Option<SizeProp>,
    /// Background color name
    pub bg: Option<String>,
    pub absolute: Option<Absolute>,
    pub radius: Option<SizeProp>,
    pub border: Option<Border>,
    /// Show a debug outline for just this element
    pub debug: bool,
}

impl CommonProps {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Fluent setters for the common props of any props type that embeds them.
///
/// ```rust
/// use turbo_props::{Absolute, CommonBuilder, LayoutProps, SizeProp};
///
/// let props = LayoutProps::new()
///     .grow()
///     .px(SizeProp::Default)
///     .py(4)
///     .absolute(Absolute::Fill);
/// assert!(props.common.grow);
/// ```
pub trait CommonBuilder: Sized {
    fn common(&self) -> &CommonProps;

    fn common_mut(&mut self) -> &mut CommonProps;

    fn grow(mut self) -> Self {
        self.common_mut().grow = true;
        self
    }

    fn center(mut self) -> Self {
        self.common_mut().center = true;
        self
    }

    fn px(mut self, value: impl Into<SizeProp>) -> Self {
        self.common_mut().px = Some(value.into());
        self
    }

    fn py(mut self, value: impl Into<SizeProp>) -> Self {
        self.common_mut().py = Some(value.into());
        self
    }

    fn bg(mut self, color: impl Into<String>) -> Self {
        self.common_mut().bg = Some(color.into());
        self
    }

    fn absolute(mut self, value: impl Into<Absolute>) -> Self {
        self.common_mut().absolute = Some(value.into());
        self
    }

    fn radius(mut self, value: impl Into<SizeProp>) -> Self {
        self.common_mut().radius = Some(value.into());
        self
    }

    fn border(mut self, border: Border) -> Self {
        self.common_mut().border = Some(border);
        self
    }

    fn debug(mut self) -> Self {
        self.common_mut().debug = true;
        self
    }
}

impl CommonBuilder for CommonProps {
    fn common(&self) -> &CommonProps {
        self
    }

    fn common_mut(&mut self) -> &mut CommonProps {
        self
    }
}
