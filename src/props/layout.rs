//! Layout props: flex alignment, direction and cross-axis size.

use std::fmt;

use super::common::{CommonBuilder, CommonProps};
use super::size::Toggle;

/// Keywords accepted by `align-items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexAlign {
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
    Baseline,
}

impl FlexAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlexAlign::FlexStart => "flex-start",
            FlexAlign::FlexEnd => "flex-end",
            FlexAlign::Center => "center",
            FlexAlign::Stretch => "stretch",
            FlexAlign::Baseline => "baseline",
        }
    }
}

impl fmt::Display for FlexAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords accepted by `justify-content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexJustify {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl FlexJustify {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlexJustify::FlexStart => "flex-start",
            FlexJustify::FlexEnd => "flex-end",
            FlexJustify::Center => "center",
            FlexJustify::SpaceBetween => "space-between",
            FlexJustify::SpaceAround => "space-around",
            FlexJustify::SpaceEvenly => "space-evenly",
        }
    }
}

impl fmt::Display for FlexJustify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Props for flex containers (plain, row and column layouts).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutProps {
    pub common: CommonProps,
    /// Fixed cross-axis size: height for rows, width for columns
    pub size: Option<f64>,
    pub justify: Option<Toggle<FlexJustify>>,
    pub align: Option<Toggle<FlexAlign>>,
    /// Flip the main axis direction
    pub reverse: bool,
}

impl LayoutProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn justify(mut self, justify: impl Into<Toggle<FlexJustify>>) -> Self {
        self.justify = Some(justify.into());
        self
    }

    pub fn align(mut self, align: impl Into<Toggle<FlexAlign>>) -> Self {
        self.align = Some(align.into());
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

impl CommonBuilder for LayoutProps {
    fn common(&self) -> &CommonProps {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonProps {
        &mut self.common
    }
}
