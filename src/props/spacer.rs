//! Spacer props.

use super::size::SizeProp;

/// Props for fixed-size spacers.
///
/// The spacer is `units * grid` pixels long unless `size` is given, in which
/// case `units` is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpacerProps {
    /// Number of grid steps, 1 when unset
    pub units: Option<f64>,
    pub size: Option<SizeProp>,
    pub debug: bool,
}

impl SpacerProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(mut self, units: f64) -> Self {
        self.units = Some(units);
        self
    }

    pub fn size(mut self, size: impl Into<SizeProp>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn debug(mut self) -> Self {
        self.debug = true;
        self
    }
}

/// Props for spacers that flex to fill space.
///
/// A zero factor counts as unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlexSpacerProps {
    pub grow: Option<f64>,
    pub shrink: Option<f64>,
    pub debug: bool,
}

impl FlexSpacerProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grow(mut self, factor: f64) -> Self {
        self.grow = Some(factor);
        self
    }

    pub fn shrink(mut self, factor: f64) -> Self {
        self.shrink = Some(factor);
        self
    }

    pub fn debug(mut self) -> Self {
        self.debug = true;
        self
    }
}
