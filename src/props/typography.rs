//! Typography props.

use super::common::{CommonBuilder, CommonProps};
use super::size::SizeProp;

/// Props for text elements. Every unset field falls back to the bound
/// defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypographyProps {
    pub common: CommonProps,
    /// Font size; `None` and `SizeProp::Default` use `defaults.sizes.font`
    pub size: Option<SizeProp>,
    pub family: Option<String>,
    pub weight: Option<String>,
    pub color: Option<String>,
}

impl TypographyProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<SizeProp>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl CommonBuilder for TypographyProps {
    fn common(&self) -> &CommonProps {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonProps {
        &mut self.common
    }
}
