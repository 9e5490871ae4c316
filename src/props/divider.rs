//! Divider props.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DividerProps {
    /// Rule color name, `defaults.color` when unset
    pub color: Option<String>,
    /// Rule thickness in pixels, 1 when unset
    pub line_width: Option<f64>,
}

impl DividerProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }
}
