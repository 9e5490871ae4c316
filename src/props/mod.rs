//! Per-element props for each resolver family.
//!
//! Props are built fresh for every resolution with fluent setters. Common
//! props (background, padding, radius, ...) are shared by layouts and
//! typography through [`CommonBuilder`].

mod common;
mod divider;
mod layout;
mod size;
mod spacer;
mod typography;

pub use common::{Absolute, Border, BorderStyle, CommonBuilder, CommonProps, Offsets};
pub use divider::DividerProps;
pub use layout::{FlexAlign, FlexJustify, LayoutProps};
pub use size::{SizeProp, Toggle};
pub use spacer::{FlexSpacerProps, SpacerProps};
pub use typography::TypographyProps;
