//! # turbo-props - themable style fragments
//!
//! `turbo-props` turns a theme (named colors, sizes, fonts and a grid unit)
//! plus a set of defaults into reusable CSS declaration fragments for
//! layouts, typography, spacers and dividers.
//!
//! ## Concepts
//!
//! - [`Theme`]: the named colors, sizes and font descriptors of an app
//! - [`Defaults`]: fallback names used when a prop is present but under-specified
//! - [`TurboProps`]: the bound resolver set, created once from a theme and defaults
//! - [`StyleFragment`]: the ordered declarations a resolver returns
//!
//! ## Quick start
//!
//! ```rust
//! use turbo_props::{
//!     CommonBuilder, DefaultSizes, Defaults, LayoutProps, SizeProp, Theme, TurboProps,
//! };
//!
//! let theme = Theme::new(8.0)
//!     .add_color("brand", "red")
//!     .add_color("world", "black")
//!     .add_size("m-18", 18.0)
//!     .add_size("l-24", 24.0)
//!     .add_font("mono", "regular", "monospace 500");
//!
//! let defaults = Defaults::new("brand", "mono", "regular", DefaultSizes::uniform("m-18"))
//!     .px("l-24");
//!
//! let tp = TurboProps::new(theme, defaults).unwrap();
//!
//! let props = LayoutProps::new()
//!     .bg("world")
//!     .px(SizeProp::Default)
//!     .py(SizeProp::Default);
//! let fragment = tp.base_layout(&props).unwrap();
//!
//! assert_eq!(fragment.get("background-color"), Some("black"));
//! assert_eq!(fragment.get("padding"), Some("18px 24px"));
//! ```
//!
//! Every resolver is pure: the same props against the same bound set always
//! produce the same fragment, and a bound set can be shared across threads.
//!
//! ## Missing names
//!
//! Names that are not in the theme are reported instead of producing empty
//! declarations. [`TurboProps::new`] checks every default up front and
//! resolvers return a [`LookupError`] for unknown prop names.

pub mod error;
pub mod props;
pub mod resolve;
pub mod style;
pub mod theme;

pub use error::{ConfigError, CssError, LookupError};
pub use props::{
    Absolute, Border, BorderStyle, CommonBuilder, CommonProps, DividerProps, FlexAlign,
    FlexJustify, FlexSpacerProps, LayoutProps, Offsets, SizeProp, SpacerProps, Toggle,
    TypographyProps,
};
pub use resolve::{Divider, Spacer, StyleRule, StyledComponent, TurboProps};
pub use style::{Declaration, StyleFragment};
pub use theme::{Defaults, DefaultSizes, Theme, ThemeConfig};
