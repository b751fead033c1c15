//! Value types carried by style properties.
//!
//! A declaration's value text is sniffed into one of a small set of typed
//! values: a dimension ([`UnitValue`]), a color ([`Color`]), an asset path
//! (`url(...)`), a boolean, or a bareword keyword. There is no grammar beyond
//! the sniffing rules; anything unrecognized passes through as a keyword.

mod color;
mod unit;

pub use color::Color;
pub use unit::UnitValue;

use serde::Serialize;

/// A typed property value produced by value sniffing.
///
/// The format's value grammar is closed:
/// `#hex | rgb(..) | rgba(..) | url(..) | <num>px | <num>% | true | false | <bareword>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PropertyValue {
    /// A dimension in pixels, percent, or auto.
    Unit(UnitValue),
    /// An RGBA color.
    Color(Color),
    /// An asset path extracted from `url(...)`.
    Url(String),
    /// A `true`/`false` literal.
    Bool(bool),
    /// Any other bareword, kept verbatim.
    Keyword(String),
}

impl PropertyValue {
    /// Sniff a raw value string into a typed value.
    ///
    /// Mirrors the loader's format rules: hex colors, `rgb()`/`rgba()` with
    /// raw 0–1 float channels, `url()` paths, `px`/`%` dimensions, booleans,
    /// and a bareword fallback. `auto` sniffs to [`UnitValue::Auto`].
    /// Returns `None` only for values that *look* typed but fail to parse
    /// (e.g. `#GGG`, `12pxx` is a bareword instead).
    #[must_use]
    pub fn sniff(text: &str) -> Option<Self> {
        let text = text.trim();

        if text == "true" {
            return Some(Self::Bool(true));
        }
        if text == "false" {
            return Some(Self::Bool(false));
        }
        if text == "auto" {
            return Some(Self::Unit(UnitValue::Auto));
        }

        if text.starts_with('#') {
            return Color::from_hex(text).map(Self::Color);
        }
        if let Some(args) = function_args(text, "rgb") {
            let channels = split_channels(args)?;
            if let [r, g, b] = channels[..] {
                return Some(Self::Color(Color::rgba(r, g, b, 1.0)));
            }
            return None;
        }
        if let Some(args) = function_args(text, "rgba") {
            let channels = split_channels(args)?;
            if let [r, g, b, a] = channels[..] {
                return Some(Self::Color(Color::rgba(r, g, b, a)));
            }
            return None;
        }
        if let Some(path) = function_args(text, "url") {
            return Some(Self::Url(path.trim().to_string()));
        }
        if let Some(number) = text.strip_suffix("px") {
            return number.parse().ok().map(|px| Self::Unit(UnitValue::Pixels(px)));
        }
        if let Some(number) = text.strip_suffix('%') {
            return number
                .parse::<f32>()
                .ok()
                .map(|pct| Self::Unit(UnitValue::Percent(pct / 100.0)));
        }

        Some(Self::Keyword(text.to_string()))
    }

    /// The dimension carried by this value, if it is one.
    #[must_use]
    pub const fn as_unit(&self) -> Option<UnitValue> {
        match self {
            Self::Unit(unit) => Some(*unit),
            _ => None,
        }
    }

    /// The color carried by this value, if it is one.
    #[must_use]
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }
}

/// Extract the argument text of `name(...)`, or `None` if `text` is not a
/// call to `name`.
fn function_args<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(name)?;
    rest.strip_prefix('(')?.strip_suffix(')')
}

/// Split comma-separated float channels, failing on any unparseable piece.
fn split_channels(args: &str) -> Option<Vec<f32>> {
    args.split(',')
        .map(|piece| piece.trim().parse::<f32>().ok())
        .collect()
}
