//! Style property bags and the cascade merge operation.
//!
//! A [`Style`] is a struct of optional fields, one per recognized property.
//! Cascading is the explicit [`Style::merge`] operation: only fields the
//! overriding style actually sets overwrite the accumulator, so a partial
//! style can never blank out a field set by an earlier rule.

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::value::{Color, PropertyValue, UnitValue};

/// Every property name the style system recognizes, in kebab-case as it
/// appears in stylesheet text.
///
/// The `padding`/`margin` shorthands are not names; the parser expands them
/// into the four per-side properties before they reach a [`Style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[allow(missing_docs)] // Variant names are the property names themselves.
pub enum PropertyName {
    Left,
    Top,
    Right,
    Bottom,
    Width,
    Height,
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
    PaddingLeft,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    MarginLeft,
    MarginTop,
    MarginRight,
    MarginBottom,
    Visibility,
    Color,
    BackgroundColor,
    BackgroundImage,
    Opacity,
    FontSize,
    FontStyle,
}

/// A cascaded bag of style properties. `None` means "not set here".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Style {
    /// Offset of the left edge from the parent content box.
    pub left: Option<UnitValue>,
    /// Offset of the top edge from the parent content box.
    pub top: Option<UnitValue>,
    /// Offset of the right edge from the parent content box.
    pub right: Option<UnitValue>,
    /// Offset of the bottom edge from the parent content box.
    pub bottom: Option<UnitValue>,
    /// Outer width of the box.
    pub width: Option<UnitValue>,
    /// Outer height of the box.
    pub height: Option<UnitValue>,
    /// Lower clamp on the outer width.
    pub min_width: Option<UnitValue>,
    /// Upper clamp on the outer width.
    pub max_width: Option<UnitValue>,
    /// Lower clamp on the outer height.
    pub min_height: Option<UnitValue>,
    /// Upper clamp on the outer height.
    pub max_height: Option<UnitValue>,
    /// Padding between the box edge and its content, left side.
    pub padding_left: Option<UnitValue>,
    /// Padding, top side.
    pub padding_top: Option<UnitValue>,
    /// Padding, right side.
    pub padding_right: Option<UnitValue>,
    /// Padding, bottom side.
    pub padding_bottom: Option<UnitValue>,
    /// Margin outside the box edge, left side.
    pub margin_left: Option<UnitValue>,
    /// Margin, top side.
    pub margin_top: Option<UnitValue>,
    /// Margin, right side.
    pub margin_right: Option<UnitValue>,
    /// Margin, bottom side.
    pub margin_bottom: Option<UnitValue>,
    /// Whether the node and its subtree render at all.
    pub visibility: Option<bool>,
    /// Foreground (text) color.
    pub color: Option<Color>,
    /// Background fill color.
    pub background_color: Option<Color>,
    /// Background texture asset path (from `url(...)`).
    pub background_image: Option<String>,
    /// Opacity multiplier applied at paint time.
    pub opacity: Option<f32>,
    /// Font size; pixels or a fraction of the default size.
    pub font_size: Option<UnitValue>,
    /// Font asset path or keyword.
    pub font_style: Option<String>,
}

impl Style {
    /// Cascade `other` onto `self`: every field `other` sets overwrites the
    /// corresponding field here; unset fields leave `self` untouched.
    pub fn merge(&mut self, other: &Self) {
        merge_field(&mut self.left, other.left);
        merge_field(&mut self.top, other.top);
        merge_field(&mut self.right, other.right);
        merge_field(&mut self.bottom, other.bottom);
        merge_field(&mut self.width, other.width);
        merge_field(&mut self.height, other.height);
        merge_field(&mut self.min_width, other.min_width);
        merge_field(&mut self.max_width, other.max_width);
        merge_field(&mut self.min_height, other.min_height);
        merge_field(&mut self.max_height, other.max_height);
        merge_field(&mut self.padding_left, other.padding_left);
        merge_field(&mut self.padding_top, other.padding_top);
        merge_field(&mut self.padding_right, other.padding_right);
        merge_field(&mut self.padding_bottom, other.padding_bottom);
        merge_field(&mut self.margin_left, other.margin_left);
        merge_field(&mut self.margin_top, other.margin_top);
        merge_field(&mut self.margin_right, other.margin_right);
        merge_field(&mut self.margin_bottom, other.margin_bottom);
        merge_field(&mut self.visibility, other.visibility);
        merge_field(&mut self.color, other.color);
        merge_field(&mut self.background_color, other.background_color);
        merge_field(&mut self.background_image, other.background_image.clone());
        merge_field(&mut self.opacity, other.opacity);
        merge_field(&mut self.font_size, other.font_size);
        merge_field(&mut self.font_style, other.font_style.clone());
    }

    /// Set one property from a sniffed value.
    ///
    /// Returns `false` when the value's type does not fit the property
    /// (e.g. a color assigned to `width`); the field is left untouched so
    /// the caller can report it.
    pub fn apply(&mut self, name: PropertyName, value: &PropertyValue) -> bool {
        match name {
            PropertyName::Left => assign_unit(&mut self.left, value),
            PropertyName::Top => assign_unit(&mut self.top, value),
            PropertyName::Right => assign_unit(&mut self.right, value),
            PropertyName::Bottom => assign_unit(&mut self.bottom, value),
            PropertyName::Width => assign_unit(&mut self.width, value),
            PropertyName::Height => assign_unit(&mut self.height, value),
            PropertyName::MinWidth => assign_unit(&mut self.min_width, value),
            PropertyName::MaxWidth => assign_unit(&mut self.max_width, value),
            PropertyName::MinHeight => assign_unit(&mut self.min_height, value),
            PropertyName::MaxHeight => assign_unit(&mut self.max_height, value),
            PropertyName::PaddingLeft => assign_unit(&mut self.padding_left, value),
            PropertyName::PaddingTop => assign_unit(&mut self.padding_top, value),
            PropertyName::PaddingRight => assign_unit(&mut self.padding_right, value),
            PropertyName::PaddingBottom => assign_unit(&mut self.padding_bottom, value),
            PropertyName::MarginLeft => assign_unit(&mut self.margin_left, value),
            PropertyName::MarginTop => assign_unit(&mut self.margin_top, value),
            PropertyName::MarginRight => assign_unit(&mut self.margin_right, value),
            PropertyName::MarginBottom => assign_unit(&mut self.margin_bottom, value),
            PropertyName::FontSize => assign_unit(&mut self.font_size, value),
            PropertyName::Visibility => match value {
                PropertyValue::Bool(flag) => {
                    self.visibility = Some(*flag);
                    true
                }
                _ => false,
            },
            PropertyName::Color => assign_color(&mut self.color, value),
            PropertyName::BackgroundColor => assign_color(&mut self.background_color, value),
            PropertyName::BackgroundImage => match value {
                PropertyValue::Url(path) => {
                    self.background_image = Some(path.clone());
                    true
                }
                _ => false,
            },
            PropertyName::Opacity => match value {
                // Opacity appears as a bare fraction; the sniffer sees it as
                // a keyword because it carries no unit suffix.
                PropertyValue::Keyword(text) => match text.parse::<f32>() {
                    Ok(opacity) => {
                        self.opacity = Some(opacity);
                        true
                    }
                    Err(_) => false,
                },
                _ => false,
            },
            PropertyName::FontStyle => match value {
                PropertyValue::Url(path) => {
                    self.font_style = Some(path.clone());
                    true
                }
                PropertyValue::Keyword(word) => {
                    self.font_style = Some(word.clone());
                    true
                }
                _ => false,
            },
        }
    }
}

/// The cascade step for one field: `Some` overwrites, `None` is a no-op.
fn merge_field<T>(base: &mut Option<T>, over: Option<T>) {
    if let Some(value) = over {
        *base = Some(value);
    }
}

fn assign_unit(field: &mut Option<UnitValue>, value: &PropertyValue) -> bool {
    match value.as_unit() {
        Some(unit) => {
            *field = Some(unit);
            true
        }
        None => false,
    }
}

fn assign_color(field: &mut Option<Color>, value: &PropertyValue) -> bool {
    match value.as_color() {
        Some(color) => {
            *field = Some(color);
            true
        }
        None => false,
    }
}
