//! Style value objects: colours, insets, borders, text and button styles.
//!
//! Every type here is an immutable value with structural `Eq + Hash`, so it can
//! sit inside a widget's style key. Lengths are whole pixels and colours are
//! kept in a canonical CSS string form; two values that print the same CSS
//! compare equal.

use std::fmt;

use super::model::{px, DeclarationBlock};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A CSS colour in canonical text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// A named colour (`"blue"`, `"lightgrey"`). Case and surrounding
    /// whitespace are normalized.
    pub fn named(name: &str) -> Self {
        Color(name.trim().to_ascii_lowercase())
    }

    /// A hex colour; the leading `#` is optional.
    pub fn hex(code: &str) -> Self {
        let digits = code.trim().trim_start_matches('#').to_ascii_lowercase();
        Color(format!("#{digits}"))
    }

    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color(format!("rgb({red}, {green}, {blue})"))
    }

    /// An RGBA colour with alpha given in percent (clamped to 100).
    pub fn rgba(red: u8, green: u8, blue: u8, alpha_percent: u8) -> Self {
        let alpha = f64::from(alpha_percent.min(100)) / 100.0;
        Color(format!("rgba({red}, {green}, {blue}, {alpha})"))
    }

    pub fn white() -> Self {
        Color::named("white")
    }

    pub fn black() -> Self {
        Color::named("black")
    }

    pub fn grey() -> Self {
        Color::named("grey")
    }

    pub fn transparent() -> Self {
        Color::named("transparent")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// EdgeInsets
// ---------------------------------------------------------------------------

/// Padding or margin in pixels for each edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EdgeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// The same value on every edge.
    pub const fn all(value: i32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }

    pub const fn ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Total of left and right.
    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Total of top and bottom.
    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

impl fmt::Display for EdgeInsets {
    /// CSS shorthand order: top, right, bottom, left.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

// ---------------------------------------------------------------------------
// Borders
// ---------------------------------------------------------------------------

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    None,
    Dotted,
    Dashed,
    Solid,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
    Hidden,
}

impl BorderStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Solid => "solid",
            BorderStyle::Double => "double",
            BorderStyle::Groove => "groove",
            BorderStyle::Ridge => "ridge",
            BorderStyle::Inset => "inset",
            BorderStyle::Outset => "outset",
            BorderStyle::Hidden => "hidden",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side (or all sides) of a border.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BorderSide {
    pub width: Option<i32>,
    pub style: Option<BorderStyle>,
    pub color: Option<Color>,
}

impl BorderSide {
    pub fn new() -> Self {
        Self::default()
    }

    /// A solid border of the given width and colour.
    pub fn solid(width: i32, color: Color) -> Self {
        Self {
            width: Some(width),
            style: Some(BorderStyle::Solid),
            color: Some(color),
        }
    }

    pub fn with_width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_style(mut self, style: BorderStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Width in pixels, zero when unset.
    pub fn width_px(&self) -> i32 {
        self.width.unwrap_or(0)
    }

    /// Shorthand value: `style width color`, skipping unset parts.
    pub fn shorthand(&self) -> String {
        let mut parts = Vec::new();
        if let Some(style) = self.style {
            parts.push(style.as_str().to_owned());
        }
        if let Some(width) = self.width {
            parts.push(px(width));
        }
        if let Some(color) = &self.color {
            parts.push(color.to_string());
        }
        parts.join(" ")
    }

    /// Emit `border-width`, `border-style` and `border-color` longhands.
    pub fn declare(&self, block: &mut DeclarationBlock) {
        block.push_opt("border-width", self.width.map(px));
        block.push_opt("border-style", self.style);
        block.push_opt("border-color", self.color.as_ref());
    }
}

/// Corner radii in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BorderRadius {
    pub top_left: i32,
    pub top_right: i32,
    pub bottom_right: i32,
    pub bottom_left: i32,
}

impl BorderRadius {
    pub const fn all(radius: i32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }
}

impl fmt::Display for BorderRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top_left, self.top_right, self.bottom_right, self.bottom_left
        )
    }
}

// ---------------------------------------------------------------------------
// Decoration
// ---------------------------------------------------------------------------

/// A drop shadow.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoxShadow {
    pub color: Color,
    pub offset_x: i32,
    pub offset_y: i32,
    pub blur: i32,
    pub spread: i32,
}

impl BoxShadow {
    pub fn new(color: Color, offset_x: i32, offset_y: i32, blur: i32, spread: i32) -> Self {
        Self {
            color,
            offset_x,
            offset_y,
            blur,
            spread,
        }
    }
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px {}",
            self.offset_x, self.offset_y, self.blur, self.spread, self.color
        )
    }
}

/// Background, border, radius and shadow of a box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoxDecoration {
    pub color: Option<Color>,
    pub border: Option<BorderSide>,
    pub border_radius: Option<BorderRadius>,
    pub box_shadow: Option<BoxShadow>,
}

impl BoxDecoration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_border(mut self, border: BorderSide) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_border_radius(mut self, radius: BorderRadius) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn with_box_shadow(mut self, shadow: BoxShadow) -> Self {
        self.box_shadow = Some(shadow);
        self
    }

    pub fn declare(&self, block: &mut DeclarationBlock) {
        block.push_opt("background-color", self.color.as_ref());
        if let Some(border) = &self.border {
            border.declare(block);
        }
        block.push_opt("border-radius", self.border_radius);
        block.push_opt("box-shadow", self.box_shadow.as_ref());
    }
}

// ---------------------------------------------------------------------------
// Alignment
// ---------------------------------------------------------------------------

/// Position along one flex axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexAlign {
    Start,
    Center,
    End,
}

impl FlexAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            FlexAlign::Start => "flex-start",
            FlexAlign::Center => "center",
            FlexAlign::End => "flex-end",
        }
    }
}

/// Child placement inside a box, expressed with flexbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment {
    /// Horizontal placement (`justify-content`).
    pub justify: FlexAlign,
    /// Vertical placement (`align-items`).
    pub align: FlexAlign,
}

impl Alignment {
    pub const fn new(justify: FlexAlign, align: FlexAlign) -> Self {
        Self { justify, align }
    }

    pub const fn center() -> Self {
        Self::new(FlexAlign::Center, FlexAlign::Center)
    }

    pub const fn top_left() -> Self {
        Self::new(FlexAlign::Start, FlexAlign::Start)
    }

    pub const fn top_center() -> Self {
        Self::new(FlexAlign::Center, FlexAlign::Start)
    }

    pub const fn top_right() -> Self {
        Self::new(FlexAlign::End, FlexAlign::Start)
    }

    pub const fn center_left() -> Self {
        Self::new(FlexAlign::Start, FlexAlign::Center)
    }

    pub const fn center_right() -> Self {
        Self::new(FlexAlign::End, FlexAlign::Center)
    }

    pub const fn bottom_left() -> Self {
        Self::new(FlexAlign::Start, FlexAlign::End)
    }

    pub const fn bottom_center() -> Self {
        Self::new(FlexAlign::Center, FlexAlign::End)
    }

    pub const fn bottom_right() -> Self {
        Self::new(FlexAlign::End, FlexAlign::End)
    }

    pub fn declare(&self, block: &mut DeclarationBlock) {
        block.push("display", "flex");
        block.push("justify-content", self.justify.as_str());
        block.push("align-items", self.align.as_str());
    }
}

/// Distribution of children along a row or column's main axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MainAxisAlignment {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl MainAxisAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            MainAxisAlignment::Start => "flex-start",
            MainAxisAlignment::End => "flex-end",
            MainAxisAlignment::Center => "center",
            MainAxisAlignment::SpaceBetween => "space-between",
            MainAxisAlignment::SpaceAround => "space-around",
            MainAxisAlignment::SpaceEvenly => "space-evenly",
        }
    }
}

/// Placement of children across a row or column's cross axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CrossAxisAlignment {
    Start,
    End,
    #[default]
    Center,
    Stretch,
    Baseline,
}

impl CrossAxisAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            CrossAxisAlignment::Start => "flex-start",
            CrossAxisAlignment::End => "flex-end",
            CrossAxisAlignment::Center => "center",
            CrossAxisAlignment::Stretch => "stretch",
            CrossAxisAlignment::Baseline => "baseline",
        }
    }
}

/// Whether a row or column fills its main axis or shrinks to its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MainAxisSize {
    Min,
    #[default]
    Max,
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Text alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Normal,
    Bold,
    /// Numeric weight, 100..=900.
    Weight(u16),
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Normal => f.write_str("normal"),
            FontWeight::Bold => f.write_str("bold"),
            FontWeight::Weight(w) => write!(f, "{w}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Normal,
    Italic,
}

impl FontStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDecoration {
    None,
    Underline,
    Overline,
    LineThrough,
}

impl TextDecoration {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDecoration::None => "none",
            TextDecoration::Underline => "underline",
            TextDecoration::Overline => "overline",
            TextDecoration::LineThrough => "line-through",
        }
    }
}

/// Font and colour settings for text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub font_size: Option<i32>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub letter_spacing: Option<i32>,
    pub word_spacing: Option<i32>,
    pub decoration: Option<TextDecoration>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_font_size(mut self, size: i32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    pub fn with_letter_spacing(mut self, spacing: i32) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    pub fn with_word_spacing(mut self, spacing: i32) -> Self {
        self.word_spacing = Some(spacing);
        self
    }

    pub fn with_decoration(mut self, decoration: TextDecoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    pub fn declare(&self, block: &mut DeclarationBlock) {
        block.push_opt("color", self.color.as_ref());
        block.push_opt("font-size", self.font_size.map(px));
        block.push_opt("font-weight", self.font_weight);
        block.push_opt("font-style", self.font_style.map(FontStyle::as_str));
        block.push_opt("letter-spacing", self.letter_spacing.map(px));
        block.push_opt("word-spacing", self.word_spacing.map(px));
        block.push_opt("text-decoration", self.decoration.map(TextDecoration::as_str));
    }
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

/// Minimum and maximum box dimensions in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoxConstraints {
    pub min_width: Option<i32>,
    pub max_width: Option<i32>,
    pub min_height: Option<i32>,
    pub max_height: Option<i32>,
}

impl BoxConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exactly `width` x `height`.
    pub fn tight(width: i32, height: i32) -> Self {
        Self {
            min_width: Some(width),
            max_width: Some(width),
            min_height: Some(height),
            max_height: Some(height),
        }
    }

    pub fn with_min_width(mut self, value: i32) -> Self {
        self.min_width = Some(value);
        self
    }

    pub fn with_max_width(mut self, value: i32) -> Self {
        self.max_width = Some(value);
        self
    }

    pub fn with_min_height(mut self, value: i32) -> Self {
        self.min_height = Some(value);
        self
    }

    pub fn with_max_height(mut self, value: i32) -> Self {
        self.max_height = Some(value);
        self
    }

    pub fn declare(&self, block: &mut DeclarationBlock) {
        block.push_opt("min-width", self.min_width.map(px));
        block.push_opt("max-width", self.max_width.map(px));
        block.push_opt("min-height", self.min_height.map(px));
        block.push_opt("max-height", self.max_height.map(px));
    }
}

// ---------------------------------------------------------------------------
// ButtonStyle
// ---------------------------------------------------------------------------

/// Visual configuration of a button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ButtonStyle {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub shadow_color: Option<Color>,
    pub elevation: Option<i32>,
    pub padding: Option<EdgeInsets>,
    /// Minimum `(width, height)` in pixels.
    pub minimum_size: Option<(i32, i32)>,
    pub side: Option<BorderSide>,
    /// Corner radius in pixels.
    pub shape: Option<i32>,
    pub text_style: Option<TextStyle>,
    pub alignment: Option<Alignment>,
}

impl ButtonStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn with_shadow(mut self, color: Color, elevation: i32) -> Self {
        self.shadow_color = Some(color);
        self.elevation = Some(elevation);
        self
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_minimum_size(mut self, width: i32, height: i32) -> Self {
        self.minimum_size = Some((width, height));
        self
    }

    pub fn with_side(mut self, side: BorderSide) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_shape(mut self, radius: i32) -> Self {
        self.shape = Some(radius);
        self
    }

    pub fn with_text_style(mut self, style: TextStyle) -> Self {
        self.text_style = Some(style);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Buttons without an explicit side get `border: none`.
    pub fn declare(&self, block: &mut DeclarationBlock) {
        block.push_opt("background-color", self.background.as_ref());
        block.push_opt("color", self.foreground.as_ref());
        if let Some(shadow) = &self.shadow_color {
            block.push(
                "box-shadow",
                format!("0px 0px {}px {shadow}", self.elevation.unwrap_or(0)),
            );
        }
        block.push_opt("padding", self.padding);
        if let Some((width, height)) = self.minimum_size {
            block.push("min-width", px(width));
            block.push("min-height", px(height));
        }
        match &self.side {
            Some(side) => side.declare(block),
            None => block.push("border", "none"),
        }
        block.push_opt("border-radius", self.shape.map(px));
        if let Some(text) = &self.text_style {
            text.declare(block);
        }
        if let Some(alignment) = &self.alignment {
            alignment.declare(block);
        }
    }
}
