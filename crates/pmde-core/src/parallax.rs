//! Parallax hero geometry.
//!
//! Converts pointer position, component size and page scroll into per-layer
//! translations. Everything here is pure so the hero component only has to
//! feed measurements in and write the resulting offsets into `style`.
//!
//! ## Layer stacking
//!
//! ```text
//! z 4  foreground   pointer parallax, fast (divisor 4)
//! z 3  text         scroll parallax + entrance animation
//! z 2  middle       pointer parallax, slow (divisor 8) + scroll Y
//! z 1  background   static
//! ```

use serde::{Deserialize, Serialize};

/// Stacking index of the text block, between the middle and foreground layers
pub const TEXT_Z_INDEX: u8 = 3;

/// Fraction of the hero that must be on screen to play the entrance animation
pub const ENTRANCE_THRESHOLD: f64 = 0.3;

/// Duration of one child's entrance transition
pub const ENTRANCE_DURATION_MS: u64 = 500;

/// Delay added per child so title, subtitle and description arrive in turn
pub const ENTRANCE_STAGGER_MS: u64 = 100;

/// Distance hidden text sits away from its resting position
pub const SLIDE_DISTANCE_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point in the coordinates of a box whose top-left corner is `origin`
    pub fn relative_to(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Measured size of the hero section. Zero means not measured yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Geometric centre of the component in its own coordinates
    pub fn center(&self) -> Point {
        Point::new(unit_if_unmeasured(self.width) / 2.0, unit_if_unmeasured(self.height) / 2.0)
    }
}

/// A 2D translation in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// CSS `translate` value for this offset
    pub fn to_css(&self) -> String {
        format!("translate({:.2}px, {:.2}px)", self.x, self.y)
    }
}

impl std::ops::Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Image planes of a hero section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Background,
    Middle,
    Foreground,
}

impl Layer {
    /// Pointer divisor; a larger divisor moves the layer less.
    /// The background does not follow the pointer.
    pub fn divisor(&self) -> Option<f64> {
        match self {
            Layer::Background => None,
            Layer::Middle => Some(8.0),
            Layer::Foreground => Some(4.0),
        }
    }

    pub fn z_index(&self) -> u8 {
        match self {
            Layer::Background => 1,
            Layer::Middle => 2,
            Layer::Foreground => 4,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Layer::Background => "hero-background-image",
            Layer::Middle => "hero-middle-image",
            Layer::Foreground => "hero-foreground-image",
        }
    }
}

fn unit_if_unmeasured(extent: f64) -> f64 {
    if extent > 0.0 && extent.is_finite() {
        extent
    } else {
        1.0
    }
}

fn axis_offset(pointer: f64, extent: f64, strength: f64, divisor: f64) -> f64 {
    // Unmeasured axes stay put until layout reports a size.
    if !(extent > 0.0 && extent.is_finite()) {
        return 0.0;
    }
    let mid = extent / 2.0;
    (pointer - mid) * (strength / (mid * divisor))
}

/// Pointer-driven displacement of `layer`.
///
/// `pointer` is relative to the component's top-left corner. Each axis is
/// `(pointer - centre) * strength / (half_extent * divisor)`.
pub fn pointer_offset(pointer: Point, extent: Extent, strength: f64, layer: Layer) -> Offset {
    match layer.divisor() {
        None => Offset::ZERO,
        Some(divisor) => Offset::new(
            axis_offset(pointer.x, extent.width, strength, divisor),
            axis_offset(pointer.y, extent.height, strength, divisor),
        ),
    }
}

/// Scroll-driven displacement along one axis.
pub fn scroll_offset(scroll_y: f64, factor: f64, sign: f64) -> f64 {
    scroll_y * factor * sign
}

/// Vertical scroll response of the text blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirectionY {
    Up,
    #[default]
    Down,
    None,
}

impl ScrollDirectionY {
    pub fn sign(&self) -> f64 {
        match self {
            ScrollDirectionY::Up => -1.0,
            ScrollDirectionY::Down => 1.0,
            ScrollDirectionY::None => 0.0,
        }
    }
}

/// Horizontal scroll response of the text blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirectionX {
    Left,
    Right,
    #[default]
    None,
}

impl ScrollDirectionX {
    pub fn sign(&self) -> f64 {
        match self {
            ScrollDirectionX::Left => -1.0,
            ScrollDirectionX::Right => 1.0,
            ScrollDirectionX::None => 0.0,
        }
    }
}

/// Where the text block sits inside the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    #[default]
    Center,
}

impl TextPosition {
    pub fn class(&self) -> &'static str {
        match self {
            TextPosition::TopLeft => "top-left",
            TextPosition::TopRight => "top-right",
            TextPosition::BottomLeft => "bottom-left",
            TextPosition::BottomRight => "bottom-right",
            TextPosition::Center => "center",
        }
    }

    /// Flex `justify-content` for a column layout (vertical placement)
    pub fn justify_content(&self) -> &'static str {
        match self {
            TextPosition::TopLeft | TextPosition::TopRight => "flex-start",
            TextPosition::BottomLeft | TextPosition::BottomRight => "flex-end",
            TextPosition::Center => "center",
        }
    }

    /// Flex `align-items` for a column layout (horizontal placement)
    pub fn align_items(&self) -> &'static str {
        match self {
            TextPosition::TopLeft | TextPosition::BottomLeft => "flex-start",
            TextPosition::TopRight | TextPosition::BottomRight => "flex-end",
            TextPosition::Center => "center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Right,
    #[default]
    Center,
}

impl TextAlign {
    pub fn class(&self) -> &'static str {
        match self {
            TextAlign::Left => "text-left",
            TextAlign::Right => "text-right",
            TextAlign::Center => "text-center",
        }
    }
}

/// Side the text slides in from on entrance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideDirection {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl SlideDirection {
    pub fn hidden_offset(&self) -> Offset {
        match self {
            SlideDirection::Left => Offset::new(-SLIDE_DISTANCE_PX, 0.0),
            SlideDirection::Right => Offset::new(SLIDE_DISTANCE_PX, 0.0),
            SlideDirection::Up => Offset::new(0.0, -SLIDE_DISTANCE_PX),
            SlideDirection::Down => Offset::new(0.0, SLIDE_DISTANCE_PX),
        }
    }

    /// Resting position once visible. Zero for every direction.
    pub fn visible_offset(&self) -> Offset {
        Offset::ZERO
    }
}

/// Entrance animation state of the hero text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Entrance {
    #[default]
    Hidden,
    Visible,
}

impl Entrance {
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction >= ENTRANCE_THRESHOLD {
            Entrance::Visible
        } else {
            Entrance::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Entrance::Visible)
    }

    /// New state for a visibility reading, or `None` when it is unchanged.
    /// Falling under the threshold hides the text again so the next
    /// entry replays the animation.
    pub fn observe(&self, fraction: f64) -> Option<Entrance> {
        let next = Entrance::from_fraction(fraction);
        (next != *self).then_some(next)
    }

    /// Offset and opacity a child should animate to
    pub fn target(&self, direction: SlideDirection) -> (Offset, f64) {
        match self {
            Entrance::Hidden => (direction.hidden_offset(), 0.0),
            Entrance::Visible => (direction.visible_offset(), 1.0),
        }
    }
}

/// Fraction of an element's height inside the viewport, in `[0, 1]`.
///
/// `top` is the element's top edge relative to the viewport top.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

pub fn stagger_delay_ms(child_index: usize) -> u64 {
    child_index as u64 * ENTRANCE_STAGGER_MS
}

/// Hero parallax configuration with the documented defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxSettings {
    pub strength: f64,
    pub title_factor: f64,
    pub content_factor: f64,
    pub middle_image_factor: f64,
    pub scroll_y: ScrollDirectionY,
    pub scroll_x: ScrollDirectionX,
}

impl Default for ParallaxSettings {
    fn default() -> Self {
        Self {
            strength: 10.0,
            title_factor: 0.5,
            content_factor: 0.4,
            middle_image_factor: 0.3,
            scroll_y: ScrollDirectionY::Down,
            scroll_x: ScrollDirectionX::None,
        }
    }
}

/// Every translation a hero needs for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeroMotion {
    pub middle: Offset,
    pub foreground: Offset,
    pub title: Offset,
    pub content: Offset,
}

impl HeroMotion {
    pub fn compute(settings: &ParallaxSettings, pointer: Point, extent: Extent, scroll_y: f64) -> Self {
        let sign_y = settings.scroll_y.sign();
        let sign_x = settings.scroll_x.sign();

        let middle_scroll = Offset::new(0.0, scroll_offset(scroll_y, settings.middle_image_factor, 1.0));

        Self {
            middle: pointer_offset(pointer, extent, settings.strength, Layer::Middle) + middle_scroll,
            foreground: pointer_offset(pointer, extent, settings.strength, Layer::Foreground),
            title: Offset::new(
                scroll_offset(scroll_y, settings.title_factor, sign_x),
                scroll_offset(scroll_y, settings.title_factor, sign_y),
            ),
            content: Offset::new(
                scroll_offset(scroll_y, settings.content_factor, sign_x),
                scroll_offset(scroll_y, settings.content_factor, sign_y),
            ),
        }
    }
}
