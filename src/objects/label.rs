//! Camera-facing text labels.
//!
//! A [`Label`] only describes what to draw and where. Turning the string into
//! glyph geometry is left to the host through [`TextMesher`].

use crate::math::{consts::PI, Color, Matrix4, Vector3};
use serde::{Deserialize, Serialize};

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontStyle {
    /// Regular weight, upright.
    #[default]
    Plain,
    /// Bold weight.
    Bold,
    /// Italic.
    Italic,
}

/// Font request handed to the text mesher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font family name.
    pub family: String,
    /// Point size used to rasterize the glyphs.
    pub size: u32,
    /// Style.
    pub style: FontStyle,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "Helvetica".to_string(),
            size: 24,
            style: FontStyle::Plain,
        }
    }
}

/// How a billboard turns to face the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentMode {
    /// Rotate about a fixed axis only.
    RotateAboutAxis,
    /// Rotate freely about a point.
    #[default]
    RotateAboutPoint,
}

/// Billboard orientation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Billboard {
    /// Alignment mode.
    pub mode: AlignmentMode,
    /// Alignment axis, used to keep text upright.
    pub axis: Vector3,
    /// Point the text rotates about, in label space.
    pub rotation_point: Vector3,
    /// Keep the same size on screen regardless of camera distance.
    pub constant_scale: bool,
}

impl Default for Billboard {
    fn default() -> Self {
        Self {
            mode: AlignmentMode::RotateAboutPoint,
            axis: Vector3::new(0.0, 1.0, 0.0),
            rotation_point: Vector3::ZERO,
            constant_scale: true,
        }
    }
}

/// Host-side text geometry generator.
pub trait TextMesher {
    /// Renderable glyph geometry produced by the host.
    type Geometry;

    /// Build glyph geometry for `text`. `scale` maps the rasterized text
    /// rectangle to label space.
    fn mesh_text(&self, text: &str, font: &Font, color: Color, scale: f32) -> Self::Geometry;
}

/// A text label anchored at a point in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    anchor: Vector3,
    color: Color,
    font: Font,
    scale: f32,
    billboard: Billboard,
    transform: Matrix4,
}

impl Label {
    /// Create a label at `anchor`.
    ///
    /// The local transform flips the text half a turn about x, so it reads
    /// upright in the y-down label space, then moves it to the anchor.
    pub fn new(text: impl Into<String>, anchor: Vector3, color: Color, font: Font, scale: f32) -> Self {
        let mut transform = Matrix4::from_rotation_x(PI);
        transform.set_position(&anchor);
        Self {
            text: text.into(),
            anchor,
            color,
            font,
            scale,
            billboard: Billboard::default(),
            transform,
        }
    }

    /// Get the text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the anchor point.
    #[inline]
    pub fn anchor(&self) -> Vector3 {
        self.anchor
    }

    /// Get the color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Get the font.
    #[inline]
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Text rectangle scale factor.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Billboard settings.
    #[inline]
    pub fn billboard(&self) -> &Billboard {
        &self.billboard
    }

    /// Local transform.
    #[inline]
    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    /// Build the glyph geometry through the host's mesher.
    pub fn mesh<M: TextMesher>(&self, mesher: &M) -> M::Geometry {
        mesher.mesh_text(&self.text, &self.font, self.color, self.scale)
    }
}
