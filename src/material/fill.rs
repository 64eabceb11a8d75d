//! Solid fill appearance.

use crate::math::Color;
use serde::{Deserialize, Serialize};

/// How polygons are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PolygonMode {
    /// Filled polygons.
    #[default]
    Fill,
    /// Polygon edges only.
    Line,
    /// Polygon vertices only.
    Point,
}

impl From<PolygonMode> for wgpu::PolygonMode {
    fn from(mode: PolygonMode) -> Self {
        match mode {
            PolygonMode::Fill => wgpu::PolygonMode::Fill,
            PolygonMode::Line => wgpu::PolygonMode::Line,
            PolygonMode::Point => wgpu::PolygonMode::Point,
        }
    }
}

/// Which polygon faces are culled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CullFace {
    /// Draw both sides.
    #[default]
    None,
    /// Cull front faces.
    Front,
    /// Cull back faces.
    Back,
}

impl From<CullFace> for Option<wgpu::Face> {
    fn from(cull: CullFace) -> Self {
        match cull {
            CullFace::None => None,
            CullFace::Front => Some(wgpu::Face::Front),
            CullFace::Back => Some(wgpu::Face::Back),
        }
    }
}

/// Flat-colored, double-sided fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillAppearance {
    /// Flat color.
    pub color: Color,
    /// Polygon rasterization mode.
    pub polygon_mode: PolygonMode,
    /// Face culling.
    pub cull_face: CullFace,
}

impl FillAppearance {
    /// Solid, double-sided fill in one color.
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            polygon_mode: PolygonMode::Fill,
            cull_face: CullFace::None,
        }
    }

    /// Primitive state for drawing `topology` with this appearance.
    pub fn primitive_state(&self, topology: wgpu::PrimitiveTopology) -> wgpu::PrimitiveState {
        wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: self.cull_face.into(),
            polygon_mode: self.polygon_mode.into(),
            unclipped_depth: false,
            conservative: false,
        }
    }
}

impl Default for FillAppearance {
    fn default() -> Self {
        Self::solid(Color::RED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_is_double_sided_fill() {
        let a = FillAppearance::solid(Color::BLUE);
        let state = a.primitive_state(wgpu::PrimitiveTopology::LineList);
        assert_eq!(state.topology, wgpu::PrimitiveTopology::LineList);
        assert_eq!(state.cull_mode, None);
        assert_eq!(state.polygon_mode, wgpu::PolygonMode::Fill);
        assert_eq!(a.color, Color::BLUE);
    }

    #[test]
    fn test_back_face_culling_maps_to_wgpu() {
        let a = FillAppearance {
            cull_face: CullFace::Back,
            ..FillAppearance::default()
        };
        let state = a.primitive_state(wgpu::PrimitiveTopology::TriangleList);
        assert_eq!(state.cull_mode, Some(wgpu::Face::Back));
    }
}
