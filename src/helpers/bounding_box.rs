//! Labeled bounding box with axis ticks.
//!
//! The gizmo draws the 12 edges of an axis-aligned box. The three edges that
//! leave the minimum corner carry perpendicular tick marks, and the first two
//! ticks on each of them get a coordinate label.

use super::ticks::{format_tick_value, TickParams};
use crate::core::Result;
use crate::material::FillAppearance;
use crate::math::{Axis, Box3, Color, Vector3};
use crate::objects::{Font, Label, LineSegments};
use crate::scene::{Group, ObjectType, SceneNode, Shape};
use serde::{Deserialize, Serialize};

/// Corner indices (into [`Box3::corners`]) whose coordinate on each axis is
/// the minimum, in x, y, z order.
const RAIL_CORNERS: [[usize; 4]; 3] = [[0, 3, 4, 7], [0, 1, 4, 5], [4, 5, 6, 7]];

/// Bounding box gizmo configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingBoxConfig {
    /// Color of lines, fill and labels.
    pub color: Color,
    /// Name of the line shape.
    pub name: String,
    /// Longest-to-shortest edge ratio above which tick spacing follows the
    /// longest edge.
    pub max_aspect_ratio: f32,
    /// Tick half-length is the longest edge divided by this.
    pub tick_size_divisor: f32,
    /// Label distance from the box, in tick sizes.
    pub label_offset: f32,
    /// Label font.
    pub font: Font,
    /// Label text rectangle scale factor.
    pub label_scale: f32,
}

impl Default for BoundingBoxConfig {
    fn default() -> Self {
        Self {
            color: Color::RED,
            name: "BB".to_string(),
            max_aspect_ratio: 100.0,
            tick_size_divisor: 50.0,
            label_offset: 1.5,
            font: Font::default(),
            label_scale: 0.03,
        }
    }
}

/// Static bounding box annotation.
///
/// Built once; the host takes the [`Group`] and attaches it to its scene.
/// `min <= max` on every axis is expected. An axis where that does not hold
/// is skipped, which is not a supported use.
#[derive(Debug)]
pub struct BoundingBoxGizmo {
    bounds: Box3,
    color: Color,
    ticks: TickParams,
    group: Group,
}

impl BoundingBoxGizmo {
    /// Create a red gizmo.
    pub fn new(min: impl Into<Vector3>, max: impl Into<Vector3>) -> Result<Self> {
        Self::with_config(min, max, &BoundingBoxConfig::default())
    }

    /// Create a gizmo in the given color.
    pub fn with_color(min: impl Into<Vector3>, max: impl Into<Vector3>, color: Color) -> Result<Self> {
        let config = BoundingBoxConfig {
            color,
            ..BoundingBoxConfig::default()
        };
        Self::with_config(min, max, &config)
    }

    /// Create a gizmo around an existing box.
    pub fn from_box3(bounds: &Box3, color: Color) -> Result<Self> {
        Self::with_color(bounds.min, bounds.max, color)
    }

    /// Create a gizmo with full configuration.
    pub fn with_config(
        min: impl Into<Vector3>,
        max: impl Into<Vector3>,
        config: &BoundingBoxConfig,
    ) -> Result<Self> {
        let bounds = Box3::new(min.into(), max.into());
        let size = bounds.size();
        if size.x < 0.0 || size.y < 0.0 || size.z < 0.0 {
            log::warn!("bounding box {} is not sorted, skipping inverted axes", bounds);
        }

        let ticks = TickParams::from_size(size, config);
        let color = config.color;
        let drawn: Vec<Axis> = Axis::ALL
            .into_iter()
            .filter(|&axis| bounds.extent(axis) > 0.0)
            .collect();

        let mut shape = Shape::new(config.name.clone(), FillAppearance::solid(color));
        let corners = bounds.corners();
        for &axis in &drawn {
            add_rails(&mut shape, &bounds, &corners, axis, &ticks, color)?;
        }

        let mut group = Group::new(ObjectType::Helper);
        group.add(SceneNode::Shape(shape));
        for &axis in &drawn {
            for label in axis_labels(&bounds, axis, &ticks, config) {
                group.add(SceneNode::Label(label));
            }
        }

        log::debug!(
            "bounding box {}: tick distance {}, {} segments, {} labels",
            bounds,
            ticks.tick_distance,
            group.segment_count(),
            group.labels().count()
        );

        Ok(Self {
            bounds,
            color,
            ticks,
            group,
        })
    }

    /// Minimum corner.
    #[inline]
    pub fn min(&self) -> Vector3 {
        self.bounds.min
    }

    /// Maximum corner.
    #[inline]
    pub fn max(&self) -> Vector3 {
        self.bounds.max
    }

    /// Flat color of every part of the gizmo.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Tick parameters the geometry was built with.
    #[inline]
    pub fn tick_params(&self) -> &TickParams {
        &self.ticks
    }

    /// The renderable group.
    #[inline]
    pub fn group(&self) -> &Group {
        &self.group
    }

    /// Hand the renderable group over to the host.
    pub fn into_group(self) -> Group {
        self.group
    }

    /// Debug description of the corners.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for BoundingBoxGizmo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[BoundingBox {}]", self.bounds)
    }
}

/// One segment per distinct rail corner, running to the max side of `axis`.
/// Only the rail leaving the box's min corner gets ticks.
fn add_rails(
    shape: &mut Shape,
    bounds: &Box3,
    corners: &[Vector3; 8],
    axis: Axis,
    ticks: &TickParams,
    color: Color,
) -> Result<()> {
    let mut starts: Vec<Vector3> = Vec::with_capacity(4);
    for index in RAIL_CORNERS[axis.index()] {
        let corner = corners[index];
        if !starts.contains(&corner) {
            starts.push(corner);
        }
    }

    let end_value = bounds.max.get(axis);
    for start in starts {
        let end = start.with(axis, end_value);
        let geometry = if start == bounds.min {
            let first = ticks.first_offset(bounds.min.get(axis));
            LineSegments::with_ticks(start, end, &ticks.tick_marks(first), color)?
        } else {
            LineSegments::from_segment(start, end, color)?
        };
        log::trace!("{} rail {} -> {}: {} vertices", axis, start, end, geometry.vertex_count());
        shape.add_geometry(geometry);
    }
    Ok(())
}

/// Labels for the first two ticks on `axis`, pushed away from the box on the
/// other two axes.
fn axis_labels(bounds: &Box3, axis: Axis, ticks: &TickParams, config: &BoundingBoxConfig) -> [Label; 2] {
    let origin = bounds.min.get(axis);
    let first = origin + ticks.first_offset(origin);
    let second = first + ticks.tick_distance;

    let offset = config.label_offset * ticks.tick_size;
    let [a, b] = axis.others();
    let base = bounds
        .min
        .with(a, bounds.min.get(a) - offset)
        .with(b, bounds.min.get(b) - offset);

    [first, second].map(|value| {
        Label::new(
            format_tick_value(value),
            base.with(axis, value),
            config.color,
            config.font.clone(),
            config.label_scale,
        )
    })
}
