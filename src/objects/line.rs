//! Line segment geometry with optional tick marks.

use crate::core::{GeometryError, Result};
use crate::math::{Axis, Color, Vector3};
use bytemuck::{Pod, Zeroable};

/// Line vertex with position and color.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct LineVertex {
    /// Position.
    pub position: [f32; 3],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl LineVertex {
    /// Create from a point and a flat color.
    pub fn from_point(position: Vector3, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_rgba(),
        }
    }

    /// Position as a Vector3.
    #[inline]
    pub fn point(&self) -> Vector3 {
        Vector3::from(self.position)
    }

    /// Get the vertex buffer layout.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x4,
        },
    ];
}

/// Placement of tick marks along a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMarks {
    /// Distance between consecutive ticks.
    pub spacing: f32,
    /// Distance from the segment start to the first tick.
    pub first: f32,
    /// Half-length of each perpendicular stroke.
    pub half_length: f32,
}

/// Unconnected line segments: vertices are consumed in pairs.
#[derive(Debug)]
pub struct LineSegments {
    /// Line vertices.
    vertices: Vec<LineVertex>,
    /// Vertex buffer.
    vertex_buffer: Option<wgpu::Buffer>,
    /// Whether buffer needs update.
    needs_update: bool,
}

impl LineSegments {
    /// Create new empty line segments.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            vertex_buffer: None,
            needs_update: true,
        }
    }

    /// A single plain segment.
    pub fn from_segment(start: Vector3, end: Vector3, color: Color) -> Result<Self> {
        segment_length(start, end)?;
        let mut segments = Self::new();
        segments.add_segment(start, end, color);
        Ok(segments)
    }

    /// A segment decorated with ticks.
    ///
    /// The segment's two endpoints come first. Each tick then adds three
    /// strokes centred on the tick point, one parallel to each axis, in
    /// x, y, z order.
    pub fn with_ticks(start: Vector3, end: Vector3, ticks: &TickMarks, color: Color) -> Result<Self> {
        let length = segment_length(start, end)?;
        if !(ticks.spacing.is_finite() && ticks.spacing > 0.0) {
            return Err(GeometryError::InvalidTickSpacing(ticks.spacing));
        }

        let count = Self::tick_count(length, ticks.first, ticks.spacing);
        let mut segments = Self::new();
        segments.vertices.reserve(2 + count * 6);
        segments.add_segment(start, end, color);

        let dir = (end - start).normalized();
        let first = dir * ticks.first;
        let step = dir * ticks.spacing;
        for t in 0..count {
            let p = start + first + step * t as f32;
            for axis in Axis::ALL {
                let half = Vector3::unit(axis) * ticks.half_length;
                segments.add_segment(p - half, p + half, color);
            }
        }
        Ok(segments)
    }

    /// Number of ticks that fit on a segment of `length` when the first sits
    /// at `first` and the rest follow every `spacing`.
    pub fn tick_count(length: f32, first: f32, spacing: f32) -> usize {
        let n = ((length - first) / spacing).floor() + 1.0;
        if n > 0.0 {
            n as usize
        } else {
            0
        }
    }

    /// Add a line segment.
    pub fn add_segment(&mut self, start: Vector3, end: Vector3, color: Color) {
        self.vertices.push(LineVertex::from_point(start, color));
        self.vertices.push(LineVertex::from_point(end, color));
        self.needs_update = true;
    }

    /// Get the vertices.
    #[inline]
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Get vertex count.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Get segment count.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Start of the first segment, if any.
    #[inline]
    pub fn origin(&self) -> Option<Vector3> {
        self.vertices.first().map(LineVertex::point)
    }

    /// Check if buffer needs update.
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Get the vertex buffer.
    #[inline]
    pub fn vertex_buffer(&self) -> Option<&wgpu::Buffer> {
        self.vertex_buffer.as_ref()
    }

    /// Update GPU buffer.
    pub fn update_buffer(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        if !self.needs_update || self.vertices.is_empty() {
            return;
        }

        let data: &[u8] = bytemuck::cast_slice(&self.vertices);
        self.needs_update = false;

        if let Some(buffer) = &self.vertex_buffer {
            if buffer.size() >= data.len() as u64 {
                queue.write_buffer(buffer, 0, data);
                return;
            }
        }

        use wgpu::util::DeviceExt;
        self.vertex_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Bounding Box Line Buffer"),
            contents: data,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        }));
    }
}

impl Default for LineSegments {
    fn default() -> Self {
        Self::new()
    }
}

fn segment_length(start: Vector3, end: Vector3) -> Result<f32> {
    let length = start.distance_to(&end);
    if length == 0.0 {
        return Err(GeometryError::ZeroLengthSegment { start });
    }
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(spacing: f32, first: f32) -> TickMarks {
        TickMarks {
            spacing,
            first,
            half_length: 0.1,
        }
    }

    #[test]
    fn test_vertex_layout_stride() {
        assert_eq!(LineVertex::layout().array_stride, 28);
    }

    #[test]
    fn test_tick_count() {
        assert_eq!(LineSegments::tick_count(10.0, 1.0, 2.0), 5);
        assert_eq!(LineSegments::tick_count(10.0, 2.0, 2.0), 5);
        assert_eq!(LineSegments::tick_count(1.0, 1.5, 2.0), 0);
        assert_eq!(LineSegments::tick_count(1.0, 8.0, 2.0), 0);
    }

    #[test]
    fn test_ticked_segment_point_count() {
        let line = LineSegments::with_ticks(
            Vector3::ZERO,
            Vector3::new(10.0, 0.0, 0.0),
            &ticks(2.0, 1.0),
            Color::RED,
        )
        .unwrap();
        assert_eq!(line.vertex_count(), 32);
        assert_eq!(line.segment_count(), 16);
    }

    #[test]
    fn test_tick_strokes_surround_tick_point() {
        let line = LineSegments::with_ticks(
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 5.0, 0.0),
            &ticks(2.0, 0.5),
            Color::BLUE,
        )
        .unwrap();
        let v = line.vertices();
        assert_eq!(v[0].point(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(v[1].point(), Vector3::new(0.0, 5.0, 0.0));

        // first tick at y = 1.5
        assert!(v[2].point().approx_eq(&Vector3::new(-0.1, 1.5, 0.0), 1e-6));
        assert!(v[3].point().approx_eq(&Vector3::new(0.1, 1.5, 0.0), 1e-6));
        assert!(v[4].point().approx_eq(&Vector3::new(0.0, 1.4, 0.0), 1e-6));
        assert!(v[5].point().approx_eq(&Vector3::new(0.0, 1.6, 0.0), 1e-6));
        assert!(v[6].point().approx_eq(&Vector3::new(0.0, 1.5, -0.1), 1e-6));
        assert!(v[7].point().approx_eq(&Vector3::new(0.0, 1.5, 0.1), 1e-6));

        // second tick at y = 3.5
        assert!(v[8].point().approx_eq(&Vector3::new(-0.1, 3.5, 0.0), 1e-6));
        assert_eq!(line.vertex_count(), 2 + 2 * 6);
    }

    #[test]
    fn test_every_vertex_has_the_flat_color() {
        let line = LineSegments::with_ticks(
            Vector3::ZERO,
            Vector3::new(0.0, 0.0, 3.0),
            &ticks(1.0, 1.0),
            Color::GREEN,
        )
        .unwrap();
        assert!(line.vertices().iter().all(|v| v.color == [0.0, 1.0, 0.0, 1.0]));
    }

    #[test]
    fn test_zero_length_segment_is_rejected() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        let err = LineSegments::with_ticks(p, p, &ticks(1.0, 0.5), Color::RED).unwrap_err();
        assert_eq!(err, GeometryError::ZeroLengthSegment { start: p });

        let err = LineSegments::from_segment(p, p, Color::RED).unwrap_err();
        assert!(err.to_string().starts_with("invalid geometry"));
    }

    #[test]
    fn test_non_positive_spacing_is_rejected() {
        let err = LineSegments::with_ticks(
            Vector3::ZERO,
            Vector3::ONE,
            &ticks(0.0, 0.5),
            Color::RED,
        )
        .unwrap_err();
        assert_eq!(err, GeometryError::InvalidTickSpacing(0.0));
    }

    #[test]
    fn test_plain_segment() {
        let line = LineSegments::from_segment(Vector3::ZERO, Vector3::ONE, Color::RED).unwrap();
        assert_eq!(line.vertex_count(), 2);
        assert_eq!(line.origin(), Some(Vector3::ZERO));
        assert!(line.needs_update());
        assert!(line.vertex_buffer().is_none());
    }
}
