//! Plain-value scene nodes handed to the host scene graph.

use super::ObjectType;
use crate::material::FillAppearance;
use crate::objects::{Label, LineSegments};

/// A named set of line geometries sharing one appearance.
#[derive(Debug)]
pub struct Shape {
    name: String,
    geometries: Vec<LineSegments>,
    appearance: FillAppearance,
}

impl Shape {
    /// Create an empty shape.
    pub fn new(name: impl Into<String>, appearance: FillAppearance) -> Self {
        Self {
            name: name.into(),
            geometries: Vec::new(),
            appearance,
        }
    }

    /// Append a geometry buffer.
    pub fn add_geometry(&mut self, geometry: LineSegments) {
        self.geometries.push(geometry);
    }

    /// Get the name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geometry buffers, in insertion order.
    #[inline]
    pub fn geometries(&self) -> &[LineSegments] {
        &self.geometries
    }

    /// Get the appearance.
    #[inline]
    pub fn appearance(&self) -> &FillAppearance {
        &self.appearance
    }

    /// Primitive state for drawing this shape's line lists.
    pub fn primitive_state(&self) -> wgpu::PrimitiveState {
        self.appearance
            .primitive_state(wgpu::PrimitiveTopology::LineList)
    }
}

/// A child of a [`Group`].
#[derive(Debug)]
pub enum SceneNode {
    /// Line geometry.
    Shape(Shape),
    /// Billboard text.
    Label(Label),
}

/// An ordered collection of scene nodes the host attaches to its own tree.
#[derive(Debug)]
pub struct Group {
    object_type: ObjectType,
    children: Vec<SceneNode>,
    detachable: bool,
}

impl Group {
    /// Create an empty group of the given type.
    pub fn new(object_type: ObjectType) -> Self {
        Self {
            object_type,
            children: Vec::new(),
            detachable: true,
        }
    }

    /// Append a child node.
    pub fn add(&mut self, node: SceneNode) {
        self.children.push(node);
    }

    /// Get the object type.
    #[inline]
    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    /// Whether the host may remove this group from its tree later.
    #[inline]
    pub fn is_detachable(&self) -> bool {
        self.detachable
    }

    /// Child nodes, in insertion order.
    #[inline]
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// Iterate over line shapes.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.children.iter().filter_map(|node| match node {
            SceneNode::Shape(shape) => Some(shape),
            SceneNode::Label(_) => None,
        })
    }

    /// Iterate over labels.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.children.iter().filter_map(|node| match node {
            SceneNode::Label(label) => Some(label),
            SceneNode::Shape(_) => None,
        })
    }

    /// Iterate over every line geometry buffer of every shape.
    pub fn line_geometries(&self) -> impl Iterator<Item = &LineSegments> {
        self.shapes().flat_map(|shape| shape.geometries().iter())
    }

    /// Total number of line segments.
    pub fn segment_count(&self) -> usize {
        self.line_geometries().map(LineSegments::segment_count).sum()
    }

    /// Total number of line vertices.
    pub fn vertex_count(&self) -> usize {
        self.line_geometries().map(|g| g.vertices().len()).sum()
    }

    /// Upload every line buffer that changed since the last upload.
    pub fn update_buffers(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        for node in &mut self.children {
            if let SceneNode::Shape(shape) = node {
                for geometry in &mut shape.geometries {
                    geometry.update_buffer(device, queue);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Color, Vector3};
    use crate::objects::Font;

    #[test]
    fn test_group_splits_children_by_kind() {
        let mut shape = Shape::new("BB", FillAppearance::solid(Color::RED));
        shape.add_geometry(
            LineSegments::from_segment(Vector3::ZERO, Vector3::ONE, Color::RED).unwrap(),
        );
        let mut group = Group::new(ObjectType::Helper);
        group.add(SceneNode::Shape(shape));
        group.add(SceneNode::Label(Label::new(
            "1",
            Vector3::ZERO,
            Color::RED,
            Font::default(),
            0.03,
        )));

        assert_eq!(group.shapes().count(), 1);
        assert_eq!(group.labels().count(), 1);
        assert_eq!(group.segment_count(), 1);
        assert_eq!(group.vertex_count(), 2);
        assert!(group.is_detachable());
        assert_eq!(group.object_type(), ObjectType::Helper);
    }
}
