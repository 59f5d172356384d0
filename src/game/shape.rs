//! Shape Factory Component
//!
//! Owns a single drawable primitive (circle, rectangle or a 3-sided polygon
//! standing in for a triangle). The factory is tolerant of initialization
//! order: every mutator is a no-op until `create_shape` has produced a
//! shape. That is the intended policy, not a bug, and tests rely on it.

use macroquad::prelude::*;

/// Radius of a freshly created circle (scene pixels)
pub const CIRCLE_RADIUS: f32 = 25.0;

/// Size of a freshly created rectangle (scene pixels)
pub const RECTANGLE_SIZE: Vec2 = Vec2::new(100.0, 50.0);

/// Circumradius of a freshly created triangle (scene pixels)
pub const TRIANGLE_RADIUS: f32 = 50.0;

/// Default fill for new shapes
pub const DEFAULT_FILL: Color = WHITE;

/// Which primitive a factory holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    #[default]
    Empty,
    Circle,
    Rectangle,
    Triangle,
}

impl ShapeKind {
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Empty => "Empty",
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Triangle => "Triangle",
        }
    }
}

/// Geometry of a primitive, in unscaled local units
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Circle { radius: f32 },
    Rectangle { size: Vec2 },
    /// Regular polygon (3 sides for the triangle primitive)
    Polygon { sides: u8, radius: f32 },
}

/// A drawable primitive.
///
/// Position is the shape's centre; rotation is in degrees around it.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: Geometry,
    position: Vec2,
    rotation: f32,
    scale: Vec2,
    fill: Color,
}

impl Shape {
    fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            fill: DEFAULT_FILL,
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn fill_color(&self) -> Color {
        self.fill
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    /// Axis-aligned size after scaling (before rotation)
    pub fn scaled_size(&self) -> Vec2 {
        match self.geometry {
            Geometry::Circle { radius } => Vec2::splat(radius * 2.0) * self.scale,
            Geometry::Rectangle { size } => size * self.scale,
            Geometry::Polygon { radius, .. } => Vec2::splat(radius * 2.0) * self.scale,
        }
    }

    /// Draw with the current camera. A texture replaces the fill on
    /// rectangles; other primitives ignore it.
    pub fn draw(&self, texture: Option<&Texture2D>) {
        let (x, y) = (self.position.x, self.position.y);
        match self.geometry {
            Geometry::Circle { radius } => {
                // Non-uniform scale is approximated by the larger axis
                let r = radius * self.scale.x.abs().max(self.scale.y.abs());
                draw_circle(x, y, r, self.fill);
            }
            Geometry::Polygon { sides, radius } => {
                let r = radius * self.scale.x.abs().max(self.scale.y.abs());
                // -90 puts the first vertex on top
                draw_poly(x, y, sides, r, self.rotation - 90.0, self.fill);
            }
            Geometry::Rectangle { .. } => {
                let size = self.scaled_size();
                if let Some(texture) = texture {
                    draw_texture_ex(
                        texture,
                        x - size.x * 0.5,
                        y - size.y * 0.5,
                        self.fill,
                        DrawTextureParams {
                            dest_size: Some(size),
                            rotation: self.rotation.to_radians(),
                            ..Default::default()
                        },
                    );
                } else {
                    draw_rectangle_ex(
                        x,
                        y,
                        size.x,
                        size.y,
                        DrawRectangleParams {
                            offset: vec2(0.5, 0.5),
                            rotation: self.rotation.to_radians(),
                            color: self.fill,
                        },
                    );
                }
            }
        }
    }
}

/// Component that creates and owns one shape primitive
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeFactory {
    kind: ShapeKind,
    shape: Option<Shape>,
}

impl ShapeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a primitive of `kind` with the default fill.
    ///
    /// Replaces any previous shape. `Empty` clears the factory and returns None.
    pub fn create_shape(&mut self, kind: ShapeKind) -> Option<&mut Shape> {
        self.kind = kind;
        self.shape = match kind {
            ShapeKind::Empty => None,
            ShapeKind::Circle => Some(Shape::new(Geometry::Circle { radius: CIRCLE_RADIUS })),
            ShapeKind::Rectangle => Some(Shape::new(Geometry::Rectangle { size: RECTANGLE_SIZE })),
            ShapeKind::Triangle => Some(Shape::new(Geometry::Polygon {
                sides: 3,
                radius: TRIANGLE_RADIUS,
            })),
        };
        self.shape.as_mut()
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    /// No-op without a shape
    pub fn set_position(&mut self, position: Vec2) {
        if let Some(shape) = &mut self.shape {
            shape.set_position(position);
        }
    }

    /// No-op without a shape
    pub fn set_rotation(&mut self, degrees: f32) {
        if let Some(shape) = &mut self.shape {
            shape.set_rotation(degrees);
        }
    }

    /// No-op without a shape
    pub fn set_scale(&mut self, scale: Vec2) {
        if let Some(shape) = &mut self.shape {
            shape.set_scale(scale);
        }
    }

    /// No-op without a shape
    pub fn set_fill_color(&mut self, color: Color) {
        if let Some(shape) = &mut self.shape {
            shape.set_fill_color(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_factory_is_empty() {
        let factory = ShapeFactory::new();
        assert_eq!(factory.kind(), ShapeKind::Empty);
        assert!(factory.shape().is_none());
    }

    #[test]
    fn test_create_each_kind() {
        let mut factory = ShapeFactory::new();

        let circle = factory.create_shape(ShapeKind::Circle).map(|s| s.geometry());
        assert_eq!(circle, Some(Geometry::Circle { radius: CIRCLE_RADIUS }));

        let rect = factory.create_shape(ShapeKind::Rectangle).map(|s| s.geometry());
        assert_eq!(rect, Some(Geometry::Rectangle { size: RECTANGLE_SIZE }));

        let tri = factory.create_shape(ShapeKind::Triangle).map(|s| s.geometry());
        assert_eq!(tri, Some(Geometry::Polygon { sides: 3, radius: TRIANGLE_RADIUS }));
        assert_eq!(factory.kind(), ShapeKind::Triangle);
        assert_eq!(factory.shape().map(|s| s.fill_color()), Some(DEFAULT_FILL));
    }

    #[test]
    fn test_create_empty_leaves_no_shape() {
        let mut factory = ShapeFactory::new();
        assert!(factory.create_shape(ShapeKind::Empty).is_none());
        assert!(factory.shape().is_none());

        // Mutators are silent no-ops
        factory.set_position(vec2(10.0, 20.0));
        factory.set_rotation(45.0);
        factory.set_scale(vec2(2.0, 2.0));
        factory.set_fill_color(RED);
        assert!(factory.shape().is_none());
    }

    #[test]
    fn test_create_empty_clears_previous_shape() {
        let mut factory = ShapeFactory::new();
        factory.create_shape(ShapeKind::Circle);
        assert!(factory.shape().is_some());

        factory.create_shape(ShapeKind::Empty);
        assert!(factory.shape().is_none());
        assert_eq!(factory.kind(), ShapeKind::Empty);
    }

    #[test]
    fn test_mutators_forward_to_shape() {
        let mut factory = ShapeFactory::new();
        factory.create_shape(ShapeKind::Rectangle);

        factory.set_position(vec2(200.0, 150.0));
        factory.set_rotation(30.0);
        factory.set_scale(vec2(2.0, 0.5));
        factory.set_fill_color(BLUE);

        let shape = factory.shape().unwrap();
        assert_eq!(shape.position(), vec2(200.0, 150.0));
        assert!((shape.rotation() - 30.0).abs() < 0.001);
        assert_eq!(shape.scale(), vec2(2.0, 0.5));
        assert_eq!(shape.fill_color(), BLUE);
        assert_eq!(shape.scaled_size(), vec2(200.0, 25.0));
    }
}
