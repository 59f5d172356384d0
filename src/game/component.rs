//! Component Storage
//!
//! Components are a closed set known at compile time, so they live in one
//! enum instead of behind `dyn Any`. Typed lookup goes through
//! `ComponentType`, which projects a `Component` onto one concrete variant.

use super::shape::ShapeFactory;
use super::texture::TextureComponent;
use super::transform::Transform;

/// Tag for each component kind. Discriminants follow the engine-wide
/// component numbering; the gaps belong to kinds this crate does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Transform = 1,
    Shape = 6,
    Texture = 7,
}

impl ComponentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Transform => "Transform",
            ComponentKind::Shape => "Shape",
            ComponentKind::Texture => "Texture",
        }
    }
}

/// Any component an actor can own
#[derive(Debug, Clone)]
pub enum Component {
    Transform(Transform),
    Shape(ShapeFactory),
    Texture(TextureComponent),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Transform(_) => ComponentKind::Transform,
            Component::Shape(_) => ComponentKind::Shape,
            Component::Texture(_) => ComponentKind::Texture,
        }
    }
}

/// A concrete component type that can be looked up on an actor.
pub trait ComponentType: Sized {
    const KIND: ComponentKind;

    fn from_component(component: &Component) -> Option<&Self>;

    fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
}

macro_rules! component_type {
    ($ty:ty, $variant:ident) => {
        impl ComponentType for $ty {
            const KIND: ComponentKind = ComponentKind::$variant;

            fn from_component(component: &Component) -> Option<&Self> {
                match component {
                    Component::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
                match component {
                    Component::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Component {
            fn from(inner: $ty) -> Self {
                Component::$variant(inner)
            }
        }
    };
}

component_type!(Transform, Transform);
component_type!(ShapeFactory, Shape);
component_type!(TextureComponent, Texture);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(Component::from(Transform::default()).kind(), ComponentKind::Transform);
        assert_eq!(Component::from(ShapeFactory::new()).kind(), ComponentKind::Shape);
        assert_eq!(ComponentKind::Shape as i32, 6);
        assert_eq!(<ShapeFactory as ComponentType>::KIND, ComponentKind::Shape);
    }

    #[test]
    fn test_projection_matches_only_own_variant() {
        let component = Component::from(Transform::default());
        assert!(Transform::from_component(&component).is_some());
        assert!(ShapeFactory::from_component(&component).is_none());
        assert!(TextureComponent::from_component(&component).is_none());
    }
}
