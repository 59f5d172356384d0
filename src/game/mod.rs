//! Scene Foundation Module
//!
//! A shallow actor/component framework for 2D demo scenes.
//!
//! Key concepts:
//! - Actor: named container owning an ordered list of components
//! - Component: closed set of kinds (transform, shape, texture)
//! - Scene: the actor list plus the shared waypoint path
//!
//! Design philosophy:
//! - Simple over flexible (a few actors, a few components each)
//! - No runtime type registration (compile-time known components)
//! - Missing shapes/components are tolerated as no-ops

#![allow(dead_code)]

pub mod actor;
pub mod component;
pub mod scene;
pub mod shape;
pub mod texture;
pub mod transform;
pub mod waypoint;

pub use actor::{Actor, ActorRole};
pub use component::{Component, ComponentKind, ComponentType};
pub use scene::Scene;
pub use shape::{Shape, ShapeFactory, ShapeKind};
pub use texture::{TextureAsset, TextureComponent};
pub use transform::Transform;
pub use waypoint::WaypointPath;
