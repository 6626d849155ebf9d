//! Entity/component store.
//!
//! Struct-of-arrays layout: each component kind has its own `Vec<Option<T>>`
//! indexed by entity index, alongside a per-entity `ComponentMask` used to
//! answer queries without touching the component columns. Entities are never
//! destroyed, so indices are dense and query results come back in insertion
//! order.

use std::collections::HashMap;

use bounce_core::components::{Canvas, Circle, Follow, Gravity, Position, Velocity};
use bounce_core::enums::{ComponentKind, ComponentMask};
use bounce_core::types::EntityId;
use bounce_core::validate;

use crate::error::StoreError;

/// Any component value, for attaching through a single entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component {
    Position(Position),
    Velocity(Velocity),
    Gravity(Gravity),
    Circle(Circle),
    Follow(Follow),
    Canvas(Canvas),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Position(_) => ComponentKind::Position,
            Component::Velocity(_) => ComponentKind::Velocity,
            Component::Gravity(_) => ComponentKind::Gravity,
            Component::Circle(_) => ComponentKind::Circle,
            Component::Follow(_) => ComponentKind::Follow,
            Component::Canvas(_) => ComponentKind::Canvas,
        }
    }
}

macro_rules! component_from {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Component {
                fn from(value: $ty) -> Self {
                    Component::$ty(value)
                }
            }
        )*
    };
}

component_from!(Position, Velocity, Gravity, Circle, Follow, Canvas);

/// Generates the typed `get` / `get_mut` accessor pair for one column.
macro_rules! component_accessors {
    ($($column:ident: $ty:ty => $get:ident, $get_mut:ident;)*) => {
        $(
            pub fn $get(&self, id: EntityId) -> Option<&$ty> {
                self.$column.get(id.index as usize)?.as_ref()
            }

            pub fn $get_mut(&mut self, id: EntityId) -> Option<&mut $ty> {
                self.$column.get_mut(id.index as usize)?.as_mut()
            }
        )*
    };
}

/// Read-only view of one entity and every component it carries.
#[derive(Debug, Clone, Copy)]
pub struct EntityView<'a> {
    pub id: EntityId,
    pub mask: ComponentMask,
    pub position: Option<&'a Position>,
    pub velocity: Option<&'a Velocity>,
    pub gravity: Option<&'a Gravity>,
    pub circle: Option<&'a Circle>,
    pub follow: Option<&'a Follow>,
    pub canvas: Option<&'a Canvas>,
    pub tags: &'a [String],
}

impl EntityView<'_> {
    pub fn has(&self, kind: ComponentKind) -> bool {
        self.mask.contains(kind.mask())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Default)]
pub struct Store {
    masks: Vec<ComponentMask>,
    tags: Vec<Vec<String>>,
    /// Tag -> entities carrying it, kept sorted by entity index.
    tag_index: HashMap<String, Vec<EntityId>>,

    positions: Vec<Option<Position>>,
    velocities: Vec<Option<Velocity>>,
    gravities: Vec<Option<Gravity>>,
    circles: Vec<Option<Circle>>,
    follows: Vec<Option<Follow>>,
    canvases: Vec<Option<Canvas>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId::new(self.masks.len() as u32);
        self.masks.push(ComponentMask::empty());
        self.tags.push(Vec::new());
        self.positions.push(None);
        self.velocities.push(None);
        self.gravities.push(None);
        self.circles.push(None);
        self.follows.push(None);
        self.canvases.push(None);
        id
    }

    /// Spawn an entity carrying `components`. Nothing is spawned on error.
    pub fn spawn_with(
        &mut self,
        components: impl IntoIterator<Item = Component>,
    ) -> Result<EntityId, StoreError> {
        let components: Vec<Component> = components.into_iter().collect();
        let next = EntityId::new(self.masks.len() as u32);
        for component in &components {
            check(next, component)?;
        }
        let id = self.spawn();
        for component in components {
            self.insert(id, component);
        }
        Ok(id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        (id.index as usize) < self.masks.len()
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Attach (or replace) a component after validating its invariants.
    pub fn attach(
        &mut self,
        id: EntityId,
        component: impl Into<Component>,
    ) -> Result<(), StoreError> {
        let component = component.into();
        if !self.contains(id) {
            return Err(StoreError::UnknownEntity(id));
        }
        check(id, &component)?;
        self.insert(id, component);
        Ok(())
    }

    /// Attach a string tag. Tagging twice is a no-op.
    pub fn tag(&mut self, id: EntityId, tag: &str) -> Result<(), StoreError> {
        if !self.contains(id) {
            return Err(StoreError::UnknownEntity(id));
        }
        let idx = id.index as usize;
        if self.tags[idx].iter().any(|t| t == tag) {
            return Ok(());
        }
        self.tags[idx].push(tag.to_string());

        let tagged = self.tag_index.entry(tag.to_string()).or_default();
        if let Err(pos) = tagged.binary_search(&id) {
            tagged.insert(pos, id);
        }
        Ok(())
    }

    pub fn has_tag(&self, id: EntityId, tag: &str) -> bool {
        self.tags
            .get(id.index as usize)
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    pub fn tags(&self, id: EntityId) -> &[String] {
        self.tags
            .get(id.index as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn mask(&self, id: EntityId) -> Option<ComponentMask> {
        self.masks.get(id.index as usize).copied()
    }

    /// Entities carrying every kind in `required`, in insertion order.
    /// An empty mask matches every entity.
    pub fn query(&self, required: ComponentMask) -> Vec<EntityId> {
        self.masks
            .iter()
            .enumerate()
            .filter_map(|(i, mask)| {
                if mask.contains(required) {
                    Some(EntityId::new(i as u32))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Entities carrying `tag`, in insertion order.
    pub fn query_tag(&self, tag: &str) -> Vec<EntityId> {
        self.tag_index.get(tag).cloned().unwrap_or_default()
    }

    /// Entities carrying `tag` and every kind in `required`.
    pub fn query_tagged(&self, tag: &str, required: ComponentMask) -> Vec<EntityId> {
        let Some(tagged) = self.tag_index.get(tag) else {
            return Vec::new();
        };
        tagged
            .iter()
            .copied()
            .filter(|id| self.masks[id.index as usize].contains(required))
            .collect()
    }

    pub fn view(&self, id: EntityId) -> Option<EntityView<'_>> {
        let idx = id.index as usize;
        let mask = *self.masks.get(idx)?;
        Some(EntityView {
            id,
            mask,
            position: self.positions[idx].as_ref(),
            velocity: self.velocities[idx].as_ref(),
            gravity: self.gravities[idx].as_ref(),
            circle: self.circles[idx].as_ref(),
            follow: self.follows[idx].as_ref(),
            canvas: self.canvases[idx].as_ref(),
            tags: &self.tags[idx],
        })
    }

    component_accessors! {
        positions: Position => position, position_mut;
        velocities: Velocity => velocity, velocity_mut;
        gravities: Gravity => gravity, gravity_mut;
        circles: Circle => circle, circle_mut;
        follows: Follow => follow, follow_mut;
        canvases: Canvas => canvas, canvas_mut;
    }

    fn insert(&mut self, id: EntityId, component: Component) {
        let idx = id.index as usize;
        self.masks[idx] |= component.kind().mask();
        match component {
            Component::Position(c) => self.positions[idx] = Some(c),
            Component::Velocity(c) => self.velocities[idx] = Some(c),
            Component::Gravity(c) => self.gravities[idx] = Some(c),
            Component::Circle(c) => self.circles[idx] = Some(c),
            Component::Follow(c) => self.follows[idx] = Some(c),
            Component::Canvas(c) => self.canvases[idx] = Some(c),
        }
    }
}

fn check(id: EntityId, component: &Component) -> Result<(), StoreError> {
    let result = match component {
        Component::Position(c) => validate::position(c),
        Component::Velocity(c) => validate::velocity(c),
        Component::Gravity(c) => validate::gravity(c),
        Component::Circle(c) => validate::circle(c),
        Component::Follow(c) => validate::follow(c),
        Component::Canvas(c) => validate::canvas(c),
    };
    result.map_err(|source| StoreError::InvalidComponent { id, source })
}
