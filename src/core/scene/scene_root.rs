//=========================================================================
// Scene Root
//=========================================================================
//
// Top-level entity collection.
//
// Entities are positioned relative to the root's origin. Moving the
// origin translates every entity by the same offset, which is how the
// orchestrator centres the scene on screen at construction.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Entity, UpdateContext, Vector2};
use crate::core::graphics::Graphics;

//=== SceneRoot ===========================================================

pub struct SceneRoot {
    origin: Vector2,
    entities: Vec<Box<dyn Entity>>,
}

impl SceneRoot {
    /// Creates an empty root with its origin at `(0, 0)`.
    pub fn new() -> Self {
        Self {
            origin: Vector2::ZERO,
            entities: Vec::new(),
        }
    }

    /// Adds an entity whose position is relative to the current origin.
    pub fn add(&mut self, mut entity: Box<dyn Entity>) {
        entity.set_position(self.origin + entity.position());
        self.entities.push(entity);
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, entity: impl Entity + 'static) -> Self {
        self.add(Box::new(entity));
        self
    }

    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    /// Moves the origin, translating every entity with it.
    pub fn set_origin(&mut self, origin: Vector2) {
        let offset = origin - self.origin;
        for entity in &mut self.entities {
            entity.set_position(entity.position() + offset);
        }
        self.origin = origin;
        debug!(target: "scene", "Scene origin moved to ({}, {})", origin.x, origin.y);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> impl Iterator<Item = &dyn Entity> {
        self.entities.iter().map(|entity| entity.as_ref())
    }

    //--- Phase Dispatch ---------------------------------------------------

    pub(crate) fn update(&mut self, context: &mut UpdateContext<'_>) {
        for entity in &mut self.entities {
            entity.update(context);
        }
    }

    pub(crate) fn late_update(&mut self, context: &mut UpdateContext<'_>) {
        for entity in &mut self.entities {
            entity.late_update(context);
        }
    }

    pub(crate) fn render(&self, graphics: &mut dyn Graphics) {
        for entity in &self.entities {
            entity.render(graphics);
        }
    }
}

impl Default for SceneRoot {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graphics::HeadlessGraphics;
    use crate::core::test_support::{Call, CallLog, ContextFixture, RecordingEntity};

    #[test]
    fn add_places_entities_relative_to_origin() {
        let log = CallLog::default();
        let mut root = SceneRoot::new();
        root.set_origin(Vector2::new(100.0, 50.0));
        root.add(Box::new(RecordingEntity::at(0, Vector2::new(5.0, 5.0), &log)));

        let position = root.entities().next().unwrap().position();
        assert_eq!(position, Vector2::new(105.0, 55.0));
    }

    #[test]
    fn set_origin_translates_existing_entities() {
        let log = CallLog::default();
        let mut root = SceneRoot::new()
            .with(RecordingEntity::at(0, Vector2::ZERO, &log))
            .with(RecordingEntity::at(1, Vector2::new(-10.0, 20.0), &log));

        root.set_origin(Vector2::new(400.0, 300.0));

        let positions: Vec<_> = root.entities().map(|entity| entity.position()).collect();
        assert_eq!(positions, vec![Vector2::new(400.0, 300.0), Vector2::new(390.0, 320.0)]);
    }

    #[test]
    fn dispatch_follows_insertion_order() {
        let log = CallLog::default();
        let mut root = SceneRoot::new()
            .with(RecordingEntity::new(0, &log))
            .with(RecordingEntity::new(1, &log));
        let mut fixture = ContextFixture::new();
        let mut graphics = HeadlessGraphics::new(4, 4);

        root.update(&mut fixture.context(0.0, 0));
        root.late_update(&mut fixture.context(0.0, 0));
        root.render(&mut graphics);

        assert_eq!(
            log.take(),
            vec![
                Call::EntityUpdate(0),
                Call::EntityUpdate(1),
                Call::EntityLateUpdate(0),
                Call::EntityLateUpdate(1),
                Call::EntityRender(0),
                Call::EntityRender(1),
            ]
        );
    }
}
