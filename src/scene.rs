use crate::shape::{Drawable, Shape};

/// Committed shapes in drawing order, plus the in-progress ghost.
///
/// The ghost lives in its own slot and is never part of the committed list:
/// it only reaches that list through [`Scene::commit_current`].
#[derive(Debug, Clone, Default)]
pub struct Scene {
    committed: Vec<Shape>,
    current: Option<Shape>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a shape on top of everything drawn so far.
    ///
    /// Returns `false` and drops the shape if it would draw nothing, such as
    /// a brush stroke without points.
    pub fn append(&mut self, shape: Shape) -> bool {
        if shape.is_empty() {
            log::debug!("Dropping empty {} instead of committing it", shape.kind_name());
            return false;
        }

        self.committed.push(shape);
        true
    }

    /// Removes every committed shape. The ghost is left alone.
    pub fn clear(&mut self) {
        self.committed.clear();
    }

    /// Removes every committed shape matching `predicate` and returns how many
    /// went away.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Shape) -> bool,
    {
        let before = self.committed.len();
        self.committed.retain(|shape| !predicate(shape));
        before - self.committed.len()
    }

    pub fn set_current(&mut self, shape: Option<Shape>) {
        self.current = shape;
    }

    #[must_use]
    pub fn current(&self) -> Option<&Shape> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut Shape> {
        self.current.as_mut()
    }

    pub fn take_current(&mut self) -> Option<Shape> {
        self.current.take()
    }

    /// Moves the ghost into the committed list.
    pub fn commit_current(&mut self) -> bool {
        match self.current.take() {
            Some(shape) => self.append(shape),
            None => false,
        }
    }

    pub fn discard_current(&mut self) {
        self.current = None;
    }

    /// Committed shapes in drawing order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.committed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Everything to draw this frame, bottom first. The ghost, if any, is last.
    #[must_use]
    pub fn snapshot_for_render(&self) -> Vec<&Shape> {
        self.committed.iter().chain(self.current.as_ref()).collect()
    }
}
