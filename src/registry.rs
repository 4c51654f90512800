use crate::prelude::*;

/// Append-only record of admitted task parameters (§4.B).
///
/// Source of truth for admission checks: every [`crate::admission`] test
/// runs against `registry.iter().chain(once(&candidate))`. Capacity is
/// bounded so admission can fail with [`AdmissionError::RegistryFull`]
/// rather than grow without limit on a microcontroller-class target.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<TaskParams>,
    capacity: usize,
}

impl Registry {
    pub fn new(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity), capacity }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn get(&self, handle: TaskHandle) -> Option<&TaskParams> {
        self.entries.get(handle.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskParams> {
        self.entries.iter()
    }

    /// Appends `params` and returns its handle, or
    /// [`AdmissionError::RegistryFull`] if the registry is already at
    /// capacity. The admission controller must be consulted *before*
    /// calling this (invariant 5: append-only, and the controller itself
    /// never mutates the registry on rejection).
    pub fn add(&mut self, params: TaskParams) -> Result<TaskHandle, AdmissionError> {
        if self.is_full() {
            return Err(AdmissionError::RegistryFull { capacity: self.capacity });
        }

        let handle = TaskHandle(self.entries.len() as u32);
        self.entries.push(params);
        Ok(handle)
    }

    /// Extension point (§1 Non-goals: deletion MAY be supported, but never
    /// triggers re-admission of the remaining set). Compacts by
    /// swap-with-last, so handles for tasks other than the removed one and
    /// the former last entry are invalidated; callers that support
    /// deletion must route handle updates through the returned
    /// `(old_handle, new_handle)` pair for the relocated entry, if any.
    pub fn remove(&mut self, handle: TaskHandle) -> Option<(TaskParams, Option<TaskHandle>)> {
        let index = handle.index();
        if index >= self.entries.len() {
            return None;
        }

        let removed = self.entries.swap_remove(index);
        let relocated = if index < self.entries.len() {
            Some(TaskHandle(index as u32))
        } else {
            None
        };

        Some((removed, relocated))
    }
}
