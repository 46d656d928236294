use crate::core::error::{PopupError, Result};
use compact_str::CompactString;
use rustc_hash::FxHashMap;
use std::fmt;

/// Whether the main loop keeps going after an action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Flow {
    #[default]
    Continue,
    Exit,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActionId(CompactString);

impl ActionId {
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<CompactString> for ActionId {
    fn from(value: CompactString) -> Self {
        Self(value)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A callback run synchronously when its button or item is selected.
pub type Action = Box<dyn FnMut() -> Flow>;

#[derive(Default)]
pub struct ActionRegistry {
    actions: FxHashMap<ActionId, Action>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<ActionId>, action: impl FnMut() -> Flow + 'static) -> Self {
        self.register(id, action);
        self
    }

    /// Registers `action` under `id`, replacing any previous one.
    pub fn register(&mut self, id: impl Into<ActionId>, action: impl FnMut() -> Flow + 'static) {
        let id = id.into();
        if self.actions.insert(id.clone(), Box::new(action)).is_some() {
            tracing::debug!(action = %id, "action replaced");
        }
    }

    pub fn contains(&self, id: &ActionId) -> bool {
        self.actions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Runs the action registered under `id`; `None` if there is none.
    pub fn run(&mut self, id: &ActionId) -> Option<Flow> {
        let action = self.actions.get_mut(id)?;
        tracing::debug!(action = %id, "run action");
        Some(action())
    }

    /// Checks that every id in `refs` is registered.
    pub fn validate<'a>(
        &self,
        refs: impl IntoIterator<Item = &'a ActionId>,
        owner: &str,
    ) -> Result<()> {
        for id in refs {
            if !self.contains(id) {
                return Err(PopupError::UnboundActionReference {
                    action: id.0.clone(),
                    owner: owner.into(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.actions.keys().map(ActionId::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("ActionRegistry").field("actions", &ids).finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/popup/action.rs"]
mod tests;
