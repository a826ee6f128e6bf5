//! Todo list control.
//!
//! A [`TodoInput`] leaf turns a submitted draft into a `TodoSubmit` event
//! carrying a freshly minted, strictly increasing identifier; empty or
//! whitespace-only drafts produce no event at all. The [`TodoList`]
//! composite is the authoritative consumer: each submit appends exactly one
//! entry and mounts a [`TodoItem`] row for it, each delete removes exactly
//! the identified entry and its row, and deleting an unknown identifier is
//! a consumed no-op.

use std::any::Any;

use wicker_core::Signal;

use crate::component::base::ComponentBase;
use crate::component::events::{ControlEvent, Event};
use crate::component::traits::Component;
use crate::component::tree::TreeScope;

/// One list entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoEntry {
    /// Identifier minted by the input.
    pub id: String,
    /// Entry text, trimmed and non-empty.
    pub text: String,
}

/// The text entry leaf.
///
/// Holds the in-progress draft; `activate` is the submit interaction.
pub struct TodoInput {
    base: ComponentBase,
    draft: String,
    next_id: u64,
}

impl TodoInput {
    /// Create an input with an empty draft.
    pub fn new() -> Self {
        Self {
            base: ComponentBase::named("todo-input"),
            draft: String::new(),
            next_id: 1,
        }
    }

    /// Replace the draft text.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// The current draft text.
    pub fn draft(&self) -> &str {
        &self.draft
    }
}

impl Default for TodoInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TodoInput {
    fn component_base(&self) -> &ComponentBase {
        &self.base
    }

    fn component_base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    /// Submit the draft.
    ///
    /// Empty and whitespace-only drafts emit nothing. A real submission
    /// clears the draft and carries an identifier strictly greater than
    /// every one this input minted before.
    fn activate(&mut self) -> Option<Event> {
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            tracing::trace!(target: "wicker::controls", "ignoring empty todo submission");
            return None;
        }

        let id = format!("todo-{}", self.next_id);
        self.next_id += 1;
        self.draft.clear();
        Some(Event::new(ControlEvent::TodoSubmit { id, text }))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The delete affordance of one row.
pub struct TodoItemDelete {
    base: ComponentBase,
    entry_id: String,
}

impl TodoItemDelete {
    fn new(entry_id: String) -> Self {
        Self {
            base: ComponentBase::named("delete"),
            entry_id,
        }
    }
}

impl Component for TodoItemDelete {
    fn component_base(&self) -> &ComponentBase {
        &self.base
    }

    fn component_base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn activate(&mut self) -> Option<Event> {
        Some(Event::new(ControlEvent::TodoDelete {
            id: self.entry_id.clone(),
        }))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// One rendered entry row, owning its delete button.
///
/// Named after its entry id so the list can find and unmount it.
pub struct TodoItem {
    base: ComponentBase,
    entry: TodoEntry,
}

impl TodoItem {
    fn new(entry: TodoEntry) -> Self {
        Self {
            base: ComponentBase::named(&entry.id),
            entry,
        }
    }

    /// The entry this row presents.
    pub fn entry(&self) -> &TodoEntry {
        &self.entry
    }

    /// The entry text.
    pub fn text(&self) -> &str {
        &self.entry.text
    }
}

impl Component for TodoItem {
    fn component_base(&self) -> &ComponentBase {
        &self.base
    }

    fn component_base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&mut self) -> Vec<Box<dyn Component>> {
        vec![Box::new(TodoItemDelete::new(self.entry.id.clone()))]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The todo list composite.
pub struct TodoList {
    base: ComponentBase,
    entries: Vec<TodoEntry>,
    /// Emitted with the new entry count after every real transition.
    pub count_changed: Signal<usize>,
}

impl TodoList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            base: ComponentBase::named("todo-list"),
            entries: Vec::new(),
            count_changed: Signal::new(),
        }
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// The entries, in insertion order.
    pub fn entries(&self) -> &[TodoEntry] {
        &self.entries
    }

    /// Whether an entry with this id exists.
    pub fn contains_entry(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TodoList {
    fn component_base(&self) -> &ComponentBase {
        &self.base
    }

    fn component_base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&mut self) -> Vec<Box<dyn Component>> {
        vec![Box::new(TodoInput::new())]
    }

    fn handle(&mut self, event: &mut Event, scope: &mut TreeScope<'_>) -> bool {
        let handled = match event.payload() {
            ControlEvent::TodoSubmit { id, text } => {
                // Internal payload contract: the input never submits empty text.
                debug_assert!(!text.trim().is_empty(), "todo submissions carry non-empty text");

                let entry = TodoEntry {
                    id: id.clone(),
                    text: text.clone(),
                };
                self.entries.push(entry.clone());
                if let Err(err) =
                    scope.mount_child(self.base.node_id(), Box::new(TodoItem::new(entry)))
                {
                    tracing::warn!(
                        target: "wicker::controls",
                        error = %err,
                        "failed to mount todo row"
                    );
                }
                tracing::trace!(
                    target: "wicker::controls",
                    count = self.entries.len(),
                    "todo entry appended"
                );
                self.count_changed.emit(self.entries.len());
                true
            }
            ControlEvent::TodoDelete { id } => {
                let id = id.clone();
                let before = self.entries.len();
                self.entries.retain(|entry| entry.id != id);

                if self.entries.len() != before {
                    if let Ok(Some(row)) =
                        scope.find_child_by_name(self.base.node_id(), &id)
                    {
                        let _ = scope.unmount(row);
                    }
                    tracing::trace!(
                        target: "wicker::controls",
                        count = self.entries.len(),
                        "todo entry removed"
                    );
                    self.count_changed.emit(self.entries.len());
                }
                // A delete for an unknown id is still this list's event.
                true
            }
            _ => false,
        };
        if handled {
            event.accept();
        }
        handled
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
