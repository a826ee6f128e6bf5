//! Control events and their propagation state.
//!
//! Events are the kit's only bottom-up channel: a leaf control translates
//! one user interaction into one event, and the event bubbles through the
//! component tree until the nearest ancestor that implements its kind
//! consumes it.
//!
//! The original single-`switch`-on-kind dispatch is preserved as a closed
//! tagged union: every event kind is a [`ControlEvent`] variant with a
//! statically typed payload, and each composite's `handle` is a `match`
//! over the variants it owns. A structurally malformed payload is therefore
//! unrepresentable.

/// The icons a theme toggle is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconId {
    /// The sun glyph (active while the theme is dark).
    Sun,
    /// The moon glyph (active while the theme is light).
    Moon,
}

impl IconId {
    /// The payload spelling of this icon.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
        }
    }
}

/// The closed set of control events.
///
/// Payloads carry primitive values only - never references into a
/// component - so an event can outlive its source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    /// A counter's increment affordance was pressed.
    Increment,
    /// A counter's decrement affordance was pressed.
    Decrement,
    /// A todo draft was submitted.
    TodoSubmit {
        /// Entry identifier minted by the input; strictly increasing.
        id: String,
        /// The trimmed, non-empty entry text.
        text: String,
    },
    /// A todo entry's delete affordance was pressed.
    TodoDelete {
        /// The identifier of the entry to remove.
        id: String,
    },
    /// A theme-toggle glyph was pressed.
    IconClicked {
        /// Which glyph.
        icon: IconId,
    },
    /// The navigation menu button was pressed.
    MenuToggle,
    /// A navigation link was followed.
    LinkActivated {
        /// The link's target URL.
        url: String,
    },
}

impl ControlEvent {
    /// The kind tag, used for logging and debug output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::TodoSubmit { .. } => "todo-input-submit",
            Self::TodoDelete { .. } => "todo-item-delete",
            Self::IconClicked { icon: IconId::Sun } => "clicked-sun",
            Self::IconClicked { icon: IconId::Moon } => "clicked-moon",
            Self::MenuToggle => "menu-toggle",
            Self::LinkActivated { .. } => "link-activated",
        }
    }
}

/// Propagation state shared by all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (consumed).
    accepted: bool,
}

impl EventBase {
    /// Create a new, unaccepted event base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// A one-shot, bubbling control event.
///
/// Created by a leaf's `activate` and delivered by
/// [`ComponentTree::dispatch`](super::ComponentTree::dispatch). Once a
/// handler accepts it, bubbling stops; an event nobody accepts falls off
/// the root and is silently ignored.
#[derive(Clone, Debug)]
pub struct Event {
    base: EventBase,
    payload: ControlEvent,
}

impl Event {
    /// Wrap a payload in a fresh, unaccepted event.
    pub fn new(payload: ControlEvent) -> Self {
        Self {
            base: EventBase::new(),
            payload,
        }
    }

    /// The event payload.
    pub fn payload(&self) -> &ControlEvent {
        &self.payload
    }

    /// The payload's kind tag.
    pub fn kind(&self) -> &'static str {
        self.payload.kind()
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.base.accept();
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base.is_accepted()
    }

    /// Whether the event should keep bubbling.
    pub fn should_propagate(&self) -> bool {
        !self.is_accepted()
    }
}
