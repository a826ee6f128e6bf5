//! Counter control.
//!
//! Two leaf buttons emit `Increment`/`Decrement`; the [`Counter`] composite
//! is the authoritative consumer, applying ±1 transitions to its value and
//! re-dispatching the new total on [`value_changed`](Counter::value_changed).

use std::any::Any;

use wicker_core::{Property, Signal};

use crate::component::base::ComponentBase;
use crate::component::events::{ControlEvent, Event};
use crate::component::traits::Component;
use crate::component::tree::TreeScope;

/// Which way a counter button moves the total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterStep {
    /// +1 per press.
    Up,
    /// -1 per press.
    Down,
}

/// A counter's increment or decrement affordance.
///
/// Pure leaf control: one press, one payload-free event. Multiple rapid
/// presses emit multiple independent events; there is no debouncing.
pub struct CounterButton {
    base: ComponentBase,
    step: CounterStep,
}

impl CounterButton {
    /// The `+` button.
    pub fn increment() -> Self {
        Self {
            base: ComponentBase::named("increment"),
            step: CounterStep::Up,
        }
    }

    /// The `-` button.
    pub fn decrement() -> Self {
        Self {
            base: ComponentBase::named("decrement"),
            step: CounterStep::Down,
        }
    }

    /// Which way this button moves the total.
    pub fn step(&self) -> CounterStep {
        self.step
    }

    /// The event one press emits.
    pub fn press(&self) -> Event {
        Event::new(match self.step {
            CounterStep::Up => ControlEvent::Increment,
            CounterStep::Down => ControlEvent::Decrement,
        })
    }
}

impl Component for CounterButton {
    fn component_base(&self) -> &ComponentBase {
        &self.base
    }

    fn component_base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn activate(&mut self) -> Option<Event> {
        Some(self.press())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The counter composite: owns the two buttons and the running total.
///
/// The displayed total always equals the net sum of deliveries -
/// +1 per `Increment`, -1 per `Decrement` - starting from 0.
pub struct Counter {
    base: ComponentBase,
    value: Property<i64>,
    /// Emitted with the new total after every transition.
    pub value_changed: Signal<i64>,
}

impl Counter {
    /// Create a counter starting at 0.
    pub fn new() -> Self {
        Self {
            base: ComponentBase::named("counter"),
            value: Property::new(0),
            value_changed: Signal::new(),
        }
    }

    /// The current total.
    pub fn value(&self) -> i64 {
        self.value.get()
    }

    fn apply(&self, delta: i64) {
        let next = self.value.get() + delta;
        self.value.set(next);
        tracing::trace!(target: "wicker::controls", value = next, "counter changed");
        self.value_changed.emit(next);
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Counter {
    fn component_base(&self) -> &ComponentBase {
        &self.base
    }

    fn component_base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&mut self) -> Vec<Box<dyn Component>> {
        vec![
            Box::new(CounterButton::increment()),
            Box::new(CounterButton::decrement()),
        ]
    }

    fn handle(&mut self, event: &mut Event, _scope: &mut TreeScope<'_>) -> bool {
        let handled = match event.payload() {
            ControlEvent::Increment => {
                self.apply(1);
                true
            }
            ControlEvent::Decrement => {
                self.apply(-1);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::tree::{ComponentTree, DispatchResult};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_buttons_emit_their_events() {
        let mut up = CounterButton::increment();
        let mut down = CounterButton::decrement();

        assert_eq!(up.activate().unwrap().payload(), &ControlEvent::Increment);
        assert_eq!(down.activate().unwrap().payload(), &ControlEvent::Decrement);
    }

    #[test]
    fn test_net_sum_over_event_sequences() {
        let mut tree = ComponentTree::new();
        let counter_id = tree.mount(None, Box::new(Counter::new())).unwrap();
        let inc = tree.find_child_by_name(counter_id, "increment").unwrap().unwrap();
        let dec = tree.find_child_by_name(counter_id, "decrement").unwrap().unwrap();

        for _ in 0..5 {
            assert_eq!(tree.activate(inc).unwrap(), DispatchResult::Accepted);
        }
        for _ in 0..2 {
            assert_eq!(tree.activate(dec).unwrap(), DispatchResult::Accepted);
        }

        assert_eq!(tree.get::<Counter>(counter_id).unwrap().value(), 3);
    }

    #[test]
    fn test_value_can_go_negative() {
        let mut tree = ComponentTree::new();
        let counter_id = tree.mount(None, Box::new(Counter::new())).unwrap();
        let dec = tree.find_child_by_name(counter_id, "decrement").unwrap().unwrap();

        tree.activate(dec).unwrap();
        assert_eq!(tree.get::<Counter>(counter_id).unwrap().value(), -1);
    }

    #[test]
    fn test_value_changed_reports_each_total() {
        let mut tree = ComponentTree::new();
        let counter_id = tree.mount(None, Box::new(Counter::new())).unwrap();
        let inc = tree.find_child_by_name(counter_id, "increment").unwrap().unwrap();

        let totals = Arc::new(Mutex::new(Vec::new()));
        let totals_clone = totals.clone();
        tree.get::<Counter>(counter_id)
            .unwrap()
            .value_changed
            .connect(move |&value| {
                totals_clone.lock().push(value);
            });

        tree.activate(inc).unwrap();
        tree.activate(inc).unwrap();

        assert_eq!(*totals.lock(), vec![1, 2]);
    }

    #[test]
    fn test_unrelated_events_are_not_consumed() {
        let mut tree = ComponentTree::new();
        let counter_id = tree.mount(None, Box::new(Counter::new())).unwrap();
        let inc = tree.find_child_by_name(counter_id, "increment").unwrap().unwrap();

        let result = tree.dispatch(inc, Event::new(ControlEvent::MenuToggle));
        assert_eq!(result, DispatchResult::Ignored);
        assert_eq!(tree.get::<Counter>(counter_id).unwrap().value(), 0);
    }
}
