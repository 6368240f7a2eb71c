use std::cell::RefCell;

use super::{CanvasEvent, CanvasListener};

/// Adapts a closure into a listener
struct FnListener<F>(F);

impl<F> CanvasListener for FnListener<F>
where
    F: FnMut(&CanvasEvent<'_>),
{
    fn handle_event(&mut self, event: &CanvasEvent<'_>) {
        (self.0)(event)
    }
}

/// Broadcasts canvas events to registered listeners.
///
/// Delivery is synchronous and in subscription order. Listeners run while
/// the bus is borrowed: a listener that reaches back into the canvas (for
/// example through a shared handle) and triggers another emit re-enters the
/// bus and panics on the `RefCell` borrow. Queue such follow-up work and run
/// it after the handler returns.
pub struct EventBus {
    listeners: RefCell<Vec<Box<dyn CanvasListener>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &format!("<{} listeners>", self.listeners.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a listener to receive events
    pub fn subscribe(&self, listener: Box<dyn CanvasListener>) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Subscribe a closure to receive events
    pub fn subscribe_fn<F>(&self, f: F)
    where
        F: FnMut(&CanvasEvent<'_>) + 'static,
    {
        self.subscribe(Box::new(FnListener(f)));
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Emit an event to all registered listeners
    pub fn emit(&self, event: CanvasEvent<'_>) {
        log::debug!("emit {}", event);
        for listener in &mut *self.listeners.borrow_mut() {
            listener.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_delivery_in_subscription_order() {
        let bus = EventBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let log = Rc::clone(&log);
            bus.subscribe_fn(move |event| log.borrow_mut().push(format!("{tag}:{}", event.name())));
        }
        bus.emit(CanvasEvent::EditingModeExited);

        assert_eq!(
            *log.borrow(),
            vec!["first:editing_mode_exited", "second:editing_mode_exited"]
        );
    }

    #[test]
    fn test_adapter_defaults_ignore_events() {
        struct OnlyModeChanges(Rc<RefCell<u32>>);
        impl CanvasListener for OnlyModeChanges {
            fn editing_mode_exited(&mut self) {
                *self.0.borrow_mut() += 1;
            }
        }

        let count = Rc::new(RefCell::new(0));
        let bus = EventBus::new();
        bus.subscribe(Box::new(OnlyModeChanges(Rc::clone(&count))));
        bus.emit(CanvasEvent::EditingModeExited);
        bus.emit(CanvasEvent::EditingModeExited);

        assert_eq!(*count.borrow(), 2);
        assert_eq!(bus.len(), 1);
        assert!(!bus.is_empty());
        assert!(EventBus::new().is_empty());
    }
}
