use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::policy::{ActivePolicy, Geometry};
use super::registry::SectionRegistry;

pub type ScrollHandler = Rc<dyn Fn()>;

/// Something that announces "the viewport scrolled". The window in the
/// browser, a hand-driven fake in tests.
pub trait ScrollSource {
    fn subscribe(&self, handler: ScrollHandler) -> Subscription;
}

/// Keeps a listener registered for as long as it lives.
#[must_use = "dropping a Subscription unregisters the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// For sources that could not register anything.
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Holds the active section id and recomputes it on demand.
#[derive(Debug)]
pub struct ActiveSectionTracker {
    registry: SectionRegistry,
    policy: ActivePolicy,
    active: &'static str,
}

impl ActiveSectionTracker {
    pub fn new(registry: SectionRegistry, policy: ActivePolicy) -> Self {
        let active = registry.first().id;
        Self {
            registry,
            policy,
            active,
        }
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    /// Returns the new id only when it differs from the current one, so
    /// callers can skip redundant re-renders.
    pub fn recompute(&mut self, geometry: &dyn Geometry) -> Option<&'static str> {
        let next = self.policy.resolve(&self.registry, geometry)?;
        if next == self.active {
            return None;
        }
        debug!("active section {} -> {}", self.active, next);
        self.active = next;
        Some(next)
    }
}

/// Wires a tracker to a scroll source for the lifetime of a mounted view.
/// Dropping the observer releases the scroll listener.
pub struct ScrollObserver {
    _subscription: Subscription,
}

impl ScrollObserver {
    pub fn mount(
        source: &dyn ScrollSource,
        geometry: Rc<dyn Geometry>,
        tracker: Rc<RefCell<ActiveSectionTracker>>,
        on_change: Rc<dyn Fn(&'static str)>,
    ) -> Self {
        let refresh: ScrollHandler = Rc::new(move || {
            let changed = match tracker.try_borrow_mut() {
                Ok(mut tracker) => tracker.recompute(geometry.as_ref()),
                Err(_) => None,
            };
            if let Some(id) = changed {
                on_change(id);
            }
        });

        // Pages opened on a deep link start scrolled.
        refresh();

        Self {
            _subscription: source.subscribe(refresh),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::tracker::policy::tests::FakeGeometry;
    use std::cell::Cell;

    /// Scroll source driven by hand.
    #[derive(Default)]
    pub struct FakeScrollSource {
        handlers: Rc<RefCell<Vec<(u64, ScrollHandler)>>>,
        next_id: Cell<u64>,
    }

    impl FakeScrollSource {
        pub fn emit(&self) {
            let handlers: Vec<ScrollHandler> = self
                .handlers
                .borrow()
                .iter()
                .map(|(_, handler)| handler.clone())
                .collect();
            for handler in handlers {
                handler();
            }
        }

        pub fn listener_count(&self) -> usize {
            self.handlers.borrow().len()
        }
    }

    impl ScrollSource for FakeScrollSource {
        fn subscribe(&self, handler: ScrollHandler) -> Subscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.handlers.borrow_mut().push((id, handler));

            let handlers = Rc::clone(&self.handlers);
            Subscription::new(move || handlers.borrow_mut().retain(|(other, _)| *other != id))
        }
    }

    struct Harness {
        source: FakeScrollSource,
        geometry: Rc<FakeGeometry>,
        tracker: Rc<RefCell<ActiveSectionTracker>>,
        changes: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Harness {
        fn new(policy: ActivePolicy, geometry: FakeGeometry) -> Self {
            Self {
                source: FakeScrollSource::default(),
                geometry: Rc::new(geometry),
                tracker: Rc::new(RefCell::new(ActiveSectionTracker::new(SectionRegistry::page().unwrap(), policy))),
                changes: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn mount(&self) -> ScrollObserver {
            let changes = Rc::clone(&self.changes);
            ScrollObserver::mount(
                &self.source,
                self.geometry.clone(),
                Rc::clone(&self.tracker),
                Rc::new(move |id: &'static str| changes.borrow_mut().push(id)),
            )
        }

        fn active(&self) -> &'static str {
            self.tracker.borrow().active()
        }
    }

    #[test]
    fn starts_on_first_section() {
        let tracker = ActiveSectionTracker::new(SectionRegistry::page().unwrap(), ActivePolicy::default());
        assert_eq!(tracker.active(), "home");
    }

    #[test]
    fn follows_scroll_with_offset_banding() {
        let harness = Harness::new(ActivePolicy::OffsetBanding, FakeGeometry::scrolled(0.0, 800.0));
        let _observer = harness.mount();
        assert_eq!(harness.active(), "home");

        harness.geometry.scroll_to(850.0);
        harness.source.emit();
        assert_eq!(harness.active(), "about");

        harness.geometry.scroll_to(1650.0);
        harness.source.emit();
        assert_eq!(harness.active(), "services");

        assert_eq!(*harness.changes.borrow(), vec!["about", "services"]);
    }

    #[test]
    fn keeps_previous_section_when_nothing_crosses_threshold() {
        let geometry = FakeGeometry::default()
            .with_rect("home", -700.0, 50.0)
            .with_rect("about", 50.0, 900.0);
        let harness = Harness::new(ActivePolicy::default(), geometry);
        let _observer = harness.mount();
        assert_eq!(harness.active(), "about");

        // Gap between sections, e.g. a margin sitting under the header.
        harness.geometry.set_rect("about", 120.0, 900.0);
        harness.source.emit();
        assert_eq!(harness.active(), "about");
    }

    #[test]
    fn skips_update_when_geometry_is_missing() {
        let harness = Harness::new(ActivePolicy::default(), FakeGeometry::default());
        let _observer = harness.mount();
        harness.source.emit();
        assert_eq!(harness.active(), "home");
        assert!(harness.changes.borrow().is_empty());
    }

    #[test]
    fn repeated_scroll_to_same_place_notifies_once() {
        let harness = Harness::new(ActivePolicy::OffsetBanding, FakeGeometry::scrolled(900.0, 800.0));
        let _observer = harness.mount();
        harness.source.emit();
        harness.source.emit();
        assert_eq!(*harness.changes.borrow(), vec!["about"]);
    }

    #[test]
    fn teardown_releases_listener() {
        let harness = Harness::new(ActivePolicy::OffsetBanding, FakeGeometry::scrolled(0.0, 800.0));
        let observer = harness.mount();
        assert_eq!(harness.source.listener_count(), 1);

        drop(observer);
        assert_eq!(harness.source.listener_count(), 0);

        harness.geometry.scroll_to(2500.0);
        harness.source.emit();
        assert_eq!(harness.active(), "home");
        assert!(harness.changes.borrow().is_empty());
    }

    #[test]
    fn noop_subscription_drops_quietly() {
        let subscription = Subscription::noop();
        drop(subscription);
    }
}
