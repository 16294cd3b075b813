use std::cell::Cell;

use crate::sections::{track_raw, SectionId};

/// What the tracker and navigator need from the page.
pub trait Viewport {
    type Target;

    fn scroll_y(&self) -> f64;

    /// `(element id, top offset)` of every rendered section, in document order.
    fn section_offsets(&self) -> Vec<(String, f64)>;

    fn find(&self, id: &str) -> Option<Self::Target>;

    /// Starts a smooth scroll that brings `target` into view. Does not wait
    /// for the animation.
    fn smooth_scroll_to(&self, target: &Self::Target);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Scrolled,
    /// No element with that id is rendered. Nothing happened.
    Missing,
}

/// Recomputes the active section from the current scroll position, keeping
/// `current` when no section qualifies.
pub fn observe<V: Viewport>(viewport: &V, current: SectionId) -> SectionId {
    let offsets = viewport.section_offsets();
    let scroll_y = viewport.scroll_y();
    track_raw(offsets.iter().map(|(id, top)| (id.as_str(), *top)), scroll_y).unwrap_or(current)
}

/// Delivers scroll notifications until unsubscribed.
pub trait ScrollSource {
    type Subscription;

    fn subscribe(&self, on_scroll: Box<dyn Fn()>) -> Self::Subscription;

    fn unsubscribe(&self, subscription: Self::Subscription);
}

/// Keeps the active section in sync with scrolling for as long as it is alive.
///
/// Mounting evaluates once, so a page restored mid-scroll is reported right
/// away, then re-evaluates on every notification from the source. Dropping
/// the tracker unsubscribes.
pub struct SectionTracker<S: ScrollSource> {
    source: S,
    subscription: Option<S::Subscription>,
}

impl<S: ScrollSource> SectionTracker<S> {
    /// `on_change` runs only when the active section actually changes.
    pub fn mount<V, F>(source: S, viewport: V, initial: SectionId, on_change: F) -> Self
    where
        V: Viewport + 'static,
        F: Fn(SectionId) + 'static,
    {
        let current = Cell::new(initial);
        let refresh = move || {
            let prev = current.get();
            let next = observe(&viewport, prev);
            if next != prev {
                log::debug!("active section {prev} -> {next}");
                current.set(next);
                on_change(next);
            }
        };
        refresh();
        let subscription = source.subscribe(Box::new(refresh));
        Self {
            source,
            subscription: Some(subscription),
        }
    }
}

impl<S: ScrollSource> Drop for SectionTracker<S> {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.source.unsubscribe(subscription);
        }
    }
}

/// Scrolls the section into view if it is rendered.
///
/// The active section is not touched here; the scroll events produced by the
/// animation update it.
pub fn navigate<V: Viewport>(viewport: &V, id: SectionId) -> NavOutcome {
    match viewport.find(id.as_str()) {
        Some(target) => {
            viewport.smooth_scroll_to(&target);
            NavOutcome::Scrolled
        }
        None => {
            log::debug!("no rendered section with id {id}");
            NavOutcome::Missing
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    struct FakePage {
        scroll_y: Cell<f64>,
        sections: Vec<(String, f64)>,
        scrolled_to: RefCell<Vec<String>>,
        evaluations: Cell<usize>,
    }

    impl FakePage {
        fn new(sections: &[(&str, f64)]) -> Self {
            Self {
                scroll_y: Cell::new(0.0),
                sections: sections
                    .iter()
                    .map(|(id, top)| (id.to_string(), *top))
                    .collect(),
                scrolled_to: RefCell::new(Vec::new()),
                evaluations: Cell::new(0),
            }
        }
    }

    impl Viewport for FakePage {
        type Target = String;

        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }

        fn section_offsets(&self) -> Vec<(String, f64)> {
            self.evaluations.set(self.evaluations.get() + 1);
            self.sections.clone()
        }

        fn find(&self, id: &str) -> Option<String> {
            self.sections
                .iter()
                .find(|(s, _)| s == id)
                .map(|(s, _)| s.clone())
        }

        fn smooth_scroll_to(&self, target: &String) {
            self.scrolled_to.borrow_mut().push(target.clone());
        }
    }

    // The tracker owns its viewport; tests keep a second handle to move the page.
    impl Viewport for Rc<FakePage> {
        type Target = String;

        fn scroll_y(&self) -> f64 {
            (**self).scroll_y()
        }

        fn section_offsets(&self) -> Vec<(String, f64)> {
            (**self).section_offsets()
        }

        fn find(&self, id: &str) -> Option<String> {
            (**self).find(id)
        }

        fn smooth_scroll_to(&self, target: &String) {
            (**self).smooth_scroll_to(target)
        }
    }

    #[derive(Default)]
    struct Listeners {
        active: RefCell<Vec<(usize, Box<dyn Fn()>)>>,
        next_id: Cell<usize>,
        unsubscribed: Cell<usize>,
    }

    #[derive(Clone, Default)]
    struct FakeScroll(Rc<Listeners>);

    impl FakeScroll {
        fn fire(&self) {
            for (_, on_scroll) in self.0.active.borrow().iter() {
                on_scroll();
            }
        }

        fn listening(&self) -> usize {
            self.0.active.borrow().len()
        }
    }

    impl ScrollSource for FakeScroll {
        type Subscription = usize;

        fn subscribe(&self, on_scroll: Box<dyn Fn()>) -> usize {
            let id = self.0.next_id.get();
            self.0.next_id.set(id + 1);
            self.0.active.borrow_mut().push((id, on_scroll));
            id
        }

        fn unsubscribe(&self, subscription: usize) {
            self.0.active.borrow_mut().retain(|(id, _)| *id != subscription);
            self.0.unsubscribed.set(self.0.unsubscribed.get() + 1);
        }
    }

    fn mount_tracker(
        page: &Rc<FakePage>,
        scroll: &FakeScroll,
    ) -> (SectionTracker<FakeScroll>, Rc<RefCell<Vec<SectionId>>>) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&changes);
        let tracker = SectionTracker::mount(
            scroll.clone(),
            Rc::clone(page),
            SectionId::default(),
            move |next| seen.borrow_mut().push(next),
        );
        (tracker, changes)
    }

    fn page() -> FakePage {
        FakePage::new(&[
            ("hero", 0.0),
            ("about", 1000.0),
            ("experience", 2000.0),
            ("skills", 3000.0),
        ])
    }

    #[test]
    fn test_observe_follows_scroll() {
        let page = page();
        let mut active = SectionId::default();
        assert_eq!(active, SectionId::Hero);

        active = observe(&page, active);
        assert_eq!(active, SectionId::Hero);

        page.scroll_y.set(900.0);
        active = observe(&page, active);
        assert_eq!(active, SectionId::About);

        page.scroll_y.set(2900.0);
        active = observe(&page, active);
        assert_eq!(active, SectionId::Skills);

        page.scroll_y.set(1200.0);
        active = observe(&page, active);
        assert_eq!(active, SectionId::About);
    }

    #[test]
    fn test_observe_keeps_value_when_nothing_qualifies() {
        let page = FakePage::new(&[("about", 500.0), ("skills", 1500.0)]);
        assert_eq!(observe(&page, SectionId::Hero), SectionId::Hero);
        assert_eq!(observe(&page, SectionId::Projects), SectionId::Projects);
    }

    #[test]
    fn test_navigate_scrolls_to_rendered_section() {
        let page = page();
        assert_eq!(navigate(&page, SectionId::Experience), NavOutcome::Scrolled);
        assert_eq!(*page.scrolled_to.borrow(), vec!["experience".to_string()]);
        // navigation never moves the tracker by itself
        assert_eq!(observe(&page, SectionId::Hero), SectionId::Hero);
    }

    #[test]
    fn test_navigate_missing_is_noop() {
        let page = page();
        assert_eq!(navigate(&page, SectionId::Projects), NavOutcome::Missing);
        assert!(page.scrolled_to.borrow().is_empty());
        assert_eq!(page.scroll_y(), 0.0);
    }

    #[test]
    fn test_tracker_evaluates_once_at_mount() {
        let page = Rc::new(page());
        let scroll = FakeScroll::default();
        let (_tracker, changes) = mount_tracker(&page, &scroll);

        assert_eq!(page.evaluations.get(), 1);
        assert_eq!(scroll.listening(), 1);
        // still at the top, so nothing to report
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_tracker_reports_restored_scroll_at_mount() {
        let page = Rc::new(page());
        page.scroll_y.set(2900.0);
        let scroll = FakeScroll::default();
        let (_tracker, changes) = mount_tracker(&page, &scroll);

        assert_eq!(*changes.borrow(), vec![SectionId::Skills]);
    }

    #[test]
    fn test_tracker_follows_scroll_events() {
        let page = Rc::new(page());
        let scroll = FakeScroll::default();
        let (_tracker, changes) = mount_tracker(&page, &scroll);

        page.scroll_y.set(900.0);
        assert!(changes.borrow().is_empty());
        scroll.fire();
        assert_eq!(*changes.borrow(), vec![SectionId::About]);
        assert_eq!(page.evaluations.get(), 2);

        // same section again, no duplicate report
        page.scroll_y.set(950.0);
        scroll.fire();
        assert_eq!(*changes.borrow(), vec![SectionId::About]);
        assert_eq!(page.evaluations.get(), 3);

        page.scroll_y.set(1900.0);
        scroll.fire();
        assert_eq!(
            *changes.borrow(),
            vec![SectionId::About, SectionId::Experience]
        );
    }

    #[test]
    fn test_tracker_unsubscribes_once_on_drop() {
        let page = Rc::new(page());
        let scroll = FakeScroll::default();
        let (tracker, changes) = mount_tracker(&page, &scroll);

        drop(tracker);
        assert_eq!(scroll.0.unsubscribed.get(), 1);
        assert_eq!(scroll.listening(), 0);

        page.scroll_y.set(900.0);
        scroll.fire();
        assert_eq!(page.evaluations.get(), 1);
        assert!(changes.borrow().is_empty());
    }
}
