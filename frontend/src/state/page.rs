use std::rc::Rc;

use log::debug;
use yew::Reducible;

use super::countdown::Countdown;
use super::sections::SectionTracker;
use super::toggle::{Toggle, ToggleSet};
use crate::viewport::Scroller;

/// Everything on the landing page that changes while it is open.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub countdown: Countdown,
    pub sections: SectionTracker,
    pub menu: Toggle,
    pub faq: ToggleSet,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    /// One second passed.
    Tick,
    /// The user picked a section from the nav.
    Navigate(&'static str),
    /// The observer reported sections crossing the viewport midline.
    SectionsInView(Vec<String>),
    ToggleMenu,
    ToggleFaq(usize),
}

impl PageState {
    pub fn new(faq_items: usize) -> Self {
        Self {
            countdown: Countdown::default(),
            sections: SectionTracker::default(),
            menu: Toggle::default(),
            faq: ToggleSet::new(faq_items),
        }
    }

    /// Applies one action. Returns false when nothing changed.
    pub fn apply(&mut self, action: PageAction) -> bool {
        match action {
            PageAction::Tick => self.countdown.tick(),
            PageAction::Navigate(id) => {
                let menu_was_open = self.menu.is_open();
                self.menu.close();
                self.sections.activate(id) | menu_was_open
            }
            PageAction::SectionsInView(ids) => {
                self.sections.observe(ids.iter().map(String::as_str))
            }
            PageAction::ToggleMenu => {
                self.menu.toggle();
                true
            }
            PageAction::ToggleFaq(index) => self.faq.toggle(index),
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            // same Rc means yew skips the re-render
            self
        }
    }
}

/// Manual navigation: scroll the section's anchor into view and mark it
/// active right away, without waiting for the observer. A missing anchor
/// only skips the scroll.
pub fn jump_to<S, F>(scroller: &S, dispatch: F, id: &'static str)
where
    S: Scroller + ?Sized,
    F: FnOnce(PageAction),
{
    if !scroller.scroll_to(id) {
        debug!("no element with id '{}', skipping scroll", id);
    }
    dispatch(PageAction::Navigate(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQS;
    use crate::state::countdown::format_time;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingScroller {
        present: Vec<&'static str>,
        requested: RefCell<Vec<String>>,
    }

    impl Scroller for RecordingScroller {
        fn scroll_to(&self, anchor: &str) -> bool {
            self.requested.borrow_mut().push(anchor.to_string());
            self.present.contains(&anchor)
        }
    }

    fn state() -> PageState {
        PageState::new(FAQS.len())
    }

    #[test]
    fn initial_state() {
        let state = state();
        assert_eq!(format_time(state.countdown.remaining()), "72h 0m 0s");
        assert_eq!(state.sections.active_id(), "hero");
        assert!(!state.menu.is_open());
        assert_eq!(state.faq.len(), 10);
        assert!(state.faq.open_indices().is_empty());
    }

    #[test]
    fn clicking_faq_nav_scrolls_and_activates() {
        let scroller = RecordingScroller {
            present: vec!["hero", "faq"],
            ..Default::default()
        };
        let mut state = state();
        state.apply(PageAction::SectionsInView(vec!["bonuses".into()]));

        jump_to(&scroller, |action| {
            state.apply(action);
        }, "faq");

        assert_eq!(state.sections.active_id(), "faq");
        assert_eq!(*scroller.requested.borrow(), vec!["faq".to_string()]);
    }

    #[test]
    fn navigation_with_missing_anchor_still_activates() {
        let scroller = RecordingScroller::default();
        let mut state = state();
        jump_to(&scroller, |action| {
            state.apply(action);
        }, "cta");
        assert_eq!(state.sections.active_id(), "cta");
        // the scroll was attempted and reported nothing to scroll to
        assert_eq!(*scroller.requested.borrow(), vec!["cta".to_string()]);
        assert!(!scroller.scroll_to("cta"));
    }

    #[test]
    fn navigate_closes_mobile_menu() {
        let mut state = state();
        state.apply(PageAction::ToggleMenu);
        assert!(state.menu.is_open());

        // same section as before still counts as a change because the menu closed
        assert!(state.apply(PageAction::Navigate("hero")));
        assert!(!state.menu.is_open());
        assert!(!state.apply(PageAction::Navigate("hero")));
    }

    #[test]
    fn opening_two_faq_items() {
        let mut state = state();
        state.apply(PageAction::ToggleFaq(2));
        state.apply(PageAction::ToggleFaq(5));
        assert_eq!(state.faq.open_indices(), vec![2, 5]);
    }

    #[test]
    fn reduce_returns_same_rc_when_unchanged() {
        let mut finished = state();
        finished.countdown = Countdown::new(0);
        let finished = Rc::new(finished);

        let next = finished.clone().reduce(PageAction::Tick);
        assert!(Rc::ptr_eq(&finished, &next));

        let next = finished.clone().reduce(PageAction::ToggleFaq(0));
        assert!(!Rc::ptr_eq(&finished, &next));
        assert!(next.faq.is_open(0));
    }

    #[test]
    fn ticks_never_go_negative() {
        let mut state = state();
        state.countdown = Countdown::new(3);
        for _ in 0..10 {
            state.apply(PageAction::Tick);
        }
        assert_eq!(state.countdown.remaining(), 0);
    }
}
