/// A navigable region of the page: the anchor id it is rendered under and
/// the label shown in the nav.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

/// Nav sections, in document order.
pub const SECTIONS: &[SectionDescriptor] = &[
    SectionDescriptor { id: "hero", label: "Home" },
    SectionDescriptor { id: "problem", label: "The Problem" },
    SectionDescriptor { id: "solution", label: "The Solution" },
    SectionDescriptor { id: "bonuses", label: "Bonuses" },
    SectionDescriptor { id: "faq", label: "FAQ" },
    SectionDescriptor { id: "cta", label: "Get It Now" },
];

/// Tracks which nav section is "in view". Holds an index into a static
/// descriptor list so the active section is always a declared one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionTracker {
    sections: &'static [SectionDescriptor],
    active: usize,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(SECTIONS)
    }
}

impl SectionTracker {
    /// Starts with the first section active.
    ///
    /// Panics if `sections` is empty.
    fn new(sections: &'static [SectionDescriptor]) -> Self {
        assert!(!sections.is_empty(), "section list must not be empty");
        Self { sections, active: 0 }
    }

    pub fn active(&self) -> &'static SectionDescriptor {
        &self.sections[self.active]
    }

    pub fn active_id(&self) -> &'static str {
        self.active().id
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Explicit navigation. Unknown ids leave the state alone. Returns
    /// whether the active section changed.
    pub fn activate(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                let changed = index != self.active;
                self.active = index;
                changed
            }
            None => false,
        }
    }

    /// Applies one batch of sections that just crossed the viewport midline.
    /// If several land in the same batch the topmost one in document order
    /// wins, regardless of the order the browser reported them in.
    pub fn observe<'a, I>(&mut self, in_view: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match in_view.into_iter().filter_map(|id| self.position(id)).min() {
            Some(index) => {
                let changed = index != self.active;
                self.active = index;
                changed
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_section() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.active_id(), "hero");
        assert_eq!(tracker.active().label, "Home");
    }

    #[test]
    fn section_ids_are_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn activate_known_section() {
        let mut tracker = SectionTracker::default();
        assert!(tracker.activate("faq"));
        assert_eq!(tracker.active_id(), "faq");
        // already active
        assert!(!tracker.activate("faq"));
        assert_eq!(tracker.active_id(), "faq");
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut tracker = SectionTracker::default();
        tracker.activate("bonuses");
        assert!(!tracker.activate("testimonial"));
        assert!(!tracker.observe(["footer", "nope"]));
        assert_eq!(tracker.active_id(), "bonuses");
    }

    #[test]
    fn observe_prefers_topmost_in_document_order() {
        let mut tracker = SectionTracker::default();
        assert!(tracker.observe(["faq", "solution", "cta"]));
        assert_eq!(tracker.active_id(), "solution");

        let mut reversed = SectionTracker::default();
        reversed.observe(["cta", "faq", "solution"]);
        assert_eq!(reversed.active_id(), tracker.active_id());
    }

    #[test]
    fn empty_batch_keeps_current() {
        let mut tracker = SectionTracker::default();
        tracker.observe(["problem"]);
        assert!(!tracker.observe(std::iter::empty()));
        assert_eq!(tracker.active_id(), "problem");
    }

    #[test]
    fn active_is_always_declared() {
        let mut tracker = SectionTracker::default();
        let ids = ["cta", "x", "hero", "", "faq", "bonuses", "author"];
        for id in ids {
            tracker.activate(id);
            tracker.observe([id]);
            assert!(SECTIONS.iter().any(|s| s.id == tracker.active_id()));
        }
    }
}
