/// A single open/closed flag for a collapsible block. Closed by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Toggle {
    open: bool,
}

impl Toggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Independent toggles for a list of items (the FAQ). Opening one item never
/// closes another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleSet {
    items: Vec<Toggle>,
}

impl ToggleSet {
    pub fn new(len: usize) -> Self {
        Self {
            items: vec![Toggle::default(); len],
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.items.get(index).map_or(false, Toggle::is_open)
    }

    /// Flips item `index`. Out of range indices are ignored.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.toggle();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
impl ToggleSet {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn open_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_open())
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_close_resets() {
        let mut menu = Toggle::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn items_are_independent() {
        let mut faq = ToggleSet::new(10);
        faq.toggle(2);
        faq.toggle(5);
        assert_eq!(faq.open_indices(), vec![2, 5]);
        for i in [0, 1, 3, 4, 6, 7, 8, 9] {
            assert!(!faq.is_open(i), "item {} should be collapsed", i);
        }

        faq.toggle(2);
        assert_eq!(faq.open_indices(), vec![5]);
    }

    #[test]
    fn out_of_range_is_a_noop() {
        let mut faq = ToggleSet::new(3);
        assert!(!faq.toggle(3));
        assert!(!faq.is_open(3));
        assert!(faq.open_indices().is_empty());
    }
}
