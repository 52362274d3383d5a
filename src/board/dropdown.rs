// ABOUTME: Filter dropdown menu state for one filter category
// ABOUTME: Tracks only the open flag; choices are handed back to the board

use super::filters::{FilterCategory, Filters};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDropdown {
    category: FilterCategory,
    open: bool,
}

impl FilterDropdown {
    pub fn new(category: FilterCategory) -> Self {
        Self {
            category,
            open: false,
        }
    }

    pub fn category(&self) -> FilterCategory {
        self.category
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn click(&mut self) {
        self.open = !self.open;
    }

    /// Button text: the selected value, or the category name when unset.
    pub fn label<'a>(&self, filters: &'a Filters) -> &'a str {
        filters
            .get(self.category)
            .unwrap_or_else(|| self.category.label())
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.category.options()
    }

    /// Hand `option` to `on_select` and close the menu. Does nothing while the
    /// menu is closed, since its options are not on screen.
    pub fn choose<F>(&mut self, option: &str, on_select: F) -> bool
    where
        F: FnOnce(FilterCategory, &str),
    {
        if !self.open {
            return false;
        }
        on_select(self.category, option);
        self.open = false;
        true
    }
}
