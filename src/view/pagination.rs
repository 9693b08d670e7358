use serde::Serialize;
use std::ops::Range;

pub const PREVIOUS_LABEL: &str = "<< Previous";
pub const NEXT_LABEL: &str = "Next >>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Previous,
    Page,
    Next,
}

/// One navigation button; `page` is the 1-based page it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControl {
    pub kind: ControlKind,
    pub label: String,
    pub page: usize,
    pub active: bool,
}

/// Number of pages needed for `total` items.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Fixed-size pages over the filtered collection. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Move to `page`. Pages outside `1..=page_count` are ignored.
    pub fn go_to(&mut self, page: usize, total: usize) -> bool {
        let pages = page_count(total, self.page_size);
        if page == 0 || page > pages {
            log::warn!("Page {} out of range ({} pages)", page, pages);
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next(&mut self, total: usize) -> bool {
        self.go_to(self.current_page + 1, total)
    }

    pub fn previous(&mut self, total: usize) -> bool {
        self.go_to(self.current_page.saturating_sub(1), total)
    }

    /// Positions of the current page within the filtered collection.
    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.page_range(items.len())]
    }

    /// Previous / numbered pages / Next. Previous is left out on the first
    /// page and Next on the last; an empty collection has no controls.
    pub fn controls(&self, total: usize) -> Vec<PageControl> {
        let pages = page_count(total, self.page_size);
        if pages == 0 {
            return Vec::new();
        }

        let mut controls = Vec::with_capacity(pages + 2);
        if self.current_page > 1 {
            controls.push(PageControl {
                kind: ControlKind::Previous,
                label: PREVIOUS_LABEL.to_string(),
                page: self.current_page - 1,
                active: false,
            });
        }
        for page in 1..=pages {
            controls.push(PageControl {
                kind: ControlKind::Page,
                label: page.to_string(),
                page,
                active: page == self.current_page,
            });
        }
        if self.current_page < pages {
            controls.push(PageControl {
                kind: ControlKind::Next,
                label: NEXT_LABEL.to_string(),
                page: self.current_page + 1,
                active: false,
            });
        }
        controls
    }
}
