use smol_str::SmolStr;

/// A numbered slot in the page list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    number: i64,
    url: SmolStr,
    current: bool,
}

impl Page {
    pub fn new<T>(number: i64, url: T, current: bool) -> Self
    where
        T: Into<SmolStr>,
    {
        Self {
            number,
            url: url.into(),
            current,
        }
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn is_current(&self) -> bool {
        self.current
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSlot {
    Page(Page),
    /// A gap between page 1 and the window, or between the window and the
    /// last page. Carries no url and is never current.
    Ellipsis,
}

impl PageSlot {
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageSlot::Ellipsis)
    }

    pub fn page(&self) -> Option<&Page> {
        match self {
            PageSlot::Page(page) => Some(page),
            PageSlot::Ellipsis => None,
        }
    }

    pub fn number(&self) -> Option<i64> {
        self.page().map(Page::number)
    }
}

/// Picks the page slots to display.
///
/// With more pages than `max_pages_to_show`, page 1 and `num_pages` are always
/// present and a window of `max_pages_to_show - 2` interior pages follows
/// `current_page`, right-aligned against the last page when it would run past
/// it. Gaps on either side of the window become [`PageSlot::Ellipsis`].
pub(crate) fn sliding_window<F>(
    num_pages: i64,
    max_pages_to_show: i64,
    current_page: i64,
    mut page: F,
) -> Vec<PageSlot>
where
    F: FnMut(i64) -> Page,
{
    if num_pages <= 1 {
        return Vec::new();
    }

    if num_pages <= max_pages_to_show {
        return (1..=num_pages).map(|n| PageSlot::Page(page(n))).collect();
    }

    let num_adjacent = (max_pages_to_show - 3) / 2;

    let mut start = if current_page.saturating_add(num_adjacent) > num_pages {
        num_pages - max_pages_to_show + 2
    } else {
        current_page.saturating_sub(num_adjacent)
    };
    if start < 2 {
        start = 2;
    }

    let mut end = start.saturating_add(max_pages_to_show - 3);
    if end >= num_pages {
        end = num_pages - 1;
    }

    // first, last, two gaps and the window
    let mut slots = Vec::with_capacity((end - start + 5) as usize);
    slots.push(PageSlot::Page(page(1)));
    if start > 2 {
        slots.push(PageSlot::Ellipsis);
    }
    for number in start..=end {
        slots.push(PageSlot::Page(page(number)));
    }
    if end < num_pages - 1 {
        slots.push(PageSlot::Ellipsis);
    }
    slots.push(PageSlot::Page(page(num_pages)));

    slots
}
