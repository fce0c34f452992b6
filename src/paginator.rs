use smol_str::SmolStr;

use crate::{
    PLACEHOLDER,
    error::{PaginatorError, Result},
    template::{Template, TemplateOverrides},
    window::{self, Page, PageSlot},
};

pub(crate) const DEFAULT_MAX_PAGES_TO_SHOW: i64 = 10;
pub(crate) const MIN_MAX_PAGES_TO_SHOW: i64 = 3;

/// Pagination state plus everything needed to render its links.
///
/// Setters return `&mut Self` so configuration can be chained. The page count
/// is derived and recomputed whenever the item total or page size changes.
#[derive(Debug, Clone)]
pub struct Paginator {
    total_items: i64,
    items_per_page: i64,
    current_page: i64,
    num_pages: i64,
    max_pages_to_show: i64,
    url_pattern: SmolStr,
    template: Template,

    previous_text: SmolStr,
    next_text: SmolStr,
    first_text: SmolStr,
    last_text: SmolStr,

    show_first_page: bool,
    show_last_page: bool,
    show_previous_page: bool,
    show_next_page: bool,
}

impl Paginator {
    pub fn new<T>(total_items: i64, items_per_page: i64, current_page: i64, url_pattern: T) -> Self
    where
        T: Into<SmolStr>,
    {
        let mut paginator = Self {
            total_items,
            items_per_page,
            current_page,
            num_pages: 0,
            max_pages_to_show: DEFAULT_MAX_PAGES_TO_SHOW,
            url_pattern: url_pattern.into(),
            template: Template::default(),
            previous_text: SmolStr::new_static("Önceki"),
            next_text: SmolStr::new_static("Sonraki"),
            first_text: SmolStr::new_static("İlk"),
            last_text: SmolStr::new_static("Son"),
            show_first_page: true,
            show_last_page: true,
            show_previous_page: true,
            show_next_page: true,
        };
        paginator.calculate_num_pages();
        paginator
    }

    fn calculate_num_pages(&mut self) {
        self.num_pages = ceil_div(self.total_items, self.items_per_page);
        tracing::trace!(
            total_items = self.total_items,
            items_per_page = self.items_per_page,
            num_pages = self.num_pages,
            "recalculated page count"
        );
    }

    fn check_max_pages_to_show(value: i64) -> Result<()> {
        if value < MIN_MAX_PAGES_TO_SHOW {
            tracing::debug!(value, "rejected max_pages_to_show");
            return Err(PaginatorError::InvalidConfiguration {
                field: "max_pages_to_show",
                value,
                minimum: MIN_MAX_PAGES_TO_SHOW,
            });
        }
        Ok(())
    }

    // counts

    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    pub fn set_total_items(&mut self, total_items: i64) -> &mut Self {
        self.total_items = total_items;
        self.calculate_num_pages();
        self
    }

    pub fn items_per_page(&self) -> i64 {
        self.items_per_page
    }

    pub fn set_items_per_page(&mut self, items_per_page: i64) -> &mut Self {
        self.items_per_page = items_per_page;
        self.calculate_num_pages();
        self
    }

    pub fn num_pages(&self) -> i64 {
        self.num_pages
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn set_current_page(&mut self, current_page: i64) -> &mut Self {
        self.current_page = current_page;
        self
    }

    pub fn max_pages_to_show(&self) -> i64 {
        self.max_pages_to_show
    }

    pub fn set_max_pages_to_show(&mut self, max_pages_to_show: i64) -> Result<&mut Self> {
        Self::check_max_pages_to_show(max_pages_to_show)?;
        self.max_pages_to_show = max_pages_to_show;
        Ok(self)
    }

    // presentation

    pub fn url_pattern(&self) -> &str {
        self.url_pattern.as_str()
    }

    pub fn set_url_pattern<T: Into<SmolStr>>(&mut self, url_pattern: T) -> &mut Self {
        self.url_pattern = url_pattern.into();
        self
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn set_template(&mut self, overrides: &TemplateOverrides) -> &mut Self {
        self.template.merge(overrides);
        self
    }

    pub fn previous_text(&self) -> &str {
        self.previous_text.as_str()
    }

    pub fn set_previous_text<T: Into<SmolStr>>(&mut self, text: T) -> &mut Self {
        self.previous_text = text.into();
        self
    }

    pub fn next_text(&self) -> &str {
        self.next_text.as_str()
    }

    pub fn set_next_text<T: Into<SmolStr>>(&mut self, text: T) -> &mut Self {
        self.next_text = text.into();
        self
    }

    pub fn first_text(&self) -> &str {
        self.first_text.as_str()
    }

    pub fn set_first_text<T: Into<SmolStr>>(&mut self, text: T) -> &mut Self {
        self.first_text = text.into();
        self
    }

    pub fn last_text(&self) -> &str {
        self.last_text.as_str()
    }

    pub fn set_last_text<T: Into<SmolStr>>(&mut self, text: T) -> &mut Self {
        self.last_text = text.into();
        self
    }

    pub fn show_first_page(&self) -> bool {
        self.show_first_page
    }

    pub fn set_show_first_page(&mut self, show: bool) -> &mut Self {
        self.show_first_page = show;
        self
    }

    pub fn show_last_page(&self) -> bool {
        self.show_last_page
    }

    pub fn set_show_last_page(&mut self, show: bool) -> &mut Self {
        self.show_last_page = show;
        self
    }

    pub fn show_previous_page(&self) -> bool {
        self.show_previous_page
    }

    pub fn set_show_previous_page(&mut self, show: bool) -> &mut Self {
        self.show_previous_page = show;
        self
    }

    pub fn show_next_page(&self) -> bool {
        self.show_next_page
    }

    pub fn set_show_next_page(&mut self, show: bool) -> &mut Self {
        self.show_next_page = show;
        self
    }

    // navigation

    /// The url pattern with every [`PLACEHOLDER`] replaced by `page`.
    pub fn page_url(&self, page: i64) -> String {
        self.url_pattern.replace(PLACEHOLDER, &page.to_string())
    }

    pub fn next_page(&self) -> Option<i64> {
        (self.current_page < self.num_pages).then(|| self.current_page.saturating_add(1))
    }

    pub fn previous_page(&self) -> Option<i64> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    pub fn first_page(&self) -> Option<i64> {
        (self.current_page > 1).then_some(1)
    }

    pub fn last_page(&self) -> Option<i64> {
        (self.current_page < self.num_pages).then_some(self.num_pages)
    }

    pub fn next_page_url(&self) -> Option<String> {
        self.next_page().map(|page| self.page_url(page))
    }

    pub fn previous_page_url(&self) -> Option<String> {
        self.previous_page().map(|page| self.page_url(page))
    }

    pub fn first_page_url(&self) -> Option<String> {
        self.first_page().map(|page| self.page_url(page))
    }

    pub fn last_page_url(&self) -> Option<String> {
        self.last_page().map(|page| self.page_url(page))
    }

    /// The page slots to display, see [`PageSlot`].
    pub fn pages(&self) -> Vec<PageSlot> {
        window::sliding_window(
            self.num_pages,
            self.max_pages_to_show,
            self.current_page,
            |number| Page::new(number, self.page_url(number), number == self.current_page),
        )
    }
}

/// Ceiling division where a zero divisor yields zero pages.
fn ceil_div(total: i64, per_page: i64) -> i64 {
    if per_page == 0 {
        return 0;
    }
    let quotient = total.saturating_div(per_page);
    let remainder = total.wrapping_rem(per_page);
    if remainder != 0 && (remainder > 0) == (per_page > 0) {
        quotient.saturating_add(1)
    } else {
        quotient
    }
}
