mod error;
mod options;
mod paginator;
mod render;
mod template;
mod window;
mod writer;

pub use error::PaginatorError;
pub use error::Result;

pub use options::PaginatorOptions;
pub use paginator::Paginator;

pub use template::Template;
pub use template::TemplateOverrides;

pub use window::Page;
pub use window::PageSlot;

/// Token inside a url pattern that is replaced by the page number.
pub const PLACEHOLDER: &str = "{:page}";

#[cfg(test)]
pub(crate) mod tests {
    use crate::Paginator;

    pub(crate) const PATTERN: &str = "/list/page/{:page}";

    pub(crate) fn paginator(total_items: i64, items_per_page: i64, current_page: i64) -> Paginator {
        Paginator::new(total_items, items_per_page, current_page, PATTERN)
    }
}
