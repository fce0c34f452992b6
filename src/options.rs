use smol_str::SmolStr;

use crate::{error::Result, paginator::Paginator, template::TemplateOverrides};

/// Display options that can be applied to a [`Paginator`] in one go, e.g.
/// after loading them from the host application's configuration.
///
/// Every field is optional; unset fields keep the paginator's current value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaginatorOptions {
    pub max_pages_to_show: Option<i64>,

    pub previous_text: Option<SmolStr>,
    pub next_text: Option<SmolStr>,
    pub first_text: Option<SmolStr>,
    pub last_text: Option<SmolStr>,

    pub show_first_page: Option<bool>,
    pub show_last_page: Option<bool>,
    pub show_previous_page: Option<bool>,
    pub show_next_page: Option<bool>,

    pub template: TemplateOverrides,
}

impl Paginator {
    /// Applies every set option. The only fallible option goes first, so an
    /// error leaves the paginator untouched.
    pub fn apply_options(&mut self, options: &PaginatorOptions) -> Result<&mut Self> {
        if let Some(max) = options.max_pages_to_show {
            self.set_max_pages_to_show(max)?;
        }

        if let Some(ref text) = options.previous_text {
            self.set_previous_text(text.clone());
        }
        if let Some(ref text) = options.next_text {
            self.set_next_text(text.clone());
        }
        if let Some(ref text) = options.first_text {
            self.set_first_text(text.clone());
        }
        if let Some(ref text) = options.last_text {
            self.set_last_text(text.clone());
        }

        if let Some(show) = options.show_first_page {
            self.set_show_first_page(show);
        }
        if let Some(show) = options.show_last_page {
            self.set_show_last_page(show);
        }
        if let Some(show) = options.show_previous_page {
            self.set_show_previous_page(show);
        }
        if let Some(show) = options.show_next_page {
            self.set_show_next_page(show);
        }

        if !options.template.is_empty() {
            self.set_template(&options.template);
        }

        tracing::debug!(?options, "applied paginator options");
        Ok(self)
    }
}
