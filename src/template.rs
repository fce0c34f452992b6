use smol_str::SmolStr;

pub const DEFAULT_CONTAINER: &str =
    r#"<ul class="pagination justify-content-center">{{pages}}</ul>"#;
pub const DEFAULT_CURRENT: &str =
    r#"<li class="page-item active"><span class="page-link">{{page}}</span></li>"#;
pub const DEFAULT_DISABLED: &str =
    r#"<li class="page-item disabled"><span class="page-link">{{page}}</span></li>"#;
pub const DEFAULT_PAGE: &str =
    r#"<li class="page-item"><a class="page-link" href="{{url}}">{{page}}</a></li>"#;
pub const DEFAULT_ELLIPSIS: &str = "...";

/// The five markup fragments a paginator is rendered with.
///
/// `container` receives the assembled items through `{{pages}}`. `current`,
/// `page` and `disabled` receive `{{page}}` and `{{url}}`. `ellipsis` is the
/// label used for gap slots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Template {
    pub container: SmolStr,
    pub current: SmolStr,
    pub disabled: SmolStr,
    pub page: SmolStr,
    pub ellipsis: SmolStr,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            container: SmolStr::new_static(DEFAULT_CONTAINER),
            current: SmolStr::new_static(DEFAULT_CURRENT),
            disabled: SmolStr::new_static(DEFAULT_DISABLED),
            page: SmolStr::new_static(DEFAULT_PAGE),
            ellipsis: SmolStr::new_static(DEFAULT_ELLIPSIS),
        }
    }
}

impl Template {
    /// Overwrites only the fragments present in `overrides`.
    pub fn merge(&mut self, overrides: &TemplateOverrides) -> &mut Self {
        let TemplateOverrides {
            container,
            current,
            disabled,
            page,
            ellipsis,
        } = overrides;

        if let Some(value) = container {
            self.container = value.clone();
        }
        if let Some(value) = current {
            self.current = value.clone();
        }
        if let Some(value) = disabled {
            self.disabled = value.clone();
        }
        if let Some(value) = page {
            self.page = value.clone();
        }
        if let Some(value) = ellipsis {
            self.ellipsis = value.clone();
        }
        self
    }
}

/// A partial [`Template`]; unset fragments keep their previous value on merge.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TemplateOverrides {
    pub container: Option<SmolStr>,
    pub current: Option<SmolStr>,
    pub disabled: Option<SmolStr>,
    pub page: Option<SmolStr>,
    pub ellipsis: Option<SmolStr>,
}

impl TemplateOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container<T: Into<SmolStr>>(mut self, value: T) -> Self {
        self.container = Some(value.into());
        self
    }

    pub fn current<T: Into<SmolStr>>(mut self, value: T) -> Self {
        self.current = Some(value.into());
        self
    }

    pub fn disabled<T: Into<SmolStr>>(mut self, value: T) -> Self {
        self.disabled = Some(value.into());
        self
    }

    pub fn page<T: Into<SmolStr>>(mut self, value: T) -> Self {
        self.page = Some(value.into());
        self
    }

    pub fn ellipsis<T: Into<SmolStr>>(mut self, value: T) -> Self {
        self.ellipsis = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_none()
            && self.current.is_none()
            && self.disabled.is_none()
            && self.page.is_none()
            && self.ellipsis.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_only_touches_given_fragments() {
        let mut template = Template::default();
        template.merge(&TemplateOverrides::new().ellipsis("X"));

        assert_eq!("X", template.ellipsis.as_str());
        assert_eq!(DEFAULT_CONTAINER, template.container.as_str());
        assert_eq!(DEFAULT_CURRENT, template.current.as_str());
        assert_eq!(DEFAULT_DISABLED, template.disabled.as_str());
        assert_eq!(DEFAULT_PAGE, template.page.as_str());
    }

    #[test]
    fn test_merge_keeps_prior_overrides() {
        let mut template = Template::default();
        template.merge(&TemplateOverrides::new().container("<nav>{{pages}}</nav>"));
        template.merge(&TemplateOverrides::new().page("<a href=\"{{url}}\">{{page}}</a>"));

        assert_eq!("<nav>{{pages}}</nav>", template.container.as_str());
        assert_eq!("<a href=\"{{url}}\">{{page}}</a>", template.page.as_str());
        assert_eq!(DEFAULT_ELLIPSIS, template.ellipsis.as_str());
    }

    #[test]
    fn test_empty_overrides() {
        assert!(TemplateOverrides::new().is_empty());
        assert!(!TemplateOverrides::new().current("c").is_empty());

        let mut template = Template::default();
        template.merge(&TemplateOverrides::new());
        assert_eq!(Template::default(), template);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_overrides_from_json() {
        let overrides: TemplateOverrides =
            serde_json::from_str(r#"{ "ellipsis": "&hellip;" }"#).unwrap();
        assert_eq!(Some(SmolStr::new_static("&hellip;")), overrides.ellipsis);
        assert!(overrides.container.is_none());
    }
}
