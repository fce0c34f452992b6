use std::fmt::{self, Write};

use crate::{
    paginator::Paginator,
    window::PageSlot,
    writer::{FormatContext, FormatWriter, Placeholder},
};

/// Label and target of one of the first/previous/next/last controls.
struct Control<'a> {
    label: &'a str,
    url: Option<String>,
}

impl FormatWriter for Control<'_> {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        let template = context.template;
        match self.url {
            Some(ref url) => context.write_fragment(&template.page, |ctx, placeholder| match placeholder {
                Placeholder::Page => ctx.write_escaped(self.label),
                Placeholder::Url => ctx.write_escaped(url),
                Placeholder::Pages => ctx.writer.write_str(placeholder.literal()),
            }),
            None => context.write_fragment(&template.disabled, |ctx, placeholder| match placeholder {
                Placeholder::Page => ctx.write_escaped(self.label),
                _ => ctx.writer.write_str(placeholder.literal()),
            }),
        }
    }
}

impl FormatWriter for PageSlot {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        let template = context.template;
        match self {
            PageSlot::Page(page) => {
                let fragment = if page.is_current() {
                    &template.current
                } else {
                    &template.page
                };
                context.write_fragment(fragment, |ctx, placeholder| match placeholder {
                    Placeholder::Page => ctx.write_number(page.number()),
                    Placeholder::Url => ctx.write_escaped(page.url()),
                    Placeholder::Pages => ctx.writer.write_str(placeholder.literal()),
                })
            }
            // the ellipsis fragment is template markup, written as is
            PageSlot::Ellipsis => context.write_fragment(&template.disabled, |ctx, placeholder| match placeholder {
                Placeholder::Page => ctx.writer.write_str(&template.ellipsis),
                _ => ctx.writer.write_str(placeholder.literal()),
            }),
        }
    }
}

impl Paginator {
    fn control<'a>(&'a self, show: bool, label: &'a str, target: Option<i64>) -> Option<Control<'a>> {
        show.then(|| Control {
            label,
            url: target.map(|page| self.page_url(page)),
        })
    }

    fn write_items<W: Write>(&self, context: &mut FormatContext<'_, W>, slots: &[PageSlot]) -> fmt::Result {
        let first = self.control(self.show_first_page(), self.first_text(), self.first_page());
        let previous = self.control(self.show_previous_page(), self.previous_text(), self.previous_page());
        let next = self.control(self.show_next_page(), self.next_text(), self.next_page());
        let last = self.control(self.show_last_page(), self.last_text(), self.last_page());

        for control in first.iter().chain(previous.iter()) {
            control.format_writer(context)?;
        }
        for slot in slots {
            slot.format_writer(context)?;
        }
        for control in next.iter().chain(last.iter()) {
            control.format_writer(context)?;
        }
        Ok(())
    }

    /// Writes the same markup as [`Paginator::render`] into `writer`.
    pub fn render_to<W: Write>(&self, writer: &mut W) -> fmt::Result {
        let mut context = FormatContext::new(writer, self.template());
        self.format_writer(&mut context)
    }

    /// Renders the controls and page slots into the container fragment.
    /// A paginator with at most one page renders nothing.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl FormatWriter for Paginator {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        if self.num_pages() <= 1 {
            return Ok(());
        }
        let slots = self.pages();
        tracing::trace!(
            num_pages = self.num_pages(),
            slots = slots.len(),
            "rendering paginator"
        );

        let template = context.template;
        context.write_fragment(&template.container, |ctx, placeholder| match placeholder {
            Placeholder::Pages => self.write_items(ctx, &slots),
            _ => ctx.writer.write_str(placeholder.literal()),
        })
    }
}

impl fmt::Display for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_to(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Paginator, TemplateOverrides, tests::paginator};

    fn minimal(p: &mut Paginator) -> &mut Paginator {
        p.set_template(
            &TemplateOverrides::new()
                .container("[{{pages}}]")
                .current("<{{page}}>")
                .disabled("({{page}})")
                .page("{{page}}@{{url}} ")
                .ellipsis("~"),
        )
        .set_url_pattern("/{:page}")
        .set_first_text("F")
        .set_previous_text("P")
        .set_next_text("N")
        .set_last_text("L")
    }

    #[test]
    fn test_single_or_no_page_renders_nothing() {
        assert_eq!("", paginator(0, 10, 1).render());
        assert_eq!("", paginator(10, 10, 1).render());
        assert_eq!("", paginator(10, 0, 1).render());
        assert_eq!("", paginator(10, 10, 1).to_string());
    }

    #[test]
    fn test_render_default_template_first_page() {
        let p = Paginator::new(20, 5, 1, "example.html?page={:page}");
        let expected = concat!(
            r#"<ul class="pagination justify-content-center">"#,
            r#"<li class="page-item disabled"><span class="page-link">İlk</span></li>"#,
            r#"<li class="page-item disabled"><span class="page-link">Önceki</span></li>"#,
            r#"<li class="page-item active"><span class="page-link">1</span></li>"#,
            r#"<li class="page-item"><a class="page-link" href="example.html?page=2">2</a></li>"#,
            r#"<li class="page-item"><a class="page-link" href="example.html?page=3">3</a></li>"#,
            r#"<li class="page-item"><a class="page-link" href="example.html?page=4">4</a></li>"#,
            r#"<li class="page-item"><a class="page-link" href="example.html?page=2">Sonraki</a></li>"#,
            r#"<li class="page-item"><a class="page-link" href="example.html?page=4">Son</a></li>"#,
            r#"</ul>"#,
        );
        assert_eq!(expected, p.render());
    }

    #[test]
    fn test_render_with_ellipsis() {
        let mut p = paginator(1000, 10, 50);
        minimal(&mut p);
        assert_eq!(
            "[F@/1 P@/49 1@/1 (~)47@/47 48@/48 49@/49 <50>51@/51 52@/52 53@/53 54@/54 (~)100@/100 N@/51 L@/100 ]",
            p.render()
        );
    }

    #[test]
    fn test_render_last_page() {
        let mut p = paginator(30, 10, 3);
        minimal(&mut p);
        assert_eq!("[F@/1 P@/2 1@/1 2@/2 <3>(N)(L)]", p.render());
    }

    #[test]
    fn test_hidden_controls() {
        let mut p = paginator(30, 10, 2);
        minimal(&mut p)
            .set_show_first_page(false)
            .set_show_last_page(false)
            .set_show_previous_page(false)
            .set_show_next_page(false);
        assert_eq!("[1@/1 <2>3@/3 ]", p.render());
    }

    #[test]
    fn test_render_escapes_urls_and_labels() {
        let mut p = paginator(30, 10, 2);
        minimal(&mut p)
            .set_url_pattern("?a=1&p={:page}")
            .set_next_text("<b>Next</b>")
            .set_show_first_page(false)
            .set_show_previous_page(false)
            .set_show_last_page(false);
        assert_eq!(
            "[1@?a=1&amp;p=1 <2>3@?a=1&amp;p=3 &lt;b&gt;Next&lt;/b&gt;@?a=1&amp;p=3 ]",
            p.render()
        );
    }

    #[test]
    fn test_render_disabled_keeps_url_placeholder() {
        let mut p = paginator(30, 10, 1);
        minimal(&mut p)
            .set_template(&TemplateOverrides::new().disabled("({{page}}|{{url}})"))
            .set_show_previous_page(false)
            .set_show_next_page(false)
            .set_show_last_page(false);
        assert_eq!("[(F|{{url}})<1>2@/2 3@/3 ]", p.render());
    }

    #[test]
    fn test_render_out_of_range_current_page() {
        let mut p = paginator(30, 10, 0);
        minimal(&mut p);
        // page 0 is a valid navigation target, no slot is current
        assert_eq!("[(F)(P)1@/1 2@/2 3@/3 N@/1 L@/3 ]", p.render());
    }

    #[test]
    fn test_render_on_last_of_max_pages() {
        let mut p = paginator(i64::MAX, 1, i64::MAX);
        minimal(&mut p).set_max_pages_to_show(3).unwrap();
        let last = i64::MAX;
        assert_eq!(
            format!("[F@/1 P@/{} 1@/1 (~)<{}>(N)(L)]", last - 1, last),
            p.render()
        );
    }

    #[test]
    fn test_render_is_idempotent_and_matches_display() {
        let p = paginator(1000, 10, 50);
        let first = p.render();
        assert_eq!(first, p.render());
        assert_eq!(first, format!("{}", p));

        let mut out = String::new();
        p.render_to(&mut out).unwrap();
        assert_eq!(first, out);
    }
}
