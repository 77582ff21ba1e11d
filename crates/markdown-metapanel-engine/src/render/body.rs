use pulldown_cmark::{Event, Options, Parser, html};

/// Renders the document body (everything after the front-matter block) to HTML.
///
/// Raw HTML in the body is demoted to text so it comes out escaped. This is a
/// convenience for the bundled viewer, not a sanitizer: the whole-document
/// sanitizer still runs on the assembled output.
pub fn render_body_html(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(body, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}
