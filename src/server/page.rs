//! HTML rendering for the single-page UI.
//!
//! The page is assembled from string fragments; the authored advisory texts
//! are shown verbatim inside preformatted blocks, escaped only where HTML
//! requires it.

/// Escapes the characters HTML assigns meaning to.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
        <html lang=\"en\">\n\
        <head>\n\
        <meta charset=\"utf-8\">\n\
        <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
        <title>Skin Disease Classifier</title>\n\
        <style>\n\
        body {{ font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #222; }}\n\
        h1 {{ font-size: 1.6rem; }}\n\
        form {{ margin: 1.5rem 0; padding: 1rem; border: 1px solid #ccc; border-radius: 6px; }}\n\
        img.upload {{ max-width: 100%; border-radius: 6px; margin: 1rem 0; }}\n\
        .prediction {{ background: #e7f6e7; border: 1px solid #9c9; border-radius: 6px; padding: 0.8rem; }}\n\
        .error {{ background: #fae7e7; border: 1px solid #c99; border-radius: 6px; padding: 0.8rem; }}\n\
        pre.advisory {{ white-space: pre-wrap; background: #f7f7f7; border-radius: 6px; padding: 0.8rem; }}\n\
        </style>\n\
        </head>\n\
        <body>\n\
        <h1>Skin Disease Classifier</h1>\n\
        <p>Upload a skin image to identify possible skin diseases.</p>\n\
        <form method=\"post\" action=\"/\" enctype=\"multipart/form-data\">\n\
        <input type=\"file\" name=\"image\" accept=\"image/jpeg,image/png\" required>\n\
        <button type=\"submit\">Classify</button>\n\
        </form>\n\
        {body}\n\
        </body>\n\
        </html>\n"
    )
}

/// Renders the landing page with the empty upload form.
pub fn render_index() -> String {
    layout("")
}

/// Renders the page with a classification result.
///
/// The description and lab-test blocks are shown exactly as stored.
pub fn render_result(
    image_data_uri: &str,
    label: &str,
    description: &str,
    lab_tests: &str,
) -> String {
    let body = format!(
        "<img class=\"upload\" src=\"{image_data_uri}\" alt=\"Uploaded image\">\n\
        <p class=\"prediction\">Predicted skin disease: <strong>{}</strong></p>\n\
        <h2>Detailed Description and Recommendations</h2>\n\
        <pre class=\"advisory\">{}</pre>\n\
        <h2>Recommended Laboratory Tests</h2>\n\
        <pre class=\"advisory\">{}</pre>",
        escape_html(label),
        escape_html(description),
        escape_html(lab_tests),
    );
    layout(&body)
}

/// Renders the page with an error message instead of a result.
pub fn render_error(message: &str) -> String {
    let body = format!("<p class=\"error\">{}</p>", escape_html(message));
    layout(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<b>&"x"</b>"#),
            "&lt;b&gt;&amp;&quot;x&quot;&lt;/b&gt;"
        );
        // apostrophes pass through so authored text stays unmodified
        assert_eq!(escape_html("Darier's"), "Darier's");
    }

    #[test]
    fn result_page_contains_stored_text_unmodified() {
        let description = knowledge::description_for("Psoriasis");
        let lab_tests = knowledge::lab_tests_for("Psoriasis");
        let page = render_result("data:image/png;base64,AAAA", "Psoriasis", description, lab_tests);

        assert!(page.contains("Psoriasis"));
        assert!(page.contains(description));
        assert!(page.contains(lab_tests));
    }

    #[test]
    fn stored_texts_survive_escaping_for_every_class() {
        // the authored tables avoid HTML metacharacters, so escaping is the
        // identity on them and the rendered output is the stored text
        for entry in knowledge::DISEASES.iter() {
            assert_eq!(escape_html(entry.description), entry.description);
            assert_eq!(escape_html(entry.lab_tests), entry.lab_tests);
        }
    }

    #[test]
    fn index_page_has_the_upload_form() {
        let page = render_index();
        assert!(page.contains("enctype=\"multipart/form-data\""));
        assert!(page.contains("name=\"image\""));
    }

    #[test]
    fn error_page_escapes_the_message() {
        let page = render_error("<script>alert(1)</script>");
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
