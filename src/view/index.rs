use maud::{Markup, html};

/// Page shell shared by the entry page and the export preview.
#[must_use]
pub fn render_page(title: &str, body: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="/static/styles.css";
            title { (title) }
        }
        body {
            h1 { (title) }
            (body)
        }
    }
}
