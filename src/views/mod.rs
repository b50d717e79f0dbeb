//! Views module - Rendering HTML lato server
//!
//! Le pagine sono costruite con `format!`: ogni testo proveniente dall'utente
//! passa da `escape_html` prima di finire nel markup.

pub mod series;

pub use series::{series_form, series_index};

/// Escape dei caratteri speciali HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Scheletro comune a tutte le pagine
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - Controle de Séries</title>
</head>
<body>
    <main class="container">
        <h1>{title}</h1>
{body}
    </main>
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
    )
}
