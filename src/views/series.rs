//! Series views - lista e form delle serie

use super::{escape_html, layout};
use crate::entities::Series;
use axum::response::Html;

/// Pagina `GET /series`: messaggi flash + elenco con link di modifica e pulsante di cancellazione
pub fn series_index(series_list: &[Series], flashes: &[String]) -> Html<String> {
    let mut body = String::new();

    for message in flashes {
        body.push_str(&format!(
            "        <div class=\"alert alert-success\">{}</div>\n",
            escape_html(message)
        ));
    }

    body.push_str("        <a href=\"/series/create\">Adicionar</a>\n");
    body.push_str("        <ul class=\"series-list\">\n");
    for series in series_list {
        // solo le serie persistite hanno un id da linkare
        let Some(id) = series.id() else { continue };
        body.push_str(&format!(
            concat!(
                "            <li>\n",
                "                <span class=\"series-name\">{name}</span>\n",
                "                <a href=\"/series/edit/{id}\">Editar</a>\n",
                "                <form method=\"post\" action=\"/series/delete/{id}?_method=DELETE\">\n",
                "                    <button type=\"submit\">Excluir</button>\n",
                "                </form>\n",
                "            </li>\n",
            ),
            name = escape_html(series.name()),
            id = id,
        ));
    }
    body.push_str("        </ul>\n");

    Html(layout("Listagem de séries", &body))
}

/// Form di creazione (`series = None`) o di modifica di una serie esistente
pub fn series_form(series: Option<&Series>) -> Html<String> {
    let (title, action, name) = match series.and_then(|s| s.id().map(|id| (id, s.name()))) {
        Some((id, name)) => (
            "Editar série",
            format!("/series/edit/{}?_method=PATCH", id),
            name,
        ),
        None => ("Nova série", "/series/create".to_string(), ""),
    };

    let body = format!(
        concat!(
            "        <form method=\"post\" action=\"{action}\">\n",
            "            <label for=\"name\">Nome:</label>\n",
            "            <input type=\"text\" id=\"name\" name=\"name\" value=\"{name}\">\n",
            "            <button type=\"submit\">Salvar</button>\n",
            "        </form>\n",
            "        <a href=\"/series\">Voltar</a>\n",
        ),
        action = action,
        name = escape_html(name),
    );

    Html(layout(title, &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted(id: i32, name: &str) -> Series {
        let mut series = Series::new(name);
        series.assign_id(id);
        series
    }

    #[test]
    fn test_index_lists_series_and_flash() {
        let list = vec![persisted(1, "Breaking Bad"), persisted(2, "<script>")];
        let flashes = vec!["Série \"Breaking Bad\" incluída com sucesso.".to_string()];
        let Html(page) = series_index(&list, &flashes);

        assert!(page.contains("Série &quot;Breaking Bad&quot; incluída com sucesso."));
        assert!(page.contains("<span class=\"series-name\">Breaking Bad</span>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("/series/edit/2"));
        assert!(page.contains("/series/delete/1?_method=DELETE"));
    }

    #[test]
    fn test_index_renders_every_flash() {
        let flashes = vec!["primo".to_string(), "secondo".to_string()];
        let Html(page) = series_index(&[], &flashes);
        assert_eq!(page.matches("alert alert-success").count(), 2);
        assert!(page.find("primo").unwrap() < page.find("secondo").unwrap());
    }

    #[test]
    fn test_index_without_flash() {
        let Html(page) = series_index(&[], &[]);
        assert!(!page.contains("alert"));
        assert!(!page.contains("<li>"));
    }

    #[test]
    fn test_create_form_is_empty() {
        let Html(page) = series_form(None);
        assert!(page.contains("action=\"/series/create\""));
        assert!(page.contains("value=\"\""));
    }

    #[test]
    fn test_edit_form_is_prefilled() {
        let series = persisted(4, "The Office");
        let Html(page) = series_form(Some(&series));
        assert!(page.contains("action=\"/series/edit/4?_method=PATCH\""));
        assert!(page.contains("value=\"The Office\""));
    }
}
