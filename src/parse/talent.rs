//! Talent extraction.
//!
//! A talent block is narrative paragraphs plus one bullet list describing the
//! talent's ranks. Everything goes into the description; the remaining
//! fields are constants of the forbidden-lands system.

use std::sync::LazyLock;

use regex::Regex;

use super::segment::ItemBlock;
use crate::config::ConvertConfig;
use crate::dom::{MarkupTree, SerializeFilter, escape_text, inner_html};
use crate::record::TalentSystem;

/// Uppercased forms of the comment marker: literal, entity-escaped and
/// unaccented.
const COMMENT_MARKERS: &[&str] = &["COMENTÁRIO", "COMENT&AACUTE;RIO", "COMENTARIO"];

static COMMENT_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^coment(?:á|&aacute;|a)rio:?").expect("comment label regex is valid")
});

/// Build the talent fields for the block that starts at `heading`.
pub fn extract<T: MarkupTree>(tree: &T, heading: T::Node, config: &ConvertConfig) -> TalentSystem {
    let skip = [config.marker_tag.as_str()];
    let filter = SerializeFilter::new()
        .skip_elements(&skip)
        .drop_attributes(&["style"]);

    let mut description = String::new();

    for node in ItemBlock::new(tree, heading, &config.heading_tag) {
        if tree.has_tag(node, "p") {
            let text = tree.text_content(node);
            description.push_str(&paragraph(text.trim()));
        } else if tree.has_tag(node, "ul") {
            description.push_str("<ul>");
            for li in tree.descendants_by_tag(node, "li") {
                let cleaned = inner_html(tree, li, &filter);
                description.push_str("<li>");
                description.push_str(cleaned.trim());
                description.push_str("</li>");
            }
            description.push_str("</ul>");
        } else {
            log::trace!("talent: skipping <{}>", tree.tag_name(node).unwrap_or_default());
        }
    }

    TalentSystem::new(description)
}

/// Render one paragraph's text, giving designer comments a bold label.
fn paragraph(text: &str) -> String {
    let upper = text.to_uppercase();
    if COMMENT_MARKERS.iter().any(|marker| upper.contains(marker)) {
        let rest = COMMENT_LABEL.replace(text, "");
        return format!(
            "<p><strong>COMENTÁRIO:</strong> {}</p>",
            escape_text(rest.trim())
        );
    }

    if text.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", escape_text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn describe(html: &str) -> String {
        let dom = parse_html(html);
        let heading = dom.descendants_by_tag(dom.root(), "h3")[0];
        extract(&dom, heading, &ConvertConfig::default()).description
    }

    #[test]
    fn test_comment_label_not_duplicated() {
        assert_eq!(
            paragraph("COMENTÁRIO: texto extra"),
            "<p><strong>COMENTÁRIO:</strong> texto extra</p>"
        );
    }

    #[test]
    fn test_comment_label_variants() {
        let expected = "<p><strong>COMENTÁRIO:</strong> ok</p>";
        assert_eq!(paragraph("comentário: ok"), expected);
        assert_eq!(paragraph("COMENT&Aacute;RIO: ok"), expected);
        assert_eq!(paragraph("Comentario ok"), expected);
    }

    #[test]
    fn test_comment_marker_mid_text_keeps_text() {
        assert_eq!(
            paragraph("Veja o comentário abaixo"),
            "<p><strong>COMENTÁRIO:</strong> Veja o comentário abaixo</p>"
        );
    }

    #[test]
    fn test_plain_paragraph_is_escaped() {
        assert_eq!(paragraph("Força < 3 & Agilidade"), "<p>Força &lt; 3 &amp; Agilidade</p>");
        assert_eq!(paragraph(""), "");
    }

    #[test]
    fn test_entity_comment_in_markup() {
        let html = "<h3>CAMINHO DA FERA</h3>\
                    <p><strong>COMENT&Aacute;RIO:</strong> Um lobo é um bom amigo.</p>";
        assert_eq!(
            describe(html),
            "<p><strong>COMENTÁRIO:</strong> Um lobo é um bom amigo.</p>"
        );
    }

    #[test]
    fn test_list_items_lose_markers_and_styles() {
        let html = r#"<h3>CAMINHO DA FERA</h3>
            <ul style="list-style: none">
              <li style="margin: 0"><span style="color: #8b0000">✥</span> <strong style="font-variant: small-caps">CATEGORIA 1:</strong> Você ganha um companheiro.</li>
              <li><span>✥</span> <strong>CATEGORIA 2:</strong> Ele luta ao seu lado.</li>
            </ul>"#;
        assert_eq!(
            describe(html),
            "<ul><li><strong>CATEGORIA 1:</strong> Você ganha um companheiro.</li>\
             <li><strong>CATEGORIA 2:</strong> Ele luta ao seu lado.</li></ul>"
        );
    }

    #[test]
    fn test_blank_paragraphs_and_other_nodes_skipped() {
        let html = "<h3>A</h3><p>  </p><div>ignorado</div><p>Primeiro</p><table><tr><td>x</td></tr></table>";
        assert_eq!(describe(html), "<p>Primeiro</p>");
    }

    #[test]
    fn test_walk_stops_at_next_talent() {
        let html = "<h3>A</h3><p>de A</p><h3>B</h3><p>de B</p>";
        assert_eq!(describe(html), "<p>de A</p>");
    }
}
