//! Plain-text talents.
//!
//! Older copies of the rulebook text come without markup. Talents are then
//! separated by two or more blank lines; the first line is the name and the
//! rest becomes a single paragraph, as-is.

use std::sync::LazyLock;

use regex::Regex;

static BLOCK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").expect("block separator regex is valid"));

/// One talent read from plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainBlock {
    pub name: String,
    pub description: String,
}

/// Split plain text into talent blocks. Blank input yields nothing.
pub fn split_blocks(input: &str) -> Vec<PlainBlock> {
    BLOCK_SEPARATOR
        .split(input)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            let (first, rest) = block.split_once('\n').unwrap_or((block, ""));
            PlainBlock {
                name: first.trim().to_string(),
                description: format!("<p>{rest}</p>"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_blank_lines_separate_blocks() {
        let input = "CAMINHO DA FERA\nVocê tem um animal.\nEle é leal.\n\n\nFÚRIA\nVocê grita.";
        let blocks = split_blocks(input);
        assert_eq!(
            blocks,
            vec![
                PlainBlock {
                    name: "CAMINHO DA FERA".into(),
                    description: "<p>Você tem um animal.\nEle é leal.</p>".into(),
                },
                PlainBlock {
                    name: "FÚRIA".into(),
                    description: "<p>Você grita.</p>".into(),
                },
            ]
        );
    }

    #[test]
    fn test_single_blank_line_stays_in_block() {
        let blocks = split_blocks("A\nlinha um\n\nlinha dois");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].description, "<p>linha um\n\nlinha dois</p>");
    }

    #[test]
    fn test_whitespace_only_separators_and_crlf() {
        let blocks = split_blocks("A\r\ncorpo\r\n  \r\n\t\r\nB\r\n");
        let names: Vec<_> = blocks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(blocks[1].description, "<p></p>");
    }

    #[test]
    fn test_blank_input() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n\n\n   \n\n\n").is_empty());
    }
}
