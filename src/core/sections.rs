use std::collections::HashMap;

/// Heading markers that open a section in either supported dialect
/// (Markdown `##`, AsciiDoc `==`).
const MARKERS: [&str; 2] = ["##", "=="];

/// Line-oriented scanner for heading-delimited sections of a generated
/// document.
///
/// A heading line is a marker at the start of the line, an optional run of
/// whitespace, and a title of at most two words made of word characters,
/// with nothing else on the line. The body of a section runs until the
/// next heading line or the end of the document. Lines that merely start
/// with a marker but carry a longer "title" are body text: they merge
/// into the section being read.
pub struct SectionExtractor;

impl SectionExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Scan `document` and return a mapping from trimmed section title to
    /// trimmed section body. On duplicate titles the last occurrence wins.
    /// Text before the first heading belongs to no section.
    pub fn extract(&self, document: &str) -> HashMap<String, String> {
        let mut sections = HashMap::new();
        let mut current: Option<(String, Vec<&str>)> = None;

        for line in document.lines() {
            match parse_heading(line) {
                Some(title) => {
                    if let Some((done, body)) = current.take() {
                        sections.insert(done, body.join("\n").trim().to_string());
                    }
                    current = Some((title, Vec::new()));
                }
                None => {
                    if let Some((_, body)) = current.as_mut() {
                        body.push(line);
                    }
                }
            }
        }

        if let Some((done, body)) = current.take() {
            sections.insert(done, body.join("\n").trim().to_string());
        }

        sections
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a single line as a section heading, returning the title.
fn parse_heading(line: &str) -> Option<String> {
    let rest = MARKERS.iter().find_map(|marker| line.strip_prefix(marker))?;
    let words: Vec<&str> = rest.split_whitespace().collect();

    // Titles are at most two words; anything longer is not a boundary.
    if words.is_empty() || words.len() > 2 {
        return None;
    }

    if !words.iter().all(|word| word.chars().all(is_word_char)) {
        return None;
    }

    Some(words.join(" "))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Turn a section title into a file name stem: lower-cased, spaces
/// replaced with underscores, newlines stripped.
pub fn normalize_title(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .replace(' ', "_")
        .replace('\n', "")
}
