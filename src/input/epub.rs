use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Load text from an EPUB file using the epub crate.
///
/// Chapters are stripped of markup and joined with blank lines.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut doc = epub::doc::EpubDoc::new(path).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();
    if num_chapters == 0 {
        return Err(LoadError::EpubParse("No chapters found in EPUB".to_string()));
    }

    let mut content = String::new();
    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            continue;
        }

        if let Some((chapter_content, _mime)) = doc.get_current_str() {
            let plain_text = extract_plain_text(&chapter_content);
            if plain_text.is_empty() {
                continue;
            }
            if !content.is_empty() {
                content.push_str("\n\n");
            }
            content.push_str(&plain_text);
        }
    }

    if content.is_empty() {
        return Err(LoadError::EmptyDocument(path.display().to_string()));
    }

    tracing::debug!(chapters = num_chapters, chars = content.len(), "extracted epub text");
    Ok(LoadedDocument::from_path(content, "epub", path))
}

/// Longest entity body we try to decode, e.g. `#x1F600` or `hellip`.
const MAX_ENTITY_LEN: usize = 10;

const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", ' '),
    ("lsquo", '\u{2018}'),
    ("rsquo", '\u{2019}'),
    ("ldquo", '\u{201c}'),
    ("rdquo", '\u{201d}'),
    ("ndash", '\u{2013}'),
    ("mdash", '\u{2014}'),
    ("hellip", '\u{2026}'),
];

/// Drop tags, decode entities and drop blank lines from chapter HTML.
fn extract_plain_text(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    decode_entities(&result)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace `&name;`, `&#N;` and `&#xN;` references; unknown ones are kept as is.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let decoded = tail
            .find(';')
            .filter(|&end| end <= MAX_ENTITY_LEN + 1)
            .and_then(|end| decode_entity(&tail[1..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse().ok()?,
        };
        return char::from_u32(code);
    }

    NAMED_ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|&(_, c)| c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epub_load_nonexistent_file() {
        let result = load("/nonexistent/path/book.epub");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_extract_plain_text() {
        let html = "<html><body><p>Hello World</p></body></html>";
        let result = extract_plain_text(html);
        assert_eq!(result, "Hello World");
    }

    #[test]
    fn test_extract_plain_text_drops_blank_lines() {
        let html = "<h1>Title</h1>\n\n   \n<p>  Body text  </p>";
        assert_eq!(extract_plain_text(html), "Title\nBody text");
    }

    #[test]
    fn test_extract_plain_text_markup_only() {
        assert_eq!(extract_plain_text("<div><br/></div>"), "");
    }

    #[test]
    fn test_extract_plain_text_decodes_entities() {
        let html = "<p>I don&#8217;t love it &amp; more</p>";
        assert_eq!(extract_plain_text(html), "I don\u{2019}t love it & more");
    }

    #[test]
    fn test_decoded_contraction_negates_sentiment() {
        let text = extract_plain_text("<p>I don&#8217;t love it &amp; more</p>");
        let result = crate::engine::sentiment(&text);
        assert_eq!(result.positive, 0);
        assert!(result.negative > 0);
    }

    #[test]
    fn test_decode_entities_numeric_and_named() {
        assert_eq!(decode_entities("it&#x2019;s"), "it\u{2019}s");
        assert_eq!(decode_entities("it&#X2019;s"), "it\u{2019}s");
        assert_eq!(decode_entities("&lt;b&gt; &quot;hi&quot; &apos;x&apos;"), "<b> \"hi\" 'x'");
        assert_eq!(decode_entities("a&nbsp;b"), "a b");
    }

    #[test]
    fn test_decode_entities_leaves_unknown_and_bare_ampersands() {
        assert_eq!(decode_entities("salt & pepper"), "salt & pepper");
        assert_eq!(decode_entities("&bogus; &#xZZ;"), "&bogus; &#xZZ;");
        assert_eq!(decode_entities("&#1114112;"), "&#1114112;");
        assert_eq!(decode_entities("trailing &"), "trailing &");
    }

    #[test]
    fn test_entity_markup_is_not_treated_as_tag() {
        assert_eq!(extract_plain_text("<p>1 &lt; 2</p>"), "1 < 2");
    }
}
