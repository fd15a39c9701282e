use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::OnceLock;

/// Returned whenever a page yields no usable lyrics text
pub const LYRICS_UNAVAILABLE: &str = "Lyrics unavailable. View on Genius instead.";

/// Genius marks every block of lyrics with this attribute
const CONTAINER_SELECTOR: &str = r#"div[data-lyrics-container="true"]"#;

/// Blank line between consecutive lyrics blocks
const BLOCK_SEPARATOR: &str = "\n\n";

static CONTAINER: OnceLock<Selector> = OnceLock::new();
static SECTION_MARKER_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_container_selector() -> &'static Selector {
    CONTAINER.get_or_init(|| Selector::parse(CONTAINER_SELECTOR).unwrap())
}

/// First section label that starts the actual song, e.g. `[Intro]` or `[Verse 1: Artist]`
fn get_section_marker_regex() -> &'static Regex {
    SECTION_MARKER_REGEX
        .get_or_init(|| Regex::new(r"(?i)(\[Intro\]|\[Verse.*?\]|\[Chorus\])").unwrap())
}

/// Extract human-readable lyrics from a Genius song page.
///
/// Never fails: pages without lyrics containers, or whose containers hold
/// nothing but markup, produce [`LYRICS_UNAVAILABLE`].
pub fn extract(html: &str) -> String {
    let document = Html::parse_document(html);

    let blocks: Vec<String> = document
        .select(get_container_selector())
        .map(block_text)
        .filter(|text| !text.is_empty())
        .collect();

    tracing::debug!("Found {} non-empty lyrics blocks", blocks.len());

    let joined = blocks.join(BLOCK_SEPARATOR);
    let lyrics = skip_preamble(&joined);

    if lyrics.is_empty() {
        LYRICS_UNAVAILABLE.to_string()
    } else {
        lyrics.to_string()
    }
}

/// Flatten one container into text: `<br>` becomes a newline, every other tag is dropped.
/// Text comes from the parsed tree, so entities arrive decoded.
fn block_text(container: ElementRef) -> String {
    let mut text = String::new();

    for node in container.descendants() {
        match node.value() {
            Node::Text(fragment) => text.push_str(fragment),
            Node::Element(element) if element.name().eq_ignore_ascii_case("br") => {
                text.push('\n')
            }
            _ => {}
        }
    }

    text.trim().to_string()
}

/// Drop anything (contributor counts, translations, song descriptions)
/// before the first section marker
fn skip_preamble(lyrics: &str) -> &str {
    match get_section_marker_regex().find(lyrics) {
        Some(marker) => lyrics[marker.start()..].trim(),
        None => lyrics.trim(),
    }
}
