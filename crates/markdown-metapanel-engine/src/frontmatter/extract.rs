/// Delimiter line that opens and closes a front-matter block.
pub const DELIMITER: &str = "---";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Lines between the opening and closing delimiters, exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatterBlock<'a> {
    /// Raw lines with their terminators stripped.
    pub lines: Vec<&'a str>,
    /// Byte offset in the document where the body starts (just past the closing
    /// delimiter's line terminator).
    pub body_start: usize,
}

/// One physical line of the document with its byte range.
#[derive(Debug, Clone, Copy)]
struct LineRef<'a> {
    /// Line text without `\n` / `\r\n`.
    text: &'a str,
    /// Offset just past this line's terminator.
    end: usize,
}

fn lines_with_offsets(text: &str, start: usize) -> impl Iterator<Item = LineRef<'_>> {
    let mut offset = start;
    text[start..].split_inclusive('\n').map(move |raw| {
        offset += raw.len();
        LineRef {
            text: raw.trim_end_matches('\n').trim_end_matches('\r'),
            end: offset,
        }
    })
}

/// Locates the front-matter block at the head of `document`.
///
/// Returns `None` when the first line is not a delimiter, when no closing delimiter
/// follows, or when everything between the delimiters is blank or a comment.
pub fn extract_block(document: &str) -> Option<FrontMatterBlock<'_>> {
    let start = if document.starts_with(BYTE_ORDER_MARK) {
        BYTE_ORDER_MARK.len_utf8()
    } else {
        0
    };

    let mut lines = lines_with_offsets(document, start);
    let opening = lines.next()?;
    if opening.text != DELIMITER {
        return None;
    }

    let mut inner: Vec<&str> = Vec::new();
    for line in lines {
        if line.text == DELIMITER {
            if !inner.iter().any(|l| is_meaningful(l)) {
                return None;
            }
            return Some(FrontMatterBlock {
                lines: inner,
                body_start: line.end,
            });
        }
        inner.push(line.text);
    }

    // Unterminated block: never guess where it was meant to end.
    None
}

/// Splits a document into its front-matter block (if any) and body.
///
/// Without a block the body is the whole document, byte for byte.
pub fn split_document(document: &str) -> (Option<FrontMatterBlock<'_>>, &str) {
    match extract_block(document) {
        Some(block) => {
            let body = &document[block.body_start..];
            (Some(block), body)
        }
        None => (None, document),
    }
}

fn is_meaningful(line: &str) -> bool {
    let trimmed = line.trim_start();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}
