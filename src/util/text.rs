use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

/// Truncate to at most `max_cells` terminal cells, ending with `…` when cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = grapheme_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme after `offset`, or None at the end.
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset >= s.len() {
        return None;
    }
    let step = s[offset..]
        .graphemes(true)
        .next()
        .map_or(s.len() - offset, str::len);
    Some(offset + step)
}

/// Byte offset of the grapheme before `offset`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset == 0 {
        return None;
    }
    s[..offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Start of the previous whitespace-delimited word, for word deletion.
pub fn word_start_before(s: &str, offset: usize) -> usize {
    let prefix = &s[..offset.min(s.len())];
    let trimmed = prefix.trim_end_matches(|c: char| c.is_whitespace() && c != '\n');
    trimmed
        .rfind(char::is_whitespace)
        .map_or(0, |i| i + trimmed[i..].chars().next().map_or(1, char::len_utf8))
}

/// Display column of `offset` within `s`
pub fn offset_to_col(s: &str, offset: usize) -> usize {
    display_width(&s[..offset.min(s.len())])
}

/// Byte offset closest to display column `col`, snapping left inside wide
/// graphemes and clamping to the end.
pub fn col_to_offset(s: &str, col: usize) -> usize {
    let mut width = 0;
    for (i, g) in s.grapheme_indices(true) {
        let gw = grapheme_width(g);
        if width + gw > col {
            return i;
        }
        width += gw;
    }
    s.len()
}

fn grapheme_width(g: &str) -> usize {
    if g == "\t" {
        4
    } else {
        UnicodeWidthStr::width(g)
    }
}
