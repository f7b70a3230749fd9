use crate::util::text::{
    col_to_offset, next_grapheme_boundary, offset_to_col, prev_grapheme_boundary,
    word_start_before,
};

/// An editable text value with a byte-offset cursor that always sits on a
/// grapheme boundary. Single-line fields turn pasted newlines into spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
    multiline: bool,
}

impl TextField {
    pub fn single_line() -> Self {
        TextField::default()
    }

    pub fn multiline() -> Self {
        TextField {
            multiline: true,
            ..Default::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the content and put the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.text = self.clean(text);
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        let s = self.clean(s);
        self.text.insert_str(self.cursor, &s);
        self.cursor += s.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    /// Delete back to the start of the previous word
    pub fn delete_word(&mut self) {
        let start = word_start_before(&self.text, self.cursor);
        if start == self.cursor {
            self.backspace();
        } else {
            self.text.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    /// Move to the previous line at the same display column. Returns false
    /// when already on the first line.
    pub fn move_up(&mut self) -> bool {
        let start = self.line_start(self.cursor);
        if start == 0 {
            return false;
        }
        let col = offset_to_col(&self.text[start..], self.cursor - start);
        let prev_start = self.line_start(start - 1);
        let prev_line = &self.text[prev_start..start - 1];
        self.cursor = prev_start + col_to_offset(prev_line, col);
        true
    }

    /// Move to the next line at the same display column. Returns false when
    /// already on the last line.
    pub fn move_down(&mut self) -> bool {
        let end = self.line_end(self.cursor);
        if end >= self.text.len() {
            return false;
        }
        let start = self.line_start(self.cursor);
        let col = offset_to_col(&self.text[start..], self.cursor - start);
        let next_start = end + 1;
        let next_end = self.line_end(next_start);
        self.cursor = next_start + col_to_offset(&self.text[next_start..next_end], col);
        true
    }

    /// (line index, display column) of the cursor
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let start = self.line_start(self.cursor);
        (line, offset_to_col(&self.text[start..], self.cursor - start))
    }

    /// Content split into lines; always at least one (possibly empty) line
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }

    fn line_start(&self, offset: usize) -> usize {
        self.text[..offset].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, offset: usize) -> usize {
        self.text[offset..]
            .find('\n')
            .map_or(self.text.len(), |i| offset + i)
    }

    fn clean(&self, s: &str) -> String {
        let s = s.replace("\r\n", "\n").replace('\r', "\n");
        if self.multiline {
            s
        } else {
            s.replace('\n', " ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str) -> TextField {
        let mut f = TextField::multiline();
        f.set_text(text);
        f
    }

    #[test]
    fn typing_and_backspace() {
        let mut f = TextField::single_line();
        for c in "milk".chars() {
            f.insert_char(c);
        }
        f.backspace();
        assert_eq!(f.text(), "mil");
        assert_eq!(f.cursor(), 3);
    }

    #[test]
    fn single_line_rejects_newlines() {
        let mut f = TextField::single_line();
        f.insert_char('a');
        f.insert_char('\n');
        f.insert_str("b\nc");
        assert_eq!(f.text(), "ab c");
    }

    #[test]
    fn multiline_keeps_newlines_and_normalizes_cr() {
        let mut f = TextField::multiline();
        f.insert_str("a\r\nb");
        f.insert_char('\n');
        assert_eq!(f.text(), "a\nb\n");
    }

    #[test]
    fn cursor_moves_over_graphemes() {
        let mut f = TextField::single_line();
        f.set_text("a🎉b");
        f.move_left();
        assert_eq!(f.cursor(), 5);
        f.move_left();
        assert_eq!(f.cursor(), 1);
        f.delete();
        assert_eq!(f.text(), "ab");
        f.move_home();
        assert_eq!(f.cursor(), 0);
        f.move_left();
        assert_eq!(f.cursor(), 0);
        f.move_end();
        assert_eq!(f.cursor(), 2);
        f.move_right();
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn delete_word_back() {
        let mut f = field("buy some milk");
        f.delete_word();
        assert_eq!(f.text(), "buy some ");
        f.delete_word();
        assert_eq!(f.text(), "buy ");
    }

    #[test]
    fn vertical_movement_keeps_column() {
        let mut f = field("first line\nab\nthird line");
        // cursor at end of "third line" (col 10)
        assert_eq!(f.cursor_line_col(), (2, 10));
        assert!(f.move_up());
        assert_eq!(f.cursor_line_col(), (1, 2));
        assert!(f.move_up());
        assert_eq!(f.cursor_line_col(), (0, 2));
        assert!(!f.move_up());
        assert!(f.move_down());
        assert!(f.move_down());
        assert_eq!(f.cursor_line_col(), (2, 2));
        assert!(!f.move_down());
    }

    #[test]
    fn home_end_are_per_line() {
        let mut f = field("one\ntwo");
        f.move_home();
        assert_eq!(f.cursor(), 4);
        f.move_up();
        f.move_end();
        assert_eq!(f.cursor(), 3);
    }

    #[test]
    fn lines_always_has_one() {
        assert_eq!(TextField::multiline().lines(), vec![""]);
        assert_eq!(field("a\n").lines(), vec!["a", ""]);
    }
}
