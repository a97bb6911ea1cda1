//! Comment board.
//!
//! Comments exist only as rendered blocks. Sorting re-reads the displayed
//! timestamp label (`"Timestamp: 10/19/2026, 03:04:05 PM"`), splitting it on
//! `": "` and parsing the time back.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Local, NaiveDateTime};

use crate::config::{COMMENT_TIMESTAMP_FORMAT, COMMENT_TIMESTAMP_PREFIX};

/// The name and comment inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommentForm {
    pub name: String,
    pub text: String,
}

impl CommentForm {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Submit is enabled only when both fields are non-blank.
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && !self.text.trim().is_empty()
    }

    fn clear(&mut self) {
        self.name.clear();
        self.text.clear();
    }
}

/// One rendered comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    pub author: String,
    pub text: String,
    pub timestamp_label: String,
}

impl CommentBlock {
    pub fn new(author: &str, text: &str, created_at: NaiveDateTime) -> Self {
        Self {
            author: author.to_string(),
            text: text.to_string(),
            timestamp_label: format!(
                "{}: {}",
                COMMENT_TIMESTAMP_PREFIX,
                created_at.format(COMMENT_TIMESTAMP_FORMAT)
            ),
        }
    }

    /// The time shown in the label, or `None` if the label does not parse.
    pub fn displayed_time(&self) -> Option<NaiveDateTime> {
        let shown = self.timestamp_label.split(": ").nth(1)?;
        NaiveDateTime::parse_from_str(shown, COMMENT_TIMESTAMP_FORMAT).ok()
    }
}

impl fmt::Display for CommentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text)?;
        writeln!(f, "  {}", self.author)?;
        write!(f, "  {}", self.timestamp_label)
    }
}

/// Sort selector. `Unsorted` is the neutral option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Unsorted,
    Ascending,
    Descending,
}

/// Submitted comments in display order.
#[derive(Debug, Default, Clone)]
pub struct CommentBoard {
    blocks: Vec<CommentBlock>,
}

impl CommentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[CommentBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Appends the form's comment stamped with the current local time and
    /// clears the form. Does nothing and returns `false` while submit is
    /// disabled.
    pub fn submit(&mut self, form: &mut CommentForm) -> bool {
        self.submit_at(form, Local::now().naive_local())
    }

    /// [`submit`](Self::submit) with an explicit creation time.
    pub fn submit_at(&mut self, form: &mut CommentForm, created_at: NaiveDateTime) -> bool {
        if !form.can_submit() {
            return false;
        }
        self.blocks.push(CommentBlock::new(
            form.name.trim(),
            form.text.trim(),
            created_at,
        ));
        form.clear();
        true
    }

    /// Reorders the blocks by displayed time. Stable; blocks whose label does
    /// not parse go last in either direction.
    pub fn sort(&mut self, order: SortOrder) {
        let descending = match order {
            SortOrder::Unsorted => return,
            SortOrder::Ascending => false,
            SortOrder::Descending => true,
        };
        self.blocks.sort_by(|a, b| {
            match (a.displayed_time(), b.displayed_time()) {
                (Some(x), Some(y)) if descending => y.cmp(&x),
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn authors(board: &CommentBoard) -> Vec<&str> {
        board.blocks().iter().map(|b| b.author.as_str()).collect()
    }

    #[test]
    fn test_submit_requires_both_fields() {
        assert!(!CommentForm::new("", "hello").can_submit());
        assert!(!CommentForm::new("Ana", "   ").can_submit());
        assert!(CommentForm::new(" Ana ", " hello ").can_submit());

        let mut board = CommentBoard::new();
        let mut form = CommentForm::new("Ana", " ");
        assert!(!board.submit(&mut form));
        assert!(board.is_empty());
        assert_eq!(form.name, "Ana");
    }

    #[test]
    fn test_submit_trims_appends_and_clears() {
        let mut board = CommentBoard::new();
        let mut form = CommentForm::new("  Ana ", " first! ");
        assert!(board.submit_at(&mut form, at(15, 4)));
        assert_eq!(form, CommentForm::default());

        let block = &board.blocks()[0];
        assert_eq!(block.author, "Ana");
        assert_eq!(block.text, "first!");
        assert_eq!(block.timestamp_label, "Timestamp: 10/19/2026, 03:04:00 PM");
        assert_eq!(block.displayed_time(), Some(at(15, 4)));
    }

    #[test]
    fn test_sort_by_displayed_time() {
        let mut board = CommentBoard::new();
        for (name, time) in [("t2", at(12, 0)), ("t1", at(9, 30)), ("t3", at(18, 45))] {
            board.submit_at(&mut CommentForm::new(name, "text"), time);
        }

        board.sort(SortOrder::Unsorted);
        assert_eq!(authors(&board), vec!["t2", "t1", "t3"]);

        board.sort(SortOrder::Ascending);
        assert_eq!(authors(&board), vec!["t1", "t2", "t3"]);

        board.sort(SortOrder::Descending);
        assert_eq!(authors(&board), vec!["t3", "t2", "t1"]);

        board.sort(SortOrder::Unsorted);
        assert_eq!(authors(&board), vec!["t3", "t2", "t1"]);
    }

    #[test]
    fn test_sort_is_stable_and_puts_unparseable_last() {
        let mut board = CommentBoard::new();
        board.submit_at(&mut CommentForm::new("a", "x"), at(10, 0));
        board.submit_at(&mut CommentForm::new("b", "x"), at(10, 0));
        board.submit_at(&mut CommentForm::new("c", "x"), at(8, 0));
        board.blocks.insert(
            0,
            CommentBlock {
                author: "broken".into(),
                text: "x".into(),
                timestamp_label: "Timestamp: yesterday".into(),
            },
        );

        board.sort(SortOrder::Ascending);
        assert_eq!(authors(&board), vec!["c", "a", "b", "broken"]);

        board.sort(SortOrder::Descending);
        assert_eq!(authors(&board), vec!["a", "b", "c", "broken"]);
    }
}
