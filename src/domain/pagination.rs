//! 1-based page windows over id-ordered question lists.

/// A requested page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: i64,
    size: i64,
}

impl Page {
    pub fn new(number: i64, size: i64) -> Self {
        Page {
            number,
            size: size.max(1),
        }
    }

    /// Parse the `page` query value. Missing or non-integer values mean page 1.
    pub fn from_query(raw: Option<&str>, size: i64) -> Self {
        let number = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Page::new(number, size)
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// Row offset of this page, or `None` when the page number can never hold rows.
    pub fn offset(&self) -> Option<i64> {
        if self.number < 1 {
            return None;
        }
        (self.number - 1).checked_mul(self.size)
    }
}
