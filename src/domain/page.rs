use super::Assessment;

/// One window over the assessment collection, most-recently-created-first.
/// Pages are 1-indexed.
#[derive(Debug, Clone)]
pub struct AssessmentPage {
    pub assessments: Vec<Assessment>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_assessments: usize,
}

impl AssessmentPage {
    /// Next page number, or `None` when already on the last page.
    pub fn next_page(&self) -> Option<usize> {
        if self.current_page < self.total_pages {
            Some(self.current_page + 1)
        } else {
            None
        }
    }

    /// Previous page number, or `None` when already on the first page.
    pub fn prev_page(&self) -> Option<usize> {
        if self.current_page > 1 {
            Some(self.current_page - 1)
        } else {
            None
        }
    }
}
