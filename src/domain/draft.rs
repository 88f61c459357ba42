use super::{Language, OutputFormat, QuestionFormat, QuestionTone};

/// Working copy of the assessment request form. Field rules mirror the form:
/// changing the course invalidates any module selection made under the
/// previous course, and module selection deduplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentDraft {
    pub name: String,
    pub batch_name: String,
    pub test_case: String,
    pub question_format: Option<QuestionFormat>,
    pub question_tone: Option<QuestionTone>,
    pub difficulty_level: u8,
    pub output_format: Option<OutputFormat>,
    pub language: Option<Language>,
    pub course_id: String,
    pub selected_modules: Vec<String>,
    pub consolidated_output: bool,
}

impl Default for AssessmentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            batch_name: String::new(),
            test_case: String::new(),
            question_format: None,
            question_tone: None,
            difficulty_level: 5,
            output_format: None,
            language: None,
            course_id: String::new(),
            selected_modules: Vec::new(),
            consolidated_output: false,
        }
    }
}

impl AssessmentDraft {
    /// Selects a course, clearing any modules chosen under the previous one.
    pub fn select_course(&mut self, course_id: impl Into<String>) {
        self.course_id = course_id.into();
        self.selected_modules.clear();
    }

    pub fn add_module(&mut self, module_id: impl Into<String>) {
        let module_id = module_id.into();
        if !self.selected_modules.contains(&module_id) {
            self.selected_modules.push(module_id);
        }
    }

    pub fn remove_module(&mut self, module_id: &str) {
        self.selected_modules.retain(|m| m != module_id);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks required-field presence and the difficulty range. Every missing
    /// field is reported, not just the first.
    pub fn validate(&self) -> Result<(), DraftError> {
        let mut missing = Vec::new();

        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.batch_name.trim().is_empty() {
            missing.push("batchName");
        }
        if self.test_case.trim().is_empty() {
            missing.push("testCase");
        }
        if self.question_format.is_none() {
            missing.push("questionFormat");
        }
        if self.question_tone.is_none() {
            missing.push("questionTone");
        }
        if self.output_format.is_none() {
            missing.push("outputFormat");
        }
        if self.course_id.trim().is_empty() {
            missing.push("courseId");
        }
        if self.selected_modules.is_empty() {
            missing.push("selectedModules");
        }

        if !missing.is_empty() {
            return Err(DraftError::MissingFields(missing));
        }

        if !(1..=10).contains(&self.difficulty_level) {
            return Err(DraftError::DifficultyOutOfRange(self.difficulty_level));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("difficulty level must be between 1 and 10, got {0}")]
    DifficultyOutOfRange(u8),
}
