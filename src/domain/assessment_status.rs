use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssessmentStatus {
    Processing,
    Completed,
    Failed,
}

impl AssessmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentStatus::Processing => "processing",
            AssessmentStatus::Completed => "completed",
            AssessmentStatus::Failed => "failed",
        }
    }
}

impl FromStr for AssessmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(AssessmentStatus::Processing),
            "completed" => Ok(AssessmentStatus::Completed),
            "failed" => Ok(AssessmentStatus::Failed),
            _ => Err(format!("Invalid assessment status: {}", s)),
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
