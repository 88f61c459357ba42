use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionFormat {
    MultipleChoice,
    FillInTheBlanks,
    MatchTheFollowing,
    TrueFalse,
}

impl QuestionFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionFormat::MultipleChoice => "MultipleChoice",
            QuestionFormat::FillInTheBlanks => "FillInTheBlanks",
            QuestionFormat::MatchTheFollowing => "MatchTheFollowing",
            QuestionFormat::TrueFalse => "TrueFalse",
        }
    }
}

impl FromStr for QuestionFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MultipleChoice" => Ok(QuestionFormat::MultipleChoice),
            "FillInTheBlanks" => Ok(QuestionFormat::FillInTheBlanks),
            "MatchTheFollowing" => Ok(QuestionFormat::MatchTheFollowing),
            "TrueFalse" => Ok(QuestionFormat::TrueFalse),
            _ => Err(format!("Invalid question format: {}", s)),
        }
    }
}

impl fmt::Display for QuestionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
