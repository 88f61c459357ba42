use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionTone {
    Conversational,
    Direct,
    Indirect,
    Scenario,
}

impl QuestionTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionTone::Conversational => "conversational",
            QuestionTone::Direct => "direct",
            QuestionTone::Indirect => "indirect",
            QuestionTone::Scenario => "scenario",
        }
    }
}

impl FromStr for QuestionTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conversational" => Ok(QuestionTone::Conversational),
            "direct" => Ok(QuestionTone::Direct),
            "indirect" => Ok(QuestionTone::Indirect),
            "scenario" => Ok(QuestionTone::Scenario),
            _ => Err(format!("Invalid question tone: {}", s)),
        }
    }
}

impl fmt::Display for QuestionTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
