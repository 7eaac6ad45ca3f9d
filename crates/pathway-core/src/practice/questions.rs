//! Static practice question bank.

use serde::{Deserialize, Serialize};

/// Lesson/practice topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Math,
    History,
}

impl Topic {
    pub fn all() -> [Topic; 2] {
        [Topic::Math, Topic::History]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Math => "math",
            Topic::History => "history",
        }
    }

    /// Parse a topic id; anything unknown falls back to math.
    pub fn parse(value: &str) -> Self {
        match value {
            "history" => Topic::History,
            _ => Topic::Math,
        }
    }
}

pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
    pub correct: bool,
}

pub struct Question {
    pub id: &'static str,
    pub question: &'static str,
    pub options: &'static [QuestionOption],
}

impl Question {
    /// Index of the correct option.
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|o| o.correct)
            .unwrap_or_default()
    }
}

const MATH: &[Question] = &[
    Question {
        id: "m1",
        question: "A bar is divided into 5 equal parts. 2 parts are shaded. \
                   What fraction is shaded?",
        options: &[
            QuestionOption {
                value: "2/5",
                label: "2/5",
                correct: true,
            },
            QuestionOption {
                value: "5/2",
                label: "5/2",
                correct: false,
            },
            QuestionOption {
                value: "3/5",
                label: "3/5",
                correct: false,
            },
        ],
    },
    Question {
        id: "m2",
        question: "What does 3/4 mean?",
        options: &[
            QuestionOption {
                value: "3 out of 4",
                label: "3 out of 4 equal parts",
                correct: true,
            },
            QuestionOption {
                value: "4 out of 3",
                label: "4 out of 3 parts",
                correct: false,
            },
            QuestionOption {
                value: "3 plus 4",
                label: "3 plus 4",
                correct: false,
            },
        ],
    },
];

const HISTORY: &[Question] = &[
    Question {
        id: "h1",
        question: "One major reason Rome fell was:",
        options: &[
            QuestionOption {
                value: "Too many libraries",
                label: "A) Too many libraries",
                correct: false,
            },
            QuestionOption {
                value: "Economic problems",
                label: "B) Economic problems",
                correct: true,
            },
            QuestionOption {
                value: "Too much peace",
                label: "C) Too much peace",
                correct: false,
            },
            QuestionOption {
                value: "No army",
                label: "D) No army",
                correct: false,
            },
        ],
    },
    Question {
        id: "h2",
        question: "In what year did the Western Roman Empire fall?",
        options: &[
            QuestionOption {
                value: "1450",
                label: "A) 1450",
                correct: false,
            },
            QuestionOption {
                value: "1776",
                label: "B) 1776",
                correct: false,
            },
            QuestionOption {
                value: "476 AD",
                label: "C) 476 AD",
                correct: true,
            },
            QuestionOption {
                value: "2024",
                label: "D) 2024",
                correct: false,
            },
        ],
    },
];

/// The question set for a topic.
pub fn questions_for(topic: Topic) -> &'static [Question] {
    match topic {
        Topic::Math => MATH,
        Topic::History => HISTORY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_topic_falls_back_to_math() {
        assert_eq!(Topic::parse("math"), Topic::Math);
        assert_eq!(Topic::parse("history"), Topic::History);
        assert_eq!(Topic::parse("geology"), Topic::Math);
        assert_eq!(Topic::parse(""), Topic::Math);
    }

    #[test]
    fn every_question_has_exactly_one_correct_option() {
        for topic in Topic::all() {
            for question in questions_for(topic) {
                let correct = question.options.iter().filter(|o| o.correct).count();
                assert_eq!(correct, 1, "question {}", question.id);
            }
        }
    }

    #[test]
    fn both_topics_have_two_questions() {
        for topic in Topic::all() {
            assert_eq!(questions_for(topic).len(), 2);
        }
    }
}
