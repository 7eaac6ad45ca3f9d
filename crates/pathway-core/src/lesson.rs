//! Static lesson content.

use serde::Serialize;

use crate::practice::Topic;

/// How a lesson is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Text,
    Visual,
}

/// One topic's lesson.
#[derive(Debug, Clone, Serialize)]
pub struct LessonContent {
    pub title: &'static str,
    pub kind: LessonKind,
    pub intro: &'static str,
    /// Optional image path shown after the intro, before the body.
    pub image: Option<&'static str>,
    pub body: &'static [&'static str],
    pub tip: Option<&'static str>,
}

const MATH_LESSON: LessonContent = LessonContent {
    title: "What is a fraction?",
    kind: LessonKind::Visual,
    intro: "A fraction shows how much of something you have.",
    image: Some("/Fraction_pizza.png"),
    body: &[
        "Imagine a pizza cut into 4 equal slices.",
        "If you take 1 slice, you have 1 out of 4.",
        "We write that as 1/4.",
    ],
    tip: Some(
        "When you see a fraction, picture something split into that many \
         parts (pizza, bar, or circle).",
    ),
};

const HISTORY_LESSON: LessonContent = LessonContent {
    title: "Why did the Roman Empire fall?",
    kind: LessonKind::Visual,
    intro: "3 Main Reasons:",
    image: Some("/Rome.jpeg"),
    body: &[
        "Invasions – Outside tribes attacked Rome.",
        "Economic problems – Money became unstable.",
        "Political chaos – Leaders changed often.",
        "In 476 AD, the Western Roman Empire fell.",
    ],
    tip: None,
};

/// The lesson for a topic.
pub fn lesson_for(topic: Topic) -> &'static LessonContent {
    match topic {
        Topic::Math => &MATH_LESSON,
        Topic::History => &HISTORY_LESSON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_a_lesson() {
        for topic in Topic::all() {
            let lesson = lesson_for(topic);
            assert!(!lesson.title.is_empty());
            assert!(!lesson.body.is_empty());
        }
    }
}
