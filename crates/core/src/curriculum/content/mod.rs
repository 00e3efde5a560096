mod css;
mod html;
mod javascript;
mod react_basics;
mod react_intermediate;

use super::lesson::{Lesson, LessonSource};
use crate::section::Section;

fn tables() -> [(Section, &'static [LessonSource]); 5] {
    [
        (Section::Html, html::LESSONS),
        (Section::Css, css::LESSONS),
        (Section::JavaScript, javascript::LESSONS),
        (Section::ReactBasics, react_basics::LESSONS),
        (Section::ReactIntermediate, react_intermediate::LESSONS),
    ]
}

pub(super) fn builtin_lessons() -> Vec<Lesson> {
    tables()
        .into_iter()
        .flat_map(|(section, table)| table.iter().map(move |source| source.to_lesson(section)))
        .collect()
}
