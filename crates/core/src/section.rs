use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the top-level curriculum tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Html,
    Css,
    #[serde(rename = "javascript")]
    JavaScript,
    ReactBasics,
    ReactIntermediate,
}

/// Path prefixes checked in order by [`resolve_section`].
///
/// Entries must stay most-specific-first: a prefix that is a substring of a
/// later one would shadow it.
pub const SECTION_PREFIXES: [(&str, Section); 5] = [
    ("/html", Section::Html),
    ("/css", Section::Css),
    ("/javascript", Section::JavaScript),
    ("/react-basics", Section::ReactBasics),
    ("/react-intermediate", Section::ReactIntermediate),
];

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Html,
        Section::Css,
        Section::JavaScript,
        Section::ReactBasics,
        Section::ReactIntermediate,
    ];

    /// URL segment for this section, without the leading slash.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Section::Html => "html",
            Section::Css => "css",
            Section::JavaScript => "javascript",
            Section::ReactBasics => "react-basics",
            Section::ReactIntermediate => "react-intermediate",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::Html => "HTML",
            Section::Css => "CSS",
            Section::JavaScript => "JavaScript",
            Section::ReactBasics => "React Basics",
            Section::ReactIntermediate => "React Intermediate",
        }
    }

    /// Route of the section overview page.
    #[must_use]
    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }
}

/// Returns the section whose prefix appears in `path`, if any.
///
/// Matching is plain substring containment, first match in
/// [`SECTION_PREFIXES`] order wins.
#[must_use]
pub fn resolve_section(path: &str) -> Option<Section> {
    SECTION_PREFIXES
        .iter()
        .find(|(prefix, _)| path.contains(prefix))
        .map(|(_, section)| *section)
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown section: {raw}")]
pub struct SectionParseError {
    raw: String,
}

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| SectionParseError { raw: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_prefix_resolves_to_its_section() {
        let cases = [
            ("/html/forms", Section::Html),
            ("/css/selectors", Section::Css),
            ("/javascript", Section::JavaScript),
            ("/react-basics/hooks", Section::ReactBasics),
            ("/react-intermediate/context", Section::ReactIntermediate),
        ];
        for (path, expected) in cases {
            assert_eq!(resolve_section(path), Some(expected), "path {path}");
        }
    }

    #[test]
    fn containment_is_not_anchored() {
        assert_eq!(resolve_section("/course/css/box-model"), Some(Section::Css));
        assert_eq!(resolve_section("#/html"), Some(Section::Html));
    }

    #[test]
    fn unmatched_paths_resolve_to_none() {
        for path in ["", "/", "/about", "/react", "/htm", "css/selectors", "/CSS"] {
            assert_eq!(resolve_section(path), None, "path {path:?}");
        }
    }

    #[test]
    fn earlier_prefix_wins_when_several_appear() {
        assert_eq!(resolve_section("/css/vs/html"), Some(Section::Html));
    }

    #[test]
    fn prefixes_are_most_specific_first() {
        for (i, (earlier, _)) in SECTION_PREFIXES.iter().enumerate() {
            for (later, _) in &SECTION_PREFIXES[i + 1..] {
                assert!(
                    !later.contains(earlier),
                    "{earlier} shadows the later prefix {later}"
                );
            }
        }
    }

    #[test]
    fn prefix_table_covers_every_section_once() {
        let sections: Vec<Section> = SECTION_PREFIXES.iter().map(|(_, s)| *s).collect();
        assert_eq!(sections, Section::ALL.to_vec());
        for (prefix, section) in SECTION_PREFIXES {
            assert_eq!(prefix, section.path());
        }
    }

    #[test]
    fn slug_round_trips_through_from_str_and_serde() {
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>(), Ok(section));
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section.slug()));
        }
        assert!("react".parse::<Section>().is_err());
    }
}
