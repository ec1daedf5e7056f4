use std::fmt;

pub const POPULAR_CATEGORIES: [&str; 6] = [
    "DJ / MC",
    "Decor",
    "Venue",
    "Photo / Video",
    "Makeup / Hair",
    "Dhol / Live Music",
];

const ALL: &str = "all";

/// Category selector taken from the `category` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    /// Missing, blank and `all` (any case) select every category.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => CategoryFilter::All,
            Some(value) if value.eq_ignore_ascii_case(ALL) => CategoryFilter::All,
            Some(value) => CategoryFilter::Only(value.to_string()),
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category),
        }
    }

    /// PostgREST `cs` (array contains) operand, e.g. `cs.{"DJ / MC"}`.
    pub fn contains_operand(&self) -> Option<String> {
        self.category().map(|category| {
            let escaped = category.replace('\\', "\\\\").replace('"', "\\\"");
            format!("cs.{{\"{escaped}\"}}")
        })
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}
