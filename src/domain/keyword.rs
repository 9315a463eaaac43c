use std::fmt;
use std::str::FromStr;

/// Clause keyword that may be followed by a table name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseKeyword {
    From,
    Join,
    Update,
    Into,
}

impl ClauseKeyword {
    pub fn all_variants() -> &'static [ClauseKeyword] {
        &[
            ClauseKeyword::From,
            ClauseKeyword::Join,
            ClauseKeyword::Update,
            ClauseKeyword::Into,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClauseKeyword::From => "from",
            ClauseKeyword::Join => "join",
            ClauseKeyword::Update => "update",
            ClauseKeyword::Into => "into",
        }
    }

    /// Matches a whole token against the keyword set, ignoring ASCII case.
    pub fn match_token(token: &str) -> Option<Self> {
        Self::all_variants()
            .iter()
            .copied()
            .find(|keyword| token.eq_ignore_ascii_case(keyword.as_str()))
    }
}

impl fmt::Display for ClauseKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

impl FromStr for ClauseKeyword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::match_token(s).ok_or_else(|| format!("Unknown clause keyword: {}", s))
    }
}
