use std::fmt;

/// How a candidate value is compared against a filter's search value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// The value has to contain the search value.
    Contains,
    /// The value has to equal the search value.
    #[default]
    Equals,
    /// The value has to start with the search value.
    StartsWith,
    /// The value has to end with the search value.
    EndsWith,
}

impl FilterMode {
    /// Short label used when rendering a filter for humans.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::Equals => "equals",
            Self::StartsWith => "starts with",
            Self::EndsWith => "ends with",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
