use std::fmt;

/// A nul terminated string field which may be absent.
///
/// Postgres does not distinguish an absent name from an empty one, for example an empty
/// prepared statement name selects the unnamed prepared statement. Therefore an absent
/// value is written as an empty string, and [`OptionalStr::is_absent`] returns `true` for
/// both.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptionalStr<'a>(Option<&'a str>);

impl<'a> OptionalStr<'a> {
    /// Absent value.
    pub const NONE: OptionalStr<'static> = OptionalStr(None);

    pub const fn new(value: Option<&'a str>) -> Self {
        Self(value)
    }

    /// Returns the string as written on the wire, empty string when absent.
    pub fn as_str(&self) -> &'a str {
        self.0.unwrap_or("")
    }

    /// Returns `true` if value is absent or empty.
    pub fn is_absent(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Returns `None` if value is absent or empty.
    pub fn get(&self) -> Option<&'a str> {
        self.0.filter(|e| !e.is_empty())
    }
}

impl<'a> From<&'a str> for OptionalStr<'a> {
    fn from(value: &'a str) -> Self {
        Self(Some(value))
    }
}

impl<'a> From<Option<&'a str>> for OptionalStr<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Self(value)
    }
}

impl fmt::Debug for OptionalStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(s) => fmt::Debug::fmt(s, f),
            None => f.write_str("None"),
        }
    }
}
