use crate::book::Book;
use crate::values::FlagValue;

/// Raw listing query: `?name=..&reading=..&finished=..`.
///
/// An empty value counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

impl ListFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn by_reading(reading: impl Into<String>) -> Self {
        Self {
            reading: Some(reading.into()),
            ..Self::default()
        }
    }

    pub fn by_finished(finished: impl Into<String>) -> Self {
        Self {
            finished: Some(finished.into()),
            ..Self::default()
        }
    }

    /// Build from raw query pairs. A repeated key keeps its first value;
    /// unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "name" => &mut filter.name,
                "reading" => &mut filter.reading,
                "finished" => &mut filter.finished,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        filter
    }

    /// Pick the single dimension this query filters on.
    ///
    /// Dimensions are never combined: `name` wins over `reading`, which wins
    /// over `finished`.
    pub fn select(&self) -> BookFilter {
        if let Some(name) = present(&self.name) {
            BookFilter::Name(name.to_lowercase())
        } else if let Some(reading) = present(&self.reading) {
            BookFilter::Reading(FlagValue::parse(reading))
        } else if let Some(finished) = present(&self.finished) {
            BookFilter::Finished(FlagValue::parse(finished))
        } else {
            BookFilter::All
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// The filter actually applied to a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    All,
    /// Lowercased needle for a case-insensitive substring match.
    Name(String),
    Reading(FlagValue),
    Finished(FlagValue),
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            Self::All => true,
            Self::Name(needle) => book.name().to_lowercase().contains(needle.as_str()),
            Self::Reading(flag) => flag.matches(book.reading()),
            Self::Finished(flag) => flag.matches(book.finished()),
        }
    }
}
