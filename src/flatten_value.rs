use {
    itertools::Itertools,
    std::borrow::Cow,
    tap::{Pipe, Tap},
};

pub const JOIN_TAG: &str = ".";

/// Map keys traversed from the root down to a leaf. List membership adds nothing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FieldPath<'a>(Vec<Cow<'a, str>>);

impl<'a> FieldPath<'a> {
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_ref())
    }

    pub fn join(&self, segment: impl Into<Cow<'a, str>>) -> Self {
        self.clone().tap_mut(|p| p.0.push(segment.into()))
    }

    /// Leading empty segments are dropped, so an empty top-level key leaves no separator behind.
    pub fn to_key(&self, separator: &str) -> String {
        self.segments()
            .skip_while(|segment| segment.is_empty())
            .join(separator)
    }
}

impl<'a, S> FromIterator<S> for FieldPath<'a>
where
    S: Into<Cow<'a, str>>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter().map(Into::into).collect::<Vec<_>>().pipe(FieldPath)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenConfig {
    pub separator: Cow<'static, str>,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            separator: Cow::Borrowed(JOIN_TAG),
        }
    }
}

impl FlattenConfig {
    pub fn with_separator(self, separator: impl Into<Cow<'static, str>>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

pub fn boxed_iter<'a, T, I>(iter: I) -> Box<dyn Iterator<Item = T> + 'a>
where
    T: 'a,
    I: Iterator<Item = T> + 'a,
{
    Box::new(iter)
}

pub mod flatten;
pub mod reinterpret;
