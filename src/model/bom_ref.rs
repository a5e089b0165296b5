use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;
use uuid::Uuid;

/// Identifier used to cross-reference entities within one BOM document
///
/// A `BomRef` is either set explicitly or left unset. An unset ref is a
/// placeholder that gets a random UUID the first time [`BomRef::value`] is
/// called; the value is then cached for the lifetime of the instance.
///
/// Equality is by materialized value, except that an unset ref is only equal
/// to itself: two distinct placeholders are never equal, and cloning an unset
/// ref produces a new, distinct placeholder.
#[derive(Default)]
pub struct BomRef {
    value: OnceLock<String>,
}

impl BomRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: OnceLock::from(value.into()),
        }
    }

    /// Creates a placeholder whose value is generated on first access
    pub fn unset() -> Self {
        Self::default()
    }

    /// Returns the value, assigning a random UUID first if none is set yet
    pub fn value(&self) -> &str {
        self.value.get_or_init(|| Uuid::new_v4().to_string())
    }

    /// Returns the value without materializing it
    pub fn get(&self) -> Option<&str> {
        self.value.get().map(String::as_str)
    }

    pub fn is_set(&self) -> bool {
        self.value.get().is_some()
    }

    fn sort_key(&self) -> &str {
        self.get().unwrap_or("")
    }
}

impl Clone for BomRef {
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => BomRef::new(value),
            None => BomRef::unset(),
        }
    }
}

impl PartialEq for BomRef {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Orders by value, with unset refs first
///
/// Two distinct unset refs compare as `Equal` here while `eq` reports them
/// unequal, so this ordering is only suitable for sorting.
impl PartialOrd for BomRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.sort_key().cmp(other.sort_key()))
    }
}

impl fmt::Debug for BomRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => write!(f, "BomRef({:?})", value),
            None => write!(f, "BomRef(<unset>)"),
        }
    }
}

impl fmt::Display for BomRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sort_key())
    }
}

impl From<&str> for BomRef {
    fn from(value: &str) -> Self {
        BomRef::new(value)
    }
}

impl From<String> for BomRef {
    fn from(value: String) -> Self {
        BomRef::new(value)
    }
}
