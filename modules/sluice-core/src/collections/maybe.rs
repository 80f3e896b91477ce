
/// Zero-or-one value produced by a non-blocking pop.
///
/// A default-constructed `Maybe` is empty, [`Maybe::new`] makes it present. The container has no
/// mutators; callers consume it by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Maybe<T> {
  value: Option<T>,
}

impl<T> Maybe<T> {
  /// Creates a present value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self { value: Some(value) }
  }

  /// Creates an empty value.
  #[must_use]
  pub const fn empty() -> Self {
    Self { value: None }
  }

  /// Returns `true` when a value is held.
  #[must_use]
  pub const fn is_present(&self) -> bool {
    self.value.is_some()
  }

  /// Returns `true` when no value is held.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.value.is_none()
  }

  /// Borrows the held value, if any.
  #[must_use]
  pub const fn as_ref(&self) -> Option<&T> {
    self.value.as_ref()
  }

  /// Consumes the container and returns the held value, if any.
  #[must_use]
  pub fn into_option(self) -> Option<T> {
    self.value
  }
}

impl<T> Default for Maybe<T> {
  fn default() -> Self {
    Self::empty()
  }
}

impl<T> From<Option<T>> for Maybe<T> {
  fn from(value: Option<T>) -> Self {
    Self { value }
  }
}

impl<T> From<Maybe<T>> for Option<T> {
  fn from(maybe: Maybe<T>) -> Self {
    maybe.value
  }
}

impl<T> IntoIterator for Maybe<T> {
  type IntoIter = core::option::IntoIter<T>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    self.value.into_iter()
  }
}
