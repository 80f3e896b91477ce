use alloc::sync::Arc;
use core::{fmt, ops::Deref};


/// Shared ownership wrapper backed by [`alloc::sync::Arc`].
///
/// Equality is identity: two handles are equal when they point at the same allocation.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T> ArcShared<T> {
  /// Creates a new `ArcShared` from a value
  ///
  /// # Arguments
  ///
  /// * `value` - The value to share
  ///
  /// # Returns
  ///
  /// A new `ArcShared` instance
  pub fn new(value: T) -> Self {
    Self(Arc::new(value))
  }
}

impl<T: ?Sized> ArcShared<T> {
  /// Creates `ArcShared` from an existing `Arc`, typically one already coerced to a trait object
  ///
  /// # Arguments
  ///
  /// * `inner` - An `Arc` instance
  ///
  /// # Returns
  ///
  /// An `ArcShared` instance wrapping the `Arc`
  #[must_use]
  pub const fn from_arc(inner: Arc<T>) -> Self {
    Self(inner)
  }

  /// Returns the number of strong handles sharing the value.
  #[must_use]
  pub fn strong_count(this: &Self) -> usize {
    Arc::strong_count(&this.0)
  }

  /// Returns `true` when both handles point at the same allocation.
  #[must_use]
  pub fn ptr_eq(this: &Self, other: &Self) -> bool {
    Arc::ptr_eq(&this.0, &other.0)
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> PartialEq for ArcShared<T> {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl<T: ?Sized> Eq for ArcShared<T> {}

impl<T: ?Sized> fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ArcShared").finish()
  }
}
