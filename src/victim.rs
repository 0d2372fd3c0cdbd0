//! Nullable key wrapper returned by eviction policies.
//!
//! A policy asked for a victim either names a tracked key or reports that it
//! cannot evict anything right now (LFU* with every reference count above 1,
//! or an empty policy). [`Victim`] makes that outcome explicit at the type
//! level: the cache shell checks emptiness before acting, instead of
//! dereferencing a possibly-dangling "best candidate".

/// The key a policy selected for eviction, or nothing.
///
/// Semantically an optional key; it carries no value. Policies hand out
/// cloned keys, so a `Victim` stays valid regardless of later policy
/// mutations.
///
/// # Example
///
/// ```
/// use evictkit::victim::Victim;
///
/// let empty: Victim<u32> = Victim::none();
/// assert!(empty.is_none());
///
/// let chosen = Victim::of(7u32);
/// assert_eq!(chosen.key(), Some(&7));
/// assert_eq!(chosen.into_inner(), Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Victim<K>(Option<K>);

impl<K> Victim<K> {
    /// Creates an empty victim: the policy has nothing to evict.
    #[inline]
    pub fn none() -> Self {
        Victim(None)
    }

    /// Creates a victim naming `key` for eviction.
    #[inline]
    pub fn of(key: K) -> Self {
        Victim(Some(key))
    }

    /// Returns `true` if a key was selected.
    #[inline]
    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if the policy could not select a key.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Borrows the selected key, if any.
    #[inline]
    pub fn key(&self) -> Option<&K> {
        self.0.as_ref()
    }

    /// Consumes the victim and returns the selected key, if any.
    #[inline]
    pub fn into_inner(self) -> Option<K> {
        self.0
    }
}

impl<K> Default for Victim<K> {
    /// An empty victim.
    fn default() -> Self {
        Victim::none()
    }
}

impl<K> From<Option<K>> for Victim<K> {
    fn from(key: Option<K>) -> Self {
        Victim(key)
    }
}

impl<K> From<Victim<K>> for Option<K> {
    fn from(victim: Victim<K>) -> Self {
        victim.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let v: Victim<String> = Victim::default();
        assert!(v.is_none());
        assert!(!v.is_some());
        assert_eq!(v.key(), None);
        assert_eq!(v.into_inner(), None);
    }

    #[test]
    fn present_victim_exposes_key() {
        let v = Victim::of("k".to_string());
        assert!(v.is_some());
        assert_eq!(v.key().map(String::as_str), Some("k"));
        assert_eq!(v.into_inner().as_deref(), Some("k"));
    }

    #[test]
    fn option_conversions() {
        let v: Victim<u8> = Some(3).into();
        assert_eq!(Option::from(v), Some(3));

        let empty: Victim<u8> = None.into();
        assert_eq!(Option::<u8>::from(empty), None);
    }
}
