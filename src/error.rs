use thiserror::Error;

/// Returned by [`Tree::insert`][crate::Tree::insert] when the key is already stored in the tree.
/// The rejected key is handed back so the caller doesn't lose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("key {0:?} is already present in the tree")]
pub struct DuplicateKey<K>(pub K);

impl<K> DuplicateKey<K> {
    /// Takes back the key that couldn't be inserted.
    pub fn into_key(self) -> K {
        self.0
    }
}
