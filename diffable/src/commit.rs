use crate::snapshot::Snapshot;

/// A value and the snapshot that displays it.
///
/// Styles guarantee that `value` is what the nonvirtual symbols of `snapshot` parse
/// back to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commit<V> {
    pub value: V,
    pub snapshot: Snapshot,
}

impl<V> Commit<V> {
    pub fn new(value: V, snapshot: Snapshot) -> Self {
        Self { value, snapshot }
    }

    /// Transform the value, keeping the snapshot.
    pub fn map<T>(self, f: impl FnOnce(V) -> T) -> Commit<T> {
        Commit {
            value: f(self.value),
            snapshot: self.snapshot,
        }
    }
}
