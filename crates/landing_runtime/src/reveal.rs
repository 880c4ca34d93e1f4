//! Reveal-on-scroll registry shared by every section of one page provider.
//!
//! Components register the element they want revealed and receive a fresh [`RevealKey`]; the
//! provider feeds viewport samples in and receives back the elements that just crossed the
//! threshold so it can stop observing them. Revealed flags never flip back.

use std::collections::BTreeMap;

use page_host::{reveal_threshold_reached, RevealKey, ViewportSample};

#[derive(Debug)]
struct RevealEntry<E> {
    handle: E,
    revealed: bool,
}

#[derive(Debug)]
/// Monotonic reveal registry keyed by registration.
///
/// `E` is the host handle kept for each registration (a DOM element in the browser).
pub struct RevealRegistry<E> {
    threshold: f64,
    next_key: u64,
    entries: BTreeMap<RevealKey, RevealEntry<E>>,
}

impl<E> RevealRegistry<E> {
    /// Creates an empty registry revealing at `threshold` visibility.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            next_key: 1,
            entries: BTreeMap::new(),
        }
    }

    /// Registers `handle` and returns its key. Keys are never reused.
    pub fn register(&mut self, handle: E) -> RevealKey {
        let key = RevealKey(self.next_key);
        self.next_key += 1;
        self.entries.insert(
            key,
            RevealEntry {
                handle,
                revealed: false,
            },
        );
        key
    }

    /// Removes a registration, returning its handle when it was still registered.
    pub fn deregister(&mut self, key: RevealKey) -> Option<E> {
        self.entries.remove(&key).map(|entry| entry.handle)
    }

    /// Returns whether `key` has been revealed.
    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.entries.get(&key).is_some_and(|entry| entry.revealed)
    }

    /// Marks `key` revealed without a viewport sample.
    ///
    /// Used when the host cannot observe the viewport so content is not hidden forever.
    pub fn force_reveal(&mut self, key: RevealKey) -> bool {
        match self.entries.get_mut(&key) {
            Some(entry) if !entry.revealed => {
                entry.revealed = true;
                true
            }
            _ => false,
        }
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: Clone> RevealRegistry<E> {
    /// Applies a batch of samples and returns the registrations revealed by it.
    ///
    /// Samples for unknown or already revealed keys are ignored.
    pub fn apply_samples(&mut self, samples: &[ViewportSample]) -> Vec<(RevealKey, E)> {
        let mut revealed = Vec::new();
        for sample in samples {
            if !reveal_threshold_reached(sample, self.threshold) {
                continue;
            }
            if let Some(entry) = self.entries.get_mut(&sample.key) {
                if !entry.revealed {
                    entry.revealed = true;
                    revealed.push((sample.key, entry.handle.clone()));
                }
            }
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(key: RevealKey, ratio: f64, intersecting: bool) -> ViewportSample {
        ViewportSample {
            key,
            ratio,
            intersecting,
        }
    }

    #[test]
    fn keys_are_unique_per_registration() {
        let mut registry = RevealRegistry::new(0.1);
        let first = registry.register("hero");
        let second = registry.register("hero");
        assert_ne!(first, second);

        registry.deregister(first);
        let third = registry.register("hero");
        assert_ne!(third, first);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut registry = RevealRegistry::new(0.1);
        let key = registry.register("features");

        assert!(registry.apply_samples(&[sample(key, 0.05, true)]).is_empty());
        assert!(!registry.is_revealed(key));

        assert_eq!(
            registry.apply_samples(&[sample(key, 0.1, true)]),
            vec![(key, "features")]
        );
        assert!(registry.is_revealed(key));

        assert!(registry.apply_samples(&[sample(key, 0.0, false)]).is_empty());
        assert!(registry.apply_samples(&[sample(key, 0.9, true)]).is_empty());
        assert!(registry.is_revealed(key));
    }

    #[test]
    fn non_intersecting_samples_never_reveal() {
        let mut registry = RevealRegistry::new(0.1);
        let key = registry.register(());
        assert!(registry.apply_samples(&[sample(key, 1.0, false)]).is_empty());
        assert!(!registry.is_revealed(key));
    }

    #[test]
    fn samples_for_deregistered_keys_are_ignored() {
        let mut registry = RevealRegistry::new(0.1);
        let key = registry.register("card");
        assert_eq!(registry.deregister(key), Some("card"));
        assert!(registry.apply_samples(&[sample(key, 1.0, true)]).is_empty());
        assert!(registry.is_empty());
        assert_eq!(registry.deregister(key), None);
    }

    #[test]
    fn batch_reveals_each_key_once() {
        let mut registry = RevealRegistry::new(0.1);
        let a = registry.register("a");
        let b = registry.register("b");
        let revealed = registry.apply_samples(&[
            sample(a, 0.5, true),
            sample(a, 0.6, true),
            sample(b, 0.01, true),
        ]);
        assert_eq!(revealed, vec![(a, "a")]);
    }

    #[test]
    fn force_reveal_marks_once() {
        let mut registry = RevealRegistry::new(0.1);
        let key = registry.register(());
        assert!(registry.force_reveal(key));
        assert!(!registry.force_reveal(key));
        assert!(registry.is_revealed(key));
    }
}
