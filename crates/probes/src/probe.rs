use crate::mono;

/// A measure of presortedness that can be held and passed around as a value.
///
/// Implementors provide the comparator form and an upper bound; the other
/// calling conventions are derived from it. Every method requires the
/// comparator to be a strict weak ordering over the compared keys.
pub trait Probe {
	/// Measures `seq`, ordering items with `is_less`.
	fn measure_by<I, F>(&self, seq: I, is_less: F) -> usize
	where
		I: IntoIterator,
		F: FnMut(&I::Item, &I::Item) -> bool;

	/// Largest value the probe can return for `len` elements.
	fn max_for_size(&self, len: usize) -> usize;

	/// Measures `seq` using the natural ordering of its items.
	fn measure<I>(&self, seq: I) -> usize
	where
		I: IntoIterator,
		I::Item: PartialOrd,
	{
		self.measure_by(seq, |a, b| a < b)
	}

	/// Measures `seq` by the natural ordering of keys extracted with `key`.
	fn measure_by_key<I, K, G>(&self, seq: I, mut key: G) -> usize
	where
		I: IntoIterator,
		G: FnMut(&I::Item) -> K,
		K: PartialOrd,
	{
		self.measure_by(seq, |a, b| key(a) < key(b))
	}

	/// Measures `seq` ordering keys extracted with `key` by `is_less`.
	fn measure_with<I, K, F, G>(&self, seq: I, mut is_less: F, mut key: G) -> usize
	where
		I: IntoIterator,
		F: FnMut(&K, &K) -> bool,
		G: FnMut(&I::Item) -> K,
	{
		self.measure_by(seq, |a, b| is_less(&key(a), &key(b)))
	}
}

/// Monotonic run counting as a [`Probe`].
///
/// ```
/// use presort_probes::{Mono, Probe};
///
/// let probe = Mono;
/// assert_eq!(probe.measure(&[1, 2, 3, 2, 1, 4, 5]), 2);
/// assert_eq!(probe.max_for_size(7), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mono;

impl Probe for Mono {
	#[inline]
	fn measure_by<I, F>(&self, seq: I, is_less: F) -> usize
	where
		I: IntoIterator,
		F: FnMut(&I::Item, &I::Item) -> bool,
	{
		mono::mono_by(seq, is_less)
	}

	#[inline]
	fn max_for_size(&self, len: usize) -> usize {
		mono::max_for_size(len)
	}
}
