//! Counts maximal monotonic runs.
//!
//! The measure is the number of ascending and descending runs found in a
//! single left-to-right scan, minus one, so a sequence sorted in either
//! direction scores `0`. Runs are disjoint: the element that breaks a run
//! starts the next adjacent pair rather than being shared with the run it
//! ended.
//!
//! Every entry point requires `is_less` to be a strict weak ordering over the
//! compared keys. An inconsistent comparator is not detected; the scan still
//! finishes in one pass and returns a value that means nothing.

/// Direction of the run currently being extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
	Ascending,
	Descending,
}

/// Measures `seq` using the natural ordering of its items.
///
/// ```
/// use presort_probes::mono;
///
/// assert_eq!(mono(&[1, 2, 3, 4]), 0);
/// assert_eq!(mono(&[4, 3, 2, 1]), 0);
/// assert_eq!(mono(&[1, 2, 3, 2, 1, 4, 5]), 2);
/// ```
pub fn mono<I>(seq: I) -> usize
where
	I: IntoIterator,
	I::Item: PartialOrd,
{
	mono_by(seq, |a, b| a < b)
}

/// Measures `seq` using the key extracted by `key` and its natural ordering.
///
/// `key` is called again for every comparison; results are not cached.
pub fn mono_by_key<I, K, G>(seq: I, mut key: G) -> usize
where
	I: IntoIterator,
	G: FnMut(&I::Item) -> K,
	K: PartialOrd,
{
	mono_by(seq, |a, b| key(a) < key(b))
}

/// Measures `seq` ordering keys extracted by `key` with `is_less`.
pub fn mono_with<I, K, F, G>(seq: I, mut is_less: F, mut key: G) -> usize
where
	I: IntoIterator,
	F: FnMut(&K, &K) -> bool,
	G: FnMut(&I::Item) -> K,
{
	mono_by(seq, |a, b| is_less(&key(a), &key(b)))
}

/// Measures `seq` ordering items with `is_less`.
///
/// Items are pulled one at a time and at most two are held at once, so any
/// forward-only iterator works.
pub fn mono_by<I, F>(seq: I, mut is_less: F) -> usize
where
	I: IntoIterator,
	F: FnMut(&I::Item, &I::Item) -> bool,
{
	let mut iter = seq.into_iter();
	let Some(mut current) = iter.next() else {
		trace_done(0, 0);
		return 0;
	};

	let mut len = 1;
	let mut runs = 0;
	// Between runs after a tie step or a closed boundary.
	let mut run = None;

	for next in iter {
		len += 1;
		run = match run {
			None if is_less(&current, &next) => Some(Direction::Ascending),
			None if is_less(&next, &current) => Some(Direction::Descending),
			// Tied pairs neither open nor close a run in either direction.
			None => None,
			Some(Direction::Ascending) if is_less(&next, &current) => {
				runs += 1;
				None
			}
			Some(Direction::Descending) if is_less(&current, &next) => {
				runs += 1;
				None
			}
			extending => extending,
		};
		current = next;
	}

	// An unclosed trailing run is the one the count stays late by.
	trace_done(len, runs);
	runs
}

/// Largest value [`mono`] can return for a sequence of `len` elements.
///
/// Each closed run consumes at least two elements, and zig-zag input such as
/// `[1, 3, 2, 4, 3, 5]` reaches the bound.
///
/// ```
/// use presort_probes::max_for_size;
///
/// assert_eq!(max_for_size(0), 0);
/// assert_eq!(max_for_size(6), 2);
/// assert_eq!(max_for_size(7), 3);
/// ```
pub const fn max_for_size(len: usize) -> usize {
	if len == 0 { 0 } else { (len - 1) / 2 }
}

#[inline]
fn trace_done(len: usize, runs: usize) {
	#[cfg(feature = "tracing")]
	tracing::trace!(target: "presort_probes", len, runs, "probe.mono.done");
	#[cfg(not(feature = "tracing"))]
	let _ = (len, runs);
}
