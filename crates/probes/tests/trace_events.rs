#![cfg(feature = "tracing")]

use std::io;
use std::sync::{Arc, Mutex};

use presort_probes::mono;
use tracing::Level;
use {criterion as _, proptest as _, rstest as _};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		if let Ok(mut out) = self.0.lock() {
			out.extend_from_slice(buf);
		}
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl Capture {
	fn contents(&self) -> String {
		self.0.lock().map(|out| String::from_utf8_lossy(&out).into_owned()).unwrap_or_default()
	}
}

fn captured(f: impl FnOnce()) -> String {
	let capture = Capture::default();
	let writer = capture.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_max_level(Level::TRACE)
		.with_ansi(false)
		.without_time()
		.with_writer(move || writer.clone())
		.finish();
	tracing::subscriber::with_default(subscriber, f);
	capture.contents()
}

#[test]
fn test_emits_done_event() {
	let out = captured(|| {
		assert_eq!(mono(&[1, 2, 3, 2, 1, 4, 5]), 2);
	});
	assert!(out.contains("probe.mono.done"), "{out}");
	assert!(out.contains("len=7"), "{out}");
	assert!(out.contains("runs=2"), "{out}");
	assert!(out.contains("presort_probes"), "{out}");
}

#[test]
fn test_emits_done_event_for_empty_input() {
	let out = captured(|| {
		assert_eq!(mono(Vec::<u8>::new()), 0);
	});
	assert!(out.contains("len=0 runs=0"), "{out}");
}
