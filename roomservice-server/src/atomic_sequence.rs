use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering::Relaxed;

pub struct AtomicSequence {
	next_number: AtomicU64,
}

impl AtomicSequence {
	pub fn starting_at(first_number: u64) -> Self {
		Self {
			next_number: AtomicU64::new(first_number),
		}
	}

	pub fn next(&self) -> u64 {
		// Relaxed is enough, only the value in the atomic itself is ordered.
		self.next_number.fetch_add(1, Relaxed)
	}
}

impl Default for AtomicSequence {
	fn default() -> Self {
		Self::starting_at(0)
	}
}

#[cfg(test)]
mod test {
	use crate::atomic_sequence::AtomicSequence;

	#[test]
	fn atomic_sequence_should_count() {
		let sequence = AtomicSequence::default();
		assert_eq!(0, sequence.next());
		assert_eq!(1, sequence.next());
		assert_eq!(2, sequence.next());
	}

	#[test]
	fn atomic_sequence_should_count_from_the_given_start() {
		let sequence = AtomicSequence::starting_at(1);
		assert_eq!(1, sequence.next());
		assert_eq!(2, sequence.next());
	}
}
