//! Pacing between chunk hand-offs.

use std::thread;
use std::time::Duration;

/// Waits between hand-offs so the operator can paste before the next chunk lands.
pub trait Pause {
    /// Blocks for `delay`.
    fn pause(&mut self, delay: Duration);
}

/// Pauses by sleeping the current thread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sleep;

impl Pause for Sleep {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Any `FnMut(Duration)` closure can stand in for a pause, e.g. to record delays in tests.
impl<F: FnMut(Duration)> Pause for F {
    fn pause(&mut self, delay: Duration) {
        self(delay);
    }
}
