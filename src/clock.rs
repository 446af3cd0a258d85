//! Millisecond time base used for debounce timestamps

/// Free-running millisecond counter. Wraps at `u32::MAX`.
pub trait Monotonic {
    fn now_millis(&self) -> u32;
}

impl<C: Monotonic + ?Sized> Monotonic for &C {
    #[inline]
    fn now_millis(&self) -> u32 {
        (**self).now_millis()
    }
}

/// Milliseconds from `earlier` to `now`, tolerating one counter wraparound.
#[inline]
pub fn elapsed_ms(now: u32, earlier: u32) -> u32 {
    now.wrapping_sub(earlier)
}
