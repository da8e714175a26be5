pub mod assert;
pub mod linalg;
pub mod log;
pub mod term;

/// Scalar helpers shared by the vector types.
pub mod gg_num {
    use std::ops::Mul;

    pub fn square<T: Mul<Output = T> + Copy>(x: T) -> T {
        x * x
    }

    /// Sets `a` to `b` if `b` is smaller. A NaN `b` never replaces `a`.
    pub fn update_min<T: PartialOrd + Copy>(a: &mut T, b: T) {
        if b < *a {
            *a = b;
        }
    }
    /// Sets `a` to `b` if `b` is larger. A NaN `b` never replaces `a`.
    pub fn update_max<T: PartialOrd + Copy>(a: &mut T, b: T) {
        if b > *a {
            *a = b;
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn square_int_and_float() {
            assert_eq!(square(-3), 9);
            assert_eq!(square(1.5), 2.25);
        }

        #[test]
        fn update_min_max() {
            let mut lo = 5;
            update_min(&mut lo, 7);
            assert_eq!(lo, 5);
            update_min(&mut lo, -2);
            assert_eq!(lo, -2);

            let mut hi = 1.0;
            update_max(&mut hi, 0.5);
            assert_eq!(hi, 1.0);
            update_max(&mut hi, 4.0);
            assert_eq!(hi, 4.0);
        }

        #[test]
        fn update_ignores_nan() {
            let mut lo = 1.0;
            update_min(&mut lo, f64::NAN);
            assert_eq!(lo, 1.0);
            let mut hi = 1.0;
            update_max(&mut hi, f64::NAN);
            assert_eq!(hi, 1.0);
        }
    }
}

pub mod gg_time {
    use std::time::{Duration, Instant};
    use tracing::info;

    /// High-resolution wall-clock timer, started on construction.
    #[derive(Clone, Debug)]
    pub struct HwTimer {
        start: Instant,
    }

    impl HwTimer {
        pub fn new() -> Self {
            Self {
                start: Instant::now(),
            }
        }

        pub fn reset(&mut self) {
            self.start = Instant::now();
        }

        pub fn elapsed(&self) -> Duration {
            self.start.elapsed()
        }
        /// Seconds since construction or the last [`reset()`](HwTimer::reset).
        pub fn get_sec(&self) -> f64 {
            self.elapsed().as_secs_f64()
        }

        pub fn report(&self, tag: &str) {
            info!("HwTimer [{:>18}]: {:.6} s", tag, self.get_sec());
        }
    }

    impl Default for HwTimer {
        fn default() -> Self {
            Self::new()
        }
    }

}
