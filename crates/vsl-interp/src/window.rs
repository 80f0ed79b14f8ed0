//! Support window location.
//!
//! A kernel spanning `N` intervals needs `N` consecutive samples around a
//! coordinate `x`. The window starts at
//! `anchor = floor(x) - (N/2 - 1)` and the kernel is evaluated at the
//! fractional part `x - floor(x)`.

/// Position of an `N`-wide support window along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportWindow {
    /// Index of the leftmost support sample; may be negative.
    pub anchor: isize,
    /// Fractional offset of the coordinate past `floor(x)`, in `[0, 1)`.
    pub fraction: f32,
}

impl SupportWindow {
    /// Locates the window of a kernel spanning `intervals` intervals around `coord`.
    ///
    /// Non-finite or huge coordinates saturate instead of overflowing; the
    /// resulting window then lies far outside any array.
    ///
    /// ```rust
    /// use vsl_interp::SupportWindow;
    ///
    /// let w = SupportWindow::locate(1.25, 4);
    /// assert_eq!(w.anchor, 0);
    /// assert_eq!(w.fraction, 0.25);
    ///
    /// let w = SupportWindow::locate(-0.5, 2);
    /// assert_eq!(w.anchor, -1);
    /// assert_eq!(w.fraction, 0.5);
    /// ```
    #[inline]
    pub fn locate(coord: f32, intervals: usize) -> Self {
        let base = coord.floor();
        let fraction = coord - base;
        // NaN fractions come from non-finite input; those windows are outside anyway
        let fraction = if fraction.is_finite() { fraction } else { 0.0 };
        let offset = (intervals / 2).saturating_sub(1) as isize;
        Self {
            anchor: (base as isize).saturating_sub(offset),
            fraction,
        }
    }

    /// Returns `true` if all `intervals` samples of the window lie in `0..size`.
    #[inline]
    pub fn fits(&self, intervals: usize, size: usize) -> bool {
        self.anchor >= 0 && (self.anchor as usize).saturating_add(intervals) <= size
    }

    /// Absolute index of support sample `i`.
    #[inline]
    pub fn index(&self, i: usize) -> isize {
        self.anchor.saturating_add(i as isize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_bicubic() {
        let w = SupportWindow::locate(2.75, 4);
        assert_eq!(w.anchor, 1);
        assert_eq!(w.fraction, 0.75);
        assert!(w.fits(4, 5));
        assert!(!w.fits(4, 4));
    }

    #[test]
    fn test_locate_negative() {
        let w = SupportWindow::locate(-1.25, 4);
        assert_eq!(w.anchor, -3);
        assert_eq!(w.fraction, 0.75);
        assert!(!w.fits(4, 100));
    }

    #[test]
    fn test_locate_integer() {
        let w = SupportWindow::locate(3.0, 2);
        assert_eq!(w.anchor, 3);
        assert_eq!(w.fraction, 0.0);
        assert!(w.fits(2, 5));
        assert!(!w.fits(2, 4));
    }

    #[test]
    fn test_non_finite_saturates() {
        let w = SupportWindow::locate(f32::INFINITY, 4);
        assert_eq!(w.fraction, 0.0);
        assert!(!w.fits(4, 1000));
        let w = SupportWindow::locate(f32::NEG_INFINITY, 4);
        assert!(!w.fits(4, 1000));
        let w = SupportWindow::locate(1e30, 2);
        assert!(!w.fits(2, 1 << 20));
        assert_eq!(w.index(1), isize::MAX);
    }

    #[test]
    fn test_empty_never_fits() {
        assert!(!SupportWindow::locate(0.0, 2).fits(2, 0));
    }
}
