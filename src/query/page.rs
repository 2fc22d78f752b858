//! # Paging Windower
//!
//! Slices the already filtered/sorted sequence into the requested page.
//! Applied after filtering, searching, and sorting; the reported total count
//! always reflects the pre-page size.

/// A half-open index range into the ordered result sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    /// Computes the page window for a sequence of `len` items.
    ///
    /// With both `skip` and `take` the zero-based page index is
    /// `skip / take` (integer division) and the window is
    /// `index*take .. index*take + take`, clipped to bounds. Skips that are
    /// not a multiple of `take` therefore snap to the containing page; that
    /// slice is deterministic but only conventional for aligned paging.
    /// With only `take` the window is the first `take` items; otherwise the
    /// full sequence.
    pub fn compute(len: usize, skip: Option<usize>, take: Option<usize>) -> Self {
        match (skip, take) {
            (Some(_), Some(0)) => Self { start: 0, end: 0 },
            (Some(skip), Some(take)) => {
                let start = ((skip / take) * take).min(len);
                Self {
                    start,
                    end: (start + take).min(len),
                }
            }
            (None, Some(take)) => Self {
                start: 0,
                end: take.min(len),
            },
            _ => Self { start: 0, end: len },
        }
    }

    /// Window length
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the window selects nothing
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
