use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// How a scroll container keeps its content offset stable across layout changes.
///
/// Flags are additive. When both [`OffsetBehavior::MAINTAIN_ON_CONTENT_SIZE_CHANGE`] and
/// [`OffsetBehavior::SMART_ALIGN_ON_CONTENT_SIZE_CHANGE`] are set, maintaining wins.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetBehavior(u8);

impl OffsetBehavior {
    pub const MAINTAIN_ON_BOUNDS_CHANGE: Self = Self(1 << 0);
    pub const MAINTAIN_ON_CONTENT_SIZE_CHANGE: Self = Self(1 << 1);
    pub const MAINTAIN_ON_KEYBOARD_FRAME_CHANGE: Self = Self(1 << 2);
    pub const SMART_ALIGN_ON_CONTENT_SIZE_CHANGE: Self = Self(1 << 3);

    const ALL_BITS: u8 = 0b1111;

    const NAMED: [(Self, &'static str); 4] = [
        (Self::MAINTAIN_ON_BOUNDS_CHANGE, "MAINTAIN_ON_BOUNDS_CHANGE"),
        (
            Self::MAINTAIN_ON_CONTENT_SIZE_CHANGE,
            "MAINTAIN_ON_CONTENT_SIZE_CHANGE",
        ),
        (
            Self::MAINTAIN_ON_KEYBOARD_FRAME_CHANGE,
            "MAINTAIN_ON_KEYBOARD_FRAME_CHANGE",
        ),
        (
            Self::SMART_ALIGN_ON_CONTENT_SIZE_CHANGE,
            "SMART_ALIGN_ON_CONTENT_SIZE_CHANGE",
        ),
    ];

    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builds a set from raw bits. Unknown bits are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every flag in `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for OffsetBehavior {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for OffsetBehavior {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl fmt::Debug for OffsetBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OffsetBehavior(")?;
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}

/// Bounds on the number of touches the pan gesture accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchCountBounds {
    pub min: usize,
    pub max: usize,
}

impl TouchCountBounds {
    /// Creates bounds, swapping `min` and `max` if they are inverted.
    pub fn new(min: usize, max: usize) -> Self {
        if min > max {
            swarn!(min, max, "TouchCountBounds: min exceeds max");
            debug_assert!(
                min <= max,
                "TouchCountBounds: min exceeds max (min={min}, max={max})"
            );
            return Self { min: max, max: min };
        }
        Self { min, max }
    }

    pub fn contains(&self, touches: usize) -> bool {
        (self.min..=self.max).contains(&touches)
    }
}

impl Default for TouchCountBounds {
    fn default() -> Self {
        Self {
            min: 1,
            max: usize::MAX,
        }
    }
}
