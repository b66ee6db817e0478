//! Precision Kinds
//!
//! The closed, totally ordered set of numeric representations.
//! Declaration order is promotion order: combining two kinds computes in the
//! greater one.

use std::fmt;

use crate::error::{VmError, VmResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrecisionKind {
    Int8,
    Int16,
    Int32,
    Float,
    Double,
}

impl PrecisionKind {
    pub const ALL: [PrecisionKind; 5] = [
        PrecisionKind::Int8,
        PrecisionKind::Int16,
        PrecisionKind::Int32,
        PrecisionKind::Float,
        PrecisionKind::Double,
    ];

    /// Kind used to compute a binary operation over `self` and `other`
    pub fn promote(self, other: PrecisionKind) -> PrecisionKind {
        self.max(other)
    }

    /// Source-level name, e.g. `int16`
    pub fn name(self) -> &'static str {
        match self {
            PrecisionKind::Int8 => "int8",
            PrecisionKind::Int16 => "int16",
            PrecisionKind::Int32 => "int32",
            PrecisionKind::Float => "float",
            PrecisionKind::Double => "double",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Raw numeric tag (0 = int8 ... 4 = double)
    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn from_tag(tag: u8) -> VmResult<Self> {
        Self::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(VmError::InvalidOperandKind(tag))
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            PrecisionKind::Int8 | PrecisionKind::Int16 | PrecisionKind::Int32
        )
    }
}

impl fmt::Display for PrecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_picks_the_wider_kind() {
        use PrecisionKind::{Double, Float, Int16, Int32, Int8};

        assert_eq!(Int8.promote(Int32), Int32);
        assert_eq!(Double.promote(Int16), Double);
        assert_eq!(Float.promote(Float), Float);
        assert!(PrecisionKind::Int32 < PrecisionKind::Float);
    }

    #[test]
    fn tags_round_trip_and_reject_unknown() {
        for kind in PrecisionKind::ALL {
            assert_eq!(PrecisionKind::from_tag(kind.tag()).unwrap(), kind);
        }
        assert_eq!(
            PrecisionKind::from_tag(5),
            Err(VmError::InvalidOperandKind(5))
        );
    }

    #[test]
    fn names_resolve() {
        assert_eq!(PrecisionKind::from_name("double"), Some(PrecisionKind::Double));
        assert_eq!(PrecisionKind::from_name("int64"), None);
    }
}
