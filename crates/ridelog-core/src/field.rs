//! The four ride fields and the order they are asked for.

use std::fmt;

/// One of the four per-ride quantities, numbered 1..=4 for prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSelector {
    DayDistance,
    DayDuration,
    TotalDistance,
    TotalDuration,
}

impl FieldSelector {
    /// Canonical order, matching the prompt numbering.
    pub const ALL: [FieldSelector; 4] = [
        FieldSelector::DayDistance,
        FieldSelector::DayDuration,
        FieldSelector::TotalDistance,
        FieldSelector::TotalDuration,
    ];

    /// Look up a selector by its prompt number.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::DayDistance),
            2 => Some(Self::DayDuration),
            3 => Some(Self::TotalDistance),
            4 => Some(Self::TotalDuration),
            _ => None,
        }
    }

    /// The prompt number of this selector.
    pub fn number(&self) -> u8 {
        match self {
            Self::DayDistance => 1,
            Self::DayDuration => 2,
            Self::TotalDistance => 3,
            Self::TotalDuration => 4,
        }
    }

    /// Label shown in the start-selector menu.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DayDistance => "Day Kilometres",
            Self::DayDuration => "Day Time",
            Self::TotalDistance => "Total Kilometres",
            Self::TotalDuration => "Total Time",
        }
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.number(), self.label())
    }
}

/// A rotation of the canonical field order. Always a permutation of all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOrder([FieldSelector; 4]);

impl FieldOrder {
    pub fn iter(&self) -> impl Iterator<Item = FieldSelector> + '_ {
        self.0.iter().copied()
    }
}

/// Rotate the canonical order so that it begins at `start`, wrapping 4 -> 1.
pub fn rotate(start: FieldSelector) -> FieldOrder {
    let offset = usize::from(start.number() - 1);
    FieldOrder(std::array::from_fn(|i| {
        FieldSelector::ALL[(offset + i) % 4]
    }))
}
