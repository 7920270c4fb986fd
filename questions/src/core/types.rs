//! Shared parameter types for collection transforms.

/// Where `edit_option` writes the new option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSlot {
    /// Push onto the end of the options list.
    Append,
    /// Replace the option at this index.
    At(usize),
}

impl OptionSlot {
    /// Map a raw index where `-1` means append.
    ///
    /// Negative values other than `-1` are rejected.
    pub fn from_index(index: i64) -> Result<Self, String> {
        match index {
            -1 => Ok(OptionSlot::Append),
            i if i >= 0 => usize::try_from(i)
                .map(OptionSlot::At)
                .map_err(|_| format!("option index {} does not fit in usize", i)),
            i => Err(format!(
                "option index {} is invalid (use -1 to append or a non-negative index)",
                i
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_maps_sentinel_and_rejects_other_negatives() {
        assert_eq!(OptionSlot::from_index(-1), Ok(OptionSlot::Append));
        assert_eq!(OptionSlot::from_index(0), Ok(OptionSlot::At(0)));
        assert_eq!(OptionSlot::from_index(3), Ok(OptionSlot::At(3)));
        let err = OptionSlot::from_index(-2).unwrap_err();
        assert!(err.contains("-2"));
    }
}
