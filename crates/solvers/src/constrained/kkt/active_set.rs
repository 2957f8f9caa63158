/// Which of the constraints `x >= 0` (bit 0) and `y >= 0` (bit 1) are held
/// as equalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSet(u8);

impl ActiveSet {
    /// Every active set, in the order they are tried.
    pub const ALL: [Self; 4] = [Self(0), Self(1), Self(2), Self(3)];

    /// Returns the active set encoded by the low two bits of `bits`.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b11)
    }

    /// Returns the bitmask.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if `x = 0` is enforced.
    #[must_use]
    pub const fn x_active(self) -> bool {
        self.0 & 0b01 != 0
    }

    /// Returns `true` if `y = 0` is enforced.
    #[must_use]
    pub const fn y_active(self) -> bool {
        self.0 & 0b10 != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_map_to_constraints() {
        let flags: Vec<_> = ActiveSet::ALL
            .iter()
            .map(|set| (set.x_active(), set.y_active()))
            .collect();

        assert_eq!(
            flags,
            vec![(false, false), (true, false), (false, true), (true, true)]
        );
    }

    #[test]
    fn from_bits_masks_high_bits() {
        assert_eq!(ActiveSet::from_bits(0b110), ActiveSet::from_bits(0b10));
        assert_eq!(ActiveSet::from_bits(3).bits(), 3);
    }
}
