//! Decoding of the converter's active-low parallel data bus
//!
//! The converter presents the channel address on its low `bits` lines
//! with active-low logic: a physical 0 reads as a logical 1. The
//! channel address is therefore the complement of the raw word, masked
//! to the configured resolution. One line above the address carries
//! the inhibit (discard-request) signal, also active-low; it is
//! decoded here but the sampling loop does not consult it, matching
//! the converter front end which does its own discarding.

/// Highest supported resolution in bits
pub const MAX_BITS: u8 = 14;

/// True for resolutions the bus can carry
pub fn valid_bits(bits: u8) -> bool {
    (1..=MAX_BITS).contains(&bits)
}

/// Mask covering the low `bits` address lines
pub fn mask(bits: u8) -> u16 {
    debug_assert!(valid_bits(bits));
    (1u16 << bits) - 1
}

/// Decode a raw bus word into a channel address.
///
/// Pure: the same word always selects the same channel. Lines above
/// the address field are masked away, so every word decodes to a valid
/// channel in `[0, 2^bits)`.
pub fn decode(raw: u16, bits: u8) -> u16 {
    !raw & mask(bits)
}

/// Encode a channel address as the raw word the bus would carry, with
/// all other lines (inhibit included) idle. Inverse of [`decode`] over
/// the address lines; used by simulated sources and tests.
pub fn encode(channel: u16, bits: u8) -> u16 {
    !(channel & mask(bits))
}

/// True when the word carries an asserted inhibit line
pub fn inhibit(raw: u16, bits: u8) -> bool {
    debug_assert!(bits < 16);
    raw & (1u16 << bits) == 0
}

/// Assert the inhibit line on an encoded word
pub fn with_inhibit(raw: u16, bits: u8) -> u16 {
    debug_assert!(bits < 16);
    raw & !(1u16 << bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_bounds() {
        assert!(!valid_bits(0));
        assert!(valid_bits(1));
        assert!(valid_bits(11));
        assert!(valid_bits(MAX_BITS));
        assert!(!valid_bits(MAX_BITS + 1));
        assert!(!valid_bits(16));
    }

    #[test]
    fn word_extremes() {
        for bits in 1..=MAX_BITS {
            // All lines low reads as the top channel, all high as zero
            assert_eq!(decode(0x0000, bits), mask(bits));
            assert_eq!(decode(0xffff, bits), 0);
        }
        // The concrete 11-bit case
        assert_eq!(decode(0x000, 11), 0x7ff);
        assert_eq!(decode(0x7ff, 11), 0);
    }

    #[test]
    fn decode_is_bounded() {
        // Exhaustively check all u16s at a few resolutions
        for bits in [1, 8, 10, 11, MAX_BITS] {
            for raw in u16::MIN..=u16::MAX {
                assert!(decode(raw, bits) <= mask(bits));
            }
        }
    }

    #[test]
    fn encode_decode_inverse() {
        for bits in [1, 8, 10, 11, MAX_BITS] {
            for channel in 0..=mask(bits) {
                assert_eq!(decode(encode(channel, bits), bits), channel);
            }
        }
    }

    #[test]
    fn stray_high_lines_masked() {
        // Lines above the address field never change the channel
        for raw in [0x0000u16, 0x1234, 0x7ff] {
            let ch = decode(raw, 11);
            assert_eq!(decode(raw | 0xf800, 11), ch);
        }
    }

    #[test]
    fn inhibit_line() {
        let raw = encode(42, 11);
        assert!(!inhibit(raw, 11));
        let raw = with_inhibit(raw, 11);
        assert!(inhibit(raw, 11));
        // Inhibit does not disturb the address
        assert_eq!(decode(raw, 11), 42);
    }
}
