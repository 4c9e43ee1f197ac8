/// Width of a day label, enough bits for day 31.
pub const LABEL_WIDTH: usize = 5;

/// Base-2 representation of `value`, left-padded with zeros to `width`.
/// Longer representations are returned whole.
pub fn to_binary_padded(value: u32, width: usize) -> String {
    format!("{:0width$b}", value, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_width() {
        assert_eq!(to_binary_padded(5, 5), "00101");
        assert_eq!(to_binary_padded(1, LABEL_WIDTH), "00001");
        assert_eq!(to_binary_padded(31, 5), "11111");
    }

    #[test]
    fn never_truncates() {
        assert_eq!(to_binary_padded(63, 5), "111111");
        assert_eq!(to_binary_padded(0, 0), "0");
    }
}
