/// Status high nibble of a MIDI Control Change message (any channel).
pub const CONTROL_CHANGE: u8 = 0xb0;

/// A decoded Control Change message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlChange {
    pub controller: u8,
    pub value: u8,
}

impl ControlChange {
    /// Decodes a raw MIDI message on any channel. Returns None for other
    /// message types and for malformed input (wrong length, data bytes with
    /// the high bit set).
    pub fn parse(bytes: &[u8]) -> Option<ControlChange> {
        match bytes {
            &[status, controller, value]
                if status & 0xf0 == CONTROL_CHANGE && controller < 0x80 && value < 0x80 =>
            {
                Some(ControlChange { controller, value })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_control_change() {
        assert_eq!(
            ControlChange::parse(&[0xb0, 21, 127]),
            Some(ControlChange {
                controller: 21,
                value: 127
            })
        );
    }

    #[test]
    fn matches_any_channel() {
        assert_eq!(
            ControlChange::parse(&[0xb7, 21, 0]),
            Some(ControlChange {
                controller: 21,
                value: 0
            })
        );
    }

    #[test]
    fn rejects_other_message_types() {
        // note on, note off, pitch bend
        assert_eq!(ControlChange::parse(&[0x90, 60, 100]), None);
        assert_eq!(ControlChange::parse(&[0x80, 60, 0]), None);
        assert_eq!(ControlChange::parse(&[0xe0, 0, 64]), None);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(ControlChange::parse(&[]), None);
        assert_eq!(ControlChange::parse(&[0xb0]), None);
        assert_eq!(ControlChange::parse(&[0xb0, 21]), None);
        assert_eq!(ControlChange::parse(&[0xb0, 21, 127, 0]), None);
    }

    #[test]
    fn rejects_out_of_range_data_bytes() {
        assert_eq!(ControlChange::parse(&[0xb0, 0x80, 0]), None);
        assert_eq!(ControlChange::parse(&[0xb0, 21, 0x80]), None);
    }
}
