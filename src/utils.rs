//
// utils.rs
//
// @date Oct 19 2026
//

use embedded_can::Id;

pub fn id_to_raw(id: &Id) -> u32 {
    match id {
        Id::Standard(id) => id.as_raw() as u32,
        Id::Extended(id) => id.as_raw(),
    }
}

/// Parse a decimal or `0x` prefixed hexadecimal integer
pub fn parse_int(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };

    parsed.map_err(|_| format!("'{}' is not a valid integer", s))
}

/// Parse an integer that must fit in 16 bits
pub fn parse_u16(s: &str) -> Result<u16, String> {
    let value = parse_int(s)?;
    u16::try_from(value).map_err(|_| format!("{:#X} does not fit in 16 bits", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_can::{ExtendedId, StandardId};

    #[test]
    fn check_id_standard() {
        let id: Id = StandardId::new(0x1F1).expect("Failed to created ID").into();
        assert_eq!(id_to_raw(&id), 0x1F1u32)
    }

    #[test]
    fn check_id_extended() {
        let id: Id = ExtendedId::new(0x11F6).expect("Failed to created ID").into();
        assert_eq!(id_to_raw(&id), 0x11F6u32)
    }

    #[test]
    fn parse_decimal_and_hex() {
        assert_eq!(parse_int("1896"), Ok(1896));
        assert_eq!(parse_int("0x768"), Ok(0x768));
        assert_eq!(parse_int("0X1200"), Ok(0x1200));
        assert!(parse_int("0xZZ").is_err());
        assert!(parse_int("-1").is_err());
    }

    #[test]
    fn parse_sixteen_bit() {
        assert_eq!(parse_u16("0xFFFF"), Ok(0xFFFF));
        assert!(parse_u16("0x10000").is_err());
    }
}
