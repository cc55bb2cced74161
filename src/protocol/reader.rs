//! Line protocol reader.
//!
//! Each non-empty line is `key: value`. Recognized keys:
//!
//! ```text
//! depot: <lat>,<lng>          (any single non-numeric separator, e.g. `,` `|` `;`)
//! capacity: <int>
//! optimize: <0|1>             (anything but `0` means on)
//! pickup: <name>|<lat>|<lng>|<demand>
//! ```
//!
//! Lines without a colon and unknown keys are ignored. Pickup lines with
//! fewer than four fields are dropped. Bytes that are not valid UTF-8 are
//! replaced with U+FFFD rather than rejected. A numeric field that does not
//! parse aborts the whole read; this includes text after the longitude, so
//! `depot: 1.5,2.5,9` is an error.

use std::io::BufRead;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Pickup, Point, RoutingInput};

/// Parses routing input from a string.
///
/// # Examples
///
/// ```
/// use pickup_router::protocol::parse_input;
///
/// let input = parse_input("depot: 1.5|2.5\ncapacity: 8\npickup: Dock A|1.6|2.5|3\n").unwrap();
/// assert_eq!(input.capacity(), 8);
/// assert_eq!(input.depot().lat, 1.5);
/// assert_eq!(input.pickups()[0].name(), "Dock A");
/// ```
pub fn parse_input(text: &str) -> Result<RoutingInput> {
    read_input(text.as_bytes())
}

/// Reads routing input line by line until end of stream.
pub fn read_input<R: BufRead>(mut reader: R) -> Result<RoutingInput> {
    let mut input = RoutingInput::default();
    let mut buf = Vec::new();
    let mut line = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line += 1;
        let text = String::from_utf8_lossy(&buf);
        apply_line(&mut input, line, text.trim_end_matches(['\r', '\n']))?;
    }
    debug!(
        pickups = input.pickups().len(),
        capacity = input.capacity(),
        optimize = input.optimize(),
        "parsed routing input"
    );
    Ok(input)
}

fn apply_line(input: &mut RoutingInput, line: usize, text: &str) -> Result<()> {
    let Some((key, value)) = text.split_once(':') else {
        return Ok(());
    };
    let value = value.trim();

    match key.trim() {
        "depot" => input.set_depot(parse_depot(value, line)?),
        "capacity" => input.set_capacity(parse_field(value, line, "capacity")?),
        "optimize" => input.set_optimize(value != "0"),
        "pickup" => match parse_pickup(value, line)? {
            Some(pickup) => input.push_pickup(pickup),
            None => debug!(line, value, "dropping pickup line with fewer than 4 fields"),
        },
        _ => {}
    }
    Ok(())
}

fn parse_depot(value: &str, line: usize) -> Result<Point> {
    let separator = value
        .char_indices()
        .find(|&(_, c)| !is_number_char(c) && !c.is_whitespace());
    let Some((at, sep)) = separator else {
        return Err(Error::InvalidNumber {
            line,
            key: "depot",
            value: value.to_string(),
        });
    };
    Ok(Point::new(
        parse_field(&value[..at], line, "depot")?,
        parse_field(&value[at + sep.len_utf8()..], line, "depot")?,
    ))
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')
}

fn parse_pickup(value: &str, line: usize) -> Result<Option<Pickup>> {
    let parts: Vec<&str> = value.split('|').collect();
    let [name, lat, lng, demand, ..] = parts.as_slice() else {
        return Ok(None);
    };
    let location = Point::new(
        parse_field(lat, line, "pickup")?,
        parse_field(lng, line, "pickup")?,
    );
    Ok(Some(Pickup::new(
        *name,
        location,
        parse_field(demand, line, "pickup")?,
    )))
}

fn parse_field<T: FromStr>(raw: &str, line: usize, key: &'static str) -> Result<T> {
    let raw = raw.trim();
    raw.parse().map_err(|_| Error::InvalidNumber {
        line,
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_input() {
        let text = "depot: 40.0,-74.0\n\
                    capacity: 12\n\
                    optimize: 0\n\
                    pickup: A|40.1|-74.1|5\n\
                    pickup: B|40.2|-74.2|-2\n";
        let input = parse_input(text).expect("valid");
        assert_eq!(input.depot(), &Point::new(40.0, -74.0));
        assert_eq!(input.capacity(), 12);
        assert!(!input.optimize());
        assert_eq!(input.pickups().len(), 2);
        assert_eq!(input.pickups()[0].name(), "A");
        assert_eq!(input.pickups()[0].location(), &Point::new(40.1, -74.1));
        assert_eq!(input.pickups()[1].demand(), -2);
    }

    #[test]
    fn test_defaults_when_absent() {
        let input = parse_input("").expect("valid");
        assert_eq!(input, RoutingInput::default());
    }

    #[test]
    fn test_depot_pipe_separator() {
        let input = parse_input("depot: 1.25|-3.5").expect("valid");
        assert_eq!(input.depot(), &Point::new(1.25, -3.5));
    }

    #[test]
    fn test_depot_other_separators() {
        let input = parse_input("depot: 1.5;-2.5").expect("valid");
        assert_eq!(input.depot(), &Point::new(1.5, -2.5));
        let input = parse_input("depot: -1e-2 , 3").expect("valid");
        assert_eq!(input.depot(), &Point::new(-0.01, 3.0));
    }

    #[test]
    fn test_depot_trailing_text_rejected() {
        assert!(matches!(
            parse_input("depot: 1.5,2.5,9").unwrap_err(),
            Error::InvalidNumber { key: "depot", .. }
        ));
    }

    #[test]
    fn test_invalid_utf8_replaced_not_rejected() {
        let bytes: &[u8] = b"depot: 0,0\ncapacity: 3\n# note \xff\xfe\npickup: Caf\xe9|0|0.01|1\n";
        let input = read_input(bytes).expect("valid");
        assert_eq!(input.capacity(), 3);
        assert_eq!(input.pickups().len(), 1);
        assert_eq!(input.pickups()[0].name(), "Caf\u{FFFD}");
        assert_eq!(input.pickups()[0].demand(), 1);
    }

    #[test]
    fn test_invalid_utf8_in_number_still_fails() {
        let bytes: &[u8] = b"capacity: 3\xff\n";
        assert!(matches!(
            read_input(bytes).unwrap_err(),
            Error::InvalidNumber { line: 1, key: "capacity", .. }
        ));
    }

    #[test]
    fn test_last_line_without_newline() {
        let input = read_input(&b"capacity: 2\r\npickup: A|0|0|4"[..]).expect("valid");
        assert_eq!(input.capacity(), 2);
        assert_eq!(input.pickups()[0].demand(), 4);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let input = parse_input("  capacity  :   7  \r\n\toptimize:\t1 \n").expect("valid");
        assert_eq!(input.capacity(), 7);
        assert!(input.optimize());
    }

    #[test]
    fn test_optimize_values() {
        assert!(!parse_input("optimize: 0").expect("valid").optimize());
        assert!(parse_input("optimize: 1").expect("valid").optimize());
        assert!(parse_input("optimize: no").expect("valid").optimize());
        assert!(parse_input("optimize:").expect("valid").optimize());
    }

    #[test]
    fn test_ignores_unknown_and_malformed() {
        let text = "hello world\n\nspeed: 30\nDepot: 5,5\ncapacity: 3\n";
        let input = parse_input(text).expect("valid");
        assert_eq!(input.capacity(), 3);
        assert_eq!(input.depot(), &Point::default());
    }

    #[test]
    fn test_short_pickup_dropped() {
        let input = parse_input("pickup: A|1|2\npickup: B|1|2|3").expect("valid");
        assert_eq!(input.pickups().len(), 1);
        assert_eq!(input.pickups()[0].name(), "B");
    }

    #[test]
    fn test_pickup_extra_fields_ignored() {
        let input = parse_input("pickup: A|1|2|3|extra|more").expect("valid");
        assert_eq!(input.pickups()[0].demand(), 3);
    }

    #[test]
    fn test_pickup_name_verbatim() {
        let input = parse_input("pickup: Main St: Gate 2 |1| 2 | 3 ").expect("valid");
        assert_eq!(input.pickups()[0].name(), "Main St: Gate 2 ");
        assert_eq!(input.pickups()[0].demand(), 3);
    }

    #[test]
    fn test_last_value_wins() {
        let input = parse_input("capacity: 3\ncapacity: 9\n").expect("valid");
        assert_eq!(input.capacity(), 9);
    }

    #[test]
    fn test_invalid_capacity() {
        let err = parse_input("depot: 0,0\ncapacity: lots").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidNumber {
                line: 2,
                key: "capacity",
                ..
            }
        ));
    }

    #[test]
    fn test_capacity_out_of_range() {
        assert!(parse_input("capacity: 99999999999").is_err());
    }

    #[test]
    fn test_invalid_depot() {
        assert!(matches!(
            parse_input("depot: 1.0").unwrap_err(),
            Error::InvalidNumber { key: "depot", .. }
        ));
        assert!(matches!(
            parse_input("depot: north,2").unwrap_err(),
            Error::InvalidNumber { key: "depot", .. }
        ));
    }

    #[test]
    fn test_invalid_pickup_number() {
        let err = parse_input("pickup: A|1|2|three").unwrap_err();
        match err {
            Error::InvalidNumber { line, key, value } => {
                assert_eq!(line, 1);
                assert_eq!(key, "pickup");
                assert_eq!(value, "three");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
