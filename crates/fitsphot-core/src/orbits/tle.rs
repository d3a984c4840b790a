use crate::error::{FitsPhotError, Result};

/// Two-line element set with the name it is reported under.
#[derive(Clone, Debug, PartialEq)]
pub struct SatelliteTle {
    pub name: String,
    pub line1: String,
    pub line2: String,
}

/// Parse a TLE listing.
///
/// Each entry is an optional name line followed by element lines 1 and 2.
/// Unnamed entries are called after their catalogue number. Blank lines are
/// ignored. Field and checksum validation happens at propagation time.
pub fn parse_tle_set(text: &str) -> Result<Vec<SatelliteTle>> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .collect();

    let mut satellites = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let (name, first) = if is_element_line(lines[i], '1') {
            (None, i)
        } else {
            (Some(lines[i].trim()), i + 1)
        };

        let line1 = lines.get(first).filter(|l| is_element_line(l, '1'));
        let line2 = lines.get(first + 1).filter(|l| is_element_line(l, '2'));
        let (Some(line1), Some(line2)) = (line1, line2) else {
            return Err(FitsPhotError::Tle {
                name: name.unwrap_or(lines[i]).to_string(),
                reason: format!("expected element lines 1 and 2 after line {}", i + 1),
            });
        };

        let name = match name {
            Some(n) => n.to_string(),
            None => format!("NORAD {}", line1.get(2..7).unwrap_or("").trim()),
        };
        satellites.push(SatelliteTle {
            name,
            line1: line1.to_string(),
            line2: line2.to_string(),
        });
        i = first + 2;
    }

    Ok(satellites)
}

fn is_element_line(line: &str, number: char) -> bool {
    let mut chars = line.chars();
    chars.next() == Some(number) && chars.next() == Some(' ')
}
