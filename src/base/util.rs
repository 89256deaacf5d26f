pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_DASHES_COUNT: usize = 2;
pub const MIN_TERM_WIDTH: usize = 60;

pub const fn count_digits(n: u64) -> usize {
    if n >= 10000000000000000000 {
        return 20;
    }
    let mut count = 1;
    let mut ceil = 10;
    while n >= ceil {
        ceil *= 10;
        count += 1;
    }
    count
}

/// Writes a quantity stored in hundredths with two decimal places and comma
/// thousands separators, e.g. `123456` as `1,234.56`. Negative quantities get
/// a leading minus sign.
pub fn write_hundredths(f: &mut impl std::fmt::Write, hundredths: i64) -> std::fmt::Result {
    let mut n = hundredths.unsigned_abs();
    let mut bytes = Vec::<u8>::new();
    macro_rules! pop_digit {
        () => {
            bytes.push(b'0' + (n % 10) as u8);
            n /= 10
        };
    }

    pop_digit!();
    pop_digit!();
    bytes.push(b'.');
    pop_digit!();
    let mut i = 1;
    while n > 0 {
        if i % 3 == 0 {
            bytes.push(b',');
        }
        i += 1;
        pop_digit!();
    }
    if hundredths < 0 {
        bytes.push(b'-');
    }
    bytes.reverse();
    let s = std::str::from_utf8(&bytes).expect("all chars should be ascii");
    f.write_str(s)
}

/// Returns the length of what [`write_hundredths`] writes without building a
/// string.
pub fn hundredths_charlen(hundredths: i64) -> usize {
    let mut len = count_digits(hundredths.unsigned_abs().max(100));
    len += (len - 3) / 3; // commas
    len += 1; // decimal point
    if hundredths < 0 {
        len += 1;
    }
    len
}

/// Rounds a real quantity to the nearest hundredth.
pub fn to_hundredths(x: f64) -> i64 {
    (x * 100.0).round() as i64
}

/// Shortens `s` to at most `max_chars` characters, marking the cut with `~`.
pub fn truncate(s: &str, max_chars: usize) -> std::borrow::Cow<'_, str> {
    if s.chars().count() <= max_chars {
        return s.into();
    }
    let mut t = s
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect::<String>();
    t.push('~');
    t.into()
}
