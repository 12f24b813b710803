use itertools::Itertools;

/// How numbers are written into text.
///
/// `Plain` is what goes into anything machine readable: `.` as decimal
/// separator and no grouping.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum NumberFormat {
    #[default]
    Plain,
    Localized {
        decimal: char,
        grouping: Option<char>,
    },
}

impl NumberFormat {
    pub fn localized(decimal: char, grouping: char) -> Self {
        NumberFormat::Localized {
            decimal,
            grouping: Some(grouping),
        }
    }
}

/// Formats `value` with `decimals` digits after the separator.
///
/// Returns `None` for NaN and infinities.
pub fn format_number(value: f64, decimals: usize, mode: NumberFormat) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let plain = format!("{value:.decimals$}");
    // `format!` keeps the sign of values that round to zero.
    let plain = match plain.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => plain,
    };

    Some(match mode {
        NumberFormat::Plain => plain,
        NumberFormat::Localized { decimal, grouping } => localize(&plain, decimal, grouping),
    })
}

fn localize(plain: &str, decimal: char, grouping: Option<char>) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let integer = match grouping {
        Some(separator) => {
            let digits = integer.chars().collect_vec();
            let head = digits.len() % 3;
            let mut groups = vec![];
            if head > 0 {
                groups.push(digits[..head].iter().collect::<String>());
            }
            groups.extend(
                digits[head..]
                    .chunks(3)
                    .map(|chunk| chunk.iter().collect::<String>()),
            );
            groups.join(&separator.to_string())
        }
        None => integer.to_string(),
    };

    match fraction {
        Some(fraction) => format!("{sign}{integer}{decimal}{fraction}"),
        None => format!("{sign}{integer}"),
    }
}
