//! Character reference decoding for text and attribute values.

use std::borrow::Cow;

const NAMED: &[(&str, char)] = &[
    ("amp", '&'),
    ("apos", '\''),
    ("copy", '\u{a9}'),
    ("gt", '>'),
    ("lt", '<'),
    ("nbsp", '\u{a0}'),
    ("quot", '"'),
    ("reg", '\u{ae}'),
];

/// Decodes `&name;`, `&#NN;` and `&#xHH;` references.
///
/// Unknown or malformed references are kept verbatim.
pub fn decode(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match decode_reference(&rest[1..]) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &rest[1 + consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Decodes the reference following an `&`, returning the character and the
/// number of bytes consumed (including the terminating `;`).
fn decode_reference(after_amp: &str) -> Option<(char, usize)> {
    let end = after_amp.find(';')?;
    let body = &after_amp[..end];

    if let Some(numeric) = body.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        let ch = char::from_u32(code).unwrap_or('\u{fffd}');
        return Some((ch, end + 1));
    }

    NAMED
        .iter()
        .find(|(name, _)| *name == body)
        .map(|(_, ch)| (*ch, end + 1))
}
