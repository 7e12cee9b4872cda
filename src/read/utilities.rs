use encoding_rs::SHIFT_JIS;
use nom::bytes::complete::take;
use nom::combinator::map;
use nom::IResult;

use crate::error::NameError;

/// Takes exactly `N` bytes into an array.
pub(crate) fn array<const N: usize>(i: &[u8]) -> IResult<&[u8], [u8; N]> {
    map(take(N), |bytes: &[u8]| {
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        buf
    })(i)
}

/// Decodes a null-terminated Shift-JIS field.
///
/// Bytes after the first terminator are ignored.
pub fn decode_fixed(field: &[u8]) -> Result<String, NameError> {
    let end = field
        .iter()
        .position(|&b| b == 0)
        .ok_or(NameError::Unterminated { width: field.len() })?;
    let text = &field[..end];
    SHIFT_JIS
        .decode_without_bom_handling_and_without_replacement(text)
        .map(|s| s.into_owned())
        .ok_or_else(|| NameError::InvalidEncoding(text.to_vec()))
}

/// Encodes `text` into `field`, zero padding the remainder.
pub fn encode_fixed(text: &str, field: &mut [u8]) -> Result<(), NameError> {
    let (bytes, _, had_errors) = SHIFT_JIS.encode(text);
    if had_errors {
        return Err(NameError::Unencodable(text.to_owned()));
    }
    // one byte is always left for the terminator
    if bytes.len() >= field.len() {
        return Err(NameError::TooLong {
            name: text.to_owned(),
            len: bytes.len(),
            width: field.len(),
        });
    }
    field[..bytes.len()].copy_from_slice(&bytes);
    for b in &mut field[bytes.len()..] {
        *b = 0;
    }
    Ok(())
}
