/// Deterministic, non-cryptographic 32-bit fingerprint of `text`.
///
/// This is the classic `h = h * 31 + c` rolling hash over the UTF-16 code
/// units of the input, wrapping on overflow. It holds no state between
/// calls, so the same text always hashes to the same value in every
/// process.
pub fn content_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Renders `value` in lowercase base 36 (`0` for zero).
pub(crate) fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(7);
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().map(|&b| b as char).collect()
}

/// `fragment_` followed by the base-36 magnitude of the hash of `content`.
pub(crate) fn fragment_name_for(content: &str) -> String {
    let hash = content_hash(content);
    format!("fragment_{}", to_base36(hash.unsigned_abs()))
}
