//! UUID-shaped hex strings

use crate::generator::Generator;
use crate::generator::boxed::BoxedGenerator;
use crate::generator::int_range::int_in;

/// A version-4-shaped UUID string
///
/// Sixteen random bytes with the version and variant bits pinned, formatted
/// as the usual 8-4-4-4-12 lowercase hex grouping.
pub fn uuid() -> BoxedGenerator<String> {
    int_in(0_u8, 255)
        .array(16)
        .map(format_uuid as fn(Vec<u8>) -> String)
        .boxed()
}

fn format_uuid(mut bytes: Vec<u8>) -> String {
    if let Some(byte) = bytes.get_mut(6) {
        *byte = (*byte & 0x0f) | 0x40;
    }
    if let Some(byte) = bytes.get_mut(8) {
        *byte = (*byte & 0x3f) | 0x80;
    }
    let mut formatted = String::with_capacity(36);
    for (index, byte) in bytes.iter().enumerate() {
        if matches!(index, 4 | 6 | 8 | 10) {
            formatted.push('-');
        }
        formatted.push_str(&format!("{byte:02x}"));
    }
    formatted
}
