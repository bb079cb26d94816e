//! Grouped alphanumeric passwords

use crate::combinator::collect::collect;
use crate::generator::Generator;
use crate::generator::boxed::BoxedGenerator;
use crate::generator::chars::alphanumeric;

/// A Safari-style password: three six-character groups joined by dashes
///
/// Each position draws uniformly across letters and digits, so the result
/// looks like `huwKun-1zyjxi-nyxseh`.
pub fn password() -> BoxedGenerator<String> {
    grouped_password(3, 6)
}

/// A password of `groups` dash-joined groups of `group_length` characters
pub fn grouped_password(groups: usize, group_length: usize) -> BoxedGenerator<String> {
    let segments: Vec<_> = (0..groups)
        .map(|_| alphanumeric().string(group_length))
        .collect();
    collect(segments)
        .map(|parts: Vec<String>| parts.join("-"))
        .boxed()
}
