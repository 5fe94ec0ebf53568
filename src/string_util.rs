// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::ops::Range;

/// Length of the string in UTF-16 code units.
///
/// Ranges and minimum lengths are expressed in this unit, so ascii input
/// (the usual case for phone numbers) takes the shortcut.
pub fn utf16_len(s: &str) -> usize {
    if s.is_ascii() {
        return s.len();
    }
    s.encode_utf16().count()
}

/// Converts a `[start, start + length)` span of UTF-16 code units into a byte
/// range of `s`.
///
/// Returns `None` if the span overflows, ends past the string, or cuts a
/// surrogate pair in half.
pub fn utf16_span_to_bytes(s: &str, start: usize, length: usize) -> Option<Range<usize>> {
    let end = start.checked_add(length)?;
    if s.is_ascii() {
        return (end <= s.len()).then_some(start..end);
    }

    let mut byte_start = None;
    let mut byte_end = None;
    let mut units = 0;
    for (byte_idx, c) in s.char_indices() {
        if units == start {
            byte_start = Some(byte_idx);
        }
        if units == end {
            byte_end = Some(byte_idx);
            break;
        }
        units += c.len_utf16();
    }
    // offsets that equal the total length point past the last char
    if units == start && byte_start.is_none() {
        byte_start = Some(s.len());
    }
    if units == end && byte_end.is_none() {
        byte_end = Some(s.len());
    }

    Some(byte_start?..byte_end?)
}

#[cfg(test)]
mod tests {
    use crate::string_util::{utf16_len, utf16_span_to_bytes};

    #[test]
    fn test_utf16_len() {
        assert_eq!(utf16_len(""), 0);
        assert_eq!(utf16_len("13800138000"), 11);
        assert_eq!(utf16_len("电话"), 2);
        // U+1F4F1 MOBILE PHONE is a surrogate pair
        assert_eq!(utf16_len("\u{1F4F1}1"), 3);
    }

    #[test]
    fn test_ascii_spans() {
        assert_eq!(utf16_span_to_bytes("13800138000", 0, 11), Some(0..11));
        assert_eq!(utf16_span_to_bytes("13800138000", 3, 2), Some(3..5));
        assert_eq!(utf16_span_to_bytes("13800138000", 11, 0), Some(11..11));
        assert_eq!(utf16_span_to_bytes("13800138000", 0, 12), None);
        assert_eq!(utf16_span_to_bytes("13800138000", usize::MAX, 1), None);
    }

    #[test]
    fn test_non_ascii_spans() {
        // "电" is 3 bytes and one code unit
        assert_eq!(utf16_span_to_bytes("电13800138000", 1, 11), Some(3..14));
        assert_eq!(utf16_span_to_bytes("电13800138000", 0, 12), Some(0..14));
        assert_eq!(utf16_span_to_bytes("电1", 2, 0), Some(4..4));
        assert_eq!(utf16_span_to_bytes("电1", 1, 2), None);

        // the emoji takes two code units and four bytes
        let s = "\u{1F4F1}138";
        assert_eq!(utf16_span_to_bytes(s, 2, 3), Some(4..7));
        assert_eq!(utf16_span_to_bytes(s, 1, 2), None);
        assert_eq!(utf16_span_to_bytes(s, 0, 1), None);
    }
}
