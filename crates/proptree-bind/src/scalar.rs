// Dweve PropTree - Ordered Property Trees and Text Encodings
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Text conversion for leaf values.

use chrono::NaiveDateTime;

/// Compact ISO 8601 form used for timestamps, with optional fractional
/// seconds: `20240131T100001` or `20240131T100001.250`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.f";

/// A value stored as the text of a single leaf.
pub trait Scalar: Sized {
    /// Parse leaf text; the error is a short reason.
    fn from_text(text: &str) -> Result<Self, String>;
    fn to_text(&self) -> String;
}

macro_rules! scalar_from_str {
    ($($ty:ty),+ $(,)?) => {$(
        impl Scalar for $ty {
            fn from_text(text: &str) -> Result<Self, String> {
                text.trim().parse::<$ty>().map_err(|e| e.to_string())
            }

            fn to_text(&self) -> String {
                self.to_string()
            }
        }
    )+};
}

scalar_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl Scalar for String {
    fn from_text(text: &str) -> Result<Self, String> {
        Ok(text.to_string())
    }

    fn to_text(&self) -> String {
        self.clone()
    }
}

impl Scalar for char {
    fn from_text(text: &str) -> Result<Self, String> {
        text.parse::<char>().map_err(|e| e.to_string())
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Scalar for bool {
    fn from_text(text: &str) -> Result<Self, String> {
        match text.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err("expected true, false, 1 or 0".to_string()),
        }
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Scalar for NaiveDateTime {
    fn from_text(text: &str) -> Result<Self, String> {
        NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT).map_err(|e| e.to_string())
    }

    fn to_text(&self) -> String {
        self.format(TIMESTAMP_FORMAT).to_string()
    }
}

crate::bind_scalar!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    char,
    bool,
    NaiveDateTime,
);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_numbers_trim_whitespace() {
        assert_eq!(u16::from_text(" 8080 "), Ok(8080));
        assert!(u8::from_text("256").is_err());
        assert_eq!(f64::from_text("0.25"), Ok(0.25));
        assert_eq!(1.5f32.to_text(), "1.5");
    }

    #[test]
    fn test_strings_verbatim() {
        assert_eq!(String::from_text("  padded "), Ok("  padded ".to_string()));
        assert_eq!(char::from_text("x"), Ok('x'));
        assert!(char::from_text("xy").is_err());
    }

    #[test]
    fn test_bool_forms() {
        assert_eq!(bool::from_text("true"), Ok(true));
        assert_eq!(bool::from_text("1"), Ok(true));
        assert_eq!(bool::from_text("0"), Ok(false));
        assert!(bool::from_text("yes").is_err());
        assert_eq!(false.to_text(), "false");
    }

    #[test]
    fn test_timestamps() {
        let whole = NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(10, 0, 1)
            .unwrap();
        assert_eq!(whole.to_text(), "20240131T100001");
        assert_eq!(NaiveDateTime::from_text("20240131T100001"), Ok(whole));

        let fraction = NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_milli_opt(10, 0, 1, 250)
            .unwrap();
        assert_eq!(NaiveDateTime::from_text("20240131T100001.250"), Ok(fraction));
        assert!(NaiveDateTime::from_text("2024-01-31 10:00:01").is_err());
    }
}
