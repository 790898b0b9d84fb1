//! ISO 8601 internet date-time decoding for [`time::OffsetDateTime`].
//!
//! Accepted: `YYYY-MM-DDTHH:MM:SSZ` and `YYYY-MM-DDTHH:MM:SS±HH:MM`. Fractional seconds,
//! lowercase separators, and date-only forms are rejected.

use serde_json::Value;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::cast::cast;
use crate::{Decode, DecodeError, ErrorKind, ValueKind};

const EXPECTED: &str = "date-time string";

const UTC_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

const OFFSET_FORMAT: &[BorrowedFormatItem<'_>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);

fn parse(text: &str) -> Option<OffsetDateTime> {
    // `[year]` alone would also take a leading sign.
    if !text.as_bytes().first().is_some_and(u8::is_ascii_digit) {
        return None;
    }
    if text.ends_with('Z') {
        PrimitiveDateTime::parse(text, UTC_FORMAT)
            .ok()
            .map(PrimitiveDateTime::assume_utc)
    } else {
        OffsetDateTime::parse(text, OFFSET_FORMAT).ok()
    }
}

impl Decode<'_> for OffsetDateTime {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let text = cast::<&str>(value).map_err(|_| DecodeError::type_mismatch(EXPECTED, value))?;
        parse(text).ok_or_else(|| {
            tracing::trace!(text = %text, "string is not an internet date-time");
            DecodeError::new(ErrorKind::TypeMismatch {
                expected: EXPECTED,
                actual: ValueKind::String,
            })
        })
    }
}
