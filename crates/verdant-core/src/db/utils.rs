//! Row decoding helpers shared by the query modules.

use std::str::FromStr;

use jiff::{civil::Date, Timestamp};
use rusqlite::types::Type;

/// Decode a TEXT column holding an RFC 3339 timestamp.
pub(super) fn timestamp_column(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Decode a TEXT column holding an ISO 8601 calendar date.
pub(super) fn date_column(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Date> {
    row.get::<_, String>(index)?
        .parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Decode a nullable TEXT column holding an ISO 8601 calendar date.
pub(super) fn optional_date_column(
    row: &rusqlite::Row,
    index: usize,
) -> rusqlite::Result<Option<Date>> {
    row.get::<_, Option<String>>(index)?
        .map(|s| {
            s.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
            })
        })
        .transpose()
}

/// Decode a nullable TEXT column holding an RFC 3339 timestamp.
pub(super) fn optional_timestamp_column(
    row: &rusqlite::Row,
    index: usize,
) -> rusqlite::Result<Option<Timestamp>> {
    row.get::<_, Option<String>>(index)?
        .map(|s| {
            s.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
            })
        })
        .transpose()
}

/// Decode a TEXT status column through the type's `FromStr`.
pub(super) fn status_column<T>(row: &rusqlite::Row, index: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    let text: String = row.get(index)?;
    text.parse::<T>().map_err(|message| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
        )
    })
}

/// Decode a nullable TEXT status column through the type's `FromStr`.
pub(super) fn optional_status_column<T>(
    row: &rusqlite::Row,
    index: usize,
) -> rusqlite::Result<Option<T>>
where
    T: FromStr<Err = String>,
{
    row.get::<_, Option<String>>(index)?
        .map(|text| {
            text.parse::<T>().map_err(|message| {
                rusqlite::Error::FromSqlConversionFailure(
                    index,
                    Type::Text,
                    Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
                )
            })
        })
        .transpose()
}

/// Decode a nullable INTEGER column into an optional u64 ID.
pub(super) fn optional_id_column(
    row: &rusqlite::Row,
    index: usize,
) -> rusqlite::Result<Option<u64>> {
    Ok(row.get::<_, Option<i64>>(index)?.map(|id| id as u64))
}
