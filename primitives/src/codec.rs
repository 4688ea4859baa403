//! JSON codec for stored records and range query results.
//!
//! Records are stored as compact JSON objects with exactly four string
//! fields in the order `manufacturer`, `timestamp`, `location`, `holder`.
//!
//! Range results are a JSON array of `{"Key": ..., "Record": ...}` where
//! `Record` is the stored value embedded verbatim:
//!
//! ```text
//! [{"Key":"1","Record":{"manufacturer":"925F",...}},{"Key":"10",...}]
//! ```

use serde::Serialize;
use serde_json::value::RawValue;

use crate::error::{CodecError, CodecResult};
use crate::record::Record;

/// One element of a range query result.
#[derive(Serialize)]
struct QueryResult<'a> {
    #[serde(rename = "Key")]
    key: &'a str,
    #[serde(rename = "Record")]
    record: &'a RawValue,
}

/// Encode a record to its stored JSON form.
pub fn encode_record(record: &Record) -> CodecResult<Vec<u8>> {
    Ok(serde_json::to_vec(record)?)
}

/// Decode stored bytes into a record.
pub fn decode_record(bytes: &[u8]) -> CodecResult<Record> {
    serde_json::from_slice(bytes).map_err(|e| CodecError::InvalidRecord(e.to_string()))
}

/// Assemble range scan entries into the JSON result array.
///
/// Each value must already be valid JSON; it is embedded without being
/// re-serialized. Entry order is preserved.
pub fn encode_query_results(entries: &[(String, Vec<u8>)]) -> CodecResult<Vec<u8>> {
    let mut results = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let text = std::str::from_utf8(value).map_err(|e| CodecError::InvalidJson {
            key: key.clone(),
            reason: e.to_string(),
        })?;
        let record: &RawValue =
            serde_json::from_str(text).map_err(|e| CodecError::InvalidJson {
                key: key.clone(),
                reason: e.to_string(),
            })?;
        results.push(QueryResult { key, record });
    }
    Ok(serde_json::to_vec(&results)?)
}
