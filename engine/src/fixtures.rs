//! Seed records written by `initLedger`.

use drugtrace_primitives::Record;

/// Number of seed records.
pub const SEED_COUNT: usize = 10;

/// The fixed seed records, in key order (`"1"` first).
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::new("925F", "1504054225", "67.0006, -70.5476", "KVS"),
        Record::new("M83T", "1504057825", "91.2395, -49.4594", "Walyellows"),
        Record::new("T012", "1493517025", "58.0148, 59.01391", "Kardinal"),
        Record::new("P490", "1496105425", "-45.0945, 0.7949", "RX Health"),
        Record::new("S439", "1493512301", "-107.6043, 19.5003", "AmeriDrug"),
        Record::new("J205", "1494117101", "-155.2304, -15.8723", "Internet Pharmacy"),
        Record::new("S22L", "1496104301", "103.8842, 22.1277", "RightAid"),
        Record::new("EI89", "1485066691", "-132.3207, -34.0983", "Doctor's Office"),
        // The stray bracket is part of the deployed seed data.
        Record::new("129R", "1485153091", "153.0054, 12.6429", "Anytown Hospital]"),
        Record::new("49W4", "1487745091", "51.9435, 8.2735", "Distributor X"),
    ]
}

/// Key for the seed record at zero-based `index`.
pub fn seed_key(index: usize) -> String {
    (index + 1).to_string()
}
