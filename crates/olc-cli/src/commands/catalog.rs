use olc_events::{aliases, catalog, is_trigger_type, refresh_triggers};

use super::Record;

pub fn catalog_records() -> Vec<Record> {
    catalog()
        .iter()
        .map(|(ty, domain)| {
            Record::new()
                .field("type", *ty)
                .field("domain", domain.as_str())
                .field("refresh", is_trigger_type(ty))
        })
        .collect()
}

pub fn alias_records() -> Vec<Record> {
    aliases()
        .iter()
        .map(|(legacy, canonical)| {
            Record::new()
                .field("legacy", *legacy)
                .field("canonical", *canonical)
        })
        .collect()
}

pub fn trigger_records() -> Vec<Record> {
    refresh_triggers()
        .iter()
        .map(|ty| Record::new().field("type", *ty))
        .collect()
}
