use chrono::NaiveDate;

use crate::workflows::checkpoint::inspection::{EntrantDocuments, Inspector};

pub(super) const JOSEF_PASSPORT: &str = "ID#: GC07D-FU8AR\nNATION: Arstotzka\nNAME: Costanza, Josef\nDOB: 1933.11.28\nSEX: M\nISS: East Grestin\nEXP: 1983.03.15";

pub(super) const GUYOVICH_PERMIT: &str = "NAME: Guyovich, Russian\nNATION: Obristan\nID#: TE8M1-V3N7R\nPURPOSE: TRANSIT\nDURATION: 14 DAYS\nHEIGHT: 159cm\nWEIGHT: 60kg\nEXP: 1983.07.13";

pub(super) const ROMAN_PASSPORT: &str = "ID#: WK9XA-LKM0Q\nNATION: United Federation\nNAME: Dolanski, Roman\nDOB: 1933.01.01\nSEX: M\nISS: Shingleton\nEXP: 1983.05.12";

pub(super) const ROMAN_ASYLUM: &str = "NAME: Dolanski, Roman\nNATION: United Federation\nID#: Y3MNC-TPWQ2\nDOB: 1933.01.01\nHEIGHT: 176cm\nWEIGHT: 71kg\nEXP: 1983.09.20";

/// Opening bulletins of every shift: passports for everyone, all nations allowed, and two
/// wanted criminals.
pub(super) const SHIFT_OPENING: [&str; 5] = [
    "Entrants require passport",
    "Allow citizens of Arstotzka",
    "Wanted by the State: Marina Zyrus",
    "Allow citizens of Antegria, Impor, Kolechia, Obristan, Republia, United Federation",
    "Wanted by the State: Ingrid Bennet",
];

pub(super) fn cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(1982, 11, 22).expect("valid date")
}

pub(super) fn inspector_with(bulletins: &[&str]) -> Inspector {
    let mut inspector = Inspector::new();
    inspector
        .receive_bulletin(&bulletins.join("\n"))
        .expect("bulletins parse");
    inspector
}

pub(super) fn opened_shift(extra: &[&str]) -> Inspector {
    let mut bulletins = SHIFT_OPENING.to_vec();
    bulletins.extend_from_slice(extra);
    inspector_with(&bulletins)
}

pub(super) fn entrant(documents: &[(&str, &str)]) -> EntrantDocuments {
    EntrantDocuments::from_raw(documents.iter().copied()).expect("known document kinds")
}

pub(super) fn passport(id: &str, nation: &str, name: &str, expiry: &str) -> String {
    format!(
        "ID#: {id}\nNATION: {nation}\nNAME: {name}\nDOB: 1940.03.08\nSEX: F\nISS: Korista City\nEXP: {expiry}"
    )
}
