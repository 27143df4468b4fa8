use super::common::*;
use crate::workflows::checkpoint::inspection::{
    InspectionConfig, Inspector, ParseError, Verdict,
};
use chrono::NaiveDate;

#[test]
fn home_citizen_with_passport_is_welcomed() {
    let inspector = inspector_with(&[
        "Entrants require passport",
        "Allow citizens of Arstotzka, Obristan",
    ]);

    let verdict = inspector
        .inspect([("passport", JOSEF_PASSPORT)])
        .expect("inspects");

    assert_eq!(verdict, Verdict::Glory);
    assert_eq!(verdict.to_string(), "Glory to Arstotzka.");
    assert!(verdict.is_cleared());
}

#[test]
fn missing_passport_denies_entry() {
    let inspector = inspector_with(&[
        "Entrants require passport",
        "Allow citizens of Arstotzka, Obristan",
    ]);

    let verdict = inspector
        .inspect([("access_permit", GUYOVICH_PERMIT)])
        .expect("inspects");

    assert_eq!(
        verdict.to_string(),
        "Entry denied: missing required passport."
    );
}

#[test]
fn mismatched_papers_lead_to_detainment() {
    let inspector = inspector_with(&[
        "Entrants require passport",
        "Allow citizens of Arstotzka, Obristan",
    ]);

    let verdict = inspector
        .inspect([("passport", ROMAN_PASSPORT), ("grant_of_asylum", ROMAN_ASYLUM)])
        .expect("inspects");

    assert_eq!(verdict.to_string(), "Detainment: ID number mismatch.");
}

#[test]
fn wanted_criminal_is_detained_before_any_other_check() {
    let inspector = inspector_with(&[
        "Entrants require passport",
        "Foreigners require access permit",
        "Citizens of Republia require polio vaccination",
        "Wanted by the State: Jonathan Reyes",
    ]);

    // Expired, unlisted nation, no access permit, no vaccination certificate.
    let expired = passport("IK7XV-XOC7Z", "Republia", "Reyes, Jonathan", "1981.07.21");
    let verdict = inspector
        .inspect([
            ("passport", expired.as_str()),
            ("access_permit", "NAME: Reyes, Jonathan\nID#: 00000-00000"),
        ])
        .expect("inspects");

    assert_eq!(
        verdict.to_string(),
        "Detainment: Entrant is a wanted criminal."
    );
}

#[test]
fn unlisted_nation_is_banned() {
    let inspector = inspector_with(&["Entrants require passport", "Allow citizens of Arstotzka"]);
    let kolechian = passport("GVM9G-DLV61", "Kolechia", "Leonov, Eduardo", "1983.06.28");

    let verdict = inspector
        .inspect([("passport", kolechian)])
        .expect("inspects");

    assert_eq!(verdict.to_string(), "Entry denied: citizen of banned nation.");
}

#[test]
fn expired_passport_denies_entry() {
    let inspector = inspector_with(&["Entrants require passport", "Allow citizens of Arstotzka"]);
    let expired = passport("GVM9G-DLV61", "Arstotzka", "Leonov, Eduardo", "1981.10.09");

    let verdict = inspector.inspect([("passport", expired)]).expect("inspects");

    assert_eq!(verdict, Verdict::EntryDenied("passport expired".to_string()));
}

#[test]
fn invalid_diplomatic_authorization_denies_entry() {
    let inspector = opened_shift(&["Foreigners require access permit"]);
    let diplomat = passport("XM3S1-DDMK1", "United Federation", "Vincenza, Aleksandra", "1983.02.05");

    let verdict = inspector
        .inspect([
            ("passport", diplomat.as_str()),
            (
                "diplomatic_authorization",
                "NATION: United Federation\nNAME: Vincenza, Aleksandra\nID#: XM3S1-DDMK1\nACCESS: Obristan",
            ),
        ])
        .expect("inspects");

    assert_eq!(
        verdict.to_string(),
        "Entry denied: invalid diplomatic authorization."
    );
}

#[test]
fn foreigners_need_an_access_permit() {
    let inspector = opened_shift(&["Foreigners require access permit"]);
    let traveller = passport("MLG3B-X9SOR", "Impor", "Yankov, Olga", "1984.02.15");

    let verdict = inspector
        .inspect([("passport", traveller)])
        .expect("inspects");

    assert_eq!(
        verdict.to_string(),
        "Entry denied: missing required access permit."
    );
}

#[test]
fn grant_of_asylum_stands_in_for_an_access_permit() {
    let inspector = opened_shift(&[
        "Foreigners require access permit",
        "Citizens of Arstotzka require ID card",
        "Deny citizens of United Federation",
    ]);

    let verdict = inspector
        .inspect([
            (
                "passport",
                "ID#: L1HL5-J4VHJ\nNATION: Obristan\nNAME: Watson, Vasily\nDOB: 1933.06.06\nSEX: M\nISS: Mergerous\nEXP: 1982.12.28",
            ),
            (
                "grant_of_asylum",
                "NAME: Watson, Vasily\nNATION: Obristan\nID#: L1HL5-J4VHJ\nDOB: 1933.06.06\nHEIGHT: 189cm\nWEIGHT: 104kg\nEXP: 1985.10.09",
            ),
        ])
        .expect("inspects");

    assert_eq!(verdict, Verdict::CauseNoTrouble);
    assert_eq!(verdict.to_string(), "Cause no trouble.");
}

#[test]
fn diplomatic_authorization_stands_in_for_an_access_permit() {
    let inspector = opened_shift(&["Foreigners require access permit"]);
    let diplomat = passport("XM3S1-DDMK1", "United Federation", "Vincenza, Aleksandra", "1983.02.05");

    let verdict = inspector
        .inspect([
            ("passport", diplomat.as_str()),
            (
                "diplomatic_authorization",
                "NATION: United Federation\nNAME: Vincenza, Aleksandra\nID#: XM3S1-DDMK1\nACCESS: Obristan, Arstotzka",
            ),
        ])
        .expect("inspects");

    assert_eq!(verdict, Verdict::CauseNoTrouble);
    assert_eq!(verdict.to_string(), "Cause no trouble.");
}

#[test]
fn passportless_entrant_passes_an_empty_allowance() {
    let inspector = inspector_with(&["Allow citizens of "]);

    let verdict = inspector
        .inspect([("work_pass", "NAME: Kravitz, Sven\nFIELD: Surveying\nEXP: 1985.11.17")])
        .expect("inspects");

    assert_eq!(verdict, Verdict::CauseNoTrouble);
}

#[test]
fn foreign_worker_with_matching_papers_is_cleared() {
    let inspector = opened_shift(&["Foreigners require access permit", "Workers require work pass"]);

    let verdict = inspector
        .inspect([
            (
                "passport",
                "ID#: K8J9U-DO7W5\nNATION: Republia\nNAME: Borshiki, Olec\nDOB: 1944.08.07\nSEX: M\nISS: True Glorian\nEXP: 1985.11.22",
            ),
            (
                "access_permit",
                "NAME: Borshiki, Olec\nNATION: Republia\nID#: K8J9U-DO7W5\nPURPOSE: WORK\nDURATION: 3 MONTHS\nHEIGHT: 149cm\nWEIGHT: 45kg\nEXP: 1985.07.09",
            ),
            ("work_pass", "NAME: Borshiki, Olec\nFIELD: Fishing\nEXP: 1984.09.28"),
        ])
        .expect("inspects");

    assert_eq!(verdict.to_string(), "Cause no trouble.");
}

#[test]
fn workers_requirement_never_matches_an_entrant() {
    let inspector = opened_shift(&["Workers require work pass"]);
    let labourer = passport("EF69H-MFV7F", "Impor", "Kravitz, Sven", "1984.05.11");

    let verdict = inspector
        .inspect([("passport", labourer)])
        .expect("inspects");

    assert_eq!(verdict, Verdict::CauseNoTrouble);
}

#[test]
fn home_citizens_need_their_id_card() {
    let inspector = opened_shift(&["Citizens of Arstotzka require ID card"]);

    let verdict = inspector
        .inspect([("passport", JOSEF_PASSPORT)])
        .expect("inspects");

    assert_eq!(
        verdict.to_string(),
        "Entry denied: missing required ID card."
    );
}

#[test]
fn vaccination_certificate_is_required_for_listed_nations() {
    let inspector = opened_shift(&[
        "Foreigners require access permit",
        "Citizens of Obristan, Antegria, Impor, Republia require cowpox vaccination",
    ]);
    let passport_text = "ID#: EF69H-MFV7F\nNATION: Impor\nNAME: Kravitz, Sven\nDOB: 1937.02.08\nSEX: M\nISS: Tsunkeido\nEXP: 1984.05.11";
    let permit = "NAME: Kravitz, Sven\nNATION: Impor\nID#: EF69H-MFV7F\nPURPOSE: WORK\nDURATION: 1 MONTH\nHEIGHT: 185cm\nWEIGHT: 98kg\nEXP: 1984.07.13";

    let verdict = inspector
        .inspect([("passport", passport_text), ("access_permit", permit)])
        .expect("inspects");
    assert_eq!(
        verdict.to_string(),
        "Entry denied: missing required certificate of vaccination."
    );

    let verdict = inspector
        .inspect([
            ("passport", passport_text),
            ("access_permit", permit),
            (
                "certificate_of_vaccination",
                "NAME: Kravitz, Sven\nID#: EF69H-MFV7F\nVACCINES: cowpox",
            ),
        ])
        .expect("inspects");
    assert_eq!(verdict, Verdict::CauseNoTrouble);
}

#[test]
fn document_requirements_are_checked_before_vaccinations_and_citizenship() {
    let inspector = inspector_with(&[
        "Deny citizens of Kolechia",
        "Citizens of Kolechia require polio vaccination",
        "Citizens of Kolechia require ID card",
    ]);
    let kolechian = passport("GVM9G-DLV61", "Kolechia", "Leonov, Eduardo", "1983.06.28");

    let verdict = inspector
        .inspect([("passport", kolechian)])
        .expect("inspects");

    assert_eq!(
        verdict.to_string(),
        "Entry denied: missing required ID card."
    );
}

#[test]
fn unknown_document_kind_aborts_the_inspection() {
    let inspector = inspector_with(&["Entrants require passport"]);

    match inspector.inspect([("entry_ticket", "NAME: Reyes, Jonathan")]) {
        Err(ParseError::UnknownDocumentKind(kind)) => assert_eq!(kind, "entry_ticket"),
        other => panic!("expected unknown document kind, got {other:?}"),
    }
}

#[test]
fn expiry_cutoff_follows_the_inspection_config() {
    let mut inspector = Inspector::with_config(InspectionConfig {
        expiry_cutoff: NaiveDate::from_ymd_opt(1983, 6, 1).expect("valid date"),
    });
    inspector
        .receive_bulletin("Allow citizens of Arstotzka")
        .expect("bulletins parse");

    let verdict = inspector
        .inspect([("passport", JOSEF_PASSPORT)])
        .expect("inspects");

    assert_eq!(verdict.to_string(), "Entry denied: passport expired.");
}
