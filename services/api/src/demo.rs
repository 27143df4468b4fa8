use border_checkpoint::error::AppError;
use border_checkpoint::workflows::checkpoint::{InspectionConfig, Inspector, Verdict};
use chrono::NaiveDate;
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Documents expiring on or before this date (YYYY-MM-DD) are rejected.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) expiry_cutoff: Option<NaiveDate>,
    /// Print the rule tables after every bulletin batch.
    #[arg(long)]
    pub(crate) show_rules: bool,
}

/// A scripted day at the booth: bulletin batches interleaved with entrants.
struct DemoStep {
    bulletins: &'static [&'static str],
    entrants: &'static [DemoEntrant],
}

struct DemoEntrant {
    label: &'static str,
    documents: &'static [(&'static str, &'static str)],
}

const SHIFT: [DemoStep; 3] = [
    DemoStep {
        bulletins: &["Entrants require passport", "Allow citizens of Arstotzka, Obristan"],
        entrants: &[
            DemoEntrant {
                label: "Josef Costanza",
                documents: &[(
                    "passport",
                    "ID#: GC07D-FU8AR\nNATION: Arstotzka\nNAME: Costanza, Josef\nDOB: 1933.11.28\nSEX: M\nISS: East Grestin\nEXP: 1983.03.15",
                )],
            },
            DemoEntrant {
                label: "Guyovich Russian",
                documents: &[(
                    "access_permit",
                    "NAME: Guyovich, Russian\nNATION: Obristan\nID#: TE8M1-V3N7R\nPURPOSE: TRANSIT\nDURATION: 14 DAYS\nHEIGHT: 159cm\nWEIGHT: 60kg\nEXP: 1983.07.13",
                )],
            },
            DemoEntrant {
                label: "Roman Dolanski",
                documents: &[
                    (
                        "passport",
                        "ID#: WK9XA-LKM0Q\nNATION: United Federation\nNAME: Dolanski, Roman\nDOB: 1933.01.01\nSEX: M\nISS: Shingleton\nEXP: 1983.05.12",
                    ),
                    (
                        "grant_of_asylum",
                        "NAME: Dolanski, Roman\nNATION: United Federation\nID#: Y3MNC-TPWQ2\nDOB: 1933.01.01\nHEIGHT: 176cm\nWEIGHT: 71kg\nEXP: 1983.09.20",
                    ),
                ],
            },
        ],
    },
    DemoStep {
        bulletins: &[
            "Allow citizens of Antegria, Impor, Kolechia, Republia and United Federation",
            "Foreigners require access permit",
            "Wanted by the State: Ingrid Bennet",
        ],
        entrants: &[
            DemoEntrant {
                label: "Ingrid Bennet",
                documents: &[(
                    "passport",
                    "ID#: ZFPU9-QRIV9\nNATION: Impor\nNAME: Bennet, Ingrid\nDOB: 1960.05.07\nSEX: F\nISS: Tsunkeido\nEXP: 1981.01.01",
                )],
            },
            DemoEntrant {
                label: "Olec Borshiki",
                documents: &[
                    (
                        "passport",
                        "ID#: K8J9U-DO7W5\nNATION: Republia\nNAME: Borshiki, Olec\nDOB: 1944.08.07\nSEX: M\nISS: True Glorian\nEXP: 1985.11.22",
                    ),
                    (
                        "access_permit",
                        "NAME: Borshiki, Olec\nNATION: Republia\nID#: K8J9U-DO7W5\nPURPOSE: WORK\nDURATION: 3 MONTHS\nHEIGHT: 149cm\nWEIGHT: 45kg\nEXP: 1985.07.09",
                    ),
                    ("work_pass", "NAME: Borshiki, Olec\nFIELD: Fishing\nEXP: 1984.09.28"),
                ],
            },
            DemoEntrant {
                label: "Aleksandra Vincenza",
                documents: &[
                    (
                        "passport",
                        "ID#: XM3S1-DDMK1\nNATION: United Federation\nNAME: Vincenza, Aleksandra\nDOB: 1940.03.08\nSEX: F\nISS: Korista City\nEXP: 1983.02.05",
                    ),
                    (
                        "diplomatic_authorization",
                        "NATION: United Federation\nNAME: Vincenza, Aleksandra\nID#: XM3S1-DDMK1\nACCESS: Obristan",
                    ),
                ],
            },
        ],
    },
    DemoStep {
        bulletins: &[
            "Citizens of Arstotzka require ID card",
            "Citizens of Obristan, Antegria, Impor, Republia require cowpox vaccination",
            "Deny citizens of United Federation",
        ],
        entrants: &[
            DemoEntrant {
                label: "Sven Kravitz",
                documents: &[
                    (
                        "passport",
                        "ID#: EF69H-MFV7F\nNATION: Impor\nNAME: Kravitz, Sven\nDOB: 1937.02.08\nSEX: M\nISS: Tsunkeido\nEXP: 1984.05.11",
                    ),
                    (
                        "access_permit",
                        "NAME: Kravitz, Sven\nNATION: Impor\nID#: EF69H-MFV7F\nPURPOSE: WORK\nDURATION: 1 MONTH\nHEIGHT: 185cm\nWEIGHT: 98kg\nEXP: 1984.07.13",
                    ),
                ],
            },
            DemoEntrant {
                label: "Katherine Ortiz",
                documents: &[
                    (
                        "passport",
                        "ID#: FNP84-S2JCD\nNATION: Arstotzka\nNAME: Ortiz, Katherine\nDOB: 1951.12.13\nSEX: F\nISS: Paradizna\nEXP: 1982.12.25",
                    ),
                    (
                        "ID_card",
                        "NAME: Ortiz, Katherine\nDOB: 1951.12.13\nHEIGHT: 159cm\nWEIGHT: 61kg",
                    ),
                ],
            },
        ],
    },
];

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = InspectionConfig {
        expiry_cutoff: args
            .expiry_cutoff
            .unwrap_or_else(InspectionConfig::default_expiry_cutoff),
    };

    println!("Border checkpoint demo (expiry cutoff {})", config.expiry_cutoff);
    let mut inspector = Inspector::with_config(config);

    for (index, step) in SHIFT.iter().enumerate() {
        println!("\nBulletin batch {}", index + 1);
        for bulletin in step.bulletins {
            println!("  > {bulletin}");
        }
        inspector.receive_bulletin(&step.bulletins.join("\n"))?;

        if args.show_rules {
            println!("{}", serde_json::to_string_pretty(&inspector.snapshot())?);
        }

        for (label, verdict) in inspect_roster(&inspector, step.entrants)? {
            println!("  {label:<22} {verdict}");
        }
    }

    Ok(())
}

fn inspect_roster(
    inspector: &Inspector,
    entrants: &[DemoEntrant],
) -> Result<Vec<(&'static str, Verdict)>, AppError> {
    entrants
        .iter()
        .map(|entrant| {
            let verdict = inspector.inspect(entrant.documents.iter().copied())?;
            Ok::<_, AppError>((entrant.label, verdict))
        })
        .collect()
}
