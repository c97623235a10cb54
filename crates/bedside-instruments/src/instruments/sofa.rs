use crate::Instrument;
use crate::scoring::{Criterion, OrganSystem, RiskBand, ScoreRange};

/// SOFA: Sequential Organ Failure Assessment.
/// Six organ systems, each scored 0–4. Total 0–24.
pub struct Sofa;

pub const RESPIRATION: &str = "respiration";
pub const COAGULATION: &str = "coagulation";
pub const LIVER: &str = "liver";
pub const CARDIOVASCULAR: &str = "cardiovascular";
pub const CNS: &str = "cns";
pub const RENAL: &str = "renal";

impl Instrument for Sofa {
    fn id(&self) -> &str {
        "sofa"
    }

    fn name(&self) -> &str {
        "SOFA"
    }

    fn systems(&self) -> &[OrganSystem] {
        static SYSTEMS: std::sync::LazyLock<Vec<OrganSystem>> = std::sync::LazyLock::new(|| {
            vec![
                system(
                    RESPIRATION,
                    "Respiration",
                    "PaO2/FiO2 (mmHg)",
                    [
                        ("ge_400", "≥ 400"),
                        ("lt_400", "< 400"),
                        ("lt_300", "< 300"),
                        ("lt_200_supported", "< 200 with respiratory support"),
                        ("lt_100_supported", "< 100 with respiratory support"),
                    ],
                ),
                system(
                    COAGULATION,
                    "Coagulation",
                    "Platelets (×10³/µL)",
                    [
                        ("ge_150", "≥ 150"),
                        ("lt_150", "< 150"),
                        ("lt_100", "< 100"),
                        ("lt_50", "< 50"),
                        ("lt_20", "< 20"),
                    ],
                ),
                system(
                    LIVER,
                    "Liver",
                    "Bilirubin (mg/dL)",
                    [
                        ("lt_1_2", "< 1.2"),
                        ("1_2_to_1_9", "1.2 – 1.9"),
                        ("2_0_to_5_9", "2.0 – 5.9"),
                        ("6_0_to_11_9", "6.0 – 11.9"),
                        ("ge_12", "≥ 12.0"),
                    ],
                ),
                system(
                    CARDIOVASCULAR,
                    "Cardiovascular",
                    "MAP or vasopressors (µg/kg/min)",
                    [
                        ("map_ge_70", "MAP ≥ 70 mmHg"),
                        ("map_lt_70", "MAP < 70 mmHg"),
                        ("dopa_le_5", "Dopamine ≤ 5 or dobutamine (any dose)"),
                        (
                            "dopa_gt_5",
                            "Dopamine > 5 or epinephrine ≤ 0.1 or norepinephrine ≤ 0.1",
                        ),
                        (
                            "dopa_gt_15",
                            "Dopamine > 15 or epinephrine > 0.1 or norepinephrine > 0.1",
                        ),
                    ],
                ),
                system(
                    CNS,
                    "Central Nervous System",
                    "Glasgow Coma Scale",
                    [
                        ("gcs_15", "15"),
                        ("gcs_13_14", "13 – 14"),
                        ("gcs_10_12", "10 – 12"),
                        ("gcs_6_9", "6 – 9"),
                        ("gcs_lt_6", "< 6"),
                    ],
                ),
                system(
                    RENAL,
                    "Renal",
                    "Creatinine (mg/dL) or urine output",
                    [
                        ("lt_1_2", "< 1.2"),
                        ("1_2_to_1_9", "1.2 – 1.9"),
                        ("2_0_to_3_4", "2.0 – 3.4"),
                        ("3_5_to_4_9", "3.5 – 4.9 or urine output < 500 mL/day"),
                        ("ge_5", "≥ 5.0 or urine output < 200 mL/day"),
                    ],
                ),
            ]
        });
        &SYSTEMS
    }

    fn bands(&self) -> &[RiskBand] {
        static BANDS: std::sync::LazyLock<Vec<RiskBand>> = std::sync::LazyLock::new(|| {
            [
                (0, 6, "< 10%"),
                (7, 9, "15 – 20%"),
                (10, 12, "40 – 50%"),
                (13, 14, "50 – 60%"),
                (15, 15, "> 80%"),
                (16, 24, "> 90%"),
            ]
            .into_iter()
            .map(|(min_total, max_total, mortality)| RiskBand {
                min_total,
                max_total,
                mortality: mortality.to_string(),
            })
            .collect()
        });
        &BANDS
    }
}

/// Build a 0–4 table; options are listed in ascending point order.
fn system(id: &str, name: &str, measure: &str, options: [(&str, &str); 5]) -> OrganSystem {
    OrganSystem {
        id: id.to_string(),
        name: name.to_string(),
        measure: measure.to_string(),
        range: ScoreRange { min: 0, max: 4 },
        options: options
            .into_iter()
            .zip(0u8..)
            .map(|((id, label), points)| Criterion {
                id: id.to_string(),
                label: label.to_string(),
                points,
            })
            .collect(),
    }
}
