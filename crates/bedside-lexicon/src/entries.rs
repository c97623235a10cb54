use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::LexiconError;

/// Therapeutic grouping of a drug in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DrugClass {
    /// Vasopressors and inotropes.
    Vasopressor,
    Antibiotic,
    /// Antihypertensives, antiarrhythmics, lipid-lowering and antithrombotics.
    Cardiovascular,
    Respiratory,
    Antidiabetic,
    /// Analgesics, sedatives, antiepileptics and psychiatric drugs.
    NeuroPsych,
    GastroRenal,
    Steroid,
}

impl DrugClass {
    pub const ALL: [DrugClass; 8] = [
        DrugClass::Vasopressor,
        DrugClass::Antibiotic,
        DrugClass::Cardiovascular,
        DrugClass::Respiratory,
        DrugClass::Antidiabetic,
        DrugClass::NeuroPsych,
        DrugClass::GastroRenal,
        DrugClass::Steroid,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DrugClass::Vasopressor => "vasopressor",
            DrugClass::Antibiotic => "antibiotic",
            DrugClass::Cardiovascular => "cardiovascular",
            DrugClass::Respiratory => "respiratory",
            DrugClass::Antidiabetic => "antidiabetic",
            DrugClass::NeuroPsych => "neuro_psych",
            DrugClass::GastroRenal => "gastro_renal",
            DrugClass::Steroid => "steroid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DrugClass::Vasopressor => "Vasopressors / Inotropes",
            DrugClass::Antibiotic => "Antibiotics",
            DrugClass::Cardiovascular => "Cardiovascular / Antihypertensives",
            DrugClass::Respiratory => "Respiratory",
            DrugClass::Antidiabetic => "Diabetics",
            DrugClass::NeuroPsych => "Neuro / Psych / Analgesics",
            DrugClass::GastroRenal => "GI / Renal",
            DrugClass::Steroid => "Steroids",
        }
    }
}

impl fmt::Display for DrugClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DrugClass {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        DrugClass::ALL
            .into_iter()
            .find(|c| c.id() == wanted)
            .ok_or_else(|| LexiconError::UnknownClass(s.to_string()))
    }
}

/// One row of the drug table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrugEntry {
    /// Lowercase generic name; the lookup key.
    pub name: &'static str,
    pub class: DrugClass,
    pub indication: &'static str,
}

const fn entry(name: &'static str, class: DrugClass, indication: &'static str) -> DrugEntry {
    DrugEntry {
        name,
        class,
        indication,
    }
}

use DrugClass::*;

static DRUGS: &[DrugEntry] = &[
    entry("norepinephrine", Vasopressor, "Shock / Severe Hypotension"),
    entry("epinephrine", Vasopressor, "Anaphylaxis / Cardiac Arrest / Shock"),
    entry("dopamine", Vasopressor, "Heart Failure / Shock"),
    entry("dobutamine", Vasopressor, "Heart Failure / Cardiogenic Shock"),
    entry("vasopressin", Vasopressor, "Vasodilatory Shock / Diabetes Insipidus"),
    entry("phenylephrine", Vasopressor, "Hypotension"),
    entry("milrinone", Vasopressor, "Heart Failure"),
    entry("amoxicillin", Antibiotic, "Bacterial Infection"),
    entry("augmentin", Antibiotic, "Bacterial Infection"),
    entry("azithromycin", Antibiotic, "Bacterial Infection (e.g. Pneumonia)"),
    entry("ceftriaxone", Antibiotic, "Severe Bacterial Infection"),
    entry("vancomycin", Antibiotic, "MRSA / Severe Gram-positive Infection"),
    entry("piperacillin", Antibiotic, "Pseudomonal / Severe Infection"),
    entry("tazobactam", Antibiotic, "Severe Infection (Beta-lactamase inhibitor)"),
    entry("meropenem", Antibiotic, "Severe / Resistant Bacterial Infection"),
    entry("cefepime", Antibiotic, "Pseudomonal / Severe Infection"),
    entry("metronidazole", Antibiotic, "Anaerobic Infection"),
    entry("ciprofloxacin", Antibiotic, "Bacterial Infection"),
    entry("levofloxacin", Antibiotic, "Bacterial Infection"),
    entry("lisinopril", Cardiovascular, "Hypertension / Heart Failure"),
    entry("losartan", Cardiovascular, "Hypertension"),
    entry("amlodipine", Cardiovascular, "Hypertension / Angina"),
    entry("metoprolol", Cardiovascular, "Hypertension / Angina / Heart Failure"),
    entry("carvedilol", Cardiovascular, "Heart Failure / Hypertension"),
    entry("diltiazem", Cardiovascular, "Hypertension / Arrhythmia (Afib)"),
    entry("amiodarone", Cardiovascular, "Arrhythmia (Afib/VT/VF)"),
    entry("atorvastatin", Cardiovascular, "Hyperlipidemia / Cardiovascular Disease"),
    entry("rosuvastatin", Cardiovascular, "Hyperlipidemia"),
    entry("clopidogrel", Cardiovascular, "Coronary Artery Disease / Stroke prevention"),
    entry("aspirin", Cardiovascular, "Coronary Artery Disease / Stroke prevention"),
    entry("heparin", Cardiovascular, "Deep Vein Thrombosis / Pulmonary Embolism (DVT/PE)"),
    entry("enoxaparin", Cardiovascular, "DVT/PE"),
    entry("warfarin", Cardiovascular, "Atrial Fibrillation / DVT/PE"),
    entry("apixaban", Cardiovascular, "Atrial Fibrillation / DVT/PE"),
    entry("rivaroxaban", Cardiovascular, "Atrial Fibrillation / DVT/PE"),
    entry("albuterol", Respiratory, "Asthma / COPD (Bronchospasm)"),
    entry("ipratropium", Respiratory, "COPD / Asthma"),
    entry("fluticasone", Respiratory, "Asthma / COPD"),
    entry("budesonide", Respiratory, "Asthma / COPD"),
    entry("salmeterol", Respiratory, "Asthma / COPD"),
    entry("formoterol", Respiratory, "Asthma / COPD"),
    entry("metformin", Antidiabetic, "Diabetes Mellitus Type 2"),
    entry("insulin", Antidiabetic, "Diabetes Mellitus"),
    entry("glipizide", Antidiabetic, "Diabetes Mellitus Type 2"),
    entry("empagliflozin", Antidiabetic, "Diabetes Mellitus Type 2 / Heart Failure"),
    entry("sitagliptin", Antidiabetic, "Diabetes Mellitus Type 2"),
    entry("acetaminophen", NeuroPsych, "Pain / Fever"),
    entry("paracetamol", NeuroPsych, "Pain / Fever"),
    entry("ibuprofen", NeuroPsych, "Pain / Inflammation"),
    entry("ketorolac", NeuroPsych, "Severe Pain"),
    entry("morphine", NeuroPsych, "Severe Pain"),
    entry("fentanyl", NeuroPsych, "Severe Pain / Anesthesia"),
    entry("oxycodone", NeuroPsych, "Moderate to Severe Pain"),
    entry("propofol", NeuroPsych, "Anesthesia / Sedation"),
    entry("midazolam", NeuroPsych, "Sedation / Anxiety / Seizures"),
    entry("dexmedetomidine", NeuroPsych, "ICU Sedation"),
    entry("levetiracetam", NeuroPsych, "Seizures / Epilepsy"),
    entry("phenytoin", NeuroPsych, "Seizures / Epilepsy"),
    entry("valproate", NeuroPsych, "Seizures / Bipolar Disorder"),
    entry("gabapentin", NeuroPsych, "Neuropathic Pain / Seizures"),
    entry("haloperidol", NeuroPsych, "Delirium / Schizophrenia"),
    entry("quetiapine", NeuroPsych, "Bipolar Disorder / Schizophrenia"),
    entry("fluoxetine", NeuroPsych, "Depression"),
    entry("sertraline", NeuroPsych, "Depression / Anxiety"),
    entry("pantoprazole", GastroRenal, "GERD / Peptic Ulcer Disease"),
    entry("omeprazole", GastroRenal, "GERD / Peptic Ulcer Disease"),
    entry("furosemide", GastroRenal, "Edema / Heart Failure"),
    entry("spironolactone", GastroRenal, "Heart Failure / Ascites"),
    entry("ondansetron", GastroRenal, "Nausea / Vomiting"),
    entry("prednisone", Steroid, "Inflammation / Autoimmune Disease"),
    entry("dexamethasone", Steroid, "Severe Inflammation / Brain Edema"),
    entry("hydrocortisone", Steroid, "Adrenal Insufficiency / Septic Shock"),
];

static BY_NAME: LazyLock<HashMap<&'static str, &'static DrugEntry>> =
    LazyLock::new(|| DRUGS.iter().map(|e| (e.name, e)).collect());

/// The whole table, in source order.
pub fn all_drugs() -> &'static [DrugEntry] {
    DRUGS
}

/// Case-insensitive lookup of a single generic name.
pub fn lookup(name: &str) -> Option<&'static DrugEntry> {
    let key = name.trim();
    BY_NAME
        .get(key)
        .or_else(|| BY_NAME.get(key.to_lowercase().as_str()))
        .copied()
}

pub fn drugs_in_class(class: DrugClass) -> Vec<&'static DrugEntry> {
    DRUGS.iter().filter(|e| e.class == class).collect()
}

/// Drugs whose indication text contains `query`, ignoring case.
pub fn drugs_for_indication(query: &str) -> Vec<&'static DrugEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    DRUGS
        .iter()
        .filter(|e| e.indication.to_lowercase().contains(&needle))
        .collect()
}

/// The table narrowed by class id and indication text, the way the list
/// views filter it. A missing or blank value applies no filter.
pub fn filter_drugs(
    class: Option<&str>,
    indication: Option<&str>,
) -> Result<Vec<&'static DrugEntry>, LexiconError> {
    let class = class
        .filter(|c| !c.trim().is_empty())
        .map(str::parse::<DrugClass>)
        .transpose()?;

    let candidates = match indication.filter(|q| !q.trim().is_empty()) {
        Some(query) => drugs_for_indication(query),
        None => DRUGS.iter().collect(),
    };

    Ok(candidates
        .into_iter()
        .filter(|d| class.is_none_or(|c| d.class == c))
        .collect())
}
