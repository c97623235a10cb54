use std::collections::HashSet;

use bedside_lexicon::{
    DrugClass, all_drugs, drugs_for_indication, drugs_in_class, filter_drugs, lookup,
};

#[test]
fn keys_are_unique_and_lowercase() {
    let mut seen = HashSet::new();
    for entry in all_drugs() {
        assert_eq!(entry.name, entry.name.to_lowercase());
        assert!(seen.insert(entry.name), "duplicate key {}", entry.name);
    }
    assert_eq!(seen.len(), 72);
}

#[test]
fn lookup_ignores_case_and_whitespace() {
    let entry = lookup("  Warfarin ").unwrap();
    assert_eq!(entry.indication, "Atrial Fibrillation / DVT/PE");
    assert!(lookup("prinivil").is_none());
}

#[test]
fn every_class_has_drugs() {
    for class in DrugClass::ALL {
        assert!(!drugs_in_class(class).is_empty(), "{class} is empty");
    }
    assert_eq!(drugs_in_class(DrugClass::Steroid).len(), 3);
}

#[test]
fn class_parses_from_id() {
    assert_eq!("neuro-psych".parse::<DrugClass>().unwrap(), DrugClass::NeuroPsych);
    assert!("antiviral".parse::<DrugClass>().is_err());
}

#[test]
fn reverse_lookup_by_indication() {
    let names: Vec<_> = drugs_for_indication("septic shock")
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["hydrocortisone"]);

    let asthma = drugs_for_indication("ASTHMA");
    assert_eq!(asthma.len(), 6);
    assert!(drugs_for_indication("   ").is_empty());
}

#[test]
fn blank_filters_apply_no_filter() {
    assert_eq!(filter_drugs(None, None).unwrap().len(), all_drugs().len());
    assert_eq!(filter_drugs(Some(""), Some("  ")).unwrap().len(), all_drugs().len());

    let steroids = filter_drugs(Some("steroid"), Some("")).unwrap();
    assert_eq!(steroids, drugs_in_class(DrugClass::Steroid));

    let names: Vec<_> = filter_drugs(Some("antibiotic"), Some("pseudomonal"))
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["piperacillin", "cefepime"]);

    assert!(filter_drugs(Some("antiviral"), None).is_err());
}
