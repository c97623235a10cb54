use bedside_core::models::tool::{Tool, ToolInfo};
use bedside_instruments::get_instrument;
use bedside_instruments::scoring::Selection;
use bedside_interval::{Moment, elapsed_between_moments};
use bedside_lexicon::{DrugClass, drugs_in_class, extract};
use bedside_report::error::ReportError;
use bedside_report::render::{
    render_criteria, render_drug_table, render_elapsed, render_extraction, render_score,
    render_template, render_tools,
};
use jiff::civil::date;

#[test]
fn extraction_renders_notice_and_table() {
    let extraction = extract("Started lisinopril; continued apixaban.").unwrap();
    let text = render_extraction(&extraction).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "success: Found 2 drug(s) in the text!");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "| Detected Drug | Related Disease / Indication |");
    assert_eq!(lines[4], "| Lisinopril | Hypertension / Heart Failure |");
    assert_eq!(lines[5], "| Apixaban | Atrial Fibrillation / DVT/PE |");
    assert_eq!(lines.len(), 6);
}

#[test]
fn empty_extraction_renders_hint_only() {
    let extraction = extract("No medications today.").unwrap();
    let text = render_extraction(&extraction).unwrap();
    assert!(text.starts_with("info: No common drugs"));
    assert!(!text.contains('|'));
}

#[test]
fn drug_table_uses_class_labels() {
    let text = render_drug_table(&drugs_in_class(DrugClass::Steroid)).unwrap();
    assert!(text.starts_with("| Drug | Class | Indication |"));
    assert!(text.contains("| hydrocortisone | Steroids | Adrenal Insufficiency / Septic Shock |"));
    assert_eq!(text.lines().count(), 5);
}

#[test]
fn score_renders_total_mortality_and_breakdown() {
    let sofa = get_instrument("sofa").unwrap();
    let selections: Vec<Selection> = sofa
        .systems()
        .iter()
        .map(|s| Selection::new(s.id.clone(), s.options[2].id.clone()))
        .collect();
    let result = sofa.score(&selections).unwrap();
    let text = render_score(&result).unwrap();
    assert!(text.starts_with("SOFA score: 12 / 24\nEstimated mortality: 40 – 50%\n"));
    assert!(text.contains("| Liver | 2.0 – 5.9 | 2 |"));
    assert!(text.contains("| Central Nervous System | 10 – 12 | 2 |"));
}

#[test]
fn criteria_lists_every_option() {
    let sofa = get_instrument("sofa").unwrap();
    let text = render_criteria(sofa.as_ref()).unwrap();
    assert!(text.starts_with("SOFA criteria\n"));
    assert!(text.contains("Renal - Creatinine (mg/dL) or urine output (id: renal)"));
    assert!(text.contains("  4  lt_100_supported: < 100 with respiratory support"));
    // Header plus six system headings with five options each.
    assert_eq!(text.lines().filter(|l| l.starts_with("  ")).count(), 30);
}

#[test]
fn elapsed_renders_summary() {
    let start = Moment::new(date(2024, 1, 1), 8, 0);
    let end = Moment::new(date(2024, 1, 2), 9, 5);
    let elapsed = elapsed_between_moments(&start, &end).unwrap();
    let text = render_elapsed(&start, &end, &elapsed).unwrap();
    assert_eq!(
        text,
        "From 2024-01-01 08:00 to 2024-01-02 09:05\n\
         Elapsed: 1 days, 1 hours, 5 minutes\n\
         Total: 1625 minutes (27.08 hours, 97500 seconds)\n"
    );
}

#[test]
fn tools_render_one_block_each() {
    let tools: Vec<ToolInfo> = Tool::ALL.into_iter().map(ToolInfo::from).collect();
    let text = render_tools(&tools).unwrap();
    assert!(text.starts_with("drugs - Drug Extractor & Disease Mapper\n"));
    assert!(text.contains("interval - Date & Time Duration Calculator"));
}

#[test]
fn bad_template_is_a_parse_error() {
    let err = render_template("broken.txt", "{% for x in %}", &serde_json::json!({})).unwrap_err();
    assert!(matches!(err, ReportError::TemplateParse(_)));
}
