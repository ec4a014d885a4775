/// Document-wide array survey used by the `analyze` CLI subcommand.
use jsonparse_core::{parse, survey, Decision, ScalarKind, SemanticKind};

#[test]
fn survey_lists_arrays_in_document_order() {
    let root = parse(r#"{"a": [1, null], "b": {"c": [[true], "x"]}, "d": 1}"#).unwrap();
    let report = survey(&root);
    let rows: Vec<(&str, usize, Decision)> = report
        .iter()
        .map(|r| (r.path.as_str(), r.len, r.decision))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("$.a", 2, Decision::UniformWithNulls(ScalarKind::Int)),
            ("$.b.c", 2, Decision::Mixed),
            ("$.b.c[0]", 1, Decision::Uniform(SemanticKind::Bool)),
        ]
    );
}

#[test]
fn survey_root_array() {
    let root = parse("[]").unwrap();
    let report = survey(&root);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].path, "$");
    assert_eq!(report[0].decision, Decision::Empty);
}

#[test]
fn survey_scalar_root_is_empty() {
    assert!(survey(&parse("3").unwrap()).is_empty());
}

#[test]
fn survey_serializes() {
    let root = parse("[[1], [2]]").unwrap();
    let json = serde_json::to_value(survey(&root)).unwrap();
    assert_eq!(json[0]["decision"]["decision"], "uniform");
    assert_eq!(json[0]["decision"]["kind"], "array");
    assert_eq!(json[1]["path"], "$[0]");
}
