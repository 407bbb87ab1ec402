//! End-to-end tests: PHP source in, verdicts and reports out.

mod common;

use common::{check_php, kinds, result_for};
use phpdoc_standards::checker::{CheckError, Checker, SourceError, SourceIndex};
use phpdoc_standards::report::RunReport;
use phpdoc_standards::types::{CallableId, ViolationKind};

#[test]
fn compliant_wordpress_style_file_passes() {
    let checks = check_php(
        "<?php\n\
         /**\n\
          * Queries posts.\n\
          *\n\
          * @param array $args {\n\
          *     Optional. Array of query arguments.\n\
          *\n\
          *     @type string $orderby Sort field.\n\
          * }\n\
          */\n\
         function query_posts( $args = array() ) {}\n\
         \n\
         /**\n\
          * Registers a handler.\n\
          *\n\
          * @param string   $name     The handler name.\n\
          * @param callable $handler  The handler. Optional. Default null.\n\
          */\n\
         function register_handler( $name, callable $handler = null ) {}\n",
    );

    assert_eq!(checks.len(), 2);
    for check in &checks {
        let verdict = check.result.as_ref().unwrap();
        assert!(
            verdict.is_compliant(),
            "expected `{}` to be compliant, got {:?}",
            check.id,
            verdict
        );
    }
}

#[test]
fn violations_are_collected_per_callable() {
    let checks = check_php(
        "<?php\n\
         function undocumented( $x ) {}\n\
         \n\
         /**\n\
          * Renames a thing.\n\
          *\n\
          * @param string $old The old name.\n\
          */\n\
         function rename_thing( $old, $new ) {}\n\
         \n\
         class Store {\n\
             /**\n\
              * Saves a value.\n\
              *\n\
              * @param string $key   The key.\n\
              * @param mixed  $value The value. Optional. Default null.\n\
              */\n\
             public function save( $key, $value = null ) {}\n\
         }\n",
    );

    assert_eq!(checks.len(), 3);

    let undocumented = result_for(&checks, "undocumented()");
    assert_eq!(
        kinds(undocumented.result.as_ref().unwrap()),
        vec![ViolationKind::MissingDocComment]
    );

    let renamed = result_for(&checks, "rename_thing()");
    assert_eq!(
        kinds(renamed.result.as_ref().unwrap()),
        vec![ViolationKind::ParamCountMismatch]
    );

    let save = result_for(&checks, "Store::save()");
    assert!(save.result.as_ref().unwrap().is_compliant());
}

#[test]
fn optional_and_default_rules_fire_end_to_end() {
    let checks = check_php(
        "<?php\n\
         /**\n\
          * Formats a number.\n\
          *\n\
          * @param int $number   The number.\n\
          * @param int $decimals Number of decimal points.\n\
          */\n\
         function format_number( $number, $decimals = 2 ) {}\n",
    );

    let verdict = checks[0].result.as_ref().unwrap();
    assert_eq!(
        kinds(verdict),
        vec![
            ViolationKind::MissingOptionalMarker,
            ViolationKind::MissingDefaultValueNote,
        ]
    );
    let messages: Vec<&str> = verdict
        .violations()
        .iter()
        .map(|v| v.message.as_str())
        .collect();
    assert_eq!(
        messages[0],
        "The @param description for the optional `$decimals` parameter of `format_number()` \
         should state that it is optional."
    );
}

#[test]
fn malformed_tag_faults_instead_of_reporting_a_violation() {
    let checks = check_php(
        "<?php\n\
         /**\n\
          * Does a thing.\n\
          *\n\
          * @param int\n\
          */\n\
         function broken_tag( $x ) {}\n",
    );

    match &checks[0].result {
        Err(CheckError::MalformedTag(fault)) => {
            assert_eq!(fault.callable, "broken_tag()");
            assert_eq!(fault.raw, "int");
        }
        other => panic!("expected a malformed-tag fault, got {other:?}"),
    }
}

#[test]
fn unknown_callable_is_a_not_found_fault() {
    let checker = Checker::from_php("<?php function known() {}\n");
    let err = checker
        .check(&CallableId::function("unknown"))
        .unwrap_err();
    assert_eq!(
        err,
        CheckError::Source(SourceError::NotFound("unknown()".to_string()))
    );
}

#[test]
fn duplicate_callables_keep_first_registration() {
    let mut index = SourceIndex::new();
    index.add_file("<?php /** First copy. */ function dup() {}\n");
    index.add_file("<?php function dup( $changed ) {}\n");

    assert_eq!(index.len(), 1);
    let checker = Checker::new(index);
    // The first copy has no parameters and a summary: compliant.
    let verdict = checker.check(&CallableId::function("dup")).unwrap();
    assert!(verdict.is_compliant());
}

#[test]
fn checking_a_file_read_from_disk() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("functions.php");
    std::fs::write(
        &path,
        "<?php\n/**\n * Greets.\n */\nfunction greet() {}\n",
    )
    .expect("failed to write PHP file");

    let content = std::fs::read_to_string(&path).expect("failed to read PHP file");
    let checks = check_php(&content);
    assert_eq!(checks.len(), 1);
    assert!(checks[0].result.as_ref().unwrap().is_compliant());
}

#[test]
fn report_renders_text_and_json() {
    let checks = check_php("<?php function nope( $x ) {}\n");

    let mut report = RunReport::new();
    report.add_file("src/nope.php", &checks);

    assert!(report.has_findings());
    assert_eq!(report.checked, 1);
    assert_eq!(report.findings, 1);

    let text = report.render_text();
    assert!(text.contains("src/nope.php: The docblock for `nope()` should not be missing."));
    assert!(text.contains("checked 1 callable(s) in 1 file(s): 1 finding(s)"));

    let json: serde_json::Value =
        serde_json::from_str(&report.to_json().unwrap()).expect("report JSON should parse");
    assert_eq!(json["files"][0]["path"], "src/nope.php");
    assert_eq!(
        json["files"][0]["findings"][0]["violation"],
        "MissingDocComment"
    );
    assert_eq!(json["files"][0]["findings"][0]["callable"], "nope()");
}

#[test]
fn report_counts_faults_as_findings() {
    let checks = check_php(
        "<?php\n\
         /**\n\
          * Broken.\n\
          *\n\
          * @param int\n\
          */\n\
         function broken( $x ) {}\n",
    );

    let mut report = RunReport::new();
    report.add_file("src/broken.php", &checks);

    assert_eq!(report.findings, 1);
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    // Faults carry no violation kind.
    assert!(json["files"][0]["findings"][0].get("violation").is_none());
    assert!(
        json["files"][0]["findings"][0]["message"]
            .as_str()
            .unwrap()
            .contains("malformed @param tag")
    );
}

#[test]
fn compliant_file_keeps_an_empty_findings_list() {
    let checks = check_php("<?php /** Fine. */ function fine() {}\n");

    let mut report = RunReport::new();
    report.add_file("src/fine.php", &checks);

    assert!(!report.has_findings());
    assert_eq!(report.files.len(), 1);
    assert!(report.files[0].findings.is_empty());
}
