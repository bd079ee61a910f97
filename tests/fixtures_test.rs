#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use xml_report_check::{
    check_documents, normalize_document, utils::load_document, ErrorKind, Result,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_actual_fixture_matches_expected() -> Result<()> {
    let expected = load_document(&fixture("expected_report.xml"))?;
    let mut actual = load_document(&fixture("actual_report.xml"))?;
    normalize_document(&mut actual)?;
    check_documents(&expected, &actual)
}

#[test]
fn test_unnormalized_fixture_differs() -> Result<()> {
    let expected = load_document(&fixture("expected_report.xml"))?;
    let actual = load_document(&fixture("actual_report.xml"))?;
    let err = check_documents(&expected, &actual).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::NonNumericTime {
            value: "*".to_string()
        }
    );
    Ok(())
}

#[test]
fn test_mismatched_fixture_reports_detail() -> Result<()> {
    let expected = load_document(&fixture("expected_report.xml"))?;
    let mut actual = load_document(&fixture("mismatched_report.xml"))?;
    normalize_document(&mut actual)?;
    let err = check_documents(&expected, &actual).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::CdataMismatch { .. }));
    assert_eq!(
        err.path().to_string(),
        "testsuites/testsuite[name=FailedTest]/testcase[name=Fails]/\
         failure[message=gtest_xml_output_unittest_.cc:*\\nExpected equality of these values:\\n  1\\n  2]"
    );
    Ok(())
}

#[test]
fn test_missing_fixture_file() {
    let err = load_document(&fixture("no_such_report.xml"));
    assert!(matches!(
        err.as_ref().map_err(|e| e.kind()),
        Err(ErrorKind::Io(_))
    ));
}
