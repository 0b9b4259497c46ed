use super::common::{Group, load_suite};
use draft4::validate;

const SUITES: [&str; 6] = [
    "type.yaml",
    "object.yaml",
    "array.yaml",
    "dependencies.yaml",
    "scalar.yaml",
    "ref.yaml",
];

/// Run every case of a suite, returning the number of failures.
fn run_groups(file: &str, groups: &[Group]) -> usize {
    let mut failed = 0;
    for group in groups {
        for case in &group.tests {
            let result = validate(&group.schema, &case.data);
            let mut case_ok = true;

            if result.is_valid() != case.valid {
                eprintln!(
                    "  FAIL [{}] {} / {}: expected valid={} got errors {:?} schema errors {:?}",
                    file,
                    group.description,
                    case.description,
                    case.valid,
                    result.errors,
                    result.schema_errors
                );
                case_ok = false;
            }

            if let Some(expected_errors) = &case.errors {
                for expected in expected_errors {
                    let found = result.errors.iter().any(|e| {
                        e.kind.as_str() == expected.kind
                            && expected.path.as_ref().is_none_or(|p| e.path == *p)
                    });
                    if !found {
                        eprintln!(
                            "  FAIL [{}] {} / {}: expected {} at {:?} not found in {:?}",
                            file,
                            group.description,
                            case.description,
                            expected.kind,
                            expected.path,
                            result.errors
                        );
                        case_ok = false;
                    }
                }
            }

            if !case_ok {
                failed += 1;
            }
        }
    }
    failed
}

#[test]
fn draft4_fixture_suites() {
    let mut total = 0;
    let mut failed = 0;
    for file in SUITES {
        let groups = load_suite(file);
        total += groups.iter().map(|g| g.tests.len()).sum::<usize>();
        failed += run_groups(file, &groups);
    }
    eprintln!("fixture suites: {} cases, {} failed", total, failed);
    assert_eq!(failed, 0, "{} fixture cases failed", failed);
}
