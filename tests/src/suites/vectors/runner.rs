//! Walks a suite through its family handler and tallies the outcome

use super::dispatcher;
use super::model::TestSuite;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

/// Run every case of `suite`
///
/// A case marked `"expectedResult": "invalid"` passes when its handler
/// reports an error.
pub fn run_suite(suite: &TestSuite) -> Result<Tally, String> {
    let handler = dispatcher::handler(&suite.family)
        .ok_or_else(|| format!("no handler for family {}", suite.family))?;
    let mut tally = Tally::default();

    for group in &suite.groups {
        tracing::info!(
            family = %suite.family,
            group = group.group_id,
            algorithm = %group.algorithm,
            cases = group.tests.len(),
            "running group"
        );
        for case in &group.tests {
            let outcome = handler(group, case);
            match (outcome, case.expected_result.as_str()) {
                (Ok(()), "valid") | (Err(_), "invalid") => tally.passed += 1,
                (Ok(()), expected) => {
                    tally.failed += 1;
                    tracing::error!(case = case.test_id, expected, "case succeeded unexpectedly");
                }
                (Err(e), _) => {
                    tally.failed += 1;
                    tracing::error!(
                        case = case.test_id,
                        algorithm = %group.algorithm,
                        description = case.description.as_deref().unwrap_or(""),
                        "case failed: {}",
                        e
                    );
                }
            }
        }
    }

    tracing::info!(passed = tally.passed, failed = tally.failed, "suite finished");
    if tally.failed > 0 {
        Err(format!("{} of {} cases failed", tally.failed, tally.passed + tally.failed))
    } else {
        Ok(tally)
    }
}
