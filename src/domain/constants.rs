//! Fixed relative paths of the audited Actor Core project.

/// Implementation file audited for function/fragment presence.
pub const IMPL_FILE: &str = "src/actorcore.go";

/// Test file audited for named test cases.
pub const TEST_FILE: &str = "tests/actorcore_test.go";

/// Module manifest, probed for existence only.
pub const MODULE_MANIFEST: &str = "go.mod";

/// Secondary test runner, probed for existence only.
pub const TEST_RUNNER: &str = "run_tests.go";
