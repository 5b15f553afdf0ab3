//! Declarative rule tables for the audited files.
//!
//! Rules are plain data so auditors and tests can be driven by externally
//! constructed registries. Declaration order is display order.

use crate::domain::models::{CheckKind, CheckRule};

fn function(label: &str, signature: &str) -> CheckRule {
    CheckRule {
        label: label.to_string(),
        kind: CheckKind::Function,
        expected: vec![signature.to_string()],
    }
}

fn pattern(label: &str, fragment: &str) -> CheckRule {
    CheckRule {
        label: label.to_string(),
        kind: CheckKind::Pattern,
        expected: vec![fragment.to_string()],
    }
}

/// Rules evaluated against the implementation file.
///
/// `ClampDerived` has no signature rule of its own; its presence is evidenced
/// by the three clamp-bound fragments.
pub fn implementation_rules() -> Vec<CheckRule> {
    vec![
        function(
            "ComposeCore function",
            "func (a *ActorCoreImpl) ComposeCore(",
        ),
        function(
            "BaseFromPrimary function",
            "func (a *ActorCoreImpl) BaseFromPrimary(",
        ),
        function(
            "FinalizeDerived function",
            "func (a *ActorCoreImpl) FinalizeDerived(",
        ),
        pattern("stable sort in ComposeCore", "sort.Strings(keys)"),
        pattern(
            "version bump in FinalizeDerived",
            "result.Version = base.Version + 1",
        ),
        pattern(
            "Haste clamp bounds",
            "math.Max(0.5, math.Min(2.0, result.Haste))",
        ),
        pattern(
            "CritChance clamp bounds",
            "math.Max(0.0, math.Min(1.0, result.CritChance))",
        ),
        pattern("Resists clamp bounds", "math.Max(0.0, math.Min(0.8, v))"),
        CheckRule {
            label: "NaN/Inf sanitization".to_string(),
            kind: CheckKind::Pattern,
            expected: vec!["sanitizeFloat".to_string(), "math.IsNaN".to_string()],
        },
    ]
}

/// Rules evaluated against the test file.
pub fn test_rules() -> Vec<CheckRule> {
    vec![
        function(
            "TestComposeCore_Commutativity",
            "func TestComposeCore_Commutativity(",
        ),
        function(
            "TestComposeCore_Idempotence",
            "func TestComposeCore_Idempotence(",
        ),
        function(
            "TestBaseFromPrimary_Monotonicity",
            "func TestBaseFromPrimary_Monotonicity(",
        ),
        function("TestClampDerived_Bounds", "func TestClampDerived_Bounds("),
        pattern("TestGoldenTest_FixedBuckets", "TestGoldenTest_FixedBuckets"),
        pattern(
            "TestFinalizeDerived_VersionBump",
            "TestFinalizeDerived_VersionBump",
        ),
    ]
}
