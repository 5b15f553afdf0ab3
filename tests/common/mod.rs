use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub project: PathBuf,
}

impl TestEnv {
    /// A project directory with no files in it.
    pub fn empty() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let project = tmp.path().join("actor-core");
        fs::create_dir_all(&project).expect("create project dir");
        Self { _tmp: tmp, project }
    }

    /// A project directory containing every expected artifact.
    pub fn conforming() -> Self {
        let env = Self::empty();
        env.write("go.mod", "module actorcore\n\ngo 1.22\n");
        env.write("run_tests.go", RUNNER_SOURCE);
        env.write("src/actorcore.go", IMPL_SOURCE);
        env.write("tests/actorcore_test.go", TEST_SOURCE);
        env
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.project.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(path, content).expect("write fixture file");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("corecheck");
        cmd.arg("--root")
            .arg(self.project.to_str().expect("project path utf8"));
        cmd
    }

    pub fn run_json(&self) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn load_contract(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name))
        .expect("read contract schema");
    serde_json::from_str(&raw).expect("parse contract schema")
}

/// Go implementation source containing every expected fragment.
pub const IMPL_SOURCE: &str = r#"package actorcore

import (
	"math"
	"sort"
)

type ActorCoreImpl struct{}

func sanitizeFloat(v float64) float64 {
	if math.IsNaN(v) || math.IsInf(v, 0) {
		return 0
	}
	return v
}

func (a *ActorCoreImpl) ComposeCore(buckets map[string]Bucket) CoreStats {
	keys := make([]string, 0, len(buckets))
	for k := range buckets {
		keys = append(keys, k)
	}
	sort.Strings(keys)
	core := CoreStats{}
	for _, k := range keys {
		core.apply(buckets[k])
	}
	return core
}

func (a *ActorCoreImpl) BaseFromPrimary(p PrimaryStats) DerivedStats {
	return DerivedStats{
		Haste:      sanitizeFloat(1.0 + float64(p.Agility)*0.01),
		CritChance: sanitizeFloat(float64(p.Cunning) * 0.005),
	}
}

func (a *ActorCoreImpl) FinalizeDerived(base DerivedStats) DerivedStats {
	result := a.ClampDerived(base)
	result.Version = base.Version + 1
	return result
}

func (a *ActorCoreImpl) ClampDerived(base DerivedStats) DerivedStats {
	result := base
	result.Haste = math.Max(0.5, math.Min(2.0, result.Haste))
	result.CritChance = math.Max(0.0, math.Min(1.0, result.CritChance))
	for k, v := range result.Resists {
		result.Resists[k] = math.Max(0.0, math.Min(0.8, v))
	}
	return result
}
"#;

/// Go test source containing every expected test name.
pub const TEST_SOURCE: &str = r#"package actorcore

import "testing"

func TestComposeCore_Commutativity(t *testing.T) {}

func TestComposeCore_Idempotence(t *testing.T) {}

func TestBaseFromPrimary_Monotonicity(t *testing.T) {}

func TestClampDerived_Bounds(t *testing.T) {}

func TestGoldenTest_FixedBuckets(t *testing.T) {}

func TestFinalizeDerived_VersionBump(t *testing.T) {}
"#;

pub const RUNNER_SOURCE: &str = r#"package main

func main() {}
"#;
