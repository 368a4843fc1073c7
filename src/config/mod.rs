//! Test configuration loaded from the charm's `tests/tests.yaml`.

use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory holding bundle descriptions, relative to the charm root
pub const BUNDLE_DIR: &str = "./tests/bundles/";

/// Config file read when `--config` is not given
pub const DEFAULT_TEST_CONFIG: &str = "./tests/tests.yaml";

/// Functional test configuration for one charm.
///
/// Every list may be written either as a YAML sequence or as a single string:
///
/// ```yaml
/// charm_name: mycharm
/// gate_bundles:
///   - xenial
///   - bionic
/// smoke_bundles: bionic
/// configure:
///   - juju.wait_for_active
/// tests:
///   - juju.applications_active
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TestConfig {
    #[serde(default)]
    pub charm_name: Option<String>,

    #[serde(default, deserialize_with = "one_or_many::optional")]
    pub gate_bundles: Option<Vec<String>>,

    #[serde(default, deserialize_with = "one_or_many::optional")]
    pub smoke_bundles: Option<Vec<String>>,

    #[serde(default, deserialize_with = "one_or_many::optional")]
    pub dev_bundles: Option<Vec<String>>,

    /// Configuration routine identifiers, run in order after deploy
    #[serde(default, deserialize_with = "one_or_many::required")]
    pub configure: Vec<String>,

    /// Test case identifiers, run in order after configure
    #[serde(default, deserialize_with = "one_or_many::required")]
    pub tests: Vec<String>,
}

impl TestConfig {
    /// Parse a config document held in memory.
    pub fn from_yaml(source: &str, path: &Path) -> Result<Self> {
        let config: TestConfig =
            serde_yaml::from_str(source).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if config.gate_bundles.is_none() {
            return Err(ConfigError::MissingKey { key: "gate_bundles" }.into());
        }

        Ok(config)
    }

    /// Bundles listed under `gate_bundles`.
    pub fn gate_bundles(&self) -> Result<&[String]> {
        Self::bundle_list(&self.gate_bundles, "gate_bundles")
    }

    /// Bundles listed under `smoke_bundles`.
    pub fn smoke_bundles(&self) -> Result<&[String]> {
        Self::bundle_list(&self.smoke_bundles, "smoke_bundles")
    }

    /// Bundles listed under `dev_bundles`.
    pub fn dev_bundles(&self) -> Result<&[String]> {
        Self::bundle_list(&self.dev_bundles, "dev_bundles")
    }

    fn bundle_list<'a>(list: &'a Option<Vec<String>>, key: &'static str) -> Result<&'a [String]> {
        list.as_deref()
            .ok_or_else(|| ConfigError::MissingKey { key }.into())
    }
}

/// Read the test config, falling back to [`DEFAULT_TEST_CONFIG`].
pub fn load_test_config(path: Option<&Path>) -> Result<TestConfig> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TEST_CONFIG));

    log::debug!("Loading test config from {}", path.display());

    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    TestConfig::from_yaml(&contents, &path)
}

/// Path of the bundle description for `bundle` under `bundle_dir`.
pub fn bundle_path(bundle_dir: &Path, bundle: &str) -> PathBuf {
    bundle_dir.join(format!("{bundle}.yaml"))
}

mod one_or_many {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};
    use serde_yaml::Value;

    // Unquoted numbers and booleans are bundle names too
    fn scalar(value: Value) -> Result<String, String> {
        match value {
            Value::String(item) => Ok(item),
            Value::Number(item) => Ok(item.to_string()),
            Value::Bool(item) => Ok(item.to_string()),
            Value::Null => Err("expected a string, found null".to_string()),
            Value::Sequence(_) => Err("expected a string, found a nested list".to_string()),
            Value::Mapping(_) => Err("expected a string, found a mapping".to_string()),
            Value::Tagged(tagged) => Err(format!("expected a string, found tag {}", tagged.tag)),
        }
    }

    pub fn optional<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = match Option::<Value>::deserialize(deserializer)? {
            None => return Ok(None),
            Some(Value::Sequence(items)) => items.into_iter().map(scalar).collect(),
            Some(item) => scalar(item).map(|item| vec![item]),
        };
        items.map(Some).map_err(D::Error::custom)
    }

    // `configure: ~` is treated the same as an absent key
    pub fn required<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(optional(deserializer)?.unwrap_or_default())
    }
}
