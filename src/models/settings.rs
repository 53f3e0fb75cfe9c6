use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Expected environment variable of an image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub key: String,
    #[serde(default)]
    pub value: String,
    /// Treat `value` as a regular expression
    #[serde(default, rename = "isRegex")]
    pub is_regex: bool,
}

/// Expected label of an image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    #[serde(default)]
    pub value: String,
    /// Treat both `key` and `value` as regular expressions
    #[serde(default, rename = "isRegex")]
    pub is_regex: bool,
}

/// Effective runtime configuration of an image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "lowercase")]
pub struct Config {
    pub env: BTreeMap<String, String>,
    pub entrypoint: Vec<String>,
    pub cmd: Vec<String>,
    pub volumes: Vec<String>,
    pub workdir: String,
    /// Ports such as "8080/tcp"
    #[serde(rename = "exposedports")]
    pub exposed_ports: Vec<String>,
    pub labels: BTreeMap<String, String>,
    pub user: String,
}

/// Overrides applied to the container a test runs in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerRunOptions {
    pub user: String,
    pub privileged: bool,
    #[serde(rename = "allocateTty")]
    pub tty: bool,
    /// `KEY=VALUE` entries
    #[serde(rename = "envVars")]
    pub env_vars: Vec<String>,
    #[serde(rename = "envFile")]
    pub env_file: String,
    pub capabilities: Vec<String>,
    #[serde(rename = "bindMounts")]
    pub bind_mounts: Vec<String>,
}

impl ContainerRunOptions {
    /// True if any field differs from its empty value.
    pub fn is_set(&self) -> bool {
        !self.user.is_empty()
            || self.privileged
            || self.tty
            || !self.env_file.is_empty()
            || !self.env_vars.is_empty()
            || !self.capabilities.is_empty()
            || !self.bind_mounts.is_empty()
    }

    /// Split `env_vars` into key/value pairs; an entry without `=` has
    /// an empty value.
    pub fn env_pairs(&self) -> Vec<(&str, &str)> {
        self.env_vars
            .iter()
            .map(|entry| entry.split_once('=').unwrap_or((entry.as_str(), "")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_run_options_not_set() {
        assert!(!ContainerRunOptions::default().is_set());
    }

    #[test]
    fn test_each_field_alone_sets_run_options() {
        let cases = vec![
            ContainerRunOptions { user: "root".into(), ..Default::default() },
            ContainerRunOptions { privileged: true, ..Default::default() },
            ContainerRunOptions { tty: true, ..Default::default() },
            ContainerRunOptions { env_vars: vec!["A=1".into()], ..Default::default() },
            ContainerRunOptions { env_file: ".env".into(), ..Default::default() },
            ContainerRunOptions { capabilities: vec!["NET_ADMIN".into()], ..Default::default() },
            ContainerRunOptions { bind_mounts: vec!["/tmp:/tmp".into()], ..Default::default() },
        ];

        for opts in cases {
            assert!(opts.is_set(), "expected is_set for {:?}", opts);
        }
    }

    #[test]
    fn test_env_pairs() {
        let opts = ContainerRunOptions {
            env_vars: vec!["PATH=/bin:/usr/bin".into(), "EMPTY=".into(), "BARE".into(), "A=b=c".into()],
            ..Default::default()
        };

        assert_eq!(
            opts.env_pairs(),
            vec![("PATH", "/bin:/usr/bin"), ("EMPTY", ""), ("BARE", ""), ("A", "b=c")]
        );
    }

    #[test]
    fn test_run_options_deserialize_camel_case_keys() {
        let opts: ContainerRunOptions = toml::from_str(
            r#"
user = "app"
allocateTty = true
envVars = ["A=1"]
envFile = "test.env"
capabilities = ["SYS_ADMIN"]
bindMounts = ["/src:/dst"]
"#,
        )
        .unwrap();

        assert_eq!(opts.user, "app");
        assert!(opts.tty);
        assert!(!opts.privileged);
        assert_eq!(opts.env_file, "test.env");
        assert_eq!(opts.bind_mounts, vec!["/src:/dst".to_string()]);
    }

    #[test]
    fn test_env_var_requires_key() {
        assert!(serde_json::from_str::<EnvVar>(r#"{"value":"x"}"#).is_err());

        let var: EnvVar = serde_json::from_str(r#"{"key":"PATH"}"#).unwrap();
        assert_eq!(var.key, "PATH");
        assert!(!var.is_regex);
    }

    #[test]
    fn test_config_lowercase_keys() {
        let config: Config = serde_json::from_str(
            r#"{"env":{"PATH":"/bin"},"exposedports":["8080/tcp"],"workdir":"/app"}"#,
        )
        .unwrap();

        assert_eq!(config.env.get("PATH").map(String::as_str), Some("/bin"));
        assert_eq!(config.exposed_ports, vec!["8080/tcp".to_string()]);
        assert_eq!(config.workdir, "/app");
        assert!(config.entrypoint.is_empty());
    }
}
