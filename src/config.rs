use super::*;

#[derive(Deserialize, Default, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
  pub(crate) chain: Option<Chain>,
  pub(crate) jubilee_height: Option<u32>,
  pub(crate) protocol: Option<Protocol>,
}

impl Config {
  pub(crate) fn load(path: &Path) -> Result<Self> {
    serde_yaml::from_reader(
      File::open(path).with_context(|| format!("failed to open config file `{}`", path.display()))?,
    )
    .with_context(|| format!("failed to parse config file `{}`", path.display()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_config_is_default() {
    assert_eq!(serde_yaml::from_str::<Config>("{}").unwrap(), Config::default());
  }

  #[test]
  fn all_fields() {
    assert_eq!(
      serde_yaml::from_str::<Config>("chain: signet\nprotocol: sequential\njubilee_height: 7\n")
        .unwrap(),
      Config {
        chain: Some(Chain::Signet),
        jubilee_height: Some(7),
        protocol: Some(Protocol::Sequential),
      }
    );
  }

  #[test]
  fn unknown_fields_are_rejected() {
    assert!(serde_yaml::from_str::<Config>("bitcoin_rpc_user: foo\n")
      .unwrap_err()
      .to_string()
      .contains("unknown field `bitcoin_rpc_user`"));
  }

  #[test]
  fn invalid_protocol_is_rejected() {
    assert!(serde_yaml::from_str::<Config>("protocol: foo\n").is_err());
  }

  #[test]
  fn missing_file_is_an_error() {
    let tempdir = tempfile::TempDir::new().unwrap();

    assert_regex_match!(
      Config::load(&tempdir.path().join("missing.yaml"))
        .unwrap_err()
        .to_string(),
      "failed to open config file `.*missing.yaml`",
    );
  }

  #[test]
  fn example_config_file_is_valid() {
    assert_eq!(
      Config::load(Path::new("ord.yaml")).unwrap(),
      Config {
        chain: Some(Chain::Mainnet),
        jubilee_height: Some(824544),
        protocol: Some(Protocol::Tagged),
      }
    );
  }
}
