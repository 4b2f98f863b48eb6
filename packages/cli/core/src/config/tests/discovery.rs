/* packages/cli/core/src/config/tests/discovery.rs */

use super::*;

const MINIMAL: &str = "[project]\nname = \"countries-app\"\n";

#[test]
fn finds_config_in_ancestor() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join(CONFIG_FILE), MINIMAL).unwrap();
  let nested = dir.path().join("src").join("views");
  std::fs::create_dir_all(&nested).unwrap();

  let found = find_config(&nested).unwrap();
  assert_eq!(found, dir.path().canonicalize().unwrap().join(CONFIG_FILE));
}

#[test]
fn load_validates_router_base() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(CONFIG_FILE);
  std::fs::write(&path, format!("{MINIMAL}\n[router]\nbase = \"app\"\n")).unwrap();
  assert!(load_config(&path).is_err());
}

#[test]
fn load_reads_config() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(CONFIG_FILE);
  std::fs::write(&path, MINIMAL).unwrap();
  let config = load_config(&path).unwrap();
  assert_eq!(config.project.name, "countries-app");
}

#[test]
fn load_reports_parse_errors_with_path() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(CONFIG_FILE);
  std::fs::write(&path, "[project\n").unwrap();
  let err = load_config(&path).unwrap_err();
  assert!(err.to_string().starts_with("failed to parse"));
}
