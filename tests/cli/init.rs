use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert!(output.status.success());
    insta::assert_snapshot!(stdout(&output).trim_end(), @"✓ Created .cuarc.json");

    let content = test.read_file(".cuarc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["routerRoot"], "app");
    assert_eq!(parsed["ignoreTestFiles"], false);
    assert_eq!(parsed["maxFileSize"], 2 * 1024 * 1024);
    assert!(parsed["ignores"].is_array());
    assert!(parsed["hocNames"].is_array());
    assert!(parsed.get("projectRoot").is_none());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".cuarc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output).trim_end(), "Error: .cuarc.json already exists");
    assert_eq!(test.read_file(".cuarc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;
    test.write_file("src/App.tsx", "export function App() { return <div>Test</div>; }")?;

    let output = test.run(&["analyze"])?;
    assert!(
        output.status.success(),
        "analyze should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".cuarc.json", r#"{ "ignores": ["[unclosed"] }"#)?;

    let output = test.run(&["analyze"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}
