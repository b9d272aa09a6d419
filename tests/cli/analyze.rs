use anyhow::Result;
use serde_json::json;

use crate::{CliTest, component, stderr, stdout};

fn sample_project() -> Result<CliTest> {
    CliTest::with_files(&[
        (
            "src/components/Button.tsx",
            "export const Button = ({ label }: { label: string }) => <button>{label}</button>;",
        ),
        (
            "src/components/Legacy.tsx",
            "export function Legacy() { return <div />; }",
        ),
        (
            "src/App.tsx",
            r#"import { Button } from './components/Button';

export default function App() {
    return <Button label="hi" />;
}
"#,
        ),
    ])
}

#[test]
fn test_analyze_json_reports_usage() -> Result<()> {
    let test = sample_project()?;
    let result = test.run_json(&["analyze", "--json"])?;

    assert_eq!(
        component(&result, "Button"),
        &json!({
            "name": "Button",
            "file": "src/components/Button.tsx",
            "isUsed": true,
            "usageCount": 1,
            "usedIn": ["src/App.tsx"]
        })
    );
    assert_eq!(component(&result, "Legacy")["isUsed"], false);
    assert_eq!(component(&result, "Legacy")["usageCount"], 0);
    assert_eq!(result["stats"]["filesScanned"], 3);
    assert_eq!(result["stats"]["componentsFound"], 3);
    assert_eq!(result["stats"]["unusedComponents"], 2);

    Ok(())
}

#[test]
fn test_analyze_text_output() -> Result<()> {
    let test = sample_project()?;
    let output = test.run(&["analyze"])?;
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Found components:"));
    assert!(out.contains("Unused components (2):"));
    assert!(out.contains("  - Legacy (src/components/Legacy.tsx)"));
    assert!(out.contains("  1. Button: 1 usage"));
    assert!(!out.contains("Timings:"));

    Ok(())
}

#[test]
fn test_analyze_timings_flag() -> Result<()> {
    let test = sample_project()?;
    let output = test.run(&["analyze", "--timings"])?;
    assert!(stdout(&output).contains("Timings:"));
    Ok(())
}

#[test]
fn test_fail_on_unused_exit_code() -> Result<()> {
    let test = sample_project()?;

    let output = test.run(&["analyze", "--fail-on-unused"])?;
    assert_eq!(output.status.code(), Some(1));

    let test = CliTest::with_files(&[
        ("src/Card.tsx", "export const Card = () => null;"),
        (
            "app/index.tsx",
            "import { Card } from '../src/Card';\nexport default function Home() { return <Card />; }",
        ),
    ])?;
    let output = test.run(&["analyze", "--fail-on-unused"])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    Ok(())
}

#[test]
fn test_expo_router_files_are_used() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "app/_layout.tsx",
            r#"import { Stack } from 'expo-router';
export default function RootLayout() {
    return (
        <Stack>
            <Stack.Screen name="settings" />
        </Stack>
    );
}
"#,
        ),
        ("app/(tabs)/profile.tsx", "export default function Profile() { return null; }"),
        ("app/settings.tsx", "export default function Settings() { return null; }"),
    ])?;
    let result = test.run_json(&["analyze", "--json"])?;

    assert_eq!(component(&result, "RootLayout")["usedIn"], json!(["app/_layout.tsx"]));
    assert_eq!(component(&result, "Profile")["isUsed"], true);
    assert_eq!(
        component(&result, "Settings")["usedIn"],
        json!(["[expo-router: referenced in app/_layout.tsx]"])
    );

    Ok(())
}

#[test]
fn test_router_root_override() -> Result<()> {
    let test = CliTest::with_files(&[(
        "src/app/index.tsx",
        "export default function Home() { return null; }",
    )])?;

    let result = test.run_json(&["analyze", "--json"])?;
    assert_eq!(component(&result, "Home")["isUsed"], false);

    let result = test.run_json(&["analyze", "--json", "--router-root", "src/app"])?;
    assert_eq!(component(&result, "Home")["isUsed"], true);

    // Same setting from the config file
    test.write_file(".cuarc.json", r#"{ "routerRoot": "src/app" }"#)?;
    let result = test.run_json(&["analyze", "--json"])?;
    assert_eq!(component(&result, "Home")["isUsed"], true);

    Ok(())
}

#[test]
fn test_hoc_names_from_config() -> Result<()> {
    let test = CliTest::with_files(&[(
        "src/List.tsx",
        "import { memo } from 'react';\nconst Row = () => null;\nexport const MemoRow = memo(Row);",
    )])?;

    let result = test.run_json(&["analyze", "--json"])?;
    assert_eq!(component(&result, "Row")["isUsed"], false);

    test.write_file(".cuarc.json", r#"{ "hocNames": ["memo"] }"#)?;
    let result = test.run_json(&["analyze", "--json"])?;
    assert_eq!(component(&result, "Row")["usedIn"], json!(["src/List.tsx"]));

    Ok(())
}

#[test]
fn test_unparsable_file_is_a_warning() -> Result<()> {
    let test = CliTest::with_files(&[
        ("src/Broken.tsx", "export function Broken( { return <div>; }"),
        ("src/Fine.tsx", "export const Fine = () => null;"),
    ])?;

    let output = test.run(&["analyze", "--json"])?;
    assert!(output.status.success());
    assert!(
        stderr(&output).contains("warning: 1 file(s) could not be parsed (use -v for details)")
    );

    let result: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(result["stats"]["parseFailures"], 1);
    assert_eq!(result["warnings"][0]["file"], "src/Broken.tsx");
    assert_eq!(component(&result, "Fine")["isUsed"], false);

    Ok(())
}

#[test]
fn test_verbose_logs_instead_of_summary_warning() -> Result<()> {
    let test = CliTest::with_files(&[("src/Broken.tsx", "export function Broken( {")])?;

    let output = test.run(&["analyze", "-v"])?;
    let err = stderr(&output);
    assert!(!err.contains("could not be parsed (use -v"));
    assert!(err.contains("src/Broken.tsx"));

    Ok(())
}

#[test]
fn test_missing_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["analyze", "does-not-exist"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error:"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_empty_project() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["analyze"])?;

    assert!(output.status.success());
    insta::assert_snapshot!(stdout(&output).trim_end(), @"No components found in 0 scanned files.");

    Ok(())
}
