use anyhow::Result;

use crate::{CliTest, stdout};

fn project() -> Result<CliTest> {
    CliTest::with_files(&[
        ("src/Header.tsx", "export const Header = () => null;"),
        ("src/Old.tsx", "export const Old = () => null;"),
        (
            "app/index.tsx",
            "import { Header } from '../src/Header';\nexport default function Home() { return <Header />; }",
        ),
    ])
}

#[test]
fn test_report_writes_default_file() -> Result<()> {
    let test = project()?;
    let output = test.run(&["report"])?;
    assert!(output.status.success());

    insta::assert_snapshot!(
        stdout(&output).trim_end(),
        @"✓ Wrote report for 3 components to component-report.md"
    );

    let content = test.read_file("component-report.md")?;
    assert!(content.starts_with("# Component Usage Report\n"));
    assert!(content.contains("## Unused Components (1)"));
    assert!(content.contains("Old"));

    Ok(())
}

#[test]
fn test_report_custom_output_path() -> Result<()> {
    let test = project()?;
    let output = test.run(&["report", "-o", "docs/usage.md"])?;
    // Parent directories are not created
    assert_eq!(output.status.code(), Some(2));

    test.write_file("docs/.keep", "")?;
    let output = test.run(&["report", "--output", "docs/usage.md"])?;
    assert!(output.status.success());
    assert!(test.root().join("docs/usage.md").exists());
    assert!(!test.root().join("component-report.md").exists());

    Ok(())
}

#[test]
fn test_report_to_stdout() -> Result<()> {
    let test = project()?;
    let output = test.run(&["report", "-o", "-"])?;
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.starts_with("# Component Usage Report\n"));
    assert!(out.contains("## Top 5 Most Used Components"));
    assert!(!test.root().join("-").exists());

    Ok(())
}
