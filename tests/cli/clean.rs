use anyhow::Result;

use crate::{CliTest, stdout};

fn project() -> Result<CliTest> {
    CliTest::with_files(&[
        ("src/Legacy.tsx", "export const Legacy = () => null;\nexport const OldRow = () => null;"),
        (
            "src/List.tsx",
            "export const List = () => null;\nexport const UnusedHelper = () => null;",
        ),
        (
            "app/index.tsx",
            "import { List } from '../src/List';\nexport default function Home() { return <List />; }",
        ),
    ])
}

#[test]
fn test_clean_dry_run_keeps_files() -> Result<()> {
    let test = project()?;
    let output = test.run(&["clean"])?;
    assert!(output.status.success());

    insta::assert_snapshot!(stdout(&output).trim_end(), @r"
    Would delete 1 file(s):
      - src/Legacy.tsx
    Run with --apply to delete these files.
    ");
    assert!(test.root().join("src/Legacy.tsx").exists());

    Ok(())
}

#[test]
fn test_clean_apply_deletes_only_fully_unused_files() -> Result<()> {
    let test = project()?;
    let output = test.run(&["clean", "--apply"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Deleted 1 file(s):\n  - src/Legacy.tsx"));

    assert!(!test.root().join("src/Legacy.tsx").exists());
    // Declares a used component next to an unused one
    assert!(test.root().join("src/List.tsx").exists());
    assert!(test.root().join("app/index.tsx").exists());

    // Nothing left to delete
    let output = test.run(&["clean", "--apply"])?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim_end(),
        "✓ No files with only unused components"
    );

    Ok(())
}

#[test]
fn test_clean_apply_with_missing_project_root() -> Result<()> {
    let test = CliTest::with_files(&[("Old.tsx", "export const Old = () => null;")])?;

    // Paths fall back to the scan root; deletion must follow them there
    let output = test.run(&["clean", "--apply", "--project-root", "/does/not/exist"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Deleted 1 file(s):\n  - Old.tsx"));
    assert!(!stdout(&output).contains("no longer exist"));
    assert!(!test.root().join("Old.tsx").exists());

    Ok(())
}
