use anyhow::Result;

use crate::{CliTest, stdout};

fn project() -> Result<CliTest> {
    CliTest::with_files(&[
        ("src/App.tsx", "export default function App() { return null; }"),
        ("src/utils/format.ts", "export const format = (s: string) => s;"),
        ("src/styles.css", "body {}"),
        ("src/types.d.ts", "declare const x: number;"),
        ("src/App.test.tsx", "test('renders', () => {});"),
        ("app/index.jsx", "export default function Home() { return null; }"),
        ("node_modules/react/index.js", "module.exports = {};"),
        ("ios/Pods/Thing.js", "module.exports = {};"),
    ])
}

#[test]
fn test_files_lists_scannable_sources_sorted() -> Result<()> {
    let test = project()?;
    let output = test.run(&["files"])?;
    assert!(output.status.success());

    insta::assert_snapshot!(stdout(&output).trim_end(), @r"
    app/index.jsx
    src/App.test.tsx
    src/App.tsx
    src/utils/format.ts
    ");

    Ok(())
}

#[test]
fn test_files_json_respects_config_ignores() -> Result<()> {
    let test = project()?;
    test.write_file(
        ".cuarc.json",
        r#"{ "ignores": ["src/utils"], "ignoreTestFiles": true }"#,
    )?;

    let files = test.run_json(&["files", "--json"])?;
    assert_eq!(files, serde_json::json!(["app/index.jsx", "src/App.tsx"]));

    Ok(())
}

#[test]
fn test_files_scan_subdirectory() -> Result<()> {
    let test = project()?;

    // Paths stay relative to the project root (the directory with package.json)
    let files = test.run_json(&["files", "--json", "src/utils"])?;
    assert_eq!(files, serde_json::json!(["src/utils/format.ts"]));

    let files = test.run_json(&["files", "--json", "src/utils", "--project-root", "src"])?;
    assert_eq!(files, serde_json::json!(["utils/format.ts"]));

    Ok(())
}
