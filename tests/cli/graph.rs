use anyhow::Result;
use serde_json::{Value, json};

use crate::{CliTest, stdout};

fn project() -> Result<CliTest> {
    CliTest::with_files(&[
        ("src/Button.tsx", "export const Button = () => <button />;"),
        (
            "src/Toolbar.tsx",
            "import { Button } from './Button';\nexport const Toolbar = () => <div><Button /><Button /></div>;",
        ),
        (
            "src/App.tsx",
            "import { Toolbar } from './Toolbar';\nexport default function App() { return <Toolbar />; }",
        ),
    ])
}

#[test]
fn test_graph_json_to_stdout() -> Result<()> {
    let test = project()?;
    let graph = test.run_json(&["graph"])?;

    assert_eq!(
        graph["nodes"],
        json!([
            { "id": "App", "name": "App", "isUsed": false, "usageCount": 0 },
            { "id": "Button", "name": "Button", "isUsed": true, "usageCount": 1 },
            { "id": "Toolbar", "name": "Toolbar", "isUsed": true, "usageCount": 1 }
        ])
    );
    assert_eq!(
        graph["edges"],
        json!([
            { "id": "Toolbar->Button", "source": "Toolbar", "target": "Button" },
            { "id": "App->Toolbar", "source": "App", "target": "Toolbar" }
        ])
    );

    Ok(())
}

#[test]
fn test_graph_to_file() -> Result<()> {
    let test = project()?;
    let output = test.run(&["graph", "-o", "graph.json"])?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim_end(),
        "✓ Wrote graph with 3 nodes and 2 edges to graph.json"
    );

    let written: Value = serde_json::from_str(&test.read_file("graph.json")?)?;
    assert_eq!(written["edges"].as_array().map(Vec::len), Some(2));

    Ok(())
}
