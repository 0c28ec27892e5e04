use std::path::Path;

use mansion_core::mansion;

/// Export the world model as pretty-printed JSON, to stdout or a file.
pub fn run(output: Option<&Path>) -> Result<(), String> {
    let world = mansion::world();

    let content = serde_json::to_string_pretty(&world)
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
