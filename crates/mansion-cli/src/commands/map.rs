use comfy_table::{ContentArrangement, Table};
use mansion_core::mansion;

/// Print the floor plan: every room with its description and exits.
pub fn run() -> Result<(), String> {
    let world = mansion::world();

    println!("  {}", world.name());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Location", "Description", "Exits"]);

    for location in world.locations() {
        let exits = if location.exits.is_empty() {
            "—".to_string()
        } else {
            location
                .exits
                .iter()
                .map(|(direction, destination)| format!("{direction} -> {destination}"))
                .collect::<Vec<_>>()
                .join(", ")
        };

        table.add_row(vec![&location.name, &location.description, &exits]);
    }

    println!("{table}");
    println!();
    println!("  {} locations, starting in {}", world.len(), world.start());

    Ok(())
}
