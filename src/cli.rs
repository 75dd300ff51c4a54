// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Frigo v{} - Local-first refrigerator dashboard (TUI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!("    {} export", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("EXPORT COMMAND:");
    println!("    {} export                 Print the inventory as JSON to stdout", binary_name);
    println!("    {} export > pantry.json   Save the inventory to a file", binary_name);
    println!();
    println!("KEYBINDINGS:");
    println!("    Press '?' inside the app for full interactive help");
    println!();
    println!("SMART INPUT SYNTAX (add item, 'a'):");
    println!("    <name>            Leading words form the item name");
    println!("    <amount><unit>    Quantity: 500g, 1.5kg, 1l, 250ml, 12pcs, 1pack");
    println!("    <category>        fruits, vegetables, dairy, meat, beverages,");
    println!("                      leftovers, condiments");
    println!("    @YYYY-MM-DD       Expiration date");
    println!("    @today/@tomorrow  Keyword dates");
    println!("    @3d / @2w         Offset from today (days / weeks)");
    println!();
    println!("EXAMPLES:");
    println!("    Milk 1l dairy @2026-08-12");
    println!("    Chicken Breast 500g meat @3d");
    println!("    Apples 6pcs fruits @tomorrow");
    println!();
    println!("MORE INFO:");
    println!("    Repository: https://codeberg.org/trougnouf/frigo");
    println!("    License:    GPL-3.0");
}
