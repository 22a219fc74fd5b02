//! Lists the built-in scenarios.

use coffeetin::ScenarioType;

use crate::style;

pub fn run() {
    let rows: Vec<Vec<String>> = ScenarioType::all()
        .iter()
        .map(|scenario| {
            let tin = scenario.tin();
            vec![
                scenario.name().to_string(),
                scenario.beans().to_string(),
                tin.greens().to_string(),
                coffeetin::predict(&tin).map_or_else(|| "none".to_string(), |b| b.to_string()),
                scenario.description().to_string(),
            ]
        })
        .collect();

    style::print_table(&["name", "beans", "greens", "last bean", "description"], &rows);
}
