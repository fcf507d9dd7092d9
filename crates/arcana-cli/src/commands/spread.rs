use comfy_table::{ContentArrangement, Table};

use arcana_core::intent::{self, MIN_CLASSIFY_CHARS};
use arcana_core::spread;

pub fn run(question: &str) -> Result<(), String> {
    let intent = intent::detect(question).ok_or_else(|| {
        format!("question is too short to plan (at least {MIN_CLASSIFY_CHARS} characters)")
    })?;
    let spread = spread::plan_for_question(intent, question);

    println!(
        "  {} ({} card{}, {} question)",
        intent.spread_name(),
        spread.card_count(),
        if spread.card_count() == 1 { "" } else { "s" },
        intent.label()
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Position"]);
    for (i, label) in spread.labels().iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), label.to_string()]);
    }
    println!("{table}");

    Ok(())
}
