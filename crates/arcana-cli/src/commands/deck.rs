use comfy_table::{ContentArrangement, Table};

use arcana_core::deck::{self, Arcana};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Card", "Arcana"]);

    for (i, card) in deck::all().iter().enumerate() {
        let arcana = match card.arcana {
            Arcana::Major(n) => format!("Major {n}"),
            Arcana::Minor(suit) => format!("{} {suit}", suit.glyph()),
        };
        table.add_row(vec![
            (i + 1).to_string(),
            format!("{} {}", card.glyph, card.name),
            arcana,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", deck::all().len());

    Ok(())
}
