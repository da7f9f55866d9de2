use comfy_table::{ContentArrangement, Table};
use tarot_core::{Catalogue, CardDef, Suit};

pub fn run(suit: Option<&str>, json: bool) -> Result<(), String> {
    let catalogue = Catalogue::standard();

    let cards: Vec<&CardDef> = match suit {
        Some(name) => {
            let suit = Suit::parse(name).ok_or_else(|| {
                format!("unknown suit '{name}', use: trump, wands, cups, swords, pentacles")
            })?;
            catalogue.by_suit(suit)
        }
        None => catalogue.cards().iter().map(|c| c.as_ref()).collect(),
    };

    if json {
        let out = serde_json::to_string_pretty(&cards).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Card", "Rank", "Suit", "Upright", "Reversed"]);

    for card in &cards {
        table.add_row(vec![
            card.title.clone(),
            card.rank.to_string(),
            card.suit.to_string(),
            card.meaning_upright.clone(),
            card.meaning_reversed.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", cards.len());

    Ok(())
}
