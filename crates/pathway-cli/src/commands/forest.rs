use pathway_core::progress::ForestStats;
use pathway_core::storage::Database;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let stats = ForestStats::load(&db);

    println!("Your thinking forest\n");
    if stats.has_any() {
        let mut row = String::new();
        for i in 0..stats.displayed {
            // The newest tree blooms.
            if i + 1 == stats.displayed {
                row.push_str("\u{1F338} ");
            } else {
                row.push_str("\u{1F333} ");
            }
        }
        println!("{row}\n");
        println!(
            "{} {}",
            stats.trees,
            if stats.trees == 1 { "tree" } else { "trees" }
        );
        println!("Every day you finish a drill, another tree appears here.");
    } else {
        println!("The forest is still quiet. Your first finished drill will");
        println!("plant a bright green tree here.");
    }

    Ok(())
}
