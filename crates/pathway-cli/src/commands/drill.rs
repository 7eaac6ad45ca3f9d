use clap::Subcommand;
use pathway_core::drill::{
    CauseChoice, CulpritChoice, DrillEngine, DrillState, FixChoice, CORRECTED_SNIPPET,
    DRILL_PROMPT, PYTHON_SNIPPET,
};
use pathway_core::progress;
use pathway_core::storage::{Database, ProgressStore};

const ATTEMPT_KEY: &str = "drill_attempt";

#[derive(Subcommand)]
pub enum DrillAction {
    /// Show the current step
    Show,
    /// Advance to the next step (evaluates on the last one)
    Next,
    /// Go back one step
    Back,
    /// Pick an option for the current question (1-based)
    Select { option: usize },
    /// Choose which code variant the what-if panel runs
    Variant { variant: String },
    /// Run the chosen variant
    Run,
    /// Discard the attempt and start over
    New,
    /// Leave the drill, discarding the attempt
    Quit,
    /// Print the engine snapshot as JSON
    Status,
}

fn load_engine(db: &Database) -> DrillEngine {
    db.get_scalar(ATTEMPT_KEY)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

fn save_engine(db: &Database, engine: &DrillEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    db.set_scalar(ATTEMPT_KEY, &json)?;
    Ok(())
}

fn discard_engine(db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    db.set_scalar(ATTEMPT_KEY, "null")?;
    Ok(())
}

pub fn run(action: DrillAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut engine = load_engine(&db);

    match action {
        DrillAction::Show => {
            show(&db, &engine);
        }
        DrillAction::Next => {
            match engine.next(&db)? {
                Some(_) => {
                    save_engine(&db, &engine)?;
                    show(&db, &engine);
                }
                None if engine.state() == DrillState::Evaluated => {
                    println!("Attempt complete. Start another with: drill new");
                }
                None => println!("Pick an answer first."),
            }
        }
        DrillAction::Back => {
            if engine.back().is_none() {
                println!("Nothing to go back to here.");
            }
            save_engine(&db, &engine)?;
            show(&db, &engine);
        }
        DrillAction::Select { option } => {
            if option == 0 || !engine.select_option(option - 1) {
                println!("That option isn't available right now.");
            } else {
                show(&db, &engine);
            }
            save_engine(&db, &engine)?;
        }
        DrillAction::Variant { variant } => {
            engine.set_run_variant(super::parse_variant(&variant)?);
            save_engine(&db, &engine)?;
        }
        DrillAction::Run => {
            let outcome = engine.run();
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            save_engine(&db, &engine)?;
        }
        DrillAction::New => {
            engine.new_attempt();
            save_engine(&db, &engine)?;
            show(&db, &engine);
        }
        DrillAction::Quit => {
            discard_engine(&db)?;
        }
        DrillAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
    }

    Ok(())
}

fn show(db: &Database, engine: &DrillEngine) {
    let name = progress::user_name(db);
    let whose = name
        .as_deref()
        .map(|n| format!("{n}'s"))
        .unwrap_or_else(|| "this".to_string());

    match engine.state() {
        DrillState::Situation => {
            println!("Fix this code\n");
            println!("{DRILL_PROMPT}\n");
            println!("{PYTHON_SNIPPET}");
            println!("Goal: 0 + 1 + 2 + 3 + 4 + 5 = 15");
            println!("Running it, the program never finishes. Nothing is printed.");
        }
        DrillState::Cause => {
            println!("What do you think causes {whose} code to get stuck?\n");
            for (i, choice) in CauseChoice::all().iter().enumerate() {
                let mark = if engine.cause() == Some(*choice) { ">" } else { " " };
                println!("{mark} {}. {}", i + 1, choice.label());
            }
        }
        DrillState::Culprit => {
            println!("Which part of {whose} code is really to blame?\n");
            for (i, choice) in CulpritChoice::all().iter().enumerate() {
                let mark = if engine.culprit() == Some(*choice) { ">" } else { " " };
                println!("{mark} {}. {}", i + 1, choice.label());
            }
        }
        DrillState::Fix => {
            println!("Last step: how would you fix {whose} code?\n");
            for (i, choice) in FixChoice::all().iter().enumerate() {
                let mark = if engine.fix() == Some(*choice) { ">" } else { " " };
                println!("{mark} {}. {}", i + 1, choice.label());
            }
        }
        DrillState::Evaluated => {
            show_result(engine);
        }
    }
}

fn show_result(engine: &DrillEngine) {
    let snapshot = engine.snapshot();
    let Some(result) = snapshot.result else {
        return;
    };

    println!("Today's reasoning score: {} / 100", result.score);
    if let Some(stage) = snapshot.stage {
        println!("{} {}\n", stage.emoji(), stage.label());
    }

    println!("What you did well:");
    for line in &result.strengths {
        println!("  - {line}");
    }
    println!("Try next time:");
    for line in &result.improvements {
        println!("  - {line}");
    }

    println!("\nTry a fix and run it (drill variant <id>, then drill run):");
    println!("  showing: {}", snapshot.run_variant.label());
    let preview = if snapshot.run_variant.shows_corrected_code() {
        CORRECTED_SNIPPET
    } else {
        PYTHON_SNIPPET
    };
    println!("{preview}");
    if let Some(outcome) = snapshot.run_outcome {
        println!("{}", serde_json::to_string(&outcome).unwrap_or_default());
    }
    println!("Each finished drill also plants a tree in your thinking forest.");
}
