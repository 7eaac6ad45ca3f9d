use clap::Subcommand;
use pathway_core::experiment::RngCoin;
use pathway_core::practice::{questions_for, AdvanceEvent, PracticeSession, Topic};
use pathway_core::storage::{Config, Database, ProgressStore};

const SESSION_KEY: &str = "practice_session";

#[derive(Subcommand)]
pub enum PracticeAction {
    /// Begin a quiz
    Start {
        /// Topic id (math, history)
        topic: Option<String>,
    },
    /// Show the current question
    Show,
    /// Pick an option (1-based)
    Select { option: usize },
    /// Check the answer / move to the next question
    Next,
}

fn load_session(db: &Database) -> Option<PracticeSession> {
    db.get_scalar(SESSION_KEY)
        .and_then(|json| serde_json::from_str(&json).ok())
}

fn save_session(
    db: &Database,
    session: &PracticeSession,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(session)?;
    db.set_scalar(SESSION_KEY, &json)?;
    Ok(())
}

fn clear_session(db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    db.set_scalar(SESSION_KEY, "null")?;
    Ok(())
}

pub fn run(action: PracticeAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        PracticeAction::Start { topic } => {
            let topic = match topic {
                Some(id) => Topic::parse(&id),
                None => Topic::parse(&Config::load()?.practice.default_topic),
            };
            let session = PracticeSession::new(topic);
            save_session(&db, &session)?;
            show(&session);
        }
        PracticeAction::Show => match load_session(&db) {
            Some(session) => show(&session),
            None => println!("No quiz in progress. Start one with: practice start"),
        },
        PracticeAction::Select { option } => {
            let Some(mut session) = load_session(&db) else {
                println!("No quiz in progress. Start one with: practice start");
                return Ok(());
            };
            if option == 0 || !session.select(option - 1) {
                println!("That option isn't available right now.");
            }
            save_session(&db, &session)?;
            show(&session);
        }
        PracticeAction::Next => {
            let Some(mut session) = load_session(&db) else {
                println!("No quiz in progress. Start one with: practice start");
                return Ok(());
            };
            match session.advance() {
                AdvanceEvent::NeedsSelection => {
                    println!("Pick an answer first.");
                    save_session(&db, &session)?;
                }
                AdvanceEvent::Checked { correct } => {
                    println!("{}", if correct { "Correct!" } else { "Incorrect." });
                    if let Some(question) = session.current_question() {
                        let right = &question.options[question.correct_index()];
                        println!("Answer: {}", right.label);
                    }
                    save_session(&db, &session)?;
                }
                AdvanceEvent::NextQuestion { .. } => {
                    save_session(&db, &session)?;
                    show(&session);
                }
                AdvanceEvent::Finished(outcome) => {
                    // Reaching the results view commits the score and runs
                    // the one-time method assignment.
                    let summary =
                        outcome.commit(&db, &mut RngCoin(rand::thread_rng()))?;
                    clear_session(&db)?;
                    println!("Quiz finished: {} / {}", summary.score, summary.total);
                    println!("Saved for {}. See: progress", summary.day);
                }
            }
        }
    }

    Ok(())
}

fn show(session: &PracticeSession) {
    let total = questions_for(session.topic()).len();
    let Some(question) = session.current_question() else {
        return;
    };

    println!("Practice {} of {}\n", session.step() + 1, total);
    println!("{}\n", question.question);
    for (i, option) in question.options.iter().enumerate() {
        let mark = if session.selected() == Some(i) { ">" } else { " " };
        println!("{mark} {}. {}", i + 1, option.label);
    }
    if session.submitted() {
        println!("\nChecked. Continue with: practice next");
    }
}
