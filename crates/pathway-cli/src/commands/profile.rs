use clap::Subcommand;
use pathway_core::progress::{self, METHOD_KEY, NEXT_REVIEW_KEY, USER_NAME_KEY};
use pathway_core::storage::{Database, ProgressStore};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Set the learner display name
    SetName { name: String },
    /// Show the stored profile
    Show,
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        ProfileAction::SetName { name } => {
            db.set_scalar(USER_NAME_KEY, name.trim())?;
        }
        ProfileAction::Show => {
            match progress::user_name(&db) {
                Some(name) => println!("name: {name}"),
                None => println!("name: (not set)"),
            }
            if let Some(method) = db.get_scalar(METHOD_KEY) {
                println!("method: {method}");
            }
            if let Some(next_review) = db.get_scalar(NEXT_REVIEW_KEY) {
                println!("next review: {next_review}");
            }
        }
    }

    Ok(())
}
