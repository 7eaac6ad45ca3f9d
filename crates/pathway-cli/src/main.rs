use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pathway-cli", version, about = "Pathway CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a topic lesson
    Lesson {
        /// Topic id (math, history)
        topic: Option<String>,
    },
    /// Practice quiz
    Practice {
        #[command(subcommand)]
        action: commands::practice::PracticeAction,
    },
    /// Daily coding drill
    Drill {
        #[command(subcommand)]
        action: commands::drill::DrillAction,
    },
    /// Run one code variant through the loop simulator
    Simulate {
        /// Variant: original, increment, return_in_loop, while_ge
        variant: String,
        /// Input n
        #[arg(long, default_value_t = pathway_core::drill::DEMO_N)]
        n: i64,
    },
    /// Progress calendar
    Progress {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
    /// Thinking forest status
    Forest,
    /// Learner profile
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Score free-text reasoning with the offline rubric
    Evaluate {
        /// Reasoning text to score
        reasoning: String,
        /// Optional base score
        #[arg(long)]
        mc_score: Option<i64>,
    },
    /// Serve the evaluate endpoint
    Serve {
        /// Port override
        #[arg(long)]
        port: Option<u16>,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Lesson { topic } => commands::lesson::run(topic),
        Commands::Practice { action } => commands::practice::run(action),
        Commands::Drill { action } => commands::drill::run(action),
        Commands::Simulate { variant, n } => commands::simulate::run(&variant, n),
        Commands::Progress { year, month } => commands::progress::run(year, month),
        Commands::Forest => commands::forest::run(),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Evaluate { reasoning, mc_score } => {
            commands::evaluate::run(&reasoning, mc_score)
        }
        Commands::Serve { port } => commands::serve::run(port),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
