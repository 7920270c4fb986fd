//! Command-line harness over a question collection file.
//!
//! Loads a JSON collection (validated against the v1 schema and collection
//! invariants), applies one core operation, and prints the result to stdout.
//! The collection file is never written back.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use questions::core::answers::make_answers;
use questions::core::csv::to_csv;
use questions::core::edit::{
    change_question_type_by_id, edit_option, remove_question, rename_question_by_id,
};
use questions::core::insert::{add_new_question, duplicate_question_in_array, publish_all};
use questions::core::query::{
    find_question, names, non_empty_questions, published_questions, same_type, sum_points,
    sum_published_points,
};
use questions::core::types::OptionSlot;
use questions::exit_codes;
use questions::io::config::{DEFAULT_CONFIG_PATH, QuestionsConfig, load_config};
use questions::io::store::{load_questions, render_json};
use questions::logging;
use questions::question::{Answer, Question, QuestionType};

#[derive(Parser)]
#[command(
    name = "questions",
    version,
    about = "Query and transform quiz question collections"
)]
struct Cli {
    /// Collection JSON file (defaults to `questions_path` from config).
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Config TOML file.
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print only published questions.
    Published,
    /// Print questions with a body, expected answer, or options.
    NonEmpty,
    /// Print the first question with this id.
    Find {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Print question names, one per line.
    Names,
    /// Print the total points.
    Points {
        /// Only count published questions.
        #[arg(long)]
        published: bool,
    },
    /// Print whether all questions share one type.
    SameType,
    /// Remove every question with this id.
    Remove {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Rename the question with this id.
    Rename {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        name: String,
    },
    /// Change a question's type (clears options unless multiple choice).
    Retype {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        question_type: QuestionType,
    },
    /// Switch a question between short answer and multiple choice.
    ToggleType {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Replace the option at INDEX, or append when INDEX is -1.
    EditOption {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[arg(allow_negative_numbers = true)]
        index: i64,
        option: String,
    },
    /// Append a blank question.
    Add {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        name: String,
        /// Question type (defaults to `default_type` from config).
        #[arg(long = "type")]
        question_type: Option<QuestionType>,
    },
    /// Insert a copy of a question directly after it.
    Duplicate {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[arg(allow_negative_numbers = true)]
        new_id: i64,
    },
    /// Mark every question as published.
    PublishAll,
    /// Print one blank answer per question.
    Answers,
    /// Print the collection as CSV.
    Csv,
    /// Check the collection file and print its question count.
    Validate,
}

/// Result of applying one command to a collection.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Questions(Vec<Question>),
    Question(Question),
    Answers(Vec<Answer>),
    Text(String),
    NotFound(i64),
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let cfg = load_config(&cli.config)?;
    let path = cli.file.clone().unwrap_or_else(|| cfg.questions_path.clone());
    debug!(path = %path.display(), "using collection file");
    let questions = load_questions(&path)?;

    let outcome = execute(&cli.command, &questions, &cfg)?;
    let rendered = match &outcome {
        Outcome::Questions(questions) => render_json(questions, cfg.pretty)?,
        Outcome::Question(question) => render_json(question, cfg.pretty)?,
        Outcome::Answers(answers) => render_json(answers, cfg.pretty)?,
        Outcome::Text(text) => text.clone(),
        Outcome::NotFound(id) => {
            warn!(id, "question not found");
            return Ok(exit_codes::NOT_FOUND);
        }
    };
    println!("{}", rendered);
    Ok(exit_codes::OK)
}

fn execute(command: &Command, questions: &[Question], cfg: &QuestionsConfig) -> Result<Outcome> {
    let outcome = match command {
        Command::Published => Outcome::Questions(published_questions(questions)),
        Command::NonEmpty => Outcome::Questions(non_empty_questions(questions)),
        Command::Find { id } => match find_question(questions, *id) {
            Some(question) => Outcome::Question(question.clone()),
            None => Outcome::NotFound(*id),
        },
        Command::Names => Outcome::Text(names(questions).join("\n")),
        Command::Points { published } => {
            let total = if *published {
                sum_published_points(questions)
            } else {
                sum_points(questions)
            };
            Outcome::Text(total.to_string())
        }
        Command::SameType => Outcome::Text(same_type(questions).to_string()),
        Command::Remove { id } => Outcome::Questions(remove_question(questions, *id)),
        Command::Rename { id, name } => {
            Outcome::Questions(rename_question_by_id(questions, *id, name))
        }
        Command::Retype { id, question_type } => {
            Outcome::Questions(change_question_type_by_id(questions, *id, *question_type))
        }
        Command::ToggleType { id } => match find_question(questions, *id) {
            Some(current) => Outcome::Questions(change_question_type_by_id(
                questions,
                *id,
                current.question_type.toggled(),
            )),
            None => Outcome::NotFound(*id),
        },
        Command::EditOption { id, index, option } => {
            let slot = OptionSlot::from_index(*index).map_err(|err| anyhow!(err))?;
            let edited = edit_option(questions, *id, slot, option).map_err(|err| anyhow!(err))?;
            Outcome::Questions(edited)
        }
        Command::Add {
            id,
            name,
            question_type,
        } => {
            let question_type = question_type.unwrap_or(cfg.default_type);
            Outcome::Questions(add_new_question(questions, *id, name, question_type))
        }
        Command::Duplicate { id, new_id } => {
            Outcome::Questions(duplicate_question_in_array(questions, *id, *new_id))
        }
        Command::PublishAll => Outcome::Questions(publish_all(questions)),
        Command::Answers => Outcome::Answers(make_answers(questions)),
        Command::Csv => Outcome::Text(to_csv(questions)),
        Command::Validate => Outcome::Text(format!("ok: {} questions", questions.len())),
    };
    Ok(outcome)
}
