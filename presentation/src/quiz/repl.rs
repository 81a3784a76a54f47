//! REPL (Read-Eval-Print Loop) for interactive quiz play

use super::session::QuizSession;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use trivia_application::{ListCategoriesUseCase, PlayQuizUseCase, QuestionStore, RandomSource};
use trivia_domain::{Category, CategoryId};

/// What the player typed at a prompt
enum Input {
    Line(String),
    Quit,
}

/// Interactive quiz
pub struct QuizRepl {
    play_quiz: PlayQuizUseCase,
    list_categories: ListCategoriesUseCase,
    rounds: usize,
    category: Option<CategoryId>,
}

impl QuizRepl {
    /// Create a new QuizRepl
    pub fn new(store: Arc<dyn QuestionStore>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            play_quiz: PlayQuizUseCase::new(Arc::clone(&store), random),
            list_categories: ListCategoriesUseCase::new(store),
            rounds: 5,
            category: None,
        }
    }

    /// Set how many questions one game asks
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Play a fixed category instead of asking; 0 plays all categories
    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("trivia").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        let categories = match self.list_categories.execute().await {
            Ok(categories) => categories,
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(());
            }
        };
        self.print_welcome(&categories);

        let category = match self.category {
            Some(id) => id,
            None => match Self::choose_category(&mut rl)? {
                Some(id) => id,
                None => {
                    println!("Bye!");
                    return Ok(());
                }
            },
        };
        let mut session = QuizSession::from_menu(category, self.rounds);

        loop {
            let question = match session.draw(&self.play_quiz).await {
                Ok(Some(question)) => question,
                Ok(None) => break,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    break;
                }
            };

            println!();
            println!("{} {}", "Q:".cyan().bold(), question.question);
            let guess = match Self::read(&mut rl, "Your answer> ")? {
                Input::Line(line) => line,
                Input::Quit => break,
            };
            let _ = rl.add_history_entry(guess.as_str());

            if session.answer(&question, &guess) {
                println!("{}", "Correct!".green().bold());
            } else {
                println!(
                    "{} The answer was: {}",
                    "Wrong.".red().bold(),
                    question.answer
                );
            }
        }

        let score = session.score();
        println!();
        println!(
            "{} {} / {}",
            "Final score:".cyan().bold(),
            score.correct,
            score.asked
        );

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self, categories: &[Category]) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                 Trivia Quiz                 │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Categories:");
        println!("  {:>4}  All", 0);
        for category in categories {
            println!("  {:>4}  {}", category.id, category.label);
        }
        println!();
        println!("Up to {} questions. Type /quit to stop.", self.rounds);
    }

    /// Ask until the player names a category; `None` when they quit.
    fn choose_category(rl: &mut DefaultEditor) -> RlResult<Option<CategoryId>> {
        loop {
            match Self::read(rl, "Category [0 = all]> ")? {
                Input::Quit => return Ok(None),
                Input::Line(line) if line.is_empty() => return Ok(Some(CategoryId::new(0))),
                Input::Line(line) => match line.parse::<CategoryId>() {
                    Ok(id) => return Ok(Some(id)),
                    Err(e) => println!("{}", e),
                },
            }
        }
    }

    fn read(rl: &mut DefaultEditor, prompt: &str) -> RlResult<Input> {
        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if matches!(line.as_str(), "/quit" | "/exit" | "/q") {
                        return Ok(Input::Quit);
                    }
                    return Ok(Input::Line(line));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => return Ok(Input::Quit),
                Err(err) => return Err(err),
            }
        }
    }
}
