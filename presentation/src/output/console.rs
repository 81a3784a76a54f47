//! Console output formatter for trivia results

use crate::api::{ApiError, Reply};
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use trivia_application::QuizDraw;
use trivia_domain::{Category, Question};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format(reply: &Reply) -> String {
        match reply {
            Reply::Categories(categories) => {
                let mut output = Self::header("Categories");
                output.push_str(&Self::category_list(categories));
                output
            }
            Reply::Page(page) => {
                let mut output = Self::header(&format!(
                    "Questions - page {} of {} ({} total)",
                    page.page.number,
                    page.page.total_pages(),
                    page.page.total
                ));
                for question in &page.page.items {
                    output.push_str(&Self::question_line(question));
                }
                output.push_str(&Self::section_header("Categories"));
                output.push_str(&Self::category_list(&page.categories));
                output
            }
            Reply::ByCategory(listing) => {
                let mut output = Self::header(&format!(
                    "{} ({} questions)",
                    listing.category.label,
                    listing.total()
                ));
                for question in &listing.questions {
                    output.push_str(&Self::question_line(question));
                }
                output
            }
            Reply::Searched(results) => {
                let mut output = Self::header(&format!("{} matching questions", results.total()));
                for question in &results.questions {
                    output.push_str(&Self::question_line(question));
                }
                output
            }
            Reply::Created(question) => format!(
                "{} question {}\n{}",
                "Created".green().bold(),
                question.id,
                Self::question_line(question)
            ),
            Reply::Deleted(id) => format!("{} question {}\n", "Deleted".green().bold(), id),
            Reply::Quiz(draw) => Self::format_draw(draw),
        }
    }

    pub fn format_draw(draw: &QuizDraw) -> String {
        match &draw.question {
            Some(question) => format!(
                "{} {}\n{} {}\n{}\n",
                format!("[{}]", question.id).yellow(),
                question.question.bold(),
                "Answer:".dimmed(),
                question.answer,
                format!("(drawn from {} candidates)", draw.pool_size).dimmed()
            ),
            None => format!("{}\n", "No questions left in this quiz.".yellow()),
        }
    }

    pub fn format_error(error: &ApiError) -> String {
        format!(
            "{} {} ({})\n",
            format!("Error {}:", error.status().code()).red().bold(),
            error,
            error.code()
        )
    }

    fn question_line(question: &Question) -> String {
        format!(
            "  {:>4}  {}\n        {} {}  {} {}  {} {}\n",
            question.id.to_string().yellow(),
            question.question,
            "answer:".dimmed(),
            question.answer,
            "category:".dimmed(),
            question.category,
            "difficulty:".dimmed(),
            question.difficulty
        )
    }

    fn category_list(categories: &[Category]) -> String {
        categories
            .iter()
            .map(|c| format!("  {:>4}  {}\n", c.id.to_string().yellow(), c.label))
            .collect()
    }

    fn header(title: &str) -> String {
        format!("{}\n", title.cyan().bold())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", title.cyan().bold())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_reply(&self, reply: &Reply) -> String {
        Self::format(reply)
    }

    fn format_error(&self, error: &ApiError) -> String {
        Self::format_error(error)
    }
}
