//! Standard trivia data set used to populate a new store

use super::snapshot::StoreSnapshot;
use trivia_domain::{Category, CategoryId, Question, QuestionId};

const CATEGORIES: [(u64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// (id, question, answer, category, difficulty)
const QUESTIONS: [(u64, &str, &str, u64, u32); 19] = [
    (
        2,
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        5,
        4,
    ),
    (
        4,
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        5,
        4,
    ),
    (
        5,
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        4,
        2,
    ),
    (
        6,
        "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?",
        "Edward Scissorhands",
        5,
        3,
    ),
    (9, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    (
        10,
        "Which is the only team to play in every soccer World Cup tournament?",
        "Brazil",
        6,
        3,
    ),
    (
        11,
        "Which country won the first ever soccer World Cup in 1930?",
        "Uruguay",
        6,
        4,
    ),
    (12, "Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    (13, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    (
        14,
        "In which royal palace would you find the Hall of Mirrors?",
        "The Palace of Versailles",
        3,
        3,
    ),
    (15, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    (
        16,
        "Which Dutch graphic artist-initials M C was a creator of optical illusions?",
        "Escher",
        2,
        1,
    ),
    (17, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    (
        18,
        "How many paintings did Van Gogh sell in his lifetime?",
        "One",
        2,
        4,
    ),
    (
        19,
        "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?",
        "Jackson Pollock",
        2,
        2,
    ),
    (20, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
    (21, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
    (
        22,
        "Hematology is a branch of medicine involving the study of what?",
        "Blood",
        1,
        4,
    ),
    (
        23,
        "Which dung beetle was worshipped by the ancient Egyptians?",
        "Scarab",
        4,
        4,
    ),
];

/// The six standard categories and nineteen questions
pub fn seed_snapshot() -> StoreSnapshot {
    let categories = CATEGORIES
        .iter()
        .map(|(id, label)| Category::new(*id, *label))
        .collect();

    let questions = QUESTIONS
        .iter()
        .map(|(id, question, answer, category, difficulty)| Question {
            id: QuestionId::new(*id),
            question: (*question).to_string(),
            answer: (*answer).to_string(),
            category: CategoryId::new(*category),
            difficulty: *difficulty,
        })
        .collect();

    StoreSnapshot::new(categories, questions)
}
