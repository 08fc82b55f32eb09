//! Demo data for a fresh store.

use sqlx::sqlite::SqlitePool;
use tracing::info;

const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// (question, answer, difficulty, category type)
const QUESTIONS: [(&str, &str, i64, &str); 19] = [
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, "History"),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, "History"),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, "Entertainment"),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4, "Entertainment"),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 3, "Entertainment"),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, "Sports"),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, "Sports"),
    ("Who invented Peanut Butter?", "George Washington Carver", 2, "History"),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, "Geography"),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, "Geography"),
    ("The Taj Mahal is located in which Indian city?", "Agra", 2, "Geography"),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 1, "Art"),
    ("La Giaconda is better known as what?", "Mona Lisa", 3, "Art"),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 4, "Art"),
    ("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, "Art"),
    ("What is the heaviest organ in the human body?", "The Liver", 4, "Science"),
    ("Who discovered penicillin?", "Alexander Fleming", 3, "Science"),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 4, "Science"),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, "History"),
];

/// Insert the demo categories and questions when the store has no categories.
///
/// Returns whether anything was written.
///
/// # Errors
/// Returns an error if the transaction fails.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        info!("Store already has {} categories, skipping demo data", existing);
        return Ok(false);
    }

    let mut ids = Vec::with_capacity(CATEGORIES.len());
    for kind in CATEGORIES {
        let result = sqlx::query(r#"INSERT INTO categories ("type") VALUES (?)"#)
            .bind(kind)
            .execute(&mut *tx)
            .await?;
        ids.push((kind, result.last_insert_rowid()));
    }

    for (question, answer, difficulty, kind) in QUESTIONS {
        let Some(&(_, category)) = ids.iter().find(|(k, _)| *k == kind) else {
            continue;
        };
        sqlx::query(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(question)
        .bind(answer)
        .bind(difficulty)
        .bind(category)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    info!(
        "Seeded {} categories and {} questions",
        CATEGORIES.len(),
        QUESTIONS.len()
    );
    Ok(true)
}
