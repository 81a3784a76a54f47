//! JSON file question store
//!
//! Persists the whole [`StoreSnapshot`] as one pretty-printed JSON document.
//! Reads are served from memory; every mutation is applied to a copy,
//! written to a temporary file and renamed over the store file, and only
//! then becomes visible. A failed write therefore leaves both the file and
//! the in-memory state unchanged.

use super::seed::seed_snapshot;
use super::snapshot::StoreSnapshot;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use trivia_application::{QuestionStore, StoreError};
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId, SearchTerm};

/// Durable question store backed by a JSON file
pub struct JsonFileQuestionStore {
    path: PathBuf,
    state: Mutex<StoreSnapshot>,
}

impl JsonFileQuestionStore {
    /// Open the store at `path`, creating it when it does not exist.
    ///
    /// A new store starts with the standard data set when `seed` is true and
    /// empty otherwise. An existing file is never reseeded.
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`] when the file cannot be read, parsed or
    /// created.
    pub async fn open(path: impl AsRef<Path>, seed: bool) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let snapshot = match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let snapshot: StoreSnapshot = serde_json::from_str(&content).map_err(|e| {
                    StoreError::Unavailable(format!(
                        "store file {} is not valid: {}",
                        path.display(),
                        e
                    ))
                })?;
                debug!(
                    "Loaded {} questions from {}",
                    snapshot.questions.len(),
                    path.display()
                );
                snapshot.normalized()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let snapshot = if seed {
                    seed_snapshot()
                } else {
                    StoreSnapshot::default()
                };
                write_snapshot(&path, &snapshot).await?;
                info!("Created question store at {}", path.display());
                snapshot
            }
            Err(e) => {
                return Err(StoreError::Unavailable(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        Ok(Self {
            path,
            state: Mutex::new(snapshot),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `mutation` to a copy of the state, persist it, then commit.
    async fn mutate<T>(
        &self,
        mutation: impl FnOnce(&mut StoreSnapshot) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        let result = mutation(&mut next)?;
        write_snapshot(&self.path, &next).await?;
        *state = next;
        Ok(result)
    }
}

async fn write_snapshot(path: &Path, snapshot: &StoreSnapshot) -> Result<(), StoreError> {
    let unavailable = |action: &str, e: std::io::Error| {
        warn!("Question store {} failed: {}", action, e);
        StoreError::Unavailable(format!("cannot {} {}: {}", action, path.display(), e))
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| unavailable("create directory for", e))?;
    }

    let content = serde_json::to_string_pretty(snapshot)
        .map_err(|e| StoreError::Unavailable(format!("cannot encode store: {}", e)))?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, content)
        .await
        .map_err(|e| unavailable("write", e))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| unavailable("replace", e))?;
    Ok(())
}

#[async_trait]
impl QuestionStore for JsonFileQuestionStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.state.lock().await.questions())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.state.lock().await.categories())
    }

    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self.state.lock().await.find_category(id))
    }

    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self.state.lock().await.find_question(id))
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        self.mutate(|state| Ok(state.insert(question))).await
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), StoreError> {
        self.mutate(|state| state.delete(id)).await
    }

    async fn filter_questions_by_category(
        &self,
        id: CategoryId,
    ) -> Result<Vec<Question>, StoreError> {
        Ok(self.state.lock().await.by_category(id))
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, StoreError> {
        Ok(self.state.lock().await.search(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_domain::QuestionDraft;

    fn new_question() -> NewQuestion {
        QuestionDraft::new()
            .with_question("Which planet is known as the Red Planet?")
            .with_answer("Mars")
            .with_category(1)
            .with_difficulty(1)
            .validate()
            .unwrap()
    }

    #[tokio::test]
    async fn test_open_missing_file_seeds_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("questions.json");

        let store = JsonFileQuestionStore::open(&path, true).await.unwrap();
        assert_eq!(store.list_questions().await.unwrap().len(), 19);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_open_unseeded_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");

        let store = JsonFileQuestionStore::open(&path, false).await.unwrap();
        assert!(store.list_questions().await.unwrap().is_empty());
        assert!(store.list_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mutations_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");

        {
            let store = JsonFileQuestionStore::open(&path, true).await.unwrap();
            let created = store.insert_question(new_question()).await.unwrap();
            assert_eq!(created.id, QuestionId::new(24));
            store.delete_question(QuestionId::new(4)).await.unwrap();
        }

        let reopened = JsonFileQuestionStore::open(&path, true).await.unwrap();
        let questions = reopened.list_questions().await.unwrap();
        assert_eq!(questions.len(), 19);
        assert!(reopened.find_question(QuestionId::new(4)).await.unwrap().is_none());
        assert_eq!(questions.last().unwrap().answer, "Mars");

        let next = reopened.insert_question(new_question()).await.unwrap();
        assert_eq!(next.id, QuestionId::new(25));
    }

    #[tokio::test]
    async fn test_delete_missing_does_not_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        let store = JsonFileQuestionStore::open(&path, true).await.unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let result = store.delete_question(QuestionId::new(1000)).await;
        assert_eq!(result, Err(StoreError::NotFound(QuestionId::new(1000))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = JsonFileQuestionStore::open(&path, true).await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }
}
