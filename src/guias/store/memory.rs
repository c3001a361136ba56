use chrono::Utc;

use crate::error::{GuiasError, Result};
use crate::model::{NewTutorial, Tutorial};
use crate::store::TutorialStore;

/// In-memory record collection, newest first. The only store the running
/// application has; everything vanishes with the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Tutorial>,
    // Last minted id value, so same-millisecond creations stay unique
    last_id_millis: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn mint_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last_id_millis = now.max(self.last_id_millis + 1);
        self.last_id_millis.to_string()
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| GuiasError::TutorialNotFound(id.to_string()))
    }
}

impl TutorialStore for InMemoryStore {
    fn insert_front(&mut self, draft: NewTutorial) -> Result<Tutorial> {
        let record = Tutorial {
            id: self.mint_id(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            video_url: draft.video_url,
            pdf_url: draft.pdf_url,
            image_url: draft.image_url,
            tags: draft.tags,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.records.insert(0, record.clone());
        Ok(record)
    }

    fn get(&self, id: &str) -> Result<Tutorial> {
        let pos = self.position(id)?;
        Ok(self.records[pos].clone())
    }

    fn list(&self) -> Result<Vec<Tutorial>> {
        Ok(self.records.clone())
    }

    fn replace(&mut self, record: &Tutorial) -> Result<()> {
        let pos = self.position(&record.id)?;
        self.records[pos] = record.clone();
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<Tutorial> {
        let pos = self.position(id)?;
        Ok(self.records.remove(pos))
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.records.is_empty())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Category;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_tutorial(mut self, title: &str, category: Category) -> Self {
            let draft = NewTutorial {
                title: title.to_string(),
                description: format!("Descrição de {}", title),
                category,
                ..Default::default()
            };
            self.store.insert_front(draft).unwrap();
            self
        }

        pub fn with_tagged_tutorial(mut self, title: &str, tags: &[&str]) -> Self {
            let draft = NewTutorial {
                title: title.to_string(),
                description: String::new(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            };
            self.store.insert_front(draft).unwrap();
            self
        }
    }
}
