//! In-memory fakes for the ports, used by unit tests

use crate::ports::key_value_store::{KeyValueStore, StoreError};
use crate::ports::text_generator::{GenerationError, TextGenerator};
use async_trait::async_trait;
use cupid_domain::{Credential, Model};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: Model,
    pub prompt: String,
    pub credential: String,
}

/// Generator that replays scripted replies, then repeats `fallback`
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    fallback: Result<String, GenerationError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl Default for ScriptedGenerator {
    fn default() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fallback: Ok("generated".to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedGenerator {
    pub fn replying<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|s| Ok(s.into())).collect()),
            ..Self::default()
        }
    }

    pub fn failing(error: GenerationError) -> Self {
        Self {
            fallback: Err(error),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        model: &Model,
        prompt: &str,
        credential: &Credential,
    ) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.clone(),
            prompt: prompt.to_string(),
            credential: credential.expose().to_string(),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// HashMap-backed store; can be told to fail reads or writes
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Corrupt("scripted read failure".into()));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Io(std::io::Error::other("read-only")));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Io(std::io::Error::other("read-only")));
        }
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
