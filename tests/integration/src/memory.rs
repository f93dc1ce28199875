//! In-memory repository implementations
//!
//! Same contracts as the PostgreSQL repositories: soft-deleted rows are
//! invisible, lists are newest first, uniqueness applies to live users only.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use prompt_core::{
    DomainError, NewPrompt, NewPromptRequest, NewUser, Page, PageRequest, Prompt, PromptFilter,
    PromptRepository, PromptRequest, PromptRequestRepository, RepoResult, RequestFilter, User,
    UserFilter, UserRepository,
};

/// Rows keyed by id plus the ids that were soft deleted
struct Table<T> {
    rows: BTreeMap<i64, T>,
    deleted: Vec<i64>,
    next_id: i64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            deleted: Vec::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn live(&self) -> impl Iterator<Item = &T> {
        self.rows
            .iter()
            .filter(|(id, _)| !self.deleted.contains(id))
            .map(|(_, row)| row)
    }

    fn get(&self, id: i64) -> Option<&T> {
        if self.deleted.contains(&id) {
            None
        } else {
            self.rows.get(&id)
        }
    }

    fn get_mut(&mut self, id: i64) -> Option<&mut T> {
        if self.deleted.contains(&id) {
            None
        } else {
            self.rows.get_mut(&id)
        }
    }

    fn soft_delete(&mut self, id: i64) {
        if self.rows.contains_key(&id) && !self.deleted.contains(&id) {
            self.deleted.push(id);
        }
    }

    /// Newest first (ids grow with creation time), then paginate
    fn page(&self, page: PageRequest, keep: impl Fn(&T) -> bool) -> Page<T> {
        let matching: Vec<&T> = self
            .rows
            .iter()
            .rev()
            .filter(|(id, _)| !self.deleted.contains(id))
            .map(|(_, row)| row)
            .filter(|row| keep(*row))
            .collect();
        let total = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();
        Page::new(items, total)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

// ============================================================================
// Prompts
// ============================================================================

pub struct InMemoryPromptRepository {
    table: Mutex<Table<Prompt>>,
    fail_view_increments: AtomicBool,
}

impl Default for InMemoryPromptRepository {
    fn default() -> Self {
        Self {
            table: Mutex::new(Table::new()),
            fail_view_increments: AtomicBool::new(false),
        }
    }
}

impl InMemoryPromptRepository {
    /// Make every view-count increment fail
    pub fn fail_view_increments(&self, fail: bool) {
        self.fail_view_increments.store(fail, Ordering::SeqCst);
    }

    /// Current view count, ignoring soft deletion
    pub fn view_count(&self, id: i64) -> Option<i64> {
        lock(&self.table).rows.get(&id).map(|p| p.view_count)
    }

    /// Overwrite a stored prompt's view count
    pub fn set_view_count(&self, id: i64, views: i64) {
        if let Some(prompt) = lock(&self.table).rows.get_mut(&id) {
            prompt.view_count = views;
        }
    }

    /// Number of live prompts
    pub fn len(&self) -> usize {
        lock(&self.table).live().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PromptRepository for InMemoryPromptRepository {
    async fn find_all(&self, filter: &PromptFilter, page: PageRequest) -> RepoResult<Page<Prompt>> {
        Ok(lock(&self.table).page(page, |p| filter.matches(p)))
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Prompt>> {
        Ok(lock(&self.table).get(id).cloned())
    }

    async fn find_popular(&self, limit: i64) -> RepoResult<Vec<Prompt>> {
        let table = lock(&self.table);
        let mut prompts: Vec<Prompt> = table.live().cloned().collect();
        prompts.sort_by(|a, b| b.view_count.cmp(&a.view_count).then(b.id.cmp(&a.id)));
        prompts.truncate(limit as usize);
        Ok(prompts)
    }

    async fn create(&self, prompt: &NewPrompt) -> RepoResult<Prompt> {
        let mut table = lock(&self.table);
        let id = table.allocate_id();
        let stored = prompt.clone().into_prompt(id, Utc::now());
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, prompt: &Prompt) -> RepoResult<Prompt> {
        let mut table = lock(&self.table);
        let row = table
            .get_mut(prompt.id)
            .ok_or(DomainError::PromptNotFound(prompt.id))?;
        // Counters are owned by the store
        let view_count = row.view_count;
        *row = Prompt {
            view_count,
            ..prompt.clone()
        };
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        lock(&self.table).soft_delete(id);
        Ok(())
    }

    async fn exists(&self, id: i64) -> RepoResult<bool> {
        Ok(lock(&self.table).get(id).is_some())
    }

    async fn increment_view_count(&self, id: i64) -> RepoResult<()> {
        if self.fail_view_increments.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection refused".into()));
        }
        if let Some(prompt) = lock(&self.table).get_mut(id) {
            prompt.view_count += 1;
        }
        Ok(())
    }
}

// ============================================================================
// Prompt requests
// ============================================================================

pub struct InMemoryRequestRepository {
    table: Mutex<Table<PromptRequest>>,
}

impl Default for InMemoryRequestRepository {
    fn default() -> Self {
        Self {
            table: Mutex::new(Table::new()),
        }
    }
}

#[async_trait]
impl PromptRequestRepository for InMemoryRequestRepository {
    async fn find_all(
        &self,
        filter: &RequestFilter,
        page: PageRequest,
    ) -> RepoResult<Page<PromptRequest>> {
        Ok(lock(&self.table).page(page, |r| filter.matches(r)))
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<PromptRequest>> {
        Ok(lock(&self.table).get(id).cloned())
    }

    async fn create(&self, request: &NewPromptRequest) -> RepoResult<PromptRequest> {
        let mut table = lock(&self.table);
        let id = table.allocate_id();
        let stored = request.clone().into_request(id, Utc::now());
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, request: &PromptRequest) -> RepoResult<PromptRequest> {
        let mut table = lock(&self.table);
        let row = table
            .get_mut(request.id)
            .ok_or(DomainError::RequestNotFound(request.id))?;
        *row = request.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        lock(&self.table).soft_delete(id);
        Ok(())
    }

    async fn exists(&self, id: i64) -> RepoResult<bool> {
        Ok(lock(&self.table).get(id).is_some())
    }
}

// ============================================================================
// Users
// ============================================================================

pub struct InMemoryUserRepository {
    table: Mutex<Table<User>>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self {
            table: Mutex::new(Table::new()),
        }
    }
}

impl InMemoryUserRepository {
    /// Stored password hash of a live user
    pub fn password_hash(&self, id: i64) -> Option<String> {
        lock(&self.table).get(id).map(|u| u.password_hash.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self, filter: &UserFilter, page: PageRequest) -> RepoResult<Page<User>> {
        Ok(lock(&self.table).page(page, |u| filter.matches(u)))
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(lock(&self.table).get(id).cloned())
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(lock(&self.table).live().any(|u| u.email == email))
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(lock(&self.table).live().any(|u| u.username == username))
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut table = lock(&self.table);
        if table.live().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        if table.live().any(|u| u.username == user.username) {
            return Err(DomainError::UsernameAlreadyExists);
        }
        let id = table.allocate_id();
        let stored = user
            .clone()
            .into_user(id, password_hash.to_string(), Utc::now());
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, user: &User) -> RepoResult<User> {
        let mut table = lock(&self.table);
        if table
            .live()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(DomainError::EmailAlreadyExists);
        }
        if table
            .live()
            .any(|u| u.id != user.id && u.username == user.username)
        {
            return Err(DomainError::UsernameAlreadyExists);
        }
        let row = table
            .get_mut(user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        *row = user.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        lock(&self.table).soft_delete(id);
        Ok(())
    }

    async fn increment_prompts_verified(&self, id: i64) -> RepoResult<()> {
        if let Some(user) = lock(&self.table).get_mut(id) {
            user.prompts_verified += 1;
        }
        Ok(())
    }
}
