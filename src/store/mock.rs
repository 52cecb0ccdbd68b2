//! In-memory store double for service-level tests.
//!
//! Implements both store traits over plain vectors and counts write calls so
//! tests can assert that failed permission checks perform zero mutations.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskStatus, User};
use crate::store::{NewTask, NewUser, TaskChanges, TaskFilter, TaskStore, UserChanges, UserStore};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    tasks: Mutex<Vec<Task>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of insert/update/delete calls the store has received.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn seed_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub fn seed_task(&self, task: Task) {
        self.tasks.lock().unwrap().push(task);
    }

    pub fn user(&self, id: Uuid) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }

    pub fn task(&self, id: Uuid) -> Option<Task> {
        self.tasks.lock().unwrap().iter().find(|t| t.id == id).cloned()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.user(id))
    }

    async fn insert_user(&self, user: NewUser) -> Result<Uuid, AppError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let id = Uuid::new_v4();
        self.users.lock().unwrap().push(User {
            id,
            name: user.name,
            email: user.email,
            password: user.password_hash,
            birth_date: user.birth_date,
            sex: user.sex,
            company: user.company,
            photo: user.photo,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn update_user(&self, id: Uuid, changes: UserChanges) -> Result<(), AppError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            user.name = changes.name;
            user.email = changes.email;
            user.birth_date = changes.birth_date;
            user.sex = changes.sex;
            user.company = changes.company;
            user.photo = changes.photo;
            if let Some(password_hash) = changes.password_hash {
                user.password = password_hash;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        Ok(self.task(id))
    }

    async fn insert_task(&self, task: NewTask) -> Result<Uuid, AppError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let id = Uuid::new_v4();
        self.tasks.lock().unwrap().push(Task {
            id,
            name: task.name,
            description: task.description,
            deadline: task.deadline,
            status: TaskStatus::Registered,
            private: task.private,
            creator_id: task.creator_id,
            creator_name: task.creator_name,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn update_task(&self, id: Uuid, changes: TaskChanges) -> Result<(), AppError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut tasks = self.tasks.lock().unwrap();
        if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
            task.name = changes.name;
            task.description = changes.description;
            task.deadline = changes.deadline;
            task.status = changes.status;
            task.private = changes.private;
        }
        Ok(())
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), AppError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.tasks.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }

    async fn search_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, AppError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .iter()
            .filter(|t| !t.private || t.creator_id == filter.viewer_id)
            .filter(|t| filter.show_completed || t.status != TaskStatus::Completed)
            .filter(|t| match &filter.search_input {
                Some(search) => t.name.contains(search.as_str()),
                None => true,
            })
            .cloned()
            .collect())
    }
}
