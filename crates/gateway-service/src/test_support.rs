//! In-memory stand-in for the remote users service.

use crate::dto::{CreateUserInput, UpdateUserRequest, User};
use crate::users_remote::{PaginationStream, UserChunkStream, UsersRemote};
use async_trait::async_trait;
use futures::{stream, StreamExt};
use gateway_core::{GatewayError, GatewayResult, PaginationRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// How the fake answers calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Serve from the in-memory map.
    Normal,
    /// Fail every call with a transport error.
    Unavailable,
    /// Answer lookups with a record whose id is empty.
    BlankRecord,
    /// Fail lookups with an already-classified not-found error.
    ClassifiedNotFound,
}

/// Outcome of one inbound chunk in a scripted query.
#[derive(Debug, Clone)]
pub enum Chunk {
    Users(usize),
    Fail,
}

pub struct FakeRemote {
    behavior: Behavior,
    users: Mutex<HashMap<String, User>>,
    chunks: Vec<Chunk>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    pub updates: Mutex<Vec<UpdateUserRequest>>,
    pub received_pages: Arc<Mutex<Vec<PaginationRequest>>>,
}

impl FakeRemote {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            users: Mutex::new(HashMap::new()),
            chunks: Vec::new(),
            gate: Mutex::new(None),
            updates: Mutex::new(Vec::new()),
            received_pages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_user(self, user: User) -> Self {
        self.users.lock().unwrap().insert(user.id.clone(), user);
        self
    }

    pub fn with_chunks(mut self, chunks: Vec<Chunk>) -> Self {
        self.chunks = chunks;
        self
    }

    /// Holds back the inbound chunks until `gate` fires or its sender is dropped.
    pub fn with_gate(self, gate: oneshot::Receiver<()>) -> Self {
        *self.gate.lock().unwrap() = Some(gate);
        self
    }

    fn check(&self) -> GatewayResult<()> {
        match self.behavior {
            Behavior::Unavailable => Err(GatewayError::upstream(
                "Unavailable",
                "tcp connect error: Connection refused (os error 111)",
            )),
            _ => Ok(()),
        }
    }

    fn lookup(&self, id: &str) -> GatewayResult<Option<User>> {
        self.check()?;
        match self.behavior {
            Behavior::BlankRecord => Ok(Some(User {
                username: "ghost".to_string(),
                ..User::default()
            })),
            Behavior::ClassifiedNotFound => Err(GatewayError::not_found("remote says no")),
            _ => Ok(self.users.lock().unwrap().get(id).cloned()),
        }
    }
}

pub fn user(id: &str, username: &str) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        password: "secret".to_string(),
        age: 30,
        subscribed: true,
        social_media: None,
    }
}

#[async_trait]
impl UsersRemote for FakeRemote {
    async fn create_user(&self, input: CreateUserInput) -> GatewayResult<User> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let created = User {
            id: (users.len() + 1).to_string(),
            username: input.username,
            password: input.password,
            age: input.age,
            ..User::default()
        };
        users.insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn find_all_users(&self) -> GatewayResult<Vec<User>> {
        self.check()?;
        let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(users)
    }

    async fn find_one_user(&self, id: &str) -> GatewayResult<Option<User>> {
        self.lookup(id)
    }

    async fn update_user(&self, request: UpdateUserRequest) -> GatewayResult<Option<User>> {
        self.updates.lock().unwrap().push(request.clone());
        let found = self.lookup(&request.id)?;
        Ok(found.map(|mut user| {
            if user.has_id() {
                user.social_media = request.social_media;
            }
            user
        }))
    }

    async fn remove_user(&self, id: &str) -> GatewayResult<Option<User>> {
        let found = self.lookup(id)?;
        if self.behavior == Behavior::Normal {
            self.users.lock().unwrap().remove(id);
        }
        Ok(found)
    }

    async fn query_users(&self, requests: PaginationStream) -> GatewayResult<UserChunkStream> {
        self.check()?;
        let pages: Vec<PaginationRequest> = requests.collect().await;
        self.received_pages.lock().unwrap().extend(pages);

        let items: Vec<GatewayResult<Vec<User>>> = self
            .chunks
            .iter()
            .map(|chunk| match chunk {
                Chunk::Users(count) => Ok((0..*count)
                    .map(|i| user(&i.to_string(), "chunked"))
                    .collect()),
                Chunk::Fail => Err(GatewayError::upstream("Internal", "stream reset")),
            })
            .collect();

        let gate = self.gate.lock().unwrap().take();
        Ok(stream::once(async move {
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            stream::iter(items)
        })
        .flatten()
        .boxed())
    }
}
