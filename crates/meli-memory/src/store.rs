//! Single-lock in-memory store

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use parking_lot::RwLock;
use tracing::{info, instrument};

use meli_core::traits::{AccountRepository, FollowRepository, PostRepository, RepoResult};
use meli_core::{normalize_email, Account, DomainError, NewPost, Post, User, UserOrder};

/// Everything the store owns, guarded as one unit
#[derive(Debug)]
struct State {
    users: HashMap<i64, User>,
    accounts: HashMap<i64, Account>,
    account_by_email: HashMap<String, i64>,
    /// Shared by catalog users and accounts
    next_user_id: i64,

    /// seller -> users following them
    followers: HashMap<i64, BTreeSet<i64>>,
    /// user -> sellers they follow
    followed: HashMap<i64, BTreeSet<i64>>,

    posts: Vec<Post>,
    next_post_id: i64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            accounts: HashMap::new(),
            account_by_email: HashMap::new(),
            next_user_id: 1,
            followers: HashMap::new(),
            followed: HashMap::new(),
            posts: Vec::new(),
            next_post_id: 1,
        }
    }
}

impl State {
    fn require_user(&self, id: i64) -> RepoResult<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(DomainError::UserNotFound(id))
        }
    }

    fn allocate_user_id(&mut self) -> i64 {
        let id = self.next_user_id;
        self.next_user_id += 1;
        id
    }

    fn resolve_users(&self, ids: Option<&BTreeSet<i64>>) -> Vec<User> {
        ids.into_iter()
            .flatten()
            .filter_map(|id| self.users.get(id).cloned())
            .collect()
    }

    fn posts_matching(&self, predicate: impl Fn(&Post) -> bool) -> Vec<Post> {
        self.posts.iter().filter(|p| predicate(p)).cloned().collect()
    }
}

/// In-memory implementation of every repository trait
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert users with fixed IDs, moving the ID counter past the highest one
    pub fn seed_users(&self, users: impl IntoIterator<Item = User>) {
        let mut state = self.state.write();
        for user in users {
            if user.id >= state.next_user_id {
                state.next_user_id = user.id + 1;
            }
            state.users.insert(user.id, user);
        }
    }
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn find_user(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self.state.read().users.get(&id).cloned())
    }

    async fn list_users(&self, order: UserOrder) -> RepoResult<Vec<User>> {
        let mut users: Vec<User> = self.state.read().users.values().cloned().collect();
        let order = match order {
            UserOrder::NameDesc => UserOrder::NameDesc,
            _ => UserOrder::NameAsc,
        };
        order.sort(&mut users);
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn create_user(&self, name: &str, is_seller: bool) -> RepoResult<User> {
        let mut state = self.state.write();
        let id = state.allocate_user_id();
        let user = User::new(id, name, is_seller);
        state.users.insert(id, user.clone());
        info!(user_id = id, "Catalog user created");
        Ok(user)
    }

    async fn find_account(&self, id: i64) -> RepoResult<Option<Account>> {
        Ok(self.state.read().accounts.get(&id).cloned())
    }

    async fn find_account_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        let state = self.state.read();
        Ok(state
            .account_by_email
            .get(&normalize_email(email))
            .and_then(|id| state.accounts.get(id))
            .cloned())
    }

    #[instrument(skip(self, password_hash))]
    async fn create_account(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        is_seller: bool,
    ) -> RepoResult<Account> {
        let mut state = self.state.write();

        let email = normalize_email(email);
        if state.account_by_email.contains_key(&email) {
            return Err(DomainError::EmailTaken);
        }

        let id = state.allocate_user_id();
        let account = Account {
            id,
            name: name.to_string(),
            email: email.clone(),
            is_seller,
            avatar_url: None,
            created_at: Utc::now(),
            password_hash: password_hash.to_string(),
        };

        state.users.insert(id, account.as_user());
        state.account_by_email.insert(email, id);
        state.accounts.insert(id, account.clone());
        info!(user_id = id, "Account created");

        Ok(account)
    }

    #[instrument(skip(self))]
    async fn update_avatar(&self, user_id: i64, avatar_url: &str) -> RepoResult<Account> {
        let mut state = self.state.write();
        let account = state
            .accounts
            .get_mut(&user_id)
            .ok_or(DomainError::AccountNotFound(user_id))?;
        account.set_avatar(avatar_url);
        Ok(account.clone())
    }
}

#[async_trait]
impl FollowRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn follow(&self, user_id: i64, seller_id: i64) -> RepoResult<()> {
        let mut state = self.state.write();
        state.require_user(user_id)?;
        state.require_user(seller_id)?;

        if state.followers.entry(seller_id).or_default().insert(user_id) {
            state.followed.entry(user_id).or_default().insert(seller_id);
            info!(user_id, seller_id, "Follow edge created");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn unfollow(&self, user_id: i64, seller_id: i64) -> RepoResult<()> {
        let mut state = self.state.write();
        state.require_user(user_id)?;
        state.require_user(seller_id)?;

        let removed = state
            .followers
            .get_mut(&seller_id)
            .is_some_and(|set| set.remove(&user_id));
        if removed {
            if let Some(set) = state.followed.get_mut(&user_id) {
                set.remove(&seller_id);
            }
            info!(user_id, seller_id, "Follow edge removed");
        }
        Ok(())
    }

    async fn followers_of(&self, seller_id: i64) -> RepoResult<Vec<User>> {
        let state = self.state.read();
        state.require_user(seller_id)?;
        Ok(state.resolve_users(state.followers.get(&seller_id)))
    }

    async fn followed_by(&self, user_id: i64) -> RepoResult<Vec<User>> {
        let state = self.state.read();
        state.require_user(user_id)?;
        Ok(state.resolve_users(state.followed.get(&user_id)))
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    #[instrument(skip(self, post), fields(user_id = post.user_id))]
    async fn add_post(&self, post: NewPost) -> RepoResult<i64> {
        let mut state = self.state.write();
        state.require_user(post.user_id)?;

        let post_id = state.next_post_id;
        state.next_post_id += 1;
        state.posts.push(Post::from_new(post_id, post));
        info!(post_id, "Post stored");
        Ok(post_id)
    }

    #[instrument(skip(self))]
    async fn delete_post(&self, user_id: i64, post_id: i64) -> RepoResult<()> {
        let mut state = self.state.write();
        state.require_user(user_id)?;

        let index = state
            .posts
            .iter()
            .position(|p| p.post_id == post_id)
            .ok_or(DomainError::PostNotFound(post_id))?;

        if state.posts[index].user_id != user_id {
            return Err(DomainError::PostForbidden(post_id));
        }

        state.posts.remove(index);
        info!(post_id, "Post deleted");
        Ok(())
    }

    async fn posts_from_sellers_since(
        &self,
        seller_ids: &[i64],
        since: NaiveDate,
    ) -> RepoResult<Vec<Post>> {
        if seller_ids.is_empty() {
            return Ok(Vec::new());
        }
        let state = self.state.read();
        Ok(state.posts_matching(|p| seller_ids.contains(&p.user_id) && p.date >= since))
    }

    async fn promo_posts_by_seller(&self, seller_id: i64) -> RepoResult<Vec<Post>> {
        let state = self.state.read();
        Ok(state.posts_matching(|p| p.user_id == seller_id && p.has_promo))
    }

    async fn posts_by_user(&self, user_id: i64) -> RepoResult<Vec<Post>> {
        let state = self.state.read();
        Ok(state.posts_matching(|p| p.user_id == user_id))
    }
}
