//! Backend-agnostic store contract
//!
//! Every scenario takes an empty backend and must behave identically on all
//! of them, down to the error kind.

use std::collections::HashSet;
use std::future::Future;

use anyhow::Result;
use chrono::TimeDelta;
use meli_core::traits::{AccountRepository, FollowRepository, PostRepository};
use meli_core::{DomainError, User, UserOrder};
use rust_decimal::Decimal;
use tokio::task::JoinSet;

use crate::fixtures::*;
use crate::helpers::TestBackend;

/// Reset and seed `backend`, then run one scenario on it
async fn run_scenario(
    backend: &TestBackend,
    name: &str,
    scenario: impl Future<Output = Result<()>>,
) -> Result<()> {
    backend.reset().await?;
    backend.seed(&catalog_users()).await?;
    scenario
        .await
        .map_err(|e| e.context(format!("{name} failed on {}", backend.name())))
}

macro_rules! run_scenarios {
    ($backend:expr; $($name:ident),* $(,)?) => {
        $( run_scenario($backend, stringify!($name), $name($backend)).await?; )*
    };
}

/// Run every scenario on `backend`, starting each from the seeded catalog
pub async fn run_all(backend: &TestBackend) -> Result<()> {
    run_scenarios![
        backend;
        follow_is_idempotent,
        unfollow_without_edge_is_noop,
        follow_edges_are_symmetric,
        follow_requires_both_users,
        follower_queries_require_user,
        post_ids_are_unique,
        add_post_requires_user,
        delete_post_checks_ownership,
        posts_since_is_inclusive,
        posts_since_with_no_sellers,
        promo_posts_only,
        posts_round_trip,
        catalog_user_ids_continue_after_seed,
        concurrent_creations_get_distinct_ids,
        account_pairs_with_user,
        account_email_is_unique_ignoring_case,
        catalog_user_has_no_account,
        avatar_update,
        list_users_orders_by_name,
    ];
    Ok(())
}

fn ids(users: &[User]) -> HashSet<i64> {
    users.iter().map(|u| u.id).collect()
}

pub async fn follow_is_idempotent(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    store.follow(BUYER_ID, SELLER_ID).await?;
    store.follow(BUYER_ID, SELLER_ID).await?;

    let followers = store.followers_of(SELLER_ID).await?;
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0].id, BUYER_ID);
    Ok(())
}

pub async fn unfollow_without_edge_is_noop(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    store.follow(SECOND_BUYER_ID, SELLER_ID).await?;
    store.unfollow(BUYER_ID, SELLER_ID).await?;

    assert_eq!(ids(&store.followers_of(SELLER_ID).await?), HashSet::from([SECOND_BUYER_ID]));
    Ok(())
}

pub async fn follow_edges_are_symmetric(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    let edges = [
        (BUYER_ID, SELLER_ID),
        (BUYER_ID, OTHER_SELLER_ID),
        (SECOND_BUYER_ID, SELLER_ID),
    ];
    for (user, seller) in edges {
        store.follow(user, seller).await?;
    }
    store.unfollow(BUYER_ID, OTHER_SELLER_ID).await?;

    for user in [BUYER_ID, SECOND_BUYER_ID] {
        for seller in [SELLER_ID, OTHER_SELLER_ID] {
            let forward = ids(&store.followed_by(user).await?).contains(&seller);
            let backward = ids(&store.followers_of(seller).await?).contains(&user);
            assert_eq!(forward, backward, "edge {user} -> {seller}");
        }
    }
    assert_eq!(ids(&store.followed_by(BUYER_ID).await?), HashSet::from([SELLER_ID]));
    Ok(())
}

pub async fn follow_requires_both_users(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    assert_eq!(store.follow(999, SELLER_ID).await, Err(DomainError::UserNotFound(999)));
    assert_eq!(store.follow(BUYER_ID, 998).await, Err(DomainError::UserNotFound(998)));
    assert_eq!(store.unfollow(997, SELLER_ID).await, Err(DomainError::UserNotFound(997)));
    Ok(())
}

pub async fn follower_queries_require_user(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    assert_eq!(store.followers_of(999).await, Err(DomainError::UserNotFound(999)));
    assert_eq!(store.followed_by(999).await, Err(DomainError::UserNotFound(999)));
    assert!(store.followers_of(SELLER_ID).await?.is_empty());
    Ok(())
}

pub async fn post_ids_are_unique(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    let first = store.add_post(new_post(SELLER_ID, today())).await?;
    store.delete_post(SELLER_ID, first).await?;
    let second = store.add_post(new_post(SELLER_ID, today())).await?;
    let third = store.add_post(new_post(OTHER_SELLER_ID, today())).await?;

    assert!(first > 0);
    assert!(second > first);
    assert!(third > second);
    Ok(())
}

pub async fn add_post_requires_user(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    assert_eq!(
        store.add_post(new_post(999, today())).await,
        Err(DomainError::UserNotFound(999))
    );
    Ok(())
}

pub async fn delete_post_checks_ownership(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    let post_id = store.add_post(new_post(SELLER_ID, today())).await?;

    assert_eq!(
        store.delete_post(OTHER_SELLER_ID, post_id).await,
        Err(DomainError::PostForbidden(post_id))
    );
    assert_eq!(
        store.delete_post(SELLER_ID, post_id + 100).await,
        Err(DomainError::PostNotFound(post_id + 100))
    );
    assert_eq!(
        store.delete_post(999, post_id).await,
        Err(DomainError::UserNotFound(999))
    );
    assert_eq!(store.posts_by_user(SELLER_ID).await?.len(), 1);

    store.delete_post(SELLER_ID, post_id).await?;
    assert!(store.posts_by_user(SELLER_ID).await?.is_empty());
    Ok(())
}

pub async fn posts_since_is_inclusive(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    let since = today() - TimeDelta::days(14);
    store.add_post(new_post(SELLER_ID, since - TimeDelta::days(1))).await?;
    let on_boundary = store.add_post(new_post(SELLER_ID, since)).await?;
    let recent = store.add_post(new_post(OTHER_SELLER_ID, today())).await?;
    store.add_post(new_post(BUYER_ID, today())).await?;

    let posts = store
        .posts_from_sellers_since(&[SELLER_ID, OTHER_SELLER_ID], since)
        .await?;
    let found: HashSet<i64> = posts.iter().map(|p| p.post_id).collect();
    assert_eq!(found, HashSet::from([on_boundary, recent]));
    Ok(())
}

pub async fn posts_since_with_no_sellers(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    store.add_post(new_post(SELLER_ID, today())).await?;
    assert!(store.posts_from_sellers_since(&[], today()).await?.is_empty());
    Ok(())
}

pub async fn promo_posts_only(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    store.add_post(new_post(SELLER_ID, today())).await?;
    let promo = store
        .add_post(new_promo_post(SELLER_ID, today(), Decimal::from(10)))
        .await?;
    store
        .add_post(new_promo_post(OTHER_SELLER_ID, today(), Decimal::from(5)))
        .await?;

    let posts = store.promo_posts_by_seller(SELLER_ID).await?;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].post_id, promo);
    assert!(store.promo_posts_by_seller(BUYER_ID).await?.is_empty());
    Ok(())
}

pub async fn posts_round_trip(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    let mut submitted = new_promo_post(SELLER_ID, today(), Decimal::new(125, 1));
    submitted.price = Decimal::new(150_050, 2);
    submitted.product.image_url = Some("https://img.example/p.png".to_string());
    let post_id = store.add_post(submitted.clone()).await?;

    let posts = store.posts_by_user(SELLER_ID).await?;
    assert_eq!(posts.len(), 1);
    let stored = &posts[0];
    assert_eq!(stored.post_id, post_id);
    assert_eq!(stored.date, submitted.date);
    assert_eq!(stored.product, submitted.product);
    assert_eq!(stored.category, submitted.category);
    assert_eq!(stored.price, submitted.price);
    assert_eq!(stored.discount, submitted.discount);
    assert!(stored.has_promo);
    // 1500.50 * 0.875 = 1312.9375
    assert_eq!(stored.final_price, Decimal::new(131_294, 2));
    Ok(())
}

pub async fn catalog_user_ids_continue_after_seed(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    let first = store.create_user("novo vendedor", true).await?;
    let second = store.create_user("novo comprador", false).await?;

    assert_eq!(first.id, OTHER_SELLER_ID + 1);
    assert_eq!(second.id, first.id + 1);
    assert_eq!(store.find_user(first.id).await?, Some(first));
    Ok(())
}

pub async fn concurrent_creations_get_distinct_ids(backend: &TestBackend) -> Result<()> {
    let mut tasks = JoinSet::new();
    for i in 0..8 {
        let store = backend.store();
        tasks.spawn(async move {
            if i % 2 == 0 {
                store.create_user(&format!("vendedor {i}"), true).await.map(|u| u.id)
            } else {
                store
                    .create_account(&format!("conta {i}"), &format!("conta{i}@mail.com"), "hash", false)
                    .await
                    .map(|a| a.id)
            }
        });
    }

    let mut created = HashSet::new();
    while let Some(joined) = tasks.join_next().await {
        let id = joined??;
        assert!(id > OTHER_SELLER_ID, "id {id} collides with the seeded range");
        assert!(created.insert(id), "id {id} handed out twice");
    }
    assert_eq!(created.len(), 8);
    Ok(())
}

pub async fn account_pairs_with_user(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    let account = store
        .create_account("Lucia", "  Lucia@Mail.com ", "hash", true)
        .await?;

    assert_eq!(account.email, "lucia@mail.com");
    assert_eq!(account.avatar_url, None);
    assert_eq!(store.find_user(account.id).await?, Some(account.as_user()));

    let by_email = store.find_account_by_email("LUCIA@mail.com").await?;
    assert_eq!(by_email.map(|a| a.id), Some(account.id));
    let by_id = store.find_account(account.id).await?;
    assert_eq!(by_id.map(|a| a.password_hash), Some("hash".to_string()));
    Ok(())
}

pub async fn account_email_is_unique_ignoring_case(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    store.create_account("Lucia", "lucia@mail.com", "hash", false).await?;

    assert_eq!(
        store.create_account("Outra", " LUCIA@MAIL.COM", "hash", false).await,
        Err(DomainError::EmailTaken)
    );
    Ok(())
}

pub async fn catalog_user_has_no_account(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    assert!(store.find_account(SELLER_ID).await?.is_none());
    assert!(store.find_account_by_email("vendedor1@mail.com").await?.is_none());
    Ok(())
}

pub async fn avatar_update(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    let account = store.create_account("Lucia", "lucia@mail.com", "hash", false).await?;

    let updated = store.update_avatar(account.id, "/avatars/lucia.png").await?;
    assert_eq!(updated.avatar_url.as_deref(), Some("/avatars/lucia.png"));
    assert_eq!(updated.name, account.name);

    assert_eq!(
        store.update_avatar(SELLER_ID, "/x.png").await,
        Err(DomainError::AccountNotFound(SELLER_ID))
    );
    assert_eq!(
        store.update_avatar(999, "/x.png").await,
        Err(DomainError::AccountNotFound(999))
    );
    Ok(())
}

pub async fn list_users_orders_by_name(backend: &TestBackend) -> Result<()> {
    let store = backend.store();
    store.create_user("Zulmira", false).await?;
    store.create_user("abel", true).await?;

    let names = |users: Vec<User>| users.into_iter().map(|u| u.name).collect::<Vec<_>>();

    let asc = names(store.list_users(UserOrder::Unspecified).await?);
    assert_eq!(
        asc,
        ["abel", "usuario1", "usuario123", "vendedor1", "vendedor2", "Zulmira"]
    );
    assert_eq!(names(store.list_users(UserOrder::NameAsc).await?), asc);

    let mut desc = asc;
    desc.reverse();
    assert_eq!(names(store.list_users(UserOrder::NameDesc).await?), desc);
    Ok(())
}
