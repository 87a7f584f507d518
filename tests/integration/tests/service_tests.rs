//! Service scenario tests
//!
//! Each scenario drives the services end to end over a freshly seeded
//! backend. Memory scenarios run as separate tests; PostgreSQL runs them all
//! in one test since the database is shared.
//!
//! Run with: cargo test -p integration-tests --test service_tests

use anyhow::Result;
use integration_tests::*;
use meli_core::traits::PostRepository;
use meli_core::DomainError;
use meli_service::dto::CreateUserRequest;
use meli_service::{AuthService, ProductService, ServiceError, UserService};
use rust_decimal::Decimal;
use serde_json::json;

fn kind(err: ServiceError) -> DomainError {
    err.kind().cloned().unwrap_or(DomainError::Database(String::new()))
}

async fn seeded(backend: &TestBackend) -> Result<()> {
    backend.reset().await?;
    backend.seed(&catalog_users()).await
}

// ============================================================================
// Scenarios
// ============================================================================

async fn follow_idempotence(backend: &TestBackend) -> Result<()> {
    seeded(backend).await?;
    let ctx = backend.context(today())?;
    let users = UserService::new(&ctx);

    users.follow(BUYER_ID, SELLER_ID).await?;
    users.follow(BUYER_ID, SELLER_ID).await?;
    users.unfollow(SECOND_BUYER_ID, SELLER_ID).await?;

    let list = users.followers_list(SELLER_ID, "").await?;
    assert_eq!(list.followers.len(), 1);
    assert_eq!(list.followers[0].user_id, BUYER_ID);
    assert_eq!(users.followers_count(SELLER_ID).await?.followers_count, 1);
    Ok(())
}

async fn follow_symmetry(backend: &TestBackend) -> Result<()> {
    seeded(backend).await?;
    let ctx = backend.context(today())?;
    let users = UserService::new(&ctx);

    users.follow(BUYER_ID, SELLER_ID).await?;
    users.follow(BUYER_ID, OTHER_SELLER_ID).await?;

    let followed = users.followed_list(BUYER_ID, "name_desc").await?;
    let names: Vec<_> = followed.followed.iter().map(|u| u.user_name.as_str()).collect();
    assert_eq!(names, ["vendedor2", "vendedor1"]);

    for seller in [SELLER_ID, OTHER_SELLER_ID] {
        let followers = users.followers_list(seller, "name_asc").await?;
        assert!(followers.followers.iter().any(|u| u.user_id == BUYER_ID));
    }
    Ok(())
}

async fn promo_price(backend: &TestBackend) -> Result<()> {
    seeded(backend).await?;
    let ctx = backend.context(today())?;
    let products = ProductService::new(&ctx);

    let mut promo = publish_request(SELLER_ID, &days_ago(1));
    promo.has_promo = true;
    promo.discount = Decimal::from(10);
    products.publish(promo).await?;

    let mut plain = publish_request(SELLER_ID, &days_ago(2));
    plain.discount = Decimal::from(30);
    products.publish(plain).await?;

    let list = products.promo_list(SELLER_ID).await?;
    assert_eq!(list.posts.len(), 1);
    let value = serde_json::to_value(&list.posts[0])?;
    assert_eq!(value["final_price"], json!(1350.45));

    let posts = ctx.store().posts_by_user(SELLER_ID).await?;
    for post in posts {
        if !post.has_promo {
            assert_eq!(post.discount, Decimal::ZERO);
            assert_eq!(post.final_price, post.price);
        }
    }
    Ok(())
}

async fn feed_window_boundary(backend: &TestBackend) -> Result<()> {
    seeded(backend).await?;
    let ctx = backend.context(today())?;
    let products = ProductService::new(&ctx);
    UserService::new(&ctx).follow(BUYER_ID, SELLER_ID).await?;

    products.publish(publish_request(SELLER_ID, &days_ago(15))).await?;
    let included = products.publish(publish_request(SELLER_ID, &days_ago(14))).await?;

    let feed = products.followed_last_two_weeks(BUYER_ID, "").await?;
    let ids: Vec<_> = feed.posts.iter().map(|p| p.post_id).collect();
    assert_eq!(ids, [included]);
    Ok(())
}

async fn delete_ownership(backend: &TestBackend) -> Result<()> {
    seeded(backend).await?;
    let ctx = backend.context(today())?;
    let products = ProductService::new(&ctx);
    let users = UserService::new(&ctx);

    let post_id = products.publish(publish_request(SELLER_ID, &days_ago(0))).await?;

    let err = products.delete_my_post(OTHER_SELLER_ID, post_id).await.unwrap_err();
    assert_eq!(kind(err), DomainError::PostForbidden(post_id));
    let err = products.delete_my_post(SELLER_ID, post_id + 1).await.unwrap_err();
    assert_eq!(kind(err), DomainError::PostNotFound(post_id + 1));

    products.delete_my_post(SELLER_ID, post_id).await?;
    assert!(users.posts_by_user(SELLER_ID, "").await?.is_empty());
    Ok(())
}

async fn publish_validation_order(backend: &TestBackend) -> Result<()> {
    seeded(backend).await?;
    let ctx = backend.context(today())?;

    let mut request = publish_request(SELLER_ID, &days_ago(0));
    request.product.product_id = 0;
    request.price = Decimal::ZERO;

    let err = ProductService::new(&ctx).publish(request).await.unwrap_err();
    assert_eq!(kind(err), DomainError::EmptyId);
    Ok(())
}

async fn feed_default_order(backend: &TestBackend) -> Result<()> {
    seeded(backend).await?;
    let ctx = backend.context(today())?;
    let products = ProductService::new(&ctx);
    let users = UserService::new(&ctx);
    users.follow(BUYER_ID, SELLER_ID).await?;
    users.follow(BUYER_ID, OTHER_SELLER_ID).await?;

    for (seller, days) in [(SELLER_ID, 6), (OTHER_SELLER_ID, 1), (SELLER_ID, 10)] {
        products.publish(publish_request(seller, &days_ago(days))).await?;
    }

    let default = products.followed_last_two_weeks(BUYER_ID, "").await?;
    let desc = products.followed_last_two_weeks(BUYER_ID, "date_desc").await?;
    let dates = |posts: &[meli_service::dto::PostResponse]| {
        posts.iter().map(|p| p.date.clone()).collect::<Vec<_>>()
    };
    assert_eq!(dates(&default.posts), [days_ago(1), days_ago(6), days_ago(10)]);
    assert_eq!(dates(&default.posts), dates(&desc.posts));
    Ok(())
}

async fn publish_round_trip(backend: &TestBackend) -> Result<()> {
    seeded(backend).await?;
    let ctx = backend.context(today())?;

    let mut request = publish_request(SELLER_ID, "29-04-2021");
    request.has_promo = true;
    request.discount = Decimal::new(155, 1);
    request.product.image_url = Some("https://img.example/headset.png".to_string());
    let post_id = ProductService::new(&ctx).publish(request.clone()).await?;

    let posts = UserService::new(&ctx).posts_by_user(SELLER_ID, "").await?;
    assert_eq!(posts.len(), 1);
    let post = &posts[0];
    assert_eq!(post.post_id, post_id);
    assert_eq!(post.date, "29-04-2021");
    assert_eq!(post.product.product_name, request.product.product_name);
    assert_eq!(post.product.product_type, request.product.product_type);
    assert_eq!(post.product.image_url, request.product.image_url);
    assert_eq!(post.category, request.category);
    assert_eq!(post.price, request.price);
    assert_eq!(post.discount, request.discount);
    // 1500.50 * 0.845 = 1267.92250
    assert_eq!(post.final_price, Decimal::new(126_792, 2));
    Ok(())
}

async fn email_uniqueness(backend: &TestBackend) -> Result<()> {
    seeded(backend).await?;
    let ctx = backend.context(today())?;
    let auth = AuthService::new(&ctx);

    auth.register(register_request("Joana", "joana@mail.com")).await?;
    let err = auth
        .register(register_request("Outra Joana", "  JOANA@Mail.COM "))
        .await
        .unwrap_err();
    assert_eq!(kind(err), DomainError::EmailTaken);
    Ok(())
}

async fn registered_account_profile(backend: &TestBackend) -> Result<()> {
    seeded(backend).await?;
    let ctx = backend.context(today())?;
    let auth = AuthService::new(&ctx);
    let users = UserService::new(&ctx);

    let mut request = register_request("Loja Nova", "loja@mail.com");
    request.is_seller = true;
    let account = auth.register(request).await?;
    assert_eq!(account.user_id, OTHER_SELLER_ID + 1);

    users.follow(BUYER_ID, account.user_id).await?;
    users.follow(account.user_id, SELLER_ID).await?;
    ProductService::new(&ctx)
        .publish(publish_request(account.user_id, &days_ago(3)))
        .await?;
    users.update_avatar(account.user_id, "/avatars/loja.png").await?;

    let profile = users.get_profile(account.user_id).await?;
    assert_eq!(profile.user.avatar_url.as_deref(), Some("/avatars/loja.png"));
    assert_eq!(profile.followers_count, 1);
    assert_eq!(profile.followed_count, 1);
    assert_eq!(profile.publications_count, 1);

    let logged_in = auth
        .login(meli_service::dto::LoginRequest {
            email: "LOJA@mail.com".to_string(),
            password: "senha123".to_string(),
        })
        .await?;
    assert_eq!(logged_in.user_id, account.user_id);
    Ok(())
}

async fn catalog_users_listing(backend: &TestBackend) -> Result<()> {
    seeded(backend).await?;
    let ctx = backend.context(today())?;
    let users = UserService::new(&ctx);

    let created = users
        .create_user(CreateUserRequest {
            name: "Ana".to_string(),
            is_seller: true,
        })
        .await?;
    assert_eq!(created.user_id, OTHER_SELLER_ID + 1);

    let listed = users.list_users("name_asc").await?;
    assert_eq!(listed.first().map(|u| u.user_name.as_str()), Some("Ana"));

    let err = users.get_profile(created.user_id).await.unwrap_err();
    assert_eq!(kind(err), DomainError::UserNotFound(created.user_id));
    Ok(())
}

// ============================================================================
// Runners
// ============================================================================

macro_rules! scenario_tests {
    ($($name:ident),* $(,)?) => {
        mod memory {
            use super::*;

            $(
                #[tokio::test]
                async fn $name() {
                    init_test_tracing();
                    super::$name(&TestBackend::memory()).await.unwrap();
                }
            )*
        }

        #[tokio::test]
        async fn test_postgres_scenarios() {
            init_test_tracing();
            let Some(backend) = TestBackend::postgres().await.unwrap() else {
                return;
            };
            $(
                $name(&backend)
                    .await
                    .unwrap_or_else(|e| panic!("{} failed: {e:?}", stringify!($name)));
            )*
        }
    };
}

scenario_tests![
    follow_idempotence,
    follow_symmetry,
    promo_price,
    feed_window_boundary,
    delete_ownership,
    publish_validation_order,
    feed_default_order,
    publish_round_trip,
    email_uniqueness,
    registered_account_profile,
    catalog_users_listing,
];
