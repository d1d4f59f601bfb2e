//! Tests for the directory service.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use super::*;
use chrono::{DateTime, Duration, TimeZone, Utc};
use mockable::MockClock;
use rstest::{fixture, rstest};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Clock that advances one minute per reading.
fn ticking_clock() -> MockClock {
    let ticks = Arc::new(AtomicI64::new(0));
    let mut clock = MockClock::new();
    clock
        .expect_utc()
        .returning(move || base_time() + Duration::minutes(ticks.fetch_add(1, Ordering::SeqCst)));
    clock
}

/// Clock frozen at a single instant.
fn frozen_clock() -> MockClock {
    let mut clock = MockClock::new();
    clock.expect_utc().returning(base_time);
    clock
}

#[fixture]
fn service() -> DirectoryService {
    DirectoryService::new(Arc::new(ticking_clock()))
}

fn registration(email: &str, name: &str) -> Registration {
    Registration::try_from_parts(email, name, "password123").expect("valid registration")
}

async fn register(service: &DirectoryService, email: &str, name: &str) -> Account {
    service
        .register(registration(email, name))
        .await
        .expect("registration succeeds")
}

async fn publish(service: &DirectoryService, author: &Account, title: &str) -> Post {
    service
        .create_post(CreatePostRequest {
            author_id: author.id().clone(),
            title: title.to_owned(),
            body: format!("{title} body"),
        })
        .await
        .expect("post is created")
}

#[rstest]
#[tokio::test]
async fn register_then_authenticate(service: DirectoryService) {
    let account = register(&service, "test@example.com", "Test User").await;
    let credentials =
        SignInCredentials::try_from_parts("test@example.com", "password123").expect("creds");

    let signed_in = service
        .authenticate(&credentials)
        .await
        .expect("credentials match");
    assert_eq!(signed_in, account);
}

#[rstest]
#[tokio::test]
async fn duplicate_registration_leaves_count_unchanged(service: DirectoryService) {
    register(&service, "test@example.com", "Test User").await;
    let err = service
        .register(registration("test@example.com", "Second"))
        .await
        .expect_err("duplicate email");

    assert_eq!(err.code(), ErrorCode::DuplicateAccount);
    assert_eq!(service.account_count().expect("count"), 1);
}

#[rstest]
#[tokio::test]
async fn wrong_password_is_rejected(service: DirectoryService) {
    register(&service, "test@example.com", "Test User").await;
    let credentials =
        SignInCredentials::try_from_parts("test@example.com", "password124").expect("creds");

    let err = service
        .authenticate(&credentials)
        .await
        .expect_err("bad password");
    assert_eq!(err.code(), ErrorCode::AuthenticationFailed);
}

#[rstest]
#[tokio::test]
async fn create_post_stamps_clock_time(service: DirectoryService) {
    let author = register(&service, "test@example.com", "Test User").await;
    let first = publish(&service, &author, "First").await;
    let second = publish(&service, &author, "Second").await;

    assert_eq!(first.created_at(), base_time());
    assert_eq!(second.created_at(), base_time() + Duration::minutes(1));

    let feed = service.list_posts(None).await.expect("feed");
    let ids: Vec<PostId> = feed.iter().map(Post::id).collect();
    assert_eq!(ids, vec![second.id(), first.id()]);
}

#[rstest]
#[tokio::test]
async fn same_instant_posts_list_latest_insertion_first() {
    let service = DirectoryService::new(Arc::new(frozen_clock()));
    let author = register(&service, "test@example.com", "Test User").await;
    let first = publish(&service, &author, "First").await;
    let second = publish(&service, &author, "Second").await;

    let feed = service.list_posts(None).await.expect("feed");
    let ids: Vec<PostId> = feed.iter().map(Post::id).collect();
    assert_eq!(ids, vec![second.id(), first.id()]);
}

#[rstest]
#[tokio::test]
async fn viewer_does_not_filter_the_feed(service: DirectoryService) {
    let ada = register(&service, "ada@example.com", "Ada").await;
    let grace = register(&service, "grace@example.com", "Grace").await;
    publish(&service, &ada, "From Ada").await;
    publish(&service, &grace, "From Grace").await;

    let anonymous = service.list_posts(None).await.expect("feed");
    let as_ada = service
        .list_posts(Some(ada.id().clone()))
        .await
        .expect("feed");
    let as_grace = service
        .list_posts(Some(grace.id().clone()))
        .await
        .expect("feed");

    assert_eq!(anonymous.len(), 2);
    assert_eq!(anonymous, as_ada);
    assert_eq!(anonymous, as_grace);
}

#[rstest]
#[tokio::test]
async fn profile_update_propagates_to_feed(service: DirectoryService) {
    let author = register(&service, "test@example.com", "Test User").await;
    publish(&service, &author, "Hello").await;

    let update = ProfileUpdate::from_account(&author)
        .with_display_name("X")
        .expect("valid name");
    service
        .update_profile(author.id(), update)
        .await
        .expect("profile updates");

    let feed = service.list_posts(None).await.expect("feed");
    assert!(
        feed.iter()
            .all(|post| post.author().display_name().as_ref() == "X")
    );
}

#[rstest]
#[tokio::test]
async fn non_author_cannot_edit_or_delete(service: DirectoryService) {
    let ada = register(&service, "ada@example.com", "Ada").await;
    let grace = register(&service, "grace@example.com", "Grace").await;
    let post = publish(&service, &ada, "Mine").await;

    let edit = service
        .update_post(UpdatePostRequest {
            post_id: post.id(),
            acting_account_id: grace.id().clone(),
            title: "Hijacked".to_owned(),
            body: "Nope".to_owned(),
        })
        .await
        .expect_err("non-author edit");
    let delete = service
        .delete_post(DeletePostRequest {
            post_id: post.id(),
            acting_account_id: grace.id().clone(),
        })
        .await
        .expect_err("non-author delete");

    assert_eq!(edit.code(), ErrorCode::Forbidden);
    assert_eq!(delete.code(), ErrorCode::Forbidden);
    assert_eq!(service.list_posts(None).await.expect("feed"), vec![post]);
}

#[rstest]
#[tokio::test]
async fn author_can_edit_then_delete(service: DirectoryService) {
    let ada = register(&service, "ada@example.com", "Ada").await;
    let post = publish(&service, &ada, "Draft").await;

    let edited = service
        .update_post(UpdatePostRequest {
            post_id: post.id(),
            acting_account_id: ada.id().clone(),
            title: "Final".to_owned(),
            body: "Done".to_owned(),
        })
        .await
        .expect("author edit");
    assert_eq!(edited.title(), "Final");
    assert_eq!(edited.created_at(), post.created_at());

    service
        .delete_post(DeletePostRequest {
            post_id: post.id(),
            acting_account_id: ada.id().clone(),
        })
        .await
        .expect("author delete");
    assert!(service.list_posts(None).await.expect("feed").is_empty());
}

#[rstest]
#[tokio::test]
async fn search_suppresses_blank_queries(service: DirectoryService) {
    register(&service, "test@example.com", "Test User").await;

    assert!(service.search_accounts("").await.expect("search").is_empty());
    assert!(service.search_accounts("  ").await.expect("search").is_empty());
    let hits = service.search_accounts("TEST").await.expect("search");
    assert_eq!(hits.len(), 1);
}

#[rstest]
#[tokio::test]
async fn clones_share_one_directory(service: DirectoryService) {
    let other = service.clone();
    register(&service, "test@example.com", "Test User").await;
    assert_eq!(other.account_count().expect("count"), 1);
}

#[rstest]
#[tokio::test]
async fn concurrent_duplicate_registrations_admit_one(service: DirectoryService) {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .register(registration("race@example.com", "Racer"))
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        if handle.await.expect("task completes").is_ok() {
            successes += 1;
        }
    }
    assert_eq!(successes, 1);
    assert_eq!(service.account_count().expect("count"), 1);
}

#[rstest]
#[tokio::test]
async fn debug_output_hides_directory_contents(service: DirectoryService) {
    register(&service, "test@example.com", "Test User").await;
    let rendered = format!("{service:?}");

    assert_eq!(rendered, "DirectoryService { .. }");
    assert!(!rendered.contains("password123"));
}
