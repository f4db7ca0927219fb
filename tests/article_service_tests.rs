use article_likes::application::commands::articles::{
    CreateArticleCommand, DeleteArticleCommand, LikeArticleCommand, ReassignAuthorCommand,
    UpdateArticleCommand,
};
use article_likes::application::error::ApplicationError;
use article_likes::application::queries::articles::{
    GetArticleQuery, ListArticlesQuery, ListLikersQuery,
};
use article_likes::domain::errors::DomainError;
use serde_json::json;

mod support;

use support::TestContext;

#[tokio::test]
async fn test_mass_assignment_only_fills_title_and_body() {
    let ctx = TestContext::new().await;
    let author = ctx.services.register_user("alice").await.unwrap();

    let command = CreateArticleCommand::from_json(json!({
        "title": "T",
        "body": "B",
        "id": 999,
        "author_id": 77,
        "created_at": "1999-01-01T00:00:00Z",
    }))
    .unwrap();

    let created = ctx
        .services
        .article_commands
        .create_article(&author, command)
        .await
        .expect("Failed to create article");

    assert_eq!(created.title, "T");
    assert_eq!(created.body, "B");
    assert_ne!(created.id, 999);
    assert_eq!(created.author_id, i64::from(author.id));
    assert!(!created.liked);
    assert_eq!(created.like_count, 0);
}

#[tokio::test]
async fn test_create_requires_title_and_body() {
    let ctx = TestContext::new().await;
    let author = ctx.services.register_user("alice").await.unwrap();

    let command = CreateArticleCommand::from_json(json!({ "title": "only a title" })).unwrap();
    let err = ctx
        .services
        .article_commands
        .create_article(&author, command)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
    assert!(matches!(
        CreateArticleCommand::builder().title("x").build(),
        Err(ApplicationError::Validation(_))
    ));
}

#[tokio::test]
async fn test_like_flow_through_services() {
    let ctx = TestContext::new().await;
    let u1 = ctx.services.register_user("alice").await.unwrap();
    let u2 = ctx.services.register_user("bob").await.unwrap();
    let u3 = ctx.services.register_user("carol").await.unwrap();

    let command = CreateArticleCommand::builder()
        .title("Hello")
        .body("World")
        .build()
        .unwrap();
    let a1 = ctx
        .services
        .article_commands
        .create_article(&u1, command)
        .await
        .unwrap();

    let liked = ctx
        .services
        .article_commands
        .like_article(&u2, LikeArticleCommand { article_id: a1.id })
        .await
        .unwrap();
    assert!(liked.liked);
    assert_eq!(liked.like_count, 1);

    let again = ctx
        .services
        .article_commands
        .like_article(&u2, LikeArticleCommand { article_id: a1.id })
        .await
        .unwrap();
    assert!(again.liked);
    assert_eq!(again.like_count, 1);

    let queries = &ctx.services.article_queries;
    let as_u3 = queries
        .get_article(Some(&u3), GetArticleQuery { id: a1.id })
        .await
        .unwrap();
    assert!(!as_u3.liked);
    assert_eq!(as_u3.like_count, 1);

    let anonymous = queries
        .get_article(None, GetArticleQuery { id: a1.id })
        .await
        .unwrap();
    assert!(!anonymous.liked);
    assert_eq!(anonymous.like_count, 1);
    assert_eq!(anonymous.author_id, i64::from(u1.id));

    let unliked = ctx
        .services
        .article_commands
        .unlike_article(&u2, LikeArticleCommand { article_id: a1.id })
        .await
        .unwrap();
    assert!(!unliked.liked);
    assert_eq!(unliked.like_count, 0);

    let unliked_again = ctx
        .services
        .article_commands
        .unlike_article(&u2, LikeArticleCommand { article_id: a1.id })
        .await
        .unwrap();
    assert_eq!(unliked_again.like_count, 0);
}

#[tokio::test]
async fn test_like_missing_article_is_not_found() {
    let ctx = TestContext::new().await;
    let user = ctx.services.register_user("alice").await.unwrap();

    let err = ctx
        .services
        .article_commands
        .like_article(&user, LikeArticleCommand { article_id: 12345 })
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_ignores_fields_outside_whitelist() {
    let ctx = TestContext::new().await;
    let author = ctx.services.register_user("alice").await.unwrap();
    let other = ctx.services.register_user("bob").await.unwrap();

    let created = ctx
        .services
        .article_commands
        .create_article(
            &author,
            CreateArticleCommand::builder()
                .title("Draft")
                .body("Body")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let command = UpdateArticleCommand::from_json(
        created.id,
        json!({ "body": "Edited", "author_id": i64::from(other.id), "id": 999 }),
    )
    .unwrap();
    let updated = ctx
        .services
        .article_commands
        .update_article(&author, command)
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Draft");
    assert_eq!(updated.body, "Edited");
    assert_eq!(updated.author_id, i64::from(author.id));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    let reloaded = ctx
        .services
        .article_queries
        .get_article(None, GetArticleQuery { id: created.id })
        .await
        .unwrap();
    assert_eq!(reloaded, updated);
}

#[tokio::test]
async fn test_update_with_blank_title_is_rejected() {
    let ctx = TestContext::new().await;
    let author = ctx.services.register_user("alice").await.unwrap();
    let created = ctx
        .services
        .article_commands
        .create_article(
            &author,
            CreateArticleCommand::builder()
                .title("Title")
                .body("Body")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let command = UpdateArticleCommand::from_json(created.id, json!({ "title": "   " })).unwrap();
    let err = ctx
        .services
        .article_commands
        .update_article(&author, command)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn test_reassign_author_keeps_likes() {
    let ctx = TestContext::new().await;
    let alice = ctx.services.register_user("alice").await.unwrap();
    let bob = ctx.services.register_user("bob").await.unwrap();
    let created = ctx
        .services
        .article_commands
        .create_article(
            &alice,
            CreateArticleCommand::builder()
                .title("Handover")
                .body("Body")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    ctx.services
        .article_commands
        .like_article(&bob, LikeArticleCommand { article_id: created.id })
        .await
        .unwrap();

    let missing = ctx
        .services
        .article_commands
        .reassign_author(ReassignAuthorCommand {
            id: created.id,
            author_id: 9999,
        })
        .await
        .unwrap_err();
    assert!(missing.is_not_found());

    let reassigned = ctx
        .services
        .article_commands
        .reassign_author(ReassignAuthorCommand {
            id: created.id,
            author_id: i64::from(bob.id),
        })
        .await
        .unwrap();

    assert_eq!(reassigned.author_id, i64::from(bob.id));
    assert_eq!(reassigned.like_count, 1);
    assert!(reassigned.liked);
}

#[tokio::test]
async fn test_list_articles_reports_likes_per_viewer() {
    let ctx = TestContext::new().await;
    let alice = ctx.services.register_user("alice").await.unwrap();
    let bob = ctx.services.register_user("bob").await.unwrap();
    let carol = ctx.services.register_user("carol").await.unwrap();

    let mut ids = Vec::new();
    for title in ["First", "Second", "Third"] {
        let created = ctx
            .services
            .article_commands
            .create_article(
                &alice,
                CreateArticleCommand::builder()
                    .title(title)
                    .body("Body")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        ids.push(created.id);
    }

    let commands = &ctx.services.article_commands;
    commands
        .like_article(&bob, LikeArticleCommand { article_id: ids[0] })
        .await
        .unwrap();
    commands
        .like_article(&carol, LikeArticleCommand { article_id: ids[0] })
        .await
        .unwrap();
    commands
        .like_article(&bob, LikeArticleCommand { article_id: ids[2] })
        .await
        .unwrap();

    let page = ctx
        .services
        .article_queries
        .list_articles(Some(&carol), ListArticlesQuery::default())
        .await
        .unwrap();

    let titles: Vec<&str> = page.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Third", "Second", "First"]);
    let counts: Vec<usize> = page.iter().map(|a| a.like_count).collect();
    assert_eq!(counts, vec![1, 0, 2]);
    let liked: Vec<bool> = page.iter().map(|a| a.liked).collect();
    assert_eq!(liked, vec![false, false, true]);

    let by_bob = ctx
        .services
        .article_queries
        .list_articles(
            None,
            ListArticlesQuery {
                author_id: Some(i64::from(bob.id)),
                limit: None,
            },
        )
        .await
        .unwrap();
    assert!(by_bob.is_empty());
}

#[tokio::test]
async fn test_list_likers_returns_users_with_like_timestamps() {
    let ctx = TestContext::new().await;
    let alice = ctx.services.register_user("alice").await.unwrap();
    let bob = ctx.services.register_user("bob").await.unwrap();
    let carol = ctx.services.register_user("carol").await.unwrap();
    let created = ctx
        .services
        .article_commands
        .create_article(
            &alice,
            CreateArticleCommand::builder()
                .title("Popular")
                .body("Body")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let commands = &ctx.services.article_commands;
    commands
        .like_article(&carol, LikeArticleCommand { article_id: created.id })
        .await
        .unwrap();
    commands
        .like_article(&bob, LikeArticleCommand { article_id: created.id })
        .await
        .unwrap();

    let likers = ctx
        .services
        .article_queries
        .list_likers(ListLikersQuery {
            article_id: created.id,
        })
        .await
        .unwrap();

    let names: Vec<&str> = likers.iter().map(|l| l.user.username.as_str()).collect();
    assert_eq!(names, vec!["carol", "bob"]);
    assert!(likers[0].liked_at < likers[1].liked_at);
    assert_eq!(likers[0].liked_at, likers[0].updated_at);
}

#[tokio::test]
async fn test_delete_article() {
    let ctx = TestContext::new().await;
    let alice = ctx.services.register_user("alice").await.unwrap();
    let created = ctx
        .services
        .article_commands
        .create_article(
            &alice,
            CreateArticleCommand::builder()
                .title("Gone")
                .body("Soon")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    ctx.services
        .article_commands
        .delete_article(DeleteArticleCommand { id: created.id })
        .await
        .unwrap();

    let err = ctx
        .services
        .article_queries
        .get_article(None, GetArticleQuery { id: created.id })
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let again = ctx
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id: created.id })
        .await
        .unwrap_err();
    assert!(again.is_not_found());
    assert_eq!(ctx.services.find_user(i64::from(alice.id)).await.unwrap(), alice);
}

#[tokio::test]
async fn test_register_user_rejects_duplicates() {
    let ctx = TestContext::new().await;
    ctx.services.register_user("alice").await.unwrap();

    let err = ctx.services.register_user("alice").await.unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Conflict(_))));

    let short = ctx.services.register_user("al").await.unwrap_err();
    assert!(matches!(
        short,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn test_zero_limit_returns_an_empty_page() {
    let ctx = TestContext::new().await;
    let alice = ctx.services.register_user("alice").await.unwrap();
    ctx.services
        .article_commands
        .create_article(
            &alice,
            CreateArticleCommand::builder()
                .title("Only")
                .body("one")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let page = ctx
        .services
        .article_queries
        .list_articles(
            Some(&alice),
            ListArticlesQuery {
                author_id: None,
                limit: Some(0),
            },
        )
        .await
        .unwrap();
    assert!(page.is_empty());
}
