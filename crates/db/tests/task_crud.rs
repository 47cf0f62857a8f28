//! Repository-level tests for task CRUD and reference expansion.

use sqlx::PgPool;
use taskboard_core::project::{Priority, Status};
use taskboard_core::time::parse_datetime;
use taskboard_core::types::DocId;
use taskboard_db::models::project::CreateProject;
use taskboard_db::models::task::TaskDocument;
use taskboard_db::models::user::CreateUser;
use taskboard_db::repositories::{ProjectRepo, TaskRepo, UserRepo};

fn doc(json: serde_json::Value) -> TaskDocument {
    serde_json::from_value(json).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn create_preserves_open_fields(pool: PgPool) {
    let task = TaskRepo::create(
        &pool,
        &doc(serde_json::json!({"title": "write docs", "done": false})),
    )
    .await
    .unwrap();

    assert_eq!(task.fields["title"], "write docs");
    assert_eq!(task.fields["done"], false);
    assert!(task.project.is_none());
    assert!(task.user_id.is_none());

    // Open fields flatten back into the serialized document.
    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["title"], "write docs");
    assert_eq!(json["id"], task.id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_id_treats_any_shape_as_plain_miss(pool: PgPool) {
    assert!(TaskRepo::find_by_id(&pool, "not-an-id").await.unwrap().is_none());
    assert!(TaskRepo::find_by_id(&pool, DocId::generate().as_str())
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn replace_overwrites_the_whole_document(pool: PgPool) {
    let owner = DocId::generate();
    let created = TaskRepo::create(
        &pool,
        &doc(serde_json::json!({"title": "old", "user": owner.to_string(), "extra": 1})),
    )
    .await
    .unwrap();

    let replaced = TaskRepo::replace(
        &pool,
        created.id.as_str(),
        &doc(serde_json::json!({"title": "new"})),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(replaced.fields["title"], "new");
    // Full replace: fields absent from the new document are gone.
    assert!(replaced.fields.get("extra").is_none());
    assert!(replaced.user_id.is_none());
    assert_eq!(replaced.id, created.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn replace_missing_task_returns_none(pool: PgPool) {
    let result = TaskRepo::replace(
        &pool,
        DocId::generate().as_str(),
        &doc(serde_json::json!({"title": "x"})),
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_reports_whether_a_row_was_removed(pool: PgPool) {
    let created = TaskRepo::create(&pool, &doc(serde_json::json!({"title": "t"})))
        .await
        .unwrap();

    assert!(TaskRepo::delete(&pool, created.id.as_str()).await.unwrap());
    assert!(!TaskRepo::delete(&pool, created.id.as_str()).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_by_user_excludes_unowned_tasks(pool: PgPool) {
    let owner = DocId::generate();
    TaskRepo::create(
        &pool,
        &doc(serde_json::json!({"title": "mine", "user": owner.to_string()})),
    )
    .await
    .unwrap();
    TaskRepo::create(&pool, &doc(serde_json::json!({"title": "unscoped"})))
        .await
        .unwrap();

    let mine = TaskRepo::list_by_user(&pool, &owner).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].fields["title"], "mine");

    let all = TaskRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn resolve_refs_embeds_summaries_and_nulls_dangling(pool: PgPool) {
    let admin = DocId::generate();
    let project = ProjectRepo::create(
        &pool,
        &CreateProject {
            name: "Alpha".to_string(),
            description: None,
            start_date: parse_datetime("2024-01-01").unwrap(),
            end_date: parse_datetime("2024-02-01").unwrap(),
            priority: Priority::default(),
            status: Status::default(),
        },
        &admin,
    )
    .await
    .unwrap();
    let assignee = UserRepo::create(
        &pool,
        &CreateUser {
            email: "dev@example.com".to_string(),
            name: "Dev".to_string(),
        },
    )
    .await
    .unwrap();

    let linked = TaskRepo::create(
        &pool,
        &doc(serde_json::json!({
            "title": "linked",
            "project": project.id.to_string(),
            "assigned_to": assignee.id.to_string(),
        })),
    )
    .await
    .unwrap();
    let dangling = TaskRepo::create(
        &pool,
        &doc(serde_json::json!({
            "title": "dangling",
            "project": DocId::generate().to_string(),
        })),
    )
    .await
    .unwrap();

    let resolved = TaskRepo::resolve_refs(&pool, vec![linked, dangling])
        .await
        .unwrap();

    assert_eq!(resolved[0]["project"]["name"], "Alpha");
    assert_eq!(resolved[0]["assigned_to"]["email"], "dev@example.com");
    assert!(resolved[1]["project"].is_null());
}
