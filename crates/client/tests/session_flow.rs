//! Drives a [`Session`] against a real API server bound to an ephemeral port.

use std::sync::Arc;

use assert_matches::assert_matches;
use sqlx::PgPool;

use linkasa_api::auth::jwt::JwtConfig;
use linkasa_api::config::ServerConfig;
use linkasa_api::router::build_app_router;
use linkasa_api::state::AppState;
use linkasa_client::models::{
    AccountChanges, AssignmentChanges, CourseChanges, NewAssignment, NewCourse, Registration,
    Role,
};
use linkasa_client::token::{MemoryTokenStore, TokenStore, TOKEN_KEY};
use linkasa_client::{ApiClient, ClientError, Session};

async fn spawn_server(pool: PgPool) -> String {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "client-test-secret".to_string(),
            access_token_expiry_secs: 300,
        },
    };
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn session(pool: PgPool) -> Session<MemoryTokenStore> {
    let api_url = spawn_server(pool).await;
    Session::new(ApiClient::new(api_url), MemoryTokenStore::default())
}

fn ann() -> Registration {
    Registration {
        name: "Ann".to_string(),
        email: "ann@x.com".to_string(),
        password: "pw1".to_string(),
        role: Role::Student,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_login_and_profile(pool: PgPool) {
    let session = session(pool).await;

    let account = session.register(&ann()).await.unwrap();
    assert_eq!(account.email, "ann@x.com");
    assert!(!session.is_authenticated().unwrap());

    session.login("ann@x.com", "pw1").await.unwrap();
    assert!(session.is_authenticated().unwrap());

    let claims = session.claims().unwrap();
    assert_eq!(claims.sub, account.id);
    assert_eq!(claims.name, "Ann");
    assert_eq!(claims.exp - claims.iat, 300);

    let profile = session.profile().await.unwrap();
    assert_eq!(profile.id, account.id);
    assert_eq!(profile.name, "Ann");
    assert_eq!(profile.role, Role::Student);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wrong_password_leaves_session_signed_out(pool: PgPool) {
    let session = session(pool).await;
    session.register(&ann()).await.unwrap();

    let err = session.login("ann@x.com", "nope").await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 401, .. });
    assert!(!session.is_authenticated().unwrap());

    let err = session.login("nobody@x.com", "pw1").await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 401, .. });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_garbage_token_expires_session(pool: PgPool) {
    let api_url = spawn_server(pool).await;
    let store = MemoryTokenStore::default();
    store.set(TOKEN_KEY, "not-a-token").unwrap();
    let session = Session::new(ApiClient::new(api_url), store);

    let err = session.profile().await.unwrap_err();
    assert_matches!(err, ClientError::SessionExpired(_));
    assert!(!session.is_authenticated().unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_of_deleted_account_expires_session(pool: PgPool) {
    let session = session(pool.clone()).await;
    let account = session.register(&ann()).await.unwrap();
    session.login("ann@x.com", "pw1").await.unwrap();

    sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(account.id)
        .execute(&pool)
        .await
        .unwrap();

    let err = session.profile().await.unwrap_err();
    assert_matches!(err, ClientError::SessionExpired(_));
    assert!(!session.is_authenticated().unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_guarded_requires_stored_token(pool: PgPool) {
    let session = session(pool).await;
    assert_matches!(session.guarded(), Err(ClientError::NotAuthenticated));
    assert_matches!(session.claims(), Err(ClientError::NotAuthenticated));

    session.register(&ann()).await.unwrap();
    session.login("ann@x.com", "pw1").await.unwrap();
    assert!(session.guarded().is_ok());

    session.logout().unwrap();
    assert_matches!(session.guarded(), Err(ClientError::NotAuthenticated));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_and_assignment_management(pool: PgPool) {
    let session = session(pool).await;
    session.register(&ann()).await.unwrap();
    session.login("ann@x.com", "pw1").await.unwrap();
    let user_id = session.claims().unwrap().sub;
    let api = session.guarded().unwrap();

    let course = api
        .create_course(&NewCourse {
            name: "Algorithms".to_string(),
            description: "Sorting and searching".to_string(),
            is_active: true,
            category: "CS".to_string(),
        })
        .await
        .unwrap();

    let updated = api
        .update_course(
            course.id,
            &CourseChanges {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!updated.is_active);
    assert_eq!(updated.name, "Algorithms");

    let assignment = api
        .create_assignment(&NewAssignment {
            user_id,
            course_id: course.id,
            name: "Quiz 1".to_string(),
            description: "Big-O".to_string(),
            is_finished: false,
        })
        .await
        .unwrap();

    let finished = api
        .update_assignment(
            assignment.id,
            &AssignmentChanges {
                is_finished: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(finished.is_finished);

    let listed = api.assignments_for_course(course.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].user_id, user_id);

    api.delete_assignment(assignment.id).await.unwrap();
    assert!(api.assignments_for_course(course.id).await.unwrap().is_empty());

    api.delete_course(course.id).await.unwrap();
    assert!(api.courses().await.unwrap().is_empty());

    let err = api.delete_course(course.id).await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 404, .. });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_reports_catalog(pool: PgPool) {
    let api = ApiClient::new(spawn_server(pool).await);

    let health = api.health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.database, "up");
    assert_eq!(health.token_lifetime_secs, 300);
    assert_eq!(health.catalog.unwrap().accounts, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_account_management_with_bearer_token(pool: PgPool) {
    let session = session(pool).await;
    let student = session.register(&ann()).await.unwrap();
    let bo = session
        .register(&Registration {
            name: "Bo".to_string(),
            email: "bo@x.com".to_string(),
            password: "pw2".to_string(),
            role: Role::Lecturer,
        })
        .await
        .unwrap();
    session.login("ann@x.com", "pw1").await.unwrap();
    let token = session.token().unwrap();
    let api = session.guarded().unwrap();

    let accounts = api.accounts(&token).await.unwrap();
    let ids: Vec<i64> = accounts.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![student.id, bo.id]);

    let err = api.accounts("not-a-token").await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 401, .. });

    let renamed = api
        .update_account(
            student.id,
            &AccountChanges {
                name: Some("Annie".to_string()),
                password: Some("pw1-new".to_string()),
                ..Default::default()
            },
            &token,
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Annie");
    assert_eq!(renamed.role, Role::Student);

    session.logout().unwrap();
    let err = session.login("ann@x.com", "pw1").await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 401, .. });
    session.login("ann@x.com", "pw1-new").await.unwrap();

    let api = session.guarded().unwrap();
    api.delete_account(bo.id, &token).await.unwrap();
    let err = api.delete_account(bo.id, &token).await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 404, .. });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_single_record_and_full_list_lookups(pool: PgPool) {
    let api = ApiClient::new(spawn_server(pool).await);

    let course = api
        .create_course(&NewCourse {
            name: "Physics".to_string(),
            description: "Mechanics".to_string(),
            is_active: true,
            category: "science".to_string(),
        })
        .await
        .unwrap();
    let fetched = api.course(course.id).await.unwrap();
    assert_eq!(fetched.name, "Physics");
    assert_eq!(fetched.category, "science");

    for (course_id, name) in [(course.id, "Lab 1"), (course.id + 100, "Elsewhere")] {
        api.create_assignment(&NewAssignment {
            user_id: 1,
            course_id,
            name: name.to_string(),
            description: "Write-up".to_string(),
            is_finished: false,
        })
        .await
        .unwrap();
    }

    let all = api.assignments().await.unwrap();
    assert_eq!(all.len(), 2);
    let lab = api.assignment(all[0].id).await.unwrap();
    assert_eq!(lab.name, "Lab 1");
    assert_eq!(lab.course_id, course.id);

    let err = api.course(course.id + 1).await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 404, .. });
    let err = api.assignment(999_999).await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 404, .. });
}
