//! Tests for the employee service.

use std::sync::Arc;

use mockall::predicate::eq;
use sea_orm::{ActiveValue::Set, DbErr, RuntimeErr};

use super::*;
use crate::repository::MockEmployeeRepository;

fn ashish() -> employees::Model {
    employees::Model {
        id: 1,
        name: "Ashish Patel".to_string(),
        email: "ashish.patel@gmail.com".to_string(),
        salary: 145,
    }
}

fn ashish_dto() -> EmployeeDto {
    EmployeeDto::from(ashish())
}

fn make_service(repo: MockEmployeeRepository) -> EmployeeService<MockEmployeeRepository> {
    EmployeeService::new(Arc::new(repo))
}

/// What the store would hand back after persisting `active` under `id`.
fn stored_as(id: i64, active: &employees::ActiveModel) -> employees::Model {
    employees::Model {
        id,
        name: active.name.clone().unwrap(),
        email: active.email.clone().unwrap(),
        salary: active.salary.clone().unwrap(),
    }
}

#[tokio::test]
async fn get_by_id_returns_stored_employee() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .with(eq(1))
        .times(1)
        .return_once(|_| Ok(Some(ashish())));

    let service = make_service(repo);
    let dto = service.get_by_id(1).await.expect("employee exists");

    assert_eq!(dto, ashish_dto());
}

#[tokio::test]
async fn get_by_id_fails_when_absent() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .with(eq(2))
        .times(1)
        .return_once(|_| Ok(None));

    let service = make_service(repo);
    let err = service.get_by_id(2).await.expect_err("not found");

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Employee with id 2 not found");
}

#[tokio::test]
async fn get_by_id_propagates_store_failure() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Err(DbErr::Conn(RuntimeErr::Internal("pool closed".to_string()))));

    let service = make_service(repo);
    let err = service.get_by_id(1).await.expect_err("store failure");

    assert!(matches!(err, AppError::Database(_)));
}

#[tokio::test]
async fn create_saves_once_and_returns_assigned_id() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_email()
        .withf(|email: &str| email == "new@x.com")
        .times(1)
        .return_once(|_| Ok(Vec::new()));
    repo.expect_save()
        .withf(|active: &employees::ActiveModel| active.id.is_not_set())
        .times(1)
        .return_once(|active| Ok(stored_as(7, &active)));

    let service = make_service(repo);
    let created = service
        .create(&EmployeeDto::new("New", "new@x.com", 100))
        .await
        .expect("create succeeds");

    assert_eq!(created.id, Some(7));
    assert_eq!(created.name, "New");
    assert_eq!(created.email, "new@x.com");
    assert_eq!(created.salary, 100);
}

#[tokio::test]
async fn create_ignores_caller_supplied_id() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_email().times(1).return_once(|_| Ok(Vec::new()));
    repo.expect_save()
        .withf(|active: &employees::ActiveModel| active.id.is_not_set())
        .times(1)
        .return_once(|active| Ok(stored_as(3, &active)));

    let mut dto = EmployeeDto::new("New", "new@x.com", 100);
    dto.id = Some(99);

    let service = make_service(repo);
    let created = service.create(&dto).await.expect("create succeeds");

    assert_eq!(created.id, Some(3));
}

#[tokio::test]
async fn create_rejects_duplicate_email_without_saving() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_email()
        .withf(|email: &str| email == "ashish.patel@gmail.com")
        .times(1)
        .return_once(|_| Ok(vec![ashish()]));
    repo.expect_save().times(0);

    let service = make_service(repo);
    let err = service.create(&ashish_dto()).await.expect_err("conflict");

    assert!(err.is_conflict());
    assert_eq!(
        err.to_string(),
        "Employee already exists with email: ashish.patel@gmail.com"
    );
}

#[tokio::test]
async fn create_stores_free_text_fields_as_given() {
    let inputs = [
        EmployeeDto::new("", "blank.name@x.com", 100),
        EmployeeDto::new("Free Text", "free text", 100),
        EmployeeDto::new("In Debt", "in.debt@x.com", -50),
    ];

    for (index, dto) in inputs.into_iter().enumerate() {
        let id = index as i64 + 1;
        let expected = dto.clone();

        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_email().times(1).return_once(|_| Ok(Vec::new()));
        repo.expect_save()
            .times(1)
            .return_once(move |active| Ok(stored_as(id, &active)));

        let service = make_service(repo);
        let created = service.create(&dto).await.expect("create succeeds");

        assert_eq!(created, EmployeeDto { id: Some(id), ..expected });
    }
}

#[tokio::test]
async fn create_passes_through_other_save_failures() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_email().times(1).return_once(|_| Ok(Vec::new()));
    repo.expect_save()
        .times(1)
        .return_once(|_| Err(DbErr::Custom("disk full".to_string())));

    let service = make_service(repo);
    let err = service
        .create(&EmployeeDto::new("New", "new@x.com", 100))
        .await
        .expect_err("store failure");

    assert!(matches!(err, AppError::Database(_)));
}

#[tokio::test]
async fn update_fails_when_absent_without_saving() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .with(eq(1))
        .times(1)
        .return_once(|_| Ok(None));
    repo.expect_save().times(0);

    let service = make_service(repo);
    let err = service.update(1, &ashish_dto()).await.expect_err("not found");

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Employee with id 1 not found");
}

#[tokio::test]
async fn update_rejects_email_change_without_saving() {
    let mut stored = ashish();
    stored.name = "ashish kumar".to_string();
    stored.email = "ashish.kumar@gmail.com".to_string();

    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .with(eq(1))
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    repo.expect_save().times(0);

    let service = make_service(repo);
    let err = service.update(1, &ashish_dto()).await.expect_err("conflict");

    assert!(err.is_conflict());
    assert_eq!(err.to_string(), "The email of the employee cannot be updated");
}

#[tokio::test]
async fn update_overwrites_fields_and_keeps_path_id() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .with(eq(1))
        .times(1)
        .return_once(|_| Ok(Some(ashish())));
    repo.expect_save()
        .withf(|active: &employees::ActiveModel| {
            active.id == Set(1)
                && active.name == Set("nanke".to_string())
                && active.salary == Set(200)
        })
        .times(1)
        .return_once(|active| Ok(stored_as(1, &active)));

    let mut dto = ashish_dto();
    dto.id = Some(42);
    dto.name = "nanke".to_string();
    dto.salary = 200;

    let service = make_service(repo);
    let updated = service.update(1, &dto).await.expect("update succeeds");

    assert_eq!(updated.id, Some(1));
    assert_eq!(updated.name, "nanke");
    assert_eq!(updated.email, "ashish.patel@gmail.com");
    assert_eq!(updated.salary, 200);
}

#[tokio::test]
async fn update_accepts_free_text_email_when_unchanged() {
    let mut stored = ashish();
    stored.email = "ashish-legacy".to_string();

    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .with(eq(1))
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    repo.expect_save()
        .times(1)
        .return_once(|active| Ok(stored_as(1, &active)));

    let service = make_service(repo);
    let updated = service
        .update(1, &EmployeeDto::new("", "ashish-legacy", -5))
        .await
        .expect("update succeeds");

    assert_eq!(updated.id, Some(1));
    assert_eq!(updated.name, "");
    assert_eq!(updated.email, "ashish-legacy");
    assert_eq!(updated.salary, -5);
}

#[tokio::test]
async fn delete_fails_when_absent_without_deleting() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_exists_by_id()
        .with(eq(1))
        .times(1)
        .return_once(|_| Ok(false));
    repo.expect_delete_by_id().times(0);

    let service = make_service(repo);
    let err = service.delete(1).await.expect_err("not found");

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Employee with id 1 not found");
}

#[tokio::test]
async fn delete_removes_existing_employee_once() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_exists_by_id()
        .with(eq(1))
        .times(1)
        .return_once(|_| Ok(true));
    repo.expect_delete_by_id()
        .with(eq(1))
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(repo);
    service.delete(1).await.expect("delete succeeds");
}
