use staffdb_core::db::schema::{self, ALL_TABLES};
use staffdb_core::db::{open_db_in_memory, open_db_with};
use staffdb_core::{RepoError, StaffService, StoreConfig, ValidationError};
use std::rc::Rc;

#[test]
fn hire_review_and_list_reviews_end_to_end() {
    let conn = open_db_in_memory().unwrap();
    let service = StaffService::new(&conn);
    service.create_schema().unwrap();
    let dept = service.add_department("Analytics", "London").unwrap();
    assert_eq!(dept.id(), Some(1));

    let ada = service.hire("Ada Lovelace", "Engineer", 1).unwrap();
    let ada_id = ada.borrow().id().unwrap();
    let review = service.add_review(2023, "Excellent work", ada_id).unwrap();

    let reviews = service.employee_reviews(&ada).unwrap();
    assert_eq!(reviews.len(), 1);
    assert!(Rc::ptr_eq(&reviews[0], &review));
    assert_eq!(reviews[0].borrow().summary(), "Excellent work");
    assert_eq!(reviews[0].borrow().employee_id(), ada_id);
}

#[test]
fn hire_checks_departments_in_the_same_store() {
    let conn = open_db_in_memory().unwrap();
    let service = StaffService::new(&conn);
    service.create_schema().unwrap();

    let err = service.hire("Ada", "Engineer", 1).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::UnknownDepartment(1))
    ));
    assert!(service.employees().get_all().unwrap().is_empty());
}

#[test]
fn schema_create_and_drop_are_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let service = StaffService::new(&conn);

    service.create_schema().unwrap();
    service.create_schema().unwrap();
    for table in ALL_TABLES {
        assert!(schema::table_exists(&conn, table.name).unwrap());
    }

    service.drop_schema().unwrap();
    service.drop_schema().unwrap();
    for table in ALL_TABLES {
        assert!(!schema::table_exists(&conn, table.name).unwrap());
    }
}

#[test]
fn drop_schema_forgets_tracked_instances() {
    let conn = open_db_in_memory().unwrap();
    let service = StaffService::new(&conn);
    service.create_schema().unwrap();
    service.add_department("Analytics", "London").unwrap();
    let ada = service.hire("Ada", "Engineer", 1).unwrap();

    service.drop_schema().unwrap();

    assert!(service.employees().identity_map().is_empty());
    assert_eq!(ada.borrow().name(), "Ada");
}

#[test]
fn dismiss_without_foreign_keys_leaves_reviews_behind() {
    let conn = open_db_in_memory().unwrap();
    let service = StaffService::new(&conn);
    service.create_schema().unwrap();
    service.add_department("Analytics", "London").unwrap();
    let ada = service.hire("Ada", "Engineer", 1).unwrap();
    let ada_id = ada.borrow().id().unwrap();
    service.add_review(2023, "Excellent work", ada_id).unwrap();

    service.dismiss(&ada).unwrap();

    assert!(service.employees().find_by_id(ada_id).unwrap().is_none());
    assert_eq!(service.reviews().get_all().unwrap().len(), 1);
}

#[test]
fn dismiss_with_foreign_keys_surfaces_constraint_error() {
    let config = StoreConfig {
        enforce_foreign_keys: true,
        ..StoreConfig::default()
    };
    let conn = open_db_with(&config).unwrap();
    let service = StaffService::new(&conn);
    service.create_schema().unwrap();
    service.add_department("Analytics", "London").unwrap();
    let ada = service.hire("Ada", "Engineer", 1).unwrap();
    let ada_id = ada.borrow().id().unwrap();
    service.add_review(2023, "Excellent work", ada_id).unwrap();

    let err = service.dismiss(&ada).unwrap_err();

    assert!(matches!(err, RepoError::Db(_)));
    assert_eq!(ada.borrow().id(), Some(ada_id));
    assert!(service.employees().identity_map().contains(ada_id));
}
