// Repository contract against a real on-disk SQLite file
mod common;

use chrono::NaiveDate;
use common::TestDb;

use cafe_store::domain::{EntityId, Menu, Order, OrderStatus, User};
use cafe_store::error::{AppError, ErrorKind};
use cafe_store::repositories::{CrudRepository, MenuRepository, OrderRepository, UserRepository};

fn morning() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_milli_opt(9, 30, 0, 250)
        .unwrap()
}

#[test]
fn test_menu_lifecycle() {
    let db = TestDb::new();
    let repo = MenuRepository::new(db.pool.clone());

    let created = repo.create(Menu::new("Iced Latte", 1000, "coffee")).unwrap();
    let id = created.id.expect("store assigns an id");

    let mut loaded = repo.read(id).unwrap().expect("menu exists");
    assert_eq!(loaded, created);

    loaded.price = 1200;
    repo.update(loaded.clone()).unwrap();
    assert_eq!(repo.read(id).unwrap().unwrap().price, 1200);

    repo.delete(&loaded).unwrap();
    assert_eq!(repo.read(id).unwrap(), None);
}

#[test]
fn test_read_missing_id_is_none() {
    let db = TestDb::new();
    let repo = MenuRepository::new(db.pool.clone());

    assert_eq!(repo.read(EntityId::new(404)).unwrap(), None);
}

#[test]
fn test_find_all_returns_every_row() {
    let db = TestDb::new();
    let repo = MenuRepository::new(db.pool.clone());

    assert!(repo.find_all().unwrap().is_empty());

    for (name, price) in [("Americano", 800), ("Latte", 1000), ("Mocha", 1300)] {
        repo.create(Menu::new(name, price, "coffee")).unwrap();
    }

    let mut names: Vec<_> = repo.find_all().unwrap().into_iter().map(|m| m.name).collect();
    names.sort();
    assert_eq!(names, vec!["Americano", "Latte", "Mocha"]);
}

#[test]
fn test_find_all_identities_match_created() {
    let db = TestDb::new();
    let repo = MenuRepository::new(db.pool.clone());

    let mut created: Vec<EntityId> = ["Americano", "Latte", "Mocha"]
        .into_iter()
        .map(|name| repo.create(Menu::new(name, 1000, "coffee")).unwrap().id.unwrap())
        .collect();
    let mut listed: Vec<EntityId> = repo
        .find_all()
        .unwrap()
        .into_iter()
        .map(|menu| menu.id.unwrap())
        .collect();

    created.sort();
    listed.sort();
    assert_eq!(listed, created);
}

#[test]
fn test_menu_with_image_round_trip() {
    let db = TestDb::new();
    let repo = MenuRepository::new(db.pool.clone());

    let input = Menu::new("Iced Latte", 1000, "coffee").with_image("latte.png");
    let created = repo.create(input.clone()).unwrap();

    let mut loaded = repo.read(created.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded.image.as_deref(), Some("latte.png"));
    loaded.id = None;
    assert_eq!(loaded, input);
}

#[test]
fn test_update_twice_leaves_same_state() {
    let db = TestDb::new();
    let repo = MenuRepository::new(db.pool.clone());

    let mut menu = repo.create(Menu::new("Tea", 500, "tea")).unwrap();
    menu.image = Some("tea.png".to_string());

    repo.update(menu.clone()).unwrap();
    let first = repo.read(menu.id.unwrap()).unwrap();
    repo.update(menu.clone()).unwrap();
    let second = repo.read(menu.id.unwrap()).unwrap();

    assert_eq!(first, second);
    assert_eq!(second, Some(menu));
}

#[test]
fn test_update_of_deleted_row_is_silent() {
    let db = TestDb::new();
    let repo = MenuRepository::new(db.pool.clone());

    let menu = repo.create(Menu::new("Tea", 500, "tea")).unwrap();
    repo.delete(&menu).unwrap();

    repo.update(menu.clone()).unwrap();
    assert_eq!(repo.read(menu.id.unwrap()).unwrap(), None);
}

#[test]
fn test_delete_is_idempotent() {
    let db = TestDb::new();
    let repo = MenuRepository::new(db.pool.clone());

    let menu = repo.create(Menu::new("Tea", 500, "tea")).unwrap();
    repo.delete(&menu).unwrap();
    repo.delete(&menu).unwrap();
    repo.delete_by_id(EntityId::new(9999)).unwrap();

    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn test_unpersisted_entity_is_rejected_before_touching_store() {
    let db = TestDb::new();
    let repo = MenuRepository::new(db.pool.clone());
    let existing = repo.create(Menu::new("Tea", 500, "tea")).unwrap();

    let transient = Menu::new("Ghost", 1, "none");
    let update = repo.update(transient.clone()).unwrap_err();
    let delete = repo.delete(&transient).unwrap_err();

    assert_eq!(update.kind(), ErrorKind::Precondition);
    assert_eq!(delete.kind(), ErrorKind::Precondition);
    assert_eq!(repo.find_all().unwrap(), vec![existing]);
}

#[test]
fn test_preseeded_id_is_kept() {
    let db = TestDb::new();
    let repo = MenuRepository::new(db.pool.clone());

    let mut seeded = Menu::new("House Blend", 900, "coffee");
    seeded.id = Some(EntityId::new(77));

    let created = repo.create(seeded).unwrap();
    assert_eq!(created.id, Some(EntityId::new(77)));
    assert_eq!(repo.read(EntityId::new(77)).unwrap().unwrap().name, "House Blend");

    // Next generated id continues after the seeded one
    let next = repo.create(Menu::new("Decaf", 900, "coffee")).unwrap();
    assert!(next.id.unwrap().value() > 77);
}

#[test]
fn test_duplicate_preseeded_id_is_persistence_error() {
    let db = TestDb::new();
    let repo = MenuRepository::new(db.pool.clone());

    let mut seeded = Menu::new("House Blend", 900, "coffee");
    seeded.id = Some(EntityId::new(5));
    repo.create(seeded.clone()).unwrap();

    let error = repo.create(seeded).unwrap_err();
    assert!(matches!(error, AppError::Database(_)));
    assert_eq!(error.kind(), ErrorKind::Persistence);
}

#[test]
fn test_user_roles_survive_round_trip() {
    let db = TestDb::new();
    let repo = UserRepository::new(db.pool.clone());

    let user = User::new("barista", "secret")
        .with_role("STAFF")
        .with_role("ADMIN");
    let created = repo.create(user).unwrap();

    let loaded = repo.read(created.id.unwrap()).unwrap().unwrap();
    assert!(loaded.has_role("STAFF"));
    assert!(loaded.has_role("ADMIN"));
    assert_eq!(loaded, created);
}

#[test]
fn test_order_round_trip_and_status_update() {
    let db = TestDb::new();
    let menus = MenuRepository::new(db.pool.clone());
    let users = UserRepository::new(db.pool.clone());
    let orders = OrderRepository::new(db.pool.clone());

    let menu = menus.create(Menu::new("Latte", 1000, "coffee")).unwrap();
    let user = users.create(User::new("guest", "pw")).unwrap();

    let order = Order::new(
        "ORD-0000TEST0001",
        menu.id.unwrap(),
        user.id.unwrap(),
        menu.price,
        morning(),
    );
    let mut created = orders.create(order).unwrap();

    let loaded = orders.read(created.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.ordered_at, morning());

    created.status = OrderStatus::InProgress;
    orders.update(created.clone()).unwrap();
    assert_eq!(
        orders.read(created.id.unwrap()).unwrap().unwrap().status,
        OrderStatus::InProgress
    );
}

#[test]
fn test_order_with_missing_menu_violates_foreign_key() {
    let db = TestDb::new();
    let users = UserRepository::new(db.pool.clone());
    let orders = OrderRepository::new(db.pool.clone());

    let user = users.create(User::new("guest", "pw")).unwrap();
    let order = Order::new(
        "ORD-0000TEST0002",
        EntityId::new(999),
        user.id.unwrap(),
        1000,
        morning(),
    );

    let error = orders.create(order).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Persistence);
    assert!(orders.find_all().unwrap().is_empty());
}

#[test]
fn test_duplicate_order_code_is_rejected() {
    let db = TestDb::new();
    let menus = MenuRepository::new(db.pool.clone());
    let users = UserRepository::new(db.pool.clone());
    let orders = OrderRepository::new(db.pool.clone());

    let menu = menus.create(Menu::new("Latte", 1000, "coffee")).unwrap();
    let user = users.create(User::new("guest", "pw")).unwrap();
    let order = Order::new("ORD-DUPLICATE", menu.id.unwrap(), user.id.unwrap(), 1000, morning());

    orders.create(order.clone()).unwrap();
    let error = orders.create(order).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Persistence);
    assert_eq!(orders.find_all().unwrap().len(), 1);
}
