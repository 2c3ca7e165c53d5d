use fintrack_core::RecordStore;
use fintrack_domain::{Category, Expense, Income, IncomeGoal, MonthWindow, Payment};
use fintrack_store_json::JsonRecordStore;
use uuid::Uuid;

fn sample_category(owner: Uuid, name: &str) -> Category {
    Category::new(owner, name, None)
}

#[test]
fn lists_preserve_insertion_order() {
    let store = JsonRecordStore::in_memory();
    let owner = Uuid::new_v4();
    for name in ["One", "Two", "Three"] {
        store.insert_category(sample_category(owner, name)).unwrap();
    }
    let names: Vec<String> = store
        .categories_by_owner(owner)
        .unwrap()
        .into_iter()
        .map(|category| category.name)
        .collect();
    assert_eq!(names, vec!["One", "Two", "Three"]);
}

#[test]
fn listings_are_scoped_to_the_owner() {
    let store = JsonRecordStore::in_memory();
    let owner = Uuid::new_v4();
    let other = Uuid::new_v4();
    store.insert_category(sample_category(owner, "Mine")).unwrap();
    store.insert_category(sample_category(other, "Theirs")).unwrap();

    let mine = store.categories_by_owner(owner).unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].name, "Mine");
}

#[test]
fn window_queries_filter_half_open_bounds() {
    let store = JsonRecordStore::in_memory();
    let owner = Uuid::new_v4();
    let category = Uuid::new_v4();
    let window = MonthWindow::resolve(0, 2025).unwrap();

    for date in [window.start, window.end - 1, window.end, window.start - 1] {
        store
            .insert_expense(Expense::new(owner, 1.0, category, date, None, false))
            .unwrap();
        store
            .insert_income(Income::new(owner, 1.0, "Salary", date, None))
            .unwrap();
    }

    assert_eq!(store.expenses_in_window(owner, &window).unwrap().len(), 2);
    assert_eq!(store.income_in_window(owner, &window).unwrap().len(), 2);
}

#[test]
fn expense_reference_check_sees_only_owned_records() {
    let store = JsonRecordStore::in_memory();
    let owner = Uuid::new_v4();
    let category = Uuid::new_v4();
    store
        .insert_expense(Expense::new(Uuid::new_v4(), 5.0, category, 0, None, false))
        .unwrap();
    assert!(!store.expense_references_category(owner, category).unwrap());

    store
        .insert_expense(Expense::new(owner, 5.0, category, 0, None, false))
        .unwrap();
    assert!(store.expense_references_category(owner, category).unwrap());
}

#[test]
fn goal_upsert_keeps_one_record_per_owner() {
    let store = JsonRecordStore::in_memory();
    let owner = Uuid::new_v4();
    store
        .upsert_income_goal(IncomeGoal::monthly(owner, 1000.0))
        .unwrap();
    store
        .upsert_income_goal(IncomeGoal::monthly(owner, 1500.0))
        .unwrap();
    let goal = store.income_goal(owner).unwrap().expect("goal stored");
    assert_eq!(goal.target_amount, 1500.0);
}

#[test]
fn payments_resolve_by_owner_and_session() {
    let store = JsonRecordStore::in_memory();
    let owner = Uuid::new_v4();
    store
        .upsert_payment(Payment::pending(owner, "sess_1", 9.99))
        .unwrap();

    assert!(store.payment_by_owner(owner).unwrap().is_some());
    assert!(store.payment_by_session("sess_1").unwrap().is_some());
    assert!(store.payment_by_session("sess_2").unwrap().is_none());
}

#[test]
fn snapshot_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    let owner = Uuid::new_v4();

    {
        let store = JsonRecordStore::open(&path).unwrap();
        let category = sample_category(owner, "Groceries");
        let category_id = category.id;
        store.insert_category(category).unwrap();
        store
            .insert_expense(Expense::new(
                owner,
                42.0,
                category_id,
                1_700_000_000_000,
                Some("weekly shop".into()),
                false,
            ))
            .unwrap();
        store
            .upsert_payment(Payment::pending(owner, "sess_1", 9.99))
            .unwrap();
    }

    let reopened = JsonRecordStore::open(&path).unwrap();
    assert_eq!(reopened.categories_by_owner(owner).unwrap().len(), 1);
    let expenses = reopened.expenses_by_owner(owner).unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].description.as_deref(), Some("weekly shop"));
    assert!(reopened.payment_by_session("sess_1").unwrap().is_some());
}

#[test]
fn opening_a_missing_path_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonRecordStore::open(dir.path().join("fresh.json")).unwrap();
    assert!(store.categories_by_owner(Uuid::new_v4()).unwrap().is_empty());
}

#[test]
fn deletes_remove_only_the_target_record() {
    let store = JsonRecordStore::in_memory();
    let owner = Uuid::new_v4();
    let category = Uuid::new_v4();
    let keep = Expense::new(owner, 1.0, category, 0, None, false);
    let drop = Expense::new(owner, 2.0, category, 0, None, false);
    let drop_id = drop.id;
    store.insert_expense(keep.clone()).unwrap();
    store.insert_expense(drop).unwrap();

    store.delete_expense(drop_id).unwrap();
    let remaining = store.expenses_by_owner(owner).unwrap();
    assert_eq!(remaining, vec![keep]);
}
