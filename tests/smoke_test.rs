use chrono::NaiveDate;
use spendlens::init;
use spendlens_core::{
    time::FixedClock, BudgetService, ExpenseDraft, ExpenseService, FilterCriteria, LedgerStore,
    QueryService,
};
use spendlens_domain::{PeriodKey, RemainingState, Severity};
use spendlens_storage_json::JsonFileStorage;
use tempfile::tempdir;

#[test]
fn ledger_budget_and_queries_smoke() {
    init();

    let dir = tempdir().expect("tempdir");
    let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
    let storage = JsonFileStorage::new(dir.path().to_path_buf()).expect("storage");
    let mut store = LedgerStore::load(storage);

    for (category, amount, date, note) in [
        ("Rent", "300", "2024-03-01", ""),
        ("Food", "80", "2024-03-05", "groceries"),
        ("Food", "20", "2024-03-19", "coffee"),
        ("Travel", "500", "2024-02-11", "train"),
    ] {
        let draft = ExpenseDraft::new(category, amount, date).with_note(note);
        let record = ExpenseService::build(&draft, &clock).expect("valid draft");
        store.append(record).expect("append");
    }
    store.set_budget_input("500").expect("budget");

    let march = PeriodKey::new(2024, 3).unwrap();
    let progress = BudgetService::evaluate(store.ledger(), march);
    assert_eq!(progress.monthly_total, 400.0);
    assert_eq!(progress.percent, 80.0);
    assert_eq!(progress.severity, Severity::Warning);
    assert_eq!(progress.message.state, RemainingState::Normal);
    assert_eq!(progress.message.remaining, 100.0);

    let criteria = FilterCriteria {
        search_text: "COF".into(),
        month: Some(march),
        category: None,
    };
    let hits = QueryService::filter_indexed(store.records(), &criteria);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].position, 2);

    let slices = QueryService::chart_slices(store.records());
    let labels: Vec<&str> = slices.iter().map(|slice| slice.category.as_str()).collect();
    assert_eq!(labels, vec!["Rent", "Food", "Travel"]);
    assert_eq!(slices[1].total, 100.0);

    assert_eq!(store.reset_period(march).expect("reset"), 3);
    let reopened = LedgerStore::load(
        JsonFileStorage::new(dir.path().to_path_buf()).expect("reopen storage"),
    );
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.monthly_budget(), 500.0);
}
