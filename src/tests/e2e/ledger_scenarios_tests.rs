use crate::modules::attendance::core::calendar::CalendarDate;
use crate::modules::attendance::core::validation::ValidationError;
use crate::modules::attendance::use_cases::get_ledger::handler::GetLedgerHandler;
use crate::modules::attendance::use_cases::record_punch::handler::{
    ApplicationError, LedgerConfig, RecordPunchHandler,
};
use crate::shared::infrastructure::ledger_store::LedgerStore;
use crate::shared::infrastructure::ledger_store::file_system::FileSystemLedgerStore;
use crate::shared::infrastructure::ledger_store::in_memory::InMemoryLedgerStore;
use crate::tests::fixtures::punch_event::PunchEventBuilder;
use std::sync::Arc;

async fn punch_all(handler: &RecordPunchHandler<InMemoryLedgerStore>, times: &[&str]) {
    for time in times {
        handler
            .handle(PunchEventBuilder::new().time(*time).build())
            .await
            .unwrap();
    }
}

fn march_15() -> CalendarDate {
    CalendarDate::parse_iso("2024-03-15", false).unwrap()
}

#[tokio::test]
async fn a_short_day_earns_no_overtime() {
    let store = Arc::new(InMemoryLedgerStore::new());
    let handler = RecordPunchHandler::new(store.clone(), LedgerConfig::default());
    punch_all(&handler, &["08:00:00", "16:00:00"]).await;

    let ledger = store.load("1001").await.unwrap().unwrap();
    let day = ledger.day(&march_15()).unwrap();
    assert_eq!(day.worked_minutes, Some(420));
    assert_eq!(day.overtime_minutes, Some(0));

    let json = serde_json::to_value(day).unwrap();
    assert_eq!(json["horas_trabalhadas"], "07:00");
    assert_eq!(json["horas_extras"], "00:00");
}

#[tokio::test]
async fn a_long_day_earns_overtime() {
    let store = Arc::new(InMemoryLedgerStore::new());
    let handler = RecordPunchHandler::new(store.clone(), LedgerConfig::default());
    punch_all(&handler, &["08:00:00", "18:00:00"]).await;

    let day = store.load("1001").await.unwrap().unwrap().days[0].clone();
    let json = serde_json::to_value(&day).unwrap();
    assert_eq!(json["horas_trabalhadas"], "09:00");
    assert_eq!(json["horas_extras"], "01:40");
}

#[tokio::test]
async fn a_single_punch_leaves_the_summary_unset() {
    let store = Arc::new(InMemoryLedgerStore::new());
    let handler = RecordPunchHandler::new(store.clone(), LedgerConfig::default());
    punch_all(&handler, &["08:00:00"]).await;

    let day = store.load("1001").await.unwrap().unwrap().days[0].clone();
    let json = serde_json::to_value(&day).unwrap();
    assert_eq!(json, serde_json::json!({"data":"2024-03-15","marcacoes":["08:00:00"]}));
}

#[tokio::test]
async fn middle_punches_do_not_change_the_duration() {
    let store = Arc::new(InMemoryLedgerStore::new());
    let handler = RecordPunchHandler::new(store.clone(), LedgerConfig::default());
    punch_all(&handler, &["08:00:00", "12:00:00", "17:00:00"]).await;

    let day = store.load("1001").await.unwrap().unwrap().days[0].clone();
    assert_eq!(day.entrada.unwrap().as_str(), "08:00:00");
    assert_eq!(day.saida.unwrap().as_str(), "17:00:00");
    assert_eq!(day.worked_minutes, Some(480));
    assert_eq!(day.overtime_minutes, Some(40));
    assert_eq!(day.punches.len(), 3);
}

#[tokio::test]
async fn a_blank_name_does_not_erase_the_stored_one() {
    let store = Arc::new(InMemoryLedgerStore::new());
    let handler = RecordPunchHandler::new(store.clone(), LedgerConfig::default());
    let reader = GetLedgerHandler::new(store.clone());

    assert_eq!(reader.handle("1001").await.unwrap(), None);
    handler.handle(PunchEventBuilder::new().build()).await.unwrap();
    handler
        .handle(
            PunchEventBuilder::new()
                .employee_name("")
                .no_tax_id()
                .time("17:00:00")
                .build(),
        )
        .await
        .unwrap();

    let ledger = reader.handle("1001").await.unwrap().unwrap();
    assert_eq!(ledger.employee_name, "Maria Souza");
    assert_eq!(ledger.tax_id, "12345678900");
    assert_eq!(ledger.days[0].punches.len(), 2);
}

#[tokio::test]
async fn a_punch_without_date_leaves_the_document_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileSystemLedgerStore::open(dir.path()).await.unwrap());
    let handler = RecordPunchHandler::new(store.clone(), LedgerConfig::default());
    handler.handle(PunchEventBuilder::new().build()).await.unwrap();

    let path = store.data_dir().join("1001.json");
    let before = std::fs::read(&path).unwrap();

    let result = handler
        .handle(PunchEventBuilder::new().no_date().time("17:00:00").build())
        .await;

    assert!(matches!(
        result,
        Err(ApplicationError::Validation(ValidationError::MissingField("date")))
    ));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[tokio::test]
async fn punches_on_different_days_keep_separate_records() {
    let store = Arc::new(InMemoryLedgerStore::new());
    let handler = RecordPunchHandler::new(store.clone(), LedgerConfig::default());
    for (date, time) in [
        ("2024-03-15", "08:00:00"),
        ("2024-03-16", "09:00:00"),
        ("2024-03-15", "17:00:00"),
    ] {
        handler
            .handle(PunchEventBuilder::new().date(date).time(time).build())
            .await
            .unwrap();
    }

    let ledger = store.load("1001").await.unwrap().unwrap();
    let dates: Vec<_> = ledger.days.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, ["2024-03-15", "2024-03-16"]);
    assert_eq!(ledger.days[0].worked_minutes, Some(480));
    assert_eq!(ledger.days[1].worked_minutes, None);
}
