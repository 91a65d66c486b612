mod support;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use support::feed_testkit::{dashboard_transactions, references};
use txsift_client::feed::parse_feed;
use txsift_client::filter::{
    DateInterval, EmptyState, FilterSpecification, Status, StatusSet, Transaction,
    TransactionKind, TransactionStatus, apply, apply_in, build_clear, filter_transactions,
};

fn date_interval(start: (i32, u32, u32), end: (i32, u32, u32)) -> Option<DateInterval> {
    let start = NaiveDate::from_ymd_opt(start.0, start.1, start.2)?;
    let end = NaiveDate::from_ymd_opt(end.0, end.1, end.2)?;
    Some(DateInterval::from_dates(start, end))
}

fn statuses(values: &[Status]) -> StatusSet {
    values.iter().copied().collect()
}

fn dated(reference: &str, date: &str) -> Transaction {
    Transaction {
        reference: Some(reference.to_string()),
        amount: Decimal::new(500, 2),
        date: date.to_string(),
        status: TransactionStatus::Known(Status::Successful),
        kind: TransactionKind::Payment,
        metadata: None,
    }
}

#[test]
fn no_filters_returns_every_transaction_in_order() {
    let feed = dashboard_transactions();
    let result = apply_in(&feed, &build_clear(), &Utc);
    assert_eq!(references(&result), vec!["TXN001", "TXN002", "TXN003", "TXN004"]);
}

#[test]
fn empty_specification_is_identity_in_the_local_zone_too() {
    let feed = dashboard_transactions();
    let result = apply(&feed, &FilterSpecification::default());
    assert_eq!(result.len(), feed.len());
    for (kept, original) in result.iter().zip(feed.iter()) {
        assert_eq!(*kept, original);
    }
}

#[test]
fn status_only_filter_keeps_the_single_failed_transaction() {
    let feed = dashboard_transactions();
    let spec = FilterSpecification::new(None, statuses(&[Status::Failed]));
    let result = apply_in(&feed, &spec, &Utc);
    assert_eq!(references(&result), vec!["TXN003"]);
    assert_eq!(result[0].date, "2025-10-15T09:15:00Z");
}

#[test]
fn combined_filter_requires_both_gates() {
    let feed = dashboard_transactions();
    let spec = FilterSpecification::new(
        date_interval((2025, 10, 20), (2025, 10, 23)),
        statuses(&[Status::Successful, Status::Pending]),
    );
    let result = apply_in(&feed, &spec, &Utc);
    assert_eq!(references(&result), vec!["TXN001", "TXN002"]);
}

#[test]
fn empty_feed_reports_no_transactions_at_all() {
    let feed: Vec<Transaction> = Vec::new();
    let spec = FilterSpecification::new(
        date_interval((2025, 10, 20), (2025, 10, 23)),
        statuses(&[Status::Pending]),
    );
    let outcome = filter_transactions(&feed, &spec, &Utc);
    assert!(outcome.rows.is_empty());
    assert_eq!(outcome.empty_state(), Some(EmptyState::NoTransactions));
}

#[test]
fn far_future_range_reports_no_matches() {
    let feed = dashboard_transactions();
    let spec = FilterSpecification::new(date_interval((2099, 1, 1), (2099, 1, 2)), StatusSet::new());
    let outcome = filter_transactions(&feed, &spec, &Utc);
    assert!(outcome.rows.is_empty());
    assert_eq!(outcome.total, 4);
    assert_eq!(outcome.empty_state(), Some(EmptyState::NoMatches));
    assert_eq!(outcome.badge_count(), Some(0));
}

#[test]
fn date_gate_boundaries_are_inclusive_to_the_millisecond() {
    let feed = vec![
        dated("before-start", "2025-10-19T23:59:59.999999Z"),
        dated("at-start", "2025-10-20T00:00:00.000Z"),
        dated("at-end", "2025-10-23T23:59:59.999Z"),
        dated("after-end", "2025-10-24T00:00:00.000001Z"),
    ];
    let spec = FilterSpecification::new(date_interval((2025, 10, 20), (2025, 10, 23)), StatusSet::new());
    let result = apply_in(&feed, &spec, &Utc);
    assert_eq!(references(&result), vec!["at-start", "at-end"]);
}

#[test]
fn filtering_is_idempotent() {
    let feed = dashboard_transactions();
    let specs = [
        build_clear(),
        FilterSpecification::new(None, statuses(&[Status::Successful])),
        FilterSpecification::new(
            date_interval((2025, 10, 15), (2025, 10, 22)),
            statuses(&[Status::Failed, Status::Pending]),
        ),
    ];
    for spec in &specs {
        let once = apply_in(&feed, spec, &Utc);
        let twice = apply_in(once.iter().copied(), spec, &Utc);
        assert_eq!(once, twice);
    }
}

#[test]
fn filtering_preserves_relative_order() {
    let feed = vec![
        dated("c", "2025-10-22T08:00:00Z"),
        dated("a", "2025-10-20T08:00:00Z"),
        dated("d", "2025-10-30T08:00:00Z"),
        dated("b", "2025-10-21T08:00:00Z"),
    ];
    let spec = FilterSpecification::new(date_interval((2025, 10, 20), (2025, 10, 22)), StatusSet::new());
    assert_eq!(references(&apply_in(&feed, &spec, &Utc)), vec!["c", "a", "b"]);
}

#[test]
fn empty_status_set_admits_every_status_value() {
    let mut feed = dashboard_transactions();
    let mut completed = dated("done", "2025-10-21T08:00:00Z");
    completed.status = TransactionStatus::Completed;
    let mut odd = dated("odd", "2025-10-21T08:00:00Z");
    odd.status = TransactionStatus::Unrecognized("chargeback".to_string());
    feed.push(completed);
    feed.push(odd);

    let result = apply_in(&feed, &build_clear(), &Utc);
    assert_eq!(result.len(), 6);
}

#[test]
fn source_records_are_returned_by_reference() {
    let feed = dashboard_transactions();
    let result = apply_in(&feed, &FilterSpecification::new(None, statuses(&[Status::Pending])), &Utc);
    assert_eq!(result.len(), 1);
    assert!(std::ptr::eq(result[0], &feed[1]));
}

#[test]
fn feed_statuses_outside_the_wire_names_fail_an_active_status_filter() {
    let parsed = parse_feed(
        r#"[
            {"payment_reference": "A", "amount": "1", "date": "2025-10-20T10:00:00Z", "status": "Failed"},
            {"payment_reference": "B", "amount": "1", "date": "2025-10-20T10:00:00Z", "status": " pending "},
            {"payment_reference": "C", "amount": "1", "date": "2025-10-20T10:00:00Z", "status": "pending"}
        ]"#,
    );
    assert!(parsed.is_ok());
    if let Ok(feed) = parsed {
        let spec = FilterSpecification::new(None, statuses(&[Status::Failed, Status::Pending]));
        assert_eq!(references(&apply_in(&feed, &spec, &Utc)), vec!["C"]);
        assert_eq!(apply_in(&feed, &build_clear(), &Utc).len(), 3);
    }
}
