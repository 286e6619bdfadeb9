use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use quote_common::Quote;
use quote_ledger::{NoopObserver, QuoteLedger, SubmitStatus};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
}

fn aapl() -> QuoteLedger<NoopObserver> {
    QuoteLedger::with_observer("AAPL", Quote::new(t0(), 175.0), "USD", NoopObserver)
}

#[test]
fn negative_price_leaves_state_untouched() {
    let mut ledger = aapl();
    let before = Arc::clone(ledger.current());

    let status = ledger.submit_quote(Quote::new(t0() + Duration::hours(1), -0.01));

    assert_eq!(status, SubmitStatus::RejectedNegativePrice);
    assert!(Arc::ptr_eq(ledger.current(), &before));
    assert_eq!(ledger.current().price, 175.0);
    assert!(ledger.history().is_empty());
}

#[test]
fn stale_quote_is_filed_without_promotion() {
    let mut ledger = aapl();
    let before = Arc::clone(ledger.current());
    let stale = Quote::new(t0() - Duration::hours(24), 180.0);

    let status = ledger.submit_quote(stale.clone());

    assert_eq!(status, SubmitStatus::FiledStale);
    assert!(Arc::ptr_eq(ledger.current(), &before));
    assert_eq!(ledger.current().price, 175.0);
    assert_eq!(ledger.history().len(), 1);
    assert_eq!(*ledger.history()[0], stale);
}

#[test]
fn valid_quote_promotes_and_archives_previous() {
    let mut ledger = aapl();
    let before = Arc::clone(ledger.current());
    let newer = Quote::new(t0() + Duration::hours(1), 190.0);

    let status = ledger.submit_quote(newer.clone());

    assert_eq!(status, SubmitStatus::Accepted);
    assert_eq!(**ledger.current(), newer);
    assert_eq!(ledger.history().len(), 1);
    assert!(Arc::ptr_eq(&ledger.history()[0], &before));
}

#[test]
fn sequence_keeps_arrival_order() {
    let mut ledger = aapl();
    let stale = Quote::new(t0() - Duration::hours(24), 180.0);

    let statuses = [
        ledger.submit_quote(Quote::new(t0() + Duration::hours(1), -0.01)),
        ledger.submit_quote(stale.clone()),
        ledger.submit_quote(Quote::new(t0() + Duration::hours(1), 190.0)),
    ];

    assert_eq!(
        statuses,
        [
            SubmitStatus::RejectedNegativePrice,
            SubmitStatus::FiledStale,
            SubmitStatus::Accepted,
        ]
    );
    assert_eq!(ledger.current().price, 190.0);
    let history: Vec<Quote> = ledger.history().iter().map(|q| (**q).clone()).collect();
    assert_eq!(history, vec![stale, Quote::new(t0(), 175.0)]);
}

#[test]
fn shared_quote_identity_survives_promotion_and_archiving() {
    let mut ledger = aapl();
    let first = Arc::new(Quote::new(t0() + Duration::minutes(1), 176.0));
    let second = Arc::new(Quote::new(t0() + Duration::minutes(2), 177.0));

    ledger.submit_quote(Arc::clone(&first));
    assert!(Arc::ptr_eq(ledger.current(), &first));

    ledger.submit_quote(Arc::clone(&second));
    assert!(Arc::ptr_eq(ledger.current(), &second));
    assert!(Arc::ptr_eq(&ledger.history()[1], &first));
}

#[test]
fn history_never_shrinks_and_current_tracks_latest_accepted() {
    let mut ledger = aapl();
    let offsets_and_prices = [
        (30, 176.0),
        (-90, 174.0),
        (60, -3.0),
        (60, 178.5),
        (60, 179.0),
        (10, 170.0),
        (-1, 0.0),
        (120, 181.0),
    ];

    let mut last_len = ledger.history().len();
    for (minutes, price) in offsets_and_prices {
        let current_before = Arc::clone(ledger.current());
        let quote = Quote::new(t0() + Duration::minutes(minutes), price);
        let status = ledger.submit_quote(quote.clone());

        let len = ledger.history().len();
        assert!(len >= last_len);
        match status {
            SubmitStatus::RejectedNegativePrice => {
                assert_eq!(len, last_len);
                assert!(Arc::ptr_eq(ledger.current(), &current_before));
            }
            SubmitStatus::FiledStale => {
                assert_eq!(len, last_len + 1);
                assert_eq!(**ledger.history().last().unwrap(), quote);
                assert!(Arc::ptr_eq(ledger.current(), &current_before));
            }
            SubmitStatus::Accepted => {
                assert_eq!(len, last_len + 1);
                assert!(Arc::ptr_eq(ledger.history().last().unwrap(), &current_before));
                assert_eq!(**ledger.current(), quote);
            }
        }
        last_len = len;
    }

    assert_eq!(ledger.current().price, 181.0);
    assert_eq!(ledger.history().len(), 7);
}
