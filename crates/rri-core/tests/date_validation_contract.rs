//! Contract Test: Date Validation
//!
//! Verifies that:
//! - dates are accepted as strings, calendar dates and date-times
//! - malformed strings fail with InvalidDate before any request is made
//! - omitting the date checks the current period

mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use common::*;
use rri_core::{Error, Period};

const MALFORMED: [&str; 3] = ["2018-13-09", "2018-02-30", "not-a-date-string"];

#[tokio::test]
async fn malformed_dates_fail_before_any_request() {
    let (client, transport) = scripted_client(200);

    for resource in client.resources() {
        for date in MALFORMED {
            let err = resource.check(date).await.unwrap_err();
            assert!(
                matches!(err, Error::InvalidDate { .. }),
                "{} accepted {:?}: {:?}",
                resource.kind(),
                date,
                err
            );
            assert!(err.is_invalid_input());
        }
    }

    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn malformed_periods_fail_submission_before_any_request() {
    let (client, transport) = scripted_client(200);

    for resource in [client.functions(), client.transactions()] {
        for date in MALFORMED {
            let err = resource.submit("a,b\n", Some(date)).await.unwrap_err();
            assert!(matches!(err, Error::InvalidDate { .. }));
        }
    }

    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn date_values_are_formatted_per_resource() {
    let (client, transport) = scripted_client(200);
    let date = NaiveDate::from_ymd_opt(2018, 8, 9).unwrap();

    assert!(client.report().check(date).await.unwrap());
    assert!(transport.last_request().url.ends_with("/example/2018-08-09"));

    assert!(client.functions().check(date).await.unwrap());
    assert!(transport.last_request().url.ends_with("/example/2018-08"));

    let datetime = Utc.with_ymd_and_hms(2018, 8, 9, 12, 0, 0).unwrap();
    assert!(client.notification().check(datetime).await.unwrap());
    assert!(transport.last_request().url.ends_with("/example/2018-08-09"));
}

#[tokio::test]
async fn omitted_date_checks_current_period() {
    let (client, transport) = scripted_client(200);

    client.report().check(Period::Now).await.unwrap();
    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
    assert!(transport.last_request().url.ends_with(&today));

    client.transactions().check(None::<&str>).await.unwrap();
    let month = Utc::now().date_naive().format("%Y-%m").to_string();
    assert!(transport.last_request().url.ends_with(&month));

    client.functions().submit("a,b\n", None).await.unwrap();
    assert!(transport.last_request().url.ends_with(&month));
}
