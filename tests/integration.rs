use loanwise::{
    CalcError, CalculatorConfig, LoanCalculator, LoanForm, LoanOutcome, LoanRequest, PacingSource,
    SafePacer, SingleLoan,
};
use chrono::{Duration, NaiveDate};
use serde_json::json;
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn simulated_calculator() -> LoanCalculator {
    LoanCalculator::from_config(&CalculatorConfig::simulated())
}

fn single_request(principal: f64) -> LoanRequest {
    LoanRequest::Single(SingleLoan {
        principal,
        annual_rate_percent: 5.5,
        start_date: date(2024, 1, 1),
        end_date: date(2029, 12, 31),
    })
}

#[tokio::test]
async fn test_calculation_is_paced() {
    let calculator = simulated_calculator();
    let control = calculator.pacer().pace_control().unwrap();

    let outcome = calculator.calculate(single_request(100_000.0)).await.unwrap();

    let LoanOutcome::Single(result) = outcome else {
        panic!("expected a single loan outcome");
    };
    assert_eq!(result.loan_term_months, 72.0);
    assert_eq!(control.pause_count(), 1);
    assert_eq!(control.total_paused(), Duration::milliseconds(500));
}

#[tokio::test]
async fn test_system_pacing_really_waits() {
    let calculator = LoanCalculator::new(
        SafePacer::new(PacingSource::System),
        Duration::milliseconds(50),
    );

    let start = std::time::Instant::now();
    calculator.calculate(single_request(100_000.0)).await.unwrap();

    assert!(start.elapsed() >= std::time::Duration::from_millis(50));
}

#[tokio::test]
async fn test_newer_request_supersedes_older() {
    let calculator = Arc::new(simulated_calculator());
    let control = calculator.pacer().pace_control().unwrap();
    control.hold();

    let first_calculator = calculator.clone();
    let first = tokio::spawn(async move {
        first_calculator.calculate(single_request(100_000.0)).await
    });
    while control.pause_count() < 1 {
        tokio::task::yield_now().await;
    }

    let second_calculator = calculator.clone();
    let second = tokio::spawn(async move {
        second_calculator.calculate(single_request(200_000.0)).await
    });
    while control.pause_count() < 2 {
        tokio::task::yield_now().await;
    }

    control.release();

    assert_eq!(
        first.await.unwrap(),
        Err(CalcError::Superseded { ticket: 1, latest: 2 })
    );
    let Ok(LoanOutcome::Single(result)) = second.await.unwrap() else {
        panic!("expected the newer calculation to land");
    };
    assert!(result.total_payment > 200_000.0);
}

#[tokio::test]
async fn test_reset_discards_in_flight_result() {
    let calculator = Arc::new(simulated_calculator());
    let control = calculator.pacer().pace_control().unwrap();
    control.hold();

    let in_flight = calculator.clone();
    let handle = tokio::spawn(async move { in_flight.calculate(single_request(100_000.0)).await });
    while control.pause_count() < 1 {
        tokio::task::yield_now().await;
    }

    calculator.reset();
    control.release();

    assert!(matches!(
        handle.await.unwrap(),
        Err(CalcError::Superseded { ticket: 1, .. })
    ));
    assert_eq!(calculator.generation(), 2);
}

#[tokio::test]
async fn test_sequential_requests_all_land() {
    let calculator = simulated_calculator();

    for principal in [50_000.0, 75_000.0, 125_000.0] {
        assert!(calculator.calculate(single_request(principal)).await.is_ok());
    }
    assert_eq!(calculator.generation(), 3);
}

#[tokio::test]
async fn test_split_form_from_json() {
    let calculator = simulated_calculator();
    let form: LoanForm = serde_json::from_value(json!({
        "type": "split",
        "tranches": [
            {
                "id": "t1",
                "label": "Fixed",
                "principal": "60000",
                "interestRate": "5.5",
                "startDate": "2024-01-01",
                "endDate": "2030-01-01"
            },
            {
                "id": "t2",
                "principal": "40000",
                "interestRate": "7",
                "startDate": "2024-01-01",
                "endDate": "2028-01-01"
            }
        ]
    }))
    .unwrap();

    let Ok(LoanOutcome::Split(result)) = calculator.calculate_form(&form).await else {
        panic!("expected a split loan outcome");
    };
    assert_eq!(result.combined.loan_term_months, 62.0);
    assert_eq!(result.tranches[0].label.as_deref(), Some("Fixed"));
    assert_eq!(result.tranches[1].label, None);
}

#[tokio::test]
async fn test_malformed_number_becomes_nan() {
    let calculator = simulated_calculator();
    let form: LoanForm = serde_json::from_value(json!({
        "type": "single",
        "principal": "lots",
        "interestRate": "5",
        "startDate": "2024-01-01",
        "endDate": "2025-01-01"
    }))
    .unwrap();

    let Ok(LoanOutcome::Single(result)) = calculator.calculate_form(&form).await else {
        panic!("expected a single loan outcome");
    };
    assert!(result.monthly_payment.is_nan());
}

#[tokio::test]
async fn test_malformed_date_is_rejected_before_pacing() {
    let calculator = simulated_calculator();
    let control = calculator.pacer().pace_control().unwrap();
    let form: LoanForm = serde_json::from_value(json!({
        "type": "fixed-period",
        "loanAmount": "600000",
        "totalTermYears": "30",
        "currentBalance": "500000",
        "rate": "6",
        "loanStartDate": "2020-01-01",
        "fixedRateStartDate": "2024-01-01",
        "fixedRateEndDate": "someday",
        "analysisStartDate": "2024-01-01",
        "analysisEndDate": "2026-01-01"
    }))
    .unwrap();

    let error = calculator.calculate_form(&form).await.unwrap_err();

    assert_eq!(
        error,
        CalcError::InvalidDate {
            field: "fixedRateEndDate".into(),
            value: "someday".into(),
        }
    );
    assert_eq!(control.pause_count(), 0);
}

#[tokio::test]
async fn test_fixed_rate_form_with_optional_principal() {
    let calculator = simulated_calculator();
    let form: LoanForm = serde_json::from_value(json!({
        "type": "fixed-rate",
        "loanAmount": "300000",
        "loanStartDate": "2024-01-01",
        "loanEndDate": "2054-01-01",
        "periods": [
            {
                "id": "p1",
                "interestRate": "5.5",
                "startDate": "2024-01-01",
                "endDate": "2026-01-01"
            },
            {
                "id": "p2",
                "principal": "280000",
                "interestRate": "6",
                "startDate": "2026-01-01",
                "endDate": "2029-01-01"
            }
        ]
    }))
    .unwrap();

    let Ok(LoanOutcome::FixedRate(result)) = calculator.calculate_form(&form).await else {
        panic!("expected a fixed-rate ladder outcome");
    };
    assert_eq!(result.periods[0].principal, 300_000.0);
    assert_eq!(result.periods[1].principal, 280_000.0);
}

#[tokio::test]
async fn test_fixed_period_form_without_future_rate() {
    let calculator = simulated_calculator();
    let form: LoanForm = serde_json::from_value(json!({
        "type": "fixed-period",
        "loanAmount": "600000",
        "totalTermYears": "30",
        "currentBalance": "500000",
        "rate": "6",
        "loanStartDate": "2020-01-01",
        "fixedRateStartDate": "2024-01-01",
        "fixedRateEndDate": "2026-01-01",
        "analysisStartDate": "2024-01-01",
        "analysisEndDate": "2026-01-01",
        "futureRate": ""
    }))
    .unwrap();

    let Ok(LoanOutcome::FixedPeriod(result)) = calculator.calculate_form(&form).await else {
        panic!("expected a fixed-period outcome");
    };
    assert!(result.future_estimate.is_none());
    assert_eq!(result.selected_period.months, 24);
}

#[tokio::test]
async fn test_request_round_trips_through_json() {
    let request = single_request(100_000.0);

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["type"], "single");
    assert_eq!(value["annualRatePercent"], 5.5);
    assert_eq!(value["startDate"], "2024-01-01");

    let parsed: LoanRequest = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, request);
}
