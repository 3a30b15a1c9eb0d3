use loanwise::format::format_payments;
use loanwise::{LoanCalculator, LoanOutcome, LoanRequest, Tranche, format_currency};
use chrono::NaiveDate;

fn tranche(id: &str, label: &str, principal: f64, rate: f64, years: i32) -> Tranche {
    Tranche {
        id: id.to_string(),
        label: Some(label.to_string()),
        principal,
        annual_rate_percent: rate,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024 + years, 1, 1).unwrap(),
    }
}

#[tokio::main]
async fn main() {
    println!("=== Loanwise Split Loan Example ===\n");

    // LOANCALC_PACING=simulated skips the display delay
    let calculator = LoanCalculator::from_env();
    let request = LoanRequest::Split {
        tranches: vec![
            tranche("t1", "Fixed 2 years", 450_000.0, 5.79, 30),
            tranche("t2", "Floating", 150_000.0, 7.24, 30),
            tranche("t3", "Revolving", 50_000.0, 7.5, 5),
        ],
    };

    let result = match calculator.calculate(request).await {
        Ok(LoanOutcome::Split(result)) => result,
        Ok(other) => panic!("unexpected outcome: {other:?}"),
        Err(error) => panic!("calculation failed: {error}"),
    };

    for tranche in &result.tranches {
        println!(
            "{:<14} {:>14} at {:>5.2}%  ->  {}/month over {} months",
            tranche.label.as_deref().unwrap_or(&tranche.id),
            format_currency(tranche.principal),
            tranche.annual_rate_percent,
            format_currency(tranche.result.monthly_payment),
            tranche.result.loan_term_months,
        );
    }

    println!("\nCombined ({} months weighted):", result.combined.loan_term_months);
    println!("   Principal:      {}", format_currency(result.total_principal));
    println!("   Total interest: {}", format_currency(result.combined.total_interest));
    println!("   Total repaid:   {}", format_currency(result.combined.total_payment));

    println!("\nRepayments:");
    for (frequency, amount) in format_payments(&result.combined.payment_frequencies()) {
        println!("   {frequency:<12} {amount}");
    }
}
