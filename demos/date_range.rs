use loanwise::{DateRangeState, DateRangeSync, PeriodUnit};

fn show(step: &str, range: &DateRangeSync) {
    let state = range.state();
    println!("{step}");
    println!(
        "   start={:?} end={:?} period={:?} {:?}",
        state.start_date, state.end_date, state.period, state.period_type
    );
    if let Some(message) = &range.errors().end_date {
        println!("   error: {message}");
    }
}

fn main() {
    println!("=== Loanwise Date Range Example ===\n");

    let mut range = DateRangeSync::new(
        DateRangeState::new("", "").with_period("", PeriodUnit::Months),
    )
    .on_validation_trigger(|| println!("   (form revalidated)"));

    range.handle_start_date_change("2024-01-31");
    show("Start date entered:", &range);

    range.handle_period_change("1");
    show("One month added, spilling past February:", &range);

    range.handle_period_type_change(PeriodUnit::Days);
    show("Unit switched to days:", &range);

    range.handle_end_date_change("2024-06-30");
    show("End date moved, period measured in days:", &range);

    range.handle_start_date_change("2024-08-01");
    show("Start moved; end follows the period:", &range);

    range.handle_end_date_change("2024-07-01");
    show("End date before start:", &range);
}
