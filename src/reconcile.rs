//! Date-range reconciliation.
//!
//! A date range form has a start date, an end date and optionally a period amount with a
//! unit. Editing any one of them recomputes the others so the three stay consistent.
//! [`reconcile`] is the pure update function; [`DateRangeSync`] owns the state for hosts
//! that prefer handler methods.
//!
//! The edited field is never recomputed, only its dependents, and the edited field's own
//! effect is always the first one emitted.

use crate::dates::{
    DateValidationErrors, PeriodUnit, add_period_to_date, calculate_period_between,
    parse_date, parse_period_amount, validate_date_range,
};
use serde::{Deserialize, Serialize};

/// Field values of a date range form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeState {
    pub start_date: String,
    pub end_date: String,
    /// `None` when the form has no period field at all
    pub period: Option<String>,
    pub period_type: Option<PeriodUnit>,
    #[serde(default)]
    pub errors: DateValidationErrors,
}

impl DateRangeState {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            ..Self::default()
        }
    }

    pub fn with_period(mut self, period: impl Into<String>, unit: PeriodUnit) -> Self {
        self.period = Some(period.into());
        self.period_type = Some(unit);
        self
    }

    fn has_start(&self) -> bool {
        parse_date(&self.start_date).is_some()
    }

    fn has_end(&self) -> bool {
        parse_date(&self.end_date).is_some()
    }

    fn period_amount(&self) -> Option<i64> {
        self.period.as_deref().and_then(parse_period_amount)
    }
}

/// A single user edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    StartDate(String),
    EndDate(String),
    Period(String),
    PeriodType(PeriodUnit),
}

/// Notification for the host form, in the order it must be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetStartDate(String),
    SetEndDate(String),
    SetPeriod(String),
    SetPeriodType(PeriodUnit),
    SetErrors(DateValidationErrors),
    /// The host should re-run its own form validation
    TriggerValidation,
}

/// Result of applying one edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: DateRangeState,
    pub effects: Vec<Effect>,
}

/// Accumulates effects while mirroring them into the next state
struct Update {
    state: DateRangeState,
    effects: Vec<Effect>,
}

impl Update {
    fn new(state: &DateRangeState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }

    fn emit(&mut self, effect: Effect) {
        match &effect {
            Effect::SetStartDate(value) => self.state.start_date = value.clone(),
            Effect::SetEndDate(value) => self.state.end_date = value.clone(),
            Effect::SetPeriod(value) => self.state.period = Some(value.clone()),
            Effect::SetPeriodType(unit) => self.state.period_type = Some(*unit),
            Effect::SetErrors(errors) => self.state.errors = errors.clone(),
            Effect::TriggerValidation => {}
        }
        self.effects.push(effect);
    }

    fn finish(self) -> Transition {
        Transition {
            state: self.state,
            effects: self.effects,
        }
    }
}

/// Apply one edit to a date range and compute the dependent updates
pub fn reconcile(state: &DateRangeState, edit: Edit) -> Transition {
    let mut update = Update::new(state);
    match edit {
        Edit::StartDate(value) => start_date_changed(&mut update, value),
        Edit::EndDate(value) => end_date_changed(&mut update, value),
        Edit::Period(value) => period_changed(&mut update, value),
        Edit::PeriodType(unit) => period_type_changed(&mut update, unit),
    }
    let transition = update.finish();
    tracing::trace!(effects = transition.effects.len(), "date range reconciled");
    transition
}

fn start_date_changed(update: &mut Update, value: String) {
    update.emit(Effect::SetStartDate(value));

    if let (Some(amount), Some(unit)) = (update.state.period_amount(), update.state.period_type) {
        let end = add_period_to_date(&update.state.start_date, amount, unit);
        update.emit(Effect::SetEndDate(end));
    }

    if update.state.has_start() && update.state.has_end() {
        let errors = validate_date_range(&update.state.start_date, &update.state.end_date);
        let invalid = !errors.is_empty();
        update.emit(Effect::SetErrors(errors));
        if invalid {
            // Force the end date to be entered again.
            update.emit(Effect::SetEndDate(String::new()));
        }
    }
}

fn end_date_changed(update: &mut Update, value: String) {
    update.emit(Effect::SetEndDate(value));

    let errors = validate_date_range(&update.state.start_date, &update.state.end_date);
    let invalid = !errors.is_empty();
    update.emit(Effect::SetErrors(errors));
    if invalid {
        return;
    }

    // An empty date measures as zero, so clearing either side resets the period.
    if update.state.period.is_none() {
        return;
    }
    let Some(unit) = update.state.period_type else {
        return;
    };

    let start = update.state.start_date.clone();
    let end = update.state.end_date.clone();
    let amount = calculate_period_between(&start, &end, unit);
    if amount == 0 && unit != PeriodUnit::Days {
        // A span shorter than one unit still registers, counted in days.
        let days = calculate_period_between(&start, &end, PeriodUnit::Days);
        if days > 0 {
            update.emit(Effect::SetPeriod(days.to_string()));
            update.emit(Effect::SetPeriodType(PeriodUnit::Days));
            return;
        }
    }
    update.emit(Effect::SetPeriod(amount.to_string()));
}

fn period_changed(update: &mut Update, value: String) {
    update.emit(Effect::SetPeriod(value));

    if !update.state.has_start() {
        return;
    }
    if let (Some(amount), Some(unit)) = (update.state.period_amount(), update.state.period_type) {
        let end = add_period_to_date(&update.state.start_date, amount, unit);
        update.emit(Effect::SetEndDate(end));
        update.emit(Effect::SetErrors(DateValidationErrors::default()));
        update.emit(Effect::TriggerValidation);
    }
}

fn period_type_changed(update: &mut Update, unit: PeriodUnit) {
    update.emit(Effect::SetPeriodType(unit));

    if !update.state.has_start() {
        return;
    }
    if let Some(amount) = update.state.period_amount() {
        let end = add_period_to_date(&update.state.start_date, amount, unit);
        update.emit(Effect::SetEndDate(end));
    }
    if update.state.period.is_some() && update.state.has_end() {
        let amount =
            calculate_period_between(&update.state.start_date, &update.state.end_date, unit);
        update.emit(Effect::SetPeriod(amount.to_string()));
    }
}

type ValidationTrigger = Box<dyn FnMut() + Send>;

/// Stateful date range with one handler per editable field.
///
/// Each handler applies [`reconcile`], keeps the resulting state and returns the effects
/// for the host to apply. When a period edit moves the end date, the validation trigger
/// runs synchronously before the handler returns.
pub struct DateRangeSync {
    state: DateRangeState,
    on_validation_trigger: Option<ValidationTrigger>,
}

impl DateRangeSync {
    pub fn new(state: DateRangeState) -> Self {
        Self {
            state,
            on_validation_trigger: None,
        }
    }

    /// Register the callback run after engine-driven end date updates
    pub fn on_validation_trigger(mut self, trigger: impl FnMut() + Send + 'static) -> Self {
        self.on_validation_trigger = Some(Box::new(trigger));
        self
    }

    pub fn state(&self) -> &DateRangeState {
        &self.state
    }

    pub fn errors(&self) -> &DateValidationErrors {
        &self.state.errors
    }

    pub fn handle_start_date_change(&mut self, value: impl Into<String>) -> Vec<Effect> {
        self.apply(Edit::StartDate(value.into()))
    }

    pub fn handle_end_date_change(&mut self, value: impl Into<String>) -> Vec<Effect> {
        self.apply(Edit::EndDate(value.into()))
    }

    pub fn handle_period_change(&mut self, value: impl Into<String>) -> Vec<Effect> {
        self.apply(Edit::Period(value.into()))
    }

    pub fn handle_period_type_change(&mut self, unit: PeriodUnit) -> Vec<Effect> {
        self.apply(Edit::PeriodType(unit))
    }

    fn apply(&mut self, edit: Edit) -> Vec<Effect> {
        let Transition { state, effects } = reconcile(&self.state, edit);
        self.state = state;
        if effects.contains(&Effect::TriggerValidation) {
            if let Some(trigger) = self.on_validation_trigger.as_mut() {
                trigger();
            }
        }
        effects
    }
}

impl std::fmt::Debug for DateRangeSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateRangeSync")
            .field("state", &self.state)
            .field("has_validation_trigger", &self.on_validation_trigger.is_some())
            .finish()
    }
}
