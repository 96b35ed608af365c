//! Multi-step form wizards: one engine enforcing the step gating rules, and
//! the forms that plug into it.

pub mod fields;
pub mod interview;
pub mod job_posting;

use std::fmt;

pub use fields::{EntryList, FieldErrors, TagSet};
pub use interview::{InterviewField, InterviewForm, InterviewStep};
pub use job_posting::{JobField, JobPostingForm, JobPostingStep};

/// A form split into ordered steps, each validating only its own fields.
pub trait StepForm {
    type Step: Copy + Eq + fmt::Debug + 'static;
    type Field: Copy + Ord + fmt::Debug + fmt::Display;

    /// Steps in order. Must not be empty.
    const STEPS: &'static [Self::Step];

    fn validate_step(&self, step: Self::Step) -> FieldErrors<Self::Field>;
}

/// Result of a Next/Previous action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<S> {
    Moved(S),
    /// The current step has validation errors; they are now on the wizard.
    Blocked,
    /// Already at the first/last step.
    Stayed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("publishing requires the final step (at step {current} of {total})")]
    NotOnFinalStep { current: usize, total: usize },
    #[error("step {step} is incomplete: {}", fields.join(", "))]
    Incomplete { step: usize, fields: Vec<String> },
}

/// Step counter plus accumulated form state.
#[derive(Debug, Clone)]
pub struct Wizard<F: StepForm> {
    form: F,
    index: usize,
    errors: FieldErrors<F::Field>,
}

impl<F: StepForm> Wizard<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            index: 0,
            errors: FieldErrors::new(),
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn into_form(self) -> F {
        self.form
    }

    pub fn errors(&self) -> &FieldErrors<F::Field> {
        &self.errors
    }

    pub fn current_step(&self) -> F::Step {
        F::STEPS[self.index]
    }

    /// 1-based position, always within `1..=total_steps()`.
    pub fn step_number(&self) -> usize {
        self.index + 1
    }

    pub fn total_steps(&self) -> usize {
        F::STEPS.len()
    }

    pub fn is_final_step(&self) -> bool {
        self.index + 1 >= F::STEPS.len()
    }

    /// Re-validates the current step and stores the resulting errors.
    pub fn validate_current(&mut self) -> bool {
        self.errors = self.form.validate_step(self.current_step());
        self.errors.is_valid()
    }

    pub fn next(&mut self) -> Transition<F::Step> {
        if !self.validate_current() {
            tracing::debug!(
                step = self.step_number(),
                errors = self.errors.len(),
                "wizard step blocked"
            );
            return Transition::Blocked;
        }
        if self.is_final_step() {
            return Transition::Stayed;
        }
        self.index += 1;
        Transition::Moved(self.current_step())
    }

    /// Always allowed; keeps entered data and skips validation.
    pub fn previous(&mut self) -> Transition<F::Step> {
        if self.index == 0 {
            return Transition::Stayed;
        }
        self.index -= 1;
        Transition::Moved(self.current_step())
    }

    /// Applies an edit to one field and clears that field's error only.
    pub fn edit<R>(&mut self, field: F::Field, change: impl FnOnce(&mut F) -> R) -> R {
        let result = change(&mut self.form);
        self.errors.remove(field);
        result
    }

    /// Draft snapshot; never validated.
    pub fn save_draft(&self) -> &F {
        &self.form
    }

    /// Final submit: requires the last step to validate, then hands the form
    /// to `complete`.
    pub fn publish<R>(&mut self, complete: impl FnOnce(&F) -> R) -> Result<R, WizardError> {
        if !self.is_final_step() {
            return Err(WizardError::NotOnFinalStep {
                current: self.step_number(),
                total: self.total_steps(),
            });
        }
        if !self.validate_current() {
            return Err(WizardError::Incomplete {
                step: self.step_number(),
                fields: self.errors.fields().map(|field| field.to_string()).collect(),
            });
        }
        Ok(complete(&self.form))
    }
}
