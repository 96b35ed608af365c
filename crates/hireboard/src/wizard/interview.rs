use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use super::fields::{FieldErrors, TagSet};
use super::StepForm;
use crate::records::{CandidateId, Interview, InterviewId, InterviewKind, JobId};

const DURATION_MINUTES: RangeInclusive<u16> = 15..=480;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStep {
    Participants,
    Schedule,
    Panel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewField {
    Candidate,
    Job,
    Kind,
    Date,
    StartTime,
    Duration,
    Location,
    MeetingLink,
    Interviewers,
}

impl fmt::Display for InterviewField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InterviewField::Candidate => "candidate",
            InterviewField::Job => "job",
            InterviewField::Kind => "kind",
            InterviewField::Date => "date",
            InterviewField::StartTime => "start_time",
            InterviewField::Duration => "duration",
            InterviewField::Location => "location",
            InterviewField::MeetingLink => "meeting_link",
            InterviewField::Interviewers => "interviewers",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewForm {
    pub candidate_id: Option<CandidateId>,
    pub candidate_name: String,
    pub job_id: Option<JobId>,
    pub job_title: String,
    pub kind: Option<InterviewKind>,
    pub date: String,
    pub start_time: String,
    pub duration_minutes: String,
    pub location: String,
    pub meeting_link: String,
    pub interviewers: TagSet,
    pub notes: String,
}

impl InterviewForm {
    /// Seeds a reschedule/edit flow from an existing interview.
    pub fn from_interview(interview: &Interview) -> Self {
        Self {
            candidate_id: Some(interview.candidate_id),
            candidate_name: interview.candidate_name.clone(),
            job_id: Some(interview.job_id.clone()),
            job_title: interview.job_title.clone(),
            kind: Some(interview.kind),
            date: interview.date.format("%Y-%m-%d").to_string(),
            start_time: interview.start_time.format("%H:%M").to_string(),
            duration_minutes: interview.duration_minutes.to_string(),
            location: interview.location.clone().unwrap_or_default(),
            meeting_link: interview.meeting_link.clone().unwrap_or_default(),
            interviewers: interview.interviewers.iter().collect(),
            notes: interview.notes.clone().unwrap_or_default(),
        }
    }

    pub fn to_interview(&self, id: InterviewId) -> Option<Interview> {
        let kind = self.kind?;
        Some(Interview {
            id,
            candidate_id: self.candidate_id?,
            candidate_name: self.candidate_name.trim().to_string(),
            job_id: self.job_id.clone()?,
            job_title: self.job_title.trim().to_string(),
            kind,
            date: parse_date(&self.date)?,
            start_time: parse_time(&self.start_time)?,
            duration_minutes: parse_duration(&self.duration_minutes)?,
            location: non_blank(&self.location).filter(|_| kind == InterviewKind::Onsite),
            meeting_link: non_blank(&self.meeting_link).filter(|_| kind == InterviewKind::Video),
            interviewers: self.interviewers.to_vec(),
            notes: non_blank(&self.notes),
        })
    }
}

impl StepForm for InterviewForm {
    type Step = InterviewStep;
    type Field = InterviewField;

    const STEPS: &'static [InterviewStep] = &[
        InterviewStep::Participants,
        InterviewStep::Schedule,
        InterviewStep::Panel,
    ];

    fn validate_step(&self, step: InterviewStep) -> FieldErrors<InterviewField> {
        let mut errors = FieldErrors::new();
        match step {
            InterviewStep::Participants => {
                if self.candidate_id.is_none() {
                    errors.insert(InterviewField::Candidate, "Select a candidate");
                }
                if self.job_id.is_none() {
                    errors.insert(InterviewField::Job, "Select the position");
                }
            }
            InterviewStep::Schedule => {
                match self.kind {
                    None => errors.insert(InterviewField::Kind, "Select an interview type"),
                    Some(InterviewKind::Onsite) => errors.require_text(
                        InterviewField::Location,
                        &self.location,
                        "Location is required for onsite interviews",
                    ),
                    Some(InterviewKind::Video) => {
                        let link = self.meeting_link.trim();
                        if !(link.starts_with("https://") || link.starts_with("http://")) {
                            errors.insert(
                                InterviewField::MeetingLink,
                                "Provide a meeting link starting with http(s)://",
                            );
                        }
                    }
                    Some(InterviewKind::Phone) => {}
                }
                if parse_date(&self.date).is_none() {
                    errors.insert(InterviewField::Date, "Pick a date (YYYY-MM-DD)");
                }
                if parse_time(&self.start_time).is_none() {
                    errors.insert(InterviewField::StartTime, "Pick a start time (HH:MM)");
                }
                if parse_duration(&self.duration_minutes).is_none() {
                    errors.insert(
                        InterviewField::Duration,
                        format!(
                            "Duration must be between {} and {} minutes",
                            DURATION_MINUTES.start(),
                            DURATION_MINUTES.end()
                        ),
                    );
                }
            }
            InterviewStep::Panel => {
                if self.interviewers.is_empty() {
                    errors.insert(InterviewField::Interviewers, "Add at least one interviewer");
                }
            }
        }
        errors
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

fn parse_duration(raw: &str) -> Option<u16> {
    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|minutes| DURATION_MINUTES.contains(minutes))
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fixtures::sample_interviews;
    use crate::wizard::{Transition, Wizard, WizardError};

    #[test]
    fn schedule_rules_depend_on_interview_kind() {
        let mut form = InterviewForm {
            kind: Some(InterviewKind::Onsite),
            date: "2025-10-02".to_string(),
            start_time: "09:30".to_string(),
            duration_minutes: "45".to_string(),
            ..InterviewForm::default()
        };
        let errors = form.validate_step(InterviewStep::Schedule);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![InterviewField::Location]);

        form.kind = Some(InterviewKind::Video);
        form.meeting_link = "meet.example.com/abc".to_string();
        let errors = form.validate_step(InterviewStep::Schedule);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![InterviewField::MeetingLink]
        );

        form.kind = Some(InterviewKind::Phone);
        form.duration_minutes = "5".to_string();
        form.start_time = "9.30".to_string();
        let errors = form.validate_step(InterviewStep::Schedule);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![InterviewField::StartTime, InterviewField::Duration]
        );
    }

    #[test]
    fn three_step_wizard_blocks_until_participants_chosen() {
        let mut wizard = Wizard::new(InterviewForm::default());
        assert_eq!(wizard.total_steps(), 3);
        assert_eq!(wizard.next(), Transition::Blocked);
        assert_eq!(wizard.step_number(), 1);

        wizard.edit(InterviewField::Candidate, |form| {
            form.candidate_id = Some(CandidateId(2))
        });
        assert_eq!(wizard.next(), Transition::Blocked);
        assert!(!wizard.errors().contains(InterviewField::Candidate));

        wizard.edit(InterviewField::Job, |form| {
            form.job_id = Some(JobId("job-2".to_string()))
        });
        assert_eq!(wizard.next(), Transition::Moved(InterviewStep::Schedule));
    }

    #[test]
    fn edit_flow_starts_from_existing_interview() {
        let interview = sample_interviews().remove(0);
        let form = InterviewForm::from_interview(&interview);
        let mut wizard = Wizard::new(form);
        wizard.next();
        wizard.next();

        let rebuilt = wizard
            .publish(|form| form.to_interview(interview.id.clone()))
            .expect("valid")
            .expect("converts");
        assert_eq!(rebuilt, interview);
    }

    #[test]
    fn publish_reports_missing_panel() {
        let interview = sample_interviews().remove(0);
        let mut form = InterviewForm::from_interview(&interview);
        form.interviewers = TagSet::new();
        let mut wizard = Wizard::new(form);
        wizard.next();
        wizard.next();

        assert_eq!(
            wizard.publish(|_| ()),
            Err(WizardError::Incomplete {
                step: 3,
                fields: vec!["interviewers".to_string()]
            })
        );
    }
}
