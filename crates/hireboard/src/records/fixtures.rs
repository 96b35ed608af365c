//! Representative records used by the console and the tests.

use chrono::{NaiveDate, NaiveTime};

use super::domain::{
    Application, ApplicationId, ApplicationStatus, Candidate, CandidateId, EmploymentType,
    Interview, InterviewId, InterviewKind, Job, JobId, JobStatus, SalaryRange, WorkArrangement,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: CandidateId(1),
            name: "Sarah Chen".to_string(),
            title: "Senior Full Stack Developer".to_string(),
            location: "San Francisco, CA".to_string(),
            experience: "6 years".to_string(),
            availability: "Available immediately".to_string(),
            last_active: "2 hours ago".to_string(),
            remote_preference: Some("Remote".to_string()),
            skills: strings(&["React", "Node.js", "TypeScript", "AWS"]),
            bio: "Builds web platforms end to end and mentors junior engineers.".to_string(),
        },
        Candidate {
            id: CandidateId(2),
            name: "Michael Rodriguez".to_string(),
            title: "DevOps Engineer".to_string(),
            location: "Austin, TX".to_string(),
            experience: "3 years".to_string(),
            availability: "Available in 2 weeks".to_string(),
            last_active: "1 day ago".to_string(),
            remote_preference: Some("Hybrid".to_string()),
            skills: strings(&["Docker", "Kubernetes", "AWS", "Terraform"]),
            bio: "Automates delivery pipelines and keeps cloud costs in check.".to_string(),
        },
        Candidate {
            id: CandidateId(3),
            name: "Emily Johnson".to_string(),
            title: "UX Designer".to_string(),
            location: "New York, NY".to_string(),
            experience: "5 years".to_string(),
            availability: "Available in 1 month".to_string(),
            last_active: "5 hours ago".to_string(),
            remote_preference: Some("On-site".to_string()),
            skills: strings(&["Figma", "User Research", "Prototyping"]),
            bio: "Turns research findings into clear product flows.".to_string(),
        },
        Candidate {
            id: CandidateId(4),
            name: "David Kim".to_string(),
            title: "Data Scientist".to_string(),
            location: "Seattle, WA".to_string(),
            experience: "7 years".to_string(),
            availability: "Open to offers".to_string(),
            last_active: "3 days ago".to_string(),
            remote_preference: Some("Remote".to_string()),
            skills: strings(&["Python", "Machine Learning", "SQL", "TensorFlow"]),
            bio: "Ships forecasting models for retail and logistics teams.".to_string(),
        },
    ]
}

pub fn sample_jobs() -> Vec<Job> {
    vec![
        Job {
            id: JobId("job-1".to_string()),
            title: "Senior Frontend Engineer".to_string(),
            company: "Northwind Labs".to_string(),
            department: "Engineering".to_string(),
            location: "San Francisco, CA".to_string(),
            employment_type: EmploymentType::FullTime,
            work_arrangement: WorkArrangement::Hybrid,
            salary: Some(SalaryRange {
                min: 150_000,
                max: 190_000,
                currency: "USD".to_string(),
            }),
            description: "Own the design system and the hiring dashboard.".to_string(),
            requirements: strings(&[
                "5+ years building production web apps",
                "Deep TypeScript knowledge",
            ]),
            skills: strings(&["React", "TypeScript", "GraphQL"]),
            benefits: strings(&["Health insurance", "Learning budget"]),
            screening_questions: strings(&["Describe a UI migration you led."]),
            posted_on: date(2025, 9, 1),
            application_deadline: Some(date(2025, 10, 31)),
            status: JobStatus::Active,
        },
        Job {
            id: JobId("job-2".to_string()),
            title: "Platform Engineer".to_string(),
            company: "Northwind Labs".to_string(),
            department: "Infrastructure".to_string(),
            location: "Remote".to_string(),
            employment_type: EmploymentType::FullTime,
            work_arrangement: WorkArrangement::Remote,
            salary: Some(SalaryRange {
                min: 140_000,
                max: 175_000,
                currency: "USD".to_string(),
            }),
            description: "Run the container platform and CI fleet.".to_string(),
            requirements: strings(&["Kubernetes in production", "Infrastructure as code"]),
            skills: strings(&["Kubernetes", "Terraform", "AWS"]),
            benefits: strings(&["Remote stipend"]),
            screening_questions: Vec::new(),
            posted_on: date(2025, 9, 10),
            application_deadline: None,
            status: JobStatus::Active,
        },
        Job {
            id: JobId("job-3".to_string()),
            title: "Product Design Intern".to_string(),
            company: "Brightline Health".to_string(),
            department: "Design".to_string(),
            location: "New York, NY".to_string(),
            employment_type: EmploymentType::Internship,
            work_arrangement: WorkArrangement::OnSite,
            salary: None,
            description: "Support the design team on patient-facing flows.".to_string(),
            requirements: strings(&["Portfolio with two case studies"]),
            skills: strings(&["Figma", "Prototyping"]),
            benefits: Vec::new(),
            screening_questions: Vec::new(),
            posted_on: date(2025, 8, 20),
            application_deadline: Some(date(2025, 9, 30)),
            status: JobStatus::Closed,
        },
    ]
}

pub fn sample_applications() -> Vec<Application> {
    vec![
        Application {
            id: ApplicationId("app-1".to_string()),
            candidate_id: CandidateId(1),
            candidate_name: "Sarah Chen".to_string(),
            job_id: JobId("job-1".to_string()),
            job_title: "Senior Frontend Engineer".to_string(),
            status: ApplicationStatus::Interview,
            applied_on: date(2025, 9, 5),
            match_score: Some(92),
        },
        Application {
            id: ApplicationId("app-2".to_string()),
            candidate_id: CandidateId(2),
            candidate_name: "Michael Rodriguez".to_string(),
            job_id: JobId("job-2".to_string()),
            job_title: "Platform Engineer".to_string(),
            status: ApplicationStatus::Screening,
            applied_on: date(2025, 9, 12),
            match_score: Some(81),
        },
        Application {
            id: ApplicationId("app-3".to_string()),
            candidate_id: CandidateId(3),
            candidate_name: "Emily Johnson".to_string(),
            job_id: JobId("job-1".to_string()),
            job_title: "Senior Frontend Engineer".to_string(),
            status: ApplicationStatus::Rejected,
            applied_on: date(2025, 9, 7),
            match_score: Some(58),
        },
        Application {
            id: ApplicationId("app-4".to_string()),
            candidate_id: CandidateId(4),
            candidate_name: "David Kim".to_string(),
            job_id: JobId("job-2".to_string()),
            job_title: "Platform Engineer".to_string(),
            status: ApplicationStatus::Applied,
            applied_on: date(2025, 9, 15),
            match_score: None,
        },
    ]
}

pub fn sample_interviews() -> Vec<Interview> {
    vec![Interview {
        id: InterviewId("int-1".to_string()),
        candidate_id: CandidateId(1),
        candidate_name: "Sarah Chen".to_string(),
        job_id: JobId("job-1".to_string()),
        job_title: "Senior Frontend Engineer".to_string(),
        kind: InterviewKind::Video,
        date: date(2025, 10, 2),
        start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap_or_default(),
        duration_minutes: 60,
        location: None,
        meeting_link: Some("https://meet.example.com/sarah-chen".to_string()),
        interviewers: strings(&["Alex Morgan", "Priya Patel"]),
        notes: Some("Focus on design system ownership.".to_string()),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applications_reference_known_jobs_and_candidates() {
        let jobs = sample_jobs();
        let candidates = sample_candidates();
        for application in sample_applications() {
            let job = jobs
                .iter()
                .find(|job| job.id == application.job_id)
                .expect("job present");
            assert_eq!(job.title, application.job_title);
            assert!(candidates
                .iter()
                .any(|candidate| candidate.id == application.candidate_id));
        }
    }
}
