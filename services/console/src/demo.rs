use crate::cli::NavigateArgs;
use crate::infra::{parse_theme, InMemoryRecordRepository};
use chrono::Local;
use clap::{Args, Subcommand};
use hireboard::config::AppConfig;
use hireboard::error::AppError;
use hireboard::listing::{
    stage_counts, ApplicationSearch, Bookmarks, CandidateFilters, CandidateSearch, JobSearch,
    MarketplaceTab,
};
use hireboard::navigation::{initial_tab, AppShell, PageType, PageView, Perspective};
use hireboard::records::fixtures::{sample_applications, sample_candidates, sample_jobs};
use hireboard::records::{
    Candidate, CandidateId, CandidateRosterImporter, EmploymentType, JobId, WorkArrangement,
};
use hireboard::submissions::{Notice, SaveAction, SubmissionService};
use hireboard::theme::{
    ColorScheme, DocumentRoot, JsonFilePreferenceStore, SimulatedAppearance, ThemeManager,
    ThemePreference, DARK_CLASS,
};
use hireboard::wizard::{JobField, JobPostingForm, JobPostingStep, Transition, Wizard};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct CandidatesArgs {
    /// Free-text match against name, title, skills and bio
    #[arg(long, default_value = "")]
    pub(crate) query: String,
    /// Only candidates active within the last hours
    #[arg(long)]
    pub(crate) active_only: bool,
    /// Availability label fragment, e.g. "Immediately"
    #[arg(long, default_value = "all")]
    pub(crate) availability: String,
    /// Minimum years of experience, e.g. "5+"
    #[arg(long, default_value = "all")]
    pub(crate) experience: String,
    /// Location fragment
    #[arg(long, default_value = "all")]
    pub(crate) location: String,
    /// Required skill; repeat for several
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    /// Remote preference, e.g. "Remote" or "Hybrid"
    #[arg(long, default_value = "all")]
    pub(crate) remote: String,
    /// Show the Saved tab instead of All
    #[arg(long)]
    pub(crate) saved: bool,
    /// Bookmark a candidate id before listing; repeat for several
    #[arg(long = "bookmark")]
    pub(crate) bookmarks: Vec<u32>,
    /// Candidate roster CSV to search instead of the sample candidates
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Emit the visible list as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ThemeArgs {
    #[command(subcommand)]
    pub(crate) command: ThemeCommand,
    /// Pretend the operating system prefers a dark appearance
    #[arg(long, global = true)]
    pub(crate) os_dark: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum ThemeCommand {
    /// Print the stored preference and the scheme it resolves to
    Show,
    /// Persist a new preference (light, dark or system)
    Set {
        #[arg(value_parser = parse_theme)]
        preference: ThemePreference,
    },
}

#[derive(Serialize)]
struct CandidateRow<'a> {
    id: CandidateId,
    name: &'a str,
    title: &'a str,
    location: &'a str,
    experience: &'a str,
    availability: &'a str,
    saved: bool,
}

pub(crate) fn run_candidates(args: CandidatesArgs) -> Result<(), AppError> {
    let CandidatesArgs {
        query,
        active_only,
        availability,
        experience,
        location,
        skills,
        remote,
        saved,
        bookmarks,
        roster,
        json,
    } = args;

    let candidates = match roster {
        Some(path) => CandidateRosterImporter::from_path(path)?,
        None => sample_candidates(),
    };
    let bookmarks: Bookmarks = bookmarks.into_iter().map(CandidateId).collect();
    let search = CandidateSearch {
        tab: if saved {
            MarketplaceTab::Saved
        } else {
            MarketplaceTab::All
        },
        query,
        active_only,
        filters: CandidateFilters {
            location,
            availability,
            experience,
            skills,
            remote_preference: remote,
        },
    };

    let visible = search.visible(&candidates, &bookmarks);
    tracing::info!(
        total = candidates.len(),
        visible = visible.len(),
        "candidate search evaluated"
    );

    if json {
        let rows: Vec<CandidateRow<'_>> = visible
            .iter()
            .map(|candidate| candidate_row(candidate, &bookmarks))
            .collect();
        let rendered = serde_json::to_string_pretty(&rows).map_err(std::io::Error::from)?;
        println!("{rendered}");
        return Ok(());
    }

    render_candidates(&visible, &bookmarks, candidates.len());
    Ok(())
}

pub(crate) fn run_navigate(args: NavigateArgs) -> Result<(), AppError> {
    let NavigateArgs { identifiers, json } = args;
    let mut shell = AppShell::new(Perspective::Candidate);

    for identifier in identifiers {
        let view = if identifier == "back" {
            shell.back();
            shell.render()
        } else {
            shell.navigate_to_identifier(&identifier)
        };

        if json {
            let rendered = serde_json::to_string(&view).map_err(std::io::Error::from)?;
            println!("{rendered}");
        } else {
            println!(
                "{identifier:>28} -> {} | tab {}",
                describe_view(&view),
                shell.active_tab()
            );
        }
    }

    let history: Vec<&str> = shell
        .router()
        .history()
        .iter()
        .map(|page| page.identifier())
        .collect();
    println!("History: {}", history.join(" > "));
    Ok(())
}

pub(crate) fn run_theme(args: ThemeArgs, config: &AppConfig) -> Result<(), AppError> {
    let os_scheme = if args.os_dark {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    };
    let store = Arc::new(JsonFilePreferenceStore::new(
        &config.storage.preferences_path,
    ));
    let root = Arc::new(DocumentRoot::new());
    let manager = ThemeManager::new(
        store.clone(),
        Arc::new(SimulatedAppearance::new(os_scheme)),
        root.clone(),
    );

    match args.command {
        ThemeCommand::Show => {
            manager.init_theme();
        }
        ThemeCommand::Set { preference } => manager.set_theme(preference)?,
    }

    println!("Preferences file: {}", store.path().display());
    println!("Stored preference: {}", manager.current_theme());
    println!(
        "Resolved scheme: {} (root class '{}' {})",
        manager.resolved_scheme().as_str(),
        DARK_CLASS,
        if root.has_class(DARK_CLASS) {
            "present"
        } else {
            "absent"
        }
    );
    Ok(())
}

pub(crate) async fn run_demo(config: &AppConfig) -> Result<(), AppError> {
    println!("Hireboard walkthrough");

    println!("\nCandidate marketplace");
    let candidates = sample_candidates();
    let mut bookmarks = Bookmarks::new();
    bookmarks.toggle(CandidateId(1));
    bookmarks.toggle(CandidateId(4));
    let mut search = CandidateSearch {
        active_only: true,
        ..CandidateSearch::default()
    };
    let active = search.visible(&candidates, &bookmarks);
    println!("- active in the last hours:");
    render_candidates(&active, &bookmarks, candidates.len());
    search.tab = MarketplaceTab::Saved;
    let saved = search.visible(&candidates, &bookmarks);
    println!("- saved tab:");
    render_candidates(&saved, &bookmarks, candidates.len());

    println!("\nJob board");
    let jobs = sample_jobs();
    let job_search = JobSearch {
        minimum_salary: Some(145_000),
        ..JobSearch::default()
    };
    for job in job_search.visible(&jobs) {
        println!(
            "- {} | {} | {} | {}",
            job.id.0,
            job.title,
            job.employment_type.label(),
            job.work_arrangement.label()
        );
    }

    println!("\nEmployer navigation");
    let mut shell = AppShell::new(Perspective::Employer);
    shell.navigate(PageType::EmployerJobs);
    shell.open_job(JobId("job-1".to_string()));
    println!(
        "- {} (tab {})",
        describe_view(&shell.render()),
        shell.active_tab()
    );
    shell.set_active_tab("applicants");
    let job_title = jobs
        .iter()
        .find(|job| job.id.0 == "job-1")
        .map(|job| job.title.clone())
        .unwrap_or_default();
    shell.view_applications_for(job_title);
    println!(
        "- {} (tab reset to {})",
        describe_view(&shell.render()),
        shell.active_tab()
    );

    let applications = sample_applications();
    let pipeline = ApplicationSearch::for_job_title(shell.router().job_title_filter());
    for application in pipeline.visible(&applications) {
        println!(
            "  - {} | {} | {}",
            application.id.0,
            application.candidate_name,
            application.status.label()
        );
    }
    let counts = stage_counts(&applications);
    let summary: Vec<String> = counts
        .iter()
        .map(|(status, count)| format!("{} {count}", status.label()))
        .collect();
    println!("  stages: {}", summary.join(", "));

    if let Some(first) = pipeline.visible(&applications).first() {
        shell.open_application((*first).clone());
        println!("- {}", describe_view(&shell.render()));
    }
    shell.switch_perspective(Perspective::Candidate);
    println!(
        "- switched perspective: {} (tab {})",
        describe_view(&shell.render()),
        shell.active_tab()
    );

    println!("\nJob posting wizard");
    run_job_wizard(config).await?;

    println!(
        "\nInitial tab for {}: {}",
        PageType::EmployerJobDetail,
        initial_tab(PageType::EmployerJobDetail)
    );
    Ok(())
}

async fn run_job_wizard(config: &AppConfig) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryRecordRepository::<JobPostingForm>::default());
    let service = SubmissionService::new(repository, "job", config.submissions);
    let mut wizard = Wizard::new(JobPostingForm::default());

    if wizard.next() == Transition::Blocked {
        println!(
            "- step {}/{} blocked: {}",
            wizard.step_number(),
            wizard.total_steps(),
            wizard
                .errors()
                .iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect::<Vec<_>>()
                .join("; ")
        );
    }

    wizard.edit(JobField::Title, |form| {
        form.title = "Staff Data Engineer".to_string()
    });
    wizard.edit(JobField::Department, |form| {
        form.department = "Data".to_string()
    });
    wizard.edit(JobField::Location, |form| {
        form.location = "Remote".to_string()
    });
    wizard.edit(JobField::EmploymentType, |form| {
        form.employment_type = Some(EmploymentType::FullTime)
    });
    wizard.edit(JobField::WorkArrangement, |form| {
        form.work_arrangement = Some(WorkArrangement::Remote)
    });
    let transition = wizard.next();
    report_transition(&wizard, transition);

    let draft_result = service.save_draft(None, wizard.save_draft().clone()).await;
    let notice = Notice::from_result(SaveAction::Draft, &draft_result);
    println!("- {:?}: {}", notice.kind, notice.message);
    let draft_id = draft_result?.id;

    wizard.edit(JobField::Description, |form| {
        form.description = "Own the warehouse and streaming pipelines.".to_string()
    });
    wizard.edit(JobField::Requirements, |form| {
        form.requirements.push("7+ years building data platforms")
    });
    wizard.edit(JobField::Skills, |form| {
        form.skills.add("Rust");
        form.skills.add("Kafka");
    });
    let transition = wizard.next();
    report_transition(&wizard, transition);

    wizard.edit(JobField::SalaryMin, |form| {
        form.salary_min = "180000".to_string()
    });
    wizard.edit(JobField::SalaryMax, |form| {
        form.salary_max = "220000".to_string()
    });
    wizard.edit(JobField::Benefits, |form| {
        form.benefits.add("Equity");
    });
    let transition = wizard.next();
    report_transition(&wizard, transition);

    wizard.edit(JobField::ScreeningQuestions, |form| {
        form.screening_questions
            .push("Describe a pipeline you scaled.")
    });

    let publish_result = service.publish(Some(draft_id), &mut wizard).await;
    let notice = Notice::from_result(SaveAction::Publish, &publish_result);
    println!("- {:?}: {}", notice.kind, notice.message);
    let published = publish_result?;

    let today = Local::now().date_naive();
    if let Some(job) = published
        .payload
        .to_job(JobId(published.id.0.clone()), "Hireboard", today)
    {
        let salary = job
            .salary
            .as_ref()
            .map(|salary| format!("{}-{} {}", salary.min, salary.max, salary.currency))
            .unwrap_or_else(|| "not advertised".to_string());
        println!("- posted {} ({salary})", job.title);
    }
    Ok(())
}

fn report_transition(
    wizard: &Wizard<JobPostingForm>,
    transition: Transition<JobPostingStep>,
) {
    match transition {
        Transition::Moved(step) => println!(
            "- moved to step {}/{} ({step:?})",
            wizard.step_number(),
            wizard.total_steps()
        ),
        Transition::Blocked => println!("- blocked with {} error(s)", wizard.errors().len()),
        Transition::Stayed => println!("- already on the final step"),
    }
}

fn candidate_row<'a>(candidate: &'a Candidate, bookmarks: &Bookmarks) -> CandidateRow<'a> {
    CandidateRow {
        id: candidate.id,
        name: &candidate.name,
        title: &candidate.title,
        location: &candidate.location,
        experience: &candidate.experience,
        availability: &candidate.availability,
        saved: bookmarks.contains(candidate.id),
    }
}

fn render_candidates(visible: &[&Candidate], bookmarks: &Bookmarks, total: usize) {
    println!("  showing {} of {} candidates", visible.len(), total);
    for candidate in visible {
        let marker = if bookmarks.contains(candidate.id) {
            "*"
        } else {
            " "
        };
        println!(
            "  {marker} #{} {} | {} | {} | {} | {}",
            candidate.id,
            candidate.name,
            candidate.title,
            candidate.location,
            candidate.experience,
            candidate.availability
        );
    }
}

fn describe_view(view: &PageView) -> String {
    match view {
        PageView::JobDetail { job_id } | PageView::EmployerJobDetail { job_id } => format!(
            "{} [{}]",
            page_label(view),
            job_id.as_ref().map(|id| id.0.as_str()).unwrap_or("no job")
        ),
        PageView::EmployerApplications { job_title_filter } => format!(
            "{} [{}]",
            page_label(view),
            job_title_filter.as_deref().unwrap_or("all jobs")
        ),
        PageView::EmployerApplicationDetail { application } => format!(
            "{} [{}]",
            page_label(view),
            application
                .as_ref()
                .map(|application| application.candidate_name.as_str())
                .unwrap_or("no application")
        ),
        PageView::NotFound { identifier } => format!("page not found: {identifier}"),
        _ => page_label(view),
    }
}

fn page_label(view: &PageView) -> String {
    view.page()
        .map(|page| page.to_string())
        .unwrap_or_else(|| "notFound".to_string())
}
