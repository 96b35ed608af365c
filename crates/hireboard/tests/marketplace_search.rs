//! Marketplace and pipeline filtering driven through the public listing API
//! against the bundled sample records.

use hireboard::listing::{
    stage_counts, ApplicationSearch, Bookmarks, CandidateFilters, CandidateSearch, JobSearch,
    MarketplaceTab,
};
use hireboard::records::fixtures::{sample_applications, sample_candidates, sample_jobs};
use hireboard::records::{ApplicationStatus, CandidateId, CandidateRosterImporter};

fn names<'a>(visible: &[&'a hireboard::records::Candidate]) -> Vec<&'a str> {
    visible.iter().map(|candidate| candidate.name.as_str()).collect()
}

#[test]
fn all_tab_with_default_filters_lists_every_candidate() {
    let candidates = sample_candidates();
    let visible = CandidateSearch::default().visible(&candidates, &Bookmarks::new());
    assert_eq!(visible.len(), candidates.len());
}

#[test]
fn saved_tab_ignores_query_and_filters() {
    let candidates = sample_candidates();
    let bookmarks: Bookmarks = [CandidateId(2), CandidateId(3)].into_iter().collect();
    let search = CandidateSearch {
        tab: MarketplaceTab::Saved,
        query: "no such text".to_string(),
        active_only: true,
        filters: CandidateFilters {
            experience: "10+".to_string(),
            ..CandidateFilters::default()
        },
    };

    let visible = search.visible(&candidates, &bookmarks);
    assert_eq!(names(&visible), vec!["Michael Rodriguez", "Emily Johnson"]);
}

#[test]
fn filters_combine_conjunctively() {
    let candidates = sample_candidates();
    let search = CandidateSearch {
        active_only: true,
        filters: CandidateFilters {
            experience: "5+".to_string(),
            ..CandidateFilters::default()
        },
        ..CandidateSearch::default()
    };

    let visible = search.visible(&candidates, &Bookmarks::new());
    assert_eq!(names(&visible), vec!["Sarah Chen", "Emily Johnson"]);
}

#[test]
fn query_matches_skills_and_bio_case_insensitively() {
    let candidates = sample_candidates();
    let by_skill = CandidateSearch {
        query: "aws".to_string(),
        ..CandidateSearch::default()
    };
    assert_eq!(
        names(&by_skill.visible(&candidates, &Bookmarks::new())),
        vec!["Sarah Chen", "Michael Rodriguez"]
    );

    let by_bio = CandidateSearch {
        query: "FORECASTING".to_string(),
        ..CandidateSearch::default()
    };
    assert_eq!(
        names(&by_bio.visible(&candidates, &Bookmarks::new())),
        vec!["David Kim"]
    );
}

#[test]
fn toggling_a_bookmark_twice_unsaves() {
    let candidates = sample_candidates();
    let mut bookmarks = Bookmarks::new();
    assert!(bookmarks.toggle(CandidateId(1)));
    assert!(!bookmarks.toggle(CandidateId(1)));

    let saved = CandidateSearch {
        tab: MarketplaceTab::Saved,
        ..CandidateSearch::default()
    };
    assert!(saved.visible(&candidates, &bookmarks).is_empty());
}

#[test]
fn roster_import_feeds_the_same_search() {
    let csv = "\
Id,Name,Title,Location,Experience,Availability,Last Active,Remote Preference,Skills,Bio
10,Ana Silva,Data Engineer,Lisbon,4 years,Immediately,3 hours ago,Remote,Python;Airflow,Builds pipelines
11,Tom Berg,QA Lead,Oslo,9 years,Available in 2 weeks,4 days ago,,Selenium,
";
    let candidates = CandidateRosterImporter::from_reader(csv.as_bytes()).expect("roster parses");
    let search = CandidateSearch {
        active_only: true,
        filters: CandidateFilters {
            skills: vec!["airflow".to_string()],
            ..CandidateFilters::default()
        },
        ..CandidateSearch::default()
    };

    assert_eq!(
        names(&search.visible(&candidates, &Bookmarks::new())),
        vec!["Ana Silva"]
    );
    assert_eq!(candidates[1].remote_preference, None);
}

#[test]
fn job_board_hides_closed_postings_by_default() {
    let jobs = sample_jobs();
    let open: Vec<&str> = JobSearch::default()
        .visible(&jobs)
        .iter()
        .map(|job| job.id.0.as_str())
        .collect();
    assert_eq!(open, vec!["job-1", "job-2"]);

    let everything = JobSearch {
        include_closed: true,
        ..JobSearch::default()
    };
    assert_eq!(everything.visible(&jobs).len(), 3);
}

#[test]
fn pipeline_narrows_to_job_title_and_counts_stages() {
    let applications = sample_applications();
    let search = ApplicationSearch::for_job_title(Some("Senior Frontend Engineer"));
    let visible: Vec<&str> = search
        .visible(&applications)
        .iter()
        .map(|application| application.candidate_name.as_str())
        .collect();
    assert_eq!(visible, vec!["Sarah Chen", "Emily Johnson"]);

    let counts = stage_counts(&applications);
    assert_eq!(counts.len(), ApplicationStatus::ALL.len());
    assert_eq!(counts[&ApplicationStatus::Interview], 1);
    assert_eq!(counts[&ApplicationStatus::Offer], 0);
}
