//! End-to-end navigation scenarios through `AppShell`: the router, selection
//! state and the tab context moving together.

use hireboard::navigation::{
    initial_tab_for_identifier, AppShell, NavigationError, PageType, PageView, Perspective,
    ViewScope,
};
use hireboard::records::fixtures::sample_applications;
use hireboard::records::JobId;

#[test]
fn employer_reviews_applications_for_a_job() {
    let mut shell = AppShell::new(Perspective::Employer);
    shell.navigate(PageType::EmployerJobs);
    shell.open_job(JobId("job-1".to_string()));
    assert_eq!(
        shell.render(),
        PageView::EmployerJobDetail {
            job_id: Some(JobId("job-1".to_string()))
        }
    );

    shell.set_active_tab("applicants");
    shell.view_applications_for("Senior Frontend Engineer");
    assert_eq!(shell.active_tab(), "overview");
    assert_eq!(
        shell.render(),
        PageView::EmployerApplications {
            job_title_filter: Some("Senior Frontend Engineer".to_string())
        }
    );

    let application = sample_applications()
        .into_iter()
        .next()
        .expect("sample application");
    shell.open_application(application.clone());
    assert_eq!(
        shell.render(),
        PageView::EmployerApplicationDetail {
            application: Some(Box::new(application))
        }
    );

    assert_eq!(shell.back(), Some(PageType::EmployerApplications));
    assert_eq!(
        shell.render(),
        PageView::EmployerApplications {
            job_title_filter: None
        },
        "selection does not survive leaving the page"
    );
}

#[test]
fn identifiers_from_links_round_trip() {
    let mut shell = AppShell::new(Perspective::Candidate);
    for page in PageType::ALL {
        let view = shell.navigate_to_identifier(page.identifier());
        assert_eq!(view.page(), Some(page));
        assert_eq!(shell.current_page(), page);
    }
    assert_eq!(shell.router().history().len(), PageType::ALL.len());
}

#[test]
fn unknown_identifier_renders_not_found() {
    let mut shell = AppShell::new(Perspective::Candidate);
    shell.navigate(PageType::Jobs);

    let view = shell.navigate_to_identifier("employerPayroll");
    assert_eq!(
        view,
        PageView::NotFound {
            identifier: "employerPayroll".to_string()
        }
    );
    assert_eq!(shell.current_page(), PageType::Jobs);
    assert_eq!(initial_tab_for_identifier("employerPayroll"), "overview");
}

#[test]
fn inbox_pages_open_on_their_message_tabs() {
    let mut shell = AppShell::new(Perspective::Candidate);
    shell.navigate(PageType::Inbox);
    assert_eq!(shell.active_tab(), "inbox");

    shell.switch_perspective(Perspective::Employer);
    shell.navigate(PageType::EmployerInbox);
    assert_eq!(shell.active_tab(), "messages");
    assert_eq!(shell.perspective(), Perspective::Employer);
}

#[test]
fn tab_content_requires_a_provider() {
    let mut shell = AppShell::new(Perspective::Employer);
    let mut scope = shell.view_scope();
    assert_eq!(
        scope.tab_content().map(|tabs| tabs.active_tab().to_string()),
        Ok("overview".to_string())
    );
    scope
        .tab_content_mut()
        .expect("shell scopes carry a provider")
        .set_active_tab("activity");
    assert_eq!(shell.active_tab(), "activity");

    let detached = ViewScope::detached();
    assert_eq!(
        detached.tab_content().map(|tabs| tabs.page()),
        Err(NavigationError::MissingTabProvider)
    );
}

#[test]
fn rendered_views_serialize_with_a_page_tag() {
    let mut shell = AppShell::new(Perspective::Candidate);
    shell.open_job(JobId("job-2".to_string()));
    let json = serde_json::to_value(shell.render()).expect("serializes");
    assert_eq!(json["page"], "jobDetail");
}
