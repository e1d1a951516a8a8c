//! Pure console views over the application collection: tab/search filtering,
//! ordering, and pagination. All functions return new sequences and take
//! their view state as an explicit context, never from module globals.

use serde::{Deserialize, Serialize};

use super::domain::{ApplicantType, Application, ApplicationStatus};

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Ordering options offered by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewSortOrder {
    #[default]
    Newest,
    Oldest,
    NameAscending,
    NameDescending,
}

/// View state for one console interaction, owned by the calling UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewContext {
    pub tab: ApplicationStatus,
    pub sub_tab: Option<ApplicantType>,
    pub search_term: Option<String>,
    pub sort: ReviewSortOrder,
    pub page: usize,
    pub page_size: usize,
}

impl ReviewContext {
    pub fn new(tab: ApplicationStatus) -> Self {
        Self {
            tab,
            sub_tab: None,
            search_term: None,
            sort: ReviewSortOrder::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the clamped paging facts the controls render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationPage {
    pub items: Vec<Application>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

/// Applications on `tab` (and `sub_tab` when set) whose name, email, business
/// name, or service type contains `search_term`, case-insensitively.
pub fn filter_applications(
    all: &[Application],
    tab: ApplicationStatus,
    sub_tab: Option<ApplicantType>,
    search_term: Option<&str>,
) -> Vec<Application> {
    let needle = search_term
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    all.iter()
        .filter(|application| application.status == tab)
        .filter(|application| {
            sub_tab
                .map(|kind| application.applicant_type == kind)
                .unwrap_or(true)
        })
        .filter(|application| match &needle {
            Some(needle) => matches_search(application, needle),
            None => true,
        })
        .cloned()
        .collect()
}

fn matches_search(application: &Application, needle: &str) -> bool {
    let fields = [
        Some(application.full_name.as_str()),
        Some(application.email.as_str()),
        application.business_name.as_deref(),
        application.service_type.as_deref(),
    ];

    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Stable re-ordering of `list`; equal keys keep their incoming order.
pub fn sort_applications(list: &[Application], order: ReviewSortOrder) -> Vec<Application> {
    let mut sorted = list.to_vec();
    match order {
        ReviewSortOrder::Newest => {
            sorted.sort_by(|a, b| b.date_applied.cmp(&a.date_applied));
        }
        ReviewSortOrder::Oldest => {
            sorted.sort_by(|a, b| a.date_applied.cmp(&b.date_applied));
        }
        ReviewSortOrder::NameAscending => {
            sorted.sort_by(|a, b| a.full_name.to_lowercase().cmp(&b.full_name.to_lowercase()));
        }
        ReviewSortOrder::NameDescending => {
            sorted.sort_by(|a, b| b.full_name.to_lowercase().cmp(&a.full_name.to_lowercase()));
        }
    }
    sorted
}

/// Slice one page out of an already filtered and sorted list.
///
/// The requested page is clamped into `[1, total_pages]` so a view pointed at
/// a page that no longer exists (after a removal shrank the list) lands on
/// the last page instead of an empty one.
pub fn paginate(list: &[Application], page: usize, page_size: usize) -> ApplicationPage {
    let page_size = page_size.max(1);
    let total = list.len();
    let total_pages = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let items = list
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    ApplicationPage {
        items,
        page,
        total_pages,
        total,
    }
}
