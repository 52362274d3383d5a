// ABOUTME: Job board state: fetched list, filters, tab, and the active job
// ABOUTME: Keeps the filtered view memoized and the active job consistent with it

use std::fmt;

use super::filters::{filter_jobs, FilterCategory, Filters};
use crate::error::BoardError;
use crate::remote::models::{Job, JobQuery, SearchForm};
use crate::remote::JobApi;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Recommended,
    Applied,
    Saved,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Recommended, ActiveTab::Applied, ActiveTab::Saved];

    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::Recommended => "Recommended",
            ActiveTab::Applied => "Applied",
            ActiveTab::Saved => "Saved",
        }
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Handle for one in-flight fetch. Results are only applied for the newest
/// ticket, and only while the server-side filters still match its query.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    seq: u64,
    query: JobQuery,
}

impl FetchTicket {
    pub fn query(&self) -> &JobQuery {
        &self.query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied { count: usize },
    Failed,
    Stale,
}

#[derive(Debug, Default)]
pub struct JobBoard {
    jobs: Vec<Job>,
    filters: Filters,
    tab: ActiveTab,
    visible: Vec<usize>,
    active: Option<usize>,
    recomputations: u64,
    issued: u64,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn tab(&self) -> ActiveTab {
        self.tab
    }

    /// Tracked for display only; the filtered view does not depend on it.
    pub fn set_tab(&mut self, tab: ActiveTab) {
        self.tab = tab;
    }

    pub fn visible_jobs(&self) -> impl Iterator<Item = &Job> + '_ {
        self.visible.iter().map(|&i| &self.jobs[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn active_job(&self) -> Option<&Job> {
        self.active.map(|i| &self.jobs[i])
    }

    /// Whether the card at `position` in the visible list is the active one.
    pub fn is_active(&self, position: usize) -> bool {
        self.active.is_some() && self.visible.get(position).copied() == self.active
    }

    /// Number of times the filtered view has been rebuilt.
    pub fn recompute_count(&self) -> u64 {
        self.recomputations
    }

    /// Select the card at `position` in the visible list.
    pub fn select(&mut self, position: usize) -> Option<&Job> {
        let index = *self.visible.get(position)?;
        self.active = Some(index);
        Some(&self.jobs[index])
    }

    pub fn toggle_filter(&mut self, category: FilterCategory, value: &str) {
        self.filters.toggle(category, value);
        self.active = None;
        self.refilter();
    }

    /// Query sent to the server: the search payload plus the company, role and
    /// skills filters. Location and salary filters are applied locally only.
    pub fn build_query(&self, search: Option<&SearchForm>) -> JobQuery {
        let owned = |v: &str| (!v.is_empty()).then(|| v.to_string());
        JobQuery {
            search_term: search.and_then(|s| owned(&s.search_term)),
            location: search.and_then(|s| owned(&s.location)),
            company: self.filters.get(FilterCategory::Company).and_then(owned),
            role: self.filters.get(FilterCategory::Jobs).and_then(owned),
            skills: self.filters.get(FilterCategory::Skills).and_then(owned),
        }
    }

    pub fn begin_fetch(&mut self, search: Option<&SearchForm>) -> FetchTicket {
        self.issued += 1;
        FetchTicket {
            seq: self.issued,
            query: self.build_query(search),
        }
    }

    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Job>, BoardError>,
    ) -> FetchOutcome {
        if ticket.seq != self.issued || !ticket.query.same_server_filters(&self.build_query(None))
        {
            tracing::debug!(seq = ticket.seq, latest = self.issued, "discarding stale job list");
            return FetchOutcome::Stale;
        }

        match result {
            Ok(jobs) => {
                let count = jobs.len();
                self.replace_jobs(jobs);
                tracing::info!(count, visible = self.visible.len(), "job list loaded");
                FetchOutcome::Applied { count }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch jobs");
                self.replace_jobs(Vec::new());
                FetchOutcome::Failed
            }
        }
    }

    pub async fn fetch<A: JobApi>(&mut self, api: &A, search: Option<&SearchForm>) -> FetchOutcome {
        let ticket = self.begin_fetch(search);
        let result = api.list_jobs(ticket.query()).await;
        self.finish_fetch(ticket, result)
    }

    fn replace_jobs(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs;
        self.active = None;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = filter_jobs(&self.jobs, &self.filters);
        self.recomputations += 1;

        if self.visible.is_empty() {
            self.active = None;
        } else if self.active.is_none() {
            self.active = Some(self.visible[0]);
        }
    }
}
