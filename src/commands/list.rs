// ABOUTME: `list` command: one fetch, local filters, printed board
// ABOUTME: Optionally selects a card so its details are shown

use anyhow::{bail, Result};
use clap::Args;

use super::{spinner, TabArg};
use jobboard::board::{FilterCategory, FilterDropdown, JobBoard};
use jobboard::remote::{ApiClient, SearchForm};
use jobboard::render::render_board;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Free-text search term sent to the server
    #[arg(long)]
    search: Option<String>,

    /// Location search sent to the server
    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    company: Option<String>,

    /// Role filter (case-insensitive substring)
    #[arg(long)]
    role: Option<String>,

    /// Single skill filter (case-insensitive)
    #[arg(long)]
    skills: Option<String>,

    /// Location filter applied locally (exact match)
    #[arg(long = "filter-location")]
    filter_location: Option<String>,

    /// Salary filter applied locally (exact match)
    #[arg(long)]
    salary: Option<String>,

    #[arg(long, value_enum, default_value_t = TabArg::Recommended)]
    tab: TabArg,

    /// Show details of the Nth card (1-based)
    #[arg(long)]
    select: Option<usize>,
}

impl ListArgs {
    fn filters(&self) -> [(FilterCategory, Option<&str>); 5] {
        [
            (FilterCategory::Company, self.company.as_deref()),
            (FilterCategory::Jobs, self.role.as_deref()),
            (FilterCategory::Skills, self.skills.as_deref()),
            (FilterCategory::Location, self.filter_location.as_deref()),
            (FilterCategory::Salary, self.salary.as_deref()),
        ]
    }

    fn search(&self) -> Option<SearchForm> {
        if self.search.is_none() && self.location.is_none() {
            return None;
        }
        Some(SearchForm {
            search_term: self.search.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
        })
    }
}

pub async fn run(client: &ApiClient, args: ListArgs) -> Result<()> {
    let mut board = JobBoard::new();
    for (category, value) in args.filters() {
        if let Some(value) = value {
            board.toggle_filter(category, value);
        }
    }
    board.set_tab(args.tab.into());

    let pb = spinner("Fetching jobs...");
    board.fetch(client, args.search().as_ref()).await;
    pb.finish_and_clear();

    if let Some(n) = args.select {
        if n == 0 || board.select(n - 1).is_none() {
            bail!("No job card #{} (board shows {} jobs)", n, board.visible_len());
        }
    }

    let dropdowns: Vec<FilterDropdown> = FilterCategory::ALL
        .iter()
        .map(|c| FilterDropdown::new(*c))
        .collect();
    print!("{}", render_board(&board, &dropdowns));
    Ok(())
}
