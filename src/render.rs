// ABOUTME: Text rendering of the job board: filter bar, job cards, job detail
// ABOUTME: Display views over board state, rendered to printable strings

use std::fmt;

use crate::board::{ActiveTab, FilterDropdown, JobBoard};
use crate::remote::models::Job;

pub const SKILL_PREVIEW: usize = 3;
pub const INITIALS_PLACEHOLDER: &str = "?";
pub const NO_MATCHES: &str = "No jobs match your current filters.";
pub const NO_SELECTION: &str = "Select a job card to view details.";

/// First letter of the first two words of `company`, upper-cased.
pub fn initials(company: &str) -> String {
    let initials: String = company
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .filter_map(|c| c.to_uppercase().next())
        .collect();

    if initials.is_empty() {
        INITIALS_PLACEHOLDER.to_string()
    } else {
        initials
    }
}

/// Skill chips shown on a card, plus the `+N` overflow badge if any.
pub fn skill_preview(skills: &[String]) -> (Vec<&str>, Option<String>) {
    let shown = skills.iter().take(SKILL_PREVIEW).map(String::as_str).collect();
    let overflow = (skills.len() > SKILL_PREVIEW)
        .then(|| format!("+{}", skills.len() - SKILL_PREVIEW));
    (shown, overflow)
}

struct Card<'a> {
    job: &'a Job,
    is_active: bool,
}

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let job = self.job;
        let marker = if self.is_active { ">" } else { " " };

        writeln!(f, "{} [{}] {}", marker, initials(&job.company), job.role)?;
        writeln!(f, "     {} · {}", job.company, job.location)?;
        writeln!(f, "     {} | {}", job.experience, job.salary)?;

        let (shown, overflow) = skill_preview(&job.skills);
        let mut chips: Vec<String> = shown.iter().map(|s| format!("({})", s)).collect();
        if let Some(more) = overflow {
            chips.push(format!("({})", more));
        }
        if !chips.is_empty() {
            writeln!(f, "     {}", chips.join(" "))?;
        }

        writeln!(
            f,
            "     {} applicants · Posted {}d",
            job.applicants, job.posted_days_ago
        )
    }
}

struct Detail<'a>(&'a Job);

impl fmt::Display for Detail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let job = self.0;

        writeln!(f, "[{}] {}", initials(&job.company), job.company)?;
        writeln!(f, "{}", job.role)?;
        writeln!(f, "{} • {}", job.location, job.experience)?;
        writeln!(
            f,
            "Posted {} days ago · {} applicants",
            job.posted_days_ago, job.applicants
        )?;
        if !job.salary.is_empty() {
            writeln!(f, "Salary: {}", job.salary)?;
        }
        if !job.skills.is_empty() {
            writeln!(f, "Skills: {}", job.skills.join(", "))?;
        }

        let nice_to_have = &job.description.nice_to_have;
        let sections = [
            Some(("Job Summary", &job.description.responsibilities)),
            Some(("Requirements", &job.description.requirements)),
            (!nice_to_have.is_empty()).then_some(("Nice to have", nice_to_have)),
            Some(("About Company", &job.about_company)),
        ];
        for (title, body) in sections.into_iter().flatten() {
            write!(f, "\n{}\n{}\n", title, body)?;
        }

        write!(f, "\n[Apply Now] [Save] [Share]\n")
    }
}

struct FilterBar<'a> {
    board: &'a JobBoard,
    dropdowns: &'a [FilterDropdown],
}

impl fmt::Display for FilterBar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let filters = self.board.filters();
        let labels: Vec<String> = self
            .dropdowns
            .iter()
            .map(|d| format!("[{} v]", d.label(filters)))
            .collect();
        writeln!(f, "{}", labels.join(" "))?;

        for dropdown in self.dropdowns.iter().filter(|d| d.is_open()) {
            let selected = filters.get(dropdown.category());
            for option in dropdown.options() {
                let mark = if selected == Some(*option) { "*" } else { " " };
                writeln!(f, "  {} {}", mark, option)?;
            }
        }
        Ok(())
    }
}

struct Board<'a> {
    board: &'a JobBoard,
    dropdowns: &'a [FilterDropdown],
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let board = self.board;
        writeln!(f, "{}", render_tabs(board.tab()))?;
        let filter_bar = FilterBar {
            board,
            dropdowns: self.dropdowns,
        };
        write!(f, "{}", filter_bar)?;
        writeln!(f)?;

        if board.visible_len() == 0 {
            writeln!(f, "{}", NO_MATCHES)?;
        }
        for (position, job) in board.visible_jobs().enumerate() {
            writeln!(f, "{}.", position + 1)?;
            let card = Card {
                job,
                is_active: board.is_active(position),
            };
            write!(f, "{}", card)?;
        }

        writeln!(f)?;
        match board.active_job() {
            Some(job) => write!(f, "{}", Detail(job)),
            None => writeln!(f, "{}", NO_SELECTION),
        }
    }
}

pub fn render_card(job: &Job, is_active: bool) -> String {
    Card { job, is_active }.to_string()
}

pub fn render_detail(job: &Job) -> String {
    Detail(job).to_string()
}

pub fn render_tabs(active: ActiveTab) -> String {
    let tabs: Vec<String> = ActiveTab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("*{}*", tab)
            } else {
                tab.to_string()
            }
        })
        .collect();
    format!("{}    Sort by: Most recent", tabs.join("  "))
}

pub fn render_filter_bar(board: &JobBoard, dropdowns: &[FilterDropdown]) -> String {
    FilterBar { board, dropdowns }.to_string()
}

pub fn render_board(board: &JobBoard, dropdowns: &[FilterDropdown]) -> String {
    Board { board, dropdowns }.to_string()
}
