// ABOUTME: `browse` command: interactive job board session in the terminal
// ABOUTME: Drives filter dropdowns, card selection, tabs and search over one board

use anyhow::Result;
use dialoguer::{Input, Select};

use super::spinner;
use jobboard::board::{ActiveTab, FilterCategory, FilterDropdown, JobBoard};
use jobboard::remote::{ApiClient, SearchForm};
use jobboard::render::{render_board, render_filter_bar};

const ACTIONS: [&str; 6] = ["Filter", "Select job", "Switch tab", "Search", "Refresh", "Quit"];

async fn refresh(board: &mut JobBoard, client: &ApiClient, search: Option<&SearchForm>) {
    let pb = spinner("Fetching jobs...");
    board.fetch(client, search).await;
    pb.finish_and_clear();
}

fn choose_filter(board: &mut JobBoard, dropdowns: &mut [FilterDropdown]) -> Result<()> {
    let labels: Vec<String> = dropdowns
        .iter()
        .map(|d| format!("{}: {}", d.category(), d.label(board.filters())))
        .collect();
    let Some(idx) = Select::new()
        .with_prompt("Filter")
        .items(&labels)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };

    let dropdown = &mut dropdowns[idx];
    dropdown.click();
    print!("{}", render_filter_bar(board, std::slice::from_ref(dropdown)));

    let options = dropdown.options();
    let selected = board.filters().get(dropdown.category());
    let default = options
        .iter()
        .position(|o| Some(*o) == selected)
        .unwrap_or(0);

    match Select::new()
        .with_prompt(dropdown.category().label())
        .items(options)
        .default(default)
        .interact_opt()?
    {
        Some(choice) => {
            dropdown.choose(options[choice], |category, value| {
                board.toggle_filter(category, value)
            });
        }
        None => dropdown.click(),
    }
    Ok(())
}

fn choose_job(board: &mut JobBoard) -> Result<()> {
    if board.visible_len() == 0 {
        println!("No jobs to select.");
        return Ok(());
    }
    let items: Vec<String> = board
        .visible_jobs()
        .map(|job| format!("{} · {}", job.role, job.company))
        .collect();
    let current = (0..board.visible_len())
        .find(|&p| board.is_active(p))
        .unwrap_or(0);

    if let Some(position) = Select::new()
        .with_prompt("Job")
        .items(&items)
        .default(current)
        .interact_opt()?
    {
        board.select(position);
    }
    Ok(())
}

fn choose_tab(board: &mut JobBoard) -> Result<()> {
    let current = ActiveTab::ALL
        .iter()
        .position(|t| *t == board.tab())
        .unwrap_or(0);
    if let Some(idx) = Select::new()
        .with_prompt("Tab")
        .items(&ActiveTab::ALL.map(|t| t.label()))
        .default(current)
        .interact_opt()?
    {
        board.set_tab(ActiveTab::ALL[idx]);
    }
    Ok(())
}

fn prompt_search() -> Result<SearchForm> {
    let search_term = Input::<String>::new()
        .with_prompt("Search")
        .allow_empty(true)
        .interact_text()?;
    let location = Input::<String>::new()
        .with_prompt("Location")
        .allow_empty(true)
        .interact_text()?;
    Ok(SearchForm {
        search_term,
        location,
    })
}

pub async fn run(client: &ApiClient) -> Result<()> {
    let mut board = JobBoard::new();
    let mut dropdowns: Vec<FilterDropdown> = FilterCategory::ALL
        .iter()
        .map(|c| FilterDropdown::new(*c))
        .collect();
    let mut search: Option<SearchForm> = None;

    refresh(&mut board, client, None).await;

    loop {
        println!();
        print!("{}", render_board(&board, &dropdowns));

        let action = Select::new()
            .with_prompt("Action")
            .items(&ACTIONS)
            .default(0)
            .interact_opt()?;

        match action {
            Some(0) => choose_filter(&mut board, &mut dropdowns)?,
            Some(1) => choose_job(&mut board)?,
            Some(2) => choose_tab(&mut board)?,
            Some(3) => {
                search = Some(prompt_search()?);
                refresh(&mut board, client, search.as_ref()).await;
            }
            Some(4) => refresh(&mut board, client, search.as_ref()).await,
            _ => break,
        }
    }
    Ok(())
}
