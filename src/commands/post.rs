// ABOUTME: `post` command: fill a job draft from flags or prompts and submit it
// ABOUTME: Prints the intake form message; a failed submission exits non-zero

use anyhow::{bail, Result};
use clap::Args;
use dialoguer::{Input, MultiSelect, Select};

use super::spinner;
use jobboard::board::FilterCategory;
use jobboard::intake::{DescriptionField, FieldUpdate, IntakeForm};
use jobboard::remote::ApiClient;

#[derive(Args, Debug)]
pub struct PostArgs {
    /// Prompt for every field instead of reading flags
    #[arg(long, short)]
    interactive: bool,

    #[arg(long)]
    company: Option<String>,

    #[arg(long)]
    role: Option<String>,

    #[arg(long)]
    experience: Option<String>,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    salary: Option<String>,

    /// Comma-separated skills
    #[arg(long, value_delimiter = ',')]
    skills: Vec<String>,

    #[arg(long)]
    responsibilities: Option<String>,

    #[arg(long)]
    requirements: Option<String>,

    #[arg(long)]
    nice_to_have: Option<String>,

    #[arg(long)]
    about_company: Option<String>,

    #[arg(long)]
    posted_days_ago: Option<u32>,

    #[arg(long)]
    applicants: Option<u32>,
}

impl PostArgs {
    fn apply(self, form: &mut IntakeForm) {
        let updates = [
            self.company.map(FieldUpdate::Company),
            self.role.map(FieldUpdate::Role),
            self.experience.map(FieldUpdate::Experience),
            self.location.map(FieldUpdate::Location),
            self.salary.map(FieldUpdate::Salary),
            (!self.skills.is_empty()).then_some(FieldUpdate::Skills(self.skills)),
            self.about_company.map(FieldUpdate::AboutCompany),
            self.posted_days_ago.map(FieldUpdate::PostedDaysAgo),
            self.applicants.map(FieldUpdate::Applicants),
        ];
        for update in updates.into_iter().flatten() {
            form.set_field(update);
        }

        let descriptions = [
            (DescriptionField::Responsibilities, self.responsibilities),
            (DescriptionField::Requirements, self.requirements),
            (DescriptionField::NiceToHave, self.nice_to_have),
        ];
        for (field, value) in descriptions {
            if let Some(value) = value {
                form.set_description(field, value);
            }
        }
    }
}

/// Pick one option of `category`; the first entry means "none".
fn select_option(category: FilterCategory, required: bool) -> Result<String> {
    let placeholder = format!("Select {}", category);
    let mut items = vec![placeholder.as_str()];
    items.extend_from_slice(category.options());

    loop {
        let choice = Select::new()
            .with_prompt(category.label())
            .items(&items)
            .default(0)
            .interact()?;
        if choice > 0 {
            return Ok(items[choice].to_string());
        }
        if !required {
            return Ok(String::new());
        }
        eprintln!("{} is required", category);
    }
}

fn text(prompt: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn prompt_fields(form: &mut IntakeForm) -> Result<()> {
    form.set_field(FieldUpdate::Company(select_option(FilterCategory::Company, true)?));
    form.set_field(FieldUpdate::Role(select_option(FilterCategory::Jobs, true)?));
    form.set_field(FieldUpdate::Experience(text("Experience")?));
    form.set_field(FieldUpdate::Location(select_option(FilterCategory::Location, false)?));
    form.set_field(FieldUpdate::Salary(select_option(FilterCategory::Salary, false)?));

    let skill_options = FilterCategory::Skills.options();
    let picked = MultiSelect::new()
        .with_prompt("Skills (space to toggle)")
        .items(skill_options)
        .interact()?;
    form.set_field(FieldUpdate::Skills(
        picked.into_iter().map(|i| skill_options[i].to_string()).collect(),
    ));

    form.set_description(DescriptionField::Responsibilities, text("Responsibilities")?);
    form.set_description(DescriptionField::Requirements, text("Requirements")?);
    form.set_description(DescriptionField::NiceToHave, text("Nice to have")?);
    form.set_field(FieldUpdate::AboutCompany(text("About Company")?));
    Ok(())
}

pub async fn run(client: &ApiClient, args: PostArgs) -> Result<()> {
    let mut form = IntakeForm::new();
    if args.interactive {
        prompt_fields(&mut form)?;
    } else {
        args.apply(&mut form);
    }

    let pb = spinner("Creating job...");
    let message = form.submit(client).await;
    pb.finish_and_clear();

    if !message.is_success() {
        bail!("{}", message.text());
    }
    println!("{}", message.text());
    Ok(())
}
