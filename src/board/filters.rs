// ABOUTME: Filter categories, the option table, and the job filtering predicate
// ABOUTME: Filtering is a pure function of the job list and the filter state

use std::fmt;

use crate::remote::models::Job;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    Company,
    Jobs,
    Skills,
    Location,
    Salary,
}

impl FilterCategory {
    /// Display order of the filter bar.
    pub const ALL: [FilterCategory; 5] = [
        FilterCategory::Company,
        FilterCategory::Jobs,
        FilterCategory::Skills,
        FilterCategory::Location,
        FilterCategory::Salary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterCategory::Company => "Company",
            FilterCategory::Jobs => "Jobs",
            FilterCategory::Skills => "Skills",
            FilterCategory::Location => "Location",
            FilterCategory::Salary => "Salary",
        }
    }

    /// Values offered by the dropdown (and the intake form) for this category.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            FilterCategory::Company => &[
                "CredePath Tech",
                "DataFlow Systems",
                "WebCrafters LLC",
                "CloudWorks",
            ],
            FilterCategory::Jobs => &[
                "Frontend Engineer",
                "Backend Developer",
                "Full Stack Developer",
                "DevOps Engineer",
            ],
            FilterCategory::Skills => &["React", "Node.js", "TypeScript", "AWS", "Docker"],
            FilterCategory::Location => &["New Delhi", "Bengaluru", "Remote", "Hyderabad"],
            FilterCategory::Salary => &["< 15 LPA", "15-25 LPA", "> 25 LPA"],
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One selected value (or none) per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    company: Option<String>,
    jobs: Option<String>,
    skills: Option<String>,
    location: Option<String>,
    salary: Option<String>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: FilterCategory) -> Option<&str> {
        match category {
            FilterCategory::Company => self.company.as_deref(),
            FilterCategory::Jobs => self.jobs.as_deref(),
            FilterCategory::Skills => self.skills.as_deref(),
            FilterCategory::Location => self.location.as_deref(),
            FilterCategory::Salary => self.salary.as_deref(),
        }
    }

    fn slot_mut(&mut self, category: FilterCategory) -> &mut Option<String> {
        match category {
            FilterCategory::Company => &mut self.company,
            FilterCategory::Jobs => &mut self.jobs,
            FilterCategory::Skills => &mut self.skills,
            FilterCategory::Location => &mut self.location,
            FilterCategory::Salary => &mut self.salary,
        }
    }

    /// Choosing the value a category already holds clears it; any other value
    /// replaces it. An empty value always clears.
    pub fn toggle(&mut self, category: FilterCategory, value: &str) {
        let slot = self.slot_mut(category);
        if value.is_empty() || slot.as_deref() == Some(value) {
            *slot = None;
        } else {
            *slot = Some(value.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        FilterCategory::ALL.iter().all(|c| self.get(*c).is_none())
    }

    /// Salary is matched here only, locally and exactly; the server never sees it.
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(company) = &self.company {
            if job.company != *company {
                return false;
            }
        }
        if let Some(role) = &self.jobs {
            if !job.role.to_lowercase().contains(&role.to_lowercase()) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if job.location != *location {
                return false;
            }
        }
        if let Some(skill) = &self.skills {
            let wanted = skill.to_lowercase();
            if !job.skills.iter().any(|s| s.to_lowercase() == wanted) {
                return false;
            }
        }
        if let Some(salary) = &self.salary {
            if job.salary != *salary {
                return false;
            }
        }
        true
    }
}

/// Positions (into `jobs`) of every job passing `filters`, in list order.
pub fn filter_jobs(jobs: &[Job], filters: &Filters) -> Vec<usize> {
    jobs.iter()
        .enumerate()
        .filter(|(_, job)| filters.matches(job))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u64, company: &str, role: &str, location: &str, skills: &[&str]) -> Job {
        Job {
            id,
            company: company.to_string(),
            role: role.to_string(),
            location: location.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Job> {
        vec![
            job(1, "CredePath Tech", "Frontend Engineer", "Remote", &["React", "TypeScript"]),
            job(2, "CloudWorks", "DevOps Engineer", "Bengaluru", &["AWS", "Docker"]),
            job(3, "CredePath Tech", "Backend Developer", "New Delhi", &["Node.js"]),
            job(4, "DataFlow Systems", "Full Stack Developer", "Remote", &["react", "Node.js"]),
        ]
    }

    #[test]
    fn test_toggle_law_for_every_option() {
        for category in FilterCategory::ALL {
            for option in category.options() {
                let mut filters = Filters::new();
                filters.toggle(category, option);
                assert_eq!(filters.get(category), Some(*option));

                filters.toggle(category, option);
                assert_eq!(filters.get(category), None, "{category} {option}");
            }
        }
    }

    #[test]
    fn test_toggle_replaces_other_value() {
        let mut filters = Filters::new();
        filters.toggle(FilterCategory::Location, "Remote");
        filters.toggle(FilterCategory::Location, "Hyderabad");
        assert_eq!(filters.get(FilterCategory::Location), Some("Hyderabad"));
        assert_eq!(filters.get(FilterCategory::Company), None);
    }

    #[test]
    fn test_toggle_empty_value_clears() {
        let mut filters = Filters::new();
        filters.toggle(FilterCategory::Salary, "> 25 LPA");
        filters.toggle(FilterCategory::Salary, "");
        assert!(filters.is_empty());
    }

    #[test]
    fn test_company_filter_keeps_relative_order() {
        let jobs = sample();
        let mut filters = Filters::new();
        filters.toggle(FilterCategory::Company, "CredePath Tech");

        assert_eq!(filter_jobs(&jobs, &filters), vec![0, 2]);
    }

    #[test]
    fn test_role_filter_is_case_insensitive_substring() {
        let jobs = sample();
        let mut filters = Filters::new();
        filters.toggle(FilterCategory::Jobs, "engineer");

        assert_eq!(filter_jobs(&jobs, &filters), vec![0, 1]);
    }

    #[test]
    fn test_skills_filter_is_case_insensitive_membership() {
        let jobs = sample();
        let mut filters = Filters::new();
        filters.toggle(FilterCategory::Skills, "react");

        assert_eq!(filter_jobs(&jobs, &filters), vec![0, 3]);

        filters.toggle(FilterCategory::Skills, "React");
        assert_eq!(filter_jobs(&jobs, &filters), vec![0, 3]);
    }

    #[test]
    fn test_skills_filter_does_not_match_substrings() {
        let jobs = vec![job(1, "CloudWorks", "Dev", "Remote", &["Node.js"])];
        let mut filters = Filters::new();
        filters.toggle(FilterCategory::Skills, "Node");
        assert!(filter_jobs(&jobs, &filters).is_empty());
    }

    #[test]
    fn test_location_and_salary_are_exact() {
        let mut jobs = sample();
        jobs[0].salary = "15-25 LPA".to_string();
        jobs[3].salary = "> 25 LPA".to_string();

        let mut filters = Filters::new();
        filters.toggle(FilterCategory::Location, "Remote");
        assert_eq!(filter_jobs(&jobs, &filters), vec![0, 3]);

        filters.toggle(FilterCategory::Salary, "15-25 LPA");
        assert_eq!(filter_jobs(&jobs, &filters), vec![0]);

        filters.toggle(FilterCategory::Location, "remote");
        assert!(filter_jobs(&jobs, &filters).is_empty());
    }

    #[test]
    fn test_filtering_is_deterministic() {
        let jobs = sample();
        let mut filters = Filters::new();
        filters.toggle(FilterCategory::Skills, "Node.js");
        filters.toggle(FilterCategory::Location, "Remote");

        let first = filter_jobs(&jobs, &filters);
        let second = filter_jobs(&jobs, &filters);
        assert_eq!(first, second);
        assert_eq!(first, vec![3]);
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let jobs = sample();
        assert_eq!(filter_jobs(&jobs, &Filters::new()), vec![0, 1, 2, 3]);
        assert!(filter_jobs(&[], &Filters::new()).is_empty());
    }
}
