use crate::core::classify::{filter_adults, group_by_age_range};
use crate::core::memo::FibonacciMemo;
use crate::core::sequences::{even_squares, squares};
use crate::domain::model::{AgeRange, Person};
use crate::domain::ports::ReportSettings;
use crate::utils::error::Result;
use std::fmt::Write;

const RULE_WIDTH: usize = 40;

/// 示範用的固定資料
pub fn sample_people() -> Result<Vec<Person>> {
    Ok(vec![
        Person::new("Alice Johnson", 25, "alice@example.com")?,
        Person::new("Bob Smith", 17, "bob@example.com")?,
        Person::new("Charlie Brown", 30, "charlie@example.com")?,
        Person::new("Diana Prince", 70, "diana@example.com")?,
    ])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub total_people: usize,
    pub adult_count: usize,
    pub group_counts: Vec<(AgeRange, usize)>,
    pub adults_json: String,
    pub fibonacci: Vec<u64>,
    pub squares: Vec<u64>,
    pub even_squares: Vec<u64>,
}

impl Report {
    pub fn render(&self) -> String {
        let mut out = String::new();
        // 寫入 String 不會失敗
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "{}", self.title)?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(out, "Total people: {}", self.total_people)?;
        writeln!(out, "Adults: {}", self.adult_count)?;
        for (range, count) in &self.group_counts {
            writeln!(out, "{}: {}", range.label(), count)?;
        }

        writeln!(out)?;
        writeln!(out, "Adults data (JSON):")?;
        writeln!(out, "{}", self.adults_json)?;

        writeln!(out)?;
        writeln!(
            out,
            "Fibonacci sequence (first {} numbers):",
            self.fibonacci.len()
        )?;
        writeln!(out, "{:?}", self.fibonacci)?;

        writeln!(out)?;
        writeln!(out, "Squares: {:?}", self.squares)?;
        writeln!(out, "Even squares: {:?}", self.even_squares)?;
        Ok(())
    }
}

pub struct ReportEngine<C: ReportSettings> {
    settings: C,
}

impl<C: ReportSettings> ReportEngine<C> {
    pub fn new(settings: C) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &C {
        &self.settings
    }

    pub fn build(&self, people: &[Person]) -> Result<Report> {
        tracing::debug!("Building report for {} people", people.len());

        let adults = filter_adults(people);
        let groups = group_by_age_range(people);
        tracing::debug!("Found {} adults", adults.len());

        let projections: Vec<_> = adults.iter().map(|person| person.projection()).collect();
        let adults_json = if self.settings.pretty_json() {
            serde_json::to_string_pretty(&projections)?
        } else {
            serde_json::to_string(&projections)?
        };

        let mut memo = FibonacciMemo::new();
        let fibonacci = memo.sequence(self.settings.fibonacci_terms())?;
        tracing::debug!(
            "Computed {} fibonacci numbers ({} cached)",
            fibonacci.len(),
            memo.cached_len()
        );

        let squares = squares(self.settings.square_limit());
        let even_squares = even_squares(&squares);

        Ok(Report {
            title: self.settings.title().to_string(),
            total_people: people.len(),
            adult_count: adults.len(),
            group_counts: groups
                .iter()
                .map(|(range, members)| (range, members.len()))
                .collect(),
            adults_json,
            fibonacci,
            squares,
            even_squares,
        })
    }
}
