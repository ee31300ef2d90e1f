use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame, Terminal,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::io;
use tracing::debug;

use crate::models::{format_date, Category, Transaction};
use crate::ui::theme;
use crate::ui::util::format_amount;

/// Per-day income and expense totals over a continuous range of days.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct DailySeries {
    pub(crate) days: Vec<NaiveDate>,
    pub(crate) income: Vec<Decimal>,
    pub(crate) expenses: Vec<Decimal>,
}

impl DailySeries {
    pub(crate) fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub(crate) fn max_amount(&self) -> Decimal {
        self.income
            .iter()
            .chain(self.expenses.iter())
            .copied()
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    /// First, middle and last day.
    pub(crate) fn axis_labels(&self) -> Vec<String> {
        let mut idx = vec![0, self.days.len() / 2, self.days.len().saturating_sub(1)];
        idx.dedup();
        idx.iter()
            .filter_map(|&i| self.days.get(i))
            .map(|d| format_date(*d))
            .collect()
    }
}

/// Bucket records by day from the earliest to the latest date. Days with no
/// records are zero.
pub(crate) fn daily_series(records: &[Transaction]) -> DailySeries {
    let (Some(first), Some(last)) = (
        records.iter().map(|t| t.date).min(),
        records.iter().map(|t| t.date).max(),
    ) else {
        return DailySeries::default();
    };

    let len = (last - first).num_days() as usize + 1;
    let mut series = DailySeries {
        days: first.iter_days().take(len).collect(),
        income: vec![Decimal::ZERO; len],
        expenses: vec![Decimal::ZERO; len],
    };

    for txn in records {
        let i = (txn.date - first).num_days() as usize;
        match txn.category {
            Category::Income => series.income[i] += txn.amount,
            Category::Expenses => series.expenses[i] += txn.amount,
        }
    }
    series
}

pub(crate) fn to_points(values: &[Decimal]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, v.to_f64().unwrap_or(0.0)))
        .collect()
}

/// Draw the income/expense chart full-screen until a key is pressed.
pub(crate) fn show(records: &[Transaction]) -> Result<()> {
    let series = daily_series(records);
    if series.is_empty() {
        println!("Nothing to plot.");
        return Ok(());
    }
    debug!(days = series.days.len(), "plotting daily series");

    enable_raw_mode()?;
    with_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
            run_chart(&mut terminal, &series)
        },
        restore_terminal,
    )
}

/// Run `body`, then `restore` whatever happened. The body's error wins.
fn with_restore<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    raw?;
    Ok(())
}

fn run_chart(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    series: &DailySeries,
) -> Result<()> {
    let income = to_points(&series.income);
    let expenses = to_points(&series.expenses);
    loop {
        terminal.draw(|f| {
            let area = f.area();
            render(f, area, series, &income, &expenses);
        })?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn render(
    f: &mut Frame,
    area: Rect,
    series: &DailySeries,
    income: &[(f64, f64)],
    expenses: &[(f64, f64)],
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(area);

    let datasets = vec![
        Dataset::default()
            .name("Income")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme::income_style())
            .data(income),
        Dataset::default()
            .name("Expenses")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme::expense_style())
            .data(expenses),
    ];

    let max = series.max_amount();
    let y_max = max.to_f64().unwrap_or(0.0).max(1.0);
    let x_max = (series.days.len().saturating_sub(1) as f64).max(1.0);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style())
                .title(Span::styled(
                    " Income and Expenses Over Time ",
                    theme::header_style(),
                )),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(theme::dim_style())
                .bounds([0.0, x_max])
                .labels(series.axis_labels()),
        )
        .y_axis(
            Axis::default()
                .title("Amount")
                .style(theme::dim_style())
                .bounds([0.0, y_max])
                .labels(vec![
                    format_amount(Decimal::ZERO),
                    format_amount(max / Decimal::TWO),
                    format_amount(max),
                ]),
        )
        .legend_position(Some(LegendPosition::TopLeft));

    f.render_widget(chart, chunks[0]);
    f.render_widget(
        Paragraph::new(" Press any key to return to the menu ").style(theme::status_bar_style()),
        chunks[1],
    );
}
