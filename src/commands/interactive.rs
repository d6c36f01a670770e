//! Interactive calculator
//!
//! Prompts for each field in turn. Every answer is a committed change and
//! recomputes the projection, replacing the previous charts.

use anyhow::Result;
use dialoguer::{Input, Select};
use is_terminal::IsTerminal;

use growth_projector::models::Currency;
use growth_projector::presentation::projection_event;
use growth_projector::{Calculator, ChartRenderer, FieldValues, Projection, Trigger};

use super::Session;
use crate::ui::chart::TerminalChartRenderer;
use crate::ui::primitives::text::Icon;
use crate::ui::views::projection::render_projection;

const UNITS: [&str; 2] = ["months", "years"];

/// Source of answers for the field prompts
trait Prompter {
    fn text(&mut self, prompt: &str, current: &str) -> Result<String>;
    fn choose(&mut self, prompt: &str, items: &[String], current: usize) -> Result<usize>;
}

/// Prompts on the terminal
struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str, current: &str) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .default(current.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn choose(&mut self, prompt: &str, items: &[String], current: usize) -> Result<usize> {
        let idx = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(current)
            .interact()?;
        Ok(idx)
    }
}

pub fn cmd_interactive(session: &Session) -> Result<()> {
    let ui = &session.ui;
    let config = &session.config;
    let mut fields = config.defaults.fields();

    let renderer = TerminalChartRenderer::new(ui.color, ui.unicode, ui.caps.width);
    let mut calc = Calculator::from_config(config, renderer, String::new());
    let projection = calc.recompute(Trigger::InitialLoad, &fields);

    if ui.json {
        crate::ui::json::emit(projection_event(&projection, calc.sink()))?;
        return Ok(());
    }

    if !std::io::stdin().is_terminal() || !ui.caps.is_tty {
        println!("{}", calc.sink());
        println!("Try: `growth project --amount 10000 --duration 12` or `growth --help`");
        return Ok(());
    }

    let unicode = ui.unicode;
    let projection = prompt_fields(&mut calc, &mut fields, &mut TerminalPrompter, |summary| {
        println!("  {} {}", Icon::Arrow.render(unicode), summary)
    })?;

    println!();
    print!(
        "{}",
        render_projection(&projection, calc.sink(), ui.color, ui.unicode)
    );
    for frame in calc.renderer().frames() {
        println!();
        print!("{}", frame);
    }

    Ok(())
}

/// Ask for every field, recomputing after each answer, then submit.
///
/// `status` receives the summary line after the current state and after
/// every answer.
fn prompt_fields<R: ChartRenderer>(
    calc: &mut Calculator<R, String>,
    fields: &mut FieldValues,
    prompter: &mut impl Prompter,
    mut status: impl FnMut(&str),
) -> Result<Projection> {
    status(calc.sink());

    fields.start_amount = prompter.text("Starting amount", &fields.start_amount)?;
    changed(calc, fields, &mut status);

    fields.duration = prompter.text("Duration", &fields.duration)?;
    changed(calc, fields, &mut status);

    fields.duration_unit = select_unit(prompter, fields)?;
    changed(calc, fields, &mut status);

    fields.rate = prompter.text("Annual rate (%)", &fields.rate)?;
    changed(calc, fields, &mut status);

    fields.currency = select_currency(prompter, fields)?;
    changed(calc, fields, &mut status);

    Ok(calc.recompute(Trigger::Submit, fields))
}

fn changed<R: ChartRenderer>(
    calc: &mut Calculator<R, String>,
    fields: &FieldValues,
    status: &mut impl FnMut(&str),
) {
    calc.recompute(Trigger::Change, fields);
    status(calc.sink());
}

fn select_unit(prompter: &mut impl Prompter, fields: &FieldValues) -> Result<String> {
    let items: Vec<String> = UNITS.iter().map(|u| u.to_string()).collect();
    let current = usize::from(fields.duration_unit.trim().eq_ignore_ascii_case("years"));
    let idx = prompter.choose("Duration unit", &items, current)?;
    Ok(UNITS.get(idx).copied().unwrap_or(UNITS[0]).to_string())
}

fn select_currency(prompter: &mut impl Prompter, fields: &FieldValues) -> Result<String> {
    let items: Vec<String> = Currency::ALL
        .iter()
        .map(|c| format!("{:<4} {}", c.code(), c.locale()))
        .collect();
    let current = Currency::ALL
        .iter()
        .position(|c| c.code().eq_ignore_ascii_case(fields.currency.trim()))
        .unwrap_or(0);
    let idx = prompter.choose("Currency", &items, current)?;
    let currency = Currency::ALL.get(idx).copied().unwrap_or_default();
    Ok(currency.code().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use growth_projector::{ChartSpecBuilder, InputNormalizer, RecordingRenderer};

    /// Answers from a fixed script
    struct Scripted {
        texts: Vec<&'static str>,
        choices: Vec<usize>,
    }

    impl Prompter for Scripted {
        fn text(&mut self, _prompt: &str, _current: &str) -> Result<String> {
            Ok(self.texts.remove(0).to_string())
        }

        fn choose(&mut self, _prompt: &str, _items: &[String], _current: usize) -> Result<usize> {
            Ok(self.choices.remove(0))
        }
    }

    fn calculator() -> Calculator<RecordingRenderer, String> {
        Calculator::new(
            InputNormalizer::default(),
            ChartSpecBuilder::default(),
            RecordingRenderer::default(),
            String::new(),
        )
        .with_summary_prefix("Worth: ")
        .with_start_year(2026)
    }

    #[test]
    fn every_answer_recomputes_including_currency() {
        let mut calc = calculator();
        let mut fields = FieldValues::new("1", "1", "months", "0", "ILS");
        calc.recompute(Trigger::InitialLoad, &fields);

        let mut prompter = Scripted {
            texts: vec!["10000", "12", "12"],
            // months, then USD
            choices: vec![0, 1],
        };
        let mut lines = Vec::new();
        let projection =
            prompt_fields(&mut calc, &mut fields, &mut prompter, |s| lines.push(s.to_string()))
                .unwrap();

        // current state plus one line per answered field
        assert_eq!(lines.len(), 6);
        assert_eq!(lines.last().map(String::as_str), Some("Worth: $11,200"));
        assert_eq!(projection.input.currency, Currency::Usd);

        // initial load, five changes and the submit, two charts each
        let renderer = calc.renderer();
        assert_eq!(renderer.created.len(), 14);
        assert_eq!(renderer.live_count(), 2);
    }

    #[test]
    fn unit_choice_maps_to_field_text() {
        let fields = FieldValues::new("1", "1", "years", "0", "ILS");
        let mut prompter = Scripted {
            texts: vec![],
            choices: vec![1],
        };
        assert_eq!(select_unit(&mut prompter, &fields).unwrap(), "years");
    }
}
