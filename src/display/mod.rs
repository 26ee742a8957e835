use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;
use num_traits::Float;

use crate::action::{Combination, SpanVerdict};

fn tuple<F: Display>(components: &[F]) -> String {
    format!(
        "({})",
        components
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    )
}

fn titled(title: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .add_row(vec![Cell::new(title).set_alignment(CellAlignment::Center)]);
    table
}

impl<F> Combination<F>
where
    F: Float + Display,
{
    /// Render the inputs and the resulting vector as text tables.
    pub fn display(&self) -> String {
        let title_table = titled("Linear Combination");

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Vector").set_alignment(CellAlignment::Center),
                Cell::new("Coefficient").set_alignment(CellAlignment::Center),
                Cell::new("Components").set_alignment(CellAlignment::Center),
            ]);

        for (i, (vector, coefficient)) in self.vectors.iter().zip(&self.coefficients).enumerate() {
            table.add_row(vec![
                Cell::new(format!("v{}", i + 1)).set_alignment(CellAlignment::Left),
                Cell::new(format!("{coefficient}")).set_alignment(CellAlignment::Right),
                Cell::new(tuple(vector)).set_alignment(CellAlignment::Right),
            ]);
        }
        table.add_row(vec![
            Cell::new("result").set_alignment(CellAlignment::Left),
            Cell::new("").set_alignment(CellAlignment::Right),
            Cell::new(tuple(&self.result)).set_alignment(CellAlignment::Right),
        ]);

        format!("{title_table}\n{table}")
    }
}

impl<F> Display for Combination<F>
where
    F: Float + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl SpanVerdict {
    /// Render the span verdict with a pass/fail glyph.
    pub fn display(&self) -> String {
        let title_table = titled("Span Test");

        let interpretation = if self.spans {
            format!("🟢 The vectors span ℝ^{}", self.n)
        } else {
            format!("🔴 The vectors do NOT span ℝ^{}", self.n)
        };

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Metric").set_alignment(CellAlignment::Center),
                Cell::new("Value").set_alignment(CellAlignment::Center),
                Cell::new("Interpretation").set_alignment(CellAlignment::Center),
            ]);

        table
            .add_row(vec![
                Cell::new("Rank").set_alignment(CellAlignment::Left),
                Cell::new(self.rank.to_string()).set_alignment(CellAlignment::Right),
                Cell::new("independent directions").set_alignment(CellAlignment::Left),
            ])
            .add_row(vec![
                Cell::new("Target dimension").set_alignment(CellAlignment::Left),
                Cell::new(self.n.to_string()).set_alignment(CellAlignment::Right),
                Cell::new(&interpretation).set_alignment(CellAlignment::Left),
            ]);

        format!("{title_table}\n{table}")
    }
}

impl Display for SpanVerdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
