//! `winding options`: walk the cascading selection one stage at a time.

use std::fmt;

use anyhow::Result;
use winding_core::WindingConfiguration;
use winding_data::ConfigurationDataset;
use winding_select::{CascadingSelector, SelectionState, Stage, StageOptions};

/// A revalidated selection: what was dropped and what comes next.
pub(crate) struct SelectionView<'a> {
    pub cleared: Vec<Stage>,
    pub options: StageOptions,
    /// The resolved row once every stage is set.
    pub row: Option<&'a WindingConfiguration>,
}

impl fmt::Display for SelectionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stage in &self.cleared {
            writeln!(f, "note: dropped --{stage}, not legal for the stages above it")?;
        }

        if let (StageOptions::Complete { key }, Some(row)) = (&self.options, self.row) {
            writeln!(f, "=== Configuration: {key} ===")?;
            writeln!(f, "Winding factor:  {}", row.winding_factor)?;
            writeln!(f, "Quality:         {}", row.quality)?;
            writeln!(f, "Coils per group: {}", row.coils_per_group)?;
            writeln!(f, "Pitch span:      {}", row.pitch_span())?;
            writeln!(f)?;
            return writeln!(f, "Use 'winding calc' with these flags to size the winding.");
        }

        if let Some(stage) = self.options.stage() {
            writeln!(f, "=== Choose {stage} ===")?;
        }
        let labels = self.options.labels();
        if labels.is_empty() {
            writeln!(f, "  (no legal values)")?;
        }
        for (label, recommended) in labels {
            let marker = if recommended { '*' } else { ' ' };
            writeln!(f, "{marker} {label}")?;
        }
        if let Some(reason) = self.options.reason() {
            writeln!(f)?;
            writeln!(f, "Recommended: {reason}")?;
        }
        Ok(())
    }
}

pub fn run(
    dataset: &ConfigurationDataset,
    mut selection: SelectionState,
    power_hint_cv: f64,
) -> Result<()> {
    print!("{}", view(dataset, &mut selection, power_hint_cv)?);
    Ok(())
}

/// Revalidate `selection` against the dataset and work out what comes next.
pub(crate) fn view<'a>(
    dataset: &'a ConfigurationDataset,
    selection: &mut SelectionState,
    power_hint_cv: f64,
) -> Result<SelectionView<'a>> {
    let selector = CascadingSelector::new(dataset).with_power_hint(power_hint_cv);
    let cleared = selector.revalidate(selection);
    let options = selector.options(selection);
    let row = match options {
        StageOptions::Complete { .. } => Some(selector.resolve(selection)?),
        _ => None,
    };
    Ok(SelectionView {
        cleared,
        options,
        row,
    })
}
