//! Sizing engine: from a dataset row and the motor ratings to winding recipes.
//!
//! The pipeline is pure. Geometry gives the pole pitch and flux, the
//! connection gives the group count and the feasible parallel factors, and
//! each factor yields one [`ConstructionOption`] with its turns and wire.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};
use winding_core::{ConfigKey, SizingInput, WindingConfiguration};
use winding_data::ConfigurationDataset;
use winding_gauge::{GaugeTable, LookupMode};

use crate::circuits::{feasible_parallel_factors, group_count};
use crate::current::{adjusted_power_w, current_density, phase_current_a, wire_area_mm2};
use crate::error::{Result, SizingError};
use crate::magnetic::{flux_wb, mm_to_cm, pole_pitch_cm};
use crate::recipe::ConstructionOption;
use crate::turns::{turns_per_coil, turns_per_phase};

/// Intermediate quantities and the construction options of one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SizingReport {
    pub key: ConfigKey,
    pub winding_factor: f64,
    pub coils_per_group: String,
    pub voltage: f64,
    /// Supply network of a standard phase voltage.
    pub network: Option<&'static str>,
    pub power_cv: f64,
    pub frequency_hz: f64,
    pub diameter_cm: f64,
    pub length_cm: f64,
    pub pole_pitch_cm: f64,
    pub flux_wb: f64,
    pub layer_coefficient: u32,
    pub num_groups: u32,
    pub adjusted_power_w: f64,
    pub phase_current_a: f64,
    /// A/mm².
    pub current_density: f64,
    pub synchronous_rpm: u32,
    pub options: Vec<ConstructionOption>,
}

impl SizingReport {
    /// Parallel factors in option order.
    pub fn parallel_factors(&self) -> Vec<u32> {
        self.options.iter().map(|o| o.k1).collect()
    }

    pub fn option(&self, k1: u32) -> Option<&ConstructionOption> {
        self.options.iter().find(|o| o.k1 == k1)
    }

    pub fn has_insufficient_wire(&self) -> bool {
        self.options.iter().any(ConstructionOption::is_wire_insufficient)
    }
}

impl fmt::Display for SizingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Sizing: {} ===", self.key)?;
        writeln!(f, "Winding factor:  {}", self.winding_factor)?;
        writeln!(f, "Coils per group: {}", self.coils_per_group)?;
        match self.network {
            Some(network) => writeln!(f, "Voltage:         {} V ({network})", self.voltage)?,
            None => writeln!(f, "Voltage:         {} V", self.voltage)?,
        }
        writeln!(f, "Power:           {} CV", self.power_cv)?;
        writeln!(
            f,
            "Frequency:       {} Hz ({} rpm synchronous)",
            self.frequency_hz, self.synchronous_rpm
        )?;
        writeln!(f)?;

        writeln!(f, "--- Magnetic circuit ---")?;
        writeln!(f, "  Diameter:        {:.1} cm", self.diameter_cm)?;
        writeln!(f, "  Length:          {:.1} cm", self.length_cm)?;
        writeln!(f, "  Pole pitch:      {:.3} cm", self.pole_pitch_cm)?;
        writeln!(f, "  Flux:            {:.6} Wb", self.flux_wb)?;
        writeln!(f, "  Groups:          {}", self.num_groups)?;
        writeln!(f)?;

        writeln!(f, "--- Current ---")?;
        writeln!(f, "  Adjusted power:  {:.1} W", self.adjusted_power_w)?;
        writeln!(f, "  Phase current:   {:.3} A", self.phase_current_a)?;
        writeln!(f, "  Current density: {} A/mm²", self.current_density)?;

        for option in &self.options {
            writeln!(f)?;
            write!(f, "{option}")?;
        }
        Ok(())
    }
}

/// Computes construction options against a gauge table.
#[derive(Debug, Clone, Copy)]
pub struct SizingEngine<'a> {
    gauges: &'a GaugeTable,
}

impl<'a> SizingEngine<'a> {
    pub fn new(gauges: &'a GaugeTable) -> Self {
        Self { gauges }
    }

    /// Look up `key` and size it. A missing key is reported, never
    /// substituted with a neighbouring row.
    pub fn compute_recipes(
        &self,
        dataset: &ConfigurationDataset,
        key: &ConfigKey,
        input: &SizingInput,
    ) -> Result<SizingReport> {
        let config = dataset
            .get(key)
            .ok_or(SizingError::ConfigurationNotFound { key: *key })?;
        self.compute(config, input)
    }

    /// Size one configuration row.
    pub fn compute(
        &self,
        config: &WindingConfiguration,
        input: &SizingInput,
    ) -> Result<SizingReport> {
        input.validate()?;
        let key = config.key;
        let zeta = config.winding_factor;
        if !(zeta > 0.0 && zeta <= 1.0) {
            return Err(SizingError::invariant(format!(
                "winding factor {zeta} of {key} is outside (0, 1]"
            )));
        }
        if key.slots == 0 {
            return Err(SizingError::invariant(format!("{key} has no slots")));
        }

        let diameter_cm = mm_to_cm(input.diameter_mm());
        let length_cm = mm_to_cm(input.length_mm());
        debug!(diameter_cm, length_cm, "core dimensions");

        let tp = pole_pitch_cm(diameter_cm, key.poles);
        let flux = flux_wb(tp, length_cm);
        debug!(pole_pitch_cm = tp, flux_wb = flux, "magnetic circuit");

        let num_groups = group_count(key.connection, key.poles)?;
        let factors = feasible_parallel_factors(num_groups);
        debug!(num_groups, ?factors, "parallel circuits");

        let k = key.layer.coefficient();
        let voltage = input.voltage().volts();
        let power_cv = input.power_cv();
        let frequency = input.frequency_hz();
        let p_adj = adjusted_power_w(power_cv);
        let current = phase_current_a(p_adj, voltage);
        let density = current_density(power_cv);
        debug!(
            layer_coefficient = k,
            adjusted_power_w = p_adj,
            phase_current_a = current,
            density,
            "electrical ratings"
        );

        let mut options = Vec::with_capacity(factors.len());
        for (idx, &k1) in factors.iter().enumerate() {
            let zf = turns_per_phase(voltage, k, k1, flux, frequency, zeta);
            let z = turns_per_coil(zf, key.slots);
            let area = wire_area_mm2(current, density, k1);
            let wire = self
                .gauges
                .lookup(area, LookupMode::SmallestSufficient)
                .map_err(|e| SizingError::invariant(format!("wire area for k1={k1}: {e}")))?;
            debug!(
                k1,
                turns_per_phase = zf,
                turns_per_coil = z,
                wire_area_mm2 = area,
                gauge = %wire.entry.label,
                "construction option"
            );
            if !wire.is_sufficient() {
                warn!(
                    k1,
                    required_mm2 = area,
                    largest = %wire.entry.label,
                    "no gauge is thick enough, using the largest available"
                );
            }

            let mut option = ConstructionOption {
                number: idx + 1,
                k1,
                total_groups: num_groups,
                groups_in_series: num_groups / k1,
                groups_in_parallel: k1,
                coils_per_group: config.coils_per_group.clone(),
                pitch: key.pitch,
                turns_per_coil: z,
                turns_per_phase: zf,
                wire_area_mm2: area,
                wire_gauge_label: wire.entry.label.clone(),
                wire,
                connection: key.connection,
                layer: key.layer,
                description: String::new(),
            };
            option.description = option.instructions();
            options.push(option);
        }

        Ok(SizingReport {
            key,
            winding_factor: zeta,
            coils_per_group: config.coils_per_group.clone(),
            voltage,
            network: input.voltage().network_label(),
            power_cv,
            frequency_hz: frequency,
            diameter_cm,
            length_cm,
            pole_pitch_cm: tp,
            flux_wb: flux,
            layer_coefficient: k,
            num_groups,
            adjusted_power_w: p_adj,
            phase_current_a: current,
            current_density: density,
            synchronous_rpm: config.synchronous_rpm(frequency),
            options,
        })
    }
}
