use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::DesignError;

/// How the antisense terminus of a window is derived once an upstream neighbour is available.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RightEndType {
    /// Antisense terminus taken from the reverse complement of the upstream window, corrected by
    /// a dangling end from the current window's tail.
    #[display("dangling")]
    Dangling,
    /// Antisense terminus is the reverse complement of the window's last 4 nucleotides.
    #[default]
    #[display("complement")]
    Complement,
}

/// Which scored records make it into the final design.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Every scored record that survives the post-filters.
    #[default]
    #[display("all")]
    All,
    /// Only records with a positive efficiency verdict.
    #[display("efficient")]
    Efficient,
}

/// Validated, immutable options of the design engine. Use [`FilterConfig::builder`] or
/// [`FilterConfig::from_json`] to construct one.
#[derive(Clone, PartialEq, Debug, Getters, Serialize)]
pub struct FilterConfig {
    // Windowing
    sirna_size: usize,
    // Efficiency signals
    strand_check: bool,
    end_check: bool,
    accessibility_check: bool,
    terminal_check: bool,
    no_efficience: bool,
    end_stability_threshold: f64,
    accessibility_threshold: f64,
    accessibility_window: usize,
    right_end_type: RightEndType,
    // Post-filters
    remove_damaging_motifs: bool,
    min_gc: f64,
    max_gc: f64,
    contiguous_num: usize,
    // Output
    report: ReportMode,
}

impl FilterConfig {
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::default()
    }

    /// Parse a JSON object with any subset of the builder keys; missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, DesignError> {
        let builder: FilterConfigBuilder = serde_json::from_str(json)
            .map_err(|err| DesignError::config(format!("failed to parse options: {err}")))?;
        builder.build()
    }

    /// Signals that take part in the composite verdict, in evaluation order.
    pub(crate) fn enabled_signals(&self) -> [bool; 3] {
        [self.strand_check, self.end_check, self.accessibility_check]
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        let defaults = FilterConfigBuilder::default();
        FilterConfig {
            sirna_size: defaults.sirna_size,
            strand_check: defaults.strand_check,
            end_check: defaults.end_check,
            accessibility_check: defaults.accessibility_check,
            terminal_check: defaults.terminal_check,
            no_efficience: defaults.no_efficience,
            end_stability_threshold: defaults.end_stability_threshold,
            accessibility_threshold: defaults.accessibility_threshold,
            accessibility_window: defaults.accessibility_window,
            right_end_type: defaults.right_end_type,
            remove_damaging_motifs: defaults.remove_damaging_motifs,
            min_gc: defaults.min_gc,
            max_gc: defaults.max_gc,
            contiguous_num: defaults.contiguous_num,
            report: defaults.report,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfigBuilder {
    sirna_size: usize,
    strand_check: bool,
    end_check: bool,
    accessibility_check: bool,
    terminal_check: bool,
    no_efficience: bool,
    end_stability_threshold: f64,
    accessibility_threshold: f64,
    accessibility_window: usize,
    right_end_type: RightEndType,
    remove_damaging_motifs: bool,
    min_gc: f64,
    max_gc: f64,
    contiguous_num: usize,
    report: ReportMode,
}

impl Default for FilterConfigBuilder {
    fn default() -> Self {
        Self {
            sirna_size: 21,
            strand_check: true,
            end_check: true,
            accessibility_check: true,
            terminal_check: true,
            no_efficience: false,
            end_stability_threshold: 1.0,
            accessibility_threshold: 0.1,
            accessibility_window: 8,
            right_end_type: RightEndType::Complement,
            remove_damaging_motifs: true,
            min_gc: 30.0,
            max_gc: 60.0,
            contiguous_num: 4,
            report: ReportMode::All,
        }
    }
}

impl FilterConfigBuilder {
    pub fn sirna_size(mut self, sirna_size: usize) -> Self {
        self.sirna_size = sirna_size;
        self
    }

    pub fn strand_check(mut self, enabled: bool) -> Self {
        self.strand_check = enabled;
        self
    }

    pub fn end_check(mut self, enabled: bool) -> Self {
        self.end_check = enabled;
        self
    }

    pub fn accessibility_check(mut self, enabled: bool) -> Self {
        self.accessibility_check = enabled;
        self
    }

    pub fn terminal_check(mut self, enabled: bool) -> Self {
        self.terminal_check = enabled;
        self
    }

    pub fn no_efficience(mut self, enabled: bool) -> Self {
        self.no_efficience = enabled;
        self
    }

    pub fn end_stability_threshold(mut self, threshold: f64) -> Self {
        self.end_stability_threshold = threshold;
        self
    }

    pub fn accessibility_threshold(mut self, threshold: f64) -> Self {
        self.accessibility_threshold = threshold;
        self
    }

    pub fn accessibility_window(mut self, offset: usize) -> Self {
        self.accessibility_window = offset;
        self
    }

    pub fn right_end_type(mut self, right_end_type: RightEndType) -> Self {
        self.right_end_type = right_end_type;
        self
    }

    pub fn remove_damaging_motifs(mut self, enabled: bool) -> Self {
        self.remove_damaging_motifs = enabled;
        self
    }

    pub fn gc_range(mut self, min_gc: f64, max_gc: f64) -> Self {
        self.min_gc = min_gc;
        self.max_gc = max_gc;
        self
    }

    pub fn contiguous_num(mut self, contiguous_num: usize) -> Self {
        self.contiguous_num = contiguous_num;
        self
    }

    pub fn report(mut self, report: ReportMode) -> Self {
        self.report = report;
        self
    }

    pub fn build(self) -> Result<FilterConfig, DesignError> {
        if self.sirna_size < 1 {
            return Err(DesignError::config("siRNA size must be at least 1"));
        }
        if self.accessibility_window >= self.sirna_size {
            return Err(DesignError::config(format!(
                "accessibility window offset {} must be smaller than the siRNA size {}",
                self.accessibility_window, self.sirna_size
            )));
        }
        finite("end stability threshold", self.end_stability_threshold)?;
        finite("accessibility threshold", self.accessibility_threshold)?;
        finite("minimum GC content", self.min_gc)?;
        finite("maximum GC content", self.max_gc)?;
        if self.min_gc >= self.max_gc {
            return Err(DesignError::config(format!(
                "minimum GC content {} must be smaller than the maximum {}",
                self.min_gc, self.max_gc
            )));
        }
        if self.min_gc < 0.0 || self.max_gc > 100.0 {
            return Err(DesignError::config(format!(
                "GC range [{}, {}] must lie within [0, 100]",
                self.min_gc, self.max_gc
            )));
        }
        if self.contiguous_num < 1 {
            return Err(DesignError::config(
                "maximum number of contiguous G/C must be at least 1",
            ));
        }

        Ok(FilterConfig {
            sirna_size: self.sirna_size,
            strand_check: self.strand_check,
            end_check: self.end_check,
            accessibility_check: self.accessibility_check,
            terminal_check: self.terminal_check,
            no_efficience: self.no_efficience,
            end_stability_threshold: self.end_stability_threshold,
            accessibility_threshold: self.accessibility_threshold,
            accessibility_window: self.accessibility_window,
            right_end_type: self.right_end_type,
            remove_damaging_motifs: self.remove_damaging_motifs,
            min_gc: self.min_gc,
            max_gc: self.max_gc,
            contiguous_num: self.contiguous_num,
            report: self.report,
        })
    }
}

fn finite(name: &str, value: f64) -> Result<(), DesignError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DesignError::config(format!("{name} must be finite, got {value}")))
    }
}
