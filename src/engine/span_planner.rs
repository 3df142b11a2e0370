//! Spannen-Planer: zerlegt eine Gesamtlänge in Standard-Spannen.
//!
//! Bewusst eine kleine Brute-Force-Suche über die Anzahl bevorzugter
//! Spannen; der Tie-Break läuft über eine Gewichts-Tabelle, damit die
//! Geschäftsregel ohne Code-Änderung justierbar bleibt.
//!
//! Kriterien (lexikografisch):
//! 1. möglichst wenige Segmente
//! 2. möglichst kleine Straf-Summe (1800 → 0, 1500 → 1, … 150 → 5, sonst 10)

use std::collections::BTreeMap;

use crate::core::PlanError;
use crate::shared::options::{
    FALLBACK_SPANS_MM, PREFERRED_SPAN_MM, SPAN_PENALTY_WEIGHTS, UNKNOWN_SPAN_PENALTY,
};
use crate::shared::{PlannerOptions, LENGTH_TOLERANCE_MM};

use super::format_mm;

/// Tabelle der verfügbaren Spannenlängen samt Strafgewichten.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanCatalog {
    preferred: f64,
    /// Streng absteigend
    fallbacks: Vec<f64>,
    penalties: Vec<(f64, u32)>,
    unknown_penalty: u32,
    tolerance: f64,
}

impl Default for SpanCatalog {
    fn default() -> Self {
        Self {
            preferred: PREFERRED_SPAN_MM,
            fallbacks: FALLBACK_SPANS_MM.to_vec(),
            penalties: SPAN_PENALTY_WEIGHTS.to_vec(),
            unknown_penalty: UNKNOWN_SPAN_PENALTY,
            tolerance: LENGTH_TOLERANCE_MM,
        }
    }
}

/// Ergebnis einer erfolgreichen Planung.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanPlan {
    /// Geplante Segmente in Reihenfolge (bevorzugte zuerst)
    pub segments: Vec<f64>,
    /// Rest (|rest| ≤ Toleranz); wird vom Aufrufer ins letzte Segment gefaltet
    pub remainder: f64,
}

impl SpanPlan {
    /// Summe aller geplanten Segmente (ohne Rest).
    pub fn total(&self) -> f64 {
        self.segments.iter().sum()
    }

    /// Neue Segmentfolge mit dem Rest im letzten Segment.
    pub fn folded_segments(&self) -> Vec<f64> {
        let mut folded = self.segments.clone();
        if self.remainder != 0.0 {
            if let Some(last) = folded.last_mut() {
                *last += self.remainder;
            }
        }
        folded
    }
}

impl SpanCatalog {
    /// Baut den Katalog aus den Laufzeit-Optionen.
    pub fn from_options(options: &PlannerOptions) -> Self {
        let mut fallbacks: Vec<f64> = options
            .fallback_spans_mm
            .iter()
            .copied()
            .filter(|len| len.is_finite() && *len > 0.0)
            .collect();
        fallbacks.sort_by(|a, b| b.total_cmp(a));
        fallbacks.dedup();

        let preferred = if options.preferred_span_mm.is_finite() && options.preferred_span_mm > 0.0
        {
            options.preferred_span_mm
        } else {
            log::warn!(
                "Ungültige bevorzugte Spanne {}, verwende {}",
                options.preferred_span_mm,
                PREFERRED_SPAN_MM
            );
            PREFERRED_SPAN_MM
        };

        Self {
            preferred,
            fallbacks,
            penalties: options
                .penalty_weights
                .iter()
                .map(|p| (p.span_mm, p.weight))
                .collect(),
            unknown_penalty: options.unknown_span_penalty,
            tolerance: options.length_tolerance_mm.abs(),
        }
    }

    pub fn fallbacks(&self) -> &[f64] {
        &self.fallbacks
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Kleinste belegbare Länge.
    pub fn minimum_length(&self) -> f64 {
        self.fallbacks
            .last()
            .copied()
            .unwrap_or(self.preferred)
            .min(self.preferred)
    }

    /// Strafgewicht einer einzelnen Spannenlänge.
    pub fn penalty(&self, length: f64) -> u32 {
        self.penalties
            .iter()
            .find(|(span, _)| *span == length)
            .map_or(self.unknown_penalty, |(_, weight)| *weight)
    }

    /// Straf-Summe einer Belegung aus `(Länge, Anzahl)`-Gruppen.
    fn group_penalty(&self, groups: &[(f64, usize)]) -> u64 {
        groups
            .iter()
            .map(|&(len, count)| u64::from(self.penalty(len)) * count as u64)
            .sum()
    }

    /// Füllt `remaining` gierig mit Ersatz-Spannen auf (absteigend).
    ///
    /// Liefert `(Länge, Anzahl)`-Gruppen und den Rest; `None`, wenn danach
    /// mehr als die Toleranz übrig bleibt.
    fn fill_with_fallbacks(&self, remaining: f64) -> Option<(Vec<(f64, usize)>, f64)> {
        if remaining <= self.tolerance {
            return Some((Vec::new(), remaining));
        }

        let mut rest = remaining;
        let mut groups = Vec::new();
        for &size in &self.fallbacks {
            if rest < size {
                continue;
            }
            let count = (rest / size).floor() as usize;
            groups.push((size, count));
            rest -= count as f64 * size;
        }

        (rest.abs() <= self.tolerance).then_some((groups, rest))
    }

    /// Untere Schranke der Segmentzahl für `preferred_count` bevorzugte Spannen.
    fn segment_lower_bound(&self, preferred_count: usize, leftover: f64) -> usize {
        let fill = match self.fallbacks.first() {
            Some(&largest) if leftover > self.tolerance => {
                ((leftover - self.tolerance) / largest - 1e-9).ceil().max(0.0) as usize
            }
            _ => 0,
        };
        preferred_count + fill
    }

    /// Plant die Spannen für `length_mm`.
    ///
    /// Kandidaten werden nur über Anzahlen bewertet; die Segmentfolge entsteht
    /// einmal für den Gewinner.
    pub fn plan(&self, length_mm: f64) -> Result<SpanPlan, PlanError> {
        if !length_mm.is_finite() || length_mm < self.minimum_length() {
            return Err(PlanError::InsufficientLength { length_mm });
        }

        let max_preferred = (length_mm / self.preferred).floor() as usize;
        let preferred_penalty = u64::from(self.penalty(self.preferred));
        // Schranke steigt mit fallender Anzahl nur, wenn keine Ersatz-Spanne länger ist
        let bound_is_monotone =
            !matches!(self.fallbacks.first(), Some(&largest) if largest > self.preferred);

        let mut best: Option<(usize, Vec<(f64, usize)>, f64, (usize, u64))> = None;

        for preferred_count in (0..=max_preferred).rev() {
            let leftover = length_mm - preferred_count as f64 * self.preferred;

            if let Some((_, _, _, (best_segments, _))) = &best {
                if self.segment_lower_bound(preferred_count, leftover) > *best_segments {
                    if bound_is_monotone {
                        break;
                    }
                    continue;
                }
            }

            let (fill, remainder) = if leftover.abs() <= self.tolerance {
                (Vec::new(), leftover)
            } else {
                match self.fill_with_fallbacks(leftover) {
                    Some(found) => found,
                    None => continue,
                }
            };

            let fill_count: usize = fill.iter().map(|&(_, count)| count).sum();
            let segment_count = preferred_count + fill_count;
            if segment_count == 0 {
                continue;
            }
            let score = (
                segment_count,
                preferred_penalty * preferred_count as u64 + self.group_penalty(&fill),
            );
            log::debug!(
                "Kandidat {} x {}: {} Segmente, Strafe {}",
                preferred_count,
                format_mm(self.preferred),
                score.0,
                score.1
            );

            // Nur echte Verbesserungen ersetzen: bei Gleichstand gewinnt der
            // Kandidat mit mehr bevorzugten Spannen (früher gefunden).
            let improves = match &best {
                None => true,
                Some((_, _, _, best_score)) => score < *best_score,
            };
            if improves {
                best = Some((preferred_count, fill, remainder, score));
            }
        }

        let (preferred_count, fill, remainder, _) =
            best.ok_or(PlanError::InsufficientLength { length_mm })?;

        let mut segments = vec![self.preferred; preferred_count];
        for (size, count) in fill {
            segments.extend(std::iter::repeat(size).take(count));
        }
        Ok(SpanPlan {
            segments,
            remainder,
        })
    }
}

/// Plant Spannen mit dem Standard-Katalog.
pub fn plan_spans(length_mm: f64) -> Result<SpanPlan, PlanError> {
    SpanCatalog::default().plan(length_mm)
}

/// Menschenlesbare Zusammenfassung, absteigend nach Länge gruppiert,
/// z.B. `"1800 × 3, 1500"`.
pub fn span_summary(segments: &[f64]) -> String {
    let mut counts: BTreeMap<i64, (f64, usize)> = BTreeMap::new();
    for &segment in segments {
        let key = (segment * 1000.0).round() as i64;
        counts.entry(key).or_insert((segment, 0)).1 += 1;
    }
    counts
        .values()
        .rev()
        .map(|&(length, count)| {
            if count > 1 {
                format!("{} × {}", format_mm(length), count)
            } else {
                format_mm(length)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
