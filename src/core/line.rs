//! Unveränderlicher Linien-Snapshot (mm) mit Band-Einstellungen.
//!
//! Länge und Richtung werden immer aus den Endpunkten abgeleitet;
//! das gespeicherte `length`-Feld ist reine Anzeige.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::shared::NEAR_ZERO;

/// Grobe Ausrichtung einer Linie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineOrientation {
    Horizontal,
    Vertical,
    Diagonal,
}

/// Linienfarbe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineColor {
    #[default]
    Black,
    Red,
    Blue,
    Green,
}

/// Linienstil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// Darstellung neuer Linien (Farbe + Stil)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineAppearance {
    pub color: LineColor,
    pub style: LineStyle,
}

/// Benannte Seite, auf die das Innenband versetzt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandOrientation {
    /// Fest nach oben (−y, Bildschirmkoordinaten)
    Up,
    /// Fest nach unten (+y)
    Down,
    /// Fest nach links (−x)
    Left,
    /// Fest nach rechts (+x)
    Right,
    /// Entlang der kanonischen Innen-Normale
    Standard,
    /// Entgegen der kanonischen Innen-Normale
    Reverse,
}

/// Vorzeichen der Band-Seite relativ zur Innen-Normale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Polarity {
    #[default]
    Positive,
    Negative,
}

impl Polarity {
    /// Vorzeichen als Faktor (+1.0 / −1.0).
    pub fn sign(self) -> f64 {
        match self {
            Polarity::Positive => 1.0,
            Polarity::Negative => -1.0,
        }
    }

    /// `>= 0` → positiv, sonst negativ.
    pub fn from_dot(dot: f64) -> Self {
        if dot >= 0.0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }
}

impl From<Polarity> for i8 {
    fn from(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Positive => 1,
            Polarity::Negative => -1,
        }
    }
}

impl TryFrom<i8> for Polarity {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Polarity::Positive),
            -1 => Ok(Polarity::Negative),
            other => Err(format!("Polarität muss 1 oder -1 sein, nicht {other}")),
        }
    }
}

/// Zuletzt gewählte Band-Einstellungen einer Linie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BandSettings {
    /// Explizite Polarität (optional)
    pub polarity: Option<Polarity>,
    /// Explizite Seite (optional, hat Vorrang vor der Polarität)
    pub orientation: Option<BandOrientation>,
}

/// Eine gezeichnete Gerüst-Linie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldLine {
    /// Eindeutige Linien-ID
    pub id: String,
    /// Startpunkt in mm
    pub start: DVec2,
    /// Endpunkt in mm
    pub end: DVec2,
    /// Gespeicherte (gerundete) Länge, nur Anzeige, nie für Berechnungen
    pub length: f64,
    /// Abgeleitete Ausrichtung beim Erstellen
    pub orientation: LineOrientation,
    pub color: LineColor,
    pub style: LineStyle,
    /// Block-Breite in mm (None = Standard-Breite)
    pub block_width: Option<u32>,
    /// Band-Einstellungen (None = Standardseite)
    pub band_settings: Option<BandSettings>,
}

impl ScaffoldLine {
    /// Erstellt eine Linie mit Standard-Darstellung.
    pub fn new(id: impl Into<String>, start: DVec2, end: DVec2) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            length: calculate_line_length(start, end).round(),
            orientation: infer_orientation(start, end),
            color: LineColor::default(),
            style: LineStyle::default(),
            block_width: None,
            band_settings: None,
        }
    }

    /// Setzt Farbe und Stil.
    pub fn with_appearance(mut self, appearance: LineAppearance) -> Self {
        self.color = appearance.color;
        self.style = appearance.style;
        self
    }

    /// Setzt die Block-Breite.
    pub fn with_block_width(mut self, width: u32) -> Self {
        self.block_width = Some(width);
        self
    }

    /// Setzt die Band-Einstellungen.
    pub fn with_band_settings(mut self, settings: BandSettings) -> Self {
        self.band_settings = Some(settings);
        self
    }

    /// Richtungsvektor Start → Ende (nicht normiert).
    pub fn delta(&self) -> DVec2 {
        self.end - self.start
    }

    /// Tatsächliche euklidische Länge aus den Endpunkten.
    pub fn measured_length(&self) -> f64 {
        calculate_line_length(self.start, self.end)
    }
}

/// Euklidische Länge zwischen zwei Punkten.
pub fn calculate_line_length(start: DVec2, end: DVec2) -> f64 {
    start.distance(end)
}

/// Klassifiziert eine Linie als horizontal, vertikal oder diagonal.
pub fn infer_orientation(start: DVec2, end: DVec2) -> LineOrientation {
    let d = (end - start).abs();
    if d.y <= NEAR_ZERO {
        LineOrientation::Horizontal
    } else if d.x <= NEAR_ZERO {
        LineOrientation::Vertical
    } else {
        LineOrientation::Diagonal
    }
}
