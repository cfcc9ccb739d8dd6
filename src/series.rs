use serde::Serialize;

/// One completed sweep's observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyPoint {
    pub temperature: f64,
    pub energy: f64,
}

/// Append-only series of (temperature, total energy) pairs, one per sweep
#[derive(Debug, Clone, Default)]
pub struct EnergyTimeSeries {
    points: Vec<EnergyPoint>,
}

impl EnergyTimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, temperature: f64, energy: f64) {
        self.points.push(EnergyPoint {
            temperature,
            energy,
        });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&EnergyPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnergyPoint> {
        self.points.iter()
    }

    pub fn points(&self) -> &[EnergyPoint] {
        &self.points
    }
}
