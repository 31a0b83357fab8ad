use soroban_sdk::{contracttype, Vec};

use crate::errors::Error;

/// Ordered sale waves: wave `i` is active until the cumulative raise reaches
/// `caps[i]`, and pays `bonuses[i]` percent on top of the base rate.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WaveTable {
    pub caps: Vec<i128>,
    pub bonuses: Vec<u32>,
}

impl WaveTable {
    pub fn new(caps: Vec<i128>, bonuses: Vec<u32>) -> Result<Self, Error> {
        if caps.len() != bonuses.len() {
            return Err(Error::WaveLengthMismatch);
        }
        if caps.is_empty() {
            return Err(Error::EmptyWaveTable);
        }

        let mut previous: Option<i128> = None;
        for cap in caps.iter() {
            if cap <= 0 {
                return Err(Error::InvalidWaveCap);
            }
            if let Some(prev) = previous {
                if cap <= prev {
                    return Err(Error::WavesNotAscending);
                }
            }
            previous = Some(cap);
        }
        if bonuses.iter().any(|bonus| bonus == 0) {
            return Err(Error::InvalidWaveBonus);
        }

        Ok(Self { caps, bonuses })
    }

    pub fn wave_count(&self) -> u32 {
        self.caps.len()
    }

    pub fn last_index(&self) -> u32 {
        self.wave_count().saturating_sub(1)
    }

    pub fn cap_for_wave(&self, index: u32) -> Result<i128, Error> {
        self.caps.get(index).ok_or(Error::WaveOutOfRange)
    }

    pub fn bonus_for_wave(&self, index: u32) -> Result<u32, Error> {
        self.bonuses.get(index).ok_or(Error::WaveOutOfRange)
    }

    /// Cap of the final wave; a valid sale config requires it to equal the sale cap.
    pub fn final_cap(&self) -> Result<i128, Error> {
        self.cap_for_wave(self.last_index())
    }
}
