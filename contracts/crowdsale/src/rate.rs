use crate::constants::PERCENT_DENOMINATOR;
use crate::errors::Error;
use crate::types::Issuance;
use crate::waves::WaveTable;

/// True once the raise after a contribution has reached the wave's cap.
pub fn should_increment_wave(_wave_index: u32, total_raised_after: i128, wave_cap: i128) -> bool {
    total_raised_after >= wave_cap
}

/// Tokens for `amount` at the base rate plus the wave's bonus percent.
pub fn tokens_for(amount: i128, rate: i128, bonus_pct: u32) -> Result<i128, Error> {
    amount
        .checked_mul(rate)
        .and_then(|base| base.checked_mul(PERCENT_DENOMINATOR + i128::from(bonus_pct)))
        .map(|scaled| scaled / PERCENT_DENOMINATOR)
        .ok_or(Error::ArithmeticOverflow)
}

/// Walks forward from `current_wave` past every wave whose cap the new total
/// has reached, stopping at the last wave.
pub fn next_wave(
    table: &WaveTable,
    current_wave: u32,
    total_raised_after: i128,
) -> Result<u32, Error> {
    let mut wave = current_wave;
    while wave < table.last_index()
        && should_increment_wave(wave, total_raised_after, table.cap_for_wave(wave)?)
    {
        wave += 1;
    }
    Ok(wave)
}

/// Prices a contribution entirely at the wave active before it. A
/// contribution that crosses a wave boundary is not split across bonus rates.
pub fn compute_issuance(
    table: &WaveTable,
    rate: i128,
    amount: i128,
    total_raised_before: i128,
    current_wave: u32,
) -> Result<Issuance, Error> {
    let bonus = table.bonus_for_wave(current_wave)?;
    let tokens = tokens_for(amount, rate, bonus)?;
    let total_raised_after = total_raised_before
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    Ok(Issuance {
        tokens,
        new_wave: next_wave(table, current_wave, total_raised_after)?,
    })
}
