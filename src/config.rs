/// Compile-time settings for an [`Ohmmeter`](crate::Ohmmeter).
///
/// - `reference_ohms`: The known resistor in the divider (ohms)
/// - `precision`: The precision of the ADC in bits (eg. for 12-bit precision, use `12`)
/// - `samples`: How many raw reads are averaged into one measurement
/// - `period_ms`: Pause after each measurement (ms)
///
/// # Examples
///
/// ```
/// use ohmmeter::Config;
///
/// const CONFIG: Config = Config {
///     reference_ohms: 4_700, // 4.7 kΩ
///     samples: 64,
///     ..Config::DEFAULT
/// };
///
/// assert_eq!(CONFIG.max_code(), 4095);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub reference_ohms: u32,
    pub precision: u32,
    pub samples: u32,
    pub period_ms: u32,
}

impl Config {
    /// 10 kΩ reference on a 12-bit ADC, 1000 reads per measurement, one
    /// measurement every 700 ms.
    pub const DEFAULT: Config = Config {
        reference_ohms: 10_000,
        precision: 12,
        samples: 1000,
        period_ms: 700,
    };

    /// The code the ADC reports at full scale. Saturates at `u32::MAX` for
    /// 32 bits of precision and above.
    pub const fn max_code(&self) -> u32 {
        match 1u32.checked_shl(self.precision) {
            Some(full_scale) => full_scale - 1,
            None => u32::MAX,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}
