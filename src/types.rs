/// One raw line of an energy log, terminator included.
/// Example: `FepEnergy:     500000   12.0034   11.9876   0.0521   -4.5210\n`
pub type LogLine = String;
/// Simulation step count parsed from an energy record.
/// Example: `2000000`
pub type StepCount = u64;
/// Percentile target for a derivative log, in `1..=99`.
/// Examples: `1`, `50`, `99`
pub type Percentage = u8;
/// Free-energy estimate (ΔG) read from the last data line of a derivative log.
/// Example: `-4.567`
pub type FreeEnergy = f64;
