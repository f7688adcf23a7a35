use time::Date;

/// Outbound port for the current calendar date.
///
/// Only display derivation asks for "today"; schedule generation is pure date
/// arithmetic and never reads the clock.
pub trait Clock: Send + Sync + 'static {
    fn today(&self) -> Date;
}
