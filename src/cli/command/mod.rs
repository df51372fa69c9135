pub mod daily;
pub mod export;
pub mod monthly;
pub mod report;
pub mod stations;
pub mod summary;
pub mod windrose;

pub use daily::daily;
pub use export::export;
pub use monthly::monthly;
pub use report::report;
pub use stations::stations;
pub use summary::summary;
pub use windrose::windrose;

use anyhow::Result;
use klimaat::{Klimaat, ObservationLazyFrame};

use super::Selection;

/// Resolves the shared station/period arguments into a filtered frame.
fn select(client: &Klimaat, selection: &Selection) -> Result<ObservationLazyFrame> {
    let frame = client
        .observations()
        .maybe_station(selection.station.as_deref())
        .call()?;
    Ok(selection.apply(frame)?)
}

fn fmt_opt(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_print_as_a_dash() {
        assert_eq!(fmt_opt(Some(25.25)), "25.2");
        assert_eq!(fmt_opt(None), "-");
    }
}
