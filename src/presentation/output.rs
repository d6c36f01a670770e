//! Output Rendering
//!
//! Machine-readable payloads shared by the CLI's `--json` mode and any other
//! front end that wants the same shape.

use serde_json::{json, Value};

use crate::format::format_currency;
use crate::models::Projection;

/// `projection` event: inputs, results, split and formatted strings
pub fn projection_event(projection: &Projection, summary: &str) -> Value {
    let currency = projection.input.currency;
    json!({
        "event": "projection",
        "input": projection.input,
        "final_value": projection.result.final_value,
        "total_interest": projection.result.total_interest,
        "series": projection.result.series,
        "breakdown": projection.breakdown,
        "formatted": {
            "final_value": format_currency(projection.result.final_value, currency),
            "total_interest": format_currency(projection.result.total_interest, currency),
            "principal": format_currency(projection.breakdown.principal, currency),
        },
        "summary": summary,
    })
}
