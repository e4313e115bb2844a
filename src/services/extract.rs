use serde_json::Value;

use crate::error::{PlannerError, Result};

/// Extract the first balanced JSON object from raw model output.
///
/// Models sometimes wrap the payload in prose despite instructions, so the
/// substring from the first `{` to the last `}` is treated as the full
/// payload. Fails with [`PlannerError::MalformedResponse`] when no brace
/// pair exists or the substring does not decode. Never retried here: a
/// malformed body is a deterministic model output, not a transport fault.
pub fn extract_json(raw: &str) -> Result<Value> {
    let text = raw.trim();
    let start = text.find('{');
    let end = text.rfind('}');

    let slice = match (start, end) {
        (Some(i), Some(j)) if j > i => &text[i..=j],
        _ => {
            return Err(PlannerError::MalformedResponse(
                "no JSON object found in model output".to_string(),
            ))
        }
    };

    serde_json::from_str(slice)
        .map_err(|err| PlannerError::MalformedResponse(format!("invalid JSON payload: {err}")))
}
