use crate::value::Value;

pub const DIFF_CASES: &str = include_str!("diff_cases.json");

pub struct DiffCase {
    pub comment: String,
    pub old: Option<Value>,
    pub new: Option<Value>,
    /// Records in serialized form; cases without it only feed the
    /// property checks.
    pub expected: Option<serde_json::Value>,
}

pub fn load_diff_cases() -> Vec<DiffCase> {
    let cases: Vec<serde_json::Value> =
        serde_json::from_str(DIFF_CASES).expect("Failed to parse diff cases");

    cases
        .into_iter()
        .filter(|case| !is_disabled(case))
        .map(|case| DiffCase {
            comment: case
                .get("comment")
                .and_then(|c| c.as_str())
                .map(|s| s.to_owned())
                .expect("Diff case missing 'comment' field"),
            old: case.get("old").cloned().map(Value::from),
            new: case.get("new").cloned().map(Value::from),
            expected: case.get("expected").cloned(),
        })
        .collect()
}

fn is_disabled(case: &serde_json::Value) -> bool {
    case.get("disabled").and_then(|d| d.as_bool()).unwrap_or(false)
}
