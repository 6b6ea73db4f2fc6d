//! Condition code normalization

use crate::consts::CONDITIONS_MAP;

/// Map a provider symbol code to its canonical condition name
///
/// Scans the grouping table in declaration order; the first group
/// containing the code wins. A code outside every group passes through
/// unchanged; unknown codes are data, not errors.
#[must_use]
pub fn normalize_condition(code: &str) -> &str {
    for (canonical, codes) in CONDITIONS_MAP {
        if codes.contains(&code) {
            return canonical;
        }
    }
    code
}
