//! Venue identity-document policy detection.
//!
//! The real-name policy of a venue only appears as free text inside the
//! project description, so the order flow has to substring-match the known
//! policy phrases. Matching is locale dependent; when neither marker is
//! present the order falls back to the plain buyer/tel payload shape even
//! if the venue would actually reject it. The upstream exposes no
//! structured flag to replace this with.

use serde_json::Value;

/// "one person, one ID" policy marker.
const ONE_PERSON_ONE_ID: &str = "一人一证";
/// "one order, one ID" policy marker.
const ONE_ORDER_ONE_ID: &str = "一单一证";

/// Whether a policy description demands identity-document buyer data.
#[must_use]
pub fn requires_identity_document(content: &str) -> bool {
    content.contains(ONE_PERSON_ONE_ID) || content.contains(ONE_ORDER_ONE_ID)
}

/// Scan a raw project payload for the policy markers.
///
/// Looks at the `details` of the `base_info` module inside
/// `performance_desc.list`. Any missing level means no marker was found.
#[must_use]
pub fn project_requires_identity_document(project: &Value) -> bool {
    let Some(modules) = project["performance_desc"]["list"].as_array() else {
        return false;
    };
    let Some(base_info) = modules
        .iter()
        .find(|module| module["module"].as_str() == Some("base_info"))
    else {
        return false;
    };
    let Some(details) = base_info["details"].as_array() else {
        return false;
    };

    details
        .iter()
        .any(|detail| detail["content"].as_str().is_some_and(requires_identity_document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_marker_matching() {
        assert!(requires_identity_document("本项目实行一人一证购票"));
        assert!(requires_identity_document("一单一证，请携带证件入场"));
        assert!(!requires_identity_document("需实名登记"));
        assert!(!requires_identity_document(""));
    }

    fn project_with_content(content: &str) -> Value {
        json!({
            "performance_desc": {
                "list": [
                    {"module": "banner", "details": []},
                    {"module": "base_info", "details": [
                        {"content": "演出时长约120分钟"},
                        {"content": content}
                    ]}
                ]
            }
        })
    }

    #[test]
    fn test_project_scan_finds_marker_in_base_info() {
        assert!(project_requires_identity_document(&project_with_content(
            "本项目一人一证入场"
        )));
        assert!(!project_requires_identity_document(&project_with_content(
            "无特殊要求"
        )));
    }

    #[test]
    fn test_project_scan_ignores_other_modules() {
        let project = json!({
            "performance_desc": {
                "list": [
                    {"module": "notice", "details": [{"content": "一人一证"}]}
                ]
            }
        });
        assert!(!project_requires_identity_document(&project));
    }

    #[test]
    fn test_project_scan_tolerates_missing_structure() {
        assert!(!project_requires_identity_document(&json!({})));
        assert!(!project_requires_identity_document(&json!({
            "performance_desc": {"list": [{"module": "base_info"}]}
        })));
    }
}
