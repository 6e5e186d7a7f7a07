//! Analysis modes — the three fixed request intents and their prompt pairs.

use serde::{Deserialize, Serialize};

use crate::analysis::prompts;

/// A request intent. Selects the prompt template pair and the reply shape
/// the client renders (object for `parse`/`careerPath`, array for `recommend`).
///
/// Closed at the wire boundary: an unrecognized `action` string is rejected
/// during deserialization rather than producing an empty prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisMode {
    Parse,
    Recommend,
    CareerPath,
}

/// The system instruction and user content sent to the gateway for one call.
#[derive(Debug, Clone)]
pub struct PromptPair {
    pub system: &'static str,
    pub user: String,
}

impl AnalysisMode {
    /// Builds the fixed prompt pair for this mode around the pasted resume.
    pub fn prompt_pair(&self, resume_text: &str) -> PromptPair {
        let (system, user_template) = match self {
            AnalysisMode::Parse => (prompts::PARSE_SYSTEM, prompts::PARSE_USER_TEMPLATE),
            AnalysisMode::Recommend => (prompts::RECOMMEND_SYSTEM, prompts::RECOMMEND_USER_TEMPLATE),
            AnalysisMode::CareerPath => {
                (prompts::CAREER_PATH_SYSTEM, prompts::CAREER_PATH_USER_TEMPLATE)
            }
        };

        PromptPair {
            system,
            user: user_template.replace("{resume_text}", resume_text),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Parse => "parse",
            AnalysisMode::Recommend => "recommend",
            AnalysisMode::CareerPath => "careerPath",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\njane@example.com\nRust engineer, 3 years.";

    #[test]
    fn test_mode_wire_names_round_trip() {
        for (mode, wire) in [
            (AnalysisMode::Parse, r#""parse""#),
            (AnalysisMode::Recommend, r#""recommend""#),
            (AnalysisMode::CareerPath, r#""careerPath""#),
        ] {
            assert_eq!(serde_json::to_string(&mode).unwrap(), wire);
            let recovered: AnalysisMode = serde_json::from_str(wire).unwrap();
            assert_eq!(recovered, mode);
        }
    }

    #[test]
    fn test_as_str_matches_wire_name() {
        for mode in [
            AnalysisMode::Parse,
            AnalysisMode::Recommend,
            AnalysisMode::CareerPath,
        ] {
            let wire = serde_json::to_string(&mode).unwrap();
            assert_eq!(wire, format!("\"{}\"", mode.as_str()));
        }
    }

    #[test]
    fn test_unknown_action_fails_deserialization() {
        let result: Result<AnalysisMode, _> = serde_json::from_str(r#""summarize""#);
        assert!(result.is_err(), "unknown action strings must be rejected");
    }

    #[test]
    fn test_action_is_case_sensitive() {
        let result: Result<AnalysisMode, _> = serde_json::from_str(r#""CareerPath""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_every_mode_builds_nonempty_system_prompt() {
        for mode in [
            AnalysisMode::Parse,
            AnalysisMode::Recommend,
            AnalysisMode::CareerPath,
        ] {
            let pair = mode.prompt_pair(RESUME);
            assert!(!pair.system.trim().is_empty(), "{mode:?} system prompt empty");
        }
    }

    #[test]
    fn test_every_mode_embeds_literal_resume_text() {
        for mode in [
            AnalysisMode::Parse,
            AnalysisMode::Recommend,
            AnalysisMode::CareerPath,
        ] {
            let pair = mode.prompt_pair(RESUME);
            assert!(
                pair.user.contains(RESUME),
                "{mode:?} user prompt must carry the pasted resume verbatim"
            );
        }
    }

    #[test]
    fn test_modes_use_distinct_system_prompts() {
        let parse = AnalysisMode::Parse.prompt_pair(RESUME).system;
        let recommend = AnalysisMode::Recommend.prompt_pair(RESUME).system;
        let career = AnalysisMode::CareerPath.prompt_pair(RESUME).system;
        assert_ne!(parse, recommend);
        assert_ne!(recommend, career);
        assert_ne!(parse, career);
    }

    #[test]
    fn test_recommend_prompt_names_the_expected_array_shape() {
        let pair = AnalysisMode::Recommend.prompt_pair(RESUME);
        assert!(pair.system.contains("JSON array"));
        assert!(pair.system.contains("matchScore"));
    }

    #[test]
    fn test_career_path_prompt_names_roadmap_fields() {
        let pair = AnalysisMode::CareerPath.prompt_pair(RESUME);
        for field in [
            "currentLevel",
            "targetRoles",
            "immediateActions",
            "skillsToLearn",
            "certifications",
            "timeline",
            "industryTrends",
        ] {
            assert!(pair.system.contains(field), "missing roadmap field {field}");
        }
    }
}
