//! Demo conversation script model so the canned call plays the same everywhere.
//!
//! The built-in script is the nine-line appointment-booking conversation the
//! landing page ships with. Users can swap it for their own via `--script`,
//! pointing at a TOML or JSON file with the same shape as `--dump-script`
//! output.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Who delivers a scripted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Agent,
}

impl Speaker {
    /// Short label shown in front of a transcript entry.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Agent => "AI",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One scripted line of the canned conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueTurn {
    pub speaker: Speaker,
    pub text: String,
    pub emotion: String,
    pub tone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_style: Option<String>,
}

impl DialogueTurn {
    /// Join the emotion/tone/voice-style labels for display under the entry.
    #[must_use]
    pub fn annotation(&self, sep: &str) -> String {
        let mut parts = vec![self.emotion.as_str(), self.tone.as_str()];
        if let Some(style) = self.voice_style.as_deref() {
            parts.push(style);
        }
        parts.join(sep)
    }
}

/// Ordered demo conversation plus a display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoScript {
    pub title: String,
    pub turns: Vec<DialogueTurn>,
}

impl DemoScript {
    /// The conversation the landing page ships with.
    #[must_use]
    pub fn builtin() -> Self {
        fn agent(text: &str, emotion: &str, tone: &str) -> DialogueTurn {
            DialogueTurn {
                speaker: Speaker::Agent,
                text: text.to_string(),
                emotion: emotion.to_string(),
                tone: tone.to_string(),
                voice_style: Some("Nova".to_string()),
            }
        }
        fn user(text: &str, emotion: &str, tone: &str) -> DialogueTurn {
            DialogueTurn {
                speaker: Speaker::User,
                text: text.to_string(),
                emotion: emotion.to_string(),
                tone: tone.to_string(),
                voice_style: None,
            }
        }

        Self {
            title: "Appointment scheduling".to_string(),
            turns: vec![
                agent(
                    "Hello! I'm your AI assistant. How can I help you today?",
                    "friendly",
                    "warm",
                ),
                user("I'd like to schedule an appointment.", "neutral", "direct"),
                agent(
                    "I'd be happy to help you schedule an appointment. What type of service are you looking for?",
                    "helpful",
                    "upbeat",
                ),
                user("I need a consultation for next week.", "hopeful", "casual"),
                agent(
                    "Perfect! Let me check available slots for next week. I have openings on Tuesday at 2 PM, Wednesday at 10 AM, or Friday at 3 PM. Which works best for you?",
                    "confident",
                    "efficient",
                ),
                user("Tuesday at 2 PM sounds good.", "satisfied", "decisive"),
                agent(
                    "Excellent! I've scheduled your consultation for Tuesday at 2 PM. You'll receive a confirmation email shortly. Is there anything else I can help you with?",
                    "pleased",
                    "reassuring",
                ),
                user("No, that's all. Thank you!", "grateful", "polite"),
                agent(
                    "You're welcome! Have a great day and we'll see you on Tuesday!",
                    "cheerful",
                    "warm",
                ),
            ],
        }
    }

    /// Number of turns in the script.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Reject scripts the sequencer cannot play.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty turn list or a turn with blank text.
    pub fn validate(&self) -> Result<()> {
        if self.turns.is_empty() {
            bail!("demo script has no turns");
        }
        for (idx, turn) in self.turns.iter().enumerate() {
            if turn.text.trim().is_empty() {
                bail!("demo script turn {idx} has empty text");
            }
        }
        Ok(())
    }

    /// Load and validate a script file; the format follows the extension.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, the extension is not
    /// `.toml`/`.json`, the document does not parse, or validation fails.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read script file {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let script: Self = match ext.as_str() {
            "toml" => toml::from_str(&raw)
                .with_context(|| format!("invalid TOML script {}", path.display()))?,
            "json" => serde_json::from_str(&raw)
                .with_context(|| format!("invalid JSON script {}", path.display()))?,
            other => bail!("unsupported script extension '{other}' (expected .toml or .json)"),
        };
        script
            .validate()
            .with_context(|| format!("script {} failed validation", path.display()))?;
        Ok(script)
    }

    /// Render the script as TOML, the format `--dump-script` prints.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (it cannot for valid scripts).
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize script as TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn builtin_script_has_nine_alternating_turns() {
        let script = DemoScript::builtin();
        assert_eq!(script.turn_count(), 9);
        assert_eq!(script.turns[0].speaker, Speaker::Agent);
        for pair in script.turns.windows(2) {
            assert_ne!(pair[0].speaker, pair[1].speaker, "speakers must alternate");
        }
        assert!(script.validate().is_ok());
    }

    #[test]
    fn builtin_agent_turns_carry_a_voice_style() {
        let script = DemoScript::builtin();
        for turn in &script.turns {
            match turn.speaker {
                Speaker::Agent => assert!(turn.voice_style.is_some()),
                Speaker::User => assert!(turn.voice_style.is_none()),
            }
        }
    }

    #[test]
    fn speaker_labels() {
        assert_eq!(Speaker::User.label(), "User");
        assert_eq!(Speaker::Agent.label(), "AI");
        assert_eq!(Speaker::Agent.to_string(), "AI");
    }

    #[test]
    fn annotation_joins_labels_and_optional_voice_style() {
        let script = DemoScript::builtin();
        assert_eq!(script.turns[0].annotation(" · "), "friendly · warm · Nova");
        assert_eq!(script.turns[1].annotation(" / "), "neutral / direct");
    }

    #[test]
    fn validate_rejects_empty_turn_list() {
        let script = DemoScript {
            title: "empty".to_string(),
            turns: Vec::new(),
        };
        let err = script.validate().expect_err("empty script must fail");
        assert!(err.to_string().contains("no turns"));
    }

    #[test]
    fn validate_rejects_blank_turn_text() {
        let mut script = DemoScript::builtin();
        script.turns[3].text = "   ".to_string();
        let err = script.validate().expect_err("blank text must fail");
        assert!(err.to_string().contains("turn 3"));
    }

    #[test]
    fn toml_dump_round_trips_through_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("script.toml");
        let script = DemoScript::builtin();
        fs::write(&path, script.to_toml().expect("dump")).expect("write script");
        let loaded = DemoScript::load(&path).expect("load dumped script");
        assert_eq!(loaded, script);
    }

    #[test]
    fn json_scripts_load_by_extension() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("script.json");
        let script = DemoScript::builtin();
        let json = serde_json::to_string(&script).expect("json dump");
        fs::write(&path, json).expect("write script");
        let loaded = DemoScript::load(&path).expect("load json script");
        assert_eq!(loaded, script);
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("script.yaml");
        fs::write(&path, "title = \"x\"").expect("write script");
        let err = DemoScript::load(&path).expect_err("yaml must be rejected");
        assert!(err.to_string().contains("unsupported script extension"));
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let err = DemoScript::load(Path::new("/nonexistent/callpitch-script.toml"))
            .expect_err("missing file must fail");
        assert!(format!("{err:#}").contains("callpitch-script.toml"));
    }

    #[test]
    fn load_rejects_invalid_script_content() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("script.toml");
        fs::write(&path, "title = \"t\"\nturns = []\n").expect("write script");
        let err = DemoScript::load(&path).expect_err("empty turns must fail");
        assert!(format!("{err:#}").contains("no turns"));
    }
}
