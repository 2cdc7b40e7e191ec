use crate::commands::{CmdMessage, CmdResult};
use crate::config::{self, RandnoteConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// The effective configuration, after files, environment and flags.
    Show,
    /// A commented `randnote.toml` with every default.
    Gen,
}

pub fn run(config: &RandnoteConfig, action: ConfigAction) -> CmdResult {
    match action {
        ConfigAction::Show => {
            let mut result = CmdResult::default().with_config(config.clone());
            for (key, value) in config.entries() {
                result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            }
            result
        }
        ConfigAction::Gen => CmdResult {
            template: Some(config::template()),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::FilterMode;

    #[test]
    fn show_lists_every_key() {
        let config = RandnoteConfig {
            journal_mode: FilterMode::Only,
            header_block: "Random".to_string(),
            ..Default::default()
        };
        let result = run(&config, ConfigAction::Show);

        assert_eq!(result.config.as_ref(), Some(&config));
        assert_eq!(result.messages.len(), 8);
        assert_eq!(result.messages[0].content, "count = 1");
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "journal_mode = only"));
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "header_block = \"Random\""));
    }

    #[test]
    fn gen_returns_template() {
        let result = run(&RandnoteConfig::default(), ConfigAction::Gen);
        let template = result.template.unwrap();
        assert!(template.contains("sort_pages"));
        assert!(result.messages.is_empty());
    }
}
