use anyhow::Result;
use chatmark_config::{Config, OutputFormat};
use chatmark_engine::{OutputNode, TextStyle, to_plain_text};

/// Maps the configured presentation options onto the engine's text style.
pub fn text_style(config: &Config) -> TextStyle {
    TextStyle {
        bullet: config.bullet.clone(),
        rule_width: config.rule_width,
        quote_prefix: config.quote_prefix.clone(),
    }
}

/// Renders nodes in the requested format.
pub fn render_output(nodes: &[OutputNode], format: OutputFormat, config: &Config) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => to_plain_text(nodes, &text_style(config)),
        OutputFormat::Json => serde_json::to_string_pretty(nodes)?,
    };
    Ok(rendered)
}
