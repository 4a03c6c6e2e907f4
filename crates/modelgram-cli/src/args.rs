//! Command-line argument definitions for the Modelgram CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Besides input/output paths, configuration file selection
//! and logging verbosity, every rendering toggle can be overridden here on
//! top of the loaded configuration.

use clap::Parser;

use modelgram::config::{AppConfig, FilterConfig, RenderConfig};

/// Command-line arguments for the Modelgram diagram tool
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the model snapshot (TOML)
    #[arg(help = "Path to the model snapshot")]
    pub input: String,

    /// Path to the output PlantUML file
    #[arg(short, long, default_value = "models_diagram.puml")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Only draw models of these groups
    #[arg(long, num_args = 1..)]
    pub include: Vec<String>,

    /// Never draw models of these groups
    #[arg(long, num_args = 1..)]
    pub omit: Vec<String>,

    /// Field names whose choices are not drawn
    #[arg(long, num_args = 1..)]
    pub skip_choices: Vec<String>,

    /// Diagram title
    #[arg(long)]
    pub title: Option<String>,

    /// Font size of the diagram title
    #[arg(long)]
    pub title_font_size: Option<u32>,

    /// Print a PlantUML server URL for the diagram
    #[arg(long)]
    pub share: bool,

    /// Draw model documentation and field help text
    #[arg(long, overrides_with = "no_add_help")]
    pub add_help: bool,

    #[arg(long, overrides_with = "add_help", hide = true)]
    pub no_add_help: bool,

    /// Draw choice sets
    #[arg(long, overrides_with = "no_add_choices")]
    pub add_choices: bool,

    #[arg(long, overrides_with = "add_choices", hide = true)]
    pub no_add_choices: bool,

    /// Name choice sets after their model
    #[arg(long, overrides_with = "no_namespace_choices")]
    pub namespace_choices: bool,

    #[arg(long, overrides_with = "namespace_choices", hide = true)]
    pub no_namespace_choices: bool,

    /// Draw relations to models outside the filter
    #[arg(long, overrides_with = "no_add_omitted_headers")]
    pub add_omitted_headers: bool,

    #[arg(long, overrides_with = "add_omitted_headers", hide = true)]
    pub no_add_omitted_headers: bool,

    /// Draw only model headers
    #[arg(long, overrides_with = "no_headers_only")]
    pub headers_only: bool,

    #[arg(long, overrides_with = "headers_only", hide = true)]
    pub no_headers_only: bool,

    /// Skip historical models
    #[arg(long, overrides_with = "no_exclude_history")]
    pub exclude_history: bool,

    #[arg(long, overrides_with = "exclude_history", hide = true)]
    pub no_exclude_history: bool,

    /// Draw the block explaining the field signs
    #[arg(long, overrides_with = "no_add_legend")]
    pub add_legend: bool,

    #[arg(long, overrides_with = "add_legend", hide = true)]
    pub no_add_legend: bool,
}

/// Resolves a `--flag/--no-flag` pair; `None` when neither was given.
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Args {
    /// Applies the command-line overrides on top of `config`.
    pub fn apply_overrides(&self, config: AppConfig) -> AppConfig {
        let render = self.render_overrides(config.render().clone());
        let filter = self.filter_overrides(config.filter().clone());
        config.with_render(render).with_filter(filter)
    }

    fn render_overrides(&self, mut render: RenderConfig) -> RenderConfig {
        if let Some(title) = &self.title {
            render = render.with_title(Some(title.clone()));
        }
        if let Some(size) = self.title_font_size {
            render = render.with_title_font_size(size);
        }
        if !self.skip_choices.is_empty() {
            render = render.with_skip_choice_fields(self.skip_choices.clone());
        }
        if let Some(help) = toggle(self.add_help, self.no_add_help) {
            render = render.with_help(help);
        }
        if let Some(choices) = toggle(self.add_choices, self.no_add_choices) {
            render = render.with_choices(choices);
        }
        if let Some(namespace) = toggle(self.namespace_choices, self.no_namespace_choices) {
            render = render.with_namespace_choices(namespace);
        }
        if let Some(omitted) = toggle(self.add_omitted_headers, self.no_add_omitted_headers) {
            render = render.with_omitted_headers(omitted);
        }
        if let Some(headers_only) = toggle(self.headers_only, self.no_headers_only) {
            render = render.with_headers_only(headers_only);
        }
        if let Some(legend) = toggle(self.add_legend, self.no_add_legend) {
            render = render.with_legend(legend);
        }
        render
    }

    fn filter_overrides(&self, mut filter: FilterConfig) -> FilterConfig {
        if !self.include.is_empty() {
            filter = filter.with_include(self.include.clone());
        }
        if !self.omit.is_empty() {
            filter = filter.with_omit(self.omit.clone());
        }
        if let Some(exclude) = toggle(self.exclude_history, self.no_exclude_history) {
            filter = filter.with_exclude_history(exclude);
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("modelgram").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["models.toml"]);
        assert_eq!(args.input, "models.toml");
        assert_eq!(args.output, "models_diagram.puml");
        assert_eq!(args.log_level, "info");
        assert!(!args.share);

        let config = args.apply_overrides(AppConfig::default());
        assert!(config.render().help());
        assert!(config.render().choices());
        assert!(!config.render().legend());
    }

    #[test]
    fn test_toggle_pairs() {
        let config = parse(&["m.toml", "--no-add-help", "--headers-only", "--add-legend"])
            .apply_overrides(AppConfig::default());
        assert!(!config.render().help());
        assert!(config.render().headers_only());
        assert!(config.render().legend());
    }

    #[test]
    fn test_last_toggle_wins() {
        let args = parse(&["m.toml", "--add-choices", "--no-add-choices"]);
        assert_eq!(toggle(args.add_choices, args.no_add_choices), Some(false));

        let args = parse(&["m.toml", "--no-add-choices", "--add-choices"]);
        assert_eq!(toggle(args.add_choices, args.no_add_choices), Some(true));
    }

    #[test]
    fn test_absent_toggle_keeps_config() {
        let base = AppConfig::default().with_render(RenderConfig::default().with_help(false));
        let config = parse(&["m.toml"]).apply_overrides(base);
        assert!(!config.render().help());
    }

    #[test]
    fn test_lists_and_values() {
        let config = parse(&[
            "m.toml",
            "--include",
            "shop",
            "billing",
            "--skip-choices",
            "status",
            "--title",
            "Shop",
            "--title-font-size",
            "40",
            "--exclude-history",
        ])
        .apply_overrides(AppConfig::default());

        assert_eq!(config.filter().include(), ["shop", "billing"]);
        assert!(config.filter().exclude_history());
        assert!(config.render().skips_choices_of("status"));
        assert_eq!(config.render().title(), Some("Shop"));
        assert_eq!(config.render().title_font_size(), 40);
    }
}
