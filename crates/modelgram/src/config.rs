//! Configuration types for Modelgram diagram generation.
//!
//! This module provides configuration structures that control what ends up
//! in a generated diagram. All types implement [`serde::Deserialize`] for
//! loading from external sources, and every field falls back to its default
//! when missing.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`RenderConfig`] - Title, legend and per-entity content toggles.
//! - [`FilterConfig`] - Which groups and models are drawn.
//! - [`ShareConfig`] - Where shareable URLs point to.
//!
//! # Example
//!
//! ```
//! # use modelgram::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.render().help());
//! assert!(config.render().choices());
//! assert_eq!(config.render().title_font_size(), 72);
//! assert!(config.filter().include().is_empty());
//! ```

use serde::{Deserialize, Deserializer};

use modelgram_core::color::Color;

/// Default `skinparam titleFontSize`.
pub const DEFAULT_TITLE_FONT_SIZE: u32 = 72;

/// Default column budget for documentation and help text.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Default background of choice-set blocks.
pub const DEFAULT_CHOICES_COLOR: &str = "#EEE";

/// Ancestor marking models generated by `django-simple-history`.
pub const DEFAULT_HISTORY_BASE: &str = "simple_history.models.HistoricalChanges";

/// Default PlantUML server endpoint for shareable URLs.
pub const DEFAULT_SHARE_BASE_URL: &str = "https://www.plantuml.com/plantuml/png/";

/// Top-level application configuration.
///
/// Groups [`RenderConfig`], [`FilterConfig`] and [`ShareConfig`] into a
/// single configuration root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Filter configuration section.
    #[serde(default)]
    filter: FilterConfig,

    /// Share configuration section.
    #[serde(default)]
    share: ShareConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(render: RenderConfig, filter: FilterConfig, share: ShareConfig) -> Self {
        Self {
            render,
            filter,
            share,
        }
    }

    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    pub fn share(&self) -> &ShareConfig {
        &self.share
    }

    /// Replaces the render section.
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Replaces the filter section.
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Replaces the share section.
    pub fn with_share(mut self, share: ShareConfig) -> Self {
        self.share = share;
        self
    }
}

/// What is drawn for each model and around the diagram.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Diagram title. No title block is emitted when unset.
    title: Option<String>,

    title_font_size: u32,

    /// Emit the block explaining the field signs.
    legend: bool,

    /// Emit model documentation and field help text.
    help: bool,

    /// Emit choice-set blocks and their cross references.
    choices: bool,

    /// Name choice sets `group.Entity_field` instead of `field`.
    namespace_choices: bool,

    /// Field names whose choices are never collected.
    skip_choice_fields: Vec<String>,

    /// Draw only entity headers, no field lines.
    headers_only: bool,

    /// Draw relations to models outside the filter; PlantUML then shows the
    /// targets as bare headers.
    omitted_headers: bool,

    wrap_width: usize,

    #[serde(deserialize_with = "deserialize_color")]
    choices_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: None,
            title_font_size: DEFAULT_TITLE_FONT_SIZE,
            legend: false,
            help: true,
            choices: true,
            namespace_choices: false,
            skip_choice_fields: Vec::new(),
            headers_only: false,
            omitted_headers: false,
            wrap_width: DEFAULT_WRAP_WIDTH,
            choices_color: Color::new(DEFAULT_CHOICES_COLOR)
                .expect("default choices color is a valid CSS color"),
        }
    }
}

impl RenderConfig {
    /// Returns the title, treating a blank title as unset.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.trim().is_empty())
    }

    pub fn title_font_size(&self) -> u32 {
        self.title_font_size
    }

    pub fn legend(&self) -> bool {
        self.legend
    }

    pub fn help(&self) -> bool {
        self.help
    }

    pub fn choices(&self) -> bool {
        self.choices
    }

    pub fn namespace_choices(&self) -> bool {
        self.namespace_choices
    }

    pub fn skip_choice_fields(&self) -> &[String] {
        &self.skip_choice_fields
    }

    /// Returns `true` if choices of `field` must not be collected.
    pub fn skips_choices_of(&self, field: &str) -> bool {
        self.skip_choice_fields.iter().any(|skipped| skipped == field)
    }

    pub fn headers_only(&self) -> bool {
        self.headers_only
    }

    pub fn omitted_headers(&self) -> bool {
        self.omitted_headers
    }

    pub fn wrap_width(&self) -> usize {
        self.wrap_width
    }

    pub fn choices_color(&self) -> Color {
        self.choices_color
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_title_font_size(mut self, size: u32) -> Self {
        self.title_font_size = size;
        self
    }

    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    pub fn with_help(mut self, help: bool) -> Self {
        self.help = help;
        self
    }

    pub fn with_choices(mut self, choices: bool) -> Self {
        self.choices = choices;
        self
    }

    pub fn with_namespace_choices(mut self, namespace_choices: bool) -> Self {
        self.namespace_choices = namespace_choices;
        self
    }

    pub fn with_skip_choice_fields(mut self, fields: Vec<String>) -> Self {
        self.skip_choice_fields = fields;
        self
    }

    pub fn with_headers_only(mut self, headers_only: bool) -> Self {
        self.headers_only = headers_only;
        self
    }

    pub fn with_omitted_headers(mut self, omitted_headers: bool) -> Self {
        self.omitted_headers = omitted_headers;
        self
    }

    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    pub fn with_choices_color(mut self, color: Color) -> Self {
        self.choices_color = color;
        self
    }
}

/// Which models end up in the diagram.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Groups to draw. Empty means every group.
    include: Vec<String>,

    /// Groups never drawn.
    omit: Vec<String>,

    /// Skip models generated to track another model's history.
    exclude_history: bool,

    /// Ancestor paths that mark a model as historical.
    history_bases: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            omit: Vec::new(),
            exclude_history: false,
            history_bases: vec![DEFAULT_HISTORY_BASE.to_string()],
        }
    }
}

impl FilterConfig {
    pub fn include(&self) -> &[String] {
        &self.include
    }

    pub fn omit(&self) -> &[String] {
        &self.omit
    }

    pub fn exclude_history(&self) -> bool {
        self.exclude_history
    }

    pub fn history_bases(&self) -> &[String] {
        &self.history_bases
    }

    pub fn with_include(mut self, include: Vec<String>) -> Self {
        self.include = include;
        self
    }

    pub fn with_omit(mut self, omit: Vec<String>) -> Self {
        self.omit = omit;
        self
    }

    pub fn with_exclude_history(mut self, exclude_history: bool) -> Self {
        self.exclude_history = exclude_history;
        self
    }

    pub fn with_history_bases(mut self, history_bases: Vec<String>) -> Self {
        self.history_bases = history_bases;
        self
    }
}

/// Shareable URL settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Prefix the encoded diagram is appended to.
    base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SHARE_BASE_URL.to_string(),
        }
    }
}

impl ShareConfig {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let color = String::deserialize(deserializer)?;
    Color::new(&color).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        let render = config.render();
        assert_eq!(render.title(), None);
        assert!(!render.legend());
        assert!(!render.namespace_choices());
        assert!(!render.headers_only());
        assert!(!render.omitted_headers());
        assert_eq!(render.wrap_width(), DEFAULT_WRAP_WIDTH);
        assert_eq!(render.choices_color().to_string(), "#eeeeee");

        let filter = config.filter();
        assert!(!filter.exclude_history());
        assert_eq!(filter.history_bases(), [DEFAULT_HISTORY_BASE]);

        assert_eq!(config.share().base_url(), DEFAULT_SHARE_BASE_URL);
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [render]
            title = "Library"
            help = false
            skip_choice_fields = ["status"]
            choices_color = "lightblue"

            [filter]
            omit = ["auth"]
            "#,
        )
        .unwrap();

        let render = config.render();
        assert_eq!(render.title(), Some("Library"));
        assert!(!render.help());
        assert!(render.choices());
        assert_eq!(render.title_font_size(), DEFAULT_TITLE_FONT_SIZE);
        assert!(render.skips_choices_of("status"));
        assert!(!render.skips_choices_of("kind"));
        assert_eq!(render.choices_color().to_string(), "#add8e6");

        assert_eq!(config.filter().omit(), ["auth"]);
        assert_eq!(config.filter().history_bases(), [DEFAULT_HISTORY_BASE]);
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let result = toml::from_str::<AppConfig>(
            r#"
            [render]
            choices_color = "not-a-color"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_builders() {
        let render = RenderConfig::default().with_choices_color(Color::from_rgb(0x12, 0x34, 0x56));
        let filter = FilterConfig::default().with_history_bases(vec!["audit.Trail".to_string()]);
        let share = ShareConfig::default().with_base_url("https://plantuml.example/svg/");

        let config = AppConfig::new(render, filter, share);

        assert_eq!(config.render().choices_color().to_string(), "#123456");
        assert_eq!(config.filter().history_bases(), ["audit.Trail"]);
        assert_eq!(config.share().base_url(), "https://plantuml.example/svg/");
    }

    #[test]
    fn test_blank_title_is_cleared() {
        let render = RenderConfig::default().with_title(Some("   ".to_string()));
        assert_eq!(render.title(), None);
    }
}
