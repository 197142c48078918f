//! HTML hook chain.
//!
//! Plugins are invoked in registration order, one at a time, each receiving
//! the same mutable [`HtmlGenerationContext`]. A plugin must only touch the
//! parts of the context that belong to its own concern.

use std::borrow::Cow;
use std::fmt;
use std::ops::BitOr;
use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::compilation::Compilation;
use crate::html::HtmlGenerationContext;
use crate::{Error, Result};

/// Version of the hook contract implemented by this crate.
///
/// Plugins built against a different contract are rejected at registration.
pub const HOOK_API_VERSION: u32 = 1;

/// Set of hooks a plugin subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HookUsage(u8);

impl HookUsage {
    pub const ALTER_ASSET_TAGS: Self = Self(1);
    pub const AFTER_HTML_PROCESSING: Self = Self(1 << 1);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::ALTER_ASSET_TAGS.0 | Self::AFTER_HTML_PROCESSING.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for HookUsage {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A plugin taking part in HTML generation.
pub trait HtmlPlugin: fmt::Debug + Send + Sync {
    /// Returns the plugin name for debugging and logging
    fn name(&self) -> Cow<'static, str>;

    /// Declare which hooks this plugin uses.
    ///
    /// Only declared hooks are invoked.
    fn hook_usage(&self) -> HookUsage;

    /// Hook contract the plugin was written against.
    fn api_version(&self) -> u32 {
        HOOK_API_VERSION
    }

    /// Runs before the template is rendered. Plugins may add, remove, or edit
    /// entries of `ctx.tags`.
    fn alter_asset_tags(
        &self,
        _ctx: &mut HtmlGenerationContext,
        _compilation: &Compilation,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs after the template is rendered. Plugins may rewrite `ctx.html`.
    fn after_html_processing(
        &self,
        _ctx: &mut HtmlGenerationContext,
        _compilation: &Compilation,
    ) -> anyhow::Result<()> {
        Ok(())
    }
}

pub type SharedHtmlPlugin = Arc<dyn HtmlPlugin>;

/// Ordered list of registered plugins.
#[derive(Debug, Clone, Default)]
pub struct HtmlHooks {
    plugins: Vec<SharedHtmlPlugin>,
}

impl HtmlHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plugin to the end of the chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Registration`] if the plugin subscribes to no hook or
    /// targets a different hook contract.
    pub fn register<P: HtmlPlugin + 'static>(&mut self, plugin: P) -> Result<()> {
        self.register_shared(Arc::new(plugin))
    }

    pub fn register_shared(&mut self, plugin: SharedHtmlPlugin) -> Result<()> {
        if plugin.api_version() != HOOK_API_VERSION {
            return Err(Error::Registration {
                plugin: plugin.name().into_owned(),
                reason: format!(
                    "plugin targets hook API v{}, but this compiler provides v{}",
                    plugin.api_version(),
                    HOOK_API_VERSION
                ),
            });
        }

        if plugin.hook_usage().is_empty() {
            return Err(Error::Registration {
                plugin: plugin.name().into_owned(),
                reason: "plugin does not subscribe to any HTML hook".to_string(),
            });
        }

        debug!(plugin = %plugin.name(), position = self.plugins.len(), "registered plugin");
        self.plugins.push(plugin);
        Ok(())
    }

    pub fn plugin_names(&self) -> Vec<Cow<'static, str>> {
        self.plugins.iter().map(|plugin| plugin.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn run_alter_asset_tags(
        &self,
        ctx: &mut HtmlGenerationContext,
        compilation: &Compilation,
    ) -> Result<()> {
        self.run(HookUsage::ALTER_ASSET_TAGS, ctx, compilation, |plugin, ctx, compilation| {
            plugin.alter_asset_tags(ctx, compilation)
        })
    }

    pub fn run_after_html_processing(
        &self,
        ctx: &mut HtmlGenerationContext,
        compilation: &Compilation,
    ) -> Result<()> {
        self.run(
            HookUsage::AFTER_HTML_PROCESSING,
            ctx,
            compilation,
            |plugin, ctx, compilation| plugin.after_html_processing(ctx, compilation),
        )
    }

    fn run<F>(
        &self,
        hook: HookUsage,
        ctx: &mut HtmlGenerationContext,
        compilation: &Compilation,
        call: F,
    ) -> Result<()>
    where
        F: Fn(&dyn HtmlPlugin, &mut HtmlGenerationContext, &Compilation) -> anyhow::Result<()>,
    {
        for plugin in self.plugins.iter().filter(|p| p.hook_usage().contains(hook)) {
            let name = plugin.name();
            let _span = debug_span!("html_hook", plugin = %name, page = %ctx.page).entered();

            call(plugin.as_ref(), ctx, compilation).map_err(|err| Error::Plugin {
                plugin: name.to_string(),
                message: format!("{:#}", err),
            })?;
        }
        Ok(())
    }
}
