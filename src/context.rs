use crate::{config::Config, dispatch::Registry, platform::Platform};

/// Collection of data that is shared by every command invocation
pub struct Context<'a> {
    pub cfg: &'a Config,
    pub platform: &'a dyn Platform,
    pub registry: &'a Registry,
}

/// Many Serenity functions take a `impl CacheHttp` in order to first check the cache if the item
/// is available and fall back to an http request otherwise.  The most readily available type that
/// impl's this is named very differently in a way that could be confusing, and so we alias it.
pub type CacheHttp = serenity::all::Context;
